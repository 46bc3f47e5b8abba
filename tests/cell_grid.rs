mod common;

use assert_approx_eq::assert_approx_eq;
use common::{
    check_cell_grid_invariants, disk_boundaries, polygon_boundaries,
    unit_square_boundaries,
};
use tessella::{
    CellGrid, CellGridParameters, GridKind, GridParameters, HasPosition,
    Position, Vector,
};

fn square_parameters(threshold_area: f64) -> CellGridParameters {
    CellGridParameters {
        grid: GridParameters {
            size: Vector::new(0.3, 0.3),
            ..GridParameters::default()
        },
        threshold_area,
    }
}

#[test]
fn test_unit_square_threshold_zero() {
    let grid =
        CellGrid::new(square_parameters(0.0), &unit_square_boundaries())
            .unwrap();
    // A 3x3 block of complete cells, surrounded by a ring of 16 clipped
    // cells that the zero threshold retains
    assert_eq!(grid.points().len(), 32);
    assert_eq!(grid.faces().len(), 56);
    assert_eq!(grid.cells().len(), 25);
    check_cell_grid_invariants(&grid);

    // Each ring cell closes its polygon with one irregular face
    let irregular =
        grid.faces().iter().filter(|face| face.is_irregular()).count();
    assert_eq!(irregular, 16);

    // The clipped mesh covers the domain except the four chord-cut corner
    // slivers: 1.0 - 4 * (0.05 * 0.05 / 2)
    let total: f64 = grid.cells().iter().map(|cell| cell.area()).sum();
    assert_approx_eq!(total, 0.995, 1e-9);

    // Boundary points inherit the inward-oriented boundary normals
    for point in grid.points() {
        match point.boundary() {
            Some(_) => {
                assert!((point.normal().norm() - 1.0).abs() < 1e-9);
                assert!(point.normal().dot(point.coord()) < 0.0);
            }
            None => assert_eq!(point.normal(), Vector::ZERO),
        }
    }
}

#[test]
fn test_unit_square_high_thresholds() {
    // The ring cells retain at most 1/6 of the nominal area, so both 0.5
    // and 1.0 drop the entire ring
    for threshold_area in [0.5, 1.0] {
        let grid = CellGrid::new(
            square_parameters(threshold_area),
            &unit_square_boundaries(),
        )
        .unwrap();
        assert_eq!(grid.points().len(), 16);
        assert_eq!(grid.faces().len(), 24);
        assert_eq!(grid.cells().len(), 9);
        check_cell_grid_invariants(&grid);

        for cell in grid.cells() {
            assert_approx_eq!(cell.area(), 0.09, 1e-12);
            // No clipped cells survive, so no irregular faces either
            for side in cell.sides() {
                assert!(!grid.face(side.face).is_irregular());
            }
        }

        // The dropped ring cells bequeath their boundary hits to the eight
        // outer complete cells; only the center stays untouched
        let with_boundary = grid
            .cells()
            .iter()
            .filter(|cell| cell.boundary().is_some())
            .count();
        assert_eq!(with_boundary, 8);
        let center = grid.cell_at(Position::ORIGIN).unwrap();
        assert_eq!(grid.cell(center).boundary(), None);
    }
}

#[test]
fn test_disk_thresholds() {
    // Golden counts for the unit disk: 21 complete interior cells, plus a
    // clipped fringe whose survival depends on the threshold
    let expectations = [(0.0, 45), (0.5, 37), (1.0, 21)];
    for (threshold_area, expected) in expectations {
        let grid =
            CellGrid::new(square_parameters(threshold_area), &disk_boundaries())
                .unwrap();
        assert_eq!(
            grid.cells().len(),
            expected,
            "disk cell count at threshold {threshold_area}"
        );
        check_cell_grid_invariants(&grid);
    }

    // Raising the threshold never increases the cell count
    let mut previous = usize::MAX;
    for threshold_area in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let grid =
            CellGrid::new(square_parameters(threshold_area), &disk_boundaries())
                .unwrap();
        assert!(grid.cells().len() <= previous);
        previous = grid.cells().len();
    }
}

#[test]
fn test_diamond_slivers() {
    // A diamond whose vertices lie exactly on the lattice edges of four
    // cells sharing one corner: at threshold 0 each cell keeps a triangular
    // sliver and the mesh covers the diamond exactly
    let boundaries = polygon_boundaries(&[
        Vector::new(0.4, 0.0),
        Vector::new(0.0, -0.4),
        Vector::new(-0.4, 0.0),
        Vector::new(0.0, 0.4),
    ]);
    let parameters = CellGridParameters {
        grid: GridParameters {
            origin: Vector::new(0.5, 0.5),
            ..GridParameters::default()
        },
        threshold_area: 0.0,
    };
    let grid = CellGrid::new(parameters, &boundaries).unwrap();
    assert_eq!(grid.cells().len(), 4);
    assert_eq!(grid.points().len(), 5);
    assert_eq!(grid.faces().len(), 8);
    check_cell_grid_invariants(&grid);

    let irregular =
        grid.faces().iter().filter(|face| face.is_irregular()).count();
    assert_eq!(irregular, 4);

    let total: f64 = grid.cells().iter().map(|cell| cell.area()).sum();
    assert_approx_eq!(total, 0.32, 1e-12);

    // At threshold 1 nothing survives, but that is not an error
    let parameters = CellGridParameters {
        threshold_area: 1.0,
        ..parameters
    };
    let grid = CellGrid::new(parameters, &boundaries).unwrap();
    assert!(grid.cells().is_empty());
    assert!(grid.points().is_empty());
    assert!(grid.faces().is_empty());
}

#[test]
fn test_triangular_tiling() {
    let parameters = CellGridParameters {
        grid: GridParameters {
            kind: GridKind::Triangular,
            size: Vector::new(0.1, 0.1),
            ..GridParameters::default()
        },
        threshold_area: 0.5,
    };
    let grid =
        CellGrid::new(parameters, &unit_square_boundaries()).unwrap();
    check_cell_grid_invariants(&grid);

    // Triangles alternate orientation
    assert!(grid.cells().iter().any(|cell| cell.position().upside_down));
    assert!(grid.cells().iter().any(|cell| !cell.position().upside_down));
    // Unclipped triangles keep their 3 corners; clipped ones may gain
    // boundary points but never fall below 3
    assert!(grid.cells().iter().all(|cell| cell.sides().len() >= 3));
}

#[test]
fn test_triangular_cell_point_ratio() {
    // Each interior point is shared by 6 triangles of 3 corners each, so
    // the cells:points ratio tends to 2 from below as the domain grows and
    // the boundary fringe loses weight
    let ratio_for = |half_width: f64| {
        let boundaries = polygon_boundaries(&[
            Vector::new(half_width, half_width),
            Vector::new(half_width, -half_width),
            Vector::new(-half_width, -half_width),
            Vector::new(-half_width, half_width),
        ]);
        let parameters = CellGridParameters {
            grid: GridParameters {
                kind: GridKind::Triangular,
                size: Vector::new(0.25, 0.25),
                ..GridParameters::default()
            },
            threshold_area: 0.5,
        };
        let grid = CellGrid::new(parameters, &boundaries).unwrap();
        grid.cells().len() as f64 / grid.points().len() as f64
    };
    let small = ratio_for(1.0);
    let medium = ratio_for(2.5);
    let large = ratio_for(6.0);
    assert!(
        small < medium && medium < large,
        "ratio not converging: {small} {medium} {large}"
    );
    // Planarity keeps the ratio strictly below the limit
    assert!(large < 2.0);
    assert!(large > 1.2);
}

#[test]
fn test_hexagonal_tiling() {
    let parameters = CellGridParameters {
        grid: GridParameters {
            kind: GridKind::Hexagonal,
            size: Vector::new(0.2, 0.2),
            ..GridParameters::default()
        },
        threshold_area: 0.5,
    };
    let grid = CellGrid::new(parameters, &disk_boundaries()).unwrap();
    assert!(!grid.cells().is_empty());
    check_cell_grid_invariants(&grid);

    // Interior hexagons keep all six sides and the nominal area
    let nominal = parameters.grid.nominal_area();
    let interior = grid
        .cells()
        .iter()
        .filter(|cell| (cell.area() - nominal).abs() < 1e-12)
        .count();
    assert!(interior > 0);
    for cell in grid.cells() {
        if (cell.area() - nominal).abs() < 1e-12 {
            assert_eq!(cell.sides().len(), 6);
        }
    }
}

#[test]
fn test_rotated_and_translated_lattice() {
    let parameters = CellGridParameters {
        grid: GridParameters {
            size: Vector::new(0.3, 0.3),
            origin: Vector::new(0.05, -0.05),
            inclination: 0.3,
            ..GridParameters::default()
        },
        threshold_area: 0.4,
    };
    let grid =
        CellGrid::new(parameters, &unit_square_boundaries()).unwrap();
    assert!(!grid.cells().is_empty());
    check_cell_grid_invariants(&grid);
    // Every retained cell honors the area threshold
    let floor = 0.4 * parameters.grid.nominal_area();
    for cell in grid.cells() {
        assert!(cell.area() >= floor - 1e-12);
    }
}

#[test]
fn test_invalid_threshold_fails() {
    let mut parameters = square_parameters(0.5);
    parameters.threshold_area = 1.5;
    assert!(CellGrid::new(parameters, &unit_square_boundaries()).is_err());
}

#[test]
fn test_unbounded_domain_fails() {
    let parameters = CellGridParameters {
        grid: GridParameters {
            max_cells: 2000,
            ..GridParameters::default()
        },
        threshold_area: 0.5,
    };
    let boundaries = polygon_boundaries(&[
        Vector::new(10.0, 10.0),
        Vector::new(10.0, 11.0),
        Vector::new(11.0, 10.5),
    ]);
    assert!(CellGrid::new(parameters, &boundaries).is_err());
}

#[test]
fn test_determinism() {
    let build = || {
        CellGrid::new(square_parameters(0.3), &disk_boundaries()).unwrap()
    };
    let first = serde_json::to_string(&build()).unwrap();
    let second = serde_json::to_string(&build()).unwrap();
    assert_eq!(first, second);
}
