mod common;

use common::{check_point_grid_invariants, unit_square_boundaries};
use tessella::{
    Boundary, Figure, GridKind, GridParameters, HasPosition, PointGrid,
    Position, Vector,
};

fn square_parameters() -> GridParameters {
    GridParameters {
        size: Vector::new(0.3, 0.3),
        ..GridParameters::default()
    }
}

#[test]
fn test_unit_square_point_grid() {
    let grid =
        PointGrid::new(square_parameters(), &unit_square_boundaries()).unwrap();
    // Lattice {-1, 0, 1}^2 scaled by 0.3 fits inside the square
    assert_eq!(grid.points().len(), 9);
    check_point_grid_invariants(&grid);

    // Every point but the center probed a cut edge, so it carries the
    // boundary it sits against; the center is interior
    let boundary_points = grid
        .points()
        .iter()
        .filter(|point| point.boundary().is_some())
        .count();
    assert_eq!(boundary_points, 8);

    let center = grid.point_at(Position::ORIGIN).unwrap();
    assert_eq!(grid.point(center).boundary(), None);
    assert_eq!(grid.point(center).normal(), Vector::ZERO);
    assert_eq!(grid.point(center).neighbors().len(), 4);
    assert_eq!(grid.point_at(Position::new(5, 5)), None);

    // Boundary normals are inherited from the boundary figures, which this
    // domain orients inward
    for point in grid.points() {
        if point.boundary().is_some() {
            let normal = point.normal();
            assert!((normal.norm() - 1.0).abs() < 1e-9);
            // Inward means pointing back towards the origin
            assert!(normal.dot(point.coord()) < 0.0);
        }
    }
}

#[test]
fn test_triangular_point_grid() {
    let parameters = GridParameters {
        kind: GridKind::Triangular,
        size: Vector::new(0.3, 0.3),
        ..GridParameters::default()
    };
    let grid =
        PointGrid::new(parameters, &unit_square_boundaries()).unwrap();
    assert!(!grid.is_empty());
    check_point_grid_invariants(&grid);
    // Triangle centers alternate orientation along each row
    assert!(grid.points().iter().any(|point| point.position().upside_down));
    // Flood never leaves the domain, so every emitted center is inside
    for point in grid.points() {
        assert!(point.coord().x.abs() < 0.5);
        assert!(point.coord().y.abs() < 0.5);
    }
}

#[test]
fn test_hexagonal_point_grid() {
    let parameters = GridParameters {
        kind: GridKind::Hexagonal,
        size: Vector::new(0.2, 0.2),
        ..GridParameters::default()
    };
    let grid =
        PointGrid::new(parameters, &unit_square_boundaries()).unwrap();
    assert!(!grid.is_empty());
    check_point_grid_invariants(&grid);
    // Hexagonal cells have up to six neighbors
    assert!(grid
        .points()
        .iter()
        .all(|point| point.neighbors().len() <= 6));
    assert!(grid
        .points()
        .iter()
        .any(|point| point.neighbors().len() == 6));
}

#[test]
fn test_tiny_domain_keeps_seed_point() {
    // A domain smaller than one cell still yields the seed vertex, which
    // records the boundary that stopped the flood
    let boundaries = vec![Boundary::new(Figure::Circle {
        center: Vector::ZERO,
        radius: 0.1,
        normal_inwards: true,
    })];
    let grid =
        PointGrid::new(GridParameters::default(), &boundaries).unwrap();
    assert_eq!(grid.points().len(), 1);
    assert!(grid.points()[0].boundary().is_some());
    assert!(grid.points()[0].neighbors().is_empty());
}

#[test]
fn test_unbounded_domain_fails() {
    // A single segment does not enclose anything
    let boundaries = vec![Boundary::new(Figure::Line {
        a: Vector::new(-1.0, 1.0),
        b: Vector::new(1.0, 1.0),
        normal_clockwise: false,
    })];
    let parameters = GridParameters {
        max_cells: 2000,
        ..GridParameters::default()
    };
    assert!(PointGrid::new(parameters, &boundaries).is_err());
}

#[test]
fn test_origin_outside_domain_fails() {
    // The boundaries enclose a region far from the lattice origin, so the
    // flood escapes around them
    let boundaries = vec![Boundary::new(Figure::Circle {
        center: Vector::new(50.0, 50.0),
        radius: 0.5,
        normal_inwards: true,
    })];
    let parameters = GridParameters {
        max_cells: 2000,
        ..GridParameters::default()
    };
    assert!(PointGrid::new(parameters, &boundaries).is_err());
}

#[test]
fn test_invalid_parameters_fail() {
    let parameters = GridParameters {
        size: Vector::new(0.0, 0.3),
        ..GridParameters::default()
    };
    assert!(PointGrid::new(parameters, &unit_square_boundaries()).is_err());
}

#[test]
fn test_determinism() {
    let build = || {
        PointGrid::new(square_parameters(), &unit_square_boundaries()).unwrap()
    };
    let first = serde_json::to_string(&build()).unwrap();
    let second = serde_json::to_string(&build()).unwrap();
    assert_eq!(first, second);
}
