//! Helpers shared by the integration tests: canonical domains and the
//! invariant checks every constructed grid must satisfy.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use tessella::{
    polygon_area_centroid, Boundary, CellGrid, Figure, PointGrid, Vector,
};

/// The unit square `[-0.5, 0.5]^2`, wound clockwise so that the `false`
/// normal flag makes the normals point inward
pub fn unit_square_boundaries() -> Vec<Boundary> {
    polygon_boundaries(&[
        Vector::new(0.5, 0.5),
        Vector::new(0.5, -0.5),
        Vector::new(-0.5, -0.5),
        Vector::new(-0.5, 0.5),
    ])
}

/// Line boundaries along consecutive vertex pairs (closing back to the
/// first), normals on the clockwise-interior side
pub fn polygon_boundaries(vertices: &[Vector]) -> Vec<Boundary> {
    (0..vertices.len())
        .map(|index| {
            Boundary::new(Figure::Line {
                a: vertices[index],
                b: vertices[(index + 1) % vertices.len()],
                normal_clockwise: false,
            })
        })
        .collect()
}

/// The disk of radius 1 around the origin, normals pointing inward
pub fn disk_boundaries() -> Vec<Boundary> {
    vec![Boundary::new(Figure::Circle {
        center: Vector::ZERO,
        radius: 1.0,
        normal_inwards: true,
    })]
}

/// Assert every structural invariant of a cellular grid: side polygons
/// close and reproduce the emitted areas, faces stitch cells symmetrically,
/// face reference counts are 1 or 2 (exactly 1 for irregular faces), the
/// inwards flags match the geometry, and shared corners were deduplicated.
pub fn check_cell_grid_invariants(grid: &CellGrid) {
    let tolerance = 1e-9 * grid.parameters().grid.nominal_area();
    let mut face_references: HashMap<usize, usize> = HashMap::new();

    for (cell_index, cell) in grid.cells().iter().enumerate() {
        let sides = cell.sides();
        assert!(
            sides.len() >= 3,
            "cell {cell_index} has only {} sides",
            sides.len()
        );

        // The side points, in order, form the cell's polygon
        let coords: Vec<Vector> = sides
            .iter()
            .map(|side| grid.point(side.point).coord())
            .collect();
        let (area, _) = polygon_area_centroid(&coords);
        assert!(
            (area - cell.area()).abs() <= tolerance,
            "cell {cell_index}: side polygon area {area} vs emitted {}",
            cell.area()
        );

        for (side_index, side) in sides.iter().enumerate() {
            let next = &sides[(side_index + 1) % sides.len()];
            let face = grid.face(side.face);
            // Corner i is incident to face i and face i-1: face i must join
            // this side's point to the next side's point
            assert!(
                face.points().contains(&side.point)
                    && face.points().contains(&next.point),
                "cell {cell_index} side {side_index}: face endpoints \
                 disagree with the side points"
            );
            *face_references.entry(side.face.index()).or_default() += 1;

            // The inwards flag records the stored normal's orientation
            let dot = (cell.center() - face.center()).dot(face.normal());
            assert!(
                if side.inwards { dot >= 0.0 } else { dot <= 0.0 },
                "cell {cell_index} side {side_index}: inwards flag disagrees"
            );

            // Neighbor references are symmetric across the shared face
            if let Some(neighbor) = side.neighbor {
                let mirrored = grid.cell(neighbor).sides().iter().any(|s| {
                    s.face == side.face
                        && s.neighbor.map(|c| c.index()) == Some(cell_index)
                });
                assert!(
                    mirrored,
                    "cell {cell_index} side {side_index}: neighbor {neighbor} \
                     does not reference back"
                );
            }
        }
    }

    for (face_index, face) in grid.faces().iter().enumerate() {
        let count = face_references.get(&face_index).copied().unwrap_or(0);
        if face.is_irregular() {
            assert_eq!(
                count, 1,
                "irregular face {face_index} referenced by {count} cells"
            );
        } else {
            assert!(
                count == 1 || count == 2,
                "face {face_index} referenced by {count} cells"
            );
        }
    }

    // Shared corners are deduplicated, so no two points may coincide
    let mut seen = HashSet::new();
    for point in grid.points() {
        let key = (point.coord().x.to_bits(), point.coord().y.to_bits());
        assert!(seen.insert(key), "duplicate point at {}", point.coord());
    }
}

/// Assert the point grid invariants: symmetric adjacency and deduplicated
/// coordinates
pub fn check_point_grid_invariants(grid: &PointGrid) {
    for (index, point) in grid.points().iter().enumerate() {
        for &neighbor in point.neighbors() {
            assert!(
                grid.point(neighbor)
                    .neighbors()
                    .iter()
                    .any(|n| n.index() == index),
                "asymmetric adjacency between points {index} and {neighbor}"
            );
        }
    }
    let mut seen = HashSet::new();
    for point in grid.points() {
        let key = (point.coord().x.to_bits(), point.coord().y.to_bits());
        assert!(seen.insert(key), "duplicate point at {}", point.coord());
    }
}

/// Shoelace area of a simple polygon given by its vertices
pub fn polygon_area(vertices: &[Vector]) -> f64 {
    polygon_area_centroid(vertices).0.abs()
}
