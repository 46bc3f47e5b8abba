//! Debug rendering of grids to SVG documents (feature `svg`). This is a
//! development aid, not a drawing API: it picks its own colors and shows
//! everything the builder emitted, boundary contacts included.

use crate::{CellGrid, HasPosition, PointGrid, Vector};
use svg::{
    node::{
        element::{Circle, Group, Line, Polygon},
        Comment,
    },
    Document,
};

/// Fill for cells that touch a boundary
const BOUNDARY_CELL_COLOR: &str = "#f2c84b";
/// Fill for interior cells
const INTERIOR_CELL_COLOR: &str = "#9bc4e2";
/// Stroke for faces and adjacency lines
const EDGE_COLOR: &str = "#33415c";
/// Fill for boundary points
const BOUNDARY_POINT_COLOR: &str = "#c0392b";

/// Render a cellular grid: every cell as a filled polygon over its side
/// points, colored by whether it touches a boundary.
pub fn cell_grid_to_svg(grid: &CellGrid) -> Document {
    let stroke_width = edge_length_hint(grid.parameters().grid.size) / 20.0;
    let mut document = document_around(
        grid.points().iter().map(|point| point.coord()),
        grid.parameters().grid.size,
    );
    for cell in grid.cells() {
        let points: Vec<(f64, f64)> = cell
            .sides()
            .iter()
            .map(|side| {
                let coord = grid.point(side.point).coord();
                (coord.x, coord.y)
            })
            .collect();
        let fill = if cell.boundary().is_some() {
            BOUNDARY_CELL_COLOR
        } else {
            INTERIOR_CELL_COLOR
        };
        let group = Group::new()
            .add(Comment::new(cell.position().to_string()))
            .add(
                Polygon::new()
                    .set("points", points)
                    .set("fill", fill)
                    .set("stroke", EDGE_COLOR)
                    .set("stroke-width", stroke_width),
            );
        document = document.add(group);
    }
    document
}

/// Render a point grid: adjacency lines first, then one dot per vertex,
/// boundary vertices highlighted.
pub fn point_grid_to_svg(grid: &PointGrid) -> Document {
    let size = grid.parameters().size;
    let radius = edge_length_hint(size) / 10.0;
    let mut document =
        document_around(grid.points().iter().map(|point| point.coord()), size);
    for (index, point) in grid.points().iter().enumerate() {
        let coord = point.coord();
        for &neighbor in point.neighbors() {
            // Each adjacency appears from both sides; draw it once
            if neighbor.index() <= index {
                continue;
            }
            let other = grid.point(neighbor).coord();
            document = document.add(
                Line::new()
                    .set("x1", coord.x)
                    .set("y1", coord.y)
                    .set("x2", other.x)
                    .set("y2", other.y)
                    .set("stroke", EDGE_COLOR)
                    .set("stroke-width", radius / 4.0),
            );
        }
    }
    for point in grid.points() {
        let fill = if point.boundary().is_some() {
            BOUNDARY_POINT_COLOR
        } else {
            EDGE_COLOR
        };
        document = document.add(
            Circle::new()
                .set("cx", point.coord().x)
                .set("cy", point.coord().y)
                .set("r", radius)
                .set("fill", fill),
        );
    }
    document
}

/// An empty document whose view box covers all the given coordinates with
/// one cell's worth of padding
fn document_around(
    coords: impl Iterator<Item = Vector>,
    size: Vector,
) -> Document {
    let mut min = Vector::new(f64::INFINITY, f64::INFINITY);
    let mut max = Vector::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for coord in coords {
        min.x = min.x.min(coord.x);
        min.y = min.y.min(coord.y);
        max.x = max.x.max(coord.x);
        max.y = max.y.max(coord.y);
    }
    if min.x > max.x {
        // Empty grid; any non-degenerate box will do
        min = Vector::new(-1.0, -1.0);
        max = Vector::new(1.0, 1.0);
    }
    let pad = edge_length_hint(size);
    Document::new().set(
        "viewBox",
        (
            min.x - pad,
            min.y - pad,
            (max.x - min.x) + 2.0 * pad,
            (max.y - min.y) + 2.0 * pad,
        ),
    )
}

/// Characteristic length used to scale strokes and markers
fn edge_length_hint(size: Vector) -> f64 {
    size.x.max(size.y)
}
