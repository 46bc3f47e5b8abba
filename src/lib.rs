//! Tessella constructs two-dimensional computational grids inside a planar
//! domain delimited by oriented boundary figures (line segments, circles,
//! circular arcs). Two grid products are offered:
//!
//! - [PointGrid]: vertices on the regular lattice positions inside the
//!   domain, with nearest-neighbor adjacency.
//! - [CellGrid]: a polygonal subdivision of the domain into cells of a
//!   regular tiling (triangular, square or hexagonal), with cells cut by
//!   the boundary clipped against their nearest boundary crossings.
//!
//! ```
//! use tessella::{Boundary, Figure, GridParameters, PointGrid, Vector};
//!
//! // The unit square, wound clockwise with inward-facing normals
//! let corners = [
//!     Vector::new(0.5, 0.5),
//!     Vector::new(0.5, -0.5),
//!     Vector::new(-0.5, -0.5),
//!     Vector::new(-0.5, 0.5),
//! ];
//! let boundaries: Vec<Boundary> = (0..4)
//!     .map(|i| {
//!         Boundary::new(Figure::Line {
//!             a: corners[i],
//!             b: corners[(i + 1) % 4],
//!             normal_clockwise: false,
//!         })
//!     })
//!     .collect();
//!
//! let parameters = GridParameters {
//!     size: Vector::new(0.3, 0.3),
//!     ..GridParameters::default()
//! };
//! let grid = PointGrid::new(parameters, &boundaries).unwrap();
//! assert_eq!(grid.points().len(), 9);
//! ```
//!
//! Construction is single-threaded, synchronous and deterministic: the same
//! parameters and boundaries always produce element-wise identical grids.
//! Grids are immutable after construction, except for the per-entity
//! back-reference lists (point neighbors, cell sides) handed out for
//! caller-level bookkeeping.

mod boundary;
mod config;
mod geom;
mod grid;
mod lattice;
#[cfg(feature = "svg")]
pub mod render;
mod util;

pub use crate::{
    boundary::{nearest_intersection, Boundary, BoundaryId, Figure},
    config::{CellGridParameters, GridParameters},
    geom::{polygon_area_centroid, Intersection, Vector},
    grid::{
        Cell, CellGrid, CellId, Face, FaceId, Point, PointGrid, PointId,
        Side, StandalonePoint,
    },
    lattice::{
        FacePosition, GridKind, HasPosition, PointPosition, Position,
    },
};
pub use anyhow;
pub use validator;
