//! Lattice addressing: the pure function layer that maps integer lattice
//! coordinates onto the plane for each of the three supported tilings.
//!
//! Everything here is stateless and derived from [GridParameters]; the grid
//! builders never hard-code tiling shapes. The triangular and square
//! tilings use unit-edge cells; the hexagonal tiling uses pointy-topped
//! regular hexagons with unit edge, centers spaced `sqrt(3)` apart. All of
//! it is scaled per axis by `size`, rotated by `inclination` and translated
//! by `origin` on the way out.
//!
//! The coordinate conventions:
//!
//! - Square: position `(xi, yi)` is the cell centered at `(xi, yi)`,
//!   corners counterclockwise from the bottom-left.
//! - Triangular: `yi` selects a row, `xi` a column inside it, and
//!   `upside_down` the inverted triangle completing the rhombus. Corners
//!   are counterclockwise with corner 0 at the left of the base edge.
//! - Hexagonal: axial coordinates; `xi` steps east, `yi` steps northeast.
//!   Corners counterclockwise from the bottom vertex.
//!
//! Face `f` of a cell joins corners `f` and `f + 1 (mod N)`; faces and
//! corners share the index space `[0, N)` where `N` is the shape number
//! ([GridParameters::shape]).

use crate::{config::GridParameters, geom::Vector};
use arrayvec::ArrayVec;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The regular tiling a grid is built from
#[derive(
    Copy,
    Clone,
    Debug,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GridKind {
    Triangular,
    Square,
    Hexagonal,
}

/// Integer coordinates of one cell in the infinite tiling. `upside_down` is
/// only meaningful for the triangular tiling (every other triangle in a row
/// is inverted) and stays `false` elsewhere.
///
/// The derived ordering is lexicographic over `(xi, yi, upside_down)`,
/// which is the total order the builders key their ordered maps with; it
/// fixes the emission order of every grid entity.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.xi", "self.yi", "self.upside_down")]
pub struct Position {
    pub xi: i32,
    pub yi: i32,
    pub upside_down: bool,
}

impl Position {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// An upright cell at the given lattice coordinates
    pub const fn new(xi: i32, yi: i32) -> Self {
        Self {
            xi,
            yi,
            upside_down: false,
        }
    }

    /// An inverted triangular cell at the given lattice coordinates
    pub const fn new_inverted(xi: i32, yi: i32) -> Self {
        Self {
            xi,
            yi,
            upside_down: true,
        }
    }
}

/// A cell plus one of its faces
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacePosition {
    pub position: Position,
    pub face: usize,
}

/// A cell plus one of its corners
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointPosition {
    pub position: Position,
    pub corner: usize,
}

/// Any entity that occupies a single lattice position
pub trait HasPosition {
    fn position(&self) -> Position;
}

impl GridParameters {
    /// Number of corners (and faces) per cell in the configured tiling
    pub fn shape(&self) -> usize {
        match self.kind {
            GridKind::Triangular => 3,
            GridKind::Square => 4,
            GridKind::Hexagonal => 6,
        }
    }

    /// Area of a full, unclipped cell in plane units
    pub fn nominal_area(&self) -> f64 {
        let sqrt3 = 3.0_f64.sqrt();
        match self.kind {
            GridKind::Triangular => self.size.x * self.size.y * sqrt3 / 4.0,
            GridKind::Square => self.size.x * self.size.y,
            GridKind::Hexagonal => {
                6.0 * self.size.x * self.size.y * sqrt3 / 4.0
            }
        }
    }

    /// Barycenter of the cell at `position`, in the plane
    pub fn center(&self, position: Position) -> Vector {
        let sqrt3 = 3.0_f64.sqrt();
        let coord = match self.kind {
            GridKind::Triangular => {
                let row = triangle_row_center(position);
                let offset = Vector::new(0.25, sqrt3 / 12.0);
                if position.upside_down {
                    row + offset
                } else {
                    row - offset
                }
            }
            GridKind::Square => {
                Vector::new(position.xi as f64, position.yi as f64)
            }
            GridKind::Hexagonal => hexagon_center(position),
        };
        self.to_plane(coord)
    }

    /// The cell's corner coordinates, counterclockwise. The list length is
    /// [Self::shape].
    pub fn corners(&self, position: Position) -> ArrayVec<Vector, 6> {
        let sqrt3 = 3.0_f64.sqrt();
        let mut corners: ArrayVec<Vector, 6> = ArrayVec::new();
        match self.kind {
            GridKind::Triangular => {
                let row = triangle_row_center(position);
                let offsets = [
                    Vector::new(-0.75, -sqrt3 / 4.0),
                    Vector::new(0.25, -sqrt3 / 4.0),
                    Vector::new(-0.25, sqrt3 / 4.0),
                ];
                for offset in offsets {
                    corners.push(if position.upside_down {
                        row - offset
                    } else {
                        row + offset
                    });
                }
            }
            GridKind::Square => {
                let center =
                    Vector::new(position.xi as f64, position.yi as f64);
                let offsets = [
                    Vector::new(-0.5, -0.5),
                    Vector::new(0.5, -0.5),
                    Vector::new(0.5, 0.5),
                    Vector::new(-0.5, 0.5),
                ];
                for offset in offsets {
                    corners.push(center + offset);
                }
            }
            GridKind::Hexagonal => {
                let center = hexagon_center(position);
                let half = sqrt3 / 2.0;
                let offsets = [
                    Vector::new(0.0, -1.0),
                    Vector::new(half, -0.5),
                    Vector::new(half, 0.5),
                    Vector::new(0.0, 1.0),
                    Vector::new(-half, 0.5),
                    Vector::new(-half, -0.5),
                ];
                for offset in offsets {
                    corners.push(center + offset);
                }
            }
        }
        for corner in &mut corners {
            *corner = self.to_plane(*corner);
        }
        corners
    }

    /// Plane coordinate of a single corner
    pub fn corner(&self, point: PointPosition) -> Vector {
        self.corners(point.position)[point.corner]
    }

    /// The same face seen from the cell on its other side. This is an
    /// involution: applying it twice returns the input. For triangles,
    /// crossing any face flips `upside_down`.
    pub fn face_neighbor(&self, face: FacePosition) -> FacePosition {
        let FacePosition { mut position, face: index } = face;
        match self.kind {
            GridKind::Triangular => {
                let one = if position.upside_down { -1 } else { 1 };
                match index {
                    0 => position.yi -= one,
                    2 => position.xi -= one,
                    _ => {}
                }
                position.upside_down = !position.upside_down;
                FacePosition { position, face: index }
            }
            GridKind::Square => {
                match index {
                    0 => position.yi -= 1,
                    1 => position.xi += 1,
                    2 => position.yi += 1,
                    _ => position.xi -= 1,
                }
                FacePosition {
                    position,
                    face: (index + 2) % 4,
                }
            }
            GridKind::Hexagonal => {
                match index {
                    0 => {
                        position.xi += 1;
                        position.yi -= 1;
                    }
                    1 => position.xi += 1,
                    2 => position.yi += 1,
                    3 => {
                        position.xi -= 1;
                        position.yi += 1;
                    }
                    4 => position.xi -= 1,
                    _ => position.yi -= 1,
                }
                FacePosition {
                    position,
                    face: (index + 3) % 6,
                }
            }
        }
    }

    /// Every other `(position, corner)` pair that names the same lattice
    /// corner as `point`: 5 for triangles, 3 for squares, 2 for hexagons.
    pub fn point_neighbors(
        &self,
        point: PointPosition,
    ) -> ArrayVec<PointPosition, 5> {
        let PointPosition { position, corner } = point;
        let mut neighbors: ArrayVec<PointPosition, 5> = ArrayVec::new();
        let mut push = |corner: usize, dx: i32, dy: i32, flip: bool| {
            neighbors.push(PointPosition {
                position: Position {
                    xi: position.xi + dx,
                    yi: position.yi + dy,
                    upside_down: position.upside_down != flip,
                },
                corner,
            });
        };
        match self.kind {
            GridKind::Triangular => {
                let one = if position.upside_down { -1 } else { 1 };
                match corner {
                    0 => {
                        push(2, -one, 0, true);
                        push(1, -one, 0, false);
                        push(0, -one, -one, true);
                        push(2, 0, -one, false);
                        push(1, 0, -one, true);
                    }
                    1 => {
                        push(0, 0, -one, true);
                        push(2, one, -one, false);
                        push(1, one, -one, true);
                        push(0, one, 0, false);
                        push(2, 0, 0, true);
                    }
                    _ => {
                        push(1, 0, 0, true);
                        push(0, 0, one, false);
                        push(2, -one, one, true);
                        push(1, -one, one, false);
                        push(0, one, 0, true);
                    }
                }
            }
            GridKind::Square => {
                match corner {
                    0 => {
                        push((corner + 1) % 4, -1, 0, false);
                        push((corner + 2) % 4, -1, -1, false);
                        push((corner + 3) % 4, 0, -1, false);
                    }
                    1 => {
                        push((corner + 1) % 4, 0, -1, false);
                        push((corner + 2) % 4, 1, -1, false);
                        push((corner + 3) % 4, 1, 0, false);
                    }
                    2 => {
                        push((corner + 1) % 4, 1, 0, false);
                        push((corner + 2) % 4, 1, 1, false);
                        push((corner + 3) % 4, 0, 1, false);
                    }
                    _ => {
                        push((corner + 1) % 4, 0, 1, false);
                        push((corner + 2) % 4, -1, 1, false);
                        push((corner + 3) % 4, -1, 0, false);
                    }
                }
            }
            GridKind::Hexagonal => {
                let (first, second) = match corner {
                    0 => ((0, -1), (1, -1)),
                    1 => ((1, -1), (1, 0)),
                    2 => ((1, 0), (0, 1)),
                    3 => ((0, 1), (-1, 1)),
                    4 => ((-1, 1), (-1, 0)),
                    _ => ((-1, 0), (0, -1)),
                };
                push((corner + 2) % 6, first.0, first.1, false);
                push((corner + 4) % 6, second.0, second.1, false);
            }
        }
        neighbors
    }

    /// Scale, rotate and translate a lattice-space coordinate into the plane
    fn to_plane(&self, coord: Vector) -> Vector {
        self.origin
            + Vector::new(self.size.x * coord.x, self.size.y * coord.y)
                .rotated(self.inclination)
    }
}

/// Center of the rhombus row slot holding the two triangles at `position`
fn triangle_row_center(position: Position) -> Vector {
    let sqrt3 = 3.0_f64.sqrt();
    Vector::new(
        0.5 * position.yi as f64 + position.xi as f64,
        0.5 * sqrt3 * position.yi as f64,
    )
}

/// Center of the hexagon at `position` in unscaled lattice space
fn hexagon_center(position: Position) -> Vector {
    let sqrt3 = 3.0_f64.sqrt();
    Vector::new(
        sqrt3 * (0.5 * position.yi as f64 + position.xi as f64),
        1.5 * position.yi as f64,
    )
}
