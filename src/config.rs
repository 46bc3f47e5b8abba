//! User-facing construction parameters for both grid kinds. Validation runs
//! at the top of every grid constructor, so an out-of-range value is
//! reported before any work happens.

use crate::{geom::Vector, lattice::GridKind};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Parameters shared by the point grid and the cellular grid: which regular
/// tiling to use and how it is placed in the plane. Two grids built with the
/// same parameters and boundaries are identical.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridParameters {
    /// The tiling drawn over the plane. Determines the shape number (count
    /// of corners and faces per cell): 3, 4 or 6.
    pub kind: GridKind,

    /// Plane translation of the lattice. Lattice position `(0, 0)` maps to
    /// a cell centered here (exactly here, for the square tiling).
    pub origin: Vector,

    /// Per-axis scale. The tiling is generated with unit edge length and
    /// then scaled by this vector, so `size` is the characteristic edge
    /// length of a cell.
    #[validate(custom = "validate_size")]
    pub size: Vector,

    /// Counterclockwise rotation of the whole lattice, in radians.
    pub inclination: f64,

    /// Upper bound on the number of lattice positions the flood fill may
    /// discover. The fill only terminates on its own when the boundaries
    /// enclose the origin; when they do not, the frontier grows until this
    /// bound trips and construction fails with an error. The default is
    /// roomy enough for any plausibly-sized grid.
    #[validate(range(min = 1))]
    pub max_cells: usize,
}

impl Default for GridParameters {
    fn default() -> Self {
        Self {
            kind: GridKind::Square,
            origin: Vector::ZERO,
            size: Vector::new(1.0, 1.0),
            inclination: 0.0,
            max_cells: 1 << 20,
        }
    }
}

/// Parameters for the cellular grid: the shared lattice placement plus the
/// retention threshold for boundary-clipped cells.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CellGridParameters {
    #[validate]
    pub grid: GridParameters,

    /// Minimum fraction of the nominal (unclipped) cell area that a clipped
    /// cell must retain to be emitted. `0.0` keeps every sliver, `1.0`
    /// discards every clipped cell.
    #[validate(range(min = 0.0, max = 1.0))]
    pub threshold_area: f64,
}

impl Default for CellGridParameters {
    fn default() -> Self {
        Self {
            grid: GridParameters::default(),
            threshold_area: 0.5,
        }
    }
}

/// Both scale components must be positive and finite: a degenerate scale
/// collapses probe segments to points, which makes every probe a miss and
/// the flood fill unbounded.
fn validate_size(size: &Vector) -> Result<(), ValidationError> {
    if size.x > 0.0 && size.y > 0.0 && size.x.is_finite() && size.y.is_finite()
    {
        Ok(())
    } else {
        Err(ValidationError::new("size components must be positive"))
    }
}
