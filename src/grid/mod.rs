//! The two grid products and their entities.
//!
//! Both grids use arena storage: the grid owns flat vectors of its
//! entities, and entities reference each other through the index newtypes
//! defined here. The topology is cyclic (cells reference faces and neighbor
//! cells, faces reference points), so per-entity ownership is not an
//! option; id equality is the "pointer equality" the construction
//! invariants talk about. Ids are only meaningful for the grid that issued
//! them.

mod cell;
mod point;

pub use self::{
    cell::{Cell, CellGrid, Face, Point, Side},
    point::{PointGrid, StandalonePoint},
};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Id of a [Point] or [StandalonePoint] within its grid
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[display(fmt = "p{}", _0)]
pub struct PointId(pub(crate) usize);

impl PointId {
    /// Index into the grid's point arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// Id of a [Face] within its [CellGrid]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[display(fmt = "f{}", _0)]
pub struct FaceId(pub(crate) usize);

impl FaceId {
    /// Index into the grid's face arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// Id of a [Cell] within its [CellGrid]
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[display(fmt = "c{}", _0)]
pub struct CellId(pub(crate) usize);

impl CellId {
    /// Index into the grid's cell arena
    pub fn index(self) -> usize {
        self.0
    }
}
