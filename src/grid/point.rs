//! The point grid: one vertex per lattice cell center reachable from the
//! origin without crossing a boundary, with nearest-neighbor adjacency.

use crate::{
    boundary::{nearest_intersection, Boundary, BoundaryId},
    config::GridParameters,
    geom::{Intersection, Vector},
    grid::PointId,
    lattice::{FacePosition, HasPosition, Position},
    timed,
};
use anyhow::{bail, Context};
use fnv::FnvHashMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// A vertex of a [PointGrid].
///
/// Points next to the domain boundary remember which boundary stopped the
/// flood there and inherit its unit normal at the blocked crossing;
/// interior points carry a zero normal and no boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandalonePoint {
    position: Position,
    coord: Vector,
    normal: Vector,
    boundary: Option<BoundaryId>,
    neighbors: Vec<PointId>,
}

impl StandalonePoint {
    /// Plane coordinate of the vertex
    pub fn coord(&self) -> Vector {
        self.coord
    }

    /// Boundary normal at the blocked crossing next to this vertex, or zero
    /// for interior vertices
    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// The boundary this vertex sits against, if any
    pub fn boundary(&self) -> Option<BoundaryId> {
        self.boundary
    }

    /// Ids of the adjacent vertices. The relation is symmetric: if `q` is
    /// in `p.neighbors()` then `p` is in `q.neighbors()`.
    pub fn neighbors(&self) -> &[PointId] {
        &self.neighbors
    }

    /// Mutable access to the adjacency list, for caller-level bookkeeping.
    /// The grid itself never touches it after construction.
    pub fn neighbors_mut(&mut self) -> &mut Vec<PointId> {
        &mut self.neighbors
    }
}

impl HasPosition for StandalonePoint {
    fn position(&self) -> Position {
        self.position
    }
}

/// Construction state for one reached lattice position. The intersection
/// telemetry is recorded on the *reached* side of a blocked probe, so the
/// eventual point knows it sits against a boundary.
#[derive(Debug, Default)]
struct PendingPoint {
    intersection: Option<Intersection>,
    boundary: Option<BoundaryId>,
}

/// A grid of vertices on the lattice centers inside the domain. Immutable
/// after construction except for the per-point neighbor lists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointGrid {
    parameters: GridParameters,
    // Sorted by position (the emission order), so position lookups can
    // binary search instead of carrying a separate index
    points: Vec<StandalonePoint>,
}

impl PointGrid {
    /// Build the point grid for the domain delimited by `boundaries`.
    ///
    /// Fails if the parameters are invalid or if the boundaries do not
    /// enclose the lattice origin (the flood then runs unbounded and trips
    /// `parameters.max_cells`). The seed position is always emitted, so a
    /// successful build has at least one point even when the domain is
    /// smaller than a cell.
    pub fn new(
        parameters: GridParameters,
        boundaries: &[Boundary],
    ) -> anyhow::Result<Self> {
        parameters
            .validate()
            .context("invalid point grid parameters")?;
        let points = timed!(
            "Point grid construction",
            log::Level::Info,
            build(&parameters, boundaries)
        )?;
        info!("Point grid built with {} points", points.len());
        Ok(Self { parameters, points })
    }

    /// The parameters the grid was built with
    pub fn parameters(&self) -> &GridParameters {
        &self.parameters
    }

    /// All vertices, in emission order (ascending lattice position)
    pub fn points(&self) -> &[StandalonePoint] {
        &self.points
    }

    pub fn point(&self, id: PointId) -> &StandalonePoint {
        &self.points[id.0]
    }

    pub fn point_mut(&mut self, id: PointId) -> &mut StandalonePoint {
        &mut self.points[id.0]
    }

    /// Look up the vertex emitted for a lattice position
    pub fn point_at(&self, position: Position) -> Option<PointId> {
        self.points
            .binary_search_by(|point| point.position.cmp(&position))
            .ok()
            .map(PointId)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Breadth-first flood over lattice positions, stopping at boundary-cut
/// edges, then a two-pass emission: points first, adjacency second.
fn build(
    parameters: &GridParameters,
    boundaries: &[Boundary],
) -> anyhow::Result<Vec<StandalonePoint>> {
    let shape = parameters.shape();
    let mut active: BTreeMap<Position, PendingPoint> = BTreeMap::new();
    let mut passive: BTreeMap<Position, PendingPoint> = BTreeMap::new();
    active.insert(Position::ORIGIN, PendingPoint::default());

    let mut round = 0;
    while !active.is_empty() {
        if passive.len() + active.len() > parameters.max_cells {
            bail!(
                "point grid flood exceeded {} positions; the boundaries do \
                 not enclose the lattice origin",
                parameters.max_cells
            );
        }
        // Sorted snapshot of the frontier, for membership tests while the
        // entries themselves are borrowed mutably below
        let frontier: Vec<Position> = active.keys().copied().collect();
        let mut to_be_active: BTreeMap<Position, PendingPoint> =
            BTreeMap::new();
        for (&position, entry) in active.iter_mut() {
            let center = parameters.center(position);
            for face in 0..shape {
                let neighbor = parameters
                    .face_neighbor(FacePosition { position, face })
                    .position;
                if passive.contains_key(&neighbor)
                    || frontier.binary_search(&neighbor).is_ok()
                {
                    continue;
                }
                let neighbor_center = parameters.center(neighbor);
                match nearest_intersection(boundaries, center, neighbor_center)
                {
                    Some((intersection, boundary)) => {
                        // Boundary found: remember it on the reached side
                        entry.intersection = Some(intersection);
                        entry.boundary = Some(boundary);
                    }
                    None => {
                        to_be_active.entry(neighbor).or_default();
                    }
                }
            }
        }
        passive.append(&mut active);
        active = to_be_active;
        round += 1;
        debug!("Point flood round {round}: {} settled", passive.len());
    }

    let mut points = Vec::with_capacity(passive.len());
    let mut ids: FnvHashMap<Position, PointId> = FnvHashMap::default();
    for (&position, entry) in &passive {
        let id = PointId(points.len());
        let (normal, boundary) = match (entry.intersection, entry.boundary) {
            (Some(intersection), Some(boundary)) => {
                (intersection.normal, Some(boundary))
            }
            _ => (Vector::ZERO, None),
        };
        points.push(StandalonePoint {
            position,
            coord: parameters.center(position),
            normal,
            boundary,
            neighbors: Vec::new(),
        });
        ids.insert(position, id);
    }

    // Interconnect: each side records the relation independently, which
    // makes it symmetric because face_neighbor is an involution
    for index in 0..points.len() {
        let position = points[index].position;
        for face in 0..shape {
            let neighbor = parameters
                .face_neighbor(FacePosition { position, face })
                .position;
            if let Some(&id) = ids.get(&neighbor) {
                points[index].neighbors.push(id);
            }
        }
    }
    Ok(points)
}
