//! The cellular grid: a polygonal subdivision of the domain into tiling
//! cells, with cells along the boundary clipped against their nearest
//! boundary crossings.
//!
//! Construction runs in eight sequential stages over a position-keyed map
//! of temporary cells (see [CellGridBuilder::build]). The two coordination
//! problems the stages solve:
//!
//! - every lattice edge must be probed against the boundaries exactly once,
//!   even though it is visible from two cells and four-plus corners, which
//!   is handled by mirror-writing probe results through `face_neighbor`;
//! - corner points and faces shared between cells must be emitted once and
//!   referenced everywhere, which is handled by mirror-writing emitted ids
//!   through `point_neighbors` / `face_neighbor` the same way.

use crate::{
    boundary::{nearest_intersection, Boundary, BoundaryId},
    config::CellGridParameters,
    geom::{polygon_area_centroid, Intersection, Vector},
    grid::{CellId, FaceId, PointId},
    lattice::{FacePosition, HasPosition, PointPosition, Position},
    timed,
};
use anyhow::{bail, Context};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Hard cap on corners per cell, from the hexagonal tiling
const MAX_SHAPE: usize = 6;

/// A vertex of the cellular mesh: either a lattice corner (zero normal, no
/// boundary) or a boundary point where a cell edge crosses a boundary
/// (carries the boundary's unit normal there).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Point {
    coord: Vector,
    normal: Vector,
    boundary: Option<BoundaryId>,
}

impl Point {
    pub fn coord(&self) -> Vector {
        self.coord
    }

    /// Boundary normal for boundary points, zero for lattice corners
    pub fn normal(&self) -> Vector {
        self.normal
    }

    pub fn boundary(&self) -> Option<BoundaryId> {
        self.boundary
    }
}

/// An edge of the cellular mesh between two points.
///
/// The stored normal is the unit quarter-turn counterclockwise of `b - a`
/// where `[a, b]` is [Face::points]; whether that points into or out of a
/// given cell is recorded on that cell's [Side::inwards] flag.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Face {
    points: [PointId; 2],
    center: Vector,
    normal: Vector,
    length: f64,
    boundary: Option<BoundaryId>,
    irregular: bool,
}

impl Face {
    /// The two endpoints, in construction order
    pub fn points(&self) -> [PointId; 2] {
        self.points
    }

    /// Midpoint of the edge
    pub fn center(&self) -> Vector {
        self.center
    }

    /// Unit normal (zero for a degenerate zero-length face)
    pub fn normal(&self) -> Vector {
        self.normal
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// The boundary this face lies on or was clipped by, if any
    pub fn boundary(&self) -> Option<BoundaryId> {
        self.boundary
    }

    /// True for the synthesized edge that closes a clipped cell along the
    /// boundary. Irregular faces belong to exactly one cell.
    pub fn is_irregular(&self) -> bool {
        self.irregular
    }
}

/// One entry of a cell's counterclockwise side list: a corner point, the
/// face leading from it to the next side's point, the cell on the other
/// side of that face, and the orientation of the face's stored normal
/// relative to this cell.
///
/// Fields are public: side lists are caller-mutable bookkeeping after
/// construction, the grid itself never changes them.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Side {
    pub point: PointId,
    pub face: FaceId,
    /// The cell sharing `face`, or `None` for boundary and irregular faces
    pub neighbor: Option<CellId>,
    /// Whether the face's stored normal points into this cell
    pub inwards: bool,
}

/// A cell of the cellular mesh: a full tiling polygon in the interior, or a
/// clipped polygon along the boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    center: Vector,
    area: f64,
    boundary: Option<BoundaryId>,
    sides: Vec<Side>,
}

impl Cell {
    /// Barycenter of the (possibly clipped) polygon
    pub fn center(&self) -> Vector {
        self.center
    }

    /// Area of the (possibly clipped) polygon
    pub fn area(&self) -> f64 {
        self.area
    }

    /// The boundary touching this cell, if any. Set for clipped cells and
    /// for complete cells that adopted the hit of a dropped neighbor.
    pub fn boundary(&self) -> Option<BoundaryId> {
        self.boundary
    }

    /// Sides in counterclockwise order; traversed in order, the side points
    /// form a simple closed polygon. Corner `i` is incident to face `i` and
    /// face `i - 1` (mod side count).
    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    /// Mutable access to the side list, for caller-level bookkeeping
    pub fn sides_mut(&mut self) -> &mut Vec<Side> {
        &mut self.sides
    }
}

impl HasPosition for Cell {
    fn position(&self) -> Position {
        self.position
    }
}

/// A polygonal mesh of the domain. Immutable after construction except for
/// the per-cell side lists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CellGrid {
    parameters: CellGridParameters,
    points: Vec<Point>,
    faces: Vec<Face>,
    // Sorted by position (the emission order), for binary-search lookup
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Build the cellular grid for the domain delimited by `boundaries`.
    ///
    /// Fails if the parameters are invalid or if the boundaries do not
    /// enclose the lattice origin (the flood then runs unbounded and trips
    /// `parameters.grid.max_cells`). A domain that encloses the origin but
    /// retains no cell above the area threshold yields an empty grid.
    pub fn new(
        parameters: CellGridParameters,
        boundaries: &[Boundary],
    ) -> anyhow::Result<Self> {
        parameters
            .validate()
            .context("invalid cell grid parameters")?;
        let grid = timed!(
            "Cell grid construction",
            log::Level::Info,
            CellGridBuilder::new(&parameters, boundaries).build()
        )?;
        info!(
            "Cell grid built with {} points, {} faces, {} cells",
            grid.points.len(),
            grid.faces.len(),
            grid.cells.len()
        );
        Ok(grid)
    }

    /// The parameters the grid was built with
    pub fn parameters(&self) -> &CellGridParameters {
        &self.parameters
    }

    /// All mesh vertices, in emission order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// All mesh faces, in emission order
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// All cells, in emission order (ascending lattice position)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn point(&self, id: PointId) -> &Point {
        &self.points[id.0]
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.0]
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    pub fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.0]
    }

    /// Look up the cell emitted for a lattice position
    pub fn cell_at(&self, position: Position) -> Option<CellId> {
        self.cells
            .binary_search_by(|cell| cell.position.cmp(&position))
            .ok()
            .map(CellId)
    }
}

/// Discovery status of one cell corner during the flood. A corner is listed
/// by every cell sharing it and all listings always hold the same status.
///
/// `Unreached -> ToBeActive -> Active -> Passive`, where `ToBeActive`
/// collects the corners discovered during the current round and `Active`
/// marks corners whose adjacent faces get probed this round. Discovery can
/// re-enter a settled cell: marking a corner `ToBeActive` in a cell whose
/// other corners are already passive puts that cell back on the frontier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
enum CornerStatus {
    #[default]
    Unreached,
    ToBeActive,
    Active,
    Passive,
}

#[derive(Copy, Clone, Debug, Default)]
struct CornerSlot {
    status: CornerStatus,
    /// Emitted mesh vertex for this corner, shared across all listings
    point: Option<PointId>,
}

#[derive(Copy, Clone, Debug, Default)]
struct FaceSlot {
    /// Set when the edge has been probed, from either side
    probed: bool,
    intersection: Option<Intersection>,
    boundary: Option<BoundaryId>,
    /// Emitted boundary point where the edge crosses the boundary
    point: Option<PointId>,
    /// Emitted mesh face along this edge, shared with the face neighbor
    face: Option<FaceId>,
}

/// One vertex of a clipped cell's outline polygon: a lattice corner by
/// index, or the boundary crossing on a face by face index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum OutlineVertex {
    Corner(usize),
    Cut(usize),
}

/// Per-position construction state
#[derive(Clone, Debug, Default)]
struct TemporaryCell {
    corners: [CornerSlot; MAX_SHAPE],
    faces: [FaceSlot; MAX_SHAPE],
    /// "The" boundary touching this cell, for clipped-cell construction;
    /// last probe hit wins, or inherited from a dropped neighbor
    intersection: Option<Intersection>,
    boundary: Option<BoundaryId>,
    complete: bool,
    area: f64,
    center: Vector,
    /// Outline polygon, filled by the measuring stage
    outline: Vec<OutlineVertex>,
    /// Emitted cell, for complete cells only
    cell: Option<CellId>,
}

/// Runs the construction stages in order. Fields are the shared state the
/// stages hand to each other; everything but the output arenas is dropped
/// at the end of [Self::build].
struct CellGridBuilder<'a> {
    parameters: CellGridParameters,
    boundaries: &'a [Boundary],
    shape: usize,
    nominal_area: f64,
    map: BTreeMap<Position, TemporaryCell>,
    points: Vec<Point>,
    faces: Vec<Face>,
    cells: Vec<Cell>,
}

impl<'a> CellGridBuilder<'a> {
    fn new(
        parameters: &CellGridParameters,
        boundaries: &'a [Boundary],
    ) -> Self {
        Self {
            parameters: *parameters,
            boundaries,
            shape: parameters.grid.shape(),
            nominal_area: parameters.grid.nominal_area(),
            map: BTreeMap::new(),
            points: Vec::new(),
            faces: Vec::new(),
            cells: Vec::new(),
        }
    }

    fn build(mut self) -> anyhow::Result<CellGrid> {
        // Stage 1: seed the flood at corner 0 of the origin cell
        self.mark_corner(
            PointPosition {
                position: Position::ORIGIN,
                corner: 0,
            },
            CornerStatus::Active,
        );
        // Stage 2: flood outwards, probing each lattice edge once
        self.flood()?;
        // Stage 3: classify cells, clipping those crossed by the boundary
        self.measure();
        // Stage 4: dropped cells bequeath their boundary hit to neighbors
        self.propagate();
        // Stages 5-7: emit cells, then deduplicated points, then faces
        self.emit_cells();
        self.emit_points();
        self.emit_faces();
        // Stage 8: record normal orientation per cell side
        self.orient();
        Ok(CellGrid {
            parameters: self.parameters,
            points: self.points,
            faces: self.faces,
            cells: self.cells,
        })
    }

    /// Set a corner's status in the given cell and in every cell sharing
    /// the corner, creating map entries as needed
    fn mark_corner(&mut self, point: PointPosition, status: CornerStatus) {
        self.map
            .entry(point.position)
            .or_default()
            .corners[point.corner]
            .status = status;
        for sharer in self.parameters.grid.point_neighbors(point) {
            self.map
                .entry(sharer.position)
                .or_default()
                .corners[sharer.corner]
                .status = status;
        }
    }

    fn corner_status(&self, position: Position, corner: usize) -> CornerStatus {
        self.map
            .get(&position)
            .map_or(CornerStatus::Unreached, |cell| cell.corners[corner].status)
    }

    /// Stage 2: while any corner is active, probe the two faces adjacent to
    /// each active corner and discover the corners across unblocked faces.
    /// At the end of each round, discovered corners activate and active
    /// corners settle.
    fn flood(&mut self) -> anyhow::Result<()> {
        let shape = self.shape;
        let mut round = 0;
        loop {
            let frontier: Vec<Position> = self
                .map
                .iter()
                .filter(|(_, cell)| {
                    cell.corners[..shape]
                        .iter()
                        .any(|slot| slot.status == CornerStatus::Active)
                })
                .map(|(&position, _)| position)
                .collect();
            if frontier.is_empty() {
                break;
            }
            if self.map.len() > self.parameters.grid.max_cells {
                bail!(
                    "cell grid flood exceeded {} positions; the boundaries \
                     do not enclose the lattice origin",
                    self.parameters.grid.max_cells
                );
            }
            for position in frontier {
                for corner in 0..shape {
                    if self.corner_status(position, corner)
                        != CornerStatus::Active
                    {
                        continue;
                    }
                    // The faces on either side of the corner
                    self.probe_face(position, corner, corner);
                    self.probe_face(
                        position,
                        (corner + shape - 1) % shape,
                        corner,
                    );
                }
            }
            self.promote();
            round += 1;
            debug!(
                "Cell flood round {round}: {} positions discovered",
                self.map.len()
            );
        }
        Ok(())
    }

    /// Probe one face of one cell against the boundaries, unless the face
    /// was already probed from either side. Results are recorded on both
    /// the cell and its face neighbor, which is what keeps every lattice
    /// edge at exactly one probe.
    fn probe_face(
        &mut self,
        position: Position,
        face: usize,
        from_corner: usize,
    ) {
        if self
            .map
            .get(&position)
            .map_or(false, |cell| cell.faces[face].probed)
        {
            return;
        }
        let grid = self.parameters.grid;
        let other_corner = if face == from_corner {
            (from_corner + 1) % self.shape
        } else {
            face
        };
        let corners = grid.corners(position);
        // Probe from the current corner so the nearest hit is nearest to it
        let hit = nearest_intersection(
            self.boundaries,
            corners[from_corner],
            corners[other_corner],
        );
        let mirror = grid.face_neighbor(FacePosition { position, face });
        for fp in [FacePosition { position, face }, mirror] {
            let cell = self.map.entry(fp.position).or_default();
            cell.faces[fp.face].probed = true;
            if let Some((intersection, boundary)) = hit {
                cell.faces[fp.face].intersection = Some(intersection);
                cell.faces[fp.face].boundary = Some(boundary);
                cell.intersection = Some(intersection);
                cell.boundary = Some(boundary);
            }
        }
        if hit.is_none()
            && self.corner_status(position, other_corner)
                == CornerStatus::Unreached
        {
            self.mark_corner(
                PointPosition {
                    position,
                    corner: other_corner,
                },
                CornerStatus::ToBeActive,
            );
        }
    }

    /// End-of-round promotion: active corners settle, discovered corners
    /// activate. Shared statuses promote identically in every listing.
    fn promote(&mut self) {
        let shape = self.shape;
        for cell in self.map.values_mut() {
            for slot in &mut cell.corners[..shape] {
                slot.status = match slot.status {
                    CornerStatus::Active => CornerStatus::Passive,
                    CornerStatus::ToBeActive => CornerStatus::Active,
                    status => status,
                };
            }
        }
    }

    /// Stage 3: walk each cell's corners in order, assembling the outline
    /// polygon (passive corners, plus the boundary crossing wherever the
    /// status flips), and classify the cell against the area threshold.
    fn measure(&mut self) {
        let shape = self.shape;
        let nominal = self.nominal_area;
        let threshold = self.parameters.threshold_area;
        let grid = self.parameters.grid;
        for (&position, cell) in self.map.iter_mut() {
            let all_passive = cell.corners[..shape]
                .iter()
                .all(|slot| slot.status == CornerStatus::Passive);
            let any_hit = cell.faces[..shape]
                .iter()
                .any(|slot| slot.intersection.is_some());
            if all_passive && !any_hit {
                // Untouched interior cell
                cell.outline = (0..shape).map(OutlineVertex::Corner).collect();
                cell.area = nominal;
                cell.center = grid.center(position);
                cell.complete = true;
                continue;
            }

            let corners = grid.corners(position);
            let mut outline = Vec::new();
            let mut coords = Vec::new();
            for corner in 0..shape {
                if cell.corners[corner].status == CornerStatus::Passive {
                    outline.push(OutlineVertex::Corner(corner));
                    coords.push(corners[corner]);
                }
                let next = (corner + 1) % shape;
                let passive =
                    cell.corners[corner].status == CornerStatus::Passive;
                let next_passive =
                    cell.corners[next].status == CornerStatus::Passive;
                if passive != next_passive {
                    if let Some(intersection) = cell.faces[corner].intersection
                    {
                        outline.push(OutlineVertex::Cut(corner));
                        coords.push(intersection.coord);
                    }
                }
            }
            let (area, center) = polygon_area_centroid(&coords);
            cell.outline = outline;
            cell.area = area;
            cell.center = center;
            // Degenerate outlines (fewer than 3 vertices) are never kept;
            // the threshold comparison handles both special cases, since
            // area >= 0 always holds and area >= nominal only for uncut
            // polygons
            cell.complete = coords.len() >= 3 && area >= threshold * nominal;
        }
    }

    /// Stage 4: a dropped cell's boundary hit is adopted by any complete
    /// face neighbor that has none of its own, so the hit survives the
    /// dropped cell.
    fn propagate(&mut self) {
        let shape = self.shape;
        let grid = self.parameters.grid;
        let mut inherited: Vec<(Position, Intersection, BoundaryId)> =
            Vec::new();
        for (&position, cell) in self.map.iter() {
            if cell.complete {
                continue;
            }
            if let (Some(intersection), Some(boundary)) =
                (cell.intersection, cell.boundary)
            {
                for face in 0..shape {
                    let neighbor = grid
                        .face_neighbor(FacePosition { position, face })
                        .position;
                    if let Some(other) = self.map.get(&neighbor) {
                        if other.complete && other.intersection.is_none() {
                            inherited.push((neighbor, intersection, boundary));
                        }
                    }
                }
            }
        }
        for (position, intersection, boundary) in inherited {
            if let Some(cell) = self.map.get_mut(&position) {
                // First writer wins, in map order
                if cell.intersection.is_none() {
                    cell.intersection = Some(intersection);
                    cell.boundary = Some(boundary);
                }
            }
        }
    }

    fn complete_positions(&self) -> Vec<Position> {
        self.map
            .iter()
            .filter(|(_, cell)| cell.complete)
            .map(|(&position, _)| position)
            .collect()
    }

    /// Stage 5: allocate the cell objects, in position order
    fn emit_cells(&mut self) {
        for (&position, cell) in self.map.iter_mut() {
            if !cell.complete {
                continue;
            }
            let id = CellId(self.cells.len());
            cell.cell = Some(id);
            self.cells.push(Cell {
                position,
                center: cell.center,
                area: cell.area,
                boundary: cell.boundary,
                sides: Vec::new(),
            });
        }
    }

    /// Stage 6: allocate mesh vertices for every outline vertex of every
    /// complete cell, deduplicating shared corners through point_neighbors
    /// and shared boundary points through face_neighbor.
    fn emit_points(&mut self) {
        let grid = self.parameters.grid;
        for position in self.complete_positions() {
            let corners = grid.corners(position);
            let outline = self.map[&position].outline.clone();
            for vertex in outline {
                match vertex {
                    OutlineVertex::Corner(corner) => {
                        if self.map[&position].corners[corner].point.is_some()
                        {
                            continue;
                        }
                        let id = PointId(self.points.len());
                        self.points.push(Point {
                            coord: corners[corner],
                            normal: Vector::ZERO,
                            boundary: None,
                        });
                        let point = PointPosition { position, corner };
                        self.map
                            .get_mut(&position)
                            .expect("reached cell missing from map")
                            .corners[corner]
                            .point = Some(id);
                        for sharer in grid.point_neighbors(point) {
                            if let Some(cell) =
                                self.map.get_mut(&sharer.position)
                            {
                                cell.corners[sharer.corner].point = Some(id);
                            }
                        }
                    }
                    OutlineVertex::Cut(face) => {
                        let slot = self.map[&position].faces[face];
                        if slot.point.is_some() {
                            continue;
                        }
                        if let Some(intersection) = slot.intersection {
                            let id = PointId(self.points.len());
                            self.points.push(Point {
                                coord: intersection.coord,
                                normal: intersection.normal,
                                boundary: slot.boundary,
                            });
                            self.map
                                .get_mut(&position)
                                .expect("reached cell missing from map")
                                .faces[face]
                                .point = Some(id);
                            let mirror = grid
                                .face_neighbor(FacePosition { position, face });
                            if let Some(cell) =
                                self.map.get_mut(&mirror.position)
                            {
                                cell.faces[mirror.face].point = Some(id);
                            }
                        }
                    }
                }
            }
        }
    }

    /// Stage 7: build each complete cell's side list from its outline,
    /// creating faces on first encounter and reusing the neighbor's face
    /// object on the second. Consecutive boundary points get the irregular
    /// face that closes the clipped polygon.
    fn emit_faces(&mut self) {
        let shape = self.shape;
        for position in self.complete_positions() {
            let outline = self.map[&position].outline.clone();
            let cell_boundary = self.map[&position].boundary;
            let len = outline.len();
            let mut sides = Vec::with_capacity(len);
            for index in 0..len {
                let current = outline[index];
                let next = outline[(index + 1) % len];
                let a = self.vertex_point(position, current);
                let b = self.vertex_point(position, next);
                let (face, neighbor) = match (current, next) {
                    (OutlineVertex::Corner(p), OutlineVertex::Corner(q))
                        if q == (p + 1) % shape =>
                    {
                        self.shared_face(position, p, a, b, None)
                    }
                    (OutlineVertex::Corner(p), OutlineVertex::Cut(f))
                        if f == p =>
                    {
                        let boundary = self.map[&position].faces[f].boundary;
                        self.shared_face(position, f, a, b, boundary)
                    }
                    (OutlineVertex::Cut(f), OutlineVertex::Corner(q))
                        if (f + 1) % shape == q =>
                    {
                        let boundary = self.map[&position].faces[f].boundary;
                        self.shared_face(position, f, a, b, boundary)
                    }
                    // Two consecutive boundary points (or a degenerate
                    // outline): the cell's own edge along the boundary
                    _ => (self.push_face(a, b, cell_boundary, true), None),
                };
                sides.push(Side {
                    point: a,
                    face,
                    neighbor,
                    inwards: false,
                });
            }
            let id = self.map[&position]
                .cell
                .expect("complete cell was not emitted");
            self.cells[id.0].sides = sides;
        }
    }

    /// Stage 8: record, per cell side, whether the face's stored normal
    /// points into the cell, so consumers never recompute orientation
    fn orient(&mut self) {
        for cell in &mut self.cells {
            for side in &mut cell.sides {
                let face = &self.faces[side.face.0];
                side.inwards =
                    (cell.center - face.center).dot(face.normal) >= 0.0;
            }
        }
    }

    fn vertex_point(
        &self,
        position: Position,
        vertex: OutlineVertex,
    ) -> PointId {
        let cell = &self.map[&position];
        let point = match vertex {
            OutlineVertex::Corner(corner) => cell.corners[corner].point,
            OutlineVertex::Cut(face) => cell.faces[face].point,
        };
        point.expect("outline vertex without an emitted point")
    }

    /// Face along lattice edge `face` of `position`: created once, then
    /// reused from whichever side emitted it first. Also resolves the
    /// emitted cell on the other side, if any.
    fn shared_face(
        &mut self,
        position: Position,
        face: usize,
        a: PointId,
        b: PointId,
        boundary: Option<BoundaryId>,
    ) -> (FaceId, Option<CellId>) {
        let mirror = self
            .parameters
            .grid
            .face_neighbor(FacePosition { position, face });
        let existing = self.map[&position].faces[face].face;
        let id = match existing {
            Some(id) => id,
            None => {
                let id = self.push_face(a, b, boundary, false);
                self.map
                    .get_mut(&position)
                    .expect("reached cell missing from map")
                    .faces[face]
                    .face = Some(id);
                if let Some(cell) = self.map.get_mut(&mirror.position) {
                    cell.faces[mirror.face].face = Some(id);
                }
                id
            }
        };
        let neighbor =
            self.map.get(&mirror.position).and_then(|cell| cell.cell);
        (id, neighbor)
    }

    fn push_face(
        &mut self,
        a: PointId,
        b: PointId,
        boundary: Option<BoundaryId>,
        irregular: bool,
    ) -> FaceId {
        let id = FaceId(self.faces.len());
        let coord_a = self.points[a.0].coord;
        let coord_b = self.points[b.0].coord;
        let direction = coord_b - coord_a;
        let length = direction.norm();
        let normal = if length > 0.0 {
            direction.perp() / length
        } else {
            Vector::ZERO
        };
        self.faces.push(Face {
            points: [a, b],
            center: (coord_a + coord_b) / 2.0,
            normal,
            length,
            boundary,
            irregular,
        });
        id
    }
}
