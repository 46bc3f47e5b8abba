//! Boundary figures delimiting the grid domain, and the probing operation
//! the builders use to test candidate edges against them.
//!
//! A figure is oriented: its normal-side flag decides which of the two
//! possible surface normals gets reported on an intersection. The grid
//! builders pass the reported normal through to the emitted points and
//! faces untouched, so callers pick the flag that matches their own
//! convention (e.g. `normal_inwards: true` on a circle enclosing the
//! domain, if they want boundary normals pointing back into it).

use crate::geom::{Intersection, Vector};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// An oriented geometric figure that can delimit the domain.
///
/// This is a closed enumeration: new figure kinds are rare, and the only
/// behavior a figure has is [Figure::intersection].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Figure {
    /// A line segment from `a` to `b`. When `normal_clockwise` is false the
    /// stored normal is the segment direction `b - a` rotated a quarter turn
    /// clockwise, otherwise counterclockwise.
    Line {
        a: Vector,
        b: Vector,
        normal_clockwise: bool,
    },
    /// A full circle. When `normal_inwards` is true the reported normal
    /// points from the hit towards the center.
    Circle {
        center: Vector,
        radius: f64,
        normal_inwards: bool,
    },
    /// A circular arc covering azimuths `[azimuth, azimuth + angle]`
    /// (radians, counterclockwise). Normal orientation as for `Circle`.
    Arc {
        center: Vector,
        radius: f64,
        normal_inwards: bool,
        azimuth: f64,
        angle: f64,
    },
}

impl Figure {
    /// Find the intersection between this figure and the segment `a -> b`
    /// that lies closest to `a`, or `None` if the segment does not cross the
    /// figure.
    ///
    /// Comparisons are exact on IEEE doubles; tangencies and degenerate
    /// (zero-length or parallel) configurations count as misses. Callers
    /// tolerate a missed tangency because neighboring cells re-probe the
    /// same segment from both sides.
    pub fn intersection(&self, a: Vector, b: Vector) -> Option<Intersection> {
        match *self {
            Self::Line {
                a: figure_a,
                b: figure_b,
                normal_clockwise,
            } => {
                segment_intersection(a, b, figure_a, figure_b, normal_clockwise)
            }
            Self::Circle {
                center,
                radius,
                normal_inwards,
            } => circle_intersection(a, b, center, radius, normal_inwards, None),
            Self::Arc {
                center,
                radius,
                normal_inwards,
                azimuth,
                angle,
            } => circle_intersection(
                a,
                b,
                center,
                radius,
                normal_inwards,
                Some((azimuth, angle)),
            ),
        }
    }
}

/// Solve `a + (b - a) * t = figure_a + (figure_b - figure_a) * s` by
/// Cramer's rule and accept the hit iff both parameters land in `[0, 1]`.
fn segment_intersection(
    a: Vector,
    b: Vector,
    figure_a: Vector,
    figure_b: Vector,
    normal_clockwise: bool,
) -> Option<Intersection> {
    let d = b - a;
    let e = figure_b - figure_a;
    let cross = d.x * e.y - d.y * e.x;
    if cross == 0.0 {
        // Parallel or degenerate, treated as a miss
        return None;
    }
    let w = figure_a - a;
    let t = (w.x * e.y - w.y * e.x) / cross;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    let s = (w.x * d.y - w.y * d.x) / cross;
    if !(0.0..=1.0).contains(&s) {
        return None;
    }
    let normal = if normal_clockwise {
        e.perp()
    } else {
        e.perp_cw()
    };
    Some(Intersection::new(a + d * t, e, normal))
}

/// Substitute the segment parametrization into `|p - center|^2 = radius^2`,
/// yielding a quadratic in the arc length along the segment. Roots are
/// tested in order of distance from `a`; for arcs the hit azimuth must also
/// fall in the covered span.
fn circle_intersection(
    a: Vector,
    b: Vector,
    center: Vector,
    radius: f64,
    normal_inwards: bool,
    span: Option<(f64, f64)>,
) -> Option<Intersection> {
    let d = b - a;
    let length = d.norm();
    if length == 0.0 {
        return None;
    }
    let f = center - a;
    // Coefficients of L^2 + bl*L + c = 0, L being distance from `a`
    let bl = -2.0 * f.dot(d) / length;
    let c = f.squared_norm() - radius * radius;
    let discriminant = bl * bl - 4.0 * c;
    if discriminant <= 0.0 {
        // No crossing, or a tangency; both count as misses
        return None;
    }
    let root = discriminant.sqrt();
    for l in [(-bl - root) / 2.0, (-bl + root) / 2.0] {
        if !(0.0..=length).contains(&l) {
            continue;
        }
        let hit = a + d * (l / length);
        let outwards = hit - center;
        if let Some((azimuth, angle)) = span {
            let theta = outwards.y.atan2(outwards.x);
            if (theta - azimuth).rem_euclid(TAU) > angle {
                continue;
            }
        }
        let normal = if normal_inwards { center - hit } else { outwards };
        return Some(Intersection::new(hit, outwards.perp_cw(), normal));
    }
    None
}

/// Index of a boundary in the slice the caller handed to a grid constructor.
/// Grids never own boundaries; entities that touch one carry this id and the
/// caller resolves it against their own storage.
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
#[display(fmt = "b{}", _0)]
pub struct BoundaryId(pub(crate) usize);

impl BoundaryId {
    /// Position of the boundary in the constructor's `boundaries` slice
    pub fn index(self) -> usize {
        self.0
    }
}

/// A domain boundary: exclusive owner of one figure. Boundary-condition
/// payloads are not stored here; callers key their own data by the
/// [BoundaryId] that emitted grid entities expose.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    figure: Figure,
}

impl Boundary {
    /// Create a boundary that takes ownership of `figure`
    pub fn new(figure: Figure) -> Self {
        Self { figure }
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }
}

/// Probe the segment `a -> b` against every boundary and return the valid
/// intersection nearest to `a` (by squared distance) together with the
/// boundary that produced it. Linear scan; there is no spatial index.
pub fn nearest_intersection(
    boundaries: &[Boundary],
    a: Vector,
    b: Vector,
) -> Option<(Intersection, BoundaryId)> {
    let mut nearest: Option<(Intersection, BoundaryId)> = None;
    for (index, boundary) in boundaries.iter().enumerate() {
        if let Some(intersection) = boundary.figure().intersection(a, b) {
            let distance = (intersection.coord - a).squared_norm();
            let closer = match nearest {
                Some((best, _)) => distance < (best.coord - a).squared_norm(),
                None => true,
            };
            if closer {
                nearest = Some((intersection, BoundaryId(index)));
            }
        }
    }
    nearest
}
