//! Plane geometry value types shared by every other module: the 2D [Vector]
//! and the [Intersection] record produced when a probe segment crosses a
//! boundary figure.

use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// A point or displacement in the plane. This is used for both meanings
/// interchangeably; the distinction never pays for itself in a library this
/// size.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product with another vector
    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean norm
    pub fn norm(self) -> f64 {
        self.squared_norm().sqrt()
    }

    /// Squared Euclidean norm. Cheaper than [Self::norm] when only comparing
    /// distances.
    pub fn squared_norm(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// This vector scaled to unit length. The zero vector stays zero rather
    /// than becoming NaN.
    pub fn normalized(self) -> Vector {
        let norm = self.norm();
        if norm > 0.0 {
            self / norm
        } else {
            Self::ZERO
        }
    }

    /// Quarter turn counterclockwise
    pub fn perp(self) -> Vector {
        Self::new(-self.y, self.x)
    }

    /// Quarter turn clockwise
    pub fn perp_cw(self) -> Vector {
        Self::new(self.y, -self.x)
    }

    /// Rotation by `angle` radians counterclockwise around the origin
    pub fn rotated(self, angle: f64) -> Vector {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }
}

/// A valid hit between a probe segment and a boundary figure. Invalidity is
/// expressed as `Option<Intersection>` by the functions that produce these,
/// so an `Intersection` value always describes a real crossing.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    /// Where the segment crosses the figure
    pub coord: Vector,
    /// Unit direction of the figure's surface at the crossing
    pub tangent: Vector,
    /// Unit normal of the figure at the crossing, oriented by the figure's
    /// normal-side flag
    pub normal: Vector,
}

impl Intersection {
    /// Build an intersection record. The tangent and normal are normalized
    /// here so that consumers can rely on unit length.
    pub fn new(coord: Vector, tangent: Vector, normal: Vector) -> Self {
        Self {
            coord,
            tangent: tangent.normalized(),
            normal: normal.normalized(),
        }
    }
}

/// Signed area and centroid of a simple polygon, computed as a triangle fan
/// from the first vertex. The area is positive for counterclockwise winding.
/// Degenerate inputs (fewer than 3 vertices, or zero total area) report zero
/// area and the first vertex (or the origin) as centroid.
pub fn polygon_area_centroid(vertices: &[Vector]) -> (f64, Vector) {
    let first = match vertices.first() {
        Some(&v) => v,
        None => return (0.0, Vector::ZERO),
    };
    let mut area = 0.0;
    let mut weighted = Vector::ZERO;
    for window in vertices.windows(2).skip(1) {
        let (a, b) = (window[0], window[1]);
        let e1 = a - first;
        let e2 = b - first;
        let triangle_area = (e1.x * e2.y - e1.y * e2.x) / 2.0;
        let centroid = (first + a + b) / 3.0;
        area += triangle_area;
        weighted += centroid * triangle_area;
    }
    if area != 0.0 {
        (area, weighted / area)
    } else {
        (0.0, first)
    }
}
