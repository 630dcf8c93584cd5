//! Planar point and circle primitives.
//!
//! Vertices compare with exact floating-point equality. There is no epsilon:
//! two vertices are the same site only if both coordinates are bit-for-bit
//! equal (with `-0.0` treated as `0.0`).

use float_ord::FloatOrd;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A point in the plane.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vertex {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Vertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another vertex.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared norm `x² + y²`, the lifting term of the circumcircle formula.
    #[must_use]
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns true if both coordinates are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Total-order key consistent with vertex equality.
    ///
    /// Used to sort vertices lexicographically and to give edges a
    /// direction-independent canonical form.
    #[must_use]
    pub fn sort_key(&self) -> (FloatOrd<f64>, FloatOrd<f64>) {
        (FloatOrd(canonical(self.x)), FloatOrd(canonical(self.y)))
    }
}

/// Maps `-0.0` onto `0.0` so that equal vertices share one bit pattern.
#[allow(clippy::float_cmp)]
fn canonical(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[allow(clippy::float_cmp)]
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

// Reflexive only for finite coordinates. `Vertex::new` and deserialization
// accept NaN, which is unequal to itself; `triangulate` rejects such input
// before any vertex is hashed.
impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical(self.x).to_bits().hash(state);
        canonical(self.y).to_bits().hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vertex {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center of the circle
    pub center: Vertex,
    /// Radius, never negative
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle.
    #[must_use]
    pub const fn new(center: Vertex, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns true if `v` lies inside the circle or on its boundary.
    ///
    /// Points exactly on the boundary count as inside.
    #[must_use]
    pub fn contains(&self, v: &Vertex) -> bool {
        self.center.distance(v) <= self.radius
    }

    /// Returns true if `v` lies strictly inside the circle, allowing a
    /// relative tolerance on the radius.
    #[must_use]
    pub fn strictly_contains(&self, v: &Vertex, relative_tolerance: f64) -> bool {
        self.center.distance(v) < self.radius * (1.0 - relative_tolerance)
    }
}
