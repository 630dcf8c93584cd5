//! Triangle and edge model.

use crate::errors::GeometryResult;
use crate::geometry::circumcircle::circumcircle;
use crate::geometry::primitives::{Circle, Vertex};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// An undirected edge between two vertices.
///
/// Two edges are equal when they join the same pair of vertices in either
/// direction, and they hash identically in that case.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint
    pub v0: Vertex,
    /// Second endpoint
    pub v1: Vertex,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub const fn new(v0: Vertex, v1: Vertex) -> Self {
        Self { v0, v1 }
    }

    /// Endpoints ordered by [`Vertex::sort_key`], independent of direction.
    #[must_use]
    pub fn canonical(&self) -> (Vertex, Vertex) {
        if self.v0.sort_key() <= self.v1.sort_key() {
            (self.v0, self.v1)
        } else {
            (self.v1, self.v0)
        }
    }

    /// Length of the edge.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.v0.distance(&self.v1)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.v0 == other.v0 && self.v1 == other.v1)
            || (self.v0 == other.v1 && self.v1 == other.v0)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

/// A triangle with its cached circumcircle.
///
/// The circumcircle is computed once in [`Triangle::new`] and the vertices
/// cannot be changed afterwards, so it always matches the vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triangle {
    v0: Vertex,
    v1: Vertex,
    v2: Vertex,
    circumcircle: Circle,
}

impl Triangle {
    /// Creates a triangle and computes its circumcircle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateTriangle`](crate::GeometryError::DegenerateTriangle)
    /// if the three vertices are collinear or coincident.
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> GeometryResult<Self> {
        let circumcircle = circumcircle(v0, v1, v2)?;
        Ok(Self {
            v0,
            v1,
            v2,
            circumcircle,
        })
    }

    /// The three vertices in construction order.
    #[must_use]
    pub const fn vertices(&self) -> [Vertex; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// The cached circumcircle.
    #[must_use]
    pub const fn circumcircle(&self) -> &Circle {
        &self.circumcircle
    }

    /// The circumcenter, i.e. the Voronoi vertex dual to this triangle.
    #[must_use]
    pub const fn circumcenter(&self) -> Vertex {
        self.circumcircle.center
    }

    /// The edges `(v0,v1)`, `(v1,v2)`, `(v2,v0)`.
    #[must_use]
    pub const fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.v0, self.v1),
            Edge::new(self.v1, self.v2),
            Edge::new(self.v2, self.v0),
        ]
    }

    /// Returns true if `v` is one of the triangle's vertices.
    #[must_use]
    pub fn has_vertex(&self, v: &Vertex) -> bool {
        self.v0 == *v || self.v1 == *v || self.v2 == *v
    }

    /// Returns true if `v` lies inside the circumcircle or on its boundary.
    #[must_use]
    pub fn in_circumcircle(&self, v: &Vertex) -> bool {
        self.circumcircle.contains(v)
    }

    /// Number of vertices this triangle shares with `other`.
    #[must_use]
    pub fn shared_vertex_count(&self, other: &Self) -> usize {
        self.vertices()
            .iter()
            .filter(|v| other.has_vertex(v))
            .count()
    }

    /// Vertices of this triangle that also belong to `other`, in this
    /// triangle's vertex order.
    #[must_use]
    pub fn shared_vertices(&self, other: &Self) -> Vec<Vertex> {
        self.vertices()
            .into_iter()
            .filter(|v| other.has_vertex(v))
            .collect()
    }

    /// Two triangles are neighbors when they share exactly two vertices,
    /// i.e. one edge.
    #[must_use]
    pub fn is_neighbor(&self, other: &Self) -> bool {
        self.shared_vertex_count(other) == 2
    }

    /// Signed area, positive for counter-clockwise vertex order.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        ((self.v1.x - self.v0.x) * (self.v2.y - self.v0.y)
            - (self.v1.y - self.v0.y) * (self.v2.x - self.v0.x))
            / 2.0
    }

    /// Unsigned area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}
