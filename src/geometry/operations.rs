//! High-level triangulation operations.
//!
//! This module provides validation and measurement that work on anything
//! implementing [`TriangulationQuery`].

use super::primitives::Vertex;
use super::traits::TriangulationQuery;
use super::triangle::{Edge, Triangle};
use std::collections::HashMap;

/// Relative radius tolerance used when checking the empty-circumcircle
/// property, so cocircular and rounding ties are not reported.
pub const DELAUNAY_TOLERANCE: f64 = 1e-9;

/// A vertex found strictly inside a triangle's circumcircle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelaunayViolation {
    /// Index of the offending triangle
    pub triangle: usize,
    /// The vertex inside its circumcircle
    pub vertex: Vertex,
}

/// Common utility operations for triangulations
pub trait TriangulationOps: TriangulationQuery {
    /// Triangles whose circumcircle strictly contains one of `sites`.
    ///
    /// Vertices of the triangle itself and points within
    /// [`DELAUNAY_TOLERANCE`] of the circle are not reported.
    fn delaunay_violations(&self, sites: &[Vertex]) -> Vec<DelaunayViolation> {
        let mut violations = Vec::new();
        for (index, triangle) in self.triangles().iter().enumerate() {
            for site in sites {
                if !triangle.has_vertex(site)
                    && triangle
                        .circumcircle()
                        .strictly_contains(site, DELAUNAY_TOLERANCE)
                {
                    violations.push(DelaunayViolation {
                        triangle: index,
                        vertex: *site,
                    });
                }
            }
        }
        violations
    }

    /// Check the empty-circumcircle property against the triangulation's own
    /// vertices
    fn is_delaunay(&self) -> bool {
        self.delaunay_violations(&self.vertices()).is_empty()
    }

    /// Edges that belong to exactly one triangle, i.e. the outer boundary
    fn boundary_edges(&self) -> Vec<Edge> {
        let mut counts: HashMap<Edge, usize> = HashMap::new();
        for edge in self.triangles().iter().flat_map(Triangle::edges) {
            *counts.entry(edge).or_insert(0) += 1;
        }
        // Walk the triangles again so the result order is deterministic
        self.triangles()
            .iter()
            .flat_map(Triangle::edges)
            .filter(|edge| counts.get(edge) == Some(&1))
            .collect()
    }

    /// Vertices on the outer boundary, in first-seen order
    fn boundary_vertices(&self) -> Vec<Vertex> {
        let mut seen = std::collections::HashSet::new();
        self.boundary_edges()
            .iter()
            .flat_map(|edge| [edge.v0, edge.v1])
            .filter(|v| seen.insert(*v))
            .collect()
    }

    /// Sum of the triangle areas
    fn total_area(&self) -> f64 {
        self.triangles().iter().map(Triangle::area).sum()
    }
}

// Blanket implementation for all types that implement TriangulationQuery
impl<T: TriangulationQuery + ?Sized> TriangulationOps for T {}
