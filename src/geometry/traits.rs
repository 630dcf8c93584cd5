//! Read-only query interface over a triangle collection.
//!
//! Anything that can hand out its triangles gets vertex, edge and face
//! counting for free; [`crate::geometry::operations::TriangulationOps`] builds
//! validation and measurement on top of this.

use crate::geometry::primitives::Vertex;
use crate::geometry::triangle::{Edge, Triangle};
use std::collections::HashSet;

/// Read-only triangulation operations
pub trait TriangulationQuery {
    /// The triangles of the triangulation
    fn triangles(&self) -> &[Triangle];

    /// Get the number of faces (triangles) in the triangulation
    fn face_count(&self) -> usize {
        self.triangles().len()
    }

    /// Distinct vertices used by at least one triangle, in first-seen order
    fn vertices(&self) -> Vec<Vertex> {
        let mut seen = HashSet::new();
        self.triangles()
            .iter()
            .flat_map(Triangle::vertices)
            .filter(|v| seen.insert(*v))
            .collect()
    }

    /// Get the number of distinct vertices in the triangulation
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Distinct undirected edges, in first-seen order
    fn edges(&self) -> Vec<Edge> {
        let mut seen = HashSet::new();
        self.triangles()
            .iter()
            .flat_map(Triangle::edges)
            .filter(|e| seen.insert(*e))
            .collect()
    }

    /// Get the number of distinct edges in the triangulation
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Calculate the Euler characteristic (V - E + F)
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    fn euler_characteristic(&self) -> i64 {
        let v = self.vertex_count() as i64;
        let e = self.edge_count() as i64;
        let f = self.face_count() as i64;
        v - e + f
    }
}

impl TriangulationQuery for [Triangle] {
    fn triangles(&self) -> &[Triangle] {
        self
    }
}

impl TriangulationQuery for Vec<Triangle> {
    fn triangles(&self) -> &[Triangle] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Triangle> {
        let a = Vertex::new(0.0, 0.0);
        let b = Vertex::new(1.0, 0.0);
        let c = Vertex::new(1.0, 1.0);
        let d = Vertex::new(0.0, 1.0);
        vec![
            Triangle::new(a, b, c).expect("Failed to create triangle"),
            Triangle::new(a, c, d).expect("Failed to create triangle"),
        ]
    }

    #[test]
    fn test_counts() {
        let triangles = square();
        assert_eq!(triangles.face_count(), 2);
        assert_eq!(triangles.vertex_count(), 4);
        assert_eq!(triangles.edge_count(), 5);
        assert_eq!(triangles.euler_characteristic(), 1);
    }

    #[test]
    fn test_vertices_first_seen_order() {
        let triangles = square();
        let vertices = triangles.vertices();
        assert_eq!(vertices[0], Vertex::new(0.0, 0.0));
        assert_eq!(vertices[3], Vertex::new(0.0, 1.0));
    }

    #[test]
    fn test_empty() {
        let triangles: Vec<Triangle> = Vec::new();
        assert_eq!(triangles.vertex_count(), 0);
        assert_eq!(triangles.edge_count(), 0);
        assert_eq!(triangles.euler_characteristic(), 0);
    }

    #[test]
    fn test_slice_impl() {
        let triangles = square();
        let slice: &[Triangle] = &triangles[..1];
        assert_eq!(slice.face_count(), 1);
        assert_eq!(slice.edge_count(), 3);
    }
}
