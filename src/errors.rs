//! Error types for triangulation and dualization.

use crate::geometry::primitives::Vertex;

/// Main error type for geometry operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Fewer than three distinct vertices were supplied
    #[error("Insufficient points: {distinct} distinct vertices, at least 3 are required")]
    InsufficientPoints {
        /// Number of distinct vertices found in the input
        distinct: usize,
    },

    /// Three points are collinear or coincident, so no circumcircle exists
    #[error("Degenerate triangle: {v0}, {v1}, {v2} are collinear or coincident")]
    DegenerateTriangle {
        /// First vertex
        v0: Vertex,
        /// Second vertex
        v1: Vertex,
        /// Third vertex
        v2: Vertex,
    },

    /// An input vertex has a NaN or infinite coordinate
    #[error("Non-finite coordinate in input vertex {index}")]
    NonFiniteVertex {
        /// Position of the offending vertex in the input sequence
        index: usize,
    },

    /// The triangulation deadline elapsed before all vertices were inserted
    #[error("Deadline exceeded after inserting {inserted} of {total} vertices")]
    DeadlineExceeded {
        /// Vertices inserted before the deadline elapsed
        inserted: usize,
        /// Vertices scheduled for insertion
        total: usize,
    },

    /// Invalid configuration or generation parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GeometryError::InsufficientPoints { distinct: 2 };
        assert_eq!(
            err.to_string(),
            "Insufficient points: 2 distinct vertices, at least 3 are required"
        );

        let err = GeometryError::DegenerateTriangle {
            v0: Vertex::new(0.0, 0.0),
            v1: Vertex::new(1.0, 0.0),
            v2: Vertex::new(2.0, 0.0),
        };
        assert!(err.to_string().contains("(2, 0)"));

        let err = GeometryError::DeadlineExceeded {
            inserted: 3,
            total: 10,
        };
        assert!(err.to_string().contains("3 of 10"));
    }
}
