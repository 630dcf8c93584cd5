#![allow(clippy::multiple_crate_versions)]
#![warn(missing_docs)]

//! Planar Delaunay triangulation and its Voronoi dual.
//!
//! The triangulation is built incrementally with the Bowyer-Watson algorithm
//! and the Voronoi diagram is derived from it by joining the circumcenters of
//! neighboring triangles.
//!
//! # Key Features
//!
//! - Circumcircle solver with relative degeneracy detection
//! - Bowyer-Watson insertion with a pairwise reference scan and an indexed
//!   hash-map scan that return identical results
//! - Optional deadline and non-fatal insertion diagnostics
//! - Voronoi cells with their edges, vertices and hull status
//!
//! # Example
//!
//! ```
//! use delaunay_voronoi::{triangulate, TriangulationOps, Vertex};
//!
//! let vertices = [
//!     Vertex::new(0.0, 0.0),
//!     Vertex::new(4.0, 0.0),
//!     Vertex::new(4.0, 3.0),
//!     Vertex::new(0.0, 3.0),
//!     Vertex::new(1.5, 1.0),
//! ];
//!
//! let triangulation = triangulate(&vertices).unwrap();
//! assert!(triangulation.is_delaunay());
//!
//! let diagram = triangulation.voronoi();
//! assert_eq!(diagram.len(), 5);
//! assert!(diagram.cell(&Vertex::new(1.5, 1.0)).unwrap().is_closed());
//! ```

use std::time::{Duration, Instant};

// Module declarations (avoiding mod.rs files)
/// Error types for the library.
pub mod errors;

/// Command line and programmatic run configuration.
pub mod config;

/// Random vertex generation.
pub mod util;

/// Geometric primitives and triangle collections.
pub mod geometry {
    /// Circumcircle solver.
    pub mod circumcircle;
    /// High-level triangulation operations.
    pub mod operations;
    /// Vertex and circle value types.
    pub mod primitives;
    /// Read-only query trait over triangle collections.
    pub mod traits;
    /// Triangle and edge model.
    pub mod triangle;
}

/// Delaunay triangulation.
pub mod delaunay {
    /// Bowyer-Watson insertion.
    pub mod bowyer_watson;
    /// Triangulation result type.
    pub mod triangulation;
}

/// Voronoi dual of a triangulation.
pub mod voronoi {
    /// Voronoi diagram types.
    pub mod diagram;
    /// Derivation of the diagram from triangles.
    pub mod dualizer;
}

// Re-exports for convenience
pub use config::{DiagramConfig, Mode, TestConfig};
pub use delaunay::bowyer_watson::{
    ScanStrategy, TriangulationOptions, triangulate, triangulate_with,
};
pub use delaunay::triangulation::{Diagnostic, Triangulation};
pub use errors::{GeometryError, GeometryResult};
pub use geometry::operations::TriangulationOps;
pub use geometry::primitives::{Circle, Vertex};
pub use geometry::traits::TriangulationQuery;
pub use geometry::triangle::{Edge, Triangle};
pub use voronoi::diagram::{VoronoiCell, VoronoiDiagram, VoronoiEdge};
pub use voronoi::dualizer::{CellAssignment, voronoi, voronoi_with, voronoi_with_assignment};

/// Outcome of [`run`].
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// The generated sites
    pub vertices: Vec<Vertex>,
    /// Their Delaunay triangulation
    pub triangulation: Triangulation,
    /// The Voronoi dual, when the mode asks for it
    pub diagram: Option<VoronoiDiagram>,
    /// Wall time for triangulation plus dualization
    pub elapsed: Duration,
}

/// Generates random sites and computes the diagram selected by `config`.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidParameters`] if the configuration is
/// invalid, and any triangulation error from [`triangulate_with`].
pub fn run(config: &DiagramConfig) -> GeometryResult<RunSummary> {
    config.validate()?;

    log::info!("Number of vertices: {}", config.vertices);
    log::info!("Coordinate range: [{}, {})", config.min, config.max);
    log::info!("Mode: {:?}", config.mode);

    let start = Instant::now();
    let vertices = util::generate_random_vertices(
        config.vertices as usize,
        config.coordinate_range(),
        config.seed,
    )?;
    log::info!("Generated vertices in {:?}", start.elapsed());

    let options = config.to_options();
    let start = Instant::now();
    let triangulation = triangulate_with(&vertices, &options)?;
    log::info!("Triangulated in {:?}", start.elapsed());
    triangulation.print_summary();

    let diagram = match config.mode {
        Mode::Triangulate => None,
        Mode::Voronoi => {
            let dual_start = Instant::now();
            let diagram = triangulation.voronoi_with(options.scan);
            log::info!("Dualized in {:?}", dual_start.elapsed());
            diagram.print_summary();
            Some(diagram)
        }
    };

    Ok(RunSummary {
        vertices,
        triangulation,
        diagram,
        elapsed: start.elapsed(),
    })
}
