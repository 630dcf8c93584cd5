//! Result of a Delaunay triangulation.
//!
//! A [`Triangulation`] owns the surviving triangles together with the
//! super-triangle that seeded the insertion and the diagnostics recorded while
//! inserting vertices.

use crate::delaunay::bowyer_watson::ScanStrategy;
use crate::geometry::operations::TriangulationOps;
use crate::geometry::primitives::Vertex;
use crate::geometry::traits::TriangulationQuery;
use crate::geometry::triangle::{Edge, Triangle};
use crate::voronoi::diagram::VoronoiDiagram;
use crate::voronoi::dualizer::{CellAssignment, voronoi_with, voronoi_with_assignment};
use std::fmt;

/// A non-fatal event recorded during insertion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diagnostic {
    /// An input vertex equal to an earlier one was skipped
    DuplicateVertex {
        /// Position of the skipped vertex in the input
        index: usize,
        /// The duplicated coordinates
        vertex: Vertex,
    },
    /// A cavity edge and the inserted vertex were collinear, so no triangle
    /// was formed for that edge
    DegenerateCandidate {
        /// Position of the inserted vertex in the input
        index: usize,
        /// The inserted vertex
        vertex: Vertex,
        /// The cavity boundary edge that could not be joined to the vertex
        edge: Edge,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateVertex { index, vertex } => {
                write!(f, "vertex {index} {vertex} duplicates an earlier vertex")
            }
            Self::DegenerateCandidate {
                index,
                vertex,
                edge,
            } => write!(
                f,
                "vertex {index} {vertex} is collinear with cavity edge {} - {}",
                edge.v0, edge.v1
            ),
        }
    }
}

/// A Delaunay triangulation of a planar point set.
#[derive(Debug, Clone)]
pub struct Triangulation {
    triangles: Vec<Triangle>,
    super_triangle: Triangle,
    inserted: usize,
    diagnostics: Vec<Diagnostic>,
    /// Cached edge count to avoid recalculation
    cached_edge_count: std::cell::OnceCell<usize>,
}

impl Triangulation {
    pub(crate) const fn new(
        triangles: Vec<Triangle>,
        super_triangle: Triangle,
        inserted: usize,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            triangles,
            super_triangle,
            inserted,
            diagnostics,
            cached_edge_count: std::cell::OnceCell::new(),
        }
    }

    /// Consumes the triangulation and returns its triangles.
    #[must_use]
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// The bounding triangle used to seed insertion. None of its vertices
    /// appear in [`TriangulationQuery::triangles`].
    #[must_use]
    pub const fn super_triangle(&self) -> &Triangle {
        &self.super_triangle
    }

    /// Returns the number of triangles in the triangulation.
    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if no triangle survived cleanup (e.g. collinear input).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Number of distinct input vertices that were inserted.
    #[must_use]
    pub const fn inserted_vertex_count(&self) -> usize {
        self.inserted
    }

    /// Non-fatal events recorded during insertion.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Derives the Voronoi diagram with the reference pairwise scan.
    #[must_use]
    pub fn voronoi(&self) -> VoronoiDiagram {
        self.voronoi_with(ScanStrategy::Pairwise)
    }

    /// Derives the Voronoi diagram with the given scan strategy.
    #[must_use]
    pub fn voronoi_with(&self, scan: ScanStrategy) -> VoronoiDiagram {
        voronoi_with(&self.triangles, scan)
    }

    /// Derives the Voronoi diagram with the given scan and cell assignment.
    #[must_use]
    pub fn voronoi_with_assignment(
        &self,
        scan: ScanStrategy,
        assignment: CellAssignment,
    ) -> VoronoiDiagram {
        voronoi_with_assignment(&self.triangles, scan, assignment)
    }

    /// Logs a summary of the triangulation.
    pub fn print_summary(&self) {
        log::info!("Delaunay Triangulation Summary:");
        log::info!("  Inserted vertices: {}", self.inserted);
        log::info!("  Vertices: {}", self.vertex_count());
        log::info!("  Edges: {}", self.edge_count());
        log::info!("  Triangles: {}", self.triangle_count());
        log::info!("  Hull edges: {}", self.boundary_edges().len());
        if !self.diagnostics.is_empty() {
            log::info!("  Diagnostics: {}", self.diagnostics.len());
        }
    }
}

impl TriangulationQuery for Triangulation {
    fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    fn edge_count(&self) -> usize {
        *self
            .cached_edge_count
            .get_or_init(|| self.triangles.edges().len())
    }
}
