//! Voronoi diagram types.
//!
//! A [`VoronoiDiagram`] holds one [`VoronoiCell`] per Delaunay vertex. Cells
//! on the convex hull are marked [`VoronoiCell::open`]; they are left
//! unbounded, with no rays and no clipping.

use crate::geometry::primitives::Vertex;
use serde::Serialize;
use std::collections::HashMap;

/// A Voronoi edge between the circumcenters of two neighboring triangles.
///
/// Cocircular inputs produce zero-length edges, which are kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoronoiEdge {
    /// Circumcenter of the earlier triangle
    pub start: Vertex,
    /// Circumcenter of the later triangle
    pub end: Vertex,
}

impl VoronoiEdge {
    /// Creates a new edge.
    #[must_use]
    pub const fn new(start: Vertex, end: Vertex) -> Self {
        Self { start, end }
    }

    /// Length of the edge, zero for cocircular neighbors.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

/// The Voronoi cell around one site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoronoiCell {
    /// The Delaunay vertex generating this cell
    pub site: Vertex,
    /// Edges between neighboring circumcenters, in discovery order
    pub edges: Vec<VoronoiEdge>,
    /// Circumcenters of the triangles incident to the site, in triangle order
    pub vertices: Vec<Vertex>,
    /// True when the site lies on the convex hull, so the cell is unbounded
    pub open: bool,
}

impl VoronoiCell {
    pub(crate) const fn new(site: Vertex) -> Self {
        Self {
            site,
            edges: Vec::new(),
            vertices: Vec::new(),
            open: false,
        }
    }

    /// Returns true if the cell is bounded.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        !self.open
    }
}

/// Voronoi cells in the order their sites were first seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VoronoiDiagram {
    cells: Vec<VoronoiCell>,
    #[serde(skip)]
    index: HashMap<Vertex, usize>,
}

impl VoronoiDiagram {
    /// Returns the cell for `site`, creating it on first sight.
    pub(crate) fn cell_mut(&mut self, site: Vertex) -> &mut VoronoiCell {
        let next = self.cells.len();
        let slot = *self.index.entry(site).or_insert(next);
        if slot == next {
            self.cells.push(VoronoiCell::new(site));
        }
        &mut self.cells[slot]
    }

    /// All cells, in first-seen order.
    #[must_use]
    pub fn cells(&self) -> &[VoronoiCell] {
        &self.cells
    }

    /// The cell generated by `site`, if the site is a Delaunay vertex.
    #[must_use]
    pub fn cell(&self, site: &Vertex) -> Option<&VoronoiCell> {
        self.index.get(site).map(|&i| &self.cells[i])
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if there are no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Total number of edges over all cells. Every interior Delaunay edge
    /// contributes one Voronoi edge to each of its two endpoint cells.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.cells.iter().map(|c| c.edges.len()).sum()
    }

    /// Number of unbounded cells.
    #[must_use]
    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.open).count()
    }

    /// Cells ordered by site, x first then y.
    #[must_use]
    pub fn sorted_by_site(&self) -> Vec<&VoronoiCell> {
        let mut cells: Vec<&VoronoiCell> = self.cells.iter().collect();
        cells.sort_by_key(|c| c.site.sort_key());
        cells
    }

    /// Consumes the diagram and returns its cells.
    #[must_use]
    pub fn into_cells(self) -> Vec<VoronoiCell> {
        self.cells
    }

    /// Logs a summary of the diagram.
    pub fn print_summary(&self) {
        log::info!("Voronoi Diagram Summary:");
        log::info!("  Cells: {}", self.len());
        log::info!("  Open cells: {}", self.open_cell_count());
        log::info!("  Edges: {}", self.edge_count());
    }
}
