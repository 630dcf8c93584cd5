//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! # Algorithm
//!
//! 1. Seed the mesh with a super-triangle that strictly contains every input
//!    vertex.
//! 2. Insert the vertices one at a time, in input order. Every triangle whose
//!    circumcircle contains the new vertex is removed; the edges that belonged
//!    to exactly one removed triangle form the cavity boundary, and each is
//!    joined to the new vertex.
//! 3. Remove every triangle touching a super-triangle vertex.
//!
//! After each insertion no triangle's circumcircle contains an inserted
//! vertex. A vertex exactly on a circumcircle counts as inside, so
//! cocircular inputs are re-triangulated rather than kept.
//!
//! # Complexity
//!
//! Every insertion rescans all triangles and, with
//! [`ScanStrategy::Pairwise`], compares every cavity edge with every other:
//! O(n²) to O(n³) overall. [`ScanStrategy::Indexed`] replaces the edge
//! comparison with a hash map and returns the same triangles in the same
//! order.
//!
//! # Example
//!
//! ```
//! use delaunay_voronoi::{triangulate, TriangulationQuery, Vertex};
//!
//! let vertices = vec![
//!     Vertex::new(0.0, 0.0),
//!     Vertex::new(1.0, 0.0),
//!     Vertex::new(1.0, 1.0),
//!     Vertex::new(0.0, 1.0),
//!     Vertex::new(0.5, 0.4),
//! ];
//!
//! let triangulation = triangulate(&vertices).unwrap();
//! assert_eq!(triangulation.face_count(), 4);
//! ```

use crate::delaunay::triangulation::{Diagnostic, Triangulation};
use crate::errors::{GeometryError, GeometryResult};
use crate::geometry::primitives::Vertex;
use crate::geometry::triangle::{Edge, Triangle};
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// Scale of the super-triangle relative to the input bounding box.
const SUPER_TRIANGLE_SCALE: f64 = 10.0;

/// How duplicate edges and shared triangle edges are found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanStrategy {
    /// Compare every element with every other (quadratic reference scan)
    #[default]
    Pairwise,
    /// Count occurrences in a hash map keyed by the undirected edge
    Indexed,
}

/// Options for [`triangulate_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriangulationOptions {
    /// Strategy for finding the cavity boundary
    pub scan: ScanStrategy,
    /// Give up once this much time has elapsed
    pub deadline: Option<Duration>,
}

impl TriangulationOptions {
    /// Creates options with the reference scan and no deadline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scan: ScanStrategy::Pairwise,
            deadline: None,
        }
    }

    /// Sets the cavity boundary scan strategy.
    #[must_use]
    pub const fn with_scan(mut self, scan: ScanStrategy) -> Self {
        self.scan = scan;
        self
    }

    /// Sets a deadline, checked before each insertion.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Computes the Delaunay triangulation of `vertices` with default options.
///
/// # Errors
///
/// See [`triangulate_with`].
pub fn triangulate(vertices: &[Vertex]) -> GeometryResult<Triangulation> {
    triangulate_with(vertices, &TriangulationOptions::default())
}

/// Computes the Delaunay triangulation of `vertices`.
///
/// Exact duplicates are skipped, and a cavity edge collinear with the
/// inserted vertex produces no triangle; both are recorded in
/// [`Triangulation::diagnostics`]. Collinear input therefore yields an empty
/// triangulation rather than an error.
///
/// # Errors
///
/// Returns [`GeometryError::NonFiniteVertex`] if a coordinate is NaN or
/// infinite, [`GeometryError::InsufficientPoints`] if fewer than three
/// distinct vertices are given, [`GeometryError::DegenerateTriangle`] if the
/// super-triangle cannot be built, and [`GeometryError::DeadlineExceeded`] if
/// the deadline elapses.
pub fn triangulate_with(
    vertices: &[Vertex],
    options: &TriangulationOptions,
) -> GeometryResult<Triangulation> {
    let start = Instant::now();

    if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
        return Err(GeometryError::NonFiniteVertex { index });
    }

    let mut diagnostics = Vec::new();
    let distinct = distinct_vertices(vertices, &mut diagnostics);
    if distinct.len() < 3 {
        return Err(GeometryError::InsufficientPoints {
            distinct: distinct.len(),
        });
    }

    let super_triangle = super_triangle(&distinct)?;
    log::debug!(
        "Super-triangle {:?} for {} distinct vertices",
        super_triangle.vertices(),
        distinct.len()
    );

    let mut triangles = vec![super_triangle];
    for (inserted, &(index, vertex)) in distinct.iter().enumerate() {
        if let Some(limit) = options.deadline
            && start.elapsed() >= limit
        {
            log::warn!(
                "Deadline of {limit:?} exceeded after {inserted} of {} insertions",
                distinct.len()
            );
            return Err(GeometryError::DeadlineExceeded {
                inserted,
                total: distinct.len(),
            });
        }
        triangles = insert_vertex(triangles, index, vertex, options.scan, &mut diagnostics);
    }

    let super_vertices = super_triangle.vertices();
    triangles.retain(|t| !super_vertices.iter().any(|s| t.has_vertex(s)));

    log::debug!(
        "Triangulated {} vertices into {} triangles in {:?}",
        distinct.len(),
        triangles.len(),
        start.elapsed()
    );

    Ok(Triangulation::new(
        triangles,
        super_triangle,
        distinct.len(),
        diagnostics,
    ))
}

/// Keeps the first occurrence of each vertex, paired with its input index.
fn distinct_vertices(vertices: &[Vertex], diagnostics: &mut Vec<Diagnostic>) -> Vec<(usize, Vertex)> {
    let mut seen = HashSet::with_capacity(vertices.len());
    let mut distinct = Vec::with_capacity(vertices.len());
    for (index, &vertex) in vertices.iter().enumerate() {
        if seen.insert(vertex) {
            distinct.push((index, vertex));
        } else {
            log::warn!("Skipping duplicate vertex {index} {vertex}");
            diagnostics.push(Diagnostic::DuplicateVertex { index, vertex });
        }
    }
    distinct
}

/// Builds a triangle strictly containing the bounding box of `vertices`.
///
/// With `delta = 10 × max(width, height)` the corners are
/// `(minX-δ, minY-δ)`, `(minX+2δ, minY-δ)` and `(minX, minY+2δ)`.
fn super_triangle(vertices: &[(usize, Vertex)]) -> GeometryResult<Triangle> {
    let (min_x, min_y, max_x, max_y) = vertices.iter().fold(
        (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
        |(min_x, min_y, max_x, max_y), (_, v)| {
            (min_x.min(v.x), min_y.min(v.y), max_x.max(v.x), max_y.max(v.y))
        },
    );

    let delta = (max_x - min_x).max(max_y - min_y) * SUPER_TRIANGLE_SCALE;

    Triangle::new(
        Vertex::new(min_x - delta, min_y - delta),
        Vertex::new(2.0f64.mul_add(delta, min_x), min_y - delta),
        Vertex::new(min_x, 2.0f64.mul_add(delta, min_y)),
    )
}

/// Inserts one vertex, consuming the current triangles and returning the
/// re-triangulated set: untouched triangles first, in their previous order,
/// followed by the triangles fanning out from the new vertex.
fn insert_vertex(
    triangles: Vec<Triangle>,
    index: usize,
    vertex: Vertex,
    scan: ScanStrategy,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Triangle> {
    let (bad, mut next): (Vec<Triangle>, Vec<Triangle>) = triangles
        .into_iter()
        .partition(|triangle| triangle.in_circumcircle(&vertex));

    let edges: Vec<Edge> = bad.iter().flat_map(Triangle::edges).collect();
    let boundary = match scan {
        ScanStrategy::Pairwise => unique_edges_pairwise(&edges),
        ScanStrategy::Indexed => unique_edges_indexed(&edges),
    };

    log::trace!(
        "Vertex {index} {vertex}: {} bad triangles, {} cavity edges",
        bad.len(),
        boundary.len()
    );

    next.reserve(boundary.len());
    for edge in boundary {
        match Triangle::new(edge.v0, edge.v1, vertex) {
            Ok(triangle) => next.push(triangle),
            Err(err) => {
                log::warn!("Skipping candidate triangle for vertex {index}: {err}");
                diagnostics.push(Diagnostic::DegenerateCandidate {
                    index,
                    vertex,
                    edge,
                });
            }
        }
    }
    next
}

/// Edges occurring exactly once, found by comparing every pair.
fn unique_edges_pairwise(edges: &[Edge]) -> Vec<Edge> {
    edges
        .iter()
        .enumerate()
        .filter(|&(i, edge)| {
            !edges
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && edge == other)
        })
        .map(|(_, edge)| *edge)
        .collect()
}

/// Edges occurring exactly once, found by counting in a hash map.
fn unique_edges_indexed(edges: &[Edge]) -> Vec<Edge> {
    let mut counts: HashMap<Edge, usize> = HashMap::with_capacity(edges.len());
    for edge in edges {
        *counts.entry(*edge).or_insert(0) += 1;
    }
    edges
        .iter()
        .filter(|edge| counts.get(*edge) == Some(&1))
        .copied()
        .collect()
}
