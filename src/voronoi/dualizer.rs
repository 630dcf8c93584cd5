//! Voronoi dual of a Delaunay triangulation.
//!
//! Every triangle's circumcenter is a Voronoi vertex, seeded into the cells of
//! the triangle's three sites. Two triangles sharing a Delaunay edge give a
//! Voronoi edge between their circumcenters. Which cells receive that edge is
//! chosen by [`CellAssignment`]:
//!
//! - [`CellAssignment::SharedEdge`] (default): neighbor pairs `(i, j)` with
//!   `i < j`, edge `c_i → c_j` appended to the cells of the two shared sites.
//! - [`CellAssignment::Reference`]: every ordered neighbor pair `(i, j)`, edge
//!   `c_i → c_j` appended to all three of `t_i`'s cells, so each edge appears
//!   once per direction.
//!
//! Pairs are visited in lexicographic order, so the output is deterministic
//! and the same for both [`ScanStrategy`] variants.

use crate::delaunay::bowyer_watson::ScanStrategy;
use crate::geometry::operations::TriangulationOps;
use crate::geometry::triangle::{Edge, Triangle};
use crate::voronoi::diagram::{VoronoiDiagram, VoronoiEdge};
use std::collections::HashMap;

/// Which cells receive the Voronoi edge between two neighboring triangles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellAssignment {
    /// Once per unordered pair, to the two sites on the shared Delaunay edge
    #[default]
    SharedEdge,
    /// Once per ordered pair, to all three sites of the first triangle
    Reference,
}

/// Derives the Voronoi diagram with the reference pairwise neighbor scan.
#[must_use]
pub fn voronoi(triangles: &[Triangle]) -> VoronoiDiagram {
    voronoi_with(triangles, ScanStrategy::Pairwise)
}

/// Derives the Voronoi diagram of `triangles` with shared-edge cell
/// assignment.
///
/// Infallible: every [`Triangle`] already carries a valid circumcircle. An
/// empty slice gives an empty diagram.
#[must_use]
pub fn voronoi_with(triangles: &[Triangle], scan: ScanStrategy) -> VoronoiDiagram {
    voronoi_with_assignment(triangles, scan, CellAssignment::SharedEdge)
}

/// Derives the Voronoi diagram of `triangles`, choosing both the neighbor
/// scan and the cell assignment rule.
#[must_use]
pub fn voronoi_with_assignment(
    triangles: &[Triangle],
    scan: ScanStrategy,
    assignment: CellAssignment,
) -> VoronoiDiagram {
    let mut diagram = VoronoiDiagram::default();

    for triangle in triangles {
        let center = triangle.circumcenter();
        for site in triangle.vertices() {
            diagram.cell_mut(site).vertices.push(center);
        }
    }

    let pairs = match scan {
        ScanStrategy::Pairwise => neighbor_pairs_pairwise(triangles),
        ScanStrategy::Indexed => neighbor_pairs_indexed(triangles),
    };
    log::debug!(
        "Dualizing {} triangles with {} neighbor pairs ({assignment:?})",
        triangles.len(),
        pairs.len()
    );

    match assignment {
        CellAssignment::SharedEdge => {
            for (i, j) in pairs {
                let (t1, t2) = (&triangles[i], &triangles[j]);
                let edge = VoronoiEdge::new(t1.circumcenter(), t2.circumcenter());
                for site in t1.shared_vertices(t2) {
                    diagram.cell_mut(site).edges.push(edge);
                }
            }
        }
        CellAssignment::Reference => {
            let mut ordered: Vec<(usize, usize)> =
                pairs.into_iter().flat_map(|(i, j)| [(i, j), (j, i)]).collect();
            ordered.sort_unstable();
            for (i, j) in ordered {
                let (t1, t2) = (&triangles[i], &triangles[j]);
                let edge = VoronoiEdge::new(t1.circumcenter(), t2.circumcenter());
                for site in t1.vertices() {
                    diagram.cell_mut(site).edges.push(edge);
                }
            }
        }
    }

    for edge in triangles.boundary_edges() {
        diagram.cell_mut(edge.v0).open = true;
        diagram.cell_mut(edge.v1).open = true;
    }

    diagram
}

/// Index pairs of triangles sharing exactly two vertices, by comparing every
/// pair.
fn neighbor_pairs_pairwise(triangles: &[Triangle]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, t1) in triangles.iter().enumerate() {
        for (j, t2) in triangles.iter().enumerate().skip(i + 1) {
            if t1.is_neighbor(t2) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Index pairs of triangles sharing exactly two vertices, by grouping
/// triangles under their edges.
fn neighbor_pairs_indexed(triangles: &[Triangle]) -> Vec<(usize, usize)> {
    let mut by_edge: HashMap<Edge, Vec<usize>> = HashMap::with_capacity(triangles.len() * 2);
    for (i, triangle) in triangles.iter().enumerate() {
        for edge in triangle.edges() {
            by_edge.entry(edge).or_default().push(i);
        }
    }

    let mut pairs: Vec<(usize, usize)> = by_edge
        .values()
        .flat_map(|owners| {
            owners.iter().enumerate().flat_map(move |(k, &i)| {
                owners[k + 1..]
                    .iter()
                    .filter(move |&&j| j != i)
                    .map(move |&j| (i.min(j), i.max(j)))
            })
        })
        .collect();
    pairs.sort_unstable();
    pairs.dedup();
    // Identical vertex sets share three vertices and are not neighbors
    pairs.retain(|&(i, j)| triangles[i].is_neighbor(&triangles[j]));
    pairs
}
