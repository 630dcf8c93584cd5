//! Integration tests for triangulation and Voronoi dualization.
//!
//! These exercise the public API end to end: input handling, the Delaunay
//! count and coverage laws on a fixed general-position configuration, and the
//! structure of the derived Voronoi diagram.

use approx::assert_relative_eq;
use delaunay_voronoi::{
    GeometryError, ScanStrategy, TriangulationOps, TriangulationOptions, TriangulationQuery,
    Vertex, triangulate, triangulate_with, voronoi,
};

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Five hull vertices and five interior vertices, no four cocircular.
    fn general_position() -> Vec<Vertex> {
        [
            (0.0, 0.0),
            (10.0, 0.5),
            (11.0, 8.0),
            (4.0, 12.0),
            (-1.0, 7.0),
            (3.0, 3.0),
            (6.0, 4.0),
            (5.0, 8.0),
            (7.5, 6.2),
            (2.0, 6.5),
        ]
        .into_iter()
        .map(Vertex::from)
        .collect()
    }

    /// Convex hull by monotone chain, counter-clockwise.
    fn convex_hull(vertices: &[Vertex]) -> Vec<Vertex> {
        let mut sorted = vertices.to_vec();
        sorted.sort_by_key(Vertex::sort_key);
        sorted.dedup();

        let cross = |o: &Vertex, a: &Vertex, b: &Vertex| {
            (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
        };
        let mut hull: Vec<Vertex> = Vec::new();
        for pass in [sorted.clone(), sorted.iter().rev().copied().collect()] {
            let start = hull.len();
            for v in pass {
                while hull.len() >= start + 2
                    && cross(&hull[hull.len() - 2], &hull[hull.len() - 1], &v) <= 0.0
                {
                    hull.pop();
                }
                hull.push(v);
            }
            hull.pop();
        }
        hull
    }

    fn polygon_area(polygon: &[Vertex]) -> f64 {
        let n = polygon.len();
        (0..n)
            .map(|i| {
                let (a, b) = (polygon[i], polygon[(i + 1) % n]);
                a.x * b.y - a.y * b.x
            })
            .sum::<f64>()
            / 2.0
    }

    #[test]
    fn test_single_triangle_circumcircle() {
        let triangulation = triangulate(&[
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.0),
            Vertex::new(0.0, 1.0),
        ])
        .expect("Failed to triangulate");

        assert_eq!(triangulation.face_count(), 1);
        let circle = triangulation.triangles()[0].circumcircle();
        assert_relative_eq!(circle.center.x, 0.5);
        assert_relative_eq!(circle.center.y, 0.5);
        assert_relative_eq!(circle.radius, 0.5_f64.sqrt());
    }

    #[test]
    fn test_insufficient_points() {
        let result = triangulate(&[Vertex::new(0.0, 0.0), Vertex::new(1.0, 1.0)]);
        assert!(matches!(
            result,
            Err(GeometryError::InsufficientPoints { distinct: 2 })
        ));
    }

    #[test]
    fn test_collinear_input_is_empty() {
        let vertices: Vec<Vertex> = (0..5).map(|i| Vertex::new(f64::from(i), 0.0)).collect();
        let triangulation = triangulate(&vertices).expect("Failed to triangulate");

        assert!(triangulation.is_empty());
        assert!(voronoi(triangulation.triangles()).is_empty());
    }

    #[test]
    fn test_unit_square() {
        let triangulation = triangulate(&[
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.0),
            Vertex::new(1.0, 1.0),
            Vertex::new(0.0, 1.0),
        ])
        .expect("Failed to triangulate");

        assert_eq!(triangulation.face_count(), 2);
        assert!(triangulation.is_delaunay());
        assert_relative_eq!(triangulation.total_area(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_convex_quadrilateral_voronoi() {
        let triangulation = triangulate(&[
            Vertex::new(0.0, 0.0),
            Vertex::new(2.0, 0.0),
            Vertex::new(2.2, 1.8),
            Vertex::new(0.0, 1.0),
        ])
        .expect("Failed to triangulate");
        let triangles = triangulation.triangles();
        assert_eq!(triangles.len(), 2);

        let diagram = triangulation.voronoi();
        let with_edges: Vec<Vertex> = diagram
            .cells()
            .iter()
            .filter(|c| !c.edges.is_empty())
            .map(|c| c.site)
            .collect();

        assert_eq!(with_edges.len(), 2);
        for site in &with_edges {
            assert!(triangles[0].has_vertex(site) && triangles[1].has_vertex(site));
            let cell = diagram.cell(site).expect("cell exists");
            assert_eq!(cell.edges.len(), 1);
            assert_eq!(cell.edges[0].start, triangles[0].circumcenter());
            assert_eq!(cell.edges[0].end, triangles[1].circumcenter());
        }
    }

    #[test]
    fn test_count_law() {
        let vertices = general_position();
        let triangulation = triangulate(&vertices).expect("Failed to triangulate");
        let n = vertices.len();
        let h = convex_hull(&vertices).len();

        assert_eq!(h, 5);
        assert_eq!(triangulation.face_count(), 2 * n - 2 - h);
        assert_eq!(triangulation.edge_count(), 3 * n - 3 - h);
        assert_eq!(triangulation.euler_characteristic(), 1);
        assert_eq!(triangulation.boundary_edges().len(), h);
    }

    #[test]
    fn test_coverage_equals_hull_area() {
        let vertices = general_position();
        let triangulation = triangulate(&vertices).expect("Failed to triangulate");
        let hull_area = polygon_area(&convex_hull(&vertices));

        assert_relative_eq!(hull_area, 107.25, max_relative = 1e-12);
        assert_relative_eq!(triangulation.total_area(), hull_area, max_relative = 1e-9);
    }

    /// Inclusive circumcircle ties are stable when cocircularity is exact, but
    /// rounding on a circle of irrational coordinates splits ties both ways and
    /// the result overlaps itself.
    #[test]
    fn test_cocircular_ties_depend_on_rounding() {
        let exact: Vec<Vertex> = [
            (5.0, 0.0),
            (4.0, 3.0),
            (3.0, 4.0),
            (0.0, 5.0),
            (-3.0, 4.0),
            (-4.0, 3.0),
            (-5.0, 0.0),
            (-4.0, -3.0),
            (-3.0, -4.0),
            (0.0, -5.0),
            (3.0, -4.0),
            (4.0, -3.0),
        ]
        .into_iter()
        .map(|(x, y)| Vertex::new(x, y))
        .collect();
        let triangulation = triangulate(&exact).expect("Failed to triangulate");
        assert_eq!(triangulation.face_count(), 10);
        assert_relative_eq!(triangulation.total_area(), 74.0, max_relative = 1e-12);

        let rounded: Vec<Vertex> = (0..12_u32)
            .map(|k| {
                let angle = 2.0 * std::f64::consts::PI * f64::from(k) / 12.0;
                Vertex::new(angle.cos(), angle.sin())
            })
            .collect();
        let hull = convex_hull(&rounded);
        let hull_area = polygon_area(&hull);
        let triangulation = triangulate(&rounded).expect("Failed to triangulate");

        assert_eq!(hull.len(), 12);
        assert_relative_eq!(hull_area, 3.0, max_relative = 1e-12);
        assert!(triangulation.diagnostics().is_empty());
        assert!(triangulation.face_count() > 2 * rounded.len() - 2 - hull.len());
        assert!(triangulation.total_area() > 1.5 * hull_area);
    }

    #[test]
    fn test_empty_circumcircle_against_input() {
        let vertices = general_position();
        let triangulation = triangulate(&vertices).expect("Failed to triangulate");
        assert!(triangulation.delaunay_violations(&vertices).is_empty());
    }

    #[test]
    fn test_voronoi_structure() {
        let vertices = general_position();
        let triangulation = triangulate(&vertices).expect("Failed to triangulate");
        let diagram = triangulation.voronoi();
        let hull = convex_hull(&vertices);

        assert_eq!(diagram.len(), vertices.len());
        // Every interior Delaunay edge gives one Voronoi edge to each endpoint
        let interior_edges = triangulation.edge_count() - triangulation.boundary_edges().len();
        assert_eq!(diagram.edge_count(), 2 * interior_edges);

        for cell in diagram.cells() {
            assert_eq!(cell.open, hull.contains(&cell.site));
            let incident = triangulation
                .triangles()
                .iter()
                .filter(|t| t.has_vertex(&cell.site))
                .count();
            assert_eq!(cell.vertices.len(), incident);
            // A closed cell is a polygon with one edge per incident triangle
            if cell.is_closed() {
                assert_eq!(cell.edges.len(), incident);
            }
        }
    }

    #[test]
    fn test_scan_strategies_identical() {
        let vertices = general_position();
        let pairwise = triangulate(&vertices).expect("Failed to triangulate");
        let indexed = triangulate_with(
            &vertices,
            &TriangulationOptions::new().with_scan(ScanStrategy::Indexed),
        )
        .expect("Failed to triangulate");

        assert_eq!(pairwise.triangles(), indexed.triangles());
        assert_eq!(
            pairwise.voronoi(),
            indexed.voronoi_with(ScanStrategy::Indexed)
        );
    }

    #[test]
    fn test_sorted_cells_are_deterministic() {
        let vertices = general_position();
        let mut reversed = vertices.clone();
        reversed.reverse();

        let a = triangulate(&vertices).expect("Failed to triangulate").voronoi();
        let b = triangulate(&reversed).expect("Failed to triangulate").voronoi();

        let sites_a: Vec<Vertex> = a.sorted_by_site().iter().map(|c| c.site).collect();
        let sites_b: Vec<Vertex> = b.sorted_by_site().iter().map(|c| c.site).collect();
        assert_eq!(sites_a, sites_b);
    }
}
