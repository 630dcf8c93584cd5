//! Basic example of using the delaunay-voronoi library
//!
//! This example shows how to:
//! - Generate reproducible random sites
//! - Triangulate them with a deadline and the indexed scan
//! - Derive the Voronoi diagram
//! - Inspect diagnostics and cells

use delaunay_voronoi::util::generate_random_vertices;
use delaunay_voronoi::{
    ScanStrategy, TriangulationOps, TriangulationOptions, TriangulationQuery, Vertex,
    triangulate_with,
};
use log::{LevelFilter, info};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    info!("Starting basic diagram example");

    let mut vertices = generate_random_vertices(64, (-100.0, 100.0), Some(2024))?;
    // A repeated site is skipped and reported as a diagnostic
    vertices.push(vertices[0]);
    vertices.push(Vertex::new(0.0, 0.0));

    let options = TriangulationOptions::new()
        .with_scan(ScanStrategy::Indexed)
        .with_deadline(Duration::from_secs(5));
    let triangulation = triangulate_with(&vertices, &options)?;

    info!(
        "Triangulation: {} vertices, {} edges, {} faces",
        triangulation.vertex_count(),
        triangulation.edge_count(),
        triangulation.face_count()
    );
    info!("  Delaunay: {}", triangulation.is_delaunay());
    info!("  Hull edges: {}", triangulation.boundary_edges().len());
    for diagnostic in triangulation.diagnostics() {
        info!("  Diagnostic: {diagnostic}");
    }

    let diagram = triangulation.voronoi_with(options.scan);
    diagram.print_summary();

    // Display a few cells around the origin
    if let Some(cell) = diagram.cell(&Vertex::new(0.0, 0.0)) {
        info!(
            "Cell at the origin: {} edges, {} vertices, open: {}",
            cell.edges.len(),
            cell.vertices.len(),
            cell.open
        );
    }
    for cell in diagram.sorted_by_site().iter().take(5) {
        info!(
            "  Site {}: {} edges, open: {}",
            cell.site,
            cell.edges.len(),
            cell.open
        );
    }

    info!("Example completed successfully!");
    Ok(())
}
