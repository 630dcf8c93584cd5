//! Delaunay/Voronoi binary executable.
//!
//! Generates random sites and logs a summary of their Delaunay triangulation
//! and Voronoi diagram. Set `RUST_LOG=info` to see the output.

use delaunay_voronoi::{DiagramConfig, run};

fn main() {
    // Initialize logging
    env_logger::init();

    let config = DiagramConfig::from_args();
    match run(&config) {
        Ok(summary) => {
            log::info!(
                "Run completed successfully in {:?}: {} triangles",
                summary.elapsed,
                summary.triangulation.triangle_count()
            );
        }
        Err(e) => {
            log::error!("Run failed: {e}");
            std::process::exit(1);
        }
    }
}
