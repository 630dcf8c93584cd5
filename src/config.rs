//! Configuration for diagram runs.
//!
//! [`DiagramConfig`] is parsed from the command line by the binary and can be
//! built programmatically with [`DiagramConfig::new`] or the [`TestConfig`]
//! presets.

use crate::delaunay::bowyer_watson::{ScanStrategy, TriangulationOptions};
use crate::errors::{GeometryError, GeometryResult};
use clap::{Parser, ValueEnum};
use std::time::Duration;

/// What a run computes.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Delaunay triangulation only
    Triangulate,
    /// Delaunay triangulation followed by its Voronoi dual
    #[default]
    Voronoi,
}

/// Configuration for generating random sites and computing their diagram.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct DiagramConfig {
    /// Number of random vertices to generate
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(3..))]
    pub vertices: u32,

    /// Diagram to compute
    #[arg(short, long, value_enum, default_value_t = Mode::Voronoi)]
    pub mode: Mode,

    /// Seed for reproducible vertex generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Lower bound of both coordinates
    #[arg(long, default_value_t = -10_000.0, allow_negative_numbers = true)]
    pub min: f64,

    /// Upper bound of both coordinates (exclusive)
    #[arg(long, default_value_t = 10_000.0, allow_negative_numbers = true)]
    pub max: f64,

    /// Use hash-map scans instead of the pairwise reference scans
    #[arg(long, default_value = "false")]
    pub indexed: bool,

    /// Abort triangulation after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

impl DiagramConfig {
    /// Builds a new instance of `DiagramConfig` from command line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Creates a configuration for `vertices` random sites with default
    /// settings.
    #[must_use]
    pub const fn new(vertices: u32) -> Self {
        Self {
            vertices,
            mode: Mode::Voronoi,
            seed: None,
            min: -10_000.0,
            max: 10_000.0,
            indexed: false,
            timeout_ms: None,
        }
    }

    /// The coordinate range as `(min, max)`.
    #[must_use]
    pub const fn coordinate_range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Creates `TriangulationOptions` from this configuration.
    #[must_use]
    pub const fn to_options(&self) -> TriangulationOptions {
        let scan = if self.indexed {
            ScanStrategy::Indexed
        } else {
            ScanStrategy::Pairwise
        };
        let options = TriangulationOptions::new().with_scan(scan);
        match self.timeout_ms {
            Some(ms) => options.with_deadline(Duration::from_millis(ms)),
            None => options,
        }
    }

    /// Validates the configuration parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameters`] if any parameter is
    /// invalid.
    pub fn validate(&self) -> GeometryResult<()> {
        if self.vertices < 3 {
            return Err(GeometryError::InvalidParameters(
                "Number of vertices must be at least 3".to_string(),
            ));
        }

        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(GeometryError::InvalidParameters(
                "Coordinate bounds must be finite".to_string(),
            ));
        }

        if self.min >= self.max {
            return Err(GeometryError::InvalidParameters(format!(
                "Empty coordinate range: min {} must be less than max {}",
                self.min, self.max
            )));
        }

        if self.timeout_ms == Some(0) {
            return Err(GeometryError::InvalidParameters(
                "Timeout must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration preset for quick testing.
#[derive(Debug, Clone)]
pub struct TestConfig;

impl TestConfig {
    /// Creates a small, fast configuration suitable for unit tests.
    #[must_use]
    pub const fn small() -> DiagramConfig {
        DiagramConfig {
            seed: Some(1),
            ..DiagramConfig::new(16)
        }
    }

    /// Creates a medium-sized configuration for integration tests.
    #[must_use]
    pub const fn medium() -> DiagramConfig {
        DiagramConfig {
            seed: Some(2),
            ..DiagramConfig::new(64)
        }
    }

    /// Creates a large configuration for performance testing.
    #[must_use]
    pub const fn large() -> DiagramConfig {
        DiagramConfig {
            seed: Some(3),
            indexed: true,
            ..DiagramConfig::new(256)
        }
    }
}
