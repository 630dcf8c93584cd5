use crate::errors::{GeometryError, GeometryResult};
use crate::geometry::primitives::Vertex;
use rand::{Rng, SeedableRng};

/// Generates `count` random vertices with both coordinates uniform in
/// `[min, max)`.
///
/// With a seed the output is reproducible; without one the thread-local
/// generator is used.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidParameters`] if the range is empty or not
/// finite.
///
/// # Examples
///
/// ```
/// use delaunay_voronoi::util::generate_random_vertices;
///
/// let a = generate_random_vertices(10, (-1.0, 1.0), Some(7)).unwrap();
/// let b = generate_random_vertices(10, (-1.0, 1.0), Some(7)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate_random_vertices(
    count: usize,
    coordinate_range: (f64, f64),
    seed: Option<u64>,
) -> GeometryResult<Vec<Vertex>> {
    let (min, max) = coordinate_range;
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(GeometryError::InvalidParameters(format!(
            "coordinate range [{min}, {max}) is empty or not finite"
        )));
    }

    let vertices = match seed {
        Some(seed) => sample(&mut rand::rngs::StdRng::seed_from_u64(seed), count, min, max),
        None => sample(&mut rand::rng(), count, min, max),
    };
    log::debug!("Generated {count} vertices in [{min}, {max}) with seed {seed:?}");
    Ok(vertices)
}

fn sample<R: Rng>(rng: &mut R, count: usize, min: f64, max: f64) -> Vec<Vertex> {
    (0..count)
        .map(|_| Vertex::new(rng.random_range(min..max), rng.random_range(min..max)))
        .collect()
}
