//! Circumcircle computation.
//!
//! The circumcenter is the closed-form solution of the linear system for the
//! point equidistant from three vertices:
//!
//! ```text
//! D  = 2·(x0(y2-y1) + x1(y0-y2) + x2(y1-y0))
//! ux = (|v0|²(y2-y1) + |v1|²(y0-y2) + |v2|²(y1-y0)) / D
//! uy = -(|v0|²(x2-x1) + |v1|²(x0-x2) + |v2|²(x1-x0)) / D
//! ```
//!
//! When `D` vanishes relative to the magnitude of its terms the vertices are
//! collinear or coincident and no circle exists.

use crate::errors::{GeometryError, GeometryResult};
use crate::geometry::primitives::{Circle, Vertex};

/// Relative bound below which the determinant is treated as zero.
const DEGENERACY_TOLERANCE: f64 = 8.0 * f64::EPSILON;

/// Computes the unique circle passing through three vertices.
///
/// The radius is measured from the computed center to `v0`.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateTriangle`] if the vertices are collinear
/// or coincident, i.e. the determinant is zero or lost to rounding, or if the
/// computed center or radius is not finite.
///
/// # Examples
///
/// ```
/// use delaunay_voronoi::geometry::circumcircle::circumcircle;
/// use delaunay_voronoi::Vertex;
///
/// let circle = circumcircle(
///     Vertex::new(0.0, 0.0),
///     Vertex::new(1.0, 0.0),
///     Vertex::new(0.0, 1.0),
/// )
/// .unwrap();
/// assert_eq!(circle.center, Vertex::new(0.5, 0.5));
/// assert!((circle.radius - 0.5_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn circumcircle(v0: Vertex, v1: Vertex, v2: Vertex) -> GeometryResult<Circle> {
    let degenerate = || GeometryError::DegenerateTriangle { v0, v1, v2 };

    let t0 = v0.x * (v2.y - v1.y);
    let t1 = v1.x * (v0.y - v2.y);
    let t2 = v2.x * (v1.y - v0.y);
    let det = t0 + t1 + t2;

    if det == 0.0 || det.abs() <= DEGENERACY_TOLERANCE * (t0.abs() + t1.abs() + t2.abs()) {
        return Err(degenerate());
    }
    let div = 2.0 * det;

    let d_a = v0.norm_squared();
    let d_b = v1.norm_squared();
    let d_c = v2.norm_squared();

    let aux_x = d_a * (v2.y - v1.y) + d_b * (v0.y - v2.y) + d_c * (v1.y - v0.y);
    let aux_y = -(d_a * (v2.x - v1.x)) - d_b * (v0.x - v2.x) - d_c * (v1.x - v0.x);

    let center = Vertex::new(aux_x / div, aux_y / div);
    let radius = center.distance(&v0);

    if !center.is_finite() || !radius.is_finite() {
        return Err(degenerate());
    }

    Ok(Circle::new(center, radius))
}
