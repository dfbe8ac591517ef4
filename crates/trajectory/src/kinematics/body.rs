use nalgebra::Vector2;

use super::contain::inside_local;
use super::tangent::is_degenerate;
use super::transform::Rigid2;

/// Local corner directions, traversed front-left, rear-left, rear-right, front-right.
/// Each entry is scaled by `(width/2, height/2)`.
pub const CORNER_SIGNS: [(f64, f64); 4] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

/// Oriented rectangle centered on the current sample.
///
/// Invariants:
/// - `corners[4] == corners[0]` (closed outline for polyline renderers);
/// - the mean of `corners[..4]` is `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigidBody {
    pub center: Vector2<f64>,
    /// Radians, `atan2` convention.
    pub heading: f64,
    pub width: f64,
    pub height: f64,
    pub corners: [Vector2<f64>; 5],
}

impl RigidBody {
    pub fn from_heading(heading: f64, center: Vector2<f64>, width: f64, height: f64) -> Self {
        let frame = Rigid2::from_heading(heading, center);
        let half = Vector2::new(0.5 * width, 0.5 * height);
        let quad = CORNER_SIGNS.map(|(sx, sy)| frame.apply(Vector2::new(sx * half.x, sy * half.y)));
        Self {
            center,
            heading,
            width,
            height,
            corners: [quad[0], quad[1], quad[2], quad[3], quad[0]],
        }
    }

    /// Local → world map of this body.
    #[inline]
    pub fn frame(&self) -> Rigid2 {
        Rigid2::from_heading(self.heading, self.center)
    }

    #[inline]
    pub fn heading_degrees(&self) -> f64 {
        self.heading.to_degrees()
    }

    pub fn centroid(&self) -> Vector2<f64> {
        self.corners[..4].iter().sum::<Vector2<f64>>() / 4.0
    }

    /// Inclusive footprint test for a world point.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        inside_local(self.frame().apply_inverse(p), self.width, self.height)
    }
}

/// Heading of a unit tangent, or None for the degenerate sentinel.
#[inline]
pub fn heading_of(tangent: Vector2<f64>) -> Option<f64> {
    if is_degenerate(tangent) {
        None
    } else {
        Some(tangent.y.atan2(tangent.x))
    }
}

/// Body aligned with `tangent` and centered at `center`.
///
/// A degenerate tangent yields heading `atan2(0, 0) = 0`; callers that care should
/// resolve a heading first (see `frame::compute_frame`) and use `from_heading`.
pub fn rectangle_at(
    tangent: Vector2<f64>,
    center: Vector2<f64>,
    width: f64,
    height: f64,
) -> RigidBody {
    RigidBody::from_heading(tangent.y.atan2(tangent.x), center, width, height)
}
