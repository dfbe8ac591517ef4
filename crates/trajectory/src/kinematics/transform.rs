//! Rigid motions of the plane.
//!
//! - `Rigid2`: `x ↦ M x + t` with `M ∈ SO(2)`, read as the body-local → world map.
//! - `to_local` / `to_world`: batch versions with the angle given in degrees.
//! - `rotate_about`: rotation about a pivot, used by the heading-up view.

use nalgebra::{Matrix2, Rotation2, Vector2};

/// Planar rigid motion `x ↦ M x + t` (rotation followed by translation).
///
/// Invariant: `m` is orthonormal with determinant +1, so `m⁻¹ = mᵀ`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rigid2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Rigid2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    /// Local frame of a body at `origin` heading `heading` radians.
    #[inline]
    pub fn from_heading(heading: f64, origin: Vector2<f64>) -> Self {
        Self {
            m: *Rotation2::new(heading).matrix(),
            t: origin,
        }
    }

    #[inline]
    pub fn from_degrees(angle_deg: f64, origin: Vector2<f64>) -> Self {
        Self::from_heading(angle_deg.to_radians(), origin)
    }

    /// Rotation angle in radians, `(−π, π]`.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.m[(1, 0)].atan2(self.m[(0, 0)])
    }

    /// Local → world.
    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }

    /// World → local: translate first, then rotate back.
    #[inline]
    pub fn apply_inverse(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m.transpose() * (p - self.t)
    }

    #[inline]
    pub fn inverse(&self) -> Self {
        let mt = self.m.transpose();
        Self {
            m: mt,
            t: -(mt * self.t),
        }
    }

    /// `self ∘ other`: apply `other` first.
    #[inline]
    pub fn compose(&self, other: &Rigid2) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }
}

impl Default for Rigid2 {
    fn default() -> Self {
        Self::identity()
    }
}

/// World → local for a body at `origin` rotated by `angle_deg`.
pub fn to_local(
    points: &[Vector2<f64>],
    angle_deg: f64,
    origin: Vector2<f64>,
) -> Vec<Vector2<f64>> {
    let frame = Rigid2::from_degrees(angle_deg, origin);
    points.iter().map(|&p| frame.apply_inverse(p)).collect()
}

/// Local → world; inverse of `to_local` for the same angle and origin.
pub fn to_world(
    points: &[Vector2<f64>],
    angle_deg: f64,
    origin: Vector2<f64>,
) -> Vec<Vector2<f64>> {
    let frame = Rigid2::from_degrees(angle_deg, origin);
    points.iter().map(|&p| frame.apply(p)).collect()
}

/// Rotate `points` by `angle_deg` (counterclockwise) about `pivot`.
pub fn rotate_about(
    points: &[Vector2<f64>],
    angle_deg: f64,
    pivot: Vector2<f64>,
) -> Vec<Vector2<f64>> {
    let frame = Rigid2::from_degrees(angle_deg, pivot);
    points.iter().map(|&p| frame.apply(p - pivot)).collect()
}
