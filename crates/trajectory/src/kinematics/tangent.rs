//! Forward-difference tangents on a sampled lane.
//!
//! - `TangentMode::Clamp`: the last sample has no successor, so its tangent is undefined.
//! - `TangentMode::Wrap`: the lane is closed; the successor of `N−1` is `0`.
//!
//! A zero step yields the `(0, 0)` sentinel instead of a division by zero; callers
//! must check `is_degenerate` before turning a tangent into a heading.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::path::{Lane, PathSet};

/// Successor policy at the final sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TangentMode {
    Clamp,
    #[default]
    Wrap,
}

impl TangentMode {
    /// Index of the sample following `i` on a lane of `n` samples, if any.
    #[inline]
    pub fn successor(self, i: usize, n: usize) -> Option<usize> {
        if i >= n {
            return None;
        }
        match self {
            TangentMode::Clamp => (i + 1 < n).then_some(i + 1),
            TangentMode::Wrap => Some((i + 1) % n),
        }
    }
}

/// Raw step `p[succ] − p[i]`, or None when `i` has no successor under `mode`.
pub fn displacement_on(
    points: &[Vector2<f64>],
    i: isize,
    mode: TangentMode,
) -> Option<Vector2<f64>> {
    let i = usize::try_from(i).ok()?;
    let succ = mode.successor(i, points.len())?;
    Some(points[succ] - points[i])
}

/// Unit tangent at sample `i` of an arbitrary lane.
pub fn tangent_on(points: &[Vector2<f64>], i: isize, mode: TangentMode) -> Option<Vector2<f64>> {
    let d = displacement_on(points, i, mode)?;
    let magnitude = d.norm();
    if magnitude == 0.0 {
        return Some(Vector2::zeros());
    }
    Some(d / magnitude)
}

/// Unit tangent of the center lane at sample `i`.
#[inline]
pub fn tangent_at(path: &PathSet, i: isize, mode: TangentMode) -> Option<Vector2<f64>> {
    tangent_on(path.lane(Lane::Center), i, mode)
}

/// True for the `(0, 0)` sentinel returned on a zero step.
#[inline]
pub fn is_degenerate(v: Vector2<f64>) -> bool {
    v.x == 0.0 && v.y == 0.0
}
