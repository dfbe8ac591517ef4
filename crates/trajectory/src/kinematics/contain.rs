//! Point-in-oriented-rectangle classification.
//!
//! Points are moved into the body frame (`R(−θ)·(p − c)`) and compared against the
//! closed box `[−w/2, w/2] × [−h/2, h/2]`; boundary points count as inside.

use nalgebra::Vector2;

use super::body::RigidBody;
use super::transform::Rigid2;
use crate::path::{Lane, PathSet};

/// Inside-point indices per lane, ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaneHits {
    pub center: Vec<usize>,
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

impl LaneHits {
    #[inline]
    pub fn get(&self, lane: Lane) -> &[usize] {
        match lane {
            Lane::Center => &self.center,
            Lane::Left => &self.left,
            Lane::Right => &self.right,
        }
    }

    pub fn total(&self) -> usize {
        self.center.len() + self.left.len() + self.right.len()
    }
}

#[inline]
pub fn inside_local(p: Vector2<f64>, width: f64, height: f64) -> bool {
    let (hw, hh) = (0.5 * width, 0.5 * height);
    -hw <= p.x && p.x <= hw && -hh <= p.y && p.y <= hh
}

/// Per-point inside flags for a body at `origin` rotated by `angle_deg`.
pub fn inside_mask(
    points: &[Vector2<f64>],
    angle_deg: f64,
    origin: Vector2<f64>,
    width: f64,
    height: f64,
) -> Vec<bool> {
    let frame = Rigid2::from_degrees(angle_deg, origin);
    points
        .iter()
        .map(|&p| inside_local(frame.apply_inverse(p), width, height))
        .collect()
}

/// Indices of `points` inside a body at `origin` rotated by `angle_deg`.
pub fn classify(
    points: &[Vector2<f64>],
    angle_deg: f64,
    origin: Vector2<f64>,
    width: f64,
    height: f64,
) -> Vec<usize> {
    classify_in(points, &Rigid2::from_degrees(angle_deg, origin), width, height)
}

/// Same as `classify` for an already-built body frame.
pub fn classify_in(points: &[Vector2<f64>], frame: &Rigid2, width: f64, height: f64) -> Vec<usize> {
    points
        .iter()
        .enumerate()
        .filter(|&(_, &p)| inside_local(frame.apply_inverse(p), width, height))
        .map(|(i, _)| i)
        .collect()
}

/// Classify all three lanes against `body`.
pub fn classify_lanes(path: &PathSet, body: &RigidBody) -> LaneHits {
    let frame = body.frame();
    let hits = |lane: Lane| classify_in(path.lane(lane), &frame, body.width, body.height);
    LaneHits {
        center: hits(Lane::Center),
        left: hits(Lane::Left),
        right: hits(Lane::Right),
    }
}
