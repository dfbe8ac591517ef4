//! Per-frame geometric state.
//!
//! Purpose
//! - `compute_frame(path, cfg, i)` is the only thing a renderer needs to call per tick:
//!   sample lookup → tangent → heading → body → containment, as one pure function.
//!
//! Degenerate steps
//! - A step no longer than `cfg.min_step` has no usable direction. Instead of
//!   `atan2(0, 0)` we reuse the heading of the nearest earlier sample with a usable
//!   step (cyclically under `Wrap`) and mark the frame with `heading_fallback`.
//! - With the default closed grid, sample `N−1` equals sample `0` up to rounding, so
//!   the last frame under `Wrap` always takes this path.
//!
//! Code cross-refs: `kinematics::{tangent_on, RigidBody, classify_lanes}`

use nalgebra::Vector2;

use crate::cfg::{ContainmentAnchor, TrajectoryCfg};
use crate::kinematics::{classify_lanes, displacement_on, tangent_on, RigidBody, TangentMode};
use crate::path::{Lane, PathSet};

pub use crate::kinematics::LaneHits;

/// Everything a renderer draws for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameState {
    pub index: usize,
    pub center: Vector2<f64>,
    /// Unit direction of travel. On a fallback frame this is the direction of the
    /// borrowed heading, not the raw step (see `kinematics::tangent_at` for that).
    pub tangent: Vector2<f64>,
    /// Radians; equals `body.heading`.
    pub heading: f64,
    /// True when `heading` was borrowed from an earlier sample.
    pub heading_fallback: bool,
    pub body: RigidBody,
    /// Inside points per lane, measured against the anchor body.
    pub hits: LaneHits,
}

/// Geometric state of frame `index`, or None when the frame is undefined
/// (`index >= N`, or the last sample under `TangentMode::Clamp`).
///
/// Also None when `cfg.anchor` is `Fixed(k)` and frame `k` is undefined on `path`,
/// which happens when `path` was not built from `cfg`.
pub fn compute_frame(path: &PathSet, cfg: &TrajectoryCfg, index: usize) -> Option<FrameState> {
    let points = path.lane(Lane::Center);
    let signed = isize::try_from(index).ok()?;
    let step = tangent_on(points, signed, cfg.tangent_mode)?;
    let center = points[index];
    let (heading, heading_fallback) = resolve_heading(points, index, cfg);
    let tangent = if heading_fallback {
        Vector2::new(heading.cos(), heading.sin())
    } else {
        step
    };
    if heading_fallback {
        tracing::debug!(
            target: "frame",
            index,
            heading_deg = heading.to_degrees(),
            "degenerate step; reusing earlier heading"
        );
    }
    let body = RigidBody::from_heading(heading, center, cfg.width, cfg.height);
    let hits = match cfg.anchor {
        ContainmentAnchor::Fixed(k) if k != index => {
            classify_lanes(path, &anchor_body(points, k, cfg)?)
        }
        _ => classify_lanes(path, &body),
    };
    Some(FrameState {
        index,
        center,
        tangent,
        heading,
        heading_fallback,
        body,
        hits,
    })
}

/// All defined frames in order.
pub fn frames<'a>(
    path: &'a PathSet,
    cfg: &'a TrajectoryCfg,
) -> impl Iterator<Item = FrameState> + 'a {
    (0..path.len()).filter_map(move |i| compute_frame(path, cfg, i))
}

/// Body of frame `k`, or None when that frame is undefined.
fn anchor_body(points: &[Vector2<f64>], k: usize, cfg: &TrajectoryCfg) -> Option<RigidBody> {
    tangent_on(points, isize::try_from(k).ok()?, cfg.tangent_mode)?;
    let (heading, _) = resolve_heading(points, k, cfg);
    Some(RigidBody::from_heading(heading, points[k], cfg.width, cfg.height))
}

fn usable_heading(points: &[Vector2<f64>], i: usize, cfg: &TrajectoryCfg) -> Option<f64> {
    let d = displacement_on(points, isize::try_from(i).ok()?, cfg.tangent_mode)?;
    (d.norm() > cfg.min_step).then(|| d.y.atan2(d.x))
}

fn resolve_heading(points: &[Vector2<f64>], index: usize, cfg: &TrajectoryCfg) -> (f64, bool) {
    if let Some(h) = usable_heading(points, index, cfg) {
        return (h, false);
    }
    let n = points.len();
    let earlier = match cfg.tangent_mode {
        TangentMode::Wrap => (1..n)
            .map(|k| (index + n - k) % n)
            .find_map(|j| usable_heading(points, j, cfg)),
        TangentMode::Clamp => (0..index.min(n))
            .rev()
            .find_map(|j| usable_heading(points, j, cfg)),
    };
    (earlier.unwrap_or(0.0), true)
}
