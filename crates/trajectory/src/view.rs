//! Heading-up re-projection of a frame.
//!
//! The scene is rotated about the body center by `90° − heading°`, so the direction
//! of travel points along +y. Only points inside the frame's own body are carried
//! over, whatever `cfg.anchor` used for `FrameState::hits`, and the suggested view
//! window hugs the body: `1.1·h/2` across, `w/2` along the travel axis.

use nalgebra::Vector2;

use crate::frame::FrameState;
use crate::kinematics::{classify_lanes, rotate_about};
use crate::path::{Lane, PathSet};

/// Axis-aligned view window `[x_min, x_max] × [y_min, y_max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// A frame rotated so that travel points up.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadingUpView {
    /// Rotation applied about `center`, in degrees.
    pub rotation_deg: f64,
    pub center: Vector2<f64>,
    /// Closed body outline (5 points).
    pub outline: Vec<Vector2<f64>>,
    pub center_hits: Vec<Vector2<f64>>,
    pub left_hits: Vec<Vector2<f64>>,
    pub right_hits: Vec<Vector2<f64>>,
    pub window: Window,
}

impl HeadingUpView {
    pub fn hits(&self, lane: Lane) -> &[Vector2<f64>] {
        match lane {
            Lane::Center => &self.center_hits,
            Lane::Left => &self.left_hits,
            Lane::Right => &self.right_hits,
        }
    }
}

pub fn heading_up_view(state: &FrameState, path: &PathSet) -> HeadingUpView {
    let rotation_deg = 90.0 - state.heading.to_degrees();
    let pivot = state.center;
    let inside = classify_lanes(path, &state.body);
    let rotated_hits = |lane: Lane| {
        let pts: Vec<Vector2<f64>> = inside
            .get(lane)
            .iter()
            .filter_map(|&i| path.lane(lane).get(i).copied())
            .collect();
        rotate_about(&pts, rotation_deg, pivot)
    };
    let (w, h) = (state.body.width, state.body.height);
    HeadingUpView {
        rotation_deg,
        center: pivot,
        outline: rotate_about(&state.body.corners, rotation_deg, pivot),
        center_hits: rotated_hits(Lane::Center),
        left_hits: rotated_hits(Lane::Left),
        right_hits: rotated_hits(Lane::Right),
        window: Window {
            x_min: pivot.x - 1.1 * (h / 2.0),
            x_max: pivot.x + 1.1 * (h / 2.0),
            y_min: pivot.y - w / 2.0,
            y_max: pivot.y + w / 2.0,
        },
    }
}
