//! Planar kinematics of the vehicle body.
//!
//! Purpose
//! - Turn a sampled lane into per-sample headings and an oriented body rectangle.
//! - Move points between the world frame and the body's local frame.
//! - Decide which points fall inside the body footprint.
//!
//! Conventions
//! - Headings are radians (`atan2`, range `(−π, π]`) internally; the free transform
//!   and containment functions take degrees, matching the rendering side.
//! - Local frame: origin at the body center, x along the direction of travel,
//!   y to its left. `world = R(θ)·local + c` and `local = R(−θ)·(world − c)`.
//!   Corner placement and containment both go through `Rigid2`, so they cannot
//!   disagree on the rotation sign.
//!
//! Code cross-refs: `frame::compute_frame`, `view::heading_up_view`

mod body;
mod contain;
mod tangent;
mod transform;

pub use body::{heading_of, rectangle_at, RigidBody, CORNER_SIGNS};
pub use contain::{classify, classify_in, classify_lanes, inside_local, inside_mask, LaneHits};
pub use tangent::{displacement_on, is_degenerate, tangent_at, tangent_on, TangentMode};
pub use transform::{rotate_about, to_local, to_world, Rigid2};
