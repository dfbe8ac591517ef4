//! Curated surface for renderers and drivers (UNSTABLE).
//!
//! Important
//! - Convenience re-exports only; module paths remain the source of truth.
//! - Breaking changes are allowed while the frame layout settles.

// Configuration
pub use crate::cfg::{ConfigError, ContainmentAnchor, TrajectoryCfg};
// Sampling
pub use crate::path::{generate, generate_with_offset, Lane, PathSet, Sample, LANE_OFFSET};
// Kinematics
pub use crate::kinematics::{
    classify, classify_in, classify_lanes, heading_of, inside_mask, is_degenerate, rectangle_at,
    rotate_about, tangent_at, tangent_on, to_local, to_world, LaneHits, Rigid2, RigidBody,
    TangentMode,
};
// Per-frame state
pub use crate::frame::{compute_frame, frames, FrameState};
pub use crate::view::{heading_up_view, HeadingUpView, Window};
