//! Frame-indexed geometry for a vehicle body following a perturbed circular path.
//!
//! Layout
//! - `cfg`: the single configuration record and its validation.
//! - `path`: closed-form lane sampling (center, left, right).
//! - `kinematics`: tangents, the oriented body, rigid transforms, containment.
//! - `frame`: the pure per-frame state computation handed to renderers.
//! - `view`: heading-up re-projection of a frame (travel direction points up).
//!
//! Everything here is a pure function of a `PathSet` and a frame index. Drawing and
//! the animation loop belong to callers (see the `cli` crate).

pub mod api;
pub mod cfg;
pub mod frame;
pub mod kinematics;
pub mod path;
pub mod view;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{ConfigError, ContainmentAnchor, TrajectoryCfg};
pub use kinematics::{Rigid2, TangentMode};
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{ConfigError, ContainmentAnchor, TrajectoryCfg};
    pub use crate::frame::{compute_frame, frames, FrameState, LaneHits};
    pub use crate::kinematics::{
        classify, rectangle_at, tangent_at, to_local, to_world, RigidBody, Rigid2, TangentMode,
    };
    pub use crate::path::{generate, Lane, PathSet, Sample};
    pub use crate::view::{heading_up_view, HeadingUpView};
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
