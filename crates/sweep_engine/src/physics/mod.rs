//! Physics module for swept collision detection
//!
//! Provides continuous collision detection between axis-aligned rectangles:
//! a moving rectangle is swept along its displacement and the first contact
//! with any stationary target is reported. Collision response is left to the
//! caller.

pub mod collision;
pub mod collision_system;

pub use collision::{
    ray_sweep,
    single_sweep,
    Hit,
    Rect,
    Sweep,
};
pub use collision_system::{group_sweep, SweepGroup};
#[cfg(feature = "parallel")]
pub use collision_system::group_sweep_par;
