//! # Sweep Engine
//!
//! Continuous (swept) collision detection between axis-aligned rectangles.
//!
//! A discrete overlap test only looks at where a body is at the start and
//! end of a step, so a fast body can tunnel through a thin wall. Sweeping
//! follows the full displacement and reports when the mover first touches a
//! target, where, and which face it struck.
//!
//! ## Features
//!
//! - **Ray Sweep**: point-vs-padded-rectangle slab test ([`physics::ray_sweep`])
//! - **Single Sweep**: rectangle-vs-rectangle via Minkowski padding ([`physics::single_sweep`])
//! - **Group Sweep**: earliest hit across many targets ([`physics::group_sweep`])
//! - **Scenes**: seeded random placement of non-overlapping colliders
//! - **Config**: TOML/RON configuration files
//!
//! ## Quick Start
//!
//! ```rust
//! use sweep_engine::prelude::*;
//!
//! let mover = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
//! let wall = Rect::new(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));
//!
//! let sweep = group_sweep(&mover, Vec2::new(20.0, 0.0), &[wall]);
//! let hit = sweep.hit.expect("the wall is in the way");
//! assert_eq!(sweep.time, 0.5);
//! assert_eq!(hit.normal, Vec2::new(-1.0, 0.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod physics;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        foundation::math::Vec2,
        physics::{group_sweep, ray_sweep, single_sweep, Hit, Rect, Sweep, SweepGroup},
        scene::{Scene, SceneError},
        core::config::{ApplicationConfig, DemoConfig, SceneConfig},
        config::{Config, ConfigError},
    };
    #[cfg(feature = "parallel")]
    pub use crate::physics::group_sweep_par;
}
