//! Scene setup for swept collision
//!
//! A scene is one mover plus a group of stationary, non-overlapping
//! colliders. Generation takes the RNG explicitly, so a seeded RNG always
//! produces the same scene.
//!
//! ## Architecture
//!
//! ```text
//! SceneConfig + Rng
//!      ↓
//! generate_colliders (rejection sampling)
//!      ↓
//! Scene { player, colliders: SweepGroup }
//!      ↓
//! Scene::step_towards → group sweep
//! ```

mod generator;
mod scene_manager;

pub use generator::{generate_colliders, SceneError};
pub use scene_manager::Scene;
