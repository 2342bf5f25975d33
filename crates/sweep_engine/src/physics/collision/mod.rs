//! Collision primitives and swept collision tests
//!
//! # Module Organization
//!
//! - [`primitives`] - The axis-aligned [`Rect`] every test operates on
//! - [`sweep`] - Ray-vs-rectangle slab test and the single-target sweep
//!
//! # Key Types
//!
//! - [`Rect`] - Center/size AABB
//! - [`Hit`] - First contact reported by a sweep
//! - [`Sweep`] - Safe end position and time of a sweep, with its optional [`Hit`]

pub mod primitives;
pub mod sweep;

// Re-export commonly used types
pub use primitives::Rect;
pub use sweep::{ray_sweep, single_sweep, Hit, Sweep};
