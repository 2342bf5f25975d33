//! Random placement of non-overlapping colliders

use rand::Rng;
use thiserror::Error;

use crate::config::ConfigError;
use crate::core::config::SceneConfig;
use crate::foundation::math::Vec2;
use crate::physics::Rect;

/// Scene setup errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// The placement budget ran out before every collider found a free spot
    #[error("Placed {placed} of {requested} colliders before exhausting {attempts} attempts")]
    PlacementExhausted {
        /// Colliders successfully placed
        placed: usize,
        /// Colliders asked for
        requested: usize,
        /// Attempts made
        attempts: usize,
    },

    /// A collider cannot fit inside the bounds at all
    #[error("Collider of {width}x{height} does not fit in bounds of {bounds_width}x{bounds_height}")]
    ColliderTooLarge {
        /// Collider width
        width: f32,
        /// Collider height
        height: f32,
        /// Bounds width
        bounds_width: f32,
        /// Bounds height
        bounds_height: f32,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Place `count` colliders of `config.collider_size` inside `config.bounds`
///
/// Candidates are drawn uniformly so the whole rectangle lies inside the
/// bounds, and rejected when they overlap the player or a collider already
/// placed. At most `config.max_placement_attempts` candidates are drawn.
pub fn generate_colliders<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    config: &SceneConfig,
) -> Result<Vec<Rect>, SceneError> {
    let size = config.collider_size;
    let half = size / 2.0;
    let min = config.bounds.min() + half;
    let max = config.bounds.max() - half;

    if min.x > max.x || min.y > max.y {
        return Err(SceneError::ColliderTooLarge {
            width: size.x,
            height: size.y,
            bounds_width: config.bounds.size.x,
            bounds_height: config.bounds.size.y,
        });
    }

    let mut colliders: Vec<Rect> = Vec::with_capacity(count);
    let mut attempts = 0;

    while colliders.len() < count {
        if attempts == config.max_placement_attempts {
            log::warn!(
                "Gave up placing colliders: {}/{} after {} attempts",
                colliders.len(), count, attempts
            );
            return Err(SceneError::PlacementExhausted {
                placed: colliders.len(),
                requested: count,
                attempts,
            });
        }
        attempts += 1;

        let center = Vec2::new(rng.gen_range(min.x..=max.x), rng.gen_range(min.y..=max.y));
        let candidate = Rect::new(center, size);

        if candidate.overlaps(&config.player) || colliders.iter().any(|c| c.overlaps(&candidate)) {
            continue;
        }

        log::debug!(
            "Placed collider {} at ({:.1}, {:.1}) after {} attempts",
            colliders.len(), center.x, center.y, attempts
        );
        colliders.push(candidate);
    }

    Ok(colliders)
}
