//! Scene - a mover and the colliders it is swept against

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::config::SceneConfig;
use crate::foundation::math::Vec2;
use crate::physics::{Rect, Sweep, SweepGroup};

use super::generator::{generate_colliders, SceneError};

/// A mover plus the stationary colliders it can run into
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// The moving rectangle
    pub player: Rect,
    /// Stationary targets, in placement order
    pub colliders: SweepGroup,
}

impl Scene {
    /// Create a scene from explicit geometry
    pub fn new(player: Rect, colliders: impl Into<SweepGroup>) -> Self {
        Self {
            player,
            colliders: colliders.into(),
        }
    }

    /// Validate `config` and build a random scene from it
    ///
    /// Uses `config.seed` when present, otherwise seeds from entropy.
    pub fn generate(config: &SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let colliders = generate_colliders(&mut rng, config.collider_count, config)?;

        log::info!(
            "Generated scene with {} colliders (seed: {:?})",
            colliders.len(), config.seed
        );
        Ok(Self::new(config.player, colliders))
    }

    /// Sweep the player toward `point` without moving it
    pub fn probe(&self, point: Vec2) -> Sweep {
        let delta = point - self.player.center;
        self.colliders.sweep(&self.player, delta)
    }

    /// Sweep the player toward `point` and move it to the safe position
    pub fn step_towards(&mut self, point: Vec2) -> Sweep {
        let sweep = self.probe(point);
        self.player = self.player.with_center(sweep.pos);
        sweep
    }
}
