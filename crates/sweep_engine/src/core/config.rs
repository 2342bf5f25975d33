//! # Unified Configuration
//!
//! Concrete configuration for scene generation and the headless driver.
//! Everything is serde-derived with `#[serde(default)]`, so a file only needs
//! to name the values it changes.
//!
//! ## Configuration Categories
//!
//! - **Scene Config**: play-field bounds, the mover, collider count and size
//! - **Demo Config**: log level and how the driver steps the mover

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::foundation::math::Vec2;
use crate::physics::Rect;

/// # Scene Configuration
///
/// Describes the play field and the stationary colliders scattered over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of colliders to place
    pub collider_count: usize,
    /// Full size of every collider
    pub collider_size: Vec2,
    /// Random placements tried before giving up
    pub max_placement_attempts: usize,
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Area that colliders must lie inside
    pub bounds: Rect,
    /// Starting rectangle of the mover
    pub player: Rect,
}

impl SceneConfig {
    /// Create a scene configuration with the default play field
    pub fn new() -> Self {
        Self {
            collider_count: 8,
            collider_size: Vec2::new(30.0, 30.0),
            max_placement_attempts: 10_000,
            seed: None,
            bounds: Rect::from_top_left(0.0, 0.0, 640.0, 360.0),
            player: Rect::from_top_left(100.0, 100.0, 30.0, 30.0),
        }
    }

    /// Set number of colliders
    pub const fn with_collider_count(mut self, count: usize) -> Self {
        self.collider_count = count;
        self
    }

    /// Set collider size
    pub const fn with_collider_size(mut self, size: Vec2) -> Self {
        self.collider_size = size;
        self
    }

    /// Set the placement budget
    pub const fn with_max_placement_attempts(mut self, attempts: usize) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Use a fixed seed for a repeatable scene
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the play-field bounds
    pub const fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the mover's starting rectangle
    pub const fn with_player(mut self, player: Rect) -> Self {
        self.player = player;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: Vec2| v.x > 0.0 && v.y > 0.0;

        if !positive(self.bounds.size) {
            return Err(ConfigError::Invalid("bounds must have a positive size".to_string()));
        }
        if !positive(self.player.size) {
            return Err(ConfigError::Invalid("player must have a positive size".to_string()));
        }
        if !positive(self.collider_size) {
            return Err(ConfigError::Invalid("collider size must be positive".to_string()));
        }
        if self.collider_size.x > self.bounds.size.x || self.collider_size.y > self.bounds.size.y {
            return Err(ConfigError::Invalid("collider does not fit inside the bounds".to_string()));
        }
        if !self.bounds.contains_rect(&self.player) {
            return Err(ConfigError::Invalid("player must start inside the bounds".to_string()));
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::Invalid("placement attempts must be at least 1".to_string()));
        }

        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Demo Configuration
///
/// Controls the headless driver that stands in for a render/input loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Log level for the driver
    pub log_level: String,
    /// Number of displacements to simulate
    pub steps: usize,
    /// Whether each step moves the player to the safe position
    pub apply_moves: bool,
}

impl DemoConfig {
    /// Create a new demo configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            steps: 16,
            apply_moves: true,
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set number of steps
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration loaded by the driver.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Driver configuration
    pub demo: DemoConfig,
    /// Scene configuration
    pub scene: SceneConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scene.validate()
    }
}

impl Config for ApplicationConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_default_scene_matches_play_field() {
        let config = SceneConfig::default();
        assert_eq!(config.bounds.min(), Vec2::new(0.0, 0.0));
        assert_eq!(config.bounds.max(), Vec2::new(640.0, 360.0));
        assert_eq!(config.player.center, Vec2::new(115.0, 115.0));
        assert_eq!(config.collider_count, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_collider = SceneConfig::new().with_collider_size(Vec2::new(0.0, 10.0));
        assert!(matches!(zero_collider.validate(), Err(ConfigError::Invalid(_))));

        let huge_collider = SceneConfig::new().with_collider_size(Vec2::new(700.0, 10.0));
        assert!(huge_collider.validate().is_err());

        let outside = SceneConfig::new().with_player(Rect::from_top_left(-50.0, 0.0, 30.0, 30.0));
        assert!(outside.validate().is_err());

        let no_budget = SceneConfig::new().with_max_placement_attempts(0);
        assert!(no_budget.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ApplicationConfig {
            demo: DemoConfig::new().with_steps(3).with_log_level("debug"),
            scene: SceneConfig::new().with_seed(42).with_collider_count(5),
        };
        let text = config.to_string_as(ConfigFormat::Toml).expect("serialize");
        let parsed = ApplicationConfig::from_str_as(&text, ConfigFormat::Toml).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let config = ApplicationConfig::default();
        let text = config.to_string_as(ConfigFormat::Ron).expect("serialize");
        let parsed = ApplicationConfig::from_str_as(&text, ConfigFormat::Ron).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let text = "[demo]\nsteps = 2\n\n[scene]\ncollider_count = 3\n";
        let parsed = ApplicationConfig::from_str_as(text, ConfigFormat::Toml).expect("parse");
        assert_eq!(parsed.demo.steps, 2);
        assert_eq!(parsed.demo.log_level, "info");
        assert_eq!(parsed.scene.collider_count, 3);
        assert_eq!(parsed.scene.bounds, SceneConfig::default().bounds);
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir()
            .join(format!("sweep_engine_config_{}.toml", std::process::id()));
        let config = ApplicationConfig {
            demo: DemoConfig::new().with_steps(7),
            scene: SceneConfig::new().with_seed(9),
        };
        config.save_to_file(&path).expect("save");
        let loaded = ApplicationConfig::load_from_file(&path).expect("load");
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let result = ApplicationConfig::load_from_file("settings.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
