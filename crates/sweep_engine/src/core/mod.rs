//! # Core Module
//!
//! Shared configuration types used by the library and the driver.
//!
//! ## Organization
//!
//! - **Config**: Scene and driver configuration

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    ApplicationConfig,
    DemoConfig,
    SceneConfig,
};
pub use crate::config::{Config, ConfigError, ConfigFormat};
