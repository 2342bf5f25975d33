//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

use log::LevelFilter;
use std::str::FromStr;

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize logging with a default level name (`"info"`, `"debug"`, ...)
///
/// `RUST_LOG` still takes precedence when set. Unknown names fall back to `info`.
pub fn init_with_level(level: &str) {
    let filter = parse_level(level);
    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .init();
}

/// Parse a level name, falling back to [`LevelFilter::Info`]
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or(LevelFilter::Info)
}
