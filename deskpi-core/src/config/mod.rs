//! Configuration types
//!
//! The robot is configured from a small TOML file compiled into the
//! firmware. Every field has a default matching the stock DeskPi board,
//! so an empty file is a valid configuration.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ConfigError};
pub use types::*;
