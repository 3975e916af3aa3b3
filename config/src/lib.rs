//! Centralized configuration loading from nogo.toml.
//!
//! This crate provides the configuration structs and loading logic
//! shared by everything that constructs a playing agent.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`NOGO_<SECTION>_<KEY>`)
//! 2. nogo.toml file
//! 3. Built-in defaults (embedded from nogo.defaults.toml)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! NOGO_<SECTION>_<KEY>=value
//!
//! Examples:
//!     NOGO_SEARCH_MAX_CYCLES=2048
//!     NOGO_SEARCH_USE_RAVE=false
//!     NOGO_ROLLOUT_MAX_PLIES=100
//!     NOGO_AGENT_SEED=42
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;

#[cfg(test)]
mod tests;
