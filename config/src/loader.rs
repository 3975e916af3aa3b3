//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable
//! overrides.

use crate::CentralConfig;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Standard locations to search for nogo.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "nogo.toml",    // Current directory
    "../nogo.toml", // Parent directory (when running from a member crate)
];

/// Load the central configuration from nogo.toml.
///
/// Searches for nogo.toml in the following order:
/// 1. Path specified by the NOGO_CONFIG environment variable
/// 2. Current directory (nogo.toml)
/// 3. Parent directory (../nogo.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    // Check for explicit config path
    if let Ok(path) = std::env::var("NOGO_CONFIG") {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from NOGO_CONFIG: {}", path.display());
            return load_from_path(&path);
        }
        warn!(
            "NOGO_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    // Search default locations
    for path_str in CONFIG_SEARCH_PATHS {
        let path = PathBuf::from(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(&path);
        }
    }

    // Fall back to defaults
    debug!("No nogo.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
pub fn load_from_path(path: &PathBuf) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, bool, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(v) =
            std::env::var($key).and_then(|s| s.parse().map_err(|_| std::env::VarError::NotPresent))
        {
            $config.$section.$field = v;
        }
    };
    // Optional parseable field (Option<u64>, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, optional_parse) => {
        if let Ok(v) =
            std::env::var($key).and_then(|s| s.parse().map_err(|_| std::env::VarError::NotPresent))
        {
            $config.$section.$field = Some(v);
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: NOGO_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Agent
    env_override!(config, agent.seed, "NOGO_AGENT_SEED", optional_parse);

    // Search
    env_override!(config, search.start_cycles, "NOGO_SEARCH_START_CYCLES", parse);
    env_override!(config, search.ramp_cycles, "NOGO_SEARCH_RAMP_CYCLES", parse);
    env_override!(config, search.max_cycles, "NOGO_SEARCH_MAX_CYCLES", parse);
    env_override!(config, search.use_rave, "NOGO_SEARCH_USE_RAVE", parse);
    env_override!(config, search.move_stat, "NOGO_SEARCH_MOVE_STAT");

    // Rollout
    env_override!(config, rollout.max_plies, "NOGO_ROLLOUT_MAX_PLIES", parse);

    // Solver
    env_override!(
        config,
        solver.max_branching,
        "NOGO_SOLVER_MAX_BRANCHING",
        parse
    );

    // Opening
    env_override!(config, opening.anti_mirror, "NOGO_OPENING_ANTI_MIRROR", parse);
    env_override!(config, opening.ply_limit, "NOGO_OPENING_PLY_LIMIT", parse);

    config
}
