//! Default configuration values loaded from nogo.defaults.toml.
//!
//! This module loads defaults from the shared TOML file at compile time,
//! so the shipped defaults and the documented ones cannot drift apart.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../nogo.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("nogo.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing nogo.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    search: SearchDefaults,
    rollout: RolloutDefaults,
    solver: SolverDefaults,
    opening: OpeningDefaults,
}

#[derive(Debug, Deserialize)]
struct SearchDefaults {
    start_cycles: u32,
    ramp_cycles: u32,
    max_cycles: u32,
    use_rave: bool,
    move_stat: String,
}

#[derive(Debug, Deserialize)]
struct RolloutDefaults {
    max_plies: u32,
}

#[derive(Debug, Deserialize)]
struct SolverDefaults {
    max_branching: usize,
}

#[derive(Debug, Deserialize)]
struct OpeningDefaults {
    anti_mirror: bool,
    ply_limit: u32,
}

// ============================================================================
// Accessors
// ============================================================================

/// Tree-search cycles granted to the first decision of an episode.
pub fn start_cycles() -> u32 {
    DEFAULTS.search.start_cycles
}

/// Additive budget change applied between decisions.
pub fn ramp_cycles() -> u32 {
    DEFAULTS.search.ramp_cycles
}

/// Ceiling for the per-decision cycle budget.
pub fn max_cycles() -> u32 {
    DEFAULTS.search.max_cycles
}

/// Whether the global move ledger (RAVE statistics) is maintained.
pub fn use_rave() -> bool {
    DEFAULTS.search.use_rave
}

/// Which statistic picks the final move: "tree" or "ledger".
pub fn move_stat() -> &'static str {
    &DEFAULTS.search.move_stat
}

/// Ply cap for a single randomized rollout.
pub fn rollout_max_plies() -> u32 {
    DEFAULTS.rollout.max_plies
}

/// Largest per-side legal-move count for which the proof-number solver
/// is invoked.
pub fn solver_max_branching() -> usize {
    DEFAULTS.solver.max_branching
}

/// Whether the anti-mirroring opening heuristic is enabled.
pub fn anti_mirror() -> bool {
    DEFAULTS.opening.anti_mirror
}

/// Last ply (exclusive) on which the anti-mirroring heuristic applies.
pub fn opening_ply_limit() -> u32 {
    DEFAULTS.opening.ply_limit
}
