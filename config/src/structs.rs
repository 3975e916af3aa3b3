//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default
//! values sourced from the defaults module.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from the defaults module
// ============================================================================

fn d_start_cycles() -> u32 {
    defaults::start_cycles()
}
fn d_ramp_cycles() -> u32 {
    defaults::ramp_cycles()
}
fn d_max_cycles() -> u32 {
    defaults::max_cycles()
}
fn d_use_rave() -> bool {
    defaults::use_rave()
}
fn d_move_stat() -> String {
    defaults::move_stat().into()
}
fn d_rollout_max_plies() -> u32 {
    defaults::rollout_max_plies()
}
fn d_solver_max_branching() -> usize {
    defaults::solver_max_branching()
}
fn d_anti_mirror() -> bool {
    defaults::anti_mirror()
}
fn d_opening_ply_limit() -> u32 {
    defaults::opening_ply_limit()
}

/// Top-level configuration for the engine.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CentralConfig {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub rollout: RolloutSection,
    #[serde(default)]
    pub solver: SolverSection,
    #[serde(default)]
    pub opening: OpeningSection,
}

/// Per-agent settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// RNG seed for reproducible play. Unset seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Tree-search budget and statistics settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchSection {
    /// Cycles granted to the first decision of an episode.
    #[serde(default = "d_start_cycles")]
    pub start_cycles: u32,

    /// Additive budget change applied between decisions.
    #[serde(default = "d_ramp_cycles")]
    pub ramp_cycles: u32,

    /// Ceiling for the per-decision cycle budget.
    #[serde(default = "d_max_cycles")]
    pub max_cycles: u32,

    /// Maintain the global move ledger (RAVE statistics).
    #[serde(default = "d_use_rave")]
    pub use_rave: bool,

    /// Which statistic picks the final move: "tree" or "ledger".
    #[serde(default = "d_move_stat")]
    pub move_stat: String,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            start_cycles: d_start_cycles(),
            ramp_cycles: d_ramp_cycles(),
            max_cycles: d_max_cycles(),
            use_rave: d_use_rave(),
            move_stat: d_move_stat(),
        }
    }
}

/// Rollout settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RolloutSection {
    /// Ply cap for a single randomized rollout.
    #[serde(default = "d_rollout_max_plies")]
    pub max_plies: u32,
}

impl Default for RolloutSection {
    fn default() -> Self {
        Self {
            max_plies: d_rollout_max_plies(),
        }
    }
}

/// Proof-number solver settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverSection {
    /// Largest per-side legal-move count for which the solver runs.
    #[serde(default = "d_solver_max_branching")]
    pub max_branching: usize,
}

impl Default for SolverSection {
    fn default() -> Self {
        Self {
            max_branching: d_solver_max_branching(),
        }
    }
}

/// Opening heuristic settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpeningSection {
    /// Prefer symmetry-breaking moves in the opening.
    #[serde(default = "d_anti_mirror")]
    pub anti_mirror: bool,

    /// Last ply (exclusive) on which the heuristic applies.
    #[serde(default = "d_opening_ply_limit")]
    pub ply_limit: u32,
}

impl Default for OpeningSection {
    fn default() -> Self {
        Self {
            anti_mirror: d_anti_mirror(),
            ply_limit: d_opening_ply_limit(),
        }
    }
}
