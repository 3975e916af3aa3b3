//! Search configuration parameters.
//!
//! One configurable engine replaces the historical family of
//! near-identical agent variants: the RAVE ledger, the proof-number
//! solver gate, the anti-mirroring opening heuristic, and the budget
//! ramp are all feature knobs on a single [`SearchConfig`].

use nogo_config::CentralConfig;
use tracing::warn;

/// Which statistic picks the final move from the root children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStat {
    /// Per-child win rate accumulated in the search tree.
    Tree,
    /// Global per-move win rate from the RAVE ledger.
    Ledger,
}

/// Configuration for one decision-making agent.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Tree-search cycles granted to the first decision of an episode.
    pub start_cycles: u32,

    /// Additive budget change between decisions: the budget grows by
    /// this much per decision until `max_cycles`, and shrinks by it once
    /// the position is inside the solver gate.
    pub ramp_cycles: u32,

    /// Ceiling for the per-decision cycle budget.
    pub max_cycles: u32,

    /// Ply cap for a single randomized rollout. Rollouts that reach the
    /// cap without either side running out of moves score as a loss for
    /// the searching side.
    pub rollout_max_plies: u32,

    /// Maintain the global move ledger (RAVE statistics) during rollouts
    /// and backpropagation.
    pub use_rave: bool,

    /// Statistic used to pick the final move.
    pub move_stat: MoveStat,

    /// Largest per-side legal-move count for which the proof-number
    /// solver is invoked. Above this the solver is never called; full
    /// expansion would be intractable.
    pub solver_max_branching: usize,

    /// Prefer a symmetry-breaking placement during the opening.
    pub anti_mirror: bool,

    /// Last ply (exclusive) on which the anti-mirror heuristic applies.
    pub opening_ply_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start_cycles: 128,
            ramp_cycles: 64,
            max_cycles: 1024,
            rollout_max_plies: 74,
            use_rave: true,
            move_stat: MoveStat::Ledger,
            solver_max_branching: 8,
            anti_mirror: false,
            opening_ply_limit: 4,
        }
    }
}

impl SearchConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            start_cycles: 16,
            ramp_cycles: 8,
            max_cycles: 32,
            rollout_max_plies: 40,
            solver_max_branching: 6,
            ..Self::default()
        }
    }

    /// Build a config from the centrally loaded configuration.
    pub fn from_central(central: &CentralConfig) -> Self {
        let mut move_stat = match central.search.move_stat.as_str() {
            "tree" => MoveStat::Tree,
            "ledger" => MoveStat::Ledger,
            other => {
                warn!("unknown move_stat `{other}`, falling back to ledger");
                MoveStat::Ledger
            }
        };
        if !central.search.use_rave && move_stat == MoveStat::Ledger {
            warn!("move_stat = ledger requires use_rave, falling back to tree");
            move_stat = MoveStat::Tree;
        }

        Self {
            start_cycles: central.search.start_cycles,
            ramp_cycles: central.search.ramp_cycles,
            max_cycles: central.search.max_cycles,
            rollout_max_plies: central.rollout.max_plies,
            use_rave: central.search.use_rave,
            move_stat,
            solver_max_branching: central.solver.max_branching,
            anti_mirror: central.opening.anti_mirror,
            opening_ply_limit: central.opening.ply_limit,
        }
    }

    /// Builder pattern: set the cycle budget ramp.
    pub fn with_cycle_budget(mut self, start: u32, ramp: u32, max: u32) -> Self {
        self.start_cycles = start;
        self.ramp_cycles = ramp;
        self.max_cycles = max;
        self
    }

    /// Builder pattern: enable or disable the RAVE ledger.
    pub fn with_rave(mut self, enabled: bool) -> Self {
        self.use_rave = enabled;
        if !enabled {
            self.move_stat = MoveStat::Tree;
        }
        self
    }

    /// Builder pattern: set the final-move statistic.
    pub fn with_move_stat(mut self, stat: MoveStat) -> Self {
        self.move_stat = stat;
        self
    }

    /// Builder pattern: set the rollout ply cap.
    pub fn with_rollout_max_plies(mut self, plies: u32) -> Self {
        self.rollout_max_plies = plies;
        self
    }

    /// Builder pattern: set the solver branching gate.
    pub fn with_solver_max_branching(mut self, branching: usize) -> Self {
        self.solver_max_branching = branching;
        self
    }

    /// Builder pattern: enable or disable the anti-mirror heuristic.
    pub fn with_anti_mirror(mut self, enabled: bool) -> Self {
        self.anti_mirror = enabled;
        self
    }

    /// Builder pattern: set the opening ply limit.
    pub fn with_opening_ply_limit(mut self, limit: u32) -> Self {
        self.opening_ply_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.start_cycles, 128);
        assert_eq!(config.max_cycles, 1024);
        assert_eq!(config.rollout_max_plies, 74);
        assert!(config.use_rave);
        assert_eq!(config.move_stat, MoveStat::Ledger);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_cycle_budget(10, 5, 50)
            .with_solver_max_branching(4)
            .with_anti_mirror(true);

        assert_eq!(config.start_cycles, 10);
        assert_eq!(config.ramp_cycles, 5);
        assert_eq!(config.max_cycles, 50);
        assert_eq!(config.solver_max_branching, 4);
        assert!(config.anti_mirror);
    }

    #[test]
    fn test_disabling_rave_forces_tree_stat() {
        let config = SearchConfig::default().with_rave(false);
        assert!(!config.use_rave);
        assert_eq!(config.move_stat, MoveStat::Tree);
    }

    #[test]
    fn test_from_central_maps_every_section() {
        let central = CentralConfig::default();
        let config = SearchConfig::from_central(&central);

        assert_eq!(config.start_cycles, central.search.start_cycles);
        assert_eq!(config.max_cycles, central.search.max_cycles);
        assert_eq!(config.rollout_max_plies, central.rollout.max_plies);
        assert_eq!(config.solver_max_branching, central.solver.max_branching);
        assert_eq!(config.anti_mirror, central.opening.anti_mirror);
        assert_eq!(config.move_stat, MoveStat::Ledger);
    }

    #[test]
    fn test_from_central_rejects_unknown_move_stat() {
        let mut central = CentralConfig::default();
        central.search.move_stat = "votes".into();

        let config = SearchConfig::from_central(&central);
        assert_eq!(config.move_stat, MoveStat::Ledger);
    }
}
