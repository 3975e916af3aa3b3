//! The per-decision controller.
//!
//! `DecisionAgent` owns everything mutable about move selection: the
//! RNG stream, the global move ledger, and the cycle-budget counters.
//! Each call to [`DecisionAgent::decide`] resets the ledger, builds a
//! fresh search tree, and runs to completion before returning.
//!
//! A decision moves through three stages: an opening symmetry check, a
//! gated exact-solver check, and the statistical search that commits
//! the best-rated legal root move.

use nogo_board::{Board, Piece, Place};
use nogo_config::CentralConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::catalog::Catalogs;
use crate::config::SearchConfig;
use crate::ledger::MoveLedger;
use crate::opening;
use crate::search::UctSearch;
use crate::solver::ProofSolver;

/// Errors that make an agent unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("agent side must be black or white")]
    InvalidSide,
}

/// Move-selection agent for one side of a game.
#[derive(Debug)]
pub struct DecisionAgent {
    side: Piece,
    config: SearchConfig,
    rng: ChaCha20Rng,

    /// Per-decision move statistics; reset on every `decide` call.
    ledger: MoveLedger,

    /// Current per-decision cycle budget; reset per episode.
    cycle_budget: u32,

    /// Plies seen this episode, own and opponent moves combined.
    ply: u32,
}

impl DecisionAgent {
    /// Create an agent playing `side`.
    ///
    /// The agent refuses to operate without a concrete side. An unset
    /// seed draws one from system entropy; pass a seed to reproduce
    /// games exactly.
    pub fn new(side: Piece, config: SearchConfig, seed: Option<u64>) -> Result<Self, AgentError> {
        if side == Piece::Empty {
            return Err(AgentError::InvalidSide);
        }
        let rng = match seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        Ok(Self {
            side,
            cycle_budget: config.start_cycles,
            config,
            rng,
            ledger: MoveLedger::new(),
            ply: 0,
        })
    }

    /// Create an agent from the centrally loaded configuration.
    pub fn from_central(side: Piece, central: &CentralConfig) -> Result<Self, AgentError> {
        Self::new(side, SearchConfig::from_central(central), central.agent.seed)
    }

    #[inline]
    pub fn side(&self) -> Piece {
        self.side
    }

    /// Plies observed since the episode started.
    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// The cycle budget the next statistical decision will spend.
    #[inline]
    pub fn cycle_budget(&self) -> u32 {
        self.cycle_budget
    }

    /// Reset per-game state: the budget ramp and the ply counter.
    pub fn new_episode(&mut self) {
        debug!(side = ?self.side, "starting new episode");
        self.cycle_budget = self.config.start_cycles;
        self.ply = 0;
    }

    /// Note a move made by the opponent. Informational: the search tree
    /// is rebuilt per decision anyway, only the ply counter advances.
    pub fn on_opponent_move(&mut self, mv: Place) {
        trace!(%mv, "opponent moved");
        self.ply += 1;
    }

    /// Choose a move for the current position.
    ///
    /// Returns `None` iff the agent's side has no legal move, which is
    /// the game-over signal for the caller. Any returned move is legal in
    /// `board`.
    pub fn decide(&mut self, board: &Board) -> Option<Place> {
        self.ledger.reset();

        let own_moves = board.legal_moves(self.side);
        if own_moves.is_empty() {
            debug!(side = ?self.side, "no legal move available");
            return None;
        }
        let opponent_count = board.legal_move_count(self.side.opponent());

        let mut committed = None;

        // Opening: break a mirrored position before anything else.
        if self.config.anti_mirror && self.ply < self.config.opening_ply_limit {
            if let Some(mv) = opening::break_mirror(board, self.side) {
                debug!(%mv, "breaking opening symmetry");
                committed = Some(mv);
            }
        }

        // Endgame: trust a proof over statistics, inside the gate.
        let solver_range = own_moves.len() <= self.config.solver_max_branching
            && opponent_count <= self.config.solver_max_branching;
        if committed.is_none() && solver_range {
            let proof = ProofSolver::new(self.side).solve(board, self.side);
            if proof.numbers.is_win() {
                debug!(best = ?proof.best_move, "forced win proved");
                committed = proof.best_move;
            }
        }

        // Otherwise: budgeted statistical search.
        if committed.is_none() {
            let catalogs = Catalogs::new(board, self.side);
            let mut search =
                UctSearch::new(board, self.side, &catalogs, &self.config, &mut self.rng);
            for _ in 0..self.cycle_budget {
                search.cycle(&mut self.ledger, &mut self.rng);
            }
            committed = search
                .best_move(&self.ledger)
                .or_else(|| own_moves.first().copied());
            trace!(
                budget = self.cycle_budget,
                ledger = self.ledger.len(),
                "statistical search finished"
            );
        }

        self.advance_budget(solver_range);
        self.ply += 1;
        committed
    }

    /// Additive budget ramp: grow towards the ceiling decision by
    /// decision, shrink back towards the floor once positions are small
    /// enough for the exact solver.
    fn advance_budget(&mut self, solver_range: bool) {
        self.cycle_budget = if solver_range {
            self.cycle_budget
                .saturating_sub(self.config.ramp_cycles)
                .max(self.config.start_cycles)
        } else {
            self.cycle_budget
                .saturating_add(self.config.ramp_cycles)
                .min(self.config.max_cycles)
        };
    }
}
