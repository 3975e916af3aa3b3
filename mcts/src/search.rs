//! The UCT search cycle.
//!
//! One cycle descends the tree by UCB1 score, expands one ply at the
//! frontier, plays a rollout, and propagates the outcome back along the
//! visited path, updating both the per-node counters and the global
//! move ledger.

use nogo_board::{Board, Piece, Place};
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::catalog::Catalogs;
use crate::config::{MoveStat, SearchConfig};
use crate::ledger::MoveLedger;
use crate::node::NodeId;
use crate::rollout::RolloutEngine;
use crate::tree::SearchTree;

/// Tree search for a single decision.
///
/// Holds the decision-scoped state: the tree, the per-decision shuffled
/// expansion orderings, and the rollout engine. Built fresh for every
/// decision and discarded with it.
pub struct UctSearch<'a> {
    tree: SearchTree,
    catalogs: &'a Catalogs,
    config: &'a SearchConfig,
    rollout: RolloutEngine,
    side: Piece,

    // Expansion orderings, shuffled once per decision. Rollouts draw
    // their own fresh shuffles from the catalogs.
    ordering_own: Vec<Place>,
    ordering_opponent: Vec<Place>,
}

impl<'a> UctSearch<'a> {
    /// Start a search for `side` to move at `board`.
    pub fn new(
        board: &Board,
        side: Piece,
        catalogs: &'a Catalogs,
        config: &'a SearchConfig,
        rng: &mut ChaCha20Rng,
    ) -> Self {
        Self {
            tree: SearchTree::new(board.clone(), side),
            ordering_own: catalogs.for_side(side).shuffled(rng),
            ordering_opponent: catalogs.for_side(side.opponent()).shuffled(rng),
            rollout: RolloutEngine::new(side, config.rollout_max_plies, config.use_rave),
            catalogs,
            config,
            side,
        }
    }

    /// Run one select → expand → simulate → backpropagate cycle.
    pub fn cycle(&mut self, ledger: &mut MoveLedger, rng: &mut ChaCha20Rng) {
        // Selection: descend while children with legal moves exist.
        let mut path = vec![self.tree.root()];
        let mut current = self.tree.root();
        let mut exhausted = false;

        loop {
            if self.tree.get(current).is_leaf() {
                break;
            }
            match self.tree.select_child(current) {
                Some(child) => {
                    path.push(child);
                    current = child;
                }
                None => {
                    // No stored child move is legal here any more.
                    exhausted = true;
                    break;
                }
            }
        }

        // Expansion: materialize one ply at a true leaf, then simulate
        // from the first fresh child. An exhausted node simulates from
        // itself.
        let mut frontier = current;
        if !exhausted {
            if let Some(first_child) = self.expand(current) {
                path.push(first_child);
                frontier = first_child;
            }
        }

        // Simulation.
        let (board, mover) = {
            let node = self.tree.get(frontier);
            (node.board.clone(), node.mover)
        };
        let won = self
            .rollout
            .simulate(&board, mover, self.catalogs, ledger, rng);

        // Backpropagation: per-node counters plus the global ledger,
        // the latter keyed by each visited node's incoming move.
        self.tree.backpropagate(&path, won);
        if self.config.use_rave {
            for &id in &path {
                if let Some(mv) = self.tree.get(id).incoming {
                    if mv.piece == self.side {
                        ledger.add_trial(mv);
                        if won {
                            ledger.add_win(mv);
                        }
                    }
                }
            }
        }

        trace!(
            depth = path.len(),
            nodes = self.tree.len(),
            exhausted,
            won,
            "search cycle complete"
        );
    }

    /// Create one child per legal candidate of the node's mover, in the
    /// decision's shuffled order. Illegal candidates are skipped.
    /// Returns the first child created, if any.
    fn expand(&mut self, id: NodeId) -> Option<NodeId> {
        let (board, mover) = {
            let node = self.tree.get(id);
            (node.board.clone(), node.mover)
        };
        let order = if mover == self.side {
            &self.ordering_own
        } else {
            &self.ordering_opponent
        };

        let mut first = None;
        for &mv in order {
            if let Ok(next) = board.apply(mv) {
                let child = self.tree.add_child(id, mv, next);
                if first.is_none() {
                    first = Some(child);
                }
            }
        }
        first
    }

    /// Pick the best root move among children that are still legal,
    /// ranked by the configured statistic. Ties keep the earliest
    /// child. `None` when the root has no legal children.
    pub fn best_move(&self, ledger: &MoveLedger) -> Option<Place> {
        let root = self.tree.get(self.tree.root());
        let mut best = None;
        let mut best_rate = f64::NEG_INFINITY;

        for &(mv, child_id) in &root.children {
            if !root.board.is_legal(mv) {
                continue;
            }
            let rate = match self.config.move_stat {
                MoveStat::Tree => self.tree.get(child_id).win_rate(),
                MoveStat::Ledger => ledger.win_rate(mv).unwrap_or(0.0),
            };
            if rate > best_rate {
                best = Some(mv);
                best_rate = rate;
            }
        }
        best
    }

    /// The underlying tree (for inspection and tests).
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }
}
