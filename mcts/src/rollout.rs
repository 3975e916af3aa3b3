//! Randomized playouts from a frontier position.
//!
//! A rollout alternates strictly between the two sides, each ply playing
//! the first legal candidate from that side's freshly shuffled ordering,
//! until one side has no legal move or the ply cap trips. The result is
//! scored for the searching side; the opponent running out of moves is
//! the win condition. All randomness comes from the caller's RNG stream;
//! nothing here is ever reseeded.

use nogo_board::{Board, Piece, Place};
use rand_chacha::ChaCha20Rng;

use crate::catalog::Catalogs;
use crate::ledger::MoveLedger;

/// Plays capped randomized games and feeds the move ledger.
#[derive(Debug, Clone)]
pub struct RolloutEngine {
    side: Piece,
    max_plies: u32,
    record_rave: bool,
}

impl RolloutEngine {
    /// `side` is the searching side the outcome is scored for.
    pub fn new(side: Piece, max_plies: u32, record_rave: bool) -> Self {
        Self {
            side,
            max_plies,
            record_rave,
        }
    }

    /// Play one rollout from `board` with `to_move` acting first.
    ///
    /// Returns `true` iff the opponent of the searching side was the
    /// side that ran out of moves. Reaching the ply cap with both sides
    /// still able to move scores as a non-win; capped rollouts are a
    /// known approximation, not a terminal evaluation.
    ///
    /// Every move played by the searching side is recorded in the
    /// ledger: a trial immediately, a win once the whole rollout has
    /// resolved in the searching side's favor.
    pub fn simulate(
        &self,
        board: &Board,
        to_move: Piece,
        catalogs: &Catalogs,
        ledger: &mut MoveLedger,
        rng: &mut ChaCha20Rng,
    ) -> bool {
        // One fresh shuffle per side per rollout; the orderings are
        // reused across this rollout's plies.
        let own_order = catalogs.for_side(self.side).shuffled(rng);
        let opponent_order = catalogs.for_side(self.side.opponent()).shuffled(rng);

        let mut current = board.clone();
        let mut mover = to_move;
        let mut played: Vec<Place> = Vec::new();
        let mut outcome = false;

        for _ in 0..self.max_plies {
            let order = if mover == self.side {
                &own_order
            } else {
                &opponent_order
            };

            let step = order
                .iter()
                .find_map(|&mv| current.apply(mv).ok().map(|next| (mv, next)));

            match step {
                Some((mv, next)) => {
                    if self.record_rave && mover == self.side {
                        ledger.add_trial(mv);
                        played.push(mv);
                    }
                    current = next;
                    mover = mover.opponent();
                }
                None => {
                    // The mover is out of moves and loses.
                    outcome = mover == self.side.opponent();
                    break;
                }
            }
        }

        if outcome && self.record_rave {
            for mv in played {
                ledger.add_win(mv);
            }
        }
        outcome
    }
}
