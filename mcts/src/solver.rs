//! Exact proof-number search for forced endgame outcomes.
//!
//! An AND/OR depth-first search over every legal continuation. A node
//! where the searching side moves is an OR node: one proved child proves
//! the node, while disproving it means disproving all children. Nodes
//! where the opponent moves mirror the roles. Because the search runs
//! to terminal positions, root numbers always resolve to proved (0) or
//! unprovable (infinite).
//!
//! Full expansion is exponential in the branching factor; the decision
//! controller must gate calls on the per-side legal-move count. The
//! solver itself never bounds its own work.

use nogo_board::{Board, Piece, Place};

/// Sentinel for "cannot be proved from here".
pub const INFINITE: u32 = u32::MAX;

/// Proof and disproof numbers for one position.
///
/// `proof` counts the child proofs still needed to establish a forced
/// win for the searching side; `disproof` counts those needed to
/// establish that no forced win exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofNumbers {
    pub proof: u32,
    pub disproof: u32,
}

impl ProofNumbers {
    /// A forced win for the searching side is established.
    #[inline]
    pub fn is_win(&self) -> bool {
        self.proof == 0
    }

    /// A forced loss for the searching side is established.
    #[inline]
    pub fn is_loss(&self) -> bool {
        self.disproof == 0
    }
}

/// Result of solving one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proof {
    pub numbers: ProofNumbers,

    /// At an OR root, the move holding the minimal proof number; the
    /// winning move whenever [`ProofNumbers::is_win`] holds.
    pub best_move: Option<Place>,
}

/// Exact solver scoring positions for one fixed side.
#[derive(Debug, Clone, Copy)]
pub struct ProofSolver {
    side: Piece,
}

impl ProofSolver {
    pub fn new(side: Piece) -> Self {
        Self { side }
    }

    /// Solve `board` with `to_move` acting, expanding every legal
    /// continuation depth-first.
    pub fn solve(&self, board: &Board, to_move: Piece) -> Proof {
        let moves = board.legal_moves(to_move);

        if moves.is_empty() {
            // The mover has no continuation and has lost the game.
            let numbers = if to_move == self.side {
                ProofNumbers {
                    proof: INFINITE,
                    disproof: 0,
                }
            } else {
                ProofNumbers {
                    proof: 0,
                    disproof: INFINITE,
                }
            };
            return Proof {
                numbers,
                best_move: None,
            };
        }

        if to_move == self.side {
            self.solve_or(board, to_move, &moves)
        } else {
            self.solve_and(board, to_move, &moves)
        }
    }

    /// OR node: the searching side picks the line. One proved child
    /// suffices; disproof must cover every child.
    fn solve_or(&self, board: &Board, to_move: Piece, moves: &[Place]) -> Proof {
        let mut proof = INFINITE;
        let mut disproof: u32 = 0;
        let mut best_move = None;

        for &mv in moves {
            let next = match board.apply(mv) {
                Ok(next) => next,
                Err(_) => continue,
            };
            let child = self.solve(&next, to_move.opponent());

            if child.numbers.proof < proof {
                proof = child.numbers.proof;
                best_move = Some(mv);
            }
            disproof = disproof.saturating_add(child.numbers.disproof);

            if proof == 0 {
                // Win proved; no sibling can change the verdict.
                disproof = INFINITE;
                break;
            }
        }

        Proof {
            numbers: ProofNumbers { proof, disproof },
            best_move,
        }
    }

    /// AND node: the opponent picks the line. Proof must cover every
    /// reply; one disproved child refutes the node.
    fn solve_and(&self, board: &Board, to_move: Piece, moves: &[Place]) -> Proof {
        let mut proof: u32 = 0;
        let mut disproof = INFINITE;

        for &mv in moves {
            let next = match board.apply(mv) {
                Ok(next) => next,
                Err(_) => continue,
            };
            let child = self.solve(&next, to_move.opponent());

            proof = proof.saturating_add(child.numbers.proof);
            disproof = disproof.min(child.numbers.disproof);

            if disproof == 0 {
                // The opponent escapes through this reply.
                proof = INFINITE;
                break;
            }
        }

        Proof {
            numbers: ProofNumbers { proof, disproof },
            best_move: None,
        }
    }
}
