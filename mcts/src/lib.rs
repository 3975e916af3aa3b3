//! Monte-Carlo tree search move selection for NoGo.
//!
//! This crate picks moves for one side of a NoGo game. Each decision is
//! a self-contained search over positions supplied by `nogo-board`:
//!
//! 1. **Selection**: descend the tree by UCB1 score, re-checking move
//!    legality at every step
//! 2. **Expansion**: materialize one ply of children at the frontier
//! 3. **Simulation**: play a capped, randomized rollout and score it for
//!    the searching side
//! 4. **Backpropagation**: update visit/win counters along the visited
//!    path and the global per-move ledger (RAVE)
//!
//! Near the endgame, when both sides are down to a handful of legal
//! moves, an exact proof-number solver replaces the statistics: a proved
//! forced win is committed directly.
//!
//! # Usage
//!
//! ```rust
//! use nogo_board::{Board, Piece};
//! use nogo_mcts::{DecisionAgent, SearchConfig};
//!
//! let config = SearchConfig::for_testing();
//! let mut agent = DecisionAgent::new(Piece::Black, config, Some(42)).unwrap();
//!
//! agent.new_episode();
//! let board = Board::standard();
//! let mv = agent.decide(&board).expect("the opening position has legal moves");
//! assert!(board.is_legal(mv));
//! ```
//!
//! # Architecture
//!
//! ```text
//! DecisionAgent (budget ramp, solver gate, opening heuristic)
//!   ├── UctSearch ── SearchTree (arena) ── SearchNode
//!   │        └────── RolloutEngine ── MoveCatalog shuffles
//!   ├── MoveLedger (per-decision RAVE statistics)
//!   └── ProofSolver (exact AND/OR endgame search)
//! ```
//!
//! The search is single-threaded and every decision rebuilds its tree
//! from scratch; nothing is shared between decisions except the agent's
//! RNG stream and the budget counters.

pub mod agent;
pub mod catalog;
pub mod config;
pub mod ledger;
pub mod node;
pub mod opening;
pub mod rollout;
pub mod search;
pub mod solver;
pub mod tree;

// Re-export main types
pub use agent::{AgentError, DecisionAgent};
pub use catalog::{Catalogs, MoveCatalog};
pub use config::{MoveStat, SearchConfig};
pub use ledger::{LedgerStats, MoveLedger};
pub use node::{NodeId, SearchNode};
pub use rollout::RolloutEngine;
pub use search::UctSearch;
pub use solver::{Proof, ProofNumbers, ProofSolver};
pub use tree::SearchTree;
