//! Candidate-move catalogs.
//!
//! A catalog enumerates every cell as a candidate placement for one
//! side, legal or not; legality is decided at the moment a candidate is
//! tried. Search code draws freshly shuffled orderings from the catalog
//! so that tie-breaking and rollout play are randomized per use.

use nogo_board::{Board, Piece, Place};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

/// All candidate placements for one side.
#[derive(Debug, Clone)]
pub struct MoveCatalog {
    side: Piece,
    places: Vec<Place>,
}

impl MoveCatalog {
    pub fn new(board: &Board, side: Piece) -> Self {
        Self {
            side,
            places: board.all_places(side),
        }
    }

    #[inline]
    pub fn side(&self) -> Piece {
        self.side
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// A freshly shuffled candidate ordering drawn from the given RNG.
    /// The catalog itself is never reordered.
    pub fn shuffled(&self, rng: &mut ChaCha20Rng) -> Vec<Place> {
        let mut order = self.places.clone();
        order.shuffle(rng);
        order
    }
}

/// The searching side's catalog paired with the opponent's.
#[derive(Debug, Clone)]
pub struct Catalogs {
    own: MoveCatalog,
    opponent: MoveCatalog,
}

impl Catalogs {
    pub fn new(board: &Board, side: Piece) -> Self {
        Self {
            own: MoveCatalog::new(board, side),
            opponent: MoveCatalog::new(board, side.opponent()),
        }
    }

    /// The catalog belonging to `side`.
    pub fn for_side(&self, side: Piece) -> &MoveCatalog {
        if side == self.own.side() {
            &self.own
        } else {
            &self.opponent
        }
    }
}
