//! Anti-mirroring opening heuristic.
//!
//! A mirroring opponent answers every move with its point reflection,
//! keeping the position symmetric. Occupying a cell where the point
//! reflection disagrees with the actual position breaks that symmetry
//! and denies the strategy its free ride.

use nogo_board::{Board, Piece, Place};

/// Find a legal placement for `side` on a cell where the point-reflected
/// position (both axes mirrored) disagrees with the actual occupant.
///
/// Returns `None` when the position is perfectly symmetric or every
/// asymmetric cell is unplayable.
pub fn break_mirror(board: &Board, side: Piece) -> Option<Place> {
    let reflected = board.reflect_horizontal().reflect_vertical();

    for index in 0..board.cell_count() {
        if reflected.cell(index) == board.cell(index) {
            continue;
        }
        let mv = Place::new(index, side);
        if board.is_legal(mv) {
            return Some(mv);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_position_offers_nothing_to_break() {
        let board = Board::from_rows(&["x.o", ".x.", "o.x"]).unwrap();
        assert_eq!(break_mirror(&board, Piece::White), None);
    }

    #[test]
    fn empty_board_is_symmetric() {
        assert_eq!(break_mirror(&Board::standard(), Piece::Black), None);
    }

    #[test]
    fn asymmetric_cell_is_occupied() {
        // Stones at 2/6 mirror each other; the stone at 3 has no mirror
        // partner at 5. The playable disagreement is cell 5.
        let board = Board::from_rows(&["..x", "x..", "x.."]).unwrap();

        let mv = break_mirror(&board, Piece::White).unwrap();
        assert_eq!(mv, Place::new(5, Piece::White));
    }

    #[test]
    fn occupied_asymmetric_cells_are_skipped() {
        // The only disagreements are cells 0 (occupied) and 8 (empty).
        let board = Board::from_rows(&["x..", "...", "..."]).unwrap();

        let mv = break_mirror(&board, Piece::White).unwrap();
        assert_eq!(mv, Place::new(8, Piece::White));
    }
}
