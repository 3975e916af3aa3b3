use super::*;

#[test]
fn empty_board_has_every_cell_open() {
    let board = Board::standard();
    assert_eq!(board.cell_count(), 81);
    assert_eq!(board.legal_move_count(Piece::Black), 81);
    assert_eq!(board.legal_move_count(Piece::White), 81);
}

#[test]
fn apply_is_copy_on_apply() {
    let board = Board::standard();
    let mv = Place::new(40, Piece::Black);
    let next = board.apply(mv).unwrap();

    assert_eq!(next.cell(40), Piece::Black);
    assert_eq!(board.cell(40), Piece::Empty);
    assert_ne!(board, next);
}

#[test]
fn occupied_cell_is_rejected() {
    let board = Board::standard()
        .apply(Place::new(0, Piece::Black))
        .unwrap();

    assert_eq!(
        board.apply(Place::new(0, Piece::White)),
        Err(RuleViolation::Occupied)
    );
}

#[test]
fn out_of_bounds_and_empty_side_are_rejected() {
    let board = Board::new(3, 3);
    assert_eq!(
        board.apply(Place::new(9, Piece::Black)),
        Err(RuleViolation::OutOfBounds)
    );
    assert_eq!(
        board.apply(Place::new(0, Piece::Empty)),
        Err(RuleViolation::NoSide)
    );
}

#[test]
fn capture_is_forbidden() {
    // White at 1 is the last liberty of the black corner stone.
    let board = Board::from_rows(&["x..", "o..", "..."]).unwrap();
    let mv = Place::new(1, Piece::White);

    assert_eq!(board.apply(mv), Err(RuleViolation::Capture));
}

#[test]
fn suicide_is_forbidden() {
    // Black at the empty corner would have no liberties and captures
    // nothing: the white wall keeps its outside liberties.
    let board = Board::from_rows(&[".o.", "oo.", "..."]).unwrap();
    let mv = Place::new(0, Piece::Black);

    assert_eq!(board.apply(mv), Err(RuleViolation::Suicide));
}

#[test]
fn connecting_through_a_shared_liberty_is_legal() {
    // Black at 1 connects both corner stones and keeps a liberty below.
    let board = Board::from_rows(&["x.x", "...", "..."]).unwrap();
    let mv = Place::new(1, Piece::Black);

    let next = board.apply(mv).unwrap();
    assert_eq!(next.cell(1), Piece::Black);
}

#[test]
fn filling_own_last_shared_liberty_is_suicide() {
    let board = Board::from_rows(&["x.x", "ooo", "..."]).unwrap();

    // Cell 1 is the only liberty of all three black stones combined.
    assert_eq!(
        board.apply(Place::new(1, Piece::Black)),
        Err(RuleViolation::Suicide)
    );
}

#[test]
fn legal_moves_match_is_legal() {
    let board = Board::from_rows(&["x.x", "oxo", "o.."]).unwrap();
    for side in [Piece::Black, Piece::White] {
        let listed = board.legal_moves(side);
        assert_eq!(listed.len(), board.legal_move_count(side));
        for mv in listed {
            assert!(board.is_legal(mv));
        }
    }
}

#[test]
fn reflections_move_stones_to_mirror_cells() {
    let board = Board::from_rows(&["x..", "...", "..o"]).unwrap();

    let horizontal = board.reflect_horizontal();
    assert_eq!(horizontal.cell(2), Piece::Black);
    assert_eq!(horizontal.cell(6), Piece::White);

    let vertical = board.reflect_vertical();
    assert_eq!(vertical.cell(6), Piece::Black);
    assert_eq!(vertical.cell(2), Piece::White);

    // Point reflection composes both axes.
    let point = board.reflect_horizontal().reflect_vertical();
    assert_eq!(point.cell(8), Piece::Black);
    assert_eq!(point.cell(0), Piece::White);
}

#[test]
fn reflection_of_symmetric_board_is_identity() {
    let board = Board::from_rows(&["x.o", ".x.", "o.x"]).unwrap();
    let point = board.reflect_horizontal().reflect_vertical();
    assert_eq!(point, board);
}

#[test]
fn from_rows_rejects_bad_input() {
    assert_eq!(Board::from_rows(&[]), Err(BoardParseError::Empty));
    assert_eq!(
        Board::from_rows(&["xx", "x"]),
        Err(BoardParseError::RaggedRow {
            row: 1,
            got: 1,
            expected: 2
        })
    );
    assert_eq!(
        Board::from_rows(&["x?"]),
        Err(BoardParseError::UnknownGlyph('?'))
    );
}

#[test]
fn display_round_trips_through_from_rows() {
    let board = Board::from_rows(&["x.o", "...", "o.x"]).unwrap();
    let rendered = board.to_string();
    let rows: Vec<String> = rendered
        .lines()
        .map(|line| line.split_whitespace().collect())
        .collect();
    let parsed =
        Board::from_rows(&rows.iter().map(String::as_str).collect::<Vec<_>>()).unwrap();
    assert_eq!(parsed, board);
}

#[test]
fn squeezed_position_has_no_legal_moves() {
    // The center is the white ring's last liberty for black (capture)
    // and a one-stone suicide for white.
    let board = Board::from_rows(&["ooo", "o.o", "ooo"]).unwrap();
    assert_eq!(board.legal_move_count(Piece::Black), 0);
    assert_eq!(board.legal_move_count(Piece::White), 0);
}
