use super::*;

const E: Cell = Cell::Empty;
const X: Cell = Cell::Marked(Mark::X);
const O: Cell = Cell::Marked(Mark::O);

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);

    let pos2 = Pos::from_index(7);
    assert_eq!(pos2.row, 2);
    assert_eq!(pos2.col, 1);
}

#[test]
fn test_pos_try_new() {
    assert_eq!(Pos::try_new(2, 2), Some(Pos::new(2, 2)));
    assert_eq!(Pos::try_new(3, 0), None);
    assert_eq!(Pos::try_new(0, 3), None);
}

#[test]
fn test_pos_all_row_major() {
    let all: Vec<Pos> = Pos::all().collect();
    assert_eq!(all.len(), TOTAL_CELLS);
    assert_eq!(all[0], Pos::new(0, 0));
    assert_eq!(all[3], Pos::new(1, 0));
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "off the board")]
fn test_off_board_pos_rejected_by_get() {
    // (1, 5) would otherwise alias cell (2, 2)
    let board = Board::new();
    let _ = board.get(Pos { row: 1, col: 5 });
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert_eq!(board.empty_cells().count(), 9);
    assert!(!board.is_full());
}

#[test]
fn test_place_sets_cell() {
    let mut board = Board::new();
    board.place(Pos::new(0, 2), Mark::X);
    assert_eq!(board.get(Pos::new(0, 2)), X);
    assert_eq!(board.mark_count(Mark::X), 1);
    assert!(!board.is_empty(Pos::new(0, 2)));
}

#[test]
fn test_place_on_occupied_is_noop() {
    let mut board = Board::new();
    board.place(Pos::new(1, 1), Mark::X);
    let before = board;

    board.place(Pos::new(1, 1), Mark::O);
    assert_eq!(board, before);
    assert_eq!(
        board.try_place(Pos::new(1, 1), Mark::O),
        Err(crate::error::MoveError::Occupied(Pos::new(1, 1)))
    );
}

#[test]
fn test_place_after_win_is_noop() {
    let mut board = Board::from_cells([[X, X, X], [O, O, E], [E, E, E]]);
    let before = board;

    board.place(Pos::new(1, 2), Mark::O);
    assert_eq!(board, before);
    assert_eq!(
        board.try_place(Pos::new(2, 2), Mark::O),
        Err(crate::error::MoveError::GameOver)
    );
}

#[test]
fn test_place_out_of_bounds_is_noop() {
    let mut board = Board::new();
    let pos = Pos { row: 3, col: 0 };
    assert!(matches!(
        board.try_place(pos, Mark::X),
        Err(crate::error::MoveError::OutOfBounds { row: 3, col: 0 })
    ));
    assert!(board.is_board_empty());
}

#[test]
fn test_reset_clears_board() {
    let mut board = Board::from_cells([[X, O, X], [O, X, O], [O, X, O]]);
    assert!(board.is_full());
    board.reset();
    assert!(board.is_board_empty());
}

#[test]
fn test_with_mark_leaves_original_untouched() {
    let board = Board::new();
    let next = board.with_mark(Pos::new(2, 0), Mark::O);
    assert!(board.is_board_empty());
    assert_eq!(next.get(Pos::new(2, 0)), O);
}

#[test]
fn test_empty_cells_row_major() {
    let board = Board::from_cells([[X, E, O], [E, X, E], [O, E, E]]);
    let empty: Vec<Pos> = board.empty_cells().collect();
    assert_eq!(
        empty,
        vec![
            Pos::new(0, 1),
            Pos::new(1, 0),
            Pos::new(1, 2),
            Pos::new(2, 1),
            Pos::new(2, 2),
        ]
    );
}

#[test]
fn test_display() {
    let board = Board::from_cells([[X, E, O], [E, X, E], [E, E, E]]);
    assert_eq!(board.to_string(), "X.O\n.X.\n...");
}
