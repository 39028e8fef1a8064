use flipbot::board::grid::{Board, Coord, Marker};
use flipbot::Searcher;

#[test]
fn lone_opponent_disc_means_pass() {
    // With no O discs on the board, O can never bracket a capture.
    let mut board = Board::empty();
    board.place(Coord::new(0, 0), Marker::X);

    let mut searcher = Searcher::with_seed(1);
    let outcome = searcher.search(&mut board, Marker::O, 3);
    assert_eq!(outcome.value, 0);
    assert!(outcome.line.is_empty());
    assert!(outcome.is_pass());
}

#[test]
fn full_board_means_pass() {
    let mut board = Board::empty();
    for row in 0..8 {
        for col in 0..8 {
            let marker = if (row + col) % 2 == 0 { Marker::X } else { Marker::O };
            board.place(Coord::new(row, col), marker);
        }
    }
    assert!(board.is_full());

    let mut searcher = Searcher::with_seed(1);
    let outcome = searcher.search(&mut board, Marker::X, 2);
    assert!(outcome.is_pass());
    assert_eq!(outcome.value, 0);
    assert_eq!(outcome.nodes, 0);
}

#[test]
fn surrounded_without_bracket_means_pass() {
    // O everywhere adjacent to empties but no X disc to close a line.
    let mut board = Board::empty();
    board.place(Coord::new(3, 3), Marker::O);
    board.place(Coord::new(3, 4), Marker::O);

    let mut searcher = Searcher::with_seed(1);
    let outcome = searcher.search(&mut board, Marker::X, 1);
    assert!(outcome.is_pass(), "no bracketing disc, so X must pass");
}
