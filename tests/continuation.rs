use flipbot::board::grid::{Board, FlipList, Marker};
use flipbot::Searcher;

/// The returned line is a playable continuation: alternating players from
/// the mover, every step legal when replayed in order.
#[test]
fn predicted_line_replays_legally() {
    let mut board = Board::new();
    let mut searcher = Searcher::with_seed(13);
    let outcome = searcher.search(&mut board, Marker::X, 5);

    // No passes happen this early, so the line runs to the horizon.
    assert_eq!(outcome.line.len(), 5);

    let mut replay = board.clone();
    let mut mover = Marker::X;
    let mut flips = FlipList::new();
    for (ply, &coord) in outcome.line.iter().enumerate() {
        let gain = replay.apply_move(coord, mover, &mut flips);
        assert!(gain > 0, "ply {} move {coord} is not legal", ply + 1);
        mover = mover.opponent();
    }
}

#[test]
fn line_never_exceeds_the_horizon() {
    let mut board = Board::new();
    let mut searcher = Searcher::with_seed(29);
    for depth in 1..=6 {
        let outcome = searcher.search(&mut board, Marker::X, depth);
        assert!(
            outcome.line.len() <= depth as usize,
            "depth {depth} line has {} moves",
            outcome.line.len()
        );
    }
}

#[test]
fn first_line_entry_matches_reported_best() {
    let mut board = Board::new();
    let mut searcher = Searcher::with_seed(2);
    let outcome = searcher.search(&mut board, Marker::X, 3);
    assert_eq!(outcome.best(), outcome.line.first().copied());
    assert!(!outcome.is_pass());
}
