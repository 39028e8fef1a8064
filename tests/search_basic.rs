use flipbot::board::grid::{Board, Cell, Coord, FlipList, Marker};
use flipbot::search::eval::VALUE_FLOOR;
use flipbot::Searcher;

#[test]
fn depth_one_value_is_best_immediate_gain() {
    let mut board = Board::new();
    let mut searcher = Searcher::with_seed(7);
    let outcome = searcher.search(&mut board, Marker::X, 1);

    // Brute-force the maximum immediate gain for comparison.
    let mut best = 0;
    let mut flips = FlipList::new();
    for row in 0..8 {
        for col in 0..8 {
            let coord = Coord::new(row, col);
            if board.cell(coord) != Cell::Empty {
                continue;
            }
            let mut probe = board.clone();
            best = best.max(probe.apply_move(coord, Marker::X, &mut flips));
        }
    }

    assert_eq!(outcome.value, best);
    assert_eq!(outcome.value, 2, "opening gains are all 1 + 1");
    assert_eq!(outcome.line.len(), 1);
    assert_eq!(outcome.nodes, 4, "opening has four legal X moves");
}

#[test]
fn depth_one_picks_one_of_the_four_opening_moves() {
    let legal = [
        Coord::new(2, 4),
        Coord::new(3, 5),
        Coord::new(4, 2),
        Coord::new(5, 3),
    ];
    let mut board = Board::new();
    let mut searcher = Searcher::with_seed(0);
    let outcome = searcher.search(&mut board, Marker::X, 1);
    let best = outcome.best().expect("opening has legal moves");
    assert!(legal.contains(&best), "unexpected move {best}");
}

#[test]
fn search_restores_the_board_it_mutates() {
    let mut board = Board::new();
    let before = board.clone();
    let mut searcher = Searcher::with_seed(3);
    for depth in 1..=4 {
        searcher.search(&mut board, Marker::X, depth);
        assert_eq!(board, before, "board not restored after depth {depth}");
    }
}

#[test]
fn values_stay_above_the_floor() {
    let mut board = Board::new();
    let mut searcher = Searcher::with_seed(11);
    for depth in 1..=5 {
        let outcome = searcher.search(&mut board, Marker::X, depth);
        assert!(
            outcome.value > VALUE_FLOOR,
            "depth {depth} value {} at the floor",
            outcome.value
        );
    }
}

#[test]
fn deeper_search_returns_a_legal_first_move() {
    let mut board = Board::new();
    let mut searcher = Searcher::with_seed(5);
    let outcome = searcher.search(&mut board, Marker::X, 4);
    let best = outcome.best().expect("opening has legal moves");

    let mut flips = FlipList::new();
    let gain = board.apply_move(best, Marker::X, &mut flips);
    assert!(gain > 0, "search chose illegal move {best}");
}

#[test]
fn deeper_search_examines_more_nodes() {
    let mut board = Board::new();
    let mut searcher = Searcher::with_seed(9);
    let shallow = searcher.search(&mut board, Marker::X, 1).nodes;
    let deep = searcher.search(&mut board, Marker::X, 4).nodes;
    assert!(deep > shallow, "expected node growth: {shallow} vs {deep}");
}
