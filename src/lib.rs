// Othello/Reversi engine: board model + pruned minimax search
pub mod board;
pub mod search;

// Re-exports kept minimal for the binary and tests
pub use board::grid::{Board, Coord, Marker};
pub use search::engine::{SearchOutcome, Searcher};
