use crate::board::grid::{Board, Cell, Coord, FlipList, Marker, BOARD_SIZE};
use crate::search::chain::{ChainPool, NodeId};
use crate::search::eval::VALUE_FLOOR;
use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Deepest supported search horizon (skill levels 1..=10).
pub const MAX_PLY: u32 = 10;

#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// Net heuristic value of the chosen move; 0 means the player must pass.
    pub value: i32,
    /// Predicted continuation down to the horizon, alternating players,
    /// starting with the chosen move. Empty on a pass.
    pub line: Vec<Coord>,
    /// Legal moves examined during the search.
    pub nodes: u64,
}

impl SearchOutcome {
    pub fn best(&self) -> Option<Coord> {
        self.line.first().copied()
    }

    pub fn is_pass(&self) -> bool {
        self.line.is_empty()
    }
}

/// Depth-limited minimax with the difference-threshold prune, backtracking
/// board mutation, and a recycling pool for continuation chains. One
/// searcher per game; nothing here is shared across threads.
pub struct Searcher {
    pool: ChainPool,
    rng: SmallRng,
    nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self {
        Self {
            pool: ChainPool::new(),
            rng: SmallRng::from_entropy(),
            nodes: 0,
        }
    }
}

impl Searcher {
    /// Seeded tie-breaks for reproducible searches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            pool: ChainPool::new(),
            rng: SmallRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    /// Find the best move for `marker` searching `max_ply` plies deep.
    /// The board is mutated during the search and restored before return.
    pub fn search(&mut self, board: &mut Board, marker: Marker, max_ply: u32) -> SearchOutcome {
        self.nodes = 0;
        let max_ply = max_ply.clamp(1, MAX_PLY);
        let (value, chain) = self.best_move(board, marker, 1, max_ply, 0, 0);
        let line = self.pool.line(chain);
        self.pool.release(chain);
        SearchOutcome {
            value,
            line,
            nodes: self.nodes,
        }
    }

    /// Records ever drawn from the system allocator by the chain pool.
    pub fn pool_size(&self) -> usize {
        self.pool.node_count()
    }

    fn best_move(
        &mut self,
        board: &mut Board,
        marker: Marker,
        ply: u32,
        max_ply: u32,
        prev_move_val: i32,
        best_sibling: i32,
    ) -> (i32, Option<NodeId>) {
        let mut max_effect = VALUE_FLOOR;
        let mut best_heads: Vec<NodeId> = Vec::new();
        let mut flips = FlipList::new();
        let mut pruned = false;

        'scan: for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let coord = Coord::new(row, col);
                if board.cell(coord) != Cell::Empty {
                    continue;
                }
                let mut effect = board.apply_move(coord, marker, &mut flips);
                if flips.is_empty() {
                    continue;
                }
                self.nodes += 1;
                debug!("ply {ply}: {marker} placed at {coord}");

                let mut child_chain: Option<NodeId> = None;
                if ply < max_ply && !board.is_full() {
                    let (reply_value, reply_chain) =
                        self.best_move(board, marker.opponent(), ply + 1, max_ply, effect, max_effect);
                    effect -= reply_value;
                    child_chain = reply_chain;
                    // A value at the floor would mean legal replies were ignored.
                    assert!(effect > VALUE_FLOOR, "search value hit the floor at ply {ply}");
                }

                if effect > max_effect {
                    for head in best_heads.drain(..) {
                        self.pool.release(Some(head));
                    }
                    // Difference-threshold cutoff: the remaining siblings
                    // cannot change the parent's decision. The superseding
                    // move is still recorded below before the scan stops.
                    if ply > 1 && prev_move_val - effect < best_sibling {
                        debug!("prune at ply {ply}: {prev_move_val} - {effect} < {best_sibling}");
                        pruned = true;
                    }
                    max_effect = effect;
                }

                if effect == max_effect {
                    let head = self.pool.acquire(coord, child_chain);
                    best_heads.push(head);
                } else {
                    self.pool.release(child_chain);
                }

                board.undo_move(coord, marker, &flips);
                if pruned {
                    break 'scan;
                }
            }
        }

        if best_heads.is_empty() {
            debug!("ply {ply}: no move available for {marker}");
            return (0, None);
        }

        let chosen = self.rng.gen_range(0..best_heads.len());
        for (i, head) in best_heads.iter().enumerate() {
            if i != chosen {
                self.pool.release(Some(*head));
            }
        }
        let head = best_heads[chosen];
        debug!(
            "ply {ply}: {marker} @ {} => {max_effect} (choice {} of {})",
            self.pool.coord(head),
            chosen + 1,
            best_heads.len()
        );
        (max_effect, Some(head))
    }
}
