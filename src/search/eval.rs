use crate::board::grid::{Coord, BOARD_AREA, BOARD_SIZE};

/// Sentinel below any reachable net value. The weight sum over the whole
/// board is under 9 * BOARD_AREA, so no real line of play gets here.
pub const VALUE_FLOOR: i32 = -9 * BOARD_AREA as i32;

fn index_weight(i: u8) -> i32 {
    if i == 0 || i as usize == BOARD_SIZE - 1 {
        BOARD_SIZE as i32
    } else {
        1
    }
}

/// Positional weight of a cell: corners 64, non-corner edges 8, interior 1.
pub fn cell_weight(coord: Coord) -> i32 {
    index_weight(coord.row) * index_weight(coord.col)
}
