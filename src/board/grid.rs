use crate::search::eval::cell_weight;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const BOARD_SIZE: usize = 8;
pub const BOARD_AREA: u32 = (BOARD_SIZE * BOARD_SIZE) as u32;
/// Upper bound on cells flipped by a single move.
pub const MAX_FLIPS: usize = 4 * (BOARD_SIZE - 3);

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    pub fn opponent(self) -> Marker {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Marker::X => 0,
            Marker::O => 1,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Taken(Marker),
}

/// Who drives a player's moves. Consumed by the turn loop, not the search core.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlayMode {
    Human,
    Computer,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCoordError {
    #[error("expected row,col (comma-separated), e.g. 2,4")]
    Malformed,
    #[error("coordinates must be in range 0-{}", BOARD_SIZE - 1)]
    OutOfRange,
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (r, c) = s.trim().split_once(',').ok_or(ParseCoordError::Malformed)?;
        let row: u8 = r.trim().parse().map_err(|_| ParseCoordError::Malformed)?;
        let col: u8 = c.trim().parse().map_err(|_| ParseCoordError::Malformed)?;
        if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
            return Err(ParseCoordError::OutOfRange);
        }
        Ok(Coord { row, col })
    }
}

/// Cells changed by one move application, kept for the undo pass.
#[derive(Clone, Debug)]
pub struct FlipList {
    cells: [Coord; MAX_FLIPS],
    len: usize,
}

impl Default for FlipList {
    fn default() -> Self {
        Self {
            cells: [Coord { row: 0, col: 0 }; MAX_FLIPS],
            len: 0,
        }
    }
}

impl FlipList {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, coord: Coord) {
        // A violated bound means the capture walk is broken; the move we
        // would report could be wrong, so abort instead of truncating.
        assert!(self.len < MAX_FLIPS, "flip list overflow at {coord}");
        self.cells[self.len] = coord;
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells[..self.len].iter().copied()
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    counts: [u32; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening: X at (3,3)/(4,4), O at (3,4)/(4,3).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place(Coord::new(3, 3), Marker::X);
        board.place(Coord::new(4, 4), Marker::X);
        board.place(Coord::new(3, 4), Marker::O);
        board.place(Coord::new(4, 3), Marker::O);
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            counts: [0, 0],
        }
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.row as usize][coord.col as usize]
    }

    /// Drop a disc on an empty cell without capture mechanics. Fixture
    /// setup only; game play goes through `apply_move`.
    pub fn place(&mut self, coord: Coord, marker: Marker) {
        debug_assert_eq!(self.cell(coord), Cell::Empty);
        self.cells[coord.row as usize][coord.col as usize] = Cell::Taken(marker);
        self.counts[marker.index()] += 1;
    }

    pub fn count(&self, marker: Marker) -> u32 {
        self.counts[marker.index()]
    }

    pub fn occupied(&self) -> u32 {
        self.counts[0] + self.counts[1]
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == BOARD_AREA
    }

    /// Try a move for `marker` at `coord` (must be in bounds and empty).
    ///
    /// Walks all 8 directions; a direction captures when the walk crosses
    /// at least one opponent disc and ends on one of the mover's own discs
    /// without running off-board or hitting an empty cell. Returns the
    /// heuristic gain: weight of the placed cell plus weights of every
    /// captured cell. Zero captures means the move is illegal: gain 0 and
    /// the board is left untouched. On success the board is mutated in
    /// place and the flipped coords are recorded in `flips` for undo.
    pub fn apply_move(&mut self, coord: Coord, marker: Marker, flips: &mut FlipList) -> i32 {
        debug_assert_eq!(self.cell(coord), Cell::Empty);
        flips.clear();
        let own = Cell::Taken(marker);
        let mut gain: i32 = 0;

        for (drow, dcol) in DIRECTIONS {
            let mut line = [Coord { row: 0, col: 0 }; BOARD_SIZE - 1];
            let mut line_len = 0usize;
            let mut line_gain: i32 = 0;
            let mut row = coord.row as i8;
            let mut col = coord.col as i8;
            loop {
                row += drow;
                col += dcol;
                if !(0..BOARD_SIZE as i8).contains(&row) || !(0..BOARD_SIZE as i8).contains(&col) {
                    line_len = 0;
                    break;
                }
                let here = Coord::new(row as u8, col as u8);
                match self.cell(here) {
                    Cell::Empty => {
                        line_len = 0;
                        break;
                    }
                    c if c == own => break,
                    _ => {
                        line_gain += cell_weight(here);
                        assert!(line_len < BOARD_SIZE - 1, "capture walk ran past {here}");
                        line[line_len] = here;
                        line_len += 1;
                    }
                }
            }
            for &captured in &line[..line_len] {
                flips.push(captured);
            }
            gain += if line_len > 0 { line_gain } else { 0 };
        }

        if flips.is_empty() {
            return 0;
        }

        gain += cell_weight(coord);
        for flipped in flips.iter() {
            self.cells[flipped.row as usize][flipped.col as usize] = own;
        }
        self.cells[coord.row as usize][coord.col as usize] = own;
        self.counts[marker.index()] += flips.len() as u32 + 1;
        self.counts[marker.opponent().index()] -= flips.len() as u32;
        gain
    }

    /// Exact inverse of a successful `apply_move` with the same arguments.
    pub fn undo_move(&mut self, coord: Coord, marker: Marker, flips: &FlipList) {
        let opponent = marker.opponent();
        self.cells[coord.row as usize][coord.col as usize] = Cell::Empty;
        for flipped in flips.iter() {
            self.cells[flipped.row as usize][flipped.col as usize] = Cell::Taken(opponent);
        }
        self.counts[marker.index()] -= flips.len() as u32 + 1;
        self.counts[opponent.index()] += flips.len() as u32;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "       01234567")?;
        writeln!(f, "      +--------+")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "    {row} |")?;
            for cell in cells {
                let ch = match cell {
                    Cell::Empty => ' ',
                    Cell::Taken(m) => m.as_char(),
                };
                write!(f, "{ch}")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "      +--------+")
    }
}
