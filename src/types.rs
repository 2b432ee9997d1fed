use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// One of the two players. `A` (green) moves toward row 0, `B` (blue) toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Row delta of a single forward step.
    pub fn forward(self) -> i32 {
        match self {
            Side::A => -1,
            Side::B => 1,
        }
    }

    /// Row the side's pawns start on; double steps are only allowed from here.
    pub fn home_row(self) -> u8 {
        match self {
            Side::A => 6,
            Side::B => 1,
        }
    }

    /// Row from which this side may capture en passant.
    pub fn en_passant_row(self) -> u8 {
        match self {
            Side::A => 3,
            Side::B => 4,
        }
    }

    pub fn pawn(self) -> Cell {
        match self {
            Side::A => Cell::PawnA,
            Side::B => Cell::PawnB,
        }
    }

    /// Display name used by hosts when announcing a winner.
    pub fn name(self) -> &'static str {
        match self {
            Side::A => "Green",
            Side::B => "Blue",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Content of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PawnA,
    PawnB,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// 0=empty, 1=A, 2=B.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::PawnA => 1,
            Cell::PawnB => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PawnA => 'P',
            Cell::PawnB => 'p',
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the square offset by `(dr, dc)`, or `None` when it leaves the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if in_bounds(row, col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Row-major index, or `None` when off the board.
    pub fn index(self) -> Option<usize> {
        self.is_on_board()
            .then(|| self.row as usize * BOARD_SIZE + self.col as usize)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A pawn move from one square to another. Capture and en passant are derived
/// from the board it is played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    pub fn is_diagonal(self) -> bool {
        self.from.row.abs_diff(self.to.row) == 1 && self.from.col.abs_diff(self.to.col) == 1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Per-side capture counters. Only ordinary captures are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Score {
    pub a: u32,
    pub b: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::A => self.a,
            Side::B => self.b,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::A => self.a += 1,
            Side::B => self.b += 1,
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Row-major cells, 0=empty, 1=A, 2=B.
    pub board: Vec<u8>,
    pub side_to_move: Side,
    pub score: Score,
    pub pawns_a: u8,
    pub pawns_b: u8,
    pub is_game_over: bool,
    pub winner: Option<Side>,
    /// Contract:
    /// - `None` right after creation or reset.
    /// - Otherwise the most recently applied move, for either side.
    pub last_move: Option<Move>,
}

pub(crate) fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
