use std::fmt;

use crate::error::GameError;
use crate::types::{BOARD_SIZE, Cell, Move, NUM_SQUARES, Position, Side};

const CAPTURE_FILES: [i32; 2] = [-1, 1];

/// Pawn chess board: an 8x8 grid of cells, row 0 is B's edge and row 7 is A's edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; NUM_SQUARES],
}

/// What a move did to the board besides relocating the moving pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEffect {
    Advance,
    Capture,
    /// Diagonal move onto an empty square; the pawn on `captured` was removed.
    EnPassant { captured: Position },
}

impl Board {
    /// Creates the initial board:
    /// row 1 = B pawns, row 6 = A pawns.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for col in 0..BOARD_SIZE as u8 {
            board.set(Position::new(Side::B.home_row(), col), Cell::PawnB);
            board.set(Position::new(Side::A.home_row(), col), Cell::PawnA);
        }
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; NUM_SQUARES],
        }
    }

    /// Builds a board holding only the given pawns.
    /// Fails on a square off the board or listed more than once.
    pub fn try_from_pawns(a: &[Position], b: &[Position]) -> Result<Self, GameError> {
        let mut board = Self::empty();
        let placements = a
            .iter()
            .map(|&pos| (pos, Cell::PawnA))
            .chain(b.iter().map(|&pos| (pos, Cell::PawnB)));
        for (pos, pawn) in placements {
            match board.set(pos, pawn) {
                None => return Err(GameError::SquareOffBoard { pos }),
                Some(Cell::Empty) => {}
                Some(_) => return Err(GameError::SquareTaken { pos }),
            }
        }
        Ok(board)
    }

    /// Like [`Board::try_from_pawns`] for hand-written positions.
    ///
    /// # Panics
    ///
    /// Panics when the pawn lists are rejected by [`Board::try_from_pawns`].
    pub fn from_pawns(a: &[Position], b: &[Position]) -> Self {
        match Self::try_from_pawns(a, b) {
            Ok(board) => board,
            Err(err) => panic!("invalid pawn layout: {err}"),
        }
    }

    /// Cell at `pos`, or `None` when `pos` is off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        pos.index().map(|idx| self.cells[idx])
    }

    /// Stores `cell` at `pos` and returns the previous content.
    /// Off-board positions are left alone and yield `None`.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Option<Cell> {
        let idx = pos.index()?;
        Some(std::mem::replace(&mut self.cells[idx], cell))
    }

    pub fn count(&self, side: Side) -> u8 {
        let pawn = side.pawn();
        self.cells.iter().filter(|&&cell| cell == pawn).count() as u8
    }

    pub fn total_pawns(&self) -> u8 {
        self.count(Side::A) + self.count(Side::B)
    }

    /// Squares holding pawns of `side`, in row-major order.
    pub fn pawns(&self, side: Side) -> impl Iterator<Item = Position> + '_ {
        let pawn = side.pawn();
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &cell)| cell == pawn)
            .map(|(idx, _)| Position::new((idx / BOARD_SIZE) as u8, (idx % BOARD_SIZE) as u8))
    }

    /// Returns every legal move for `side`.
    ///
    /// Order is row-major over source squares; for each pawn: single step,
    /// double step, then left and right diagonals (capture before en passant).
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in self.pawns(side) {
            self.collect_pawn_moves(from, side, &mut moves);
        }
        moves
    }

    /// Legal moves of the pawn standing on `from`. Empty when it is not a pawn of `side`.
    pub fn moves_from(&self, side: Side, from: Position) -> Vec<Move> {
        let mut moves = Vec::new();
        if self.get(from) == Some(side.pawn()) {
            self.collect_pawn_moves(from, side, &mut moves);
        }
        moves
    }

    pub fn has_legal_moves(&self, side: Side) -> bool {
        let mut moves = Vec::new();
        self.pawns(side).any(|from| {
            self.collect_pawn_moves(from, side, &mut moves);
            !moves.is_empty()
        })
    }

    /// Moves one pawn and removes whatever it captured.
    ///
    /// Does not check legality: callers pass moves from [`Board::legal_moves`]
    /// for the same side.
    pub fn apply(&mut self, mv: Move, side: Side) -> MoveEffect {
        let target = self.cell(mv.to);
        let effect = if target.is_empty() && mv.is_diagonal() {
            let captured = Position::new(mv.from.row, mv.to.col);
            self.set(captured, Cell::Empty);
            MoveEffect::EnPassant { captured }
        } else if target == side.opponent().pawn() {
            MoveEffect::Capture
        } else {
            MoveEffect::Advance
        };

        self.set(mv.to, self.cell(mv.from));
        self.set(mv.from, Cell::Empty);

        effect
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=A, 2=B.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut out = [0u8; NUM_SQUARES];
        for (slot, cell) in out.iter_mut().zip(self.cells.iter()) {
            *slot = cell.code();
        }
        out
    }

    // Off-board squares read as empty.
    fn cell(&self, pos: Position) -> Cell {
        self.get(pos).unwrap_or_default()
    }

    fn collect_pawn_moves(&self, from: Position, side: Side, moves: &mut Vec<Move>) {
        let forward = side.forward();
        let enemy = side.opponent().pawn();

        // A pawn on the far edge has nowhere left to go.
        let Some(ahead) = from.offset(forward, 0) else {
            return;
        };

        if self.cell(ahead).is_empty() {
            moves.push(Move::new(from, ahead));
            if from.row == side.home_row()
                && let Some(two_ahead) = from.offset(2 * forward, 0)
                && self.cell(two_ahead).is_empty()
            {
                moves.push(Move::new(from, two_ahead));
            }
        }

        for dc in CAPTURE_FILES {
            let Some(diagonal) = from.offset(forward, dc) else {
                continue;
            };
            let target = self.cell(diagonal);
            if target == enemy {
                moves.push(Move::new(from, diagonal));
            }
            if from.row == side.en_passant_row()
                && target.is_empty()
                && from.offset(0, dc).is_some_and(|beside| self.cell(beside) == enemy)
            {
                moves.push(Move::new(from, diagonal));
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
