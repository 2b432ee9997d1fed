use log::{debug, trace};

use crate::ai::search::choose_move;
use crate::board::{Board, MoveEffect};
use crate::config::SearchConfig;
use crate::error::GameError;
use crate::types::{GameSnapshot, Move, Position, Score, Side};

/// Source of moves for a computer-controlled side.
pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, side: Side, depth: u8) -> Option<Move>;
}

/// Minimax with alpha-beta pruning; the default opponent.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlphaBetaSelector;

impl MoveSelector for AlphaBetaSelector {
    fn select_move(&self, board: &Board, side: Side, depth: u8) -> Option<Move> {
        choose_move(board, side, depth)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(&self, board: &Board, side: Side, _depth: u8) -> Option<Move> {
        board.legal_moves(side).first().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Terminal { winner: Side },
}

/// Outcome of one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub side: Side,
    pub effect: MoveEffect,
    pub next_side: Side,
    pub status: Status,
}

/// Applies `mv` for `side`, counting ordinary captures in `score`.
/// Returns the effect and the side to move next.
///
/// En passant captures are not counted.
pub fn execute(board: &mut Board, score: &mut Score, mv: Move, side: Side) -> (MoveEffect, Side) {
    let effect = board.apply(mv, side);
    if effect == MoveEffect::Capture {
        score.increment(side);
    }
    (effect, side.opponent())
}

/// A single game: board, side to move, capture score and result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Side,
    score: Score,
    status: Status,
    last_move: Option<Move>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            side_to_move: Side::A,
            score: Score::default(),
            status: Status::InProgress,
            last_move: None,
        }
    }

    /// Starts from an arbitrary position with zeroed scores. The game is
    /// already over when `side_to_move` has no legal move.
    pub fn from_position(board: Board, side_to_move: Side) -> Self {
        let status = if board.has_legal_moves(side_to_move) {
            Status::InProgress
        } else {
            Status::Terminal {
                winner: side_to_move.opponent(),
            }
        };
        Self {
            board,
            side_to_move,
            score: Score::default(),
            status,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.status, Status::Terminal { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            Status::InProgress => None,
            Status::Terminal { winner } => Some(winner),
        }
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves(self.side_to_move)
    }

    /// Legal moves of the side to move starting on `from`.
    pub fn moves_from(&self, from: Position) -> Vec<Move> {
        self.board.moves_from(self.side_to_move, from)
    }

    /// Plays `mv` for the side to move. Rejected moves leave the state untouched.
    pub fn try_move(&mut self, mv: Move) -> Result<MoveRecord, GameError> {
        if self.is_terminal() {
            trace!("rejected {mv}: game is over");
            return Err(GameError::GameOver);
        }

        let side = self.side_to_move;
        if !self.moves_from(mv.from).contains(&mv) {
            trace!("rejected {mv} for {side}: not legal");
            return Err(GameError::InvalidMove { mv });
        }

        let (effect, next_side) = execute(&mut self.board, &mut self.score, mv, side);
        self.side_to_move = next_side;
        self.last_move = Some(mv);
        debug!("{side} played {mv} ({effect:?})");

        if !self.board.has_legal_moves(next_side) {
            self.status = Status::Terminal { winner: side };
            debug!("{next_side} has no legal move, {side} wins");
        }

        Ok(MoveRecord {
            mv,
            side,
            effect,
            next_side,
            status: self.status,
        })
    }

    /// Runs the search for the side to move.
    pub fn ai_select_move(&self, config: &SearchConfig) -> Option<Move> {
        if self.is_terminal() {
            return None;
        }
        choose_move(&self.board, self.side_to_move, config.depth)
    }

    /// Lets `selector` play the side to move.
    ///
    /// Returns `Ok(None)` when the selector finds no move; the opponent is
    /// then declared the winner.
    pub fn play_ai_turn(
        &mut self,
        selector: &dyn MoveSelector,
        config: &SearchConfig,
    ) -> Result<Option<MoveRecord>, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        let side = self.side_to_move;
        match selector.select_move(&self.board, side, config.depth) {
            Some(mv) => self.try_move(mv).map(Some),
            None => {
                self.status = Status::Terminal {
                    winner: side.opponent(),
                };
                debug!("{side} found no move, {} wins", side.opponent());
                Ok(None)
            }
        }
    }

    /// Replaces this game with a fresh one; scores return to zero.
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }

    pub fn to_snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_array().to_vec(),
            side_to_move: self.side_to_move,
            score: self.score,
            pawns_a: self.board.count(Side::A),
            pawns_b: self.board.count(Side::B),
            is_game_over: self.is_terminal(),
            winner: self.winner(),
            last_move: self.last_move,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
