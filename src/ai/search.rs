use log::debug;
use web_time::{Duration, Instant};

use crate::ai::eval::evaluate;
use crate::board::Board;
use crate::types::{Move, Side};

pub const DEFAULT_DEPTH: u8 = 3;
const MIN_SCORE: i32 = i32::MIN;
const MAX_SCORE: i32 = i32::MAX;

/// Counters from the most recent search. `elapsed` is measured, never enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeResult {
    score: i32,
    best_move: Option<Move>,
}

impl NodeResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Depth-limited minimax with alpha-beta pruning, always scoring from `ai_side`.
pub struct Searcher {
    ai_side: Side,
    max_depth: u8,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(ai_side: Side, max_depth: u8) -> Self {
        Self {
            ai_side,
            max_depth,
            stats: SearchStats::default(),
        }
    }

    /// Searches the best move for `ai_side`, who must be the side to move.
    /// Returns `None` only when `ai_side` has no legal move.
    pub fn search(&mut self, board: &Board) -> Option<Move> {
        self.search_scored(board).0
    }

    /// Like [`Searcher::search`], also returning the minimax value of the root.
    pub fn search_scored(&mut self, board: &Board) -> (Option<Move>, i32) {
        self.stats = SearchStats::default();
        let start_time = Instant::now();

        // Depth 0 at the root would return a bare evaluation and no move.
        let depth = self.max_depth.max(1);
        let result = self.minimax(board, depth, MIN_SCORE, MAX_SCORE, true);

        self.stats.elapsed = start_time.elapsed();
        debug!(
            "search side={} depth={} best={:?} score={} nodes={} cutoffs={} elapsed={:?}",
            self.ai_side,
            depth,
            result.best_move,
            result.score,
            self.stats.nodes,
            self.stats.cutoffs,
            self.stats.elapsed,
        );

        (result.best_move, result.score)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> NodeResult {
        self.stats.nodes += 1;

        let side = if maximizing {
            self.ai_side
        } else {
            self.ai_side.opponent()
        };
        let moves = board.legal_moves(side);
        if depth == 0 || moves.is_empty() {
            return NodeResult::leaf(evaluate(board, self.ai_side));
        }

        let mut alpha = alpha;
        let mut beta = beta;
        let mut best = NodeResult::leaf(if maximizing { MIN_SCORE } else { MAX_SCORE });

        for mv in moves {
            let mut next = *board;
            next.apply(mv, side);
            let score = self.minimax(&next, depth - 1, alpha, beta, !maximizing).score;

            if maximizing {
                if score > best.score {
                    best = NodeResult {
                        score,
                        best_move: Some(mv),
                    };
                }
                alpha = alpha.max(score);
            } else {
                if score < best.score {
                    best = NodeResult {
                        score,
                        best_move: Some(mv),
                    };
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// Picks a move for `ai_side`, which is assumed to be the side to move.
pub fn choose_move(board: &Board, ai_side: Side, depth: u8) -> Option<Move> {
    Searcher::new(ai_side, depth).search(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    /// Plain minimax without pruning, used to check alpha-beta keeps the same value.
    fn full_minimax(board: &Board, depth: u8, ai_side: Side, maximizing: bool) -> i32 {
        let side = if maximizing { ai_side } else { ai_side.opponent() };
        let moves = board.legal_moves(side);
        if depth == 0 || moves.is_empty() {
            return evaluate(board, ai_side);
        }
        let scores = moves.into_iter().map(|mv| {
            let mut next = *board;
            next.apply(mv, side);
            full_minimax(&next, depth - 1, ai_side, !maximizing)
        });
        if maximizing {
            scores.max().unwrap()
        } else {
            scores.min().unwrap()
        }
    }

    #[test]
    fn depth_one_prefers_capture_over_quiet_move() {
        let board = Board::from_pawns(&[pos(4, 4)], &[pos(3, 3)]);

        let mv = choose_move(&board, Side::B, 1).unwrap();

        assert_eq!(mv, Move::new(pos(3, 3), pos(4, 4)));
    }

    #[test]
    fn returns_none_without_legal_moves() {
        let board = Board::from_pawns(&[pos(6, 0)], &[pos(7, 3)]);

        assert_eq!(choose_move(&board, Side::B, 3), None);
    }

    #[test]
    fn depth_zero_still_selects_a_move() {
        let board = Board::new();

        let mv = choose_move(&board, Side::A, 0).unwrap();

        assert!(board.legal_moves(Side::A).contains(&mv));
    }

    #[test]
    fn ties_break_to_first_generated_move() {
        let board = Board::new();

        // Every double step scores +2; the first one generated wins.
        assert_eq!(
            choose_move(&board, Side::B, 1),
            Some(Move::new(pos(1, 0), pos(3, 0)))
        );
    }

    #[test]
    fn search_is_deterministic() {
        let board = Board::from_pawns(
            &[pos(6, 1), pos(5, 3), pos(4, 6)],
            &[pos(1, 2), pos(2, 4), pos(3, 7)],
        );

        let first = choose_move(&board, Side::A, 3);
        let second = choose_move(&board, Side::A, 3);

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn alpha_beta_matches_full_minimax_value() {
        let boards = [
            Board::new(),
            Board::from_pawns(
                &[pos(6, 0), pos(4, 3), pos(3, 5)],
                &[pos(1, 1), pos(3, 4), pos(2, 6)],
            ),
            Board::from_pawns(&[pos(5, 2), pos(6, 6)], &[pos(4, 1), pos(4, 3), pos(1, 7)]),
        ];

        for board in boards {
            for side in [Side::A, Side::B] {
                let mut searcher = Searcher::new(side, 3);
                let (_, score) = searcher.search_scored(&board);
                assert_eq!(score, full_minimax(&board, 3, side, true), "\n{board}");
            }
        }
    }

    #[test]
    fn pruning_skips_nodes() {
        let board = Board::new();
        let mut searcher = Searcher::new(Side::A, 3);

        searcher.search(&board);
        let stats = searcher.stats();

        assert!(stats.cutoffs > 0);
        // Well below the unpruned depth-3 tree.
        assert!(stats.nodes < 1 + 16 + 256 + 4096);
    }

    #[test]
    fn deeper_search_avoids_stepping_into_capture() {
        // The double step lands diagonally in front of A's pawn.
        let board = Board::from_pawns(&[pos(4, 3)], &[pos(1, 2), pos(7, 7)]);

        assert_eq!(
            choose_move(&board, Side::B, 1),
            Some(Move::new(pos(1, 2), pos(3, 2)))
        );
        assert_eq!(
            choose_move(&board, Side::B, 2),
            Some(Move::new(pos(1, 2), pos(2, 2)))
        );
    }
}
