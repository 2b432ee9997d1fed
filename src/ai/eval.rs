use crate::board::Board;
use crate::types::Side;

/// Value of one pawn; always outweighs the largest advancement bonus (6).
pub const PAWN_VALUE: i32 = 10;

/// Static evaluation from `side`'s perspective: material plus how far each
/// pawn has advanced from its home row, minus the same for the opponent.
pub fn evaluate(board: &Board, side: Side) -> i32 {
    side_value(board, side) - side_value(board, side.opponent())
}

fn side_value(board: &Board, side: Side) -> i32 {
    board
        .pawns(side)
        .map(|pos| PAWN_VALUE + advancement(pos.row, side))
        .sum()
}

fn advancement(row: u8, side: Side) -> i32 {
    (row as i32 - side.home_row() as i32) * side.forward()
}
