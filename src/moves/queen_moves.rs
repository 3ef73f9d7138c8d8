//! Queen threat geometry: the union of rook and bishop rays.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::bishop_threatens;
use crate::moves::rook_moves::rook_threatens;

/// Whether a queen standing on `from` threatens `to` on the given board.
#[inline]
pub fn queen_threatens(state: &GameState, from: Square, to: Square) -> bool {
    rook_threatens(state, from, to) || bishop_threatens(state, from, to)
}
