//! Pawn geometry, in both of its modes.
//!
//! Threat mode answers "could this pawn capture on that square" — the two
//! forward-diagonal cells, independent of occupancy — and is what check
//! detection uses. Move mode covers the quiet advances: one step forward
//! onto an empty square, or two steps from the pawn's home square with both
//! squares empty.

use crate::game_state::chess_rules::is_pawn_home_square;
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::square_table::offset_square;

/// The two capture offsets of a pawn of `color`: one step forward-diagonal
/// to either side of its advance direction.
#[inline]
pub const fn pawn_capture_offsets(color: Color) -> [(i8, i8); 2] {
    match color {
        Color::Red => [(-1, 1), (1, 1)],
        Color::Yellow => [(-1, -1), (1, -1)],
        Color::Blue => [(1, -1), (1, 1)],
        Color::Green => [(-1, -1), (-1, 1)],
    }
}

/// Whether a pawn of `color` standing on `from` threatens `to`. Occupancy
/// plays no part; this is pure capture geometry.
#[inline]
pub fn pawn_threatens(color: Color, from: Square, to: Square) -> bool {
    pawn_capture_offsets(color)
        .into_iter()
        .any(|(d_file, d_rank)| offset_square(from, d_file, d_rank) == Some(to))
}

/// Whether a pawn of `color` may quietly advance from `from` to `to` on the
/// given board: one step straight forward onto an empty square, or two
/// steps from its home square with the passed and destination squares both
/// empty.
pub fn pawn_can_advance(state: &GameState, color: Color, from: Square, to: Square) -> bool {
    let (d_file, d_rank) = color.forward();
    let Some(one_step) = offset_square(from, d_file, d_rank) else {
        return false;
    };
    if state.piece_at(one_step).is_some() {
        return false;
    }
    if to == one_step {
        return true;
    }
    if !is_pawn_home_square(color, from) {
        return false;
    }
    match offset_square(one_step, d_file, d_rank) {
        Some(two_step) => to == two_step && state.piece_at(two_step).is_none(),
        None => false,
    }
}
