//! Rook threat geometry.
//!
//! A rook threatens a square when both share a file or a rank and every
//! square strictly between them is empty. Rays are walked step by step on
//! the sparse cross grid, so the cut corners block a ray exactly like the
//! outer edge does.

use crate::game_state::game_state::GameState;
use crate::game_state::chess_types::Square;
use crate::game_state::square_table::{offset_square, square_file, square_rank};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Whether a rook standing on `from` threatens `to` on the given board.
pub fn rook_threatens(state: &GameState, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    let d_file = square_file(to) - square_file(from);
    let d_rank = square_rank(to) - square_rank(from);
    if d_file != 0 && d_rank != 0 {
        return false;
    }
    trace_threat(state, from, to, d_file.signum(), d_rank.signum())
}

/// Walk one step direction from `from`; the ray reaches `to` only if every
/// intermediate square exists and is empty. The destination itself may be
/// occupied (that is the capture case).
pub(crate) fn trace_threat(
    state: &GameState,
    from: Square,
    to: Square,
    step_file: i8,
    step_rank: i8,
) -> bool {
    let mut current = from;
    while let Some(next) = offset_square(current, step_file, step_rank) {
        if next == to {
            return true;
        }
        if state.piece_at(next).is_some() {
            return false;
        }
        current = next;
    }
    false
}
