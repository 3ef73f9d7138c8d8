//! Bishop threat geometry.
//!
//! A bishop threatens a square when the two squares lie on a common
//! diagonal and every square strictly between them is empty. A diagonal
//! that leaves the cross through a cut corner is blocked there, even when
//! it would re-enter the board further on.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::game_state::square_table::{square_file, square_rank};
use crate::moves::rook_moves::trace_threat;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Whether a bishop standing on `from` threatens `to` on the given board.
pub fn bishop_threatens(state: &GameState, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    let d_file = square_file(to) - square_file(from);
    let d_rank = square_rank(to) - square_rank(from);
    if d_file.abs() != d_rank.abs() {
        return false;
    }
    trace_threat(state, from, to, d_file.signum(), d_rank.signum())
}

#[cfg(test)]
mod tests {
    use super::bishop_threatens;
    use crate::game_state::game_state::GameState;
    use crate::game_state::square_table::square_at;

    #[test]
    fn long_diagonals_cross_the_open_middle() {
        let state = GameState::new_game();
        // b4 to k13 runs corner to corner through empty interior.
        assert!(bishop_threatens(&state, square_at(1, 3), square_at(10, 12)));
        // m11 to d2 likewise.
        assert!(bishop_threatens(&state, square_at(12, 10), square_at(3, 1)));
        // d13 to m4.
        assert!(bishop_threatens(&state, square_at(3, 12), square_at(12, 3)));
    }

    #[test]
    fn corner_cuts_block_diagonals() {
        let state = GameState::new_game();
        // b4 toward d2 would pass through the missing c3.
        assert!(!bishop_threatens(&state, square_at(1, 3), square_at(3, 1)));
        // k2 toward m4 would pass through the missing l3.
        assert!(!bishop_threatens(&state, square_at(10, 1), square_at(12, 3)));
        // m11 toward k13 would pass through the missing l12.
        assert!(!bishop_threatens(&state, square_at(12, 10), square_at(10, 12)));
    }

    #[test]
    fn adjacent_diagonal_needs_no_empty_between() {
        let state = GameState::new_game();
        // k2 takes j1 in one step even though j1 is occupied.
        assert!(bishop_threatens(&state, square_at(10, 1), square_at(9, 0)));
    }

    #[test]
    fn off_diagonal_squares_are_never_threatened() {
        let state = GameState::new_game();
        assert!(!bishop_threatens(&state, square_at(10, 1), square_at(1, 3)));
        assert!(!bishop_threatens(&state, square_at(1, 3), square_at(2, 3)));
    }
}
