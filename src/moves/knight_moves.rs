//! Knight threat geometry. Knights jump, so occupancy and the cut corners
//! between origin and destination are irrelevant; only the L-shaped offset
//! matters.

use crate::game_state::chess_types::Square;
use crate::game_state::square_table::{square_file, square_rank};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Whether a knight standing on `from` threatens `to`.
#[inline]
pub fn knight_threatens(from: Square, to: Square) -> bool {
    let d_file = (square_file(to) - square_file(from)).abs();
    let d_rank = (square_rank(to) - square_rank(from)).abs();
    (d_file == 1 && d_rank == 2) || (d_file == 2 && d_rank == 1)
}

#[cfg(test)]
mod tests {
    use super::knight_threatens;
    use crate::game_state::square_table::square_at;

    #[test]
    fn l_shaped_offsets_threaten() {
        let a5 = square_at(0, 4);
        assert!(knight_threatens(a5, square_at(2, 3))); // c4
        assert!(knight_threatens(a5, square_at(2, 5))); // c6
        assert!(knight_threatens(a5, square_at(1, 6))); // b7
        let e14 = square_at(4, 13);
        assert!(knight_threatens(e14, square_at(3, 11))); // d12
        assert!(knight_threatens(e14, square_at(6, 12))); // g13
    }

    #[test]
    fn other_offsets_do_not() {
        let a5 = square_at(0, 4);
        assert!(!knight_threatens(a5, square_at(2, 6))); // c7
        assert!(!knight_threatens(a5, square_at(3, 4))); // d5
        assert!(!knight_threatens(a5, a5));
    }
}
