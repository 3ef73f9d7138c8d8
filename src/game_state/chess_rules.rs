//! Canonical rule constants for the four-player game.
//!
//! Starting layout, castling geometry, pawn home squares, and promotion
//! edges. Everything here is static data; the rules themselves live in
//! `move_generation`.

use crate::game_state::chess_types::{
    Board, CastlingRights, Color, Piece, PieceKind, Square, CASTLE_BLUE_KINGSIDE,
    CASTLE_BLUE_QUEENSIDE, CASTLE_GREEN_KINGSIDE, CASTLE_GREEN_QUEENSIDE, CASTLE_RED_KINGSIDE,
    CASTLE_RED_QUEENSIDE, CASTLE_YELLOW_KINGSIDE, CASTLE_YELLOW_QUEENSIDE,
};
use crate::game_state::square_table::{
    offset_square, square_at, square_file, square_rank, SQUARE_COUNT,
};

/// One castling option: the king's move plus the rook relocation it drags
/// along. Kingside is the rook three squares from the king, queenside the
/// rook four squares away, for every army.
#[derive(Debug, Clone, Copy)]
pub struct CastlingMove {
    pub flag: CastlingRights,
    pub color: Color,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

/// The eight castling options, one kingside and one queenside per color.
pub const CASTLING_MOVES: [CastlingMove; 8] = [
    CastlingMove {
        flag: CASTLE_RED_KINGSIDE,
        color: Color::Red,
        king_from: square_at(7, 0),
        king_to: square_at(9, 0),
        rook_from: square_at(10, 0),
        rook_to: square_at(8, 0),
    },
    CastlingMove {
        flag: CASTLE_RED_QUEENSIDE,
        color: Color::Red,
        king_from: square_at(7, 0),
        king_to: square_at(5, 0),
        rook_from: square_at(3, 0),
        rook_to: square_at(6, 0),
    },
    CastlingMove {
        flag: CASTLE_BLUE_KINGSIDE,
        color: Color::Blue,
        king_from: square_at(0, 7),
        king_to: square_at(0, 9),
        rook_from: square_at(0, 10),
        rook_to: square_at(0, 8),
    },
    CastlingMove {
        flag: CASTLE_BLUE_QUEENSIDE,
        color: Color::Blue,
        king_from: square_at(0, 7),
        king_to: square_at(0, 5),
        rook_from: square_at(0, 3),
        rook_to: square_at(0, 6),
    },
    CastlingMove {
        flag: CASTLE_YELLOW_KINGSIDE,
        color: Color::Yellow,
        king_from: square_at(6, 13),
        king_to: square_at(4, 13),
        rook_from: square_at(3, 13),
        rook_to: square_at(5, 13),
    },
    CastlingMove {
        flag: CASTLE_YELLOW_QUEENSIDE,
        color: Color::Yellow,
        king_from: square_at(6, 13),
        king_to: square_at(8, 13),
        rook_from: square_at(10, 13),
        rook_to: square_at(7, 13),
    },
    CastlingMove {
        flag: CASTLE_GREEN_KINGSIDE,
        color: Color::Green,
        king_from: square_at(13, 6),
        king_to: square_at(13, 4),
        rook_from: square_at(13, 3),
        rook_to: square_at(13, 5),
    },
    CastlingMove {
        flag: CASTLE_GREEN_QUEENSIDE,
        color: Color::Green,
        king_from: square_at(13, 6),
        king_to: square_at(13, 8),
        rook_from: square_at(13, 10),
        rook_to: square_at(13, 7),
    },
];

/// Both castling flags of one color.
#[inline]
pub const fn castling_flags_for(color: Color) -> CastlingRights {
    match color {
        Color::Red => CASTLE_RED_KINGSIDE | CASTLE_RED_QUEENSIDE,
        Color::Blue => CASTLE_BLUE_KINGSIDE | CASTLE_BLUE_QUEENSIDE,
        Color::Yellow => CASTLE_YELLOW_KINGSIDE | CASTLE_YELLOW_QUEENSIDE,
        Color::Green => CASTLE_GREEN_KINGSIDE | CASTLE_GREEN_QUEENSIDE,
    }
}

// Back-rank piece order walking away from the first corner of each army's
// home edge. Red and Blue share one orientation, Yellow and Green mirror it
// so every king/queen pair lines up across the board.
const RED_BLUE_BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

const YELLOW_GREEN_BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The standard four-player starting position: each army's back rank and
/// pawn rank along its own edge of the cross, interior empty.
pub fn starting_board() -> Board {
    let mut board: Board = [None; SQUARE_COUNT];

    for (lane, (red_kind, yellow_kind)) in RED_BLUE_BACK_RANK
        .iter()
        .zip(YELLOW_GREEN_BACK_RANK.iter())
        .enumerate()
    {
        let step = lane as i8 + 3;

        // Red along rows 1-2, Yellow along rows 14-13.
        place(&mut board, step, 0, Color::Red, *red_kind);
        place(&mut board, step, 1, Color::Red, PieceKind::Pawn);
        place(&mut board, step, 13, Color::Yellow, *yellow_kind);
        place(&mut board, step, 12, Color::Yellow, PieceKind::Pawn);

        // Blue along files a-b, Green along files n-m.
        place(&mut board, 0, step, Color::Blue, *red_kind);
        place(&mut board, 1, step, Color::Blue, PieceKind::Pawn);
        place(&mut board, 13, step, Color::Green, *yellow_kind);
        place(&mut board, 12, step, Color::Green, PieceKind::Pawn);
    }

    board
}

fn place(board: &mut Board, file: i8, rank: i8, color: Color, kind: PieceKind) {
    board[square_at(file, rank) as usize] = Some(Piece { color, kind });
}

/// Whether `square` is one of `color`'s pawn starting squares (the
/// double-push rule only applies from there).
#[inline]
pub fn is_pawn_home_square(color: Color, square: Square) -> bool {
    let file = square_file(square);
    let rank = square_rank(square);
    match color {
        Color::Red => rank == 1 && (3..=10).contains(&file),
        Color::Yellow => rank == 12 && (3..=10).contains(&file),
        Color::Blue => file == 1 && (3..=10).contains(&rank),
        Color::Green => file == 12 && (3..=10).contains(&rank),
    }
}

/// Whether a pawn of `color` promotes on `square`: the far edge of its lane,
/// i.e. the square has no further forward step on the cross.
#[inline]
pub fn is_promotion_square(color: Color, square: Square) -> bool {
    let (d_file, d_rank) = color.forward();
    offset_square(square, d_file, d_rank).is_none()
}

#[cfg(test)]
mod tests {
    use super::{is_pawn_home_square, is_promotion_square, starting_board, CASTLING_MOVES};
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::square_table::{square_at, SQUARE_COUNT};

    #[test]
    fn starting_board_places_kings_on_documented_squares() {
        let board = starting_board();
        let expectations = [
            (square_at(7, 0), Color::Red),     // h1
            (square_at(0, 7), Color::Blue),    // a8
            (square_at(6, 13), Color::Yellow), // g14
            (square_at(13, 6), Color::Green),  // n7
        ];
        for (square, color) in expectations {
            let piece = board[square as usize].expect("king square should be occupied");
            assert_eq!(piece.kind, PieceKind::King);
            assert_eq!(piece.color, color);
        }
    }

    #[test]
    fn starting_board_has_sixteen_pieces_per_army() {
        let board = starting_board();
        for color in Color::ALL {
            let count = board
                .iter()
                .flatten()
                .filter(|piece| piece.color == color)
                .count();
            assert_eq!(count, 16);
        }
        let empty = board.iter().filter(|cell| cell.is_none()).count();
        assert_eq!(empty, SQUARE_COUNT - 64);
    }

    #[test]
    fn castling_table_matches_each_army_home_edge() {
        for entry in CASTLING_MOVES {
            let board = starting_board();
            let king = board[entry.king_from as usize].expect("king origin occupied");
            assert_eq!(king.kind, PieceKind::King);
            assert_eq!(king.color, entry.color);
            let rook = board[entry.rook_from as usize].expect("rook origin occupied");
            assert_eq!(rook.kind, PieceKind::Rook);
            assert_eq!(rook.color, entry.color);
        }
    }

    #[test]
    fn promotion_edge_follows_each_lane() {
        // Center lanes run the full fourteen ranks.
        assert!(is_promotion_square(Color::Red, square_at(4, 13)));
        assert!(!is_promotion_square(Color::Red, square_at(4, 10)));
        // Side lanes end at the corner cuts.
        assert!(is_promotion_square(Color::Red, square_at(0, 10)));
        assert!(is_promotion_square(Color::Blue, square_at(10, 0)));
        assert!(is_promotion_square(Color::Green, square_at(0, 4)));
        assert!(is_promotion_square(Color::Yellow, square_at(12, 3)));
    }

    #[test]
    fn pawn_home_squares_line_the_second_row_of_each_edge() {
        assert!(is_pawn_home_square(Color::Red, square_at(3, 1)));
        assert!(is_pawn_home_square(Color::Blue, square_at(1, 10)));
        assert!(is_pawn_home_square(Color::Yellow, square_at(10, 12)));
        assert!(is_pawn_home_square(Color::Green, square_at(12, 3)));
        assert!(!is_pawn_home_square(Color::Red, square_at(3, 2)));
    }
}
