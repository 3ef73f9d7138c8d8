//! Check detection and square-attack queries.
//!
//! Everything here runs at full board fidelity against whatever state it is
//! handed — including speculative post-candidate states — because move
//! legality depends on it.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::square_table::SQUARE_COUNT;
use crate::moves::bishop_moves::bishop_threatens;
use crate::moves::king_moves::king_threatens;
use crate::moves::knight_moves::knight_threatens;
use crate::moves::pawn_moves::pawn_threatens;
use crate::moves::queen_moves::queen_threatens;
use crate::moves::rook_moves::rook_threatens;

/// The square holding `color`'s king, if that king is still on the board.
pub fn king_square(state: &GameState, color: Color) -> Option<Square> {
    (0..SQUARE_COUNT as u8).find(|&square| {
        matches!(
            state.piece_at(square),
            Some(piece) if piece.color == color && piece.kind == PieceKind::King
        )
    })
}

/// Whether any piece of `attacker_color` threatens `square`.
pub fn is_square_attacked(state: &GameState, square: Square, attacker_color: Color) -> bool {
    (0..SQUARE_COUNT as u8).any(|from| match state.piece_at(from) {
        Some(piece) if piece.color == attacker_color => {
            piece_threatens(state, piece.kind, attacker_color, from, square)
        }
        _ => false,
    })
}

/// Whether any army other than `defender_color`'s threatens `square`.
pub fn is_square_attacked_by_any(state: &GameState, square: Square, defender_color: Color) -> bool {
    Color::ALL
        .into_iter()
        .filter(|&color| color != defender_color)
        .any(|color| is_square_attacked(state, square, color))
}

/// Whether `color`'s king is attacked by any opposing army. A board with no
/// king for `color` reports no check.
pub fn is_king_in_check(state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(state, color) else {
        return false;
    };
    is_square_attacked_by_any(state, king_sq, color)
}

/// Every piece of `attacker_color` that threatens `square`, with its kind.
pub fn attackers_to_square(
    state: &GameState,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    (0..SQUARE_COUNT as u8)
        .filter_map(|from| match state.piece_at(from) {
            Some(piece)
                if piece.color == attacker_color
                    && piece_threatens(state, piece.kind, attacker_color, from, square) =>
            {
                Some((from, piece.kind))
            }
            _ => None,
        })
        .collect()
}

#[inline]
fn piece_threatens(
    state: &GameState,
    kind: PieceKind,
    color: Color,
    from: Square,
    to: Square,
) -> bool {
    match kind {
        PieceKind::Pawn => pawn_threatens(color, from, to),
        PieceKind::Knight => knight_threatens(from, to),
        PieceKind::Bishop => bishop_threatens(state, from, to),
        PieceKind::Rook => rook_threatens(state, from, to),
        PieceKind::Queen => queen_threatens(state, from, to),
        PieceKind::King => king_threatens(from, to),
    }
}

#[cfg(test)]
mod tests {
    use super::{attackers_to_square, is_king_in_check, is_square_attacked, king_square};
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::game_state::square_table::square_at;

    #[test]
    fn no_color_starts_in_check() {
        let state = GameState::new_game();
        for color in Color::ALL {
            assert!(!is_king_in_check(&state, color));
        }
    }

    #[test]
    fn kings_are_found_on_their_starting_squares() {
        let state = GameState::new_game();
        assert_eq!(king_square(&state, Color::Red), Some(square_at(7, 0)));
        assert_eq!(king_square(&state, Color::Blue), Some(square_at(0, 7)));
        assert_eq!(king_square(&state, Color::Yellow), Some(square_at(6, 13)));
        assert_eq!(king_square(&state, Color::Green), Some(square_at(13, 6)));
    }

    #[test]
    fn a_lone_rook_checks_across_the_board() {
        let mut state = GameState::new_empty();
        let h1 = square_at(7, 0);
        let h11 = square_at(7, 10);
        state.board[h1 as usize] = Some(Piece {
            color: Color::Red,
            kind: PieceKind::King,
        });
        state.board[h11 as usize] = Some(Piece {
            color: Color::Yellow,
            kind: PieceKind::Rook,
        });
        assert!(is_king_in_check(&state, Color::Red));
        assert_eq!(
            attackers_to_square(&state, h1, Color::Yellow),
            vec![(h11, PieceKind::Rook)]
        );

        // A blocker on the file lifts the check.
        state.board[square_at(7, 5) as usize] = Some(Piece {
            color: Color::Blue,
            kind: PieceKind::Pawn,
        });
        assert!(!is_king_in_check(&state, Color::Red));
    }

    #[test]
    fn pawn_threats_use_capture_geometry_only() {
        let mut state = GameState::new_empty();
        let g2 = square_at(6, 1);
        state.board[g2 as usize] = Some(Piece {
            color: Color::Red,
            kind: PieceKind::Pawn,
        });
        // The forward-diagonal cells are attacked; the straight-ahead cell
        // is not.
        assert!(is_square_attacked(&state, square_at(5, 2), Color::Red));
        assert!(is_square_attacked(&state, square_at(7, 2), Color::Red));
        assert!(!is_square_attacked(&state, square_at(6, 2), Color::Red));
    }
}
