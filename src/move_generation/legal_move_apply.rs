//! Candidate move application.
//!
//! `apply_move` writes a packed move description to a clone of the given
//! state and returns the clone: piece relocation, promotion, en passant
//! capture, castling rook relocation, rights bookkeeping, the en passant
//! expiry step, clocks, and turn rotation. The caller decides whether the
//! clone becomes the live state (commit) or is dropped (rollback), so no
//! partial mutation is ever observable.

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::{castling_flags_for, CASTLING_MOVES};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::square_table::offset_square;
use crate::moves::move_descriptions::{
    move_from, move_is_capture, move_promotion_piece, move_to, pack_move_description,
    FLAG_CASTLING, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
};
use crate::utils::algebraic::square_to_algebraic;

/// Apply a packed move to a copy of `state` and return the copy.
pub fn apply_move(state: &GameState, move_description: u64) -> Result<GameState, ChessError> {
    let from = move_from(move_description);
    let to = move_to(move_description);
    let mover = state.side_to_move;

    let piece = state
        .piece_at(from)
        .ok_or_else(|| ChessError::NoPieceToMove(square_to_algebraic(from)))?;

    let mut next = state.clone();

    // Lift the mover off its origin square.
    next.board[from as usize] = None;

    // An en passant capture lands on an empty square; the captured pawn
    // stands one step beyond it, in the advancing army's own direction.
    if move_description & FLAG_EN_PASSANT != 0 {
        let victim_color = Color::ALL
            .into_iter()
            .find(|&color| color != mover && state.en_passant_target(color) == Some(to))
            .ok_or_else(|| illegal(from, to))?;
        let (d_file, d_rank) = victim_color.forward();
        let victim_square = offset_square(to, d_file, d_rank).ok_or_else(|| illegal(from, to))?;
        match next.board[victim_square as usize] {
            Some(victim) if victim.color == victim_color && victim.kind == PieceKind::Pawn => {
                next.board[victim_square as usize] = None;
            }
            _ => return Err(illegal(from, to)),
        }
    }

    // Place the mover, promoted if the description says so.
    let placed_kind = match move_promotion_piece(move_description) {
        Some(promotion) if piece.kind == PieceKind::Pawn => promotion,
        _ => piece.kind,
    };
    next.board[to as usize] = Some(Piece {
        color: mover,
        kind: placed_kind,
    });

    // A castling king drags its rook along and spends that corner's right.
    if move_description & FLAG_CASTLING != 0 && piece.kind == PieceKind::King {
        for entry in CASTLING_MOVES {
            if entry.color == mover && entry.king_from == from && entry.king_to == to {
                next.board[entry.rook_from as usize] = None;
                next.board[entry.rook_to as usize] = Some(Piece {
                    color: mover,
                    kind: PieceKind::Rook,
                });
                next.castling_rights &= !entry.flag;
            }
        }
    }

    update_castling_rights(&mut next, mover, piece.kind, from, to);

    // A double push opens the passed square to en passant capture until the
    // rotation returns to the mover; every commit also expires the slot of
    // the color about to move.
    if move_description & FLAG_DOUBLE_PAWN_PUSH != 0 {
        let (d_file, d_rank) = mover.forward();
        let passed = offset_square(from, d_file, d_rank).ok_or_else(|| illegal(from, to))?;
        next.en_passant[mover.index()] = Some(passed);
    }
    next.en_passant[mover.next().index()] = None;

    if piece.kind == PieceKind::Pawn || move_is_capture(move_description) {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Green {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = mover.next();

    Ok(next)
}

#[inline]
pub fn build_move(
    from: Square,
    to: Square,
    moved_piece: PieceKind,
    captured_piece: Option<PieceKind>,
    promotion_piece: Option<PieceKind>,
    flags: u64,
) -> u64 {
    pack_move_description(from, to, moved_piece, captured_piece, promotion_piece, flags)
}

fn update_castling_rights(
    state: &mut GameState,
    mover: Color,
    moved_piece: PieceKind,
    from: Square,
    to: Square,
) {
    if moved_piece == PieceKind::King {
        state.castling_rights &= !castling_flags_for(mover);
    }

    for entry in CASTLING_MOVES {
        // The mover's rook leaving its corner spends that right; landing on
        // any rook's home corner spends the owner's right too.
        if entry.color == mover && moved_piece == PieceKind::Rook && entry.rook_from == from {
            state.castling_rights &= !entry.flag;
        }
        if entry.rook_from == to {
            state.castling_rights &= !entry.flag;
        }
    }
}

fn illegal(from: Square, to: Square) -> ChessError {
    ChessError::IllegalMove {
        from: square_to_algebraic(from),
        to: square_to_algebraic(to),
    }
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::game_state::chess_types::{Color, PieceKind, CASTLE_RED_KINGSIDE};
    use crate::game_state::game_state::GameState;
    use crate::game_state::square_table::square_at;
    use crate::moves::move_descriptions::{pack_move_description, FLAG_DOUBLE_PAWN_PUSH};

    #[test]
    fn quiet_move_rotates_turn_and_bumps_clock() {
        let state = GameState::new_game();
        let mv = pack_move_description(
            square_at(4, 0), // e1 knight
            square_at(5, 2), // f3
            PieceKind::Knight,
            None,
            None,
            0,
        );
        let next = apply_move(&state, mv).expect("knight development should apply");
        assert_eq!(next.side_to_move, Color::Blue);
        assert_eq!(next.halfmove_clock, 1);
        assert_eq!(next.fullmove_number, 1);
        assert!(next.piece_at(square_at(4, 0)).is_none());
        assert_eq!(
            next.piece_at(square_at(5, 2)).map(|piece| piece.kind),
            Some(PieceKind::Knight)
        );
    }

    #[test]
    fn double_push_sets_the_passed_square() {
        let state = GameState::new_game();
        let mv = pack_move_description(
            square_at(7, 1), // h2
            square_at(7, 3), // h4
            PieceKind::Pawn,
            None,
            None,
            FLAG_DOUBLE_PAWN_PUSH,
        );
        let next = apply_move(&state, mv).expect("double push should apply");
        assert_eq!(next.en_passant_target(Color::Red), Some(square_at(7, 2)));
        assert_eq!(next.halfmove_clock, 0);
    }

    #[test]
    fn king_moves_spend_both_castling_rights() {
        let mut state = GameState::new_game();
        // Clear the queen off g1 so the king has somewhere to go.
        state.board[square_at(6, 0) as usize] = None;
        let mv = pack_move_description(
            square_at(7, 0),
            square_at(6, 0),
            PieceKind::King,
            None,
            None,
            0,
        );
        let next = apply_move(&state, mv).expect("king step should apply");
        assert_eq!(next.castling_rights & CASTLE_RED_KINGSIDE, 0);
        assert_eq!(
            next.castling_rights & crate::game_state::chess_types::CASTLE_RED_QUEENSIDE,
            0
        );
    }

    #[test]
    fn green_completing_the_round_bumps_the_move_number() {
        let mut state = GameState::new_game();
        state.side_to_move = Color::Green;
        let mv = pack_move_description(
            square_at(12, 4), // m5
            square_at(11, 4), // l5
            PieceKind::Pawn,
            None,
            None,
            0,
        );
        let next = apply_move(&state, mv).expect("green pawn step should apply");
        assert_eq!(next.fullmove_number, 2);
        assert_eq!(next.side_to_move, Color::Red);
    }
}
