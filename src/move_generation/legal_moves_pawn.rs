//! Pseudo-legal pawn move generation for the side to move.
//!
//! Quiet advances, double pushes from the home squares, diagonal captures,
//! en passant captures against any opposing army's live target, and
//! promotion variants on the far edge of each lane.

use crate::game_state::chess_rules::is_promotion_square;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::square_table::{offset_square, SQUARE_COUNT};
use crate::move_generation::legal_move_apply::build_move;
use crate::moves::move_descriptions::{FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT};
use crate::moves::pawn_moves::{pawn_can_advance, pawn_capture_offsets};

const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<u64>) {
    let side = game_state.side_to_move;
    let (d_file, d_rank) = side.forward();

    for from in 0..SQUARE_COUNT as u8 {
        match game_state.piece_at(from) {
            Some(piece) if piece.color == side && piece.kind == PieceKind::Pawn => {}
            _ => continue,
        }

        // Quiet advances.
        if let Some(one_step) = offset_square(from, d_file, d_rank) {
            if pawn_can_advance(game_state, side, from, one_step) {
                push_pawn_move(out, side, from, one_step, None, 0);
            }
            if let Some(two_step) = offset_square(one_step, d_file, d_rank) {
                if pawn_can_advance(game_state, side, from, two_step) {
                    out.push(build_move(
                        from,
                        two_step,
                        PieceKind::Pawn,
                        None,
                        None,
                        FLAG_DOUBLE_PAWN_PUSH,
                    ));
                }
            }
        }

        // Captures, including en passant onto an opposing target square.
        for (c_file, c_rank) in pawn_capture_offsets(side) {
            let Some(to) = offset_square(from, c_file, c_rank) else {
                continue;
            };
            match game_state.piece_at(to) {
                Some(target) if target.color != side => {
                    push_pawn_move(out, side, from, to, Some(target.kind), FLAG_CAPTURE);
                }
                Some(_) => {}
                None => {
                    if en_passant_victim_present(game_state, side, to) {
                        out.push(build_move(
                            from,
                            to,
                            PieceKind::Pawn,
                            Some(PieceKind::Pawn),
                            None,
                            FLAG_CAPTURE | FLAG_EN_PASSANT,
                        ));
                    }
                }
            }
        }
    }
}

/// Whether `target` is a live en passant square of some opposing army whose
/// double-pushed pawn is still standing one step beyond it.
fn en_passant_victim_present(game_state: &GameState, side: Color, target: Square) -> bool {
    for color in Color::ALL {
        if color == side || game_state.en_passant_target(color) != Some(target) {
            continue;
        }
        let (d_file, d_rank) = color.forward();
        if let Some(pawn_square) = offset_square(target, d_file, d_rank) {
            if matches!(
                game_state.piece_at(pawn_square),
                Some(piece) if piece.color == color && piece.kind == PieceKind::Pawn
            ) {
                return true;
            }
        }
    }
    false
}

fn push_pawn_move(
    out: &mut Vec<u64>,
    side: Color,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    flags: u64,
) {
    if is_promotion_square(side, to) {
        for promotion in PROMOTION_CHOICES {
            out.push(build_move(
                from,
                to,
                PieceKind::Pawn,
                captured,
                Some(promotion),
                flags,
            ));
        }
    } else {
        out.push(build_move(from, to, PieceKind::Pawn, captured, None, flags));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::game_state::square_table::square_at;
    use crate::moves::move_descriptions::{
        move_from, move_promotion_piece, move_to, FLAG_EN_PASSANT,
    };

    #[test]
    fn every_starting_pawn_has_a_single_and_a_double_push() {
        let state = GameState::new_game();
        let mut out = Vec::new();
        generate_pawn_moves(&state, &mut out);
        assert_eq!(out.len(), 16);
        let h2 = square_at(7, 1);
        let pushes: Vec<u8> = out
            .iter()
            .filter(|&&mv| move_from(mv) == h2)
            .map(|&mv| move_to(mv))
            .collect();
        assert_eq!(pushes, vec![square_at(7, 2), square_at(7, 3)]);
    }

    #[test]
    fn en_passant_capture_is_offered_while_the_target_is_live() {
        // Blue just double-pushed b7-d7 past c7; a red pawn waits on d6.
        let mut state = GameState::new_empty();
        let d6 = square_at(3, 5);
        let d7 = square_at(3, 6);
        let c7 = square_at(2, 6);
        state.board[d6 as usize] = Some(Piece {
            color: Color::Red,
            kind: PieceKind::Pawn,
        });
        state.board[d7 as usize] = Some(Piece {
            color: Color::Blue,
            kind: PieceKind::Pawn,
        });
        state.en_passant[Color::Blue.index()] = Some(c7);

        let mut out = Vec::new();
        generate_pawn_moves(&state, &mut out);
        let ep: Vec<u64> = out
            .iter()
            .copied()
            .filter(|&mv| mv & FLAG_EN_PASSANT != 0)
            .collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(move_from(ep[0]), d6);
        assert_eq!(move_to(ep[0]), c7);

        // Once the target expires the same capture disappears.
        state.en_passant[Color::Blue.index()] = None;
        let mut out = Vec::new();
        generate_pawn_moves(&state, &mut out);
        assert!(out.iter().all(|&mv| mv & FLAG_EN_PASSANT == 0));
    }

    #[test]
    fn far_edge_pushes_fan_out_into_promotion_variants() {
        let mut state = GameState::new_empty();
        let g13 = square_at(6, 12);
        state.board[g13 as usize] = Some(Piece {
            color: Color::Red,
            kind: PieceKind::Pawn,
        });

        let mut out = Vec::new();
        generate_pawn_moves(&state, &mut out);
        assert_eq!(out.len(), 4);
        for mv in out {
            assert_eq!(move_to(mv), square_at(6, 13));
            assert!(move_promotion_piece(mv).is_some());
        }
    }
}
