//! Pseudo-legal rook move generation for the side to move.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::game_state::square_table::{offset_square, SQUARE_COUNT};
use crate::move_generation::legal_move_apply::build_move;
use crate::moves::move_descriptions::FLAG_CAPTURE;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<u64>) {
    let side = game_state.side_to_move;

    for from in 0..SQUARE_COUNT as u8 {
        match game_state.piece_at(from) {
            Some(piece) if piece.color == side && piece.kind == PieceKind::Rook => {}
            _ => continue,
        }

        for (d_file, d_rank) in ROOK_DIRECTIONS {
            let mut current = from;
            while let Some(to) = offset_square(current, d_file, d_rank) {
                match game_state.piece_at(to) {
                    None => out.push(build_move(from, to, PieceKind::Rook, None, None, 0)),
                    Some(target) if target.color != side => {
                        out.push(build_move(
                            from,
                            to,
                            PieceKind::Rook,
                            Some(target.kind),
                            None,
                            FLAG_CAPTURE,
                        ));
                        break;
                    }
                    Some(_) => break,
                }
                current = to;
            }
        }
    }
}
