//! Pseudo-legal knight move generation for the side to move.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::game_state::square_table::{offset_square, SQUARE_COUNT};
use crate::move_generation::legal_move_apply::build_move;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::move_descriptions::FLAG_CAPTURE;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<u64>) {
    let side = game_state.side_to_move;

    for from in 0..SQUARE_COUNT as u8 {
        match game_state.piece_at(from) {
            Some(piece) if piece.color == side && piece.kind == PieceKind::Knight => {}
            _ => continue,
        }

        for (d_file, d_rank) in KNIGHT_OFFSETS {
            let Some(to) = offset_square(from, d_file, d_rank) else {
                continue;
            };
            match game_state.piece_at(to) {
                None => out.push(build_move(from, to, PieceKind::Knight, None, None, 0)),
                Some(target) if target.color != side => out.push(build_move(
                    from,
                    to,
                    PieceKind::Knight,
                    Some(target.kind),
                    None,
                    FLAG_CAPTURE,
                )),
                Some(_) => {}
            }
        }
    }
}
