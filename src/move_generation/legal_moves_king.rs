//! Pseudo-legal king move generation for the side to move, castling
//! included.

use crate::game_state::chess_rules::CASTLING_MOVES;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::square_table::{offset_square, square_file, square_rank, SQUARE_COUNT};
use crate::move_generation::legal_move_apply::build_move;
use crate::move_generation::legal_move_checks::is_square_attacked_by_any;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::move_descriptions::{FLAG_CAPTURE, FLAG_CASTLING};

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<u64>) {
    let side = game_state.side_to_move;

    for from in 0..SQUARE_COUNT as u8 {
        match game_state.piece_at(from) {
            Some(piece) if piece.color == side && piece.kind == PieceKind::King => {}
            _ => continue,
        }

        for (d_file, d_rank) in KING_OFFSETS {
            let Some(to) = offset_square(from, d_file, d_rank) else {
                continue;
            };
            match game_state.piece_at(to) {
                None => out.push(build_move(from, to, PieceKind::King, None, None, 0)),
                Some(target) if target.color != side => out.push(build_move(
                    from,
                    to,
                    PieceKind::King,
                    Some(target.kind),
                    None,
                    FLAG_CAPTURE,
                )),
                Some(_) => {}
            }
        }

        generate_castling_moves(game_state, out, from);
    }
}

fn generate_castling_moves(game_state: &GameState, out: &mut Vec<u64>, king_from: Square) {
    let side = game_state.side_to_move;

    // Cannot castle out of check.
    if is_square_attacked_by_any(game_state, king_from, side) {
        return;
    }

    for entry in CASTLING_MOVES {
        if entry.color != side
            || game_state.castling_rights & entry.flag == 0
            || entry.king_from != king_from
        {
            continue;
        }

        let d_file = (square_file(entry.rook_from) - square_file(king_from)).signum();
        let d_rank = (square_rank(entry.rook_from) - square_rank(king_from)).signum();

        if !path_to_rook_is_clear(game_state, king_from, entry.rook_from, d_file, d_rank) {
            continue;
        }

        // The king may not cross or land on an attacked square.
        let Some(transit) = offset_square(king_from, d_file, d_rank) else {
            continue;
        };
        if is_square_attacked_by_any(game_state, transit, side)
            || is_square_attacked_by_any(game_state, entry.king_to, side)
        {
            continue;
        }

        out.push(build_move(
            king_from,
            entry.king_to,
            PieceKind::King,
            None,
            None,
            FLAG_CASTLING,
        ));
    }
}

fn path_to_rook_is_clear(
    game_state: &GameState,
    king_from: Square,
    rook_from: Square,
    d_file: i8,
    d_rank: i8,
) -> bool {
    let mut current = king_from;
    while let Some(next) = offset_square(current, d_file, d_rank) {
        if next == rook_from {
            return true;
        }
        if game_state.piece_at(next).is_some() {
            return false;
        }
        current = next;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::game_state::square_table::square_at;
    use crate::moves::move_descriptions::{move_to, FLAG_CASTLING};

    fn clear(state: &mut GameState, file: i8, rank: i8) {
        state.board[square_at(file, rank) as usize] = None;
    }

    #[test]
    fn boxed_in_king_has_no_moves() {
        let state = GameState::new_game();
        let mut out = Vec::new();
        generate_king_moves(&state, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn kingside_castling_appears_once_the_path_is_clear() {
        let mut state = GameState::new_game();
        clear(&mut state, 8, 0); // i1 bishop
        clear(&mut state, 9, 0); // j1 knight

        let mut out = Vec::new();
        generate_king_moves(&state, &mut out);

        let castle: Vec<u64> = out
            .iter()
            .copied()
            .filter(|&mv| mv & FLAG_CASTLING != 0)
            .collect();
        assert_eq!(castle.len(), 1);
        assert_eq!(move_to(castle[0]), square_at(9, 0)); // h1 -> j1
    }

    #[test]
    fn castling_is_withheld_while_the_transit_square_is_attacked() {
        let mut state = GameState::new_game();
        clear(&mut state, 8, 0);
        clear(&mut state, 9, 0);
        clear(&mut state, 8, 1); // open the i-file
        // A yellow rook bearing down the i-file covers i1.
        state.board[square_at(8, 4) as usize] = Some(Piece {
            color: Color::Yellow,
            kind: PieceKind::Rook,
        });

        let mut out = Vec::new();
        generate_king_moves(&state, &mut out);
        assert!(out.iter().all(|&mv| mv & FLAG_CASTLING == 0));
    }
}
