//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, applies each candidate
//! to a copy of the state, filters the ones that leave the mover's own king
//! attacked, and optionally annotates which opponents end up in check.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{GeneratedMove, MoveAnnotations, MoveGenerator};

/// Geometry-and-occupancy move enumeration for the side to move: every
/// square each piece could reach or capture on, before any self-check
/// filtering. This is the enumeration the move-command surface validates
/// requests against.
pub fn generate_pseudo_moves(game_state: &GameState) -> Vec<u64> {
    let mut pseudo = Vec::<u64>::with_capacity(128);

    generate_pawn_moves(game_state, &mut pseudo);
    generate_knight_moves(game_state, &mut pseudo);
    generate_bishop_moves(game_state, &mut pseudo);
    generate_rook_moves(game_state, &mut pseudo);
    generate_queen_moves(game_state, &mut pseudo);
    generate_king_moves(game_state, &mut pseudo);

    pseudo
}

pub struct LegalMoveGenerator;
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(
        &self,
        game_state: &GameState,
    ) -> Result<Vec<GeneratedMove>, ChessError> {
        self.generate_legal_moves_internal(game_state, true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(
        &self,
        game_state: &GameState,
    ) -> Result<Vec<GeneratedMove>, ChessError> {
        LegalMoveGenerator.generate_legal_moves_internal(game_state, false)
    }
}

impl LegalMoveGenerator {
    fn generate_legal_moves_internal(
        &self,
        game_state: &GameState,
        annotate: bool,
    ) -> Result<Vec<GeneratedMove>, ChessError> {
        let mover = game_state.side_to_move;
        let pseudo = generate_pseudo_moves(game_state);

        let mut legal = Vec::<GeneratedMove>::with_capacity(pseudo.len());
        for mv in pseudo {
            let next = apply_move(game_state, mv)?;

            // Illegal if the mover's own king is attacked after the move.
            if is_king_in_check(&next, mover) {
                continue;
            }

            let annotations = if annotate {
                classify_checks(mover, &next)
            } else {
                MoveAnnotations::default()
            };

            legal.push(GeneratedMove {
                move_description: mv,
                game_after_move: next,
                annotations,
            });
        }

        Ok(legal)
    }
}

fn classify_checks(mover: Color, next: &GameState) -> MoveAnnotations {
    let mut annotations = MoveAnnotations::default();
    for color in Color::ALL {
        if color != mover {
            annotations.checks_color[color.index()] = is_king_in_check(next, color);
        }
    }
    annotations
}
