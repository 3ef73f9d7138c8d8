//! Random game playout.
//!
//! Drives a `Game` forward by picking uniformly from the legal moves each
//! turn. Used by the simulation binary and the benchmarks; with a seeded
//! generator it also gives tests a cheap way to churn through realistic
//! mid-game states.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game::Game;
use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::{move_from, move_to};
use crate::utils::algebraic::square_to_algebraic;

/// Play up to `max_plies` uniformly random legal moves, promoting to queen
/// throughout. Stops early when the side to move has no legal move. Returns
/// the `from-to` record of everything played.
pub fn play_random_game<R: Rng>(
    game: &mut Game,
    max_plies: usize,
    rng: &mut R,
) -> Result<Vec<String>, ChessError> {
    let generator = FastLegalMoveGenerator;
    let mut record = Vec::new();

    for _ in 0..max_plies {
        let legal = generator.generate_legal_moves(game.state())?;
        let Some(choice) = legal.choose(rng) else {
            break;
        };

        let from = square_to_algebraic(move_from(choice.move_description));
        let to = square_to_algebraic(move_to(choice.move_description));
        game.move_piece(&from, &to, PieceKind::Queen)?;
        record.push(format!("{from}-{to}"));
    }

    Ok(record)
}
