//! Snapshot record for the undo stack.

use crate::game_state::chess_types::{Board, CastlingRights, Color, Square};
use crate::game_state::game_state::GameState;

/// State captured immediately before a move commits. `Game::undo` pops one
/// of these and restores every live field from it; nothing is recomputed or
/// replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub prev_board: Board,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant: [Option<Square>; Color::COUNT],
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
    pub prev_side_to_move: Color,
}

impl UndoState {
    /// Snapshot the given state as it is right now.
    pub fn capture(state: &GameState) -> Self {
        Self {
            prev_board: state.board,
            prev_castling_rights: state.castling_rights,
            prev_en_passant: state.en_passant,
            prev_halfmove_clock: state.halfmove_clock,
            prev_fullmove_number: state.fullmove_number,
            prev_side_to_move: state.side_to_move,
        }
    }

    /// Overwrite every live field of `state` from this snapshot.
    pub fn restore_into(self, state: &mut GameState) {
        state.board = self.prev_board;
        state.castling_rights = self.prev_castling_rights;
        state.en_passant = self.prev_en_passant;
        state.halfmove_clock = self.prev_halfmove_clock;
        state.fullmove_number = self.prev_fullmove_number;
        state.side_to_move = self.prev_side_to_move;
    }
}
