//! The playable game: move command surface, commit-or-rollback move
//! application, and the undo stack.
//!
//! `Game` owns one `GameState` plus the history of pre-move snapshots. A
//! move request is validated in order — square labels, promotion choice,
//! origin ownership, membership in the move enumeration — then applied to a
//! clone of the state. If the mover's own king ends up attacked the clone
//! is dropped and nothing happened; otherwise the clone becomes the live
//! state and the old one is pushed for undo. Every failure leaves the game
//! exactly as it was.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_pseudo_moves, LegalMoveGenerator};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::move_descriptions::{
    move_from, move_promotion_piece, move_to, with_promotion_piece,
};
use crate::utils::algebraic::algebraic_to_square;

/// One four-player game: live state plus its undo history. Each instance is
/// independently owned; nothing is shared process-wide.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    history: Vec<UndoState>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game from the standard four-player starting position.
    pub fn new() -> Self {
        Self {
            state: GameState::new_game(),
            history: Vec::new(),
        }
    }

    /// Wrap an arbitrary position (deserialized, composed for analysis)
    /// with an empty history.
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            history: Vec::new(),
        }
    }

    /// Read-only view of the live state.
    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of committed moves available to undo.
    #[inline]
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// Whether `color`'s king is currently attacked by any opposing army.
    pub fn in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.state, color)
    }

    /// Every legal move for the side to move, with resulting states and
    /// check annotations.
    pub fn legal_moves(&self) -> Result<Vec<GeneratedMove>, ChessError> {
        LegalMoveGenerator.generate_legal_moves(&self.state)
    }

    /// Attempt a move on behalf of `acting`, for callers (a server layer,
    /// say) that know which player issued the command.
    pub fn move_piece_as(
        &mut self,
        acting: Color,
        from: &str,
        to: &str,
        promotion: PieceKind,
    ) -> Result<(), ChessError> {
        if acting != self.state.side_to_move {
            return Err(ChessError::WrongTurn {
                acting,
                side_to_move: self.state.side_to_move,
            });
        }
        self.move_piece(from, to, promotion)
    }

    /// Attempt a move for the side to move. `promotion` is consulted only
    /// when the move is a pawn reaching its promotion edge; pass
    /// `PieceKind::Queen` for the conventional default.
    pub fn move_piece(
        &mut self,
        from: &str,
        to: &str,
        promotion: PieceKind,
    ) -> Result<(), ChessError> {
        let from_square = algebraic_to_square(from)?;
        let to_square = algebraic_to_square(to)?;

        if !matches!(
            promotion,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        ) {
            return Err(ChessError::InvalidPromotion(promotion));
        }

        let piece = self
            .state
            .piece_at(from_square)
            .ok_or_else(|| ChessError::NoPieceToMove(from.to_owned()))?;
        if piece.color != self.state.side_to_move {
            return Err(ChessError::NotYourPiece {
                square: from.to_owned(),
                piece_color: piece.color,
            });
        }

        let candidate = generate_pseudo_moves(&self.state)
            .into_iter()
            .find(|&mv| move_from(mv) == from_square && move_to(mv) == to_square)
            .ok_or_else(|| ChessError::IllegalMove {
                from: from.to_owned(),
                to: to.to_owned(),
            })?;

        // Promotion squares enumerate one move per piece choice; rewrite
        // whichever variant matched to the caller's choice.
        let candidate = if move_promotion_piece(candidate).is_some() {
            with_promotion_piece(candidate, promotion)
        } else {
            candidate
        };

        let next = apply_move(&self.state, candidate)?;
        if is_king_in_check(&next, piece.color) {
            return Err(ChessError::MovesIntoCheck);
        }

        self.history.push(UndoState::capture(&self.state));
        self.state = next;
        Ok(())
    }

    /// Take back the most recent committed move, restoring the full
    /// snapshot it was played from.
    pub fn undo(&mut self) -> Result<&GameState, ChessError> {
        let snapshot = self.history.pop().ok_or(ChessError::EmptyHistory)?;
        snapshot.restore_into(&mut self.state);
        Ok(&self.state)
    }
}
