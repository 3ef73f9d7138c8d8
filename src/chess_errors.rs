//! Errors used throughout the four-player chess engine.
//!
//! This module defines the canonical error type returned by game logic,
//! square parsing, move generation, and serialization. The enum `ChessError`
//! is the single error type across the crate to simplify propagation and
//! matching. Each variant carries contextual information where appropriate.
//!
//! Every variant is a recoverable, caller-visible outcome: a failed call
//! leaves the game state exactly as it was, and retrying the identical call
//! against the same state fails identically.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, PieceKind};

/// Unified error type for the four-player chess engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A square label (or square index) does not name one of the 160
    /// on-board squares of the cross-shaped board.
    ///
    /// Payload: the offending label or index rendering.
    InvalidSquare(String),

    /// The requested promotion piece is not one of knight, bishop, rook,
    /// or queen.
    InvalidPromotion(PieceKind),

    /// The origin square of a move command is empty.
    ///
    /// Payload: the origin square label.
    NoPieceToMove(String),

    /// The origin square holds a piece that does not belong to the side to
    /// move.
    NotYourPiece {
        /// Origin square label.
        square: String,
        /// Color of the piece actually found there.
        piece_color: Color,
    },

    /// A move command was issued on behalf of a player whose turn it is not.
    WrongTurn {
        /// The color that issued the command.
        acting: Color,
        /// The color whose turn it actually is.
        side_to_move: Color,
    },

    /// The requested (from, to) pair is not in the move enumeration for the
    /// side to move.
    IllegalMove {
        /// Origin square label.
        from: String,
        /// Destination square label.
        to: String,
    },

    /// The requested move would leave the mover's own king attacked; the
    /// candidate was rolled back.
    MovesIntoCheck,

    /// `undo` was called with no moves in the history stack.
    EmptyHistory,

    /// A FED string had malformed structure or an unknown token.
    ///
    /// Payload: a description of the offending fragment.
    InvalidFedString(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidSquare(label) => {
                write!(f, "square {label} is not on the board")
            }
            ChessError::InvalidPromotion(kind) => {
                write!(f, "cannot promote a pawn to {kind:?}")
            }
            ChessError::NoPieceToMove(square) => {
                write!(f, "no piece to move on {square}")
            }
            ChessError::NotYourPiece { square, piece_color } => {
                write!(f, "piece on {square} belongs to {piece_color:?}")
            }
            ChessError::WrongTurn { acting, side_to_move } => {
                write!(f, "{acting:?} moved out of turn ({side_to_move:?} to move)")
            }
            ChessError::IllegalMove { from, to } => {
                write!(f, "move {from}-{to} is not legal in this position")
            }
            ChessError::MovesIntoCheck => {
                write!(f, "move leaves the mover's king in check")
            }
            ChessError::EmptyHistory => {
                write!(f, "no move to undo")
            }
            ChessError::InvalidFedString(detail) => {
                write!(f, "invalid FED string: {detail}")
            }
        }
    }
}

impl Error for ChessError {}
