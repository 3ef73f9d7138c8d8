//! Core board-state representation.
//!
//! `GameState` is the data half of the engine: the piece grid, castling
//! rights, en passant map, clocks, and side to move. It answers read-only
//! queries; every mutation flows through `move_generation::legal_move_apply`
//! and the `Game` wrapper's commit-or-rollback path.

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::starting_board;
use crate::game_state::chess_types::{
    Board, CastlingRights, Color, Piece, Square, CASTLE_ALL,
};
use crate::game_state::square_table::SQUARE_COUNT;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::fed::{generate_fed, parse_fed};

/// Full state of one game, cheap to clone for speculative move application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Piece grid indexed by dense square index.
    pub board: Board,

    /// Whose turn it is; advances Red → Blue → Yellow → Green → Red.
    pub side_to_move: Color,

    /// One still-available flag per color per castling side.
    pub castling_rights: CastlingRights,

    /// Per-color en passant target: the square a pawn of that color just
    /// passed over, live until the rotation returns to that color.
    pub en_passant: [Option<Square>; Color::COUNT],

    /// Plies since the last capture or pawn move.
    pub halfmove_clock: u16,

    /// Increments once per full round, after Green moves.
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// The standard four-player starting position, Red to move.
    pub fn new_game() -> Self {
        Self {
            board: starting_board(),
            side_to_move: Color::Red,
            castling_rights: CASTLE_ALL,
            en_passant: [None; Color::COUNT],
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// An empty board with no castling rights. Mostly useful for tests and
    /// for rebuilding positions from serialized form.
    pub fn new_empty() -> Self {
        Self {
            board: [None; SQUARE_COUNT],
            side_to_move: Color::Red,
            castling_rights: 0,
            en_passant: [None; Color::COUNT],
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    pub fn from_fed(fed: &str) -> Result<Self, ChessError> {
        parse_fed(fed)
    }

    #[inline]
    pub fn get_fed(&self) -> String {
        generate_fed(self)
    }

    /// Piece on a dense square index, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square as usize]
    }

    /// Piece on a labeled square. Fails for off-board labels instead of
    /// pretending the square is empty.
    pub fn piece_on(&self, label: &str) -> Result<Option<Piece>, ChessError> {
        let square = algebraic_to_square(label)?;
        Ok(self.piece_at(square))
    }

    /// Whether a labeled square is empty. Fails for off-board labels.
    pub fn is_empty(&self, label: &str) -> Result<bool, ChessError> {
        Ok(self.piece_on(label)?.is_none())
    }

    /// Read-only view of the whole grid for rendering collaborators.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The live en passant target of `color`, if its last move was a double
    /// pawn push and the rotation has not yet come back around.
    #[inline]
    pub fn en_passant_target(&self, color: Color) -> Option<Square> {
        self.en_passant[color.index()]
    }
}
