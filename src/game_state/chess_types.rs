//! Core value types shared by every subsystem.
//!
//! Colors, piece kinds, squares, and castling-rights flags are plain enums
//! and integer aliases so game state stays `Copy`-friendly and cheap to
//! snapshot.

use crate::game_state::square_table::SQUARE_COUNT;

/// One of the four armies. Turn order is fixed: Red, Blue, Yellow, Green,
/// then back to Red.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
}

impl Color {
    pub const COUNT: usize = 4;

    /// All colors in turn order.
    pub const ALL: [Color; Color::COUNT] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Yellow => 2,
            Color::Green => 3,
        }
    }

    /// The color that moves after this one.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Yellow,
            Color::Yellow => Color::Green,
            Color::Green => Color::Red,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Green => 'G',
        }
    }

    /// Pawn advance direction as a `(d_file, d_rank)` step. The four armies
    /// face inward on the cross: Red moves toward increasing rank, Yellow
    /// toward decreasing rank, Blue toward increasing file, Green toward
    /// decreasing file.
    #[inline]
    pub const fn forward(self) -> (i8, i8) {
        match self {
            Color::Red => (0, 1),
            Color::Blue => (1, 0),
            Color::Yellow => (0, -1),
            Color::Green => (-1, 0),
        }
    }

    #[inline]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(Color::Red),
            'B' => Some(Color::Blue),
            'Y' => Some(Color::Yellow),
            'G' => Some(Color::Green),
            _ => None,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const COUNT: usize = 6;

    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[inline]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece on the board: which army and which kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/// Dense index into the canonical on-board square table (`0..160`).
pub type Square = u8;

/// The piece grid, indexed by dense square index. `None` is an empty square.
pub type Board = [Option<Piece>; SQUARE_COUNT];

/// Compact castling-rights bitmask: one flag per color per side.
pub type CastlingRights = u8;

pub const CASTLE_RED_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_RED_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLUE_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLUE_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_YELLOW_KINGSIDE: CastlingRights = 1 << 4;
pub const CASTLE_YELLOW_QUEENSIDE: CastlingRights = 1 << 5;
pub const CASTLE_GREEN_KINGSIDE: CastlingRights = 1 << 6;
pub const CASTLE_GREEN_QUEENSIDE: CastlingRights = 1 << 7;
pub const CASTLE_ALL: CastlingRights = u8::MAX;
