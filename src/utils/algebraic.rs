//! Square-label conversions.
//!
//! Converts between human-readable square labels (`a4`, `e14`) and the
//! dense square indices of the canonical on-board table. Labels that name
//! one of the missing corner squares, or anything else off the cross, fail
//! with `InvalidSquare` — index 0 is a real square, so "not found" is never
//! expressed as a default index.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::Square;
use crate::game_state::square_table::{
    square_file, square_from_coords, square_rank, BOARD_SPAN, SQUARE_COUNT,
};

/// Convert a square label (for example `e14`) to a dense square index.
pub fn algebraic_to_square(label: &str) -> Result<Square, ChessError> {
    let invalid = || ChessError::InvalidSquare(label.to_owned());

    let bytes = label.as_bytes();
    if !(2..=3).contains(&bytes.len()) {
        return Err(invalid());
    }

    let file_byte = bytes[0];
    if !(b'a'..=b'n').contains(&file_byte) {
        return Err(invalid());
    }
    let file = (file_byte - b'a') as i8;

    let mut rank_value = 0i16;
    for &digit in &bytes[1..] {
        if !digit.is_ascii_digit() {
            return Err(invalid());
        }
        rank_value = rank_value * 10 + (digit - b'0') as i16;
    }
    if !(1..=BOARD_SPAN as i16).contains(&rank_value) {
        return Err(invalid());
    }

    square_from_coords(file, (rank_value - 1) as i8).ok_or_else(invalid)
}

/// Convert a dense square index to its label. Indices outside the table
/// render as `#n` so error paths can always produce something printable.
pub fn square_to_algebraic(square: Square) -> String {
    if square as usize >= SQUARE_COUNT {
        return format!("#{square}");
    }
    let file = char::from(b'a' + square_file(square) as u8);
    let rank = square_rank(square) + 1;
    format!("{file}{rank}")
}
