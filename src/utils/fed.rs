//! FED-string serialization of a full game state.
//!
//! A FED string is the four-player analogue of a FEN record: one line that
//! carries exactly the persisted fields of `GameState` — side to move,
//! castling rights, the per-color en passant map, the half-move clock, the
//! move number, and the board.
//!
//! Layout, space separated:
//!
//! ```text
//! <turn> <castling> <enpassant> <halfmove> <fullmove> <board>
//! ```
//!
//! * `turn` — one color letter (`R`, `B`, `Y`, `G`).
//! * `castling` — comma-separated list of still-available rights as color
//!   letter plus side letter (`RK,RQ,...`), or `-` when none remain.
//! * `enpassant` — comma-separated list of live targets as color letter
//!   plus square label (`Bc7`), or `-` when none are live.
//! * `board` — rows 14 down to 1 separated by `/`, each row covering only
//!   its on-board squares left to right: a piece is a lowercase color
//!   letter plus an uppercase piece letter (`yR`), runs of empty squares
//!   collapse to a decimal count.

use crate::chess_errors::ChessError;
use crate::game_state::chess_rules::CASTLING_MOVES;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::game_state::square_table::{square_from_coords, BOARD_SPAN};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Serialize `state` to a FED string.
pub fn generate_fed(state: &GameState) -> String {
    let turn = state.side_to_move.letter().to_string();

    let mut castling = String::new();
    for entry in CASTLING_MOVES {
        if state.castling_rights & entry.flag == 0 {
            continue;
        }
        if !castling.is_empty() {
            castling.push(',');
        }
        castling.push(entry.color.letter());
        castling.push(side_letter(entry.flag, entry.color));
    }
    if castling.is_empty() {
        castling.push('-');
    }

    let mut enpassant = String::new();
    for color in Color::ALL {
        let Some(target) = state.en_passant_target(color) else {
            continue;
        };
        if !enpassant.is_empty() {
            enpassant.push(',');
        }
        enpassant.push(color.letter());
        enpassant.push_str(&square_to_algebraic(target));
    }
    if enpassant.is_empty() {
        enpassant.push('-');
    }

    let mut board = String::new();
    for rank in (0..BOARD_SPAN).rev() {
        if rank != BOARD_SPAN - 1 {
            board.push('/');
        }
        let mut empty_run = 0u8;
        for file in 0..BOARD_SPAN {
            let Some(square) = square_from_coords(file, rank) else {
                continue;
            };
            match state.piece_at(square) {
                None => empty_run += 1,
                Some(piece) => {
                    if empty_run > 0 {
                        board.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    board.push(piece.color.letter().to_ascii_lowercase());
                    board.push(piece.kind.letter());
                }
            }
        }
        if empty_run > 0 {
            board.push_str(&empty_run.to_string());
        }
    }

    format!(
        "{turn} {castling} {enpassant} {} {} {board}",
        state.halfmove_clock, state.fullmove_number
    )
}

/// Rebuild a state from a FED string.
pub fn parse_fed(fed: &str) -> Result<GameState, ChessError> {
    let fields: Vec<&str> = fed.split_whitespace().collect();
    let &[turn, castling, enpassant, halfmove, fullmove, board] = fields.as_slice() else {
        return Err(ChessError::InvalidFedString(format!(
            "expected 6 fields, found {}",
            fields.len()
        )));
    };

    let mut state = GameState::new_empty();

    state.side_to_move = parse_color(turn.chars().next().unwrap_or('?'))?;
    if turn.len() != 1 {
        return Err(ChessError::InvalidFedString(format!("turn field {turn}")));
    }

    if castling != "-" {
        for token in castling.split(',') {
            let mut chars = token.chars();
            let (Some(color_letter), Some(side), None) =
                (chars.next(), chars.next(), chars.next())
            else {
                return Err(ChessError::InvalidFedString(format!(
                    "castling token {token}"
                )));
            };
            let color = parse_color(color_letter)?;
            let entry = CASTLING_MOVES
                .iter()
                .find(|entry| entry.color == color && side_letter(entry.flag, color) == side)
                .ok_or_else(|| {
                    ChessError::InvalidFedString(format!("castling token {token}"))
                })?;
            state.castling_rights |= entry.flag;
        }
    }

    if enpassant != "-" {
        for token in enpassant.split(',') {
            let mut chars = token.chars();
            let color = parse_color(chars.next().unwrap_or('?'))?;
            let target = algebraic_to_square(chars.as_str())?;
            state.en_passant[color.index()] = Some(target);
        }
    }

    state.halfmove_clock = halfmove
        .parse()
        .map_err(|_| ChessError::InvalidFedString(format!("halfmove clock {halfmove}")))?;
    state.fullmove_number = fullmove
        .parse()
        .map_err(|_| ChessError::InvalidFedString(format!("move number {fullmove}")))?;

    parse_board(board, &mut state)?;

    Ok(state)
}

fn parse_board(board: &str, state: &mut GameState) -> Result<(), ChessError> {
    let rows: Vec<&str> = board.split('/').collect();
    if rows.len() != BOARD_SPAN as usize {
        return Err(ChessError::InvalidFedString(format!(
            "expected {BOARD_SPAN} board rows, found {}",
            rows.len()
        )));
    }

    for (row_index, row) in rows.iter().enumerate() {
        let rank = BOARD_SPAN - 1 - row_index as i8;
        // First on-board file of this rank.
        let mut file = (0..BOARD_SPAN)
            .find(|&file| square_from_coords(file, rank).is_some())
            .unwrap_or(0);

        let mut chars = row.chars().peekable();
        while let Some(&next) = chars.peek() {
            if next.is_ascii_digit() {
                let mut run = 0i16;
                while let Some(&digit) = chars.peek() {
                    let Some(value) = digit.to_digit(10) else {
                        break;
                    };
                    run = run * 10 + value as i16;
                    if run > BOARD_SPAN as i16 {
                        return Err(ChessError::InvalidFedString(format!(
                            "empty run of {run} in row {row}"
                        )));
                    }
                    chars.next();
                }
                file += run as i8;
            } else {
                chars.next();
                let Some(kind_letter) = chars.next() else {
                    return Err(ChessError::InvalidFedString(format!("board row {row}")));
                };
                let color = parse_color(next.to_ascii_uppercase())?;
                let kind = PieceKind::from_letter(kind_letter).ok_or_else(|| {
                    ChessError::InvalidFedString(format!("piece letter {kind_letter}"))
                })?;
                let square = square_from_coords(file, rank).ok_or_else(|| {
                    ChessError::InvalidFedString(format!("board row {row} overflows the cross"))
                })?;
                state.board[square as usize] = Some(Piece { color, kind });
                file += 1;
            }
        }
    }

    Ok(())
}

fn parse_color(letter: char) -> Result<Color, ChessError> {
    Color::from_letter(letter)
        .ok_or_else(|| ChessError::InvalidFedString(format!("color letter {letter}")))
}

/// `K` for the kingside flag of a color, `Q` for the queenside one.
fn side_letter(flag: u8, color: Color) -> char {
    let kingside = CASTLING_MOVES
        .iter()
        .position(|entry| entry.color == color && entry.flag == flag)
        .map(|index| index % 2 == 0)
        .unwrap_or(false);
    if kingside {
        'K'
    } else {
        'Q'
    }
}
