//! Terminal-oriented board renderer.
//!
//! Creates a human-readable view of the cross-shaped board for debugging,
//! tests, and diagnostics in text environments. Pieces render as a
//! lowercase color letter plus an uppercase piece letter (`yR` is the
//! yellow rook); the cut corners render as blank space.

use crate::game_state::game_state::GameState;
use crate::game_state::square_table::{square_from_coords, BOARD_SPAN};

/// Render the board to a string for terminal output, row 14 at the top.
pub fn render_game_state(state: &GameState) -> String {
    let mut out = String::new();

    out.push_str(&file_header());

    for rank in (0..BOARD_SPAN).rev() {
        out.push_str(&format!("{:>2} ", rank + 1));

        for file in 0..BOARD_SPAN {
            match square_from_coords(file, rank) {
                None => out.push_str("   "),
                Some(square) => match state.piece_at(square) {
                    None => out.push_str(" · "),
                    Some(piece) => {
                        out.push(piece.color.letter().to_ascii_lowercase());
                        out.push(piece.kind.letter());
                        out.push(' ');
                    }
                },
            }
        }

        out.push_str(&format!("{:>2}\n", rank + 1));
    }

    out.push_str(&file_header());
    out
}

fn file_header() -> String {
    let mut header = String::from("   ");
    for file in 0..BOARD_SPAN {
        header.push(' ');
        header.push(char::from(b'a' + file as u8));
        header.push(' ');
    }
    header.push('\n');
    header
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_render_shows_all_four_armies() {
        let rendered = render_game_state(&GameState::new_game());
        assert!(rendered.contains("yR"));
        assert!(rendered.contains("rK"));
        assert!(rendered.contains("bQ"));
        assert!(rendered.contains("gN"));
        // Fifteen rows of board plus two header lines.
        assert_eq!(rendered.lines().count(), 16);
    }

    #[test]
    fn empty_interior_renders_as_dots() {
        let rendered = render_game_state(&GameState::new_game());
        let row_8 = rendered
            .lines()
            .find(|line| line.starts_with(" 8 "))
            .expect("row 8 present");
        assert!(row_8.contains('·'));
        assert!(row_8.contains("bK"));
        assert!(row_8.contains("gQ"));
    }
}
