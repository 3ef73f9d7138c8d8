//! Move-generator abstraction and generated-move records.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

/// Per-move metadata computed by the annotating generator. With four armies
/// a single move can put several opponents in check at once, so the record
/// keeps one flag per color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub checks_color: [bool; Color::COUNT],
}

impl MoveAnnotations {
    /// Whether the move checks at least one opponent.
    #[inline]
    pub fn gives_check(&self) -> bool {
        self.checks_color.iter().any(|&checked| checked)
    }
}

/// One legal move together with the state it produces.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub move_description: u64,
    pub game_after_move: GameState,
    pub annotations: MoveAnnotations,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState)
        -> Result<Vec<GeneratedMove>, ChessError>;
}
