pub mod bracket;
pub mod error;
pub mod game;
pub mod types;

pub use bracket::*;
pub use error::{BracketError, Result};
pub use game::*;
pub use types::*;

// =============================================================================
// Picker trait: implemented by anything that decides matchups (a person at a
// terminal, a scripted test, a random baseline)
// =============================================================================

/// Decides the winner of each displayed matchup.
pub trait Picker {
    /// Choose one of the candidates in `view.matchup`.
    ///
    /// Returns `None` when the picker gives up, which abandons the game.
    fn choose(&mut self, view: &BracketView<'_>) -> Option<CandidateId>;

    /// Name shown in logs and reports
    fn name(&self) -> &str;
}

/// Always takes the first-offered candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPicker;

impl Picker for FirstPicker {
    fn choose(&mut self, view: &BracketView<'_>) -> Option<CandidateId> {
        Some(view.matchup.first().id.clone())
    }

    fn name(&self) -> &str {
        "first"
    }
}

/// Takes the second candidate when there is one, the lone finalist otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecondPicker;

impl Picker for SecondPicker {
    fn choose(&mut self, view: &BracketView<'_>) -> Option<CandidateId> {
        let chosen = view.matchup.second().unwrap_or(view.matchup.first());
        Some(chosen.id.clone())
    }

    fn name(&self) -> &str {
        "second"
    }
}
