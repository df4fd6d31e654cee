//! Owning controller around the pure bracket transitions.

use crate::bracket::{BracketState, Transition, TournamentResult};
use crate::error::{BracketError, Result};
use crate::types::CandidateId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingPick(BracketState),
    Terminal(TournamentResult),
}

/// Holds the current phase of one game and applies picks to it.
///
/// Picks are serialized by `&mut self`; once the game reaches
/// [`Phase::Terminal`] every further pick is rejected and the stored
/// result stays as it was.
#[derive(Debug, Clone)]
pub struct Bracket {
    phase: Phase,
    total_picks: usize,
}

impl Bracket {
    pub fn new(state: BracketState) -> Self {
        Self {
            phase: Phase::AwaitingPick(state),
            total_picks: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Current snapshot, or `None` once the game is over
    pub fn state(&self) -> Option<&BracketState> {
        match &self.phase {
            Phase::AwaitingPick(state) => Some(state),
            Phase::Terminal(_) => None,
        }
    }

    pub fn result(&self) -> Option<&TournamentResult> {
        match &self.phase {
            Phase::AwaitingPick(_) => None,
            Phase::Terminal(result) => Some(result),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Terminal(_))
    }

    /// Picks applied so far across all rounds.
    pub fn total_picks(&self) -> usize {
        self.total_picks
    }

    pub fn pick(&mut self, chosen: &CandidateId) -> Result<&Phase> {
        let state = match &self.phase {
            Phase::AwaitingPick(state) => state,
            Phase::Terminal(result) => {
                return Err(BracketError::InvalidTransition(format!(
                    "tournament already won by {}",
                    result.winner_id()
                )));
            }
        };

        self.phase = match state.pick(chosen)? {
            Transition::Continue(next) => Phase::AwaitingPick(next),
            Transition::Finished(result) => Phase::Terminal(result),
        };
        self.total_picks += 1;
        Ok(&self.phase)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
