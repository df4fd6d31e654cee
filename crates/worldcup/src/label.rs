//! Round labels shown above each matchup

use bracket_core::BracketView;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundLabel {
    /// Stage 2: the last pair
    Final,
    /// Stage 1: a lone finalist awaiting confirmation
    Winner,
    /// Any earlier round, with the 1-based number of the current matchup
    Round {
        stage: usize,
        match_no: usize,
        matches: usize,
    },
}

pub fn round_label(view: &BracketView<'_>) -> RoundLabel {
    match view.stage_size {
        1 => RoundLabel::Winner,
        2 => RoundLabel::Final,
        stage => RoundLabel::Round {
            stage,
            match_no: view.pick_count_in_round + 1,
            matches: view.picks_in_round(),
        },
    }
}

impl fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundLabel::Final => write!(f, "Final"),
            RoundLabel::Winner => write!(f, "Winner"),
            RoundLabel::Round {
                stage,
                match_no,
                matches,
            } => write!(f, "Round of {} ({}/{})", stage, match_no, matches),
        }
    }
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod label_tests;
