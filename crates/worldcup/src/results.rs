//! Game records and the hand-off of the winner to the results view

use bracket_core::{Candidate, CandidateId, TournamentResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::DEFAULT_RESULTS_PATH;
use crate::error::{Result, WorldcupError};

/// A single resolved matchup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickRecord {
    /// Round label at the time of the pick, e.g. "Round of 8 (2/4)"
    pub round: String,
    pub stage: usize,
    pub winner: CandidateId,
    /// None for a lone finalist
    pub loser: Option<CandidateId>,
}

/// Complete record of one world-cup game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Bracket size of the first round
    pub bracket_size: usize,
    pub winner: Candidate,
    /// Every pick in order
    pub picks: Vec<PickRecord>,
    /// Route of the results view carrying the winner id
    pub results_route: String,
}

impl GameRecord {
    pub fn total_picks(&self) -> usize {
        self.picks.len()
    }

    /// Pretty-printed JSON, as written by [`GameRecord::save`]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| WorldcupError::Parse {
            path: "<game record>".into(),
            message: e.to_string(),
        })
    }

    /// Save record to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| WorldcupError::io(path, e))
    }

    /// Load record from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| WorldcupError::io(path, e))?;
        serde_json::from_str(&contents).map_err(|e| WorldcupError::parse(path, e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Recipe World-Cup ({} candidates) ===\n\n",
            self.bracket_size
        ));

        report.push_str(&format!(
            "{:<22} {:<20} {:<20}\n",
            "Round", "Winner", "Eliminated"
        ));
        report.push_str(&"-".repeat(62));
        report.push('\n');

        for pick in &self.picks {
            let loser = pick.loser.as_ref().map(|id| id.as_str()).unwrap_or("-");
            report.push_str(&format!(
                "{:<22} {:<20} {:<20}\n",
                pick.round,
                pick.winner.as_str(),
                loser
            ));
        }

        report.push_str(&format!(
            "\nWinner: {} after {} picks\n",
            self.winner,
            self.total_picks()
        ));
        report.push_str(&format!("Results: {}\n", self.results_route));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

/// Builds the results-view route for a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultHandoff {
    results_path: String,
}

impl Default for ResultHandoff {
    fn default() -> Self {
        Self::new(DEFAULT_RESULTS_PATH)
    }
}

impl ResultHandoff {
    pub fn new(results_path: impl Into<String>) -> Self {
        Self {
            results_path: results_path.into(),
        }
    }

    /// `<results_path>?winnerId=<id>`, with the id percent-encoded
    pub fn route(&self, result: &TournamentResult) -> String {
        format!(
            "{}?winnerId={}",
            self.results_path,
            urlencoding::encode(result.winner_id().as_str())
        )
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
