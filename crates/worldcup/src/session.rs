//! Session runner: feeds picks from a [`Picker`] into a bracket until a
//! winner is crowned

use bracket_core::{Bracket, BracketState, Phase, Picker};
use rand::Rng;
use tracing::{debug, info};

use crate::error::{Result, WorldcupError};
use crate::label::round_label;
use crate::results::{GameRecord, PickRecord, ResultHandoff};
use crate::source::CandidateSource;

/// Configuration for a session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Number of candidates entering the first round
    pub stage: usize,
    /// Where the winner is handed off
    pub handoff: ResultHandoff,
    /// Print every pick to stdout
    pub verbose: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stage: crate::config::DEFAULT_STAGE,
            handoff: ResultHandoff::default(),
            verbose: false,
        }
    }
}

/// Runs world-cup games
pub struct Session {
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Fetch the pool, shuffle it with `rng` and play a full game.
    pub fn play<R: Rng + ?Sized>(
        &self,
        source: &dyn CandidateSource,
        rng: &mut R,
        picker: &mut dyn Picker,
    ) -> Result<GameRecord> {
        let pool = source.fetch_all()?;
        let state = BracketState::initialize(pool, self.config.stage, rng)?;
        self.run(state, picker)
    }

    /// Play `state` to completion.
    ///
    /// Returns [`WorldcupError::Aborted`] if the picker gives up.
    pub fn run(&self, state: BracketState, picker: &mut dyn Picker) -> Result<GameRecord> {
        let bracket_size = state.stage_size();
        let mut bracket = Bracket::new(state);
        let mut picks = Vec::with_capacity(bracket_size);

        info!(bracket_size, picker = picker.name(), "game started");

        let result = loop {
            let state = match bracket.phase() {
                Phase::AwaitingPick(state) => state,
                Phase::Terminal(result) => break result.clone(),
            };

            let view = state.view();
            let round = round_label(&view).to_string();
            let winner = picker.choose(&view).ok_or(WorldcupError::Aborted)?;
            let loser = view
                .matchup
                .iter()
                .map(|c| &c.id)
                .find(|id| **id != winner)
                .cloned();

            debug!(%round, %winner, "picked");
            if self.config.verbose {
                match &loser {
                    Some(loser) => println!("{}: {} over {}", round, winner, loser),
                    None => println!("{}: {}", round, winner),
                }
            }

            picks.push(PickRecord {
                round,
                stage: view.stage_size,
                winner: winner.clone(),
                loser,
            });
            bracket.pick(&winner)?;
        };

        let results_route = self.config.handoff.route(&result);
        info!(winner = %result.winner_id(), picks = picks.len(), "game finished");

        Ok(GameRecord {
            bracket_size,
            winner: result.winner,
            picks,
            results_route,
        })
    }
}

/// Quick utility to play a single game from an already ordered bracket
pub fn quick_game(state: BracketState, picker: &mut dyn Picker) -> Result<GameRecord> {
    Session::new(SessionConfig::default()).run(state, picker)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
