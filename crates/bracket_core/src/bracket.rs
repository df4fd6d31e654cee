//! Bracket state and its transition function.
//!
//! A [`BracketState`] is an immutable snapshot: [`BracketState::pick`]
//! returns either the next snapshot or the terminal [`TournamentResult`],
//! leaving the receiver untouched. Whoever drives the game owns the current
//! snapshot and replaces it after every pick.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, info};

use crate::error::{BracketError, Result};
use crate::types::{Candidate, CandidateId};

/// The candidates currently displayed for a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matchup {
    /// Two candidates compete, one is eliminated.
    Pair(Candidate, Candidate),
    /// A lone finalist is shown at stage 1. Any pick on it ends the game
    /// without a comparison.
    Single(Candidate),
}

impl Matchup {
    pub fn first(&self) -> &Candidate {
        match self {
            Matchup::Pair(a, _) | Matchup::Single(a) => a,
        }
    }

    pub fn second(&self) -> Option<&Candidate> {
        match self {
            Matchup::Pair(_, b) => Some(b),
            Matchup::Single(_) => None,
        }
    }

    fn len(&self) -> usize {
        match self {
            Matchup::Pair(..) => 2,
            Matchup::Single(_) => 1,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        std::iter::once(self.first()).chain(self.second())
    }

    /// Find the displayed candidate with the given id
    pub fn find(&self, id: &CandidateId) -> Option<&Candidate> {
        self.iter().find(|c| &c.id == id)
    }
}

/// Terminal outcome of a bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentResult {
    pub winner: Candidate,
}

impl TournamentResult {
    pub fn winner_id(&self) -> &CandidateId {
        &self.winner.id
    }
}

/// Outcome of a single pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The game goes on with a new snapshot
    Continue(BracketState),
    /// The pick decided the tournament
    Finished(TournamentResult),
}

/// Snapshot of a bracket awaiting a pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketState {
    matchup: Matchup,
    /// Not-yet-paired remainder of the current round
    pool: VecDeque<Candidate>,
    winners_of_round: Vec<Candidate>,
    stage_size: usize,
    pick_count_in_round: usize,
}

impl BracketState {
    /// Shuffle `pool` with `rng`, keep the first `requested_size` candidates
    /// and present the first pair.
    pub fn initialize<R: Rng + ?Sized>(
        mut pool: Vec<Candidate>,
        requested_size: usize,
        rng: &mut R,
    ) -> Result<Self> {
        validate_size(requested_size, pool.len())?;
        pool.shuffle(rng);
        pool.truncate(requested_size);
        Self::from_ordered(pool)
    }

    /// Build a bracket from candidates in the exact order given, without
    /// shuffling. The length must be a positive power of two.
    pub fn from_ordered(pool: Vec<Candidate>) -> Result<Self> {
        let stage_size = pool.len();
        validate_size(stage_size.max(1), stage_size)?;

        let mut pool = VecDeque::from(pool);
        let matchup = if stage_size == 1 {
            let only = pool.pop_front().ok_or(BracketError::InsufficientCandidates {
                requested: 1,
                available: 0,
            })?;
            Matchup::Single(only)
        } else {
            draw_pair(&mut pool)?
        };

        info!(stage = stage_size, "bracket initialized");
        Ok(Self {
            matchup,
            pool,
            winners_of_round: Vec::new(),
            stage_size,
            pick_count_in_round: 0,
        })
    }

    /// Stage-1 state holding one leftover finalist.
    pub fn single_finalist(finalist: Candidate) -> Self {
        Self {
            matchup: Matchup::Single(finalist),
            pool: VecDeque::new(),
            winners_of_round: Vec::new(),
            stage_size: 1,
            pick_count_in_round: 0,
        }
    }

    pub fn matchup(&self) -> &Matchup {
        &self.matchup
    }

    pub fn stage_size(&self) -> usize {
        self.stage_size
    }

    pub fn pick_count_in_round(&self) -> usize {
        self.pick_count_in_round
    }

    /// Candidates still waiting to be paired this round.
    pub fn pool(&self) -> impl Iterator<Item = &Candidate> {
        self.pool.iter()
    }

    pub fn winners_of_round(&self) -> &[Candidate] {
        &self.winners_of_round
    }

    /// Number of candidates still in contention.
    pub fn remaining(&self) -> usize {
        self.pool.len() + self.winners_of_round.len() + self.matchup.len()
    }

    pub fn view(&self) -> BracketView<'_> {
        BracketView {
            matchup: &self.matchup,
            stage_size: self.stage_size,
            pick_count_in_round: self.pick_count_in_round,
            remaining: self.remaining(),
        }
    }

    /// Resolve the displayed matchup in favour of `chosen`.
    ///
    /// Fails with [`BracketError::InvalidTransition`] if `chosen` is not one
    /// of the displayed candidates.
    pub fn pick(&self, chosen: &CandidateId) -> Result<Transition> {
        let winner = self.matchup.find(chosen).cloned().ok_or_else(|| {
            BracketError::InvalidTransition(format!("{} is not in the current matchup", chosen))
        })?;

        if let Matchup::Single(_) = self.matchup {
            info!(winner = %winner.id, "single finalist confirmed");
            return Ok(Transition::Finished(TournamentResult { winner }));
        }

        if self.stage_size == 2 {
            info!(winner = %winner.id, "final decided");
            return Ok(Transition::Finished(TournamentResult { winner }));
        }

        debug!(
            stage = self.stage_size,
            pick = self.pick_count_in_round + 1,
            winner = %winner.id,
            "pick"
        );

        let mut next = self.clone();
        next.winners_of_round.push(winner);
        next.pick_count_in_round += 1;

        if next.pool.is_empty() {
            // Round complete: this round's winners form the next pool
            next.pool = std::mem::take(&mut next.winners_of_round).into();
            next.stage_size /= 2;
            next.pick_count_in_round = 0;
            info!(stage = next.stage_size, "round complete");
        }
        next.matchup = draw_pair(&mut next.pool)?;

        Ok(Transition::Continue(next))
    }
}

/// Read-only projection of a bracket for rendering.
#[derive(Debug, Clone, Copy)]
pub struct BracketView<'a> {
    pub matchup: &'a Matchup,
    pub stage_size: usize,
    pub pick_count_in_round: usize,
    pub remaining: usize,
}

impl BracketView<'_> {
    /// Number of picks needed to finish the current round.
    pub fn picks_in_round(&self) -> usize {
        (self.stage_size / 2).max(1)
    }
}

fn validate_size(requested: usize, available: usize) -> Result<()> {
    if !requested.is_power_of_two() {
        return Err(BracketError::InvalidBracketSize(requested));
    }
    if available < requested {
        return Err(BracketError::InsufficientCandidates {
            requested,
            available,
        });
    }
    Ok(())
}

fn draw_pair(pool: &mut VecDeque<Candidate>) -> Result<Matchup> {
    match (pool.pop_front(), pool.pop_front()) {
        (Some(a), Some(b)) => Ok(Matchup::Pair(a, b)),
        _ => Err(BracketError::InvalidTransition(
            "pool cannot supply a full pair".to_string(),
        )),
    }
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod bracket_tests;
