//! Candidate sources
//!
//! The bracket engine never loads candidates itself; the runner fetches the
//! full pool from a [`CandidateSource`] and hands it to
//! [`BracketState::initialize`](bracket_core::BracketState::initialize).

use bracket_core::{Candidate, CandidateId};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Result, WorldcupError};

/// Supplies the full, unordered candidate pool.
pub trait CandidateSource {
    fn fetch_all(&self) -> Result<Vec<Candidate>>;
}

impl CandidateSource for Vec<Candidate> {
    fn fetch_all(&self) -> Result<Vec<Candidate>> {
        ensure_unique(self)?;
        Ok(self.clone())
    }
}

/// Reads a JSON array of recipe records.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CandidateSource for JsonFileSource {
    fn fetch_all(&self) -> Result<Vec<Candidate>> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| WorldcupError::io(&self.path, e))?;
        let candidates: Vec<Candidate> =
            serde_json::from_str(&contents).map_err(|e| WorldcupError::parse(&self.path, e))?;
        ensure_unique(&candidates)?;

        info!(
            path = %self.path.display(),
            count = candidates.len(),
            "loaded candidates"
        );
        Ok(candidates)
    }
}

/// Reject pools where two candidates share an id.
pub fn ensure_unique(candidates: &[Candidate]) -> Result<()> {
    let mut seen: HashSet<&CandidateId> = HashSet::with_capacity(candidates.len());
    for candidate in candidates {
        if !seen.insert(&candidate.id) {
            return Err(WorldcupError::DuplicateCandidate(candidate.id.to_string()));
        }
    }
    Ok(())
}

/// Largest bracket size a pool of `available` candidates can fill
pub fn largest_bracket(available: usize) -> Option<usize> {
    if available == 0 {
        return None;
    }
    let size = 1usize << (usize::BITS - 1 - available.leading_zeros());
    debug!(available, size, "largest bracket");
    Some(size)
}

/// Find a candidate by id, e.g. a finalist carried over from another view.
pub fn find_candidate(candidates: &[Candidate], id: &str) -> Result<Candidate> {
    candidates
        .iter()
        .find(|c| c.id.as_str() == id)
        .cloned()
        .ok_or_else(|| WorldcupError::UnknownCandidate(id.to_string()))
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
