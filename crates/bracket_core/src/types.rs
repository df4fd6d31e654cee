//! Candidate records entered into a bracket.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable unique identifier of a candidate (a recipe id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(String);

impl CandidateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CandidateId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CandidateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One entrant of the bracket.
///
/// Candidates are never mutated by the engine; it only moves them between
/// the pool, the displayed matchup and the round's winners. The serde
/// aliases accept the recipe service's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(alias = "recipe_id")]
    pub id: CandidateId,
    #[serde(alias = "recipe_title")]
    pub title: String,
    /// Display image reference (thumbnail URL or path)
    #[serde(alias = "recipe_thumbnail", default)]
    pub image: String,
}

impl Candidate {
    pub fn new(id: impl Into<String>, title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: CandidateId::new(id),
            title: title.into(),
            image: image.into(),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.id)
    }
}
