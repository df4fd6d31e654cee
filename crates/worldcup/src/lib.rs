//! Recipe World-Cup runner
//!
//! This crate wraps the bracket engine with everything a playable game needs:
//! - Loading the candidate pool from a recipe JSON dump
//! - Round labels for each matchup ("Round of 16 (3/8)", "Final")
//! - Handing the winner off to the results view
//!
//! # Usage
//!
//! ```bash
//! # Play a 16-recipe bracket at the terminal
//! cargo run -p worldcup -- play --candidates recipes.json
//!
//! # Let the computer pick, with a fixed shuffle
//! cargo run -p worldcup -- play --candidates recipes.json --stage 8 --seed 7 --auto random
//! ```

pub mod config;
pub mod error;
mod label;
pub mod logging;
pub mod pickers;
mod results;
mod session;
pub mod source;

pub use config::WorldcupConfig;
pub use error::{Result, WorldcupError};
pub use label::*;
pub use pickers::{PromptPicker, RandomPicker};
pub use results::*;
pub use session::*;
pub use source::{CandidateSource, JsonFileSource};
