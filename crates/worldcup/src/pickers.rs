//! Pickers that drive a game: a person at a terminal or a random baseline

use bracket_core::{BracketView, CandidateId, Picker};
use rand::seq::IteratorRandom;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::warn;

use crate::label::round_label;

/// Picks uniformly at random among the displayed candidates.
#[derive(Debug, Clone)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn choose(&mut self, view: &BracketView<'_>) -> Option<CandidateId> {
        view.matchup
            .iter()
            .choose(&mut self.rng)
            .map(|c| c.id.clone())
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Prompts on `output` and reads `1`, `2` or `q` from `input`.
pub struct PromptPicker<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> PromptPicker<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, view: &BracketView<'_>) -> std::io::Result<Option<CandidateId>> {
        let candidates: Vec<_> = view.matchup.iter().collect();

        writeln!(self.output)?;
        writeln!(self.output, "== {} ==", round_label(view))?;
        for (i, candidate) in candidates.iter().enumerate() {
            writeln!(self.output, "  [{}] {}", i + 1, candidate.title)?;
        }

        let mut line = String::new();
        loop {
            write!(self.output, "Pick 1-{} (q to quit): ", candidates.len())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let answer = line.trim();
            if answer.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=candidates.len()).contains(&n) => {
                    return Ok(Some(candidates[n - 1].id.clone()));
                }
                _ => writeln!(self.output, "Not a choice: {:?}", answer)?,
            }
        }
    }
}

impl<I: BufRead, O: Write> Picker for PromptPicker<I, O> {
    fn choose(&mut self, view: &BracketView<'_>) -> Option<CandidateId> {
        match self.prompt(view) {
            Ok(choice) => choice,
            Err(e) => {
                warn!(error = %e, "failed to read pick");
                None
            }
        }
    }

    fn name(&self) -> &str {
        "prompt"
    }
}
