//! World-cup CLI
//!
//! Play a recipe bracket at the terminal or let a picker play it out.

use anyhow::{bail, Context, Result};
use bracket_core::{BracketState, FirstPicker, Picker, SecondPicker};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use worldcup::logging::log_filter;
use worldcup::source::{find_candidate, largest_bracket};
use worldcup::{
    CandidateSource, JsonFileSource, PromptPicker, RandomPicker, ResultHandoff, Session,
    SessionConfig, WorldcupConfig,
};

#[derive(Parser)]
#[command(name = "worldcup", about = "Recipe world-cup: pick your favourite recipe")]
struct Cli {
    /// Config file (defaults to ./worldcup.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a bracket
    Play {
        /// JSON array of recipes
        #[arg(long)]
        candidates: Option<PathBuf>,
        /// Bracket size (power of two)
        #[arg(long)]
        stage: Option<usize>,
        /// Shuffle seed
        #[arg(long)]
        seed: Option<u64>,
        /// Pick automatically instead of prompting
        #[arg(long, value_enum)]
        auto: Option<AutoPick>,
        /// Skip the bracket and confirm a single finalist by id
        #[arg(long)]
        finalist: Option<String>,
        /// Write the game record as JSON
        #[arg(long)]
        save: Option<PathBuf>,
        /// Print the game record as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Validate a candidate file
    Check {
        #[arg(long)]
        candidates: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AutoPick {
    First,
    Second,
    Random,
}

fn candidate_path(flag: Option<PathBuf>, config: &WorldcupConfig) -> Result<PathBuf> {
    match flag.or_else(|| config.candidates.clone()) {
        Some(path) => Ok(path),
        None => bail!("no candidate file: pass --candidates or set `candidates` in the config"),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_play(
    config: WorldcupConfig,
    candidates: Option<PathBuf>,
    stage: Option<usize>,
    seed: Option<u64>,
    auto: Option<AutoPick>,
    finalist: Option<String>,
    save: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let source = JsonFileSource::new(candidate_path(candidates, &config)?);
    let seed = seed.or(config.seed);

    let session = Session::new(SessionConfig {
        stage: stage.unwrap_or(config.stage),
        handoff: ResultHandoff::new(config.results_path.clone()),
        verbose: auto.is_some() && !json,
    });

    let mut picker: Box<dyn Picker> = match auto {
        Some(AutoPick::First) => Box::new(FirstPicker),
        Some(AutoPick::Second) => Box::new(SecondPicker),
        // Separate stream from the shuffle so a seeded run stays reproducible
        Some(AutoPick::Random) => Box::new(RandomPicker::new(make_rng(seed.map(|s| s ^ 1)))),
        None => Box::new(PromptPicker::new(io::stdin().lock(), io::stdout())),
    };

    let record = match finalist {
        Some(id) => {
            let pool = source.fetch_all()?;
            let state = BracketState::single_finalist(find_candidate(&pool, &id)?);
            session.run(state, picker.as_mut())?
        }
        None => session.play(&source, &mut make_rng(seed), picker.as_mut())?,
    };

    if json {
        println!("{}", record.to_json()?);
    } else {
        println!();
        record.print_report();
    }

    if let Some(path) = save {
        record
            .save(&path)
            .with_context(|| format!("saving game record to {}", path.display()))?;
        info!(path = %path.display(), "saved game record");
    }
    Ok(())
}

fn run_check(config: WorldcupConfig, candidates: Option<PathBuf>) -> Result<()> {
    let source = JsonFileSource::new(candidate_path(candidates, &config)?);
    let pool = source.fetch_all()?;

    println!("{}: {} candidates", source.path().display(), pool.len());
    match largest_bracket(pool.len()) {
        Some(size) => println!("Largest playable bracket: {}", size),
        None => println!("No playable bracket"),
    }
    if pool.len() < config.stage {
        println!(
            "Warning: configured stage {} needs {} more candidates",
            config.stage,
            config.stage - pool.len()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = WorldcupConfig::resolve(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            candidates,
            stage,
            seed,
            auto,
            finalist,
            save,
            json,
        } => run_play(config, candidates, stage, seed, auto, finalist, save, json),
        Command::Check { candidates } => run_check(config, candidates),
    }
}
