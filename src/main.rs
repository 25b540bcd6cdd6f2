mod config;
mod dictionary;
mod error;
mod game;
mod models;
mod report;

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use anyhow::Result;
use clap::Parser;
use config::Config;
use dictionary::Dictionary;
use error::SolverError;
use game::{Grid, WordFinder};
use models::SearchMode;
use report::Report;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Find every dictionary word hidden in a letter grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to write the found words to, longest first
    output: Option<PathBuf>,

    /// Board file: one row per line, letters separated by commas [env: BOARD_PATH]
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Word list file: one word per line [env: WORD_LIST_PATH]
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// How start cells are explored [env: SEARCH_MODE]
    #[arg(short, long, value_enum)]
    mode: Option<SearchMode>,

    /// Skip dictionary words shorter than this [env: MIN_WORD_LENGTH]
    #[arg(long)]
    min_word_length: Option<usize>,
}

impl Cli {
    /// Variables that a flag on this command line replaces
    fn overrides(&self, key: &str) -> bool {
        match key {
            "BOARD_PATH" => self.board.is_some(),
            "WORD_LIST_PATH" => self.words.is_some(),
            "SEARCH_MODE" => self.mode.is_some(),
            "MIN_WORD_LENGTH" => self.min_word_length.is_some(),
            _ => false,
        }
    }

    /// Build the configuration from `lookup`, with command-line flags taking
    /// precedence. A variable replaced by a flag is never parsed.
    fn resolve_config<F>(&self, lookup: F) -> std::result::Result<Config, SolverError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config =
            Config::from_lookup(|key| if self.overrides(key) { None } else { lookup(key) })?;
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut Config) {
        if let Some(board) = &self.board {
            config.input.board_path = board.clone();
        }
        if let Some(words) = &self.words {
            config.input.word_list_path = words.clone();
        }
        if let Some(mode) = self.mode {
            config.search.mode = mode;
        }
        if let Some(min_word_length) = self.min_word_length {
            config.input.min_word_length = min_word_length;
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grid_word_solver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let report = run_with(Cli::parse(), config::env_lookup()).await?;
    println!("{}", report.summary());

    Ok(())
}

/// Resolve the output path and configuration for `cli`, then solve
async fn run_with<F>(cli: Cli, lookup: F) -> Result<Report>
where
    F: Fn(&str) -> Option<String>,
{
    let output = cli.output.clone().ok_or(SolverError::MissingOutputPath)?;

    let config = cli.resolve_config(lookup)?;
    tracing::info!("Configuration loaded");

    solve(&config, &output).await
}

/// Load both inputs, search, then write the output file.
/// Nothing is written unless both inputs load.
async fn solve(config: &Config, output: &Path) -> Result<Report> {
    let (dictionary, grid) = tokio::try_join!(
        Dictionary::load(&config.input.word_list_path, config.input.min_word_length),
        Grid::load(&config.input.board_path),
    )?;

    let dictionary = Arc::new(dictionary);
    let finder = WordFinder::new(config.search.mode);
    let found = finder.find_words(dictionary.clone(), &grid).await?;
    tracing::debug!(
        "{} of {} dictionary words found",
        dictionary.found_words().len(),
        dictionary.len()
    );

    let report = Report::new(found);
    report.write_to(output).await?;

    Ok(report)
}
