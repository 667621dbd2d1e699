mod config;
mod keys;
mod prompt;

use std::fs::File;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use typeahead::prelude::*;

use config::PromptConfig;
use prompt::Prompt;

#[derive(Parser, Debug)]
#[command(name = "typeahead")]
#[command(version)]
#[command(about = "A terminal prompt with predictive word completion")]
struct Args {
    /// Read settings from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also complete words from this word list (may be repeated)
    #[arg(short, long = "dictionary", value_name = "PATH")]
    dictionaries: Vec<PathBuf>,

    /// Show at most this many suggestions
    #[arg(short = 'n', long, value_name = "N")]
    max_suggestions: Option<usize>,

    /// Leave out the built-in word list
    #[arg(long)]
    no_builtin: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print suggestions for TEXT, one per line, and exit
    #[arg(long, value_name = "TEXT")]
    complete: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.log_file.as_deref())?;

    let config = settings(&args)?;
    let dictionary = config.dictionary().context("Failed to build dictionary")?;

    tracing::info!(
        words = dictionary.len(),
        max_suggestions = config.engine.max_suggestions,
        "Starting typeahead"
    );

    let engine = SuggestionEngine::with_config(dictionary, config.engine);

    if let Some(text) = args.complete {
        return print_suggestions(&engine, &FrequencyMap::default(), &text);
    }

    if !io::stdin().is_terminal() {
        return run_batch(&engine);
    }

    let mut prompt = Prompt::new(engine).context("Failed to set up terminal")?;
    let submitted = prompt.run().context("Terminal error")?;

    tracing::info!(lines = submitted.len(), "Exiting");

    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file));

            registry.with(layer).init();
        },
        None => {
            let layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);

            registry.with(layer).init();
        },
    }

    Ok(())
}

/// Combine the config file with command-line overrides.
fn settings(args: &Args) -> Result<PromptConfig> {
    let mut config = PromptConfig::load(args.config.as_deref())?;

    config.dictionaries.extend(args.dictionaries.iter().cloned());

    if let Some(max) = args.max_suggestions {
        config.engine.max_suggestions = max;
    }

    if args.no_builtin {
        config.builtin_words = false;
    }

    Ok(config)
}

fn print_suggestions(engine: &SuggestionEngine, learned: &FrequencyMap, text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();

    for suggestion in engine.compute_suggestions(learned, text) {
        writeln!(stdout, "{suggestion}")?;
    }

    Ok(())
}

/// Non-interactive mode: for each line of input, print the suggestions for it using what was
/// learned from the lines before it, then submit it.
fn run_batch(engine: &SuggestionEngine) -> Result<()> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut learned = FrequencyMap::default();

    for line in stdin.lines() {
        let line = line.context("Failed to read from stdin")?;
        let suggestions = engine.compute_suggestions(&learned, &line);

        writeln!(stdout, "{}", suggestions.join(" "))?;

        learned = record_submission(&line, &learned);
    }

    Ok(())
}
