//! Command implementations for the Emend CLI.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use crate::checker::CheckerFactory;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::TextSource;
use crate::distance::EditCosts;
use crate::error::{EmendError, Result};

/// Execute a CLI command.
pub fn execute_command(args: EmendArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check(check_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest(suggest_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Correct the input words.
fn check(args: CheckArgs, cli_args: &EmendArgs) -> Result<()> {
    let factory = open_corpus(&args.corpus, cli_args)?;
    let costs = load_costs(args.costs_file.as_deref(), args.threshold)?;
    let checker = factory.create_spell_checker(costs)?;

    let input = args.input.join(" ");
    let start = Instant::now();
    let output = checker.check(&input)?;

    let result = CheckResult {
        input,
        output,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    output_result(&result, cli_args)
}

/// List correction candidates for a single word.
fn suggest(args: SuggestArgs, cli_args: &EmendArgs) -> Result<()> {
    let factory = open_corpus(&args.corpus, cli_args)?;
    let costs = load_costs(args.costs_file.as_deref(), args.threshold)?;
    let checker = factory.create_spell_checker(costs)?;

    let candidates = checker.suggest(&args.word)?;
    let result = SuggestResult {
        word: args.word,
        candidates,
    };
    output_result(&result, cli_args)
}

/// Show dictionary statistics.
fn show_stats(args: StatsArgs, cli_args: &EmendArgs) -> Result<()> {
    let factory = open_corpus(&args.corpus, cli_args)?;
    let checker = factory.create_spell_checker(None)?;
    let stats = checker.stats()?;
    output_result(&stats, cli_args)
}

/// Open the corpus file behind a block-reading source.
fn open_corpus(path: &Path, cli_args: &EmendArgs) -> Result<CheckerFactory> {
    if cli_args.verbosity() > 1 {
        println!("Building dictionary from: {}", path.display());
    }

    let file = File::open(path)
        .map_err(|e| EmendError::corpus(format!("cannot open corpus {}: {e}", path.display())))?;
    Ok(CheckerFactory::from_source(Box::new(TextSource::new(
        BufReader::new(file),
    ))))
}

/// Load the cost model from an optional JSON file, applying the threshold
/// override on top.
fn load_costs(costs_file: Option<&Path>, threshold: Option<usize>) -> Result<Option<EditCosts>> {
    let mut costs = match costs_file {
        Some(path) => {
            let file = File::open(path)?;
            let costs: EditCosts = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                EmendError::config(format!("invalid costs file {}: {e}", path.display()))
            })?;
            Some(costs)
        }
        None => None,
    };

    if let Some(threshold) = threshold {
        costs = Some(costs.unwrap_or_default().with_threshold(threshold));
    }

    Ok(costs)
}
