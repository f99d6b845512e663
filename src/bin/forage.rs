//! forage - diet extraction benchmark CLI
//!
//! # Usage
//!
//! ```bash
//! # Run the baseline extractor over a data directory and score it
//! forage run --data-dir public_test --baseline -k 10
//!
//! # Run your own extractor with four workers on a subset of animals
//! forage run --animals "cat,polar bear" --workers 4
//!
//! # Score an existing prediction file against ground truth
//! forage eval --tgt-file public_test/labels.json --pred-file public_predictions.json -k 10
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use forage::eval::evaluate_predictions;
use forage::phrase::Lemmatizer;
use forage::runner::{run, RunConfig};
use forage::{corpus, MAX_CUTOFF};

/// Diet extraction benchmark - extract what animals eat and score it
#[derive(Parser)]
#[command(name = "forage")]
#[command(
    author,
    version,
    about = "Diet extraction benchmark - extract what animals eat and score it",
    long_about = r#"
forage - a benchmark harness for diet extraction

Given an animal and its retrieved documents, an extractor returns the things
the animal eats, ranked by score. Predictions are scored against ground truth
with precision/recall/F1 at a cutoff k.

DATA DIRECTORY LAYOUT:
  documents/<animal>.jsonl.gz   one gzip JSONL document file per animal
  animals.txt                   one animal name per line
  labels.json                   optional ground truth (animal -> phrases)

EXTRACTORS:
  stub      - your solution (default); fill in StubExtractor::extract
  pattern   - baseline "<animal> eats <noun>" search (--baseline)

EXAMPLES:
  forage run --data-dir public_test --baseline
  forage run --animals "cat,polar bear" --workers 4
  forage eval --tgt-file labels.json --pred-file predictions.json -k 10
"#
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an extractor over a data directory and score the predictions
    #[command(visible_alias = "r")]
    Run(RunArgs),

    /// Score an existing prediction file against a ground-truth file
    #[command(visible_alias = "e")]
    Eval(EvalArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Data directory containing documents/, animals.txt and optional labels.json
    #[arg(long, default_value = "public_test")]
    data_dir: PathBuf,

    /// Where to write the ranked predictions
    #[arg(long, default_value = "public_predictions.json")]
    out_file: PathBuf,

    /// Evaluation cutoff: only the top-k predictions count
    #[arg(short, long, default_value_t = 30, value_parser = parse_cutoff)]
    k: usize,

    /// Comma-separated subset of animals to process (default: all)
    #[arg(long)]
    animals: Option<String>,

    /// Use the baseline pattern extractor instead of the user solution
    #[arg(long)]
    baseline: bool,

    /// Number of extraction workers
    #[arg(long, default_value_t = 1)]
    workers: usize,
}

#[derive(Args)]
struct EvalArgs {
    /// Ground-truth JSON file (animal -> list of things eaten)
    #[arg(long)]
    tgt_file: PathBuf,

    /// Prediction JSON file (animal -> ranked phrase list)
    #[arg(long)]
    pred_file: PathBuf,

    /// Evaluation cutoff: only the top-k predictions count
    #[arg(short, long, default_value_t = 30, value_parser = parse_cutoff)]
    k: usize,
}

fn parse_cutoff(raw: &str) -> Result<usize, String> {
    let k: usize = raw
        .parse()
        .map_err(|_| format!("\"{}\" is not a number", raw))?;
    if k == 0 || k > MAX_CUTOFF {
        return Err(format!("cutoff must be in 1..={}", MAX_CUTOFF));
    }
    Ok(k)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Run(args) => cmd_run(args),
        Commands::Eval(args) => cmd_eval(args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_run(args: RunArgs) -> forage::Result<()> {
    let animals = args.animals.as_deref().and_then(|list| {
        if list.eq_ignore_ascii_case("all") {
            return None;
        }
        Some(
            list.split(',')
                .map(|name| name.trim().to_lowercase())
                .filter(|name| !name.is_empty())
                .collect(),
        )
    });

    let config = RunConfig {
        data_dir: args.data_dir,
        out_file: args.out_file,
        k: args.k,
        animals,
        baseline: args.baseline,
        workers: args.workers,
    };
    let lemmatizer = Lemmatizer::new();
    run(&lemmatizer, &config)?;
    Ok(())
}

fn cmd_eval(args: EvalArgs) -> forage::Result<()> {
    let targets = corpus::read_ground_truth_file(&args.tgt_file)?;
    let predictions = corpus::read_ground_truth_file(&args.pred_file)?;
    let lemmatizer = Lemmatizer::new();
    evaluate_predictions(&lemmatizer, &targets, &predictions, args.k, true)?;
    Ok(())
}
