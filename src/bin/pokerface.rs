//! Classifies poker hands read from a file, one hand per line.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{error, info};

use pokerface::{Deck, ErrorPolicy, EvaluateOptions, Evaluation, evaluate_lines, read_lines};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// File with one hand per line, prompted for when omitted.
    path: Option<PathBuf>,
    /// Report invalid lines and keep going instead of stopping.
    #[arg(long, short)]
    keep_going: bool,
    /// Deal this many random hands instead of reading a file.
    #[arg(long, conflicts_with = "path")]
    deal: Option<usize>,
    /// Seed for dealt hands, defaults to the current time.
    #[arg(long, requires = "deal")]
    seed: Option<u64>,
    /// Increase logging verbosity (-v info, -vv debug).
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Some(count) = cli.deal {
        let seed = cli.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
        return deal(count, seed);
    }

    let path = match cli.path {
        Some(path) => path,
        None => prompt_path()?,
    };

    let policy = if cli.keep_going {
        ErrorPolicy::Report
    } else {
        ErrorPolicy::Abort
    };
    classify_file(&path, &EvaluateOptions::default().with_error_policy(policy))
}

fn prompt_path() -> Result<PathBuf> {
    println!("Welcome to Poker Face!");
    println!("To get started, enter the full file path of the file you would like evaluated");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read file path")?;

    let input = input.trim();
    if input.is_empty() {
        bail!("no file path given");
    }
    Ok(PathBuf::from(input))
}

fn classify_file(path: &Path, options: &EvaluateOptions) -> Result<()> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    info!("evaluating hands from {}", path.display());

    let mut read_error = None;
    let lines = read_lines(BufReader::new(file)).map_while(|line| {
        line.map_err(|err| read_error = Some(err)).ok()
    });

    let mut failures = 0;
    for result in evaluate_lines(lines, options) {
        match result {
            Ok(evaluation) => println!("{evaluation}"),
            Err(err) if options.error_policy == ErrorPolicy::Abort => {
                return Err(err).context(format!("invalid hand in {}", path.display()));
            }
            Err(err) => {
                error!("{err}: {:?}", err.input);
                failures += 1;
            }
        }
    }

    if let Some(err) = read_error {
        return Err(err).with_context(|| format!("cannot read {}", path.display()));
    }

    if failures > 0 {
        bail!("{failures} invalid hand(s) in {}", path.display());
    }
    Ok(())
}

fn deal(count: usize, seed: u64) -> Result<()> {
    info!("dealing {count} hand(s) with seed {seed}");
    let mut deck = Deck::new(seed);

    for _ in 0..count {
        let hand = match deck.deal_hand() {
            Ok(hand) => hand,
            Err(_) => {
                deck.reshuffle();
                deck.deal_hand()?
            }
        };
        println!("{}", Evaluation::of(hand));
    }
    Ok(())
}
