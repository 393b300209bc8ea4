use anyhow::{Context, Result};
use clap::Parser;
use poker_odds::cli;
use poker_odds::hand::{validate_holdem, Board, HoleCards};
use poker_odds::odds::{Estimator, Method, SAMPLE_SIZE};
use std::io;

/// Texas Hold'em hand odds calculator.
///
/// Without --hole the cards are asked for interactively.
#[derive(Debug, Parser)]
#[clap(version)]
struct Cli {
    /// Hole cards, e.g. "AS TH".
    #[clap(long)]
    hole: Option<String>,
    /// Community cards (0, 2, 3, 4 or 5), e.g. "QS JS TS".
    #[clap(long, short, default_value = "")]
    board: String,
    /// Completions to sample before the flop.
    #[clap(long, short, default_value_t = SAMPLE_SIZE)]
    samples: usize,
    /// Seed for reproducible sampling.
    #[clap(long)]
    seed: Option<u64>,
    /// Worker threads; defaults to the available parallelism.
    #[clap(long, short)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Cli::parse();

    let (hole, board) = match &args.hole {
        Some(hole) => {
            let hole: HoleCards = hole.parse().context("invalid --hole")?;
            let board: Board = args.board.parse().context("invalid --board")?;
            validate_holdem(&hole, &board)?;
            Method::for_board(board.len())?;
            (hole, board)
        }
        None => cli::prompt(io::stdin().lock(), &mut io::stdout())?,
    };

    let threads = args
        .threads
        .or_else(|| std::thread::available_parallelism().ok().map(|n| n.get()))
        .unwrap_or(1);
    let mut estimator = Estimator::new().with_sample_size(args.samples).with_threads(threads);
    if let Some(seed) = args.seed {
        estimator = estimator.with_seed(seed);
    }

    let dist = estimator.estimate(&hole, &board)?;
    println!();
    cli::report(&mut io::stdout().lock(), &dist)?;
    Ok(())
}
