use std::{
    fs::File,
    io::{stdin, Read, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{builder::RangedU64ValueParser, Parser};
use env_logger::Env;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use tower_patience::{
    config::DEFAULT_RELAXED_BUDGET, deal, notation, Board, Mode, Move, SearchReport,
    SolveResult, Solver, SolverConfig,
};

/// Solve tower patience boards, or deal new ones.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File containing the board to solve, one stack per line ("-" for stdin)
    #[arg(short, long)]
    infile: Option<String>,

    /// Where to save the board before solving
    #[arg(short, long)]
    outfile: Option<String>,

    /// Seed to use when dealing a board
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of stacks on a dealt board
    #[arg(
        short = 'n',
        long,
        default_value_t = deal::DEFAULT_STACKS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=deal::MAX_STACKS as u64)
    )]
    stacks: usize,

    /// Number of full runs shuffled into a dealt board
    #[arg(short, long, default_value_t = 1)]
    decks: usize,

    /// Never fall back to bending the rules
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// States the rule-bending search may explore before giving up
    #[arg(long, default_value_t = DEFAULT_RELAXED_BUDGET)]
    budget: usize,

    /// Only print the move list
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

fn load_board(args: &Args) -> Result<Board> {
    let board = match (&args.infile, args.seed) {
        (Some(inpath), _) => {
            let s = if inpath == "-" {
                let mut s = String::new();
                stdin()
                    .read_to_string(&mut s)
                    .context("Couldn't read board from stdin")?;
                s
            } else {
                std::fs::read_to_string(inpath)
                    .with_context(|| format!("Couldn't read from file {}", inpath))?
            };
            notation::parse_board(&s).with_context(|| format!("Invalid board in {}", inpath))?
        }
        (None, Some(seed)) => {
            deal::with_rng(&mut StdRng::seed_from_u64(seed), args.stacks, args.decks)?
        }
        (None, None) => deal::random(args.stacks, args.decks)?,
    };
    Ok(board)
}

fn print_replay(solver: &Solver, moves: &[Move]) -> Result<()> {
    let rules = &solver.config().rules;
    let boards = rules.replay(solver.board(), moves)?;
    for (step, (mv, pair)) in moves.iter().zip(boards.windows(2)).enumerate() {
        let column = &pair[0].stacks()[mv.from];
        let cards = column[column.len() - mv.amount..]
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "Step {}: move [{}] from stack {} to stack {}",
            step + 1,
            cards,
            mv.from + 1,
            mv.to + 1
        );
        if pair[1].len() < pair[0].len() {
            println!("  completed run removed");
        }
        println!("{}\n", pair[1]);
    }
    Ok(())
}

fn report_outcome(solver: &Solver, report: &SearchReport, quiet: bool) -> Result<bool> {
    match &report.result {
        SolveResult::Solved(moves) => {
            let sequence = moves
                .iter()
                .map(|mv| mv.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            if quiet {
                println!("{}", sequence);
                return Ok(true);
            }
            let bent = if report.mode == Mode::Relaxed {
                " (bending the rules)"
            } else {
                ""
            };
            println!("Solved in {} moves{}: {}\n", moves.len(), bent, sequence);
            print_replay(solver, moves)?;
            Ok(true)
        }
        SolveResult::Unsolvable if report.budget_exhausted => {
            println!(
                "Gave up after {} states without finding a solution.",
                report.explored
            );
            Ok(false)
        }
        SolveResult::Unsolvable => {
            println!("Unsolvable.");
            Ok(false)
        }
    }
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = SolverConfig::default().with_relaxed_budget(args.budget);
    config.validate()?;

    let board = load_board(&args)?;
    info!(
        "board has {} stacks and {} cards",
        board.len(),
        board.card_count()
    );

    if let Some(outpath) = &args.outfile {
        let mut file = File::create(outpath)
            .with_context(|| format!("Failed to open outfile {}", outpath))?;
        file.write_all(&[notation::stringify(&board).as_bytes(), b"\n"].concat())
            .with_context(|| format!("Failed to write to {}", outpath))?;
    }

    if !args.quiet {
        println!("{}\n", board);
    }

    let solver = Solver::with_config(board, config);
    let report = solver.solve_with_report(!args.strict);
    info!(
        "{:?} search explored {} states, saw {}",
        report.mode, report.explored, report.seen
    );

    if report_outcome(&solver, &report, args.quiet)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
