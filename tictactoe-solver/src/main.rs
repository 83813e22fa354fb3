//! Tic-tac-toe Solver
//!
//! Census, exhaustive solve, cross-checking, CSV export and board display.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_core::{backward_neighbors, classify, forward_neighbors, Board, Player};
use tictactoe_solver::census::Census;
use tictactoe_solver::env_config::init_threads;
use tictactoe_solver::render::{render, side_by_side};
use tictactoe_solver::report::OutcomeReport;
use tictactoe_solver::{export, retrograde, solve_all_parallel, OutcomeTable, Solver};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Exhaustive tic-tac-toe classifier and perfect-play solver
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Classify and solve every tic-tac-toe board", long_about = None)]
#[command(version)]
struct Cli {
    /// Worker threads (overrides TICTACTOE_THREADS and RAYON_NUM_THREADS)
    #[arg(long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count every encoding by classification
    Census,

    /// Solve one board, or every legal board with a per-mark report
    Solve {
        /// Board as an integer, 0b/0x literal or nine cell characters
        #[arg(short, long)]
        board: Option<Board>,

        #[arg(short, long, value_enum, default_value_t = Method::Dfs)]
        method: Method,
    },

    /// Check the depth-first solver against retrograde analysis
    Verify,

    /// Write every solved board as CSV
    Export {
        /// Output file, or '-' for stdout
        #[arg(short, long, default_value = "result.csv")]
        output: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Method::Dfs)]
        method: Method,
    },

    /// Show a board with its successors and predecessors
    Show {
        board: Board,
    },
}

/// How to fill the outcome table.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    /// Memoized depth-first minimax
    Dfs,
    /// Backward propagation from finished games
    Retrograde,
    /// Depth-first minimax over partitions on the rayon pool
    Parallel,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Census => run_census(cli.threads),
        Command::Solve { board: Some(board), .. } => run_solve_one(board),
        Command::Solve { board: None, method } => run_solve_all(method, cli.threads),
        Command::Verify => run_verify(cli.threads),
        Command::Export { output, method } => run_export(output, method, cli.threads),
        Command::Show { board } => run_show(board),
    }
}

/// Fill an outcome table with the chosen method.
fn solve_table(method: Method, threads: Option<usize>) -> Result<OutcomeTable> {
    let start = Instant::now();
    let table = match method {
        Method::Dfs => {
            let mut solver = Solver::new();
            let table = solver.solve_all();
            solver.stats.log_summary(solver.table.len());
            table
        }
        Method::Retrograde => retrograde::analyze()?,
        Method::Parallel => {
            let workers = init_threads(threads);
            let (table, stats) = solve_all_parallel(workers);
            stats.log_summary(table.len());
            table
        }
    };
    info!(
        ?method,
        solved = table.len(),
        secs = format!("{:.3}", start.elapsed().as_secs_f64()),
        "outcome table ready"
    );
    Ok(table)
}

fn run_census(threads: Option<usize>) -> Result<()> {
    init_threads(threads);
    let census = Census::compute();
    info!(total = census.total(), legal = census.legal(), "census complete");
    println!("{census}");
    Ok(())
}

fn run_solve_one(board: Board) -> Result<()> {
    let classification = classify(board);
    println!("{}", render(board));

    let mut solver = Solver::new();
    let outcome = solver
        .solve(board)
        .with_context(|| format!("cannot solve {board} ({classification})"))?;
    println!("result: {outcome}");
    Ok(())
}

fn run_solve_all(method: Method, threads: Option<usize>) -> Result<()> {
    let table = solve_table(method, threads)?;
    println!("{}", OutcomeReport::from_table(&table));
    if let Some(outcome) = table.get(Board::EMPTY) {
        println!("empty board: {outcome}");
    }
    Ok(())
}

fn run_verify(threads: Option<usize>) -> Result<()> {
    let dfs = solve_table(Method::Dfs, threads)?;
    let checks = [
        (Method::Retrograde, solve_table(Method::Retrograde, threads)?),
        (Method::Parallel, solve_table(Method::Parallel, threads)?),
    ];

    let mut failed = false;
    for (method, table) in &checks {
        let mismatches = dfs.mismatches(table);
        if mismatches.is_empty() {
            info!(?method, boards = table.len(), "agrees with depth-first solver");
            continue;
        }
        failed = true;
        for (board, expected, got) in mismatches.iter().take(10) {
            warn!(?method, board = %board, ?expected, ?got, "mismatch");
        }
        println!("{method:?}: {} mismatches", mismatches.len());
    }

    if failed {
        bail!("solvers disagree");
    }
    println!("ok: {} boards agree across all methods", dfs.len());
    Ok(())
}

fn run_export(output: PathBuf, method: Method, threads: Option<usize>) -> Result<()> {
    let table = solve_table(method, threads)?;

    let written = if output.as_os_str() == "-" {
        export::write_csv(&table, io::stdout().lock()).context("writing CSV to stdout")?
    } else {
        let file = File::create(&output)
            .with_context(|| format!("creating {}", output.display()))?;
        export::write_csv(&table, file).with_context(|| format!("writing {}", output.display()))?
    };
    info!(records = written, output = %output.display(), "export complete");
    Ok(())
}

fn run_show(board: Board) -> Result<()> {
    let mut solver = Solver::new();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{}", render(board))?;
    match solver.solve(board) {
        Ok(outcome) => writeln!(stdout, "result: {outcome}")?,
        Err(e) => {
            writeln!(stdout, "result: none")?;
            return Err(e.into());
        }
    }

    let next = forward_neighbors(board)?;
    if !next.is_empty() {
        let mut panels = Vec::with_capacity(next.len());
        for child in next {
            let outcome = solver.solve(child)?;
            panels.push(format!("{}\n{outcome}", render(child)));
        }
        writeln!(stdout, "\nforward:\n{}", side_by_side(&panels))?;
    }

    let prev = backward_neighbors(board)?;
    if !prev.is_empty() {
        let panels: Vec<String> = prev
            .iter()
            .map(|&(parent, player)| {
                let who = match player {
                    Player::First => "first moved",
                    Player::Second => "second moved",
                };
                format!("{}\n{who}", render(parent))
            })
            .collect();
        writeln!(stdout, "\nbackward:\n{}", side_by_side(&panels))?;
    }
    Ok(())
}
