//! trisat - Traced 3-SAT solver demo binary.
//!
//! The demo boundary invokes this as `trisat <N> <RATIO>` and reads exactly
//! one JSON result document from stdout. Everything else (logs, error
//! messages) goes to stderr, so a non-zero exit never leaves a partial
//! document behind.

use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trisat_dpll::exhaustive_satisfiable;
use trisat_gen::RandomFormulaGenerator;

#[derive(Parser)]
#[command(name = "trisat")]
#[command(author, version, about = "Traced DPLL solver for random 3-SAT instances", long_about = None)]
struct Cli {
    /// Number of boolean variables (3 to 5)
    n: u32,

    /// Clause-to-variable ratio (2.0 to 5.0)
    ratio: f64,

    /// Seed for reproducible instance generation
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,

    /// Cross-check the verdict against exhaustive enumeration
    #[arg(long)]
    check: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging on stderr; stdout carries only the result document.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let mut generator = match cli.seed {
        Some(seed) => RandomFormulaGenerator::with_seed(seed),
        None => RandomFormulaGenerator::new(),
    };
    let formula = generator.generate(cli.n, cli.ratio)?;
    tracing::info!(
        num_variables = formula.num_variables(),
        num_clauses = formula.len(),
        "generated instance"
    );

    let start = Instant::now();
    let report = trisat_dpll::solve(&formula)?;
    tracing::info!(
        satisfiable = report.satisfiable,
        steps = report.solving_process.statistics.total_steps,
        elapsed = ?start.elapsed(),
        "solve finished"
    );

    if cli.check {
        let reference = exhaustive_satisfiable(&formula);
        if reference.is_some() != report.satisfiable {
            anyhow::bail!("verdict disagrees with exhaustive enumeration; refusing to emit a result");
        }
        tracing::debug!("exhaustive cross-check passed");
    }

    let json = if cli.pretty {
        report.to_json_pretty()?
    } else {
        report.to_json()?
    };
    println!("{json}");

    Ok(())
}
