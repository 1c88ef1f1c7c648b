//! Command line front end: solve an instance file or generate a random one.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use u_pmedian::io::{generate_instance, read_instance, save_instance};
use u_pmedian::solver::{solve, SolveReport, SolverConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "p-median heuristic solver", long_about = None)]
struct Cli {
    /// Log every construction round and accepted swap.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve an instance file.
    Solve {
        /// Instance file: n, p, then n rows of n distances.
        file: PathBuf,
        /// Restricted candidate list size.
        #[arg(short = 'k', long, default_value_t = 3)]
        rcl_size: usize,
        /// Random seed for reproducible runs.
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Generate a random symmetric instance.
    Generate {
        /// Number of nodes.
        #[arg(short, long)]
        nodes: usize,
        /// Number of medians.
        #[arg(short, long)]
        medians: usize,
        /// Largest off-diagonal distance.
        #[arg(long, default_value_t = 100)]
        max_dist: u32,
        /// Random seed.
        #[arg(short, long)]
        seed: Option<u64>,
        /// Output file; `.txt` is appended when missing.
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Solve {
            file,
            rcl_size,
            seed,
            json,
        } => {
            let instance = read_instance(&file)
                .with_context(|| format!("cannot load instance {}", file.display()))?;
            println!(
                "Data: n={}, p={}",
                instance.num_nodes(),
                instance.num_medians()
            );

            let config = SolverConfig {
                rcl_size,
                seed,
            };
            let report = solve(&instance, &config).context("solve failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", format_report(&report));
            }
        }
        Command::Generate {
            nodes,
            medians,
            max_dist,
            seed,
            output,
        } => {
            let output = with_txt_extension(output);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let instance = generate_instance(nodes, medians, max_dist, &mut rng)
                .context("cannot generate instance")?;
            save_instance(&instance, &output)
                .with_context(|| format!("cannot write {}", output.display()))?;
            println!("Instance saved to {}", output.display());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Appends `.txt` unless the path already ends in it.
fn with_txt_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none_or(|ext| ext != "txt") {
        path.as_mut_os_string().push(".txt");
    }
    path
}

fn format_report(report: &SolveReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Constructive cost: {:.6}", report.constructive.cost());
    let _ = writeln!(
        out,
        "Initial cost: {:.6} -> Final cost: {:.6}",
        report.constructive.cost(),
        report.refined.cost()
    );
    let _ = writeln!(out, "Improvement: {:.6}", report.improvement());
    let _ = writeln!(out, "Swaps: {}", report.swaps);
    if report.drift_corrections > 0 {
        let _ = writeln!(out, "Drift corrections: {}", report.drift_corrections);
    }
    let medians = report
        .refined
        .sorted_medians()
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "Final medians: [{medians}]");

    let t = &report.timings;
    let _ = writeln!(out, "Construction: {:.6} s", t.construction.as_secs_f64());
    let _ = writeln!(out, "Local search: {:.6} s", t.local_search.as_secs_f64());
    let _ = writeln!(out, "Total:        {:.6} s", t.total.as_secs_f64());
    out
}
