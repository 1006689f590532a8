//! Command-line interface for running registered puzzle solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Link the solution crate so its solver plugins are collected
use advent_solutions as _;

use advent_solver::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    init_logging(args.verbose)?;

    let config = Config::from_args(args)?;
    let registry = build_registry(&config.tags)?;
    tracing::debug!(solvers = registry.len(), "registry built");

    let executor = Executor::new(registry, &config);
    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    if !config.quiet {
        let missing: Vec<_> = work_items
            .iter()
            .filter(|w| !executor.inputs().contains(w.year, w.day))
            .collect();
        if !missing.is_empty() {
            println!("Missing {} input file(s):", missing.len());
            for w in &missing {
                println!("  - {}", executor.inputs().input_path(w.year, w.day).display());
            }
        }
        println!("Running {} solver(s)...", work_items.len());
    }

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    executor.execute(|result| {
        formatter.print_result(&result);
        results.push(result);
    });
    formatter.print_summary(&results);

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over the `-v` count
fn init_logging(verbose: u8) -> Result<(), CliError> {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
