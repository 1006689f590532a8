//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort the whole run
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] advent_solver::RegistrationError),

    /// Logging setup error
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Failures reading a single puzzle input
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file for this puzzle
    #[error("Input for {year}/{day:02} not found at {}", path.display())]
    Missing { year: u16, day: u8, path: PathBuf },

    /// Input file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of one solver part; reported and skipped, never fatal
#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Solver(#[from] advent_solver::SolverError),
}
