//! Error types for the solver framework

use thiserror::Error;

/// Error raised while turning raw puzzle input into shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input does not match the expected layout
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A required element (start marker, grid row, ...) is absent
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error raised while solving a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The part exists in the puzzle but has no implementation yet
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is zero or exceeds the solver's part count
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The search space was exhausted without reaching a goal
    #[error("No solution: {0}")]
    NoSolution(String),
    /// Any other failure raised by the solver
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error raised by registry lookups
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for this year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error raised while building a registry
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Two solvers claim the same calendar slot
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day falls outside the puzzle calendar
    #[error("Year {0} day {1} is outside the puzzle calendar")]
    InvalidYearDay(u16, u8),
}
