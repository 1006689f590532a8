//! Puzzle Solver Framework
//!
//! A small, type-safe framework for daily puzzle solvers spanning several
//! calendar years. Each solver parses its input once into shared data and then
//! answers one or more parts from it.
//!
//! # Overview
//!
//! - [`AocParser`] and [`Solver`]: parse input, solve parts
//! - [`DynSolver`]: type-erased solver instance with parse/solve timing
//! - [`RegistryBuilder`] / [`SolverRegistry`]: year/day lookup of solver factories
//! - [`SolverPlugin`]: self-registration through `inventory`, usually via
//!   `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
//!
//! pub struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| line.parse().map_err(|_| ParseError::InvalidFormat("Expected integer".into())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Day1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i32>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Day1>(2023, 1, &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, Solver, SolverExt};

// Used by the derive macro
pub use inventory;

pub use advent_solver_macros::AutoRegisterSolver;
