//! Puzzle solutions with automatic registration, and the shared utilities
//! they are built on.
//!
//! Each solution derives `AutoRegisterSolver`, so linking this crate is
//! enough to make it visible to
//! [`RegistryBuilder::register_all_plugins`](advent_solver::RegistryBuilder::register_all_plugins).
//!
//! Most puzzles here are shortest-path problems over an implicit state
//! graph and share the engine in [`utils::search`].

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
