//! Shared helpers for puzzle solutions.

pub mod beam;
pub mod grid;
pub mod search;
