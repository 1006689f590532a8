//! Puzzle solutions, one module per year and day.

pub mod year_2016;
pub mod year_2021;
pub mod year_2022;
