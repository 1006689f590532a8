pub mod day_15;
pub mod day_23;
