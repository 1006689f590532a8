//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Puzzle solver runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run registered puzzle solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Only run solvers carrying all of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}/day{DD}.txt` inputs
    #[arg(long, env = "ADVENT_INPUT_DIR", default_value = "~/.config/advent/inputs")]
    pub input_dir: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log verbosity: -v for debug, -vv for trace (RUST_LOG takes precedence)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_and_tags() {
        let args = Args::try_parse_from([
            "advent", "--year", "2022", "-d", "24", "--tags", "grid,astar", "-vv",
        ])
        .unwrap();
        assert_eq!(args.year, Some(2022));
        assert_eq!(args.day, Some(24));
        assert_eq!(args.part, None);
        assert_eq!(args.tags, vec!["grid", "astar"]);
        assert_eq!(args.verbose, 2);
        assert!(!args.quiet);
    }

    #[test]
    fn test_rejects_day_out_of_calendar() {
        assert!(Args::try_parse_from(["advent", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["advent", "--part", "3"]).is_err());
    }

    #[test]
    fn test_explicit_input_dir() {
        let args = Args::try_parse_from(["advent", "--input-dir", "/tmp/inputs"]).unwrap();
        assert_eq!(args.input_dir, PathBuf::from("/tmp/inputs"));
    }
}
