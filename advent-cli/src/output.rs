//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::Instant;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{answer}"),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(e), true) => eprintln!("Error: {e}"),
            (Err(_), false) => eprintln!("{}", format_result(result)),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        println!();
        for line in summary_lines(results, self.start_time.elapsed()) {
            println!("{line}");
        }
    }
}

/// `YYYY/DD Part P: answer (parse: …, solve: …)`, or the error in its place
fn format_result(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{prefix}: {answer} ({parse_timing}solve: {})",
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{prefix}: Error - {e}"),
    }
}

fn summary_lines(results: &[SolverResult], elapsed: std::time::Duration) -> Vec<String> {
    let successes = results.iter().filter(|r| r.answer.is_ok()).count();
    let failures = results.len() - successes;

    let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
    let total_solve_time: TimeDelta = results
        .iter()
        .filter(|r| r.answer.is_ok())
        .map(|r| r.solve_duration)
        .sum();
    let elapsed = TimeDelta::from_std(elapsed).unwrap_or(TimeDelta::MAX);

    vec![
        "--- Summary ---".to_string(),
        format!("Solvers: {successes} solved, {failures} failed"),
        format!("Total parse time: {}", format_duration(total_parse_time)),
        format!("Total solve time: {}", format_duration(total_solve_time)),
        format!("Elapsed wall-clock time: {}", format_duration(elapsed)),
    ]
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExecutorError, InputError};
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;

    fn solved(part: u8, answer: &str, parse_us: Option<i64>, solve_us: i64) -> SolverResult {
        SolverResult {
            year: 2021,
            day: 5,
            part,
            answer: Ok(answer.to_string()),
            parse_duration: parse_us.map(TimeDelta::microseconds),
            solve_duration: TimeDelta::microseconds(solve_us),
        }
    }

    fn missing() -> SolverResult {
        SolverResult {
            year: 2022,
            day: 24,
            part: 1,
            answer: Err(Arc::new(ExecutorError::Input(InputError::Missing {
                year: 2022,
                day: 24,
                path: PathBuf::from("in/2022/day24.txt"),
            }))),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1_500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2_250)), "2.25s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
    }

    #[test]
    fn test_format_result_line() {
        assert_eq!(
            format_result(&solved(1, "40", Some(12), 340)),
            "2021/05 Part 1: 40 (parse: 12µs, solve: 340µs)"
        );
        assert_eq!(
            format_result(&solved(2, "315", None, 2_000)),
            "2021/05 Part 2: 315 (solve: 2.00ms)"
        );
        assert_eq!(
            format_result(&missing()),
            "2022/24 Part 1: Error - Input for 2022/24 not found at in/2022/day24.txt"
        );
    }

    #[test]
    fn test_summary_counts_and_totals() {
        let results = vec![solved(1, "a", Some(100), 400), solved(2, "b", None, 500), missing()];
        let lines = summary_lines(&results, Duration::from_millis(3));
        assert_eq!(lines[1], "Solvers: 2 solved, 1 failed");
        assert_eq!(lines[2], "Total parse time: 100µs");
        assert_eq!(lines[3], "Total solve time: 900µs");
        assert_eq!(lines[4], "Elapsed wall-clock time: 3.00ms");
    }
}
