//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::inputs::InputStore;
use advent_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::{debug, info_span, warn};

/// Result from a single solver part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Shared so that one input failure can be reported for every part
    pub answer: Result<String, Arc<ExecutorError>>,
    /// Set on the first part run after parsing
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every selected solver part, one after another, in calendar order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Run all work items, handing each part's result to `on_result` as soon
    /// as it is ready. Failures are reported per part and never stop the run.
    pub fn execute(&self, mut on_result: impl FnMut(SolverResult)) {
        for work in self.collect_work_items() {
            let _span = info_span!("solver", year = work.year, day = work.day).entered();
            self.run_solver(&work, &mut on_result);
        }
    }

    fn run_solver(&self, work: &WorkItem, on_result: &mut impl FnMut(SolverResult)) {
        let prepared = self
            .inputs
            .read(work.year, work.day)
            .map_err(ExecutorError::from)
            .and_then(|input| {
                self.registry
                    .create_solver(work.year, work.day, &input)
                    .map_err(ExecutorError::from)
            });

        let mut solver = match prepared {
            Ok(solver) => solver,
            Err(e) => {
                warn!(error = %e, "skipping solver");
                let error = Arc::new(e);
                for part in work.parts.clone() {
                    on_result(error_result(work, part, Arc::clone(&error)));
                }
                return;
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        debug!(parse_us = solver.parse_duration().num_microseconds(), "input parsed");
        for part in work.parts.clone() {
            let mut result = solve_part(work, part, &mut *solver);
            result.parse_duration = parse_duration.take();
            on_result(result);
        }
    }
}

fn error_result(work: &WorkItem, part: u8, error: Arc<ExecutorError>) -> SolverResult {
    SolverResult {
        year: work.year,
        day: work.day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

fn solve_part(work: &WorkItem, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(solved) => {
            debug!(part, solve_us = solved.duration().num_microseconds(), "part solved");
            SolverResult {
                year: work.year,
                day: work.day,
                part,
                solve_duration: solved.duration(),
                answer: Ok(solved.answer),
                parse_duration: None,
            }
        }
        Err(e) => {
            warn!(part, error = %e, "part failed");
            SolverResult {
                year: work.year,
                day: work.day,
                part,
                answer: Err(Arc::new(ExecutorError::Solver(e.into()))),
                parse_duration: None,
                solve_duration: TimeDelta::zero(),
            }
        }
    }
}
