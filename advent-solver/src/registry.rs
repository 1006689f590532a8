//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

// ============================================================================
// Calendar Storage Index
// ============================================================================

/// First year the puzzle calendar ran
pub const BASE_YEAR: u16 = 2015;
/// Number of years the flat storage can hold (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per calendar year (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factories
// ============================================================================

/// Parses input and wraps it in a ready-to-solve instance
pub type SolverFactory =
    Box<dyn Fn(&str) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts the solver implements
    pub parts: u8,
    pub tags: &'static [&'static str],
}

struct SolverEntry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

/// Builder for an immutable [`SolverRegistry`].
///
/// Rejects duplicate year/day pairs and slots outside the calendar.
///
/// ```
/// # use advent_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData = String;
///     fn parse(input: &str) -> Result<String, ParseError> {
///         Ok(input.trim().to_string())
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///     fn solve_part(shared: &mut String, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.clone())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register_solver::<Echo>(2021, 1, &["demo"])
///     .unwrap()
///     .build();
/// let mut solver = registry.create_solver(2021, 1, "hello\n").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverEntry>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a factory for `year`/`day` with an explicit part count
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: Fn(&str) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(SolverEntry {
            factory: Box::new(factory),
            parts,
            tags,
        });
        Ok(self)
    }

    /// Register a [`Solver`] type directly
    pub fn register_solver<S>(
        self,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
        S::SharedData: 'static,
    {
        self.register(year, day, S::PARTS, tags, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver>)
        })
    }

    /// Register every plugin submitted through `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`.
    ///
    /// ```no_run
    /// # use advent_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2021 && plugin.tags.contains(&"search"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table from year/day to solver factory
pub struct SolverRegistry {
    entries: Vec<Option<SolverEntry>>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `year`/`day`
    pub fn create_solver(
        &self,
        year: u16,
        day: u8,
        input: &str,
    ) -> Result<Box<dyn DynSolver>, SolverError> {
        let entry = calc_index(year, day)
            .and_then(|i| self.entries[i].as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Registered solvers in calendar order
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                SolverInfo {
                    year,
                    day,
                    parts: e.parts,
                    tags: e.tags,
                }
            })
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries[i].as_ref())
            .map(|e| SolverInfo {
                year,
                day,
                parts: e.parts,
                tags: e.tags,
            })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

// ============================================================================
// Plugins
// ============================================================================

/// Object-safe hook letting a solver type register itself.
///
/// Blanket-implemented for every [`Solver`], so plugin tables can hold
/// solvers of different types behind `&'static dyn RegisterableSolver`.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
    S::SharedData: 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day, tags)
    }
}

/// A solver submitted to the plugin table.
///
/// Usually produced by `#[derive(AutoRegisterSolver)]`, but can be submitted
/// by hand:
///
/// ```no_run
/// use advent_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData = ();
///     fn parse(_: &str) -> Result<(), ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 1;
///     fn solve_part(_: &mut (), part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// advent_solver::inventory::submit! {
///     SolverPlugin {
///         year: 2022,
///         day: 1,
///         solver: &Day1,
///         tags: &["easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels used for filtering (e.g. "search", "grid")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::AocParser;

    struct Sum;

    impl AocParser for Sum {
        type SharedData = Vec<i64>;

        fn parse(input: &str) -> Result<Vec<i64>, ParseError> {
            input
                .lines()
                .map(|l| {
                    l.trim()
                        .parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("not a number: {l}")))
                })
                .collect()
        }
    }

    impl Solver for Sum {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Vec<i64>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.iter().sum::<i64>().to_string()),
                2 => Ok(shared.iter().max().copied().unwrap_or_default().to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_index_roundtrip_covers_calendar() {
        for index in 0..CAPACITY {
            let (year, day) = from_index(index);
            assert_eq!(calc_index(year, day), Some(index));
        }
        assert_eq!(calc_index(2014, 1), None);
        assert_eq!(calc_index(2021, 0), None);
        assert_eq!(calc_index(2021, 26), None);
    }

    #[test]
    fn test_create_and_solve() {
        let registry = RegistryBuilder::new()
            .register_solver::<Sum>(2021, 3, &[])
            .unwrap()
            .build();

        let mut solver = registry.create_solver(2021, 3, "4\n9\n-2").unwrap();
        assert_eq!(solver.year(), 2021);
        assert_eq!(solver.day(), 3);
        assert_eq!(solver.parts(), 2);
        assert_eq!(solver.solve(1).unwrap().answer, "11");
        assert_eq!(solver.solve(2).unwrap().answer, "9");
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let result = RegistryBuilder::new()
            .register_solver::<Sum>(2022, 7, &[])
            .unwrap()
            .register_solver::<Sum>(2022, 7, &[]);
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateSolver(2022, 7))
        ));
    }

    #[test]
    fn test_out_of_calendar_rejected() {
        let result = RegistryBuilder::new().register_solver::<Sum>(2040, 1, &[]);
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidYearDay(2040, 1))
        ));
    }

    #[test]
    fn test_missing_solver_and_parse_failure() {
        let registry = RegistryBuilder::new()
            .register_solver::<Sum>(2016, 11, &[])
            .unwrap()
            .build();

        assert!(matches!(
            registry.create_solver(2016, 12, "1"),
            Err(SolverError::NotFound(2016, 12))
        ));
        assert!(matches!(
            registry.create_solver(2016, 11, "x"),
            Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn test_iter_info_in_calendar_order() {
        let registry = RegistryBuilder::new()
            .register_solver::<Sum>(2022, 12, &["grid"])
            .unwrap()
            .register_solver::<Sum>(2016, 11, &[])
            .unwrap()
            .register_solver::<Sum>(2021, 23, &[])
            .unwrap()
            .build();

        let order: Vec<(u16, u8)> = registry.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(order, vec![(2016, 11), (2021, 23), (2022, 12)]);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get_info(2022, 12).unwrap().tags, &["grid"]);
        assert!(!registry.contains(2022, 13));
    }
}
