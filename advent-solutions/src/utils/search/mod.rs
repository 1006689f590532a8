//! Generic Priority Search
//!
//! Minimum-cost path search over implicitly defined state graphs: the caller
//! supplies a start state, a successor function with non-negative edge costs,
//! a goal predicate, a canonical signature for deduplication and optionally a
//! heuristic. The engine is Dijkstra with a zero heuristic and A* otherwise.
//!
//! # Main Types
//!
//! - [`SearchProblem`]: trait describing a state space
//! - [`ClosureProblem`]: closure adapter for quick one-off problems
//! - [`PrioritySearch`]: the engine
//! - [`SearchOutcome`] / [`Solution`]: optimal cost and start-to-goal path, or "not found"
//! - [`SearchStats`]: expansion counters
//!
//! # Caller Responsibilities
//!
//! **None of these are checked at runtime.**
//! - Edge costs must be non-negative.
//! - A heuristic must be consistent (and therefore admissible); expanded
//!   states are never reopened.
//! - The effective state space (after signature collapse) must be finite, or
//!   a goal must be reachable, for the search to terminate.
//!
//! Lossy pruning (keeping only the best K states of a generation, say) is
//! not part of the engine; puzzles that want it do it in their own
//! successor function.
//!
//! # Example: Grid with Heuristic
//!
//! ```rust
//! use advent_solutions::utils::search::{ClosureProblem, PrioritySearch};
//!
//! let risk = [[1u32, 1, 6], [1, 3, 8], [2, 1, 3]];
//! let (w, h) = (3i32, 3i32);
//!
//! let problem = ClosureProblem::new(
//!     |&(x, y): &(i32, i32)| {
//!         [(1, 0), (-1, 0), (0, 1), (0, -1)]
//!             .into_iter()
//!             .map(|(dx, dy)| (x + dx, y + dy))
//!             .filter(|&(nx, ny)| (0..w).contains(&nx) && (0..h).contains(&ny))
//!             .map(|(nx, ny)| ((nx, ny), risk[ny as usize][nx as usize]))
//!             .collect::<Vec<_>>()
//!     },
//!     |&pos: &(i32, i32)| pos == (w - 1, h - 1),
//! )
//! .with_heuristic(|&(x, y): &(i32, i32)| ((w - 1 - x) + (h - 1 - y)) as u32);
//!
//! let outcome = PrioritySearch::with_problem(problem).run((0, 0));
//! assert_eq!(outcome.cost(), Some(7)); // down, down, right, right
//! ```

mod engine;
mod frontier;
mod problem;

pub use engine::{PrioritySearch, SearchOutcome, SearchStats, Solution};
pub use frontier::NodeId;
pub use problem::{ClosureProblem, SearchCost, SearchProblem};
