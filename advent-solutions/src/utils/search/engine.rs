//! Dijkstra / A* search over an implicit state graph.

use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use tracing::{debug, trace};

use super::frontier::{Entry, Frontier, NodeId};
use super::problem::{ClosureProblem, SearchCost, SearchProblem};

/// Minimum-cost path from the start state to a goal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S, C> {
    pub cost: C,
    /// States from start to goal, both included
    pub path: Vec<S>,
}

impl<S, C> Solution<S, C> {
    /// The goal state that ended the search
    pub fn goal(&self) -> &S {
        // path always holds at least the goal itself
        &self.path[self.path.len() - 1]
    }

    /// Number of transitions taken
    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }
}

/// Result of one search call.
///
/// `NotFound` means the reachable state space was exhausted without meeting
/// the goal predicate; it is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<S, C> {
    Found(Solution<S, C>),
    NotFound,
}

impl<S, C: Copy> SearchOutcome<S, C> {
    pub fn cost(&self) -> Option<C> {
        match self {
            SearchOutcome::Found(solution) => Some(solution.cost),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&[S]> {
        match self {
            SearchOutcome::Found(solution) => Some(&solution.path),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution<S, C>> {
        match self {
            SearchOutcome::Found(solution) => Some(solution),
            SearchOutcome::NotFound => None,
        }
    }
}

/// Counters collected during one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped, found unvisited and expanded
    pub expanded: usize,
    /// Successors pushed onto the frontier
    pub generated: usize,
    /// Popped entries discarded because their signature was already expanded
    pub stale: usize,
    /// Largest frontier size reached
    pub frontier_high_water: usize,
}

/// An expanded state and the record it was reached from.
struct Expanded<S> {
    state: S,
    parent: Option<NodeId>,
}

/// Priority-queue driven shortest path search.
///
/// Each call to [`run`](Self::run) builds a fresh frontier, visited set and
/// expansion arena, and drops them on return; nothing is cached across
/// calls.
///
/// # Algorithm
///
/// 1. Push `start` with cost zero.
/// 2. Pop the entry with the lowest `cost + heuristic` (earliest pushed on ties).
/// 3. If its signature was already expanded, discard it (lazy deletion).
/// 4. If it satisfies the goal predicate, stop: its cost is optimal.
/// 5. Otherwise mark the signature visited, record the state in the arena and
///    push every successor whose signature is not yet visited.
/// 6. An empty frontier means no goal is reachable.
///
/// The engine never terminates on its own in an infinite state space without
/// a reachable goal; bound the space through the signature or the goal
/// predicate.
///
/// # Example
///
/// ```rust
/// use advent_solutions::utils::search::PrioritySearch;
///
/// // Reach 10 from 1 by adding one or doubling, each step costing 1
/// let search = PrioritySearch::new(
///     |n: &u32| vec![(n + 1, 1u32), (n * 2, 1u32)],
///     |n: &u32| *n == 10,
/// );
///
/// let outcome = search.run(1);
/// assert_eq!(outcome.cost(), Some(4));
/// assert_eq!(outcome.path(), Some(&[1, 2, 4, 5, 10][..]));
/// ```
pub struct PrioritySearch<S, C, P> {
    problem: P,
    _phantom: PhantomData<fn(S) -> C>,
}

impl<S, C, P> PrioritySearch<S, C, P>
where
    C: SearchCost,
    P: SearchProblem<S, C>,
{
    pub fn with_problem(problem: P) -> Self {
        Self {
            problem,
            _phantom: PhantomData,
        }
    }

    /// Search from `start` for the cheapest goal state.
    pub fn run(&self, start: S) -> SearchOutcome<S, C> {
        self.run_with_stats(start).0
    }

    /// Like [`run`](Self::run), also returning the search counters.
    pub fn run_with_stats(&self, start: S) -> (SearchOutcome<S, C>, SearchStats) {
        let mut frontier: Frontier<S, C> = Frontier::new();
        let mut visited: HashSet<P::Signature> = HashSet::new();
        let mut arena: Vec<Expanded<S>> = Vec::new();
        let mut stats = SearchStats::default();

        let priority = self.problem.heuristic(&start);
        frontier.push(
            Entry {
                state: start,
                cost: C::zero(),
                parent: None,
            },
            priority,
        );

        let outcome = loop {
            let Some(entry) = frontier.pop() else {
                break SearchOutcome::NotFound;
            };

            let signature = self.problem.signature(&entry.state);
            if visited.contains(&signature) {
                stats.stale += 1;
                continue;
            }

            if self.problem.is_goal(&entry.state) {
                trace!(expanded = stats.expanded, "goal state popped");
                break SearchOutcome::Found(reconstruct(arena, entry));
            }

            visited.insert(signature);
            stats.expanded += 1;

            let id = arena.len();
            arena.push(Expanded {
                state: entry.state,
                parent: entry.parent,
            });

            for (next, step_cost) in self.problem.successors(&arena[id].state) {
                if visited.contains(&self.problem.signature(&next)) {
                    continue;
                }
                let cost = entry.cost + step_cost;
                let priority = cost + self.problem.heuristic(&next);
                frontier.push(
                    Entry {
                        state: next,
                        cost,
                        parent: Some(id),
                    },
                    priority,
                );
                stats.generated += 1;
            }
        };

        stats.frontier_high_water = frontier.high_water();
        debug!(
            found = outcome.is_found(),
            expanded = stats.expanded,
            generated = stats.generated,
            stale = stats.stale,
            pending = frontier.len(),
            frontier_high_water = stats.frontier_high_water,
            "priority search finished"
        );

        (outcome, stats)
    }
}

impl<S, C, F, G> PrioritySearch<S, C, ClosureProblem<S, C, S, F, G, fn(&S) -> S, fn(&S) -> C>>
where
    S: Clone + Hash + Eq,
    C: SearchCost,
    F: Fn(&S) -> Vec<(S, C)>,
    G: Fn(&S) -> bool,
{
    /// Closure-based search keyed on the state itself, without heuristic.
    ///
    /// Use [`ClosureProblem`] with [`PrioritySearch::with_problem`] to supply a
    /// coarser signature or a heuristic.
    pub fn new(successors: F, is_goal: G) -> Self {
        Self::with_problem(ClosureProblem::new(successors, is_goal))
    }
}

/// Walk parent ids back from the goal entry and return the states in
/// start-to-goal order.
fn reconstruct<S, C>(arena: Vec<Expanded<S>>, goal: Entry<S, C>) -> Solution<S, C> {
    let mut chain = Vec::new();
    let mut cursor = goal.parent;
    while let Some(id) = cursor {
        chain.push(id);
        cursor = arena[id].parent;
    }

    let mut slots: Vec<Option<S>> = arena.into_iter().map(|record| Some(record.state)).collect();
    let mut path: Vec<S> = chain
        .iter()
        .rev()
        .filter_map(|&id| slots[id].take())
        .collect();
    path.push(goal.state);

    Solution {
        cost: goal.cost,
        path,
    }
}
