//! Trait-based search problem definition.

use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Add;

use num_traits::Zero;

/// Numeric cost accumulated along a path.
///
/// Blanket-implemented for every totally ordered, copyable type with an
/// additive identity (`u32`, `u64`, `usize`, `i64`, ...).
pub trait SearchCost: Copy + Ord + Add<Output = Self> + Zero {}

impl<T> SearchCost for T where T: Copy + Ord + Add<Output = T> + Zero {}

/// A weighted state space explored by [`PrioritySearch`](super::PrioritySearch).
///
/// # Type Parameters
///
/// - `S`: State type, owned by the caller and opaque to the engine
/// - `C`: Cost type
///
/// # Preconditions
///
/// Edge costs returned by `successors` must be non-negative, and `heuristic`
/// must never overestimate the remaining cost to the nearest goal. Because
/// expanded states are never reopened, the heuristic should also be
/// consistent: `h(a) <= cost(a, b) + h(b)` for every edge. None of this is
/// checked; a violation yields a wrong (but finite) answer.
///
/// # Example
///
/// ```rust
/// use advent_solutions::utils::search::{PrioritySearch, SearchProblem};
///
/// struct Line {
///     goal: i32,
/// }
///
/// impl SearchProblem<i32, u32> for Line {
///     type Signature = i32;
///
///     fn successors(&self, n: &i32) -> impl IntoIterator<Item = (i32, u32)> {
///         [(n - 1, 1), (n + 1, 1)]
///     }
///
///     fn is_goal(&self, n: &i32) -> bool {
///         *n == self.goal
///     }
///
///     fn signature(&self, n: &i32) -> i32 {
///         *n
///     }
///
///     fn heuristic(&self, n: &i32) -> u32 {
///         n.abs_diff(self.goal)
///     }
/// }
///
/// let outcome = PrioritySearch::with_problem(Line { goal: 7 }).run(-3);
/// assert_eq!(outcome.cost(), Some(10));
/// ```
pub trait SearchProblem<S, C: SearchCost> {
    /// Key under which visited states are deduplicated.
    ///
    /// May be coarser than state equality (e.g. dropping accumulated history
    /// or folding symmetric configurations together).
    type Signature: Hash + Eq;

    /// States reachable from `state`, each paired with the edge cost.
    fn successors(&self, state: &S) -> impl IntoIterator<Item = (S, C)>;

    fn is_goal(&self, state: &S) -> bool;

    fn signature(&self, state: &S) -> Self::Signature;

    /// Lower bound on the remaining cost to a goal. Zero turns A* into Dijkstra.
    fn heuristic(&self, _state: &S) -> C {
        C::zero()
    }
}

/// Adapts closures to the [`SearchProblem`] trait.
///
/// [`ClosureProblem::new`] starts with the state itself as signature and a
/// zero heuristic; [`with_signature`](Self::with_signature) and
/// [`with_heuristic`](Self::with_heuristic) swap either out.
pub struct ClosureProblem<S, C, Sig, F, G, K, H> {
    successors_fn: F,
    goal_fn: G,
    signature_fn: K,
    heuristic_fn: H,
    _phantom: PhantomData<fn(&S) -> (C, Sig)>,
}

fn zero_heuristic<S, C: SearchCost>(_state: &S) -> C {
    C::zero()
}

impl<S, C, F, G> ClosureProblem<S, C, S, F, G, fn(&S) -> S, fn(&S) -> C>
where
    S: Clone + Hash + Eq,
    C: SearchCost,
    F: Fn(&S) -> Vec<(S, C)>,
    G: Fn(&S) -> bool,
{
    pub fn new(successors: F, is_goal: G) -> Self {
        Self {
            successors_fn: successors,
            goal_fn: is_goal,
            signature_fn: S::clone,
            heuristic_fn: zero_heuristic::<S, C>,
            _phantom: PhantomData,
        }
    }
}

impl<S, C, Sig, F, G, K, H> ClosureProblem<S, C, Sig, F, G, K, H> {
    /// Replace the deduplication key
    pub fn with_signature<Sig2, K2>(self, signature: K2) -> ClosureProblem<S, C, Sig2, F, G, K2, H>
    where
        K2: Fn(&S) -> Sig2,
    {
        ClosureProblem {
            successors_fn: self.successors_fn,
            goal_fn: self.goal_fn,
            signature_fn: signature,
            heuristic_fn: self.heuristic_fn,
            _phantom: PhantomData,
        }
    }

    /// Replace the zero heuristic
    pub fn with_heuristic<H2>(self, heuristic: H2) -> ClosureProblem<S, C, Sig, F, G, K, H2>
    where
        H2: Fn(&S) -> C,
    {
        ClosureProblem {
            successors_fn: self.successors_fn,
            goal_fn: self.goal_fn,
            signature_fn: self.signature_fn,
            heuristic_fn: heuristic,
            _phantom: PhantomData,
        }
    }
}

impl<S, C, Sig, F, G, K, H> SearchProblem<S, C> for ClosureProblem<S, C, Sig, F, G, K, H>
where
    C: SearchCost,
    Sig: Hash + Eq,
    F: Fn(&S) -> Vec<(S, C)>,
    G: Fn(&S) -> bool,
    K: Fn(&S) -> Sig,
    H: Fn(&S) -> C,
{
    type Signature = Sig;

    fn successors(&self, state: &S) -> impl IntoIterator<Item = (S, C)> {
        (self.successors_fn)(state)
    }

    fn is_goal(&self, state: &S) -> bool {
        (self.goal_fn)(state)
    }

    fn signature(&self, state: &S) -> Sig {
        (self.signature_fn)(state)
    }

    fn heuristic(&self, state: &S) -> C {
        (self.heuristic_fn)(state)
    }
}
