//! Generation-by-generation beam search.
//!
//! Unlike [`PrioritySearch`](crate::utils::search::PrioritySearch) this is
//! lossy: every generation is grouped by a signature and only the best
//! `width` states of each group survive, so the answer is only as good as the
//! ranking. Use it when the exact state space is too large and a good ranking
//! is known.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeamConfig {
    /// Survivors kept per signature group each generation. Zero is treated
    /// as one.
    pub width: usize,
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self { width: 10 }
    }
}

/// Beam search over caller-supplied closures.
///
/// - `expand` lists the successors of a state. A state with no successors is
///   finished and leaves the beam.
/// - `signature` buckets a generation; each bucket is pruned on its own.
/// - `rank` orders a bucket, highest first. Equal ranks keep generation order.
pub struct BeamSearch<E, K, R> {
    config: BeamConfig,
    expand: E,
    signature: K,
    rank: R,
}

impl<E, K, R> BeamSearch<E, K, R> {
    pub fn new(config: BeamConfig, expand: E, signature: K, rank: R) -> Self {
        Self {
            config,
            expand,
            signature,
            rank,
        }
    }

    /// Run from `start` until no state has successors. Returns every finished
    /// state in the order it finished.
    pub fn run<S, Sig, Rank>(&self, start: S) -> Vec<S>
    where
        E: Fn(&S) -> Vec<S>,
        K: Fn(&S) -> Sig,
        Sig: Ord,
        R: Fn(&S) -> Rank,
        Rank: Ord,
    {
        let width = self.config.width.max(1);
        let mut beam = vec![start];
        let mut finished = Vec::new();
        let mut generation = 0usize;

        while !beam.is_empty() {
            generation += 1;
            let mut generated = 0usize;
            let mut groups: BTreeMap<Sig, Vec<S>> = BTreeMap::new();

            for state in beam {
                let next = (self.expand)(&state);
                if next.is_empty() {
                    finished.push(state);
                    continue;
                }
                generated += next.len();
                for successor in next {
                    groups
                        .entry((self.signature)(&successor))
                        .or_default()
                        .push(successor);
                }
            }

            let buckets = groups.len();
            beam = groups
                .into_values()
                .flat_map(|mut group| {
                    group.sort_by_cached_key(|s| Reverse((self.rank)(s)));
                    group.truncate(width);
                    group
                })
                .collect();

            debug!(
                generation,
                generated,
                buckets,
                kept = beam.len(),
                finished = finished.len(),
                "beam generation"
            );
        }

        finished
    }
}
