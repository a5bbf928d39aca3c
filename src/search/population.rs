//! Fixed-size candidate population.
//!
//! The employed/onlooker split of the bee colony is positional, not
//! structural: slot `i < N/2` is always an employed slot, the rest are
//! onlooker slots. The split is exposed as two slice views over the one
//! underlying container so the invariant cannot drift.

use rand::Rng;

use super::candidate::{Candidate, GeneBounds};

/// A fixed-size ordered collection of candidates.
///
/// Size never changes during a run; engines mutate slots in place.
#[derive(Debug, Clone)]
pub struct Population {
    candidates: Vec<Candidate>,
}

impl Population {
    /// Initializes `size` uniformly random candidates of `candidate_length`
    /// genes inside `bounds`.
    pub fn random<R: Rng>(
        size: usize,
        candidate_length: usize,
        bounds: GeneBounds,
        rng: &mut R,
    ) -> Self {
        let candidates = (0..size)
            .map(|_| Candidate::random(candidate_length, bounds, rng))
            .collect();
        Self { candidates }
    }

    /// Wraps an existing candidate vector.
    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the population has no slots.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of employed slots (the first half).
    pub fn employed_count(&self) -> usize {
        self.candidates.len() / 2
    }

    /// The candidate at `index`.
    pub fn get(&self, index: usize) -> &Candidate {
        &self.candidates[index]
    }

    /// Replaces the candidate at `index`.
    pub fn set(&mut self, index: usize, candidate: Candidate) {
        self.candidates[index] = candidate;
    }

    /// All slots in order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Mutable access to all slots.
    pub fn candidates_mut(&mut self) -> &mut [Candidate] {
        &mut self.candidates
    }

    /// The employed view: slots `0..N/2`.
    pub fn employed(&self) -> &[Candidate] {
        &self.candidates[..self.employed_count()]
    }

    /// The onlooker view: slots `N/2..N`.
    pub fn onlookers(&self) -> &[Candidate] {
        &self.candidates[self.employed_count()..]
    }

    /// Index and fitness of the single best slot.
    pub fn best(&self) -> Option<(usize, &Candidate)> {
        let mut best: Option<(usize, &Candidate)> = None;
        for (i, c) in self.candidates.iter().enumerate() {
            match best {
                Some((_, b)) if c.fitness <= b.fitness => {}
                _ => best = Some((i, c)),
            }
        }
        best
    }

    /// Stable sort by descending fitness; ties keep their original order.
    pub fn sort_by_fitness(&mut self) {
        self.candidates
            .sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    }

    /// Replaces the whole slot vector.
    ///
    /// Callers must preserve the population size; debug builds assert it.
    pub fn replace(&mut self, candidates: Vec<Candidate>) {
        debug_assert_eq!(candidates.len(), self.candidates.len());
        self.candidates = candidates;
    }
}
