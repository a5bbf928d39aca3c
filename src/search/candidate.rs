//! Candidate encoding and per-group gene bounds.
//!
//! # Encoding
//!
//! A candidate holds one gene per task slot. Each gene is a resource index
//! constrained to the half-open partition of the resource pool owned by the
//! current resource-group: group `g` (1-based) may only use indices
//! `[(g-1)*L, g*L - 1]` where `L` is the slot count per group.

use rand::Rng;

/// Sentinel for a fitness that has not been computed yet.
///
/// Strict `>` comparison is used for every replacement decision, so the
/// sentinel can never displace an evaluated candidate.
pub(crate) const UNEVALUATED: f64 = f64::NEG_INFINITY;

/// Legal gene range for one resource-group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneBounds {
    /// Smallest legal gene value (inclusive).
    pub low: usize,
    /// Largest legal gene value (inclusive).
    pub high: usize,
}

impl GeneBounds {
    /// Bounds for a 1-based group index over `slots` task slots per group.
    pub fn for_group(group: usize, slots: usize) -> Self {
        debug_assert!(group >= 1, "group indices are 1-based");
        Self {
            low: (group - 1) * slots,
            high: group * slots - 1,
        }
    }

    /// Whether `gene` lies inside the bounds.
    pub fn contains(&self, gene: usize) -> bool {
        gene >= self.low && gene <= self.high
    }

    /// Clamps a (possibly negative) raw position into the bounds.
    ///
    /// Neighbor and opposition arithmetic can leave the legal range in
    /// either direction; every write back into a candidate goes through
    /// this clamp.
    pub fn clamp(&self, raw: i64) -> usize {
        if raw < self.low as i64 {
            self.low
        } else if raw > self.high as i64 {
            self.high
        } else {
            raw as usize
        }
    }

    /// Draws a uniformly random legal gene value.
    pub fn random_gene<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(self.low..=self.high)
    }
}

/// One assignment solution: a resource index per task slot plus fitness.
///
/// Fitness is `NEG_INFINITY` until evaluated; higher is better.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Resource index per task slot, each inside the group's bounds.
    pub genes: Vec<usize>,
    /// Scalar fitness, higher is better.
    pub fitness: f64,
}

impl Candidate {
    /// Wraps an existing gene vector with unevaluated fitness.
    pub fn new(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: UNEVALUATED,
        }
    }

    /// Creates a candidate with `length` uniformly random legal genes.
    pub fn random<R: Rng>(length: usize, bounds: GeneBounds, rng: &mut R) -> Self {
        let genes = (0..length).map(|_| bounds.random_gene(rng)).collect();
        Self::new(genes)
    }

    /// Number of task slots.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the candidate has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Whether every gene lies inside `bounds`.
    pub fn in_bounds(&self, bounds: GeneBounds) -> bool {
        self.genes.iter().all(|&g| bounds.contains(g))
    }
}
