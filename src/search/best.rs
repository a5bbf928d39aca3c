//! Per-group best-solution records.
//!
//! Each engine instance owns one tracker; records are keyed by resource-
//! group and only ever replaced by a strictly better fitness, so the stored
//! fitness is monotonically non-decreasing over the instance's lifetime.

use std::collections::HashMap;

use super::candidate::Candidate;

#[derive(Debug, Clone)]
struct BestRecord {
    fitness: f64,
    genes: Vec<usize>,
}

/// Best fitness and gene sequence seen per resource-group.
#[derive(Debug, Clone, Default)]
pub struct BestTracker {
    records: HashMap<usize, BestRecord>,
}

impl BestTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a candidate for `group`; records it if strictly better.
    ///
    /// Returns whether the record was updated. Equal fitness never
    /// replaces an incumbent.
    pub fn observe(&mut self, group: usize, candidate: &Candidate) -> bool {
        match self.records.get_mut(&group) {
            Some(record) if candidate.fitness <= record.fitness => false,
            Some(record) => {
                record.fitness = candidate.fitness;
                record.genes.clone_from(&candidate.genes);
                true
            }
            None => {
                self.records.insert(
                    group,
                    BestRecord {
                        fitness: candidate.fitness,
                        genes: candidate.genes.clone(),
                    },
                );
                true
            }
        }
    }

    /// Best fitness recorded for `group`, if any candidate was observed.
    pub fn best_fitness(&self, group: usize) -> Option<f64> {
        self.records.get(&group).map(|r| r.fitness)
    }

    /// Gene sequence of the best candidate recorded for `group`.
    pub fn best_allocation(&self, group: usize) -> Option<&[usize]> {
        self.records.get(&group).map(|r| r.genes.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(genes: Vec<usize>, fitness: f64) -> Candidate {
        let mut c = Candidate::new(genes);
        c.fitness = fitness;
        c
    }

    #[test]
    fn test_empty_tracker_reports_nothing() {
        let tracker = BestTracker::new();
        assert_eq!(tracker.best_fitness(1), None);
        assert_eq!(tracker.best_allocation(1), None);
    }

    #[test]
    fn test_fitness_is_non_decreasing() {
        let mut tracker = BestTracker::new();
        let observations = [0.4, 0.2, 0.9, 0.9, 0.5];
        let mut last = f64::NEG_INFINITY;
        for (i, &f) in observations.iter().enumerate() {
            tracker.observe(1, &scored(vec![i], f));
            let current = tracker.best_fitness(1).unwrap();
            assert!(current >= last);
            last = current;
        }
        assert_eq!(tracker.best_fitness(1), Some(0.9));
    }

    #[test]
    fn test_equal_fitness_keeps_incumbent() {
        let mut tracker = BestTracker::new();
        assert!(tracker.observe(1, &scored(vec![0], 0.7)));
        assert!(!tracker.observe(1, &scored(vec![5], 0.7)));
        assert_eq!(tracker.best_allocation(1), Some(&[0][..]));
    }

    #[test]
    fn test_groups_are_isolated() {
        let mut tracker = BestTracker::new();
        tracker.observe(1, &scored(vec![0], 0.3));
        tracker.observe(2, &scored(vec![9], 0.8));
        assert_eq!(tracker.best_fitness(1), Some(0.3));
        assert_eq!(tracker.best_fitness(2), Some(0.8));
        assert_eq!(tracker.best_allocation(2), Some(&[9][..]));
    }
}
