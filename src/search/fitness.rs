//! Fitness evaluation.
//!
//! Scores a candidate as `1/totalTime + 1/totalCost` over the task slice
//! addressed by the (group, batch) pair. Lower makespan and lower cost both
//! raise fitness; the two reciprocals are simply summed, matching the
//! reference model.
//!
//! # Time term
//!
//! The execution-time estimate uses the three-way tier table
//! (`400/500/600` MIPS indexed by `(gene % L) % 3`) rather than the
//! resource's own rate. This derived formula is kept bit-for-bit for output
//! parity with the reference results; the cost term reads the actual
//! resource properties, exactly as the reference does. The two agree for
//! pools built by [`Resource::tiered_pool`].
//!
//! # Degenerate inputs
//!
//! A zero time or cost sum yields infinite fitness, which propagates as a
//! valid (dominating) value; deliberately not clamped.

use crate::models::{Resource, Task, TIER_RATES};

use super::candidate::Candidate;

/// Fitness split into its two cost components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessBreakdown {
    /// Estimated total execution time over the batch slice.
    pub total_time: f64,
    /// Estimated total monetary cost over the batch slice.
    pub total_cost: f64,
    /// Combined fitness: `1/total_time + 1/total_cost`.
    pub fitness: f64,
}

/// Pure candidate scorer bound to one task/resource dataset.
///
/// # Preconditions
///
/// Task and resource lists must be sized consistently with the group/batch
/// arithmetic (`first = (group-1)*L + batch*resources.len()`, `L` genes from
/// there). The evaluator performs no bounds validation of its own; an
/// undersized list panics on slice indexing. `validation::validate_coverage`
/// lets drivers check this up front.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    tasks: &'a [Task],
    resources: &'a [Resource],
}

impl<'a> FitnessEvaluator<'a> {
    /// Binds the evaluator to a dataset.
    pub fn new(tasks: &'a [Task], resources: &'a [Resource]) -> Self {
        Self { tasks, resources }
    }

    /// Scores a candidate for the given 1-based group and 0-based batch.
    pub fn evaluate(&self, candidate: &Candidate, group: usize, batch: usize) -> f64 {
        self.breakdown(candidate, group, batch).fitness
    }

    /// Scores a candidate and reports the time/cost components.
    pub fn breakdown(&self, candidate: &Candidate, group: usize, batch: usize) -> FitnessBreakdown {
        let slots = candidate.len();
        let first = (group - 1) * slots + batch * self.resources.len();

        let mut total_time = 0.0;
        let mut total_cost = 0.0;
        for (j, &gene) in candidate.genes.iter().enumerate() {
            let task = &self.tasks[first + j];
            let resource = &self.resources[gene % slots];

            total_time += task.length / tier_rate(gene % slots);
            total_cost += resource.cost_per_mips * (task.length / resource.mips);
        }

        FitnessBreakdown {
            total_time,
            total_cost,
            fitness: 1.0 / total_time + 1.0 / total_cost,
        }
    }
}

/// Derived per-tier processing rate: `(index % 3)` selects 400/500/600 MIPS.
fn tier_rate(index: usize) -> f64 {
    TIER_RATES[index % 3]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_slot_dataset() -> (Vec<Task>, Vec<Resource>) {
        let tasks = vec![Task::new(0, 400.0), Task::new(1, 500.0)];
        let resources = Resource::tiered_pool(2);
        (tasks, resources)
    }

    #[test]
    fn test_hand_computed_fitness() {
        let (tasks, resources) = two_slot_dataset();
        let evaluator = FitnessEvaluator::new(&tasks, &resources);
        let candidate = Candidate::new(vec![0, 1]);

        // time = 400/400 + 500/500 = 2
        // cost = 3*(400/400) + 3*(500/500) = 6
        let b = evaluator.breakdown(&candidate, 1, 0);
        assert_eq!(b.total_time, 2.0);
        assert_eq!(b.total_cost, 6.0);
        assert!((b.fitness - (0.5 + 1.0 / 6.0)).abs() < 1e-12);
    }

    #[test]
    fn test_gene_wraps_modulo_slots() {
        let (tasks, resources) = two_slot_dataset();
        let evaluator = FitnessEvaluator::new(&tasks, &resources);

        // genes from a higher group address the same resources mod L
        let local = Candidate::new(vec![0, 1]);
        let shifted = Candidate::new(vec![2, 3]);
        assert_eq!(
            evaluator.evaluate(&local, 1, 0),
            evaluator.evaluate(&shifted, 1, 0),
        );
    }

    #[test]
    fn test_batch_offset_selects_next_slice() {
        let mut tasks = vec![Task::new(0, 400.0), Task::new(1, 500.0)];
        // batch 1 starts at resources.len() = 2
        tasks.push(Task::new(2, 800.0));
        tasks.push(Task::new(3, 1000.0));
        let resources = Resource::tiered_pool(2);
        let evaluator = FitnessEvaluator::new(&tasks, &resources);
        let candidate = Candidate::new(vec![0, 1]);

        let b = evaluator.breakdown(&candidate, 1, 1);
        assert_eq!(b.total_time, 800.0 / 400.0 + 1000.0 / 500.0);
    }

    #[test]
    fn test_zero_length_tasks_produce_infinite_fitness() {
        let tasks = vec![Task::new(0, 0.0), Task::new(1, 0.0)];
        let resources = Resource::tiered_pool(2);
        let evaluator = FitnessEvaluator::new(&tasks, &resources);
        let candidate = Candidate::new(vec![0, 1]);

        // propagates uncontrolled, by contract
        assert_eq!(evaluator.evaluate(&candidate, 1, 0), f64::INFINITY);
    }
}
