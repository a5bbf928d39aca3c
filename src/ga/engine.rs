//! Generational GA engine.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::{ConfigError, GaConfig};
use crate::models::{Resource, Task};
use crate::search::{BestTracker, Candidate, FitnessEvaluator, GeneBounds, Population};

use super::operators;

/// Genetic-algorithm engine for one (resource-group, batch) pair.
///
/// Shares the candidate/population/fitness contract with
/// [`AbcEngine`](crate::abc::AbcEngine) but searches by generational
/// replacement with tournament selection, single-point crossover, uniform
/// mutation, and single-candidate elitism.
pub struct GaEngine<'a> {
    config: GaConfig,
    tasks: &'a [Task],
    resources: &'a [Resource],
    best: BestTracker,
    rng: SmallRng,
}

impl<'a> GaEngine<'a> {
    /// Creates an engine over the given dataset. Fails fast on invalid
    /// configuration.
    pub fn new(
        config: GaConfig,
        tasks: &'a [Task],
        resources: &'a [Resource],
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Ok(Self {
            config,
            tasks,
            resources,
            best: BestTracker::new(),
            rng,
        })
    }

    /// Initializes a random population for the 1-based `group`.
    pub fn init_population(&mut self, candidate_length: usize, group: usize) -> Population {
        let bounds = GeneBounds::for_group(group, candidate_length);
        Population::random(
            self.config.population_size,
            candidate_length,
            bounds,
            &mut self.rng,
        )
    }

    /// Scores every candidate in place and tracks per-group bests.
    pub fn evaluate_fitness(&mut self, population: &mut Population, group: usize, batch: usize) {
        let evaluator = self.evaluator();
        for candidate in population.candidates_mut() {
            candidate.fitness = evaluator.evaluate(candidate, group, batch);
        }
        for candidate in population.candidates() {
            self.best.observe(group, candidate);
        }
    }

    /// Runs the search for exactly `max_iterations` generations.
    pub fn run(&mut self, population: &mut Population, group: usize, batch: usize) {
        self.evaluate_fitness(population, group, batch);
        population.sort_by_fitness();

        info!(
            "ga: run, group {group}, {} generations, population {}",
            self.config.max_iterations,
            population.len(),
        );

        for generation in 0..self.config.max_iterations {
            let next = self.next_generation(population, group);
            population.replace(next);
            self.evaluate_fitness(population, group, batch);
            population.sort_by_fitness();

            debug!(
                "ga: generation {generation}, best fitness {:?}",
                self.best.best_fitness(group),
            );
        }

        info!(
            "ga: run complete, group {group}, best fitness {:?}",
            self.best.best_fitness(group),
        );
    }

    /// Best gene sequence recorded for `group`.
    pub fn best_allocation(&self, group: usize) -> Option<&[usize]> {
        self.best.best_allocation(group)
    }

    /// Best fitness recorded for `group`.
    pub fn best_fitness(&self, group: usize) -> Option<f64> {
        self.best.best_fitness(group)
    }

    /// Builds the next generation from a fitness-sorted population.
    ///
    /// Elitism carries the current best through untouched; the remaining
    /// slots are filled by tournament selection, crossover, and mutation.
    fn next_generation(&mut self, population: &Population, group: usize) -> Vec<Candidate> {
        let size = population.len();
        let bounds = GeneBounds::for_group(group, population.get(0).len());

        // population is sorted descending, so slot 0 holds the elite
        let mut next = Vec::with_capacity(size);
        next.push(population.get(0).clone());

        while next.len() < size {
            let parent_a = population.get(operators::tournament_select(population, &mut self.rng));
            let parent_b = population.get(operators::tournament_select(population, &mut self.rng));

            let (mut child_a, mut child_b) = operators::single_point_crossover(
                parent_a,
                parent_b,
                self.config.crossover_probability,
                &mut self.rng,
            );
            operators::mutate(
                &mut child_a,
                bounds,
                self.config.mutation_probability,
                &mut self.rng,
            );
            operators::mutate(
                &mut child_b,
                bounds,
                self.config.mutation_probability,
                &mut self.rng,
            );

            next.push(child_a);
            if next.len() < size {
                next.push(child_b);
            }
        }
        next
    }

    fn evaluator(&self) -> FitnessEvaluator<'a> {
        FitnessEvaluator::new(self.tasks, self.resources)
    }
}
