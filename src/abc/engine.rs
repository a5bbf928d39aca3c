//! Bee-colony search engine.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{AbcConfig, ConfigError};
use crate::models::{Resource, Task};
use crate::search::{BestTracker, Candidate, FitnessEvaluator, GeneBounds, Population};

use super::opposition;

/// Probability of taking the opposition branch in an EOBL generation.
const OPPOSITION_PROBABILITY: f64 = 0.5;

/// Artificial bee colony engine for one (resource-group, batch) pair.
///
/// Owns its RNG, abandonment counters, and per-group best records; nothing
/// is shared across engine instances. The driver constructs one engine,
/// calls [`init_population`](Self::init_population), runs the search to
/// completion with [`run`](Self::run), then reads the best allocation back.
pub struct AbcEngine<'a> {
    config: AbcConfig,
    tasks: &'a [Task],
    resources: &'a [Resource],
    abandonment: Vec<u32>,
    best: BestTracker,
    rng: SmallRng,
}

impl<'a> AbcEngine<'a> {
    /// Creates an engine over the given dataset.
    ///
    /// Fails fast on invalid configuration; task/resource sizing is the
    /// driver's contract (see `validation::validate_coverage`).
    pub fn new(
        config: AbcConfig,
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
            abandonment: Vec::new(),
            best: BestTracker::new(),
            rng,
        })
    }

    /// Initializes a random population for the 1-based `group`.
    ///
    /// `candidate_length` is the batch's task-slot count and also fixes the
    /// group's legal gene range.
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

    /// Runs the configured search to termination.
    pub fn run(&mut self, population: &mut Population, group: usize, batch: usize) {
        if self.config.use_eobl {
            self.run_eobl(population, group, batch);
        } else {
            self.run_standard(population, group, batch);
        }
    }

    /// Best gene sequence recorded for `group`.
    ///
    /// Valid any time after at least one evaluation for that group.
    pub fn best_allocation(&self, group: usize) -> Option<&[usize]> {
        self.best.best_allocation(group)
    }

    /// Best fitness recorded for `group`.
    pub fn best_fitness(&self, group: usize) -> Option<f64> {
        self.best.best_fitness(group)
    }

    /// Standard ABC: exactly `max_iterations` generations.
    fn run_standard(&mut self, population: &mut Population, group: usize, batch: usize) {
        self.evaluate_fitness(population, group, batch);
        self.reset_abandonment(population.len());

        info!(
            "abc: standard run, group {group}, {} generations, colony {}",
            self.config.max_iterations,
            population.len(),
        );

        for generation in 0..self.config.max_iterations {
            self.employed_bee_phase(population, group, batch);
            let probabilities = self.selection_probabilities(population);
            self.onlooker_bee_phase(population, &probabilities, group, batch);
            self.store_best(population, group);
            self.scout_bee_phase(population, group, batch);

            debug!(
                "abc: generation {generation}, best fitness {:?}",
                self.best.best_fitness(group),
            );
        }

        info!(
            "abc: run complete, group {group}, best fitness {:?}",
            self.best.best_fitness(group),
        );
    }

    /// EOABC: bounded by `max_iterations * population_size` evaluations.
    fn run_eobl(&mut self, population: &mut Population, group: usize, batch: usize) {
        self.evaluate_fitness(population, group, batch);
        self.reset_abandonment(population.len());

        let max_evaluations = self.config.max_iterations * self.config.population_size;
        let mut evaluations = population.len();

        info!(
            "abc: eobl run, group {group}, budget {max_evaluations} evaluations, colony {}",
            population.len(),
        );

        while evaluations < max_evaluations {
            let pr: f64 = self.rng.random();
            if pr < OPPOSITION_PROBABILITY {
                evaluations += self.opposition_generation(population, group, batch);
            } else {
                self.employed_bee_phase(population, group, batch);
                evaluations += population.employed_count();

                let probabilities = self.selection_probabilities(population);
                self.onlooker_bee_phase(population, &probabilities, group, batch);
                evaluations += population.employed_count();

                self.store_best(population, group);
                if self.scout_bee_phase(population, group, batch) {
                    evaluations += 1;
                }
            }

            debug!(
                "abc: {evaluations}/{max_evaluations} evaluations, best fitness {:?}",
                self.best.best_fitness(group),
            );
        }

        info!(
            "abc: run complete, group {group}, {evaluations} evaluations, best fitness {:?}",
            self.best.best_fitness(group),
        );
    }

    /// One elite-opposition generation; returns evaluations consumed.
    fn opposition_generation(
        &mut self,
        population: &mut Population,
        group: usize,
        batch: usize,
    ) -> usize {
        let evaluator = self.evaluator();
        let bounds = self.bounds(population, group);
        let elite_count = (population.len() / 10).max(2);
        let elites = opposition::select_elites(population, elite_count);

        let mut opposition_pool = Vec::with_capacity(population.len());
        for index in 0..population.len() {
            let k: f64 = self.rng.random();
            let mut opposite = opposition::elite_opposition(
                population.get(index),
                &elites,
                bounds,
                self.config.elite_coefficient,
                k,
            );
            opposite.fitness = evaluator.evaluate(&opposite, group, batch);
            self.best.observe(group, &opposite);
            opposition_pool.push(opposite);
        }

        let consumed = opposition_pool.len();
        opposition::merge_and_truncate(population, opposition_pool);
        consumed
    }

    /// Employed-bee phase: one greedy neighbor probe per employed slot.
    fn employed_bee_phase(&mut self, population: &mut Population, group: usize, batch: usize) {
        let evaluator = self.evaluator();
        let bounds = self.bounds(population, group);

        for index in 0..population.employed_count() {
            let mut neighbor = self.generate_neighbor(population, index, bounds);
            neighbor.fitness = evaluator.evaluate(&neighbor, group, batch);

            if neighbor.fitness > population.get(index).fitness {
                self.best.observe(group, &neighbor);
                population.set(index, neighbor);
                self.abandonment[index] = 0;
            } else {
                self.abandonment[index] += 1;
            }
        }
    }

    /// Onlooker-bee phase: `N/2` roulette-guided probes.
    ///
    /// Every probe is written to the next onlooker slot in call order
    /// regardless of quality, and additionally replaces the selected
    /// employed slot on strict improvement.
    fn onlooker_bee_phase(
        &mut self,
        population: &mut Population,
        probabilities: &[f64],
        group: usize,
        batch: usize,
    ) {
        let evaluator = self.evaluator();
        let bounds = self.bounds(population, group);
        let employed_count = population.employed_count();

        for onlooker in 0..employed_count {
            let selected = self.select_food_source(probabilities, employed_count);
            let mut neighbor = self.generate_neighbor(population, selected, bounds);
            neighbor.fitness = evaluator.evaluate(&neighbor, group, batch);
            self.best.observe(group, &neighbor);

            population.set(employed_count + onlooker, neighbor.clone());

            if neighbor.fitness > population.get(selected).fitness {
                population.set(selected, neighbor);
                self.abandonment[selected] = 0;
            } else {
                self.abandonment[selected] += 1;
            }
        }
    }

    /// Scout-bee phase: replaces the single most-abandoned employed slot
    /// with a fresh random candidate once its counter exceeds the limit.
    ///
    /// Returns whether a replacement happened.
    fn scout_bee_phase(&mut self, population: &mut Population, group: usize, batch: usize) -> bool {
        let employed_count = population.employed_count();
        // first-max scan: ties keep the lowest slot index
        let mut most_abandoned = 0;
        let mut count = match self.abandonment[..employed_count].first() {
            Some(&c) => c,
            None => return false,
        };
        for (slot, &c) in self.abandonment[..employed_count].iter().enumerate().skip(1) {
            if c > count {
                most_abandoned = slot;
                count = c;
            }
        }

        if f64::from(count) <= self.config.abandonment_limit {
            return false;
        }

        debug!("abc: slot {most_abandoned} abandoned after {count} failed probes");

        let evaluator = self.evaluator();
        let bounds = self.bounds(population, group);
        let length = population.get(most_abandoned).len();
        let mut scout = Candidate::random(length, bounds, &mut self.rng);
        scout.fitness = evaluator.evaluate(&scout, group, batch);
        self.best.observe(group, &scout);

        population.set(most_abandoned, scout);
        self.abandonment[most_abandoned] = 0;
        true
    }

    /// Records the colony's current best candidate for `group`.
    fn store_best(&mut self, population: &Population, group: usize) {
        if let Some((_, candidate)) = population.best() {
            self.best.observe(group, candidate);
        }
    }

    /// Selection probabilities: fitness share for employed slots, zero for
    /// the rest. All zero when the employed fitness sum is not positive.
    fn selection_probabilities(&self, population: &Population) -> Vec<f64> {
        let mut probabilities = vec![0.0; population.len()];
        let sum: f64 = population.employed().iter().map(|c| c.fitness).sum();
        if sum > 0.0 {
            for (p, candidate) in probabilities.iter_mut().zip(population.employed()) {
                *p = candidate.fitness / sum;
            }
        }
        probabilities
    }

    /// Roulette selection over the employed prefix with a uniform fallback
    /// when rounding lets the wheel complete without a hit.
    fn select_food_source(&mut self, probabilities: &[f64], employed_count: usize) -> usize {
        let r: f64 = self.rng.random();
        roulette_pick(&probabilities[..employed_count], r)
            .unwrap_or_else(|| self.rng.random_range(0..employed_count))
    }

    /// Probes one neighbor of slot `index`: a single random dimension moved
    /// by `φ(x − x_donor)` against a random other employed donor.
    fn generate_neighbor(
        &mut self,
        population: &Population,
        index: usize,
        bounds: GeneBounds,
    ) -> Candidate {
        let current = population.get(index);
        let employed_count = population.employed_count();

        let dimension = self.rng.random_range(0..current.len());
        let donor = if employed_count > 1 {
            loop {
                let other = self.rng.random_range(0..employed_count);
                if other != index {
                    break other;
                }
            }
        } else {
            // degenerate single-employed colony: the probe cannot move
            index
        };

        let phi = self.rng.random_range(-1..=1i64);
        let donor_gene = population.get(donor).genes[dimension];

        let mut genes = current.genes.clone();
        genes[dimension] = neighbor_gene(current.genes[dimension], donor_gene, phi, bounds);
        Candidate::new(genes)
    }

    fn evaluator(&self) -> FitnessEvaluator<'a> {
        FitnessEvaluator::new(self.tasks, self.resources)
    }

    fn bounds(&self, population: &Population, group: usize) -> GeneBounds {
        GeneBounds::for_group(group, population.get(0).len())
    }

    fn reset_abandonment(&mut self, size: usize) {
        self.abandonment.clear();
        self.abandonment.resize(size, 0);
    }
}

/// The ABC position update `v = x + φ(x − x_donor)`, clamped into bounds.
fn neighbor_gene(x: usize, donor: usize, phi: i64, bounds: GeneBounds) -> usize {
    let x = x as i64;
    let v = x + phi * (x - donor as i64);
    bounds.clamp(v)
}

/// Smallest index whose cumulative probability reaches `r`, if any.
fn roulette_pick(probabilities: &[f64], r: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    for (index, p) in probabilities.iter().enumerate() {
        cumulative += p;
        if r <= cumulative {
            return Some(index);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOTS: usize = 2;

    fn dataset(task_count: usize) -> (Vec<Task>, Vec<Resource>) {
        let tasks = (0..task_count)
            .map(|i| Task::new(i, 400.0 + 100.0 * i as f64))
            .collect();
        let resources = Resource::tiered_pool(SLOTS);
        (tasks, resources)
    }

    fn config() -> AbcConfig {
        AbcConfig::new(10, 10, SLOTS).with_seed(42)
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        let (tasks, resources) = dataset(2);
        let mut cfg = config();
        cfg.population_size = 7;
        assert!(AbcEngine::new(cfg, &tasks, &resources).is_err());
    }

    #[test]
    fn test_init_population_scenario() {
        // populationSize = 10, L = 2, group 1 => 10 candidates, genes in {0, 1}
        let (tasks, resources) = dataset(2);
        let mut engine = AbcEngine::new(config(), &tasks, &resources).unwrap();
        let population = engine.init_population(SLOTS, 1);

        assert_eq!(population.len(), 10);
        let bounds = GeneBounds::for_group(1, SLOTS);
        for candidate in population.candidates() {
            assert_eq!(candidate.len(), SLOTS);
            assert!(candidate.in_bounds(bounds));
        }
    }

    #[test]
    fn test_evaluate_fitness_scores_and_tracks_best() {
        let (tasks, resources) = dataset(2);
        let mut engine = AbcEngine::new(config(), &tasks, &resources).unwrap();
        let mut population = engine.init_population(SLOTS, 1);

        engine.evaluate_fitness(&mut population, 1, 0);

        let max = population
            .candidates()
            .iter()
            .map(|c| c.fitness)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(max.is_finite());
        assert_eq!(engine.best_fitness(1), Some(max));
        assert!(engine.best_allocation(1).is_some());
    }

    #[test]
    fn test_employed_phase_never_regresses() {
        let (tasks, resources) = dataset(2);
        let mut engine = AbcEngine::new(config(), &tasks, &resources).unwrap();
        let mut population = engine.init_population(SLOTS, 1);
        engine.evaluate_fitness(&mut population, 1, 0);
        engine.reset_abandonment(population.len());

        let before: Vec<f64> = population.employed().iter().map(|c| c.fitness).collect();
        engine.employed_bee_phase(&mut population, 1, 0);

        for (slot, &old) in before.iter().enumerate() {
            assert!(population.get(slot).fitness >= old);
        }
    }

    #[test]
    fn test_abandonment_counters_step_by_one() {
        let (tasks, resources) = dataset(2);
        let mut engine = AbcEngine::new(config(), &tasks, &resources).unwrap();

        // identical candidates: every probe reproduces the incumbent, so
        // no strict improvement is possible and every counter ticks once
        let candidate = {
            let mut c = Candidate::new(vec![0, 1]);
            c.fitness = f64::NEG_INFINITY;
            c
        };
        let mut population = Population::from_candidates(vec![candidate; 10]);
        engine.evaluate_fitness(&mut population, 1, 0);
        engine.reset_abandonment(population.len());

        engine.employed_bee_phase(&mut population, 1, 0);
        for slot in 0..population.employed_count() {
            assert_eq!(engine.abandonment[slot], 1);
        }

        engine.employed_bee_phase(&mut population, 1, 0);
        for slot in 0..population.employed_count() {
            assert_eq!(engine.abandonment[slot], 2);
        }
    }

    #[test]
    fn test_onlooker_phase_fills_onlooker_slots() {
        let (tasks, resources) = dataset(2);
        let mut engine = AbcEngine::new(config(), &tasks, &resources).unwrap();
        let mut population = engine.init_population(SLOTS, 1);
        engine.evaluate_fitness(&mut population, 1, 0);
        engine.reset_abandonment(population.len());

        let before: Vec<f64> = population.employed().iter().map(|c| c.fitness).collect();
        let probabilities = engine.selection_probabilities(&population);
        engine.onlooker_bee_phase(&mut population, &probabilities, 1, 0);

        // every onlooker slot holds a freshly evaluated candidate
        for candidate in population.onlookers() {
            assert!(candidate.fitness.is_finite());
        }
        // employed slots never regressed
        for (slot, &old) in before.iter().enumerate() {
            assert!(population.get(slot).fitness >= old);
        }
    }

    #[test]
    fn test_scout_noop_when_counters_below_limit() {
        let (tasks, resources) = dataset(2);
        let cfg = config().with_abandonment_limit(5.0);
        let mut engine = AbcEngine::new(cfg, &tasks, &resources).unwrap();
        let mut population = engine.init_population(SLOTS, 1);
        engine.evaluate_fitness(&mut population, 1, 0);
        engine.reset_abandonment(population.len());

        let snapshot = population.clone();
        assert!(!engine.scout_bee_phase(&mut population, 1, 0));
        assert_eq!(population.candidates(), snapshot.candidates());
        assert!(engine.abandonment.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_scout_replaces_single_most_abandoned_slot() {
        let (tasks, resources) = dataset(2);
        let cfg = config().with_abandonment_limit(5.0);
        let mut engine = AbcEngine::new(cfg, &tasks, &resources).unwrap();
        let mut population = engine.init_population(SLOTS, 1);
        engine.evaluate_fitness(&mut population, 1, 0);
        engine.reset_abandonment(population.len());
        engine.abandonment[2] = 9;
        engine.abandonment[3] = 7;

        assert!(engine.scout_bee_phase(&mut population, 1, 0));
        assert_eq!(engine.abandonment[2], 0);
        // only the worst offender is replaced
        assert_eq!(engine.abandonment[3], 7);
        assert!(population.get(2).in_bounds(GeneBounds::for_group(1, SLOTS)));
        assert!(population.get(2).fitness.is_finite());
    }

    #[test]
    fn test_scout_tie_break_replaces_lowest_slot() {
        // counters rise in lockstep when a generation yields no improvement,
        // so equal maxima are routine; the earliest slot must be the one reset
        let (tasks, resources) = dataset(2);
        let cfg = config().with_abandonment_limit(5.0);
        let mut engine = AbcEngine::new(cfg, &tasks, &resources).unwrap();
        let mut population = engine.init_population(SLOTS, 1);
        engine.evaluate_fitness(&mut population, 1, 0);
        engine.reset_abandonment(population.len());
        engine.abandonment[0] = 9;
        engine.abandonment[1] = 9;

        assert!(engine.scout_bee_phase(&mut population, 1, 0));
        assert_eq!(engine.abandonment[0], 0);
        assert_eq!(engine.abandonment[1], 9);
    }

    #[test]
    fn test_roulette_returns_smallest_qualifying_index() {
        let probabilities = [0.2, 0.3, 0.5];
        assert_eq!(roulette_pick(&probabilities, 0.0), Some(0));
        assert_eq!(roulette_pick(&probabilities, 0.2), Some(0));
        assert_eq!(roulette_pick(&probabilities, 0.21), Some(1));
        assert_eq!(roulette_pick(&probabilities, 0.5), Some(1));
        assert_eq!(roulette_pick(&probabilities, 0.51), Some(2));
        assert_eq!(roulette_pick(&probabilities, 1.0), Some(2));
    }

    #[test]
    fn test_roulette_misses_without_probability_mass() {
        assert_eq!(roulette_pick(&[0.1, 0.1], 0.9), None);
        assert_eq!(roulette_pick(&[], 0.5), None);
    }

    #[test]
    fn test_neighbor_gene_zero_phi_is_identity() {
        let bounds = GeneBounds::for_group(1, 9);
        for x in 0..=8 {
            assert_eq!(neighbor_gene(x, 5, 0, bounds), x);
        }
    }

    #[test]
    fn test_neighbor_gene_clamps_both_directions() {
        let bounds = GeneBounds::for_group(2, 9); // [9, 17]
        // 9 + 1*(9 - 17) = 1 -> clamps up to 9
        assert_eq!(neighbor_gene(9, 17, 1, bounds), 9);
        // 17 + (-1)*(17 - 9) = 9, in range
        assert_eq!(neighbor_gene(17, 9, -1, bounds), 9);
        // 17 + 1*(17 - 9) = 25 -> clamps down to 17
        assert_eq!(neighbor_gene(17, 9, 1, bounds), 17);
    }

    #[test]
    fn test_standard_run_is_deterministic_and_in_bounds() {
        let (tasks, resources) = dataset(2);
        let bounds = GeneBounds::for_group(1, SLOTS);

        let run = || {
            let mut engine = AbcEngine::new(config(), &tasks, &resources).unwrap();
            let mut population = engine.init_population(SLOTS, 1);
            engine.run(&mut population, 1, 0);
            let allocation = engine.best_allocation(1).unwrap().to_vec();
            (engine.best_fitness(1).unwrap(), allocation, population)
        };

        let (fitness_a, allocation_a, population) = run();
        let (fitness_b, allocation_b, _) = run();

        assert_eq!(fitness_a, fitness_b);
        assert_eq!(allocation_a, allocation_b);
        assert!(allocation_a.iter().all(|&g| bounds.contains(g)));
        for candidate in population.candidates() {
            assert!(candidate.in_bounds(bounds));
        }
    }

    #[test]
    fn test_standard_run_never_beats_tracker() {
        let (tasks, resources) = dataset(2);
        let mut engine = AbcEngine::new(config(), &tasks, &resources).unwrap();
        let mut population = engine.init_population(SLOTS, 1);
        engine.run(&mut population, 1, 0);

        let best = engine.best_fitness(1).unwrap();
        for candidate in population.candidates() {
            assert!(candidate.fitness <= best);
        }
    }

    #[test]
    fn test_eobl_run_terminates_and_tracks_best() {
        let (tasks, resources) = dataset(2);
        let cfg = config().with_eobl(true).with_elite_coefficient(0.9);
        let mut engine = AbcEngine::new(cfg, &tasks, &resources).unwrap();
        let mut population = engine.init_population(SLOTS, 1);

        engine.evaluate_fitness(&mut population, 1, 0);
        let initial_best = engine.best_fitness(1).unwrap();

        engine.run(&mut population, 1, 0);
        let final_best = engine.best_fitness(1).unwrap();

        assert!(final_best >= initial_best);
        let bounds = GeneBounds::for_group(1, SLOTS);
        for candidate in population.candidates() {
            assert!(candidate.in_bounds(bounds));
        }
    }

    #[test]
    fn test_groups_do_not_interfere() {
        let (tasks, resources) = dataset(4);
        let mut engine = AbcEngine::new(config(), &tasks, &resources).unwrap();

        let mut first = engine.init_population(SLOTS, 1);
        engine.run(&mut first, 1, 0);
        let group_one = engine.best_fitness(1);

        let mut second = engine.init_population(SLOTS, 2);
        engine.run(&mut second, 2, 0);

        assert_eq!(engine.best_fitness(1), group_one);
        assert!(engine.best_fitness(2).is_some());
        let bounds = GeneBounds::for_group(2, SLOTS);
        assert!(engine
            .best_allocation(2)
            .unwrap()
            .iter()
            .all(|&g| bounds.contains(g)));
    }
}
