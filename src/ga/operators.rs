//! Genetic operators for integer allocation candidates.
//!
//! Free functions over [`Candidate`], parameterized on the caller's RNG
//! so engine runs stay reproducible under a fixed seed.

use rand::Rng;

use crate::search::{Candidate, GeneBounds, Population};

/// Tournament size for parent selection.
pub const TOURNAMENT_SIZE: usize = 3;

/// 3-way tournament: draws three random slots and returns the index of
/// the fittest. Earlier draws win ties.
pub fn tournament_select<R: Rng>(population: &Population, rng: &mut R) -> usize {
    let mut winner = rng.random_range(0..population.len());
    for _ in 1..TOURNAMENT_SIZE {
        let contender = rng.random_range(0..population.len());
        if population.get(contender).fitness > population.get(winner).fitness {
            winner = contender;
        }
    }
    winner
}

/// Single-point crossover applied with probability `crossover_probability`.
///
/// When the coin flip fails the parents are copied through unchanged.
/// Children carry unevaluated fitness either way.
pub fn single_point_crossover<R: Rng>(
    parent_a: &Candidate,
    parent_b: &Candidate,
    crossover_probability: f64,
    rng: &mut R,
) -> (Candidate, Candidate) {
    if !rng.random_bool(crossover_probability) {
        return (
            Candidate::new(parent_a.genes.clone()),
            Candidate::new(parent_b.genes.clone()),
        );
    }

    let point = rng.random_range(0..parent_a.len());
    let mut genes_a = parent_a.genes[..point].to_vec();
    genes_a.extend_from_slice(&parent_b.genes[point..]);
    let mut genes_b = parent_b.genes[..point].to_vec();
    genes_b.extend_from_slice(&parent_a.genes[point..]);

    (Candidate::new(genes_a), Candidate::new(genes_b))
}

/// Per-gene uniform mutation: each gene is independently redrawn from the
/// group's legal range with probability `mutation_probability`.
pub fn mutate<R: Rng>(
    candidate: &mut Candidate,
    bounds: GeneBounds,
    mutation_probability: f64,
    rng: &mut R,
) {
    for gene in &mut candidate.genes {
        if rng.random::<f64>() < mutation_probability {
            *gene = bounds.random_gene(rng);
        }
    }
}
