//! Elite opposition-based learning operators.
//!
//! Opposition reflects a solution through the midpoint of the legal gene
//! range; elite guidance blends the reflection toward one of the current
//! top solutions. With blend coefficient `d = 0` the result is a pure
//! reflection, with `d = 1` a copy of the chosen elite.

use crate::search::{Candidate, GeneBounds, Population};

/// Clones the `count` best candidates, descending by fitness.
///
/// Stable sort: candidates with equal fitness keep population order, so
/// elite selection is deterministic for a fixed input.
pub fn select_elites(population: &Population, count: usize) -> Vec<Candidate> {
    let mut sorted = population.candidates().to_vec();
    sorted.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    sorted.truncate(count);
    sorted
}

/// Builds the elite-opposition candidate for `original`.
///
/// The elite guide is picked by `floor(k * elites.len())`, clamped to the
/// last index; `k` is the caller's uniform draw. Per dimension:
///
/// ```text
/// opposite = (low + high) - gene
/// new      = clamp(trunc((1 - d) * opposite + d * elite_gene))
/// ```
pub fn elite_opposition(
    original: &Candidate,
    elites: &[Candidate],
    bounds: GeneBounds,
    d: f64,
    k: f64,
) -> Candidate {
    let elite_index = ((k * elites.len() as f64) as usize).min(elites.len() - 1);
    let elite = &elites[elite_index];

    let genes = original
        .genes
        .iter()
        .zip(&elite.genes)
        .map(|(&gene, &elite_gene)| {
            let opposite = (bounds.low + bounds.high) as i64 - gene as i64;
            let blended = (1.0 - d) * opposite as f64 + d * elite_gene as f64;
            bounds.clamp(blended as i64)
        })
        .collect();

    Candidate::new(genes)
}

/// Merges the population with `extra`, keeps the top `N` by fitness.
///
/// Stable sort descending; ties break by original order (current
/// population before opposition candidates), so a generation is
/// deterministic for a fixed input order.
pub fn merge_and_truncate(population: &mut Population, mut extra: Vec<Candidate>) {
    let size = population.len();
    let mut combined = population.candidates().to_vec();
    combined.append(&mut extra);
    combined.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    combined.truncate(size);
    population.replace(combined);
}
