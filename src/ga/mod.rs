//! GA-based allocation search.
//!
//! An alternative strategy over the same candidate/population/fitness
//! contract as [`crate::abc`]. Classic generational GA with integer
//! resource-index genes rather than a permutation encoding.
//!
//! # Operators
//!
//! - **Selection**: 3-way tournament, highest fitness wins.
//! - **Crossover**: single-point, applied with a configured probability
//!   (parents pass through unchanged otherwise).
//! - **Mutation**: per-gene uniform redraw within the group's legal range.
//! - **Elitism**: the single best candidate of each generation survives
//!   unconditionally.
//!
//! # Submodules
//!
//! - [`operators`]: free-function selection, crossover, and mutation
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"

mod engine;
pub mod operators;

pub use engine::GaEngine;
