//! Metaheuristic task-to-VM allocation.
//!
//! Assigns a fixed batch of tasks to a pool of virtual machines so as to
//! jointly minimize makespan and monetary cost, using population-based
//! stochastic search. One engine instance is created per
//! (resource-group, task-batch) pair by an outer simulation loop; the loop
//! reads the best allocation back once the search terminates.
//!
//! # Modules
//!
//! - **`models`**: Boundary types: `Task` (length in MI), `Resource`
//!   (processing rate, cost per MIPS)
//! - **`search`**: Shared candidate model: `Candidate`, `GeneBounds`,
//!   `Population`, `FitnessEvaluator`, `BestTracker`
//! - **`abc`**: Artificial bee colony engine with optional elite
//!   opposition-based learning (EOABC)
//! - **`ga`**: Generational genetic engine over the same candidate model
//! - **`config`**: Engine parameters with fail-fast validation
//! - **`validation`**: Input integrity checks for driver-supplied data
//!
//! # Architecture
//!
//! Both engines share one representation: a candidate is a fixed-length
//! vector of resource indices (one per task slot) scored by a pure fitness
//! function, and a population is a fixed-size ordered collection of
//! candidates. Engines own their RNG, their abandonment bookkeeping, and a
//! per-group best-record map; nothing is shared across instances, so
//! independent (group, batch) runs need no coordination.
//!
//! # References
//!
//! - Karaboga (2005), "An Idea Based on Honey Bee Swarm for Numerical
//!   Optimization"
//! - Karaboga & Basturk (2007), "A Powerful and Efficient Algorithm for
//!   Numerical Function Optimization: ABC"
//! - Zhou et al. (2015), "Elite Opposition-Based Learning for ABC"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"

pub mod abc;
pub mod config;
pub mod ga;
pub mod models;
pub mod search;
pub mod validation;
