//! Shared candidate model.
//!
//! Both search engines (ABC and GA) operate on the same representation:
//!
//! - [`Candidate`]: one assignment solution, a fixed-length gene vector of
//!   resource indices plus a scalar fitness (higher is better)
//! - [`GeneBounds`]: the legal gene range for one resource-group
//! - [`Population`]: a fixed-size ordered collection of candidates with
//!   positional employed/onlooker views
//! - [`FitnessEvaluator`]: pure mapping from candidate + (group, batch)
//!   context to fitness
//! - [`BestTracker`]: per-group record of the best solution seen
//!
//! An engine owns one of each per run; nothing here is shared across
//! engine instances.

mod best;
mod candidate;
mod fitness;
mod population;

pub use best::BestTracker;
pub use candidate::{Candidate, GeneBounds};
pub use fitness::{FitnessBreakdown, FitnessEvaluator};
pub use population::Population;
