//! Task model.
//!
//! A task is one unit of computational work to be bound to a virtual
//! machine. Only its length matters to the search core; execution telemetry
//! belongs to the external engine.

use serde::{Deserialize, Serialize};

/// A computational task awaiting assignment.
///
/// Tasks are addressed positionally: the fitness evaluator locates the
/// slice for a (group, batch) pair by flat index arithmetic over the task
/// list, so list order is part of the contract with the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: usize,
    /// Task length in million instructions (MI).
    pub length: f64,
}

impl Task {
    /// Creates a task with the given ID and length in MI.
    pub fn new(id: usize, length: f64) -> Self {
        Self { id, length }
    }
}
