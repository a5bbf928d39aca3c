//! Resource (virtual machine) model.
//!
//! Resources are the execution targets tasks get bound to. The search core
//! reads two properties: the processing rate (MIPS) for execution-time
//! estimates and the cost per MIPS for monetary cost.

use serde::{Deserialize, Serialize};

/// Processing rates of the three VM tiers in the reference configuration.
pub const TIER_RATES: [f64; 3] = [400.0, 500.0, 600.0];

/// Cost per MIPS charged by every datacenter in the reference configuration.
pub const DEFAULT_COST_PER_MIPS: f64 = 3.0;

/// A virtual machine that tasks can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: usize,
    /// Processing rate in MIPS.
    pub mips: f64,
    /// Monetary cost per MIPS of work.
    pub cost_per_mips: f64,
}

impl Resource {
    /// Creates a resource with the given rate and cost.
    pub fn new(id: usize, mips: f64, cost_per_mips: f64) -> Self {
        Self {
            id,
            mips,
            cost_per_mips,
        }
    }

    /// Builds a pool of `count` resources cycling through the three
    /// reference tiers (400/500/600 MIPS) at the default cost per MIPS.
    ///
    /// Mirrors the VM layout of the reference simulation, where every
    /// datacenter hosts the same three-tier pattern.
    pub fn tiered_pool(count: usize) -> Vec<Self> {
        (0..count)
            .map(|i| Self::new(i, TIER_RATES[i % 3], DEFAULT_COST_PER_MIPS))
            .collect()
    }
}
