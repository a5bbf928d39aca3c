//! Boundary domain models.
//!
//! The search core consumes tasks and resources read-only; it never owns,
//! loads, or executes them. The outer simulation loop builds these lists
//! (from dataset files in the reference setup) and hands slices to the
//! engines.
//!
//! # Domain Mappings
//!
//! | swarm-sched | Cloud simulation | Cluster batch |
//! |-------------|------------------|---------------|
//! | Task | Cloudlet | Job |
//! | Resource | Virtual machine | Node slot |
//! | Resource-group | Datacenter | Rack |

mod resource;
mod task;

pub use resource::{Resource, DEFAULT_COST_PER_MIPS, TIER_RATES};
pub use task::Task;
