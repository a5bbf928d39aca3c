//! Artificial bee colony search.
//!
//! Implements the canonical ABC cycle (employed-bee, onlooker-bee and
//! scout-bee phases over a fixed-size colony) plus the elite
//! opposition-based learning (EOBL) variant that reflects solutions through
//! the search-space midpoint under elite guidance.
//!
//! # Phases
//!
//! - **Employed**: each employed slot probes one neighbor
//!   (`v = x + φ(x − x_donor)`, `φ ∈ {−1, 0, 1}`) and keeps it only on
//!   strict improvement.
//! - **Onlooker**: fitness-proportional roulette selection re-probes good
//!   sources; every probe also lands in the next onlooker slot.
//! - **Scout**: the single most-abandoned source past the limit is replaced
//!   by a fresh random candidate.
//!
//! # Submodules
//!
//! - [`opposition`]: elite selection and opposition-candidate construction
//!
//! # Reference
//! - Karaboga & Basturk (2007), "A Powerful and Efficient Algorithm for
//!   Numerical Function Optimization: ABC"
//! - Zhou et al. (2015), "Elite Opposition-Based Learning for ABC"

mod engine;
pub mod opposition;

pub use engine::AbcEngine;
