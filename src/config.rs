//! Engine configuration.
//!
//! Parameters are validated once, at engine construction; invalid
//! configuration is a descriptive error, never a mid-run surprise.
//! Indexing preconditions, by contrast, stay the driver's responsibility
//! (see `validation`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration rejected at engine construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Population size must be positive.
    PopulationEmpty,
    /// Population size must be even to split into employed/onlooker halves.
    PopulationOdd(usize),
    /// Iteration (or evaluation) budget must be positive.
    NoIterationBudget,
    /// Elite coefficient `d` must lie in `[0, 1]`.
    EliteCoefficientOutOfRange(f64),
    /// A probability parameter must lie in `[0, 1]`.
    ProbabilityOutOfRange {
        /// Parameter name, e.g. `"crossover_probability"`.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PopulationEmpty => write!(f, "population size must be positive"),
            Self::PopulationOdd(n) => {
                write!(f, "population size must be even, got {n}")
            }
            Self::NoIterationBudget => write!(f, "max_iterations must be positive"),
            Self::EliteCoefficientOutOfRange(d) => {
                write!(f, "elite coefficient must be in [0, 1], got {d}")
            }
            Self::ProbabilityOutOfRange { name, value } => {
                write!(f, "{name} must be in [0, 1], got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parameters of the bee-colony engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbcConfig {
    /// Generation budget; under EOBL this scales the evaluation budget
    /// (`max_iterations * population_size` function evaluations) instead.
    pub max_iterations: usize,
    /// Colony size; the first half serves as employed slots.
    pub population_size: usize,
    /// Failed-improvement count beyond which a food source is abandoned.
    pub abandonment_limit: f64,
    /// Elite opposition blend coefficient `d` in `[0, 1]`.
    pub elite_coefficient: f64,
    /// Whether to run the elite opposition-based variant.
    pub use_eobl: bool,
    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl AbcConfig {
    /// Creates a config with the reference defaults and the observed
    /// abandonment limit for the given colony size and slot count.
    pub fn new(max_iterations: usize, population_size: usize, slots: usize) -> Self {
        Self {
            max_iterations,
            population_size,
            abandonment_limit: Self::observed_limit(population_size, slots),
            elite_coefficient: 0.9,
            use_eobl: false,
            seed: None,
        }
    }

    /// The reference driver's abandonment limit: `0.6 * (N/2) * L`.
    pub fn observed_limit(population_size: usize, slots: usize) -> f64 {
        0.6 * (population_size / 2) as f64 * slots as f64
    }

    /// Sets the abandonment limit.
    pub fn with_abandonment_limit(mut self, limit: f64) -> Self {
        self.abandonment_limit = limit;
        self
    }

    /// Sets the elite coefficient.
    pub fn with_elite_coefficient(mut self, d: f64) -> Self {
        self.elite_coefficient = d;
        self
    }

    /// Enables or disables the EOBL variant.
    pub fn with_eobl(mut self, use_eobl: bool) -> Self {
        self.use_eobl = use_eobl;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::PopulationEmpty);
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::PopulationOdd(self.population_size));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::NoIterationBudget);
        }
        if !(0.0..=1.0).contains(&self.elite_coefficient) {
            return Err(ConfigError::EliteCoefficientOutOfRange(
                self.elite_coefficient,
            ));
        }
        Ok(())
    }
}

/// Parameters of the genetic engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of generations to run.
    pub max_iterations: usize,
    /// Number of chromosomes per generation.
    pub population_size: usize,
    /// Probability that a selected pair undergoes crossover.
    pub crossover_probability: f64,
    /// Per-gene probability of replacement with a fresh legal value.
    pub mutation_probability: f64,
    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl GaConfig {
    /// Creates a config with the given budgets and operator probabilities.
    pub fn new(
        max_iterations: usize,
        population_size: usize,
        crossover_probability: f64,
        mutation_probability: f64,
    ) -> Self {
        Self {
            max_iterations,
            population_size,
            crossover_probability,
            mutation_probability,
            seed: None,
        }
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Any positive population size is accepted; the employed/onlooker
    /// split is a bee-colony constraint with no GA counterpart.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::PopulationEmpty);
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::NoIterationBudget);
        }
        for (name, value) in [
            ("crossover_probability", self.crossover_probability),
            ("mutation_probability", self.mutation_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        Ok(())
    }
}
