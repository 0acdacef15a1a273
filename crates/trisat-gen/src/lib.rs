//! # trisat-gen
//!
//! Random 3-CNF instance generation.
//!
//! Instances follow the fixed-clause-length model: `round(n * ratio)`
//! clauses, each over three distinct variables with independently random
//! polarities. Duplicate clauses across the formula are allowed; the demo
//! mirrors the probabilistic nature of random 3-SAT generation rather than
//! deduplicating. Tautological clauses cannot occur because the three
//! variables of a clause are sampled without replacement.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use trisat_base::{Clause, Error, Formula, Literal, Result, VarId, CLAUSE_WIDTH};

/// Accepted range for the variable count.
pub const VARIABLE_RANGE: RangeInclusive<VarId> = 3..=5;

/// Accepted range for the clause-to-variable ratio.
pub const RATIO_RANGE: RangeInclusive<f64> = 2.0..=5.0;

/// Generator for random 3-SAT formulas.
pub struct RandomFormulaGenerator {
    rng: StdRng,
}

impl RandomFormulaGenerator {
    /// Creates a generator seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a generator with a fixed seed for reproducible instances.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a random 3-CNF formula with `round(n * ratio)` clauses
    /// (at least one).
    ///
    /// Fails fast with [`Error::InvalidParameter`] when `num_variables` or
    /// `clause_ratio` lies outside [`VARIABLE_RANGE`] / [`RATIO_RANGE`];
    /// nothing is generated in that case.
    pub fn generate(&mut self, num_variables: VarId, clause_ratio: f64) -> Result<Formula> {
        if !VARIABLE_RANGE.contains(&num_variables) {
            return Err(Error::InvalidParameter {
                name: "num_variables",
                value: num_variables.to_string(),
                expected: "an integer in [3, 5]",
            });
        }
        if !RATIO_RANGE.contains(&clause_ratio) {
            return Err(Error::InvalidParameter {
                name: "clause_ratio",
                value: clause_ratio.to_string(),
                expected: "a number in [2.0, 5.0]",
            });
        }

        let num_clauses = ((f64::from(num_variables) * clause_ratio).round() as usize).max(1);
        debug!(num_variables, num_clauses, "generating random 3-CNF instance");

        let clauses = (0..num_clauses)
            .map(|_| self.random_clause(num_variables))
            .collect();
        Ok(Formula::new(clauses, num_variables))
    }

    /// Samples one clause: three distinct variables, each polarity decided
    /// by a fair coin.
    fn random_clause(&mut self, num_variables: VarId) -> Clause {
        let vars = rand::seq::index::sample(&mut self.rng, num_variables as usize, CLAUSE_WIDTH);
        let literals = vars
            .iter()
            .map(|i| Literal::new(i as VarId + 1, self.rng.gen_bool(0.5)))
            .collect();
        Clause::new(literals)
    }
}

impl Default for RandomFormulaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
