//! Brute-force reference search.
//!
//! Enumerates all total assignments in ascending order, which is only
//! sensible for the tiny instances this workspace targets (n ≤ 5 means at
//! most 32 candidates). Used to cross-check the DPLL verdict in tests and
//! behind the CLI `--check` flag.

use trisat_base::{Assignment, Formula};

/// Returns the first satisfying total assignment, or `None` when the
/// formula is unsatisfiable.
#[must_use]
pub fn exhaustive_satisfiable(formula: &Formula) -> Option<Assignment> {
    let num_variables = formula.num_variables();
    for bits in 0u64..(1u64 << num_variables) {
        let mut assignment = Assignment::new();
        for var in 1..=num_variables {
            assignment.bind(var, (bits >> (var - 1)) & 1 == 1);
        }
        if formula.is_satisfied_by(&assignment) {
            return Some(assignment);
        }
    }
    None
}
