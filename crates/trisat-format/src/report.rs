//! The top-level solve report document.

use serde::{Deserialize, Serialize};

use trisat_base::{Assignment, Error, Result, VarId};

use crate::trace::SolvingProcess;

/// The result document emitted for one solve request.
///
/// This is the entire boundary contract: the invoking wrapper reads exactly
/// one such document from stdout. Created once per solve; immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// The formula in display form, e.g. `(x1 ∨ ¬x2 ∨ x3) ∧ …`.
    pub formula: String,
    /// Whether a satisfying assignment exists.
    pub satisfiable: bool,
    /// The satisfying total assignment, or `null` when unsatisfiable.
    pub assignment: Option<Assignment>,
    /// Number of variables the formula ranges over.
    pub num_variables: VarId,
    /// Number of clauses in the formula.
    pub num_clauses: u32,
    /// The full decision trace and its statistics.
    pub solving_process: SolvingProcess,
}

impl SolveReport {
    /// Serializes to a compact JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Serializes to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Parses from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Writes compact JSON to the given writer.
    pub fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::SolvingStatistics;

    #[test]
    fn test_unsat_report_serializes_null_assignment() {
        let report = SolveReport {
            formula: "(x1 ∨ x2 ∨ x3)".to_string(),
            satisfiable: false,
            assignment: None,
            num_variables: 3,
            num_clauses: 1,
            solving_process: SolvingProcess {
                steps: Vec::new(),
                statistics: SolvingStatistics::default(),
            },
        };
        let json = report.to_json().unwrap();
        assert!(json.contains(r#""assignment":null"#));
        assert!(json.contains(r#""total_steps":0"#));
    }

    #[test]
    fn test_round_trip() {
        let mut assignment = Assignment::new();
        assignment.bind(1, true);
        assignment.bind(2, false);
        let report = SolveReport {
            formula: "(x1 ∨ ¬x2 ∨ x3)".to_string(),
            satisfiable: true,
            assignment: Some(assignment),
            num_variables: 3,
            num_clauses: 1,
            solving_process: SolvingProcess {
                steps: Vec::new(),
                statistics: SolvingStatistics {
                    total_steps: 0,
                    max_depth: 0,
                    unit_propagations: 0,
                    pure_literals: 0,
                    backtracks: 0,
                    two_clause_rules: 0,
                },
            },
        };
        let parsed = SolveReport::from_json(&report.to_json().unwrap()).unwrap();
        assert_eq!(parsed.to_json().unwrap(), report.to_json().unwrap());
    }
}
