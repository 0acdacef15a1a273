//! Trace records for the solving process.

use serde::{Deserialize, Serialize};

use trisat_base::Assignment;

/// The kind of decision event a trace step records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    UnitPropagation,
    PureLiteral,
    Branch,
    Backtrack,
}

/// One recorded decision event.
///
/// Created exactly once per event and never mutated afterwards, except for
/// the `success` flag which is flipped when the branch below the step
/// reaches a satisfying leaf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolvingStep {
    /// Global step counter, starting at 1, never reset on backtrack.
    pub step_number: u32,
    /// Size of the partial assignment when the step was recorded.
    pub depth: u32,
    /// The rule that fired.
    pub action_type: ActionType,
    /// Human-readable account of the decision.
    pub description: String,
    /// The formula reduced under the assignment at the time of the step.
    pub formula_state: String,
    /// Snapshot of the assignment at the time of the step.
    pub assignments: Assignment,
    /// Whether this step lies on the path to the satisfying leaf.
    pub success: bool,
}

/// Monotone counters aggregated over one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvingStatistics {
    pub total_steps: u32,
    pub max_depth: u32,
    pub unit_propagations: u32,
    pub pure_literals: u32,
    pub backtracks: u32,
    pub two_clause_rules: u32,
}

/// The full trace of one solve: the ordered step log plus final statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolvingProcess {
    pub steps: Vec<SolvingStep>,
    pub statistics: SolvingStatistics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ActionType::UnitPropagation).unwrap(),
            r#""UNIT_PROPAGATION""#
        );
        assert_eq!(
            serde_json::to_string(&ActionType::PureLiteral).unwrap(),
            r#""PURE_LITERAL""#
        );
        assert_eq!(serde_json::to_string(&ActionType::Branch).unwrap(), r#""BRANCH""#);
        assert_eq!(
            serde_json::to_string(&ActionType::Backtrack).unwrap(),
            r#""BACKTRACK""#
        );
    }
}
