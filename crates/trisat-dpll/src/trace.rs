//! Append-only trace accumulation.

use trisat_base::Assignment;
use trisat_format::{ActionType, SolvingProcess, SolvingStatistics, SolvingStep};

/// Handle to a recorded step, returned by [`TraceLog::record`].
pub type StepId = usize;

/// Builder for the solving trace.
///
/// Owns the ordered step log and the running statistics so the search
/// itself stays free of bookkeeping state. Counters for unit propagation,
/// pure literals, and backtracks are incremented on `record`, which keeps
/// `backtracks` equal to the number of `BACKTRACK` steps by construction.
#[derive(Debug, Default)]
pub struct TraceLog {
    steps: Vec<SolvingStep>,
    statistics: SolvingStatistics,
}

impl TraceLog {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step and returns its handle.
    ///
    /// Steps start with `success = false`; see [`TraceLog::mark_success`].
    pub fn record(
        &mut self,
        action_type: ActionType,
        depth: u32,
        description: String,
        formula_state: String,
        assignments: Assignment,
    ) -> StepId {
        match action_type {
            ActionType::UnitPropagation => self.statistics.unit_propagations += 1,
            ActionType::PureLiteral => self.statistics.pure_literals += 1,
            ActionType::Backtrack => self.statistics.backtracks += 1,
            ActionType::Branch => {}
        }
        self.statistics.max_depth = self.statistics.max_depth.max(depth);

        let id = self.steps.len();
        self.steps.push(SolvingStep {
            step_number: id as u32 + 1,
            depth,
            action_type,
            description,
            formula_state,
            assignments,
            success: false,
        });
        id
    }

    /// Flips the success flag once the subtree under a step has produced a
    /// satisfying assignment.
    pub fn mark_success(&mut self, id: StepId) {
        if let Some(step) = self.steps.get_mut(id) {
            step.success = true;
        }
    }

    /// Counts one application of the two-clause branch selection rule.
    pub fn note_two_clause_rule(&mut self) {
        self.statistics.two_clause_rules += 1;
    }

    /// Returns the statistics accumulated so far.
    #[must_use]
    pub fn statistics(&self) -> &SolvingStatistics {
        &self.statistics
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns whether no step has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Finalizes the trace, fixing `total_steps` to the step count.
    #[must_use]
    pub fn finish(mut self) -> SolvingProcess {
        self.statistics.total_steps = self.steps.len() as u32;
        SolvingProcess {
            steps: self.steps,
            statistics: self.statistics,
        }
    }
}
