//! The traced DPLL search.

use tracing::{debug, trace};

use trisat_base::{Assignment, Formula, Literal, Result, VarId};
use trisat_format::{ActionType, SolveReport};

use crate::trace::{StepId, TraceLog};
use crate::view::FormulaView;

/// Recursive DPLL solver producing a full decision trace.
///
/// One solver instance performs exactly one run: validate, search, and
/// package the [`SolveReport`]. The formula is never mutated; the working
/// assignment follows strict bind/undo discipline across the recursion.
pub struct DpllSolver<'f> {
    formula: &'f Formula,
    assignment: Assignment,
    log: TraceLog,
    model: Option<Assignment>,
}

/// Solves `formula` and packages the result document.
pub fn solve(formula: &Formula) -> Result<SolveReport> {
    Ok(DpllSolver::new(formula)?.run())
}

/// The rule that fires at the current search node.
enum Rule {
    Satisfied,
    Conflict { description: String },
    Unit { literal: Literal, description: String },
    Pure { literal: Literal, description: String },
    Branch { var: VarId, via_two_clause: bool },
}

impl<'f> DpllSolver<'f> {
    /// Validates the formula and prepares a solver for a single run.
    pub fn new(formula: &'f Formula) -> Result<Self> {
        formula.validate()?;
        Ok(Self {
            formula,
            assignment: Assignment::new(),
            log: TraceLog::new(),
            model: None,
        })
    }

    /// Runs the search to completion and consumes the solver.
    #[must_use]
    pub fn run(mut self) -> SolveReport {
        let satisfiable = self.search();
        debug!(
            satisfiable,
            steps = self.log.len(),
            backtracks = self.log.statistics().backtracks,
            "search finished"
        );

        SolveReport {
            formula: self.formula.to_string(),
            satisfiable,
            assignment: self.model,
            num_variables: self.formula.num_variables(),
            num_clauses: self.formula.len() as u32,
            solving_process: self.log.finish(),
        }
    }

    /// One search node. Returns whether a satisfying leaf was reached.
    fn search(&mut self) -> bool {
        let (rule, formula_state) = self.next_rule();

        match rule {
            Rule::Satisfied => {
                self.model = Some(
                    self.assignment
                        .clone()
                        .completed(self.formula.num_variables()),
                );
                trace!(assignment = %self.assignment, "satisfying leaf");
                true
            }
            Rule::Conflict { description } => {
                self.record(ActionType::Backtrack, description, formula_state);
                false
            }
            Rule::Unit { literal, description } => {
                let step = self.record(ActionType::UnitPropagation, description, formula_state);
                self.descend(literal, step)
            }
            Rule::Pure { literal, description } => {
                let step = self.record(ActionType::PureLiteral, description, formula_state);
                self.descend(literal, step)
            }
            Rule::Branch { var, via_two_clause } => {
                if via_two_clause {
                    self.log.note_two_clause_rule();
                }
                let pick = if via_two_clause {
                    " (picked from a two-literal clause)"
                } else {
                    ""
                };

                let step = self.record(
                    ActionType::Branch,
                    format!("Branching: trying x{var} = true{pick}"),
                    formula_state.clone(),
                );
                if self.descend(Literal::positive(var), step) {
                    return true;
                }

                // The assignment is restored here, so the branch-entry
                // state still describes the formula.
                self.record(
                    ActionType::Backtrack,
                    format!("Backtracking: x{var} = true failed, trying x{var} = false"),
                    formula_state.clone(),
                );
                let step = self.record(
                    ActionType::Branch,
                    format!("Branching: trying x{var} = false"),
                    formula_state,
                );
                self.descend(Literal::negative(var), step)
            }
        }
    }

    /// Binds the literal's variable, recurses, and restores the binding.
    /// Marks `step` successful when the subtree found a model.
    fn descend(&mut self, literal: Literal, step: StepId) -> bool {
        self.assignment.bind(literal.var(), literal.is_positive());
        let satisfied = self.search();
        self.assignment.unbind(literal.var());
        if satisfied {
            self.log.mark_success(step);
        }
        satisfied
    }

    /// Applies the fixed rule priority to the current node: termination
    /// checks, then unit propagation, pure literals, and finally branching.
    fn next_rule(&self) -> (Rule, String) {
        let view = FormulaView::new(self.formula, &self.assignment);
        let formula_state = view.render();

        if view.is_satisfied() {
            return (Rule::Satisfied, formula_state);
        }
        if let Some(clause) = view.first_falsified() {
            let description =
                format!("Backtracking: every literal of clause {clause} is false");
            return (Rule::Conflict { description }, formula_state);
        }
        if let Some((clause, literal)) = view.find_unit() {
            let description = format!(
                "Unit propagation: clause {clause} forces {}",
                binding(literal)
            );
            return (Rule::Unit { literal, description }, formula_state);
        }
        if let Some(literal) = view.find_pure_literal() {
            let polarity = if literal.is_positive() {
                "positively"
            } else {
                "negatively"
            };
            let description = format!(
                "Pure literal: x{} occurs only {polarity}, assigning {}",
                literal.var(),
                binding(literal)
            );
            return (Rule::Pure { literal, description }, formula_state);
        }

        // Not satisfied, no conflict, no forced rule: some clause is open,
        // so an unassigned variable exists.
        let (var, via_two_clause) = view
            .pick_branch_variable()
            .expect("open clause implies an unassigned variable");
        (Rule::Branch { var, via_two_clause }, formula_state)
    }

    fn record(&mut self, action_type: ActionType, description: String, formula_state: String) -> StepId {
        self.log.record(
            action_type,
            self.assignment.len() as u32,
            description,
            formula_state,
            self.assignment.clone(),
        )
    }
}

/// `x3 = true` style rendering of the binding a literal demands.
fn binding(literal: Literal) -> String {
    format!("x{} = {}", literal.var(), literal.is_positive())
}
