//! Derived view of a formula under a partial assignment.
//!
//! The solver never rewrites the [`Formula`]; every "current state" query
//! is answered from this view, recomputed per search node from the
//! immutable formula and the working assignment.

use std::collections::BTreeMap;

use trisat_base::{Assignment, Clause, Formula, Literal, VarId};

/// Evaluation state of a single clause under the current assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseState {
    /// At least one literal is true.
    Satisfied,
    /// Every literal is false.
    Falsified,
    /// Outcome still open; holds the literals that are unassigned.
    Open(Vec<Literal>),
}

/// A formula viewed through a partial assignment.
pub struct FormulaView<'a> {
    formula: &'a Formula,
    assignment: &'a Assignment,
    states: Vec<ClauseState>,
}

impl<'a> FormulaView<'a> {
    /// Classifies every clause of `formula` under `assignment`.
    #[must_use]
    pub fn new(formula: &'a Formula, assignment: &'a Assignment) -> Self {
        let states = formula
            .clauses()
            .iter()
            .map(|clause| classify(clause, assignment))
            .collect();
        Self {
            formula,
            assignment,
            states,
        }
    }

    /// Returns the per-clause states in formula order.
    #[must_use]
    pub fn clause_states(&self) -> &[ClauseState] {
        &self.states
    }

    /// True when every clause is satisfied.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.states
            .iter()
            .all(|state| matches!(state, ClauseState::Satisfied))
    }

    /// First falsified clause, in formula order.
    #[must_use]
    pub fn first_falsified(&self) -> Option<&'a Clause> {
        self.states
            .iter()
            .position(|state| matches!(state, ClauseState::Falsified))
            .map(|index| &self.formula.clauses()[index])
    }

    /// First unit clause (exactly one unassigned literal, all others
    /// false) with its forced literal, in formula order.
    #[must_use]
    pub fn find_unit(&self) -> Option<(&'a Clause, Literal)> {
        for (index, state) in self.states.iter().enumerate() {
            if let ClauseState::Open(unassigned) = state {
                if let [literal] = unassigned.as_slice() {
                    return Some((&self.formula.clauses()[index], *literal));
                }
            }
        }
        None
    }

    /// Lowest-index unassigned variable whose occurrences across the open
    /// clauses all share one polarity, as the literal that satisfies them.
    #[must_use]
    pub fn find_pure_literal(&self) -> Option<Literal> {
        let mut polarities: BTreeMap<VarId, (bool, bool)> = BTreeMap::new();
        for state in &self.states {
            if let ClauseState::Open(unassigned) = state {
                for literal in unassigned {
                    let seen = polarities.entry(literal.var()).or_default();
                    if literal.is_positive() {
                        seen.0 = true;
                    } else {
                        seen.1 = true;
                    }
                }
            }
        }
        polarities
            .into_iter()
            .find_map(|(var, seen)| match seen {
                (true, false) => Some(Literal::positive(var)),
                (false, true) => Some(Literal::negative(var)),
                _ => None,
            })
    }

    /// Branch variable choice.
    ///
    /// Prefers the first clause reduced to exactly two unassigned literals
    /// (the two-clause rule; flagged in the second tuple element),
    /// otherwise falls back to the lowest-index unassigned variable.
    /// `None` when every variable is assigned.
    #[must_use]
    pub fn pick_branch_variable(&self) -> Option<(VarId, bool)> {
        for state in &self.states {
            if let ClauseState::Open(unassigned) = state {
                if unassigned.len() == 2 {
                    return Some((unassigned[0].var(), true));
                }
            }
        }
        (1..=self.formula.num_variables())
            .find(|&var| !self.assignment.is_bound(var))
            .map(|var| (var, false))
    }

    /// Renders the reduced formula: satisfied clauses dropped, false
    /// literals dropped, a falsified clause shown as `⊥`, a fully
    /// satisfied formula as `⊤`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut parts = Vec::new();
        for state in &self.states {
            match state {
                ClauseState::Satisfied => {}
                ClauseState::Falsified => parts.push("⊥".to_string()),
                ClauseState::Open(unassigned) => {
                    let literals: Vec<String> =
                        unassigned.iter().map(ToString::to_string).collect();
                    parts.push(format!("({})", literals.join(" ∨ ")));
                }
            }
        }
        if parts.is_empty() {
            "⊤".to_string()
        } else {
            parts.join(" ∧ ")
        }
    }
}

fn classify(clause: &Clause, assignment: &Assignment) -> ClauseState {
    let mut unassigned = Vec::new();
    for &literal in clause.literals() {
        match assignment.get(literal.var()) {
            Some(value) if literal.satisfied_by(value) => return ClauseState::Satisfied,
            Some(_) => {}
            None => unassigned.push(literal),
        }
    }
    if unassigned.is_empty() {
        ClauseState::Falsified
    } else {
        ClauseState::Open(unassigned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(lits: &[i64]) -> Clause {
        Clause::new(
            lits.iter()
                .map(|&l| Literal::from_dimacs(l).unwrap())
                .collect(),
        )
    }

    fn formula(clauses: &[&[i64]], n: VarId) -> Formula {
        Formula::new(clauses.iter().map(|c| clause(c)).collect(), n)
    }

    #[test]
    fn test_classification() {
        let f = formula(&[&[1, 2, 3], &[-1, 2, 3], &[-1, -2, -3]], 3);
        let mut assignment = Assignment::new();
        assignment.bind(1, true);
        assignment.bind(2, false);
        assignment.bind(3, false);

        let view = FormulaView::new(&f, &assignment);
        assert_eq!(
            view.clause_states(),
            &[
                ClauseState::Satisfied,
                ClauseState::Falsified,
                ClauseState::Satisfied,
            ]
        );
        assert!(!view.is_satisfied());
        assert_eq!(view.first_falsified(), Some(&f.clauses()[1]));
    }

    #[test]
    fn test_find_unit_prefers_formula_order() {
        let f = formula(&[&[1, 2, 3], &[-1, -2, 3], &[-1, -2, -3]], 3);
        let mut assignment = Assignment::new();
        assignment.bind(1, true);
        assignment.bind(2, true);

        let view = FormulaView::new(&f, &assignment);
        let (unit_clause, literal) = view.find_unit().unwrap();
        assert_eq!(unit_clause, &f.clauses()[1]);
        assert_eq!(literal, Literal::positive(3));
    }

    #[test]
    fn test_find_pure_literal_lowest_index() {
        // Under x1 = true the only open clause is (x2 ∨ ¬x3): both x2 and
        // ¬x3 are pure, and the lower index wins.
        let f = formula(&[&[-1, 2, -3], &[1, 2, 3]], 3);
        let mut assignment = Assignment::new();
        assignment.bind(1, true);

        let view = FormulaView::new(&f, &assignment);
        assert_eq!(view.find_pure_literal(), Some(Literal::positive(2)));
    }

    #[test]
    fn test_mixed_polarity_is_not_pure() {
        let f = formula(&[&[1, 2, 3], &[-1, -2, 3]], 3);
        let view_assignment = Assignment::new();
        let view = FormulaView::new(&f, &view_assignment);
        // x1 and x2 occur with both polarities; x3 only positively.
        assert_eq!(view.find_pure_literal(), Some(Literal::positive(3)));
    }

    #[test]
    fn test_pick_branch_variable_two_clause_rule() {
        let f = formula(&[&[1, 2, 3], &[-1, 2, 3]], 3);
        let mut assignment = Assignment::new();
        assignment.bind(1, true);

        // (¬x1 ∨ x2 ∨ x3) now has two unassigned literals; x2 leads it.
        let view = FormulaView::new(&f, &assignment);
        assert_eq!(view.pick_branch_variable(), Some((2, true)));
    }

    #[test]
    fn test_pick_branch_variable_fallback() {
        let f = formula(&[&[1, 2, 3]], 3);
        let assignment = Assignment::new();
        let view = FormulaView::new(&f, &assignment);
        assert_eq!(view.pick_branch_variable(), Some((1, false)));
    }

    #[test]
    fn test_render() {
        let f = formula(&[&[1, 2, 3], &[-1, 2, 3], &[-1, -2, -3]], 3);
        let mut assignment = Assignment::new();
        assignment.bind(1, true);

        let view = FormulaView::new(&f, &assignment);
        assert_eq!(view.render(), "(x2 ∨ x3) ∧ (¬x2 ∨ ¬x3)");

        assignment.bind(2, true);
        assignment.bind(3, true);
        let view = FormulaView::new(&f, &assignment);
        assert_eq!(view.render(), "⊥");
    }

    #[test]
    fn test_render_satisfied() {
        let f = formula(&[&[1, 2, 3]], 3);
        let mut assignment = Assignment::new();
        assignment.bind(1, true);
        let view = FormulaView::new(&f, &assignment);
        assert_eq!(view.render(), "⊤");
        assert!(view.is_satisfied());
    }
}
