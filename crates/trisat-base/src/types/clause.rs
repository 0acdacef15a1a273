//! Three-literal clauses.

use std::fmt;

use super::{Assignment, Literal};

/// Number of literals in every well-formed clause.
pub const CLAUSE_WIDTH: usize = 3;

/// A disjunction of literals.
///
/// The generator always produces exactly [`CLAUSE_WIDTH`] literals over
/// distinct variables; externally constructed clauses are checked by
/// [`Formula::validate`](super::Formula::validate) before solving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// Creates a clause from the given literals.
    #[must_use]
    pub fn new(literals: Vec<Literal>) -> Self {
        Self { literals }
    }

    /// Returns the literals in clause order.
    #[must_use]
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Returns the number of literals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Returns whether the clause has no literals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Evaluates the clause under a partial assignment.
    ///
    /// `Some(true)` if some literal is satisfied, `Some(false)` if every
    /// literal is falsified, `None` while the outcome is still open.
    #[must_use]
    pub fn evaluate(&self, assignment: &Assignment) -> Option<bool> {
        let mut unassigned = false;
        for literal in &self.literals {
            match assignment.get(literal.var()) {
                Some(value) if literal.satisfied_by(value) => return Some(true),
                Some(_) => {}
                None => unassigned = true,
            }
        }
        if unassigned {
            None
        } else {
            Some(false)
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, literal) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{literal}")?;
        }
        write!(f, ")")
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

    #[test]
    fn test_display() {
        assert_eq!(clause(&[1, -2, 3]).to_string(), "(x1 ∨ ¬x2 ∨ x3)");
    }

    #[test]
    fn test_evaluate_partial() {
        let c = clause(&[1, -2, 3]);
        let mut assignment = Assignment::new();
        assert_eq!(c.evaluate(&assignment), None);

        assignment.bind(2, true);
        assert_eq!(c.evaluate(&assignment), None);

        assignment.bind(1, true);
        assert_eq!(c.evaluate(&assignment), Some(true));
    }

    #[test]
    fn test_evaluate_falsified() {
        let c = clause(&[1, -2, 3]);
        let mut assignment = Assignment::new();
        assignment.bind(1, false);
        assignment.bind(2, true);
        assignment.bind(3, false);
        assert_eq!(c.evaluate(&assignment), Some(false));
    }
}
