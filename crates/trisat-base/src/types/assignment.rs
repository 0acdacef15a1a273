//! Partial variable assignments.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Literal, VarId};

/// A partial mapping from variables to truth values.
///
/// Born empty, grows by [`bind`](Assignment::bind) and shrinks by
/// [`unbind`](Assignment::unbind) in step with the search recursion.
/// Serializes as a variable-label map: `{"x1": true, "x2": false}`, keys in
/// ascending variable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    values: BTreeMap<VarId, bool>,
}

impl Assignment {
    /// Creates an empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `var`, if any.
    #[must_use]
    pub fn get(&self, var: VarId) -> Option<bool> {
        self.values.get(&var).copied()
    }

    /// Returns whether `var` is bound.
    #[must_use]
    pub fn is_bound(&self, var: VarId) -> bool {
        self.values.contains_key(&var)
    }

    /// Binds `var` to `value`.
    pub fn bind(&mut self, var: VarId, value: bool) {
        self.values.insert(var, value);
    }

    /// Removes the binding for `var`, restoring the pre-bind state.
    pub fn unbind(&mut self, var: VarId) {
        self.values.remove(&var);
    }

    /// Truth value of a literal under this assignment, `None` if unbound.
    #[must_use]
    pub fn literal_value(&self, literal: Literal) -> Option<bool> {
        self.get(literal.var()).map(|value| literal.satisfied_by(value))
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the bindings in ascending variable order.
    pub fn iter(&self) -> impl Iterator<Item = (VarId, bool)> + '_ {
        self.values.iter().map(|(&var, &value)| (var, value))
    }

    /// Extends the assignment with `false` for every unbound variable in
    /// `[1, num_variables]`, making it total.
    #[must_use]
    pub fn completed(mut self, num_variables: VarId) -> Self {
        for var in 1..=num_variables {
            self.values.entry(var).or_insert(false);
        }
        self
    }
}

impl Serialize for Assignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (var, value) in &self.values {
            map.serialize_entry(&format!("x{var}"), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Assignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AssignmentVisitor;

        impl<'de> Visitor<'de> for AssignmentVisitor {
            type Value = Assignment;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from variable labels (\"x1\") to booleans")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut values = BTreeMap::new();
                while let Some((key, value)) = access.next_entry::<String, bool>()? {
                    let digits = key.strip_prefix('x').unwrap_or(&key);
                    let var: VarId = digits
                        .parse()
                        .map_err(|_| de::Error::custom(format!("invalid variable label: {key}")))?;
                    values.insert(var, value);
                }
                Ok(Assignment { values })
            }
        }

        deserializer.deserialize_map(AssignmentVisitor)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (var, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "x{} = {}", var, if value { 1 } else { 0 })?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_unbind() {
        let mut assignment = Assignment::new();
        assignment.bind(2, true);
        assert_eq!(assignment.get(2), Some(true));
        assert_eq!(assignment.len(), 1);

        assignment.unbind(2);
        assert_eq!(assignment.get(2), None);
        assert!(assignment.is_empty());
    }

    #[test]
    fn test_literal_value() {
        let mut assignment = Assignment::new();
        assignment.bind(1, false);
        assert_eq!(assignment.literal_value(Literal::positive(1)), Some(false));
        assert_eq!(assignment.literal_value(Literal::negative(1)), Some(true));
        assert_eq!(assignment.literal_value(Literal::positive(2)), None);
    }

    #[test]
    fn test_completed_fills_false() {
        let mut assignment = Assignment::new();
        assignment.bind(2, true);
        let total = assignment.completed(3);
        assert_eq!(total.get(1), Some(false));
        assert_eq!(total.get(2), Some(true));
        assert_eq!(total.get(3), Some(false));
    }

    #[test]
    fn test_display() {
        let mut assignment = Assignment::new();
        assignment.bind(3, false);
        assignment.bind(1, true);
        assert_eq!(assignment.to_string(), "[x1 = 1, x3 = 0]");
    }

    #[test]
    fn test_serialize_label_map() {
        let mut assignment = Assignment::new();
        assignment.bind(2, false);
        assignment.bind(1, true);
        let json = serde_json::to_string(&assignment).unwrap();
        assert_eq!(json, r#"{"x1":true,"x2":false}"#);
    }

    #[test]
    fn test_deserialize_label_map() {
        let assignment: Assignment = serde_json::from_str(r#"{"x1":true,"x3":false}"#).unwrap();
        assert_eq!(assignment.get(1), Some(true));
        assert_eq!(assignment.get(3), Some(false));
        assert_eq!(assignment.len(), 2);
    }

    #[test]
    fn test_deserialize_rejects_bad_label() {
        let result: Result<Assignment, _> = serde_json::from_str(r#"{"xq":true}"#);
        assert!(result.is_err());
    }
}
