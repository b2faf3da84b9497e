use std::collections::HashMap;

use serde::Deserialize;

use super::Value;

/// The fact set: a flat mapping from field name to scalar [`Value`],
/// describing the subject under evaluation.
///
/// No schema is enforced. Any field name may appear, and fields referenced
/// by rules but absent here make the referencing condition fail rather
/// than error. Evaluation never mutates a fact set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Facts {
    data: HashMap<String, Value>,
}

impl Facts {
    /// Create an empty fact set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, consuming and returning the fact set.
    #[must_use]
    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// Insert a field value (mutable reference version).
    pub fn insert(&mut self, name: &str, value: Value) {
        self.data.insert(name.to_owned(), value);
    }

    /// Look up a field value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Number of fields in the fact set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let facts = Facts::new().set("cgpa", 3.8);
        assert_eq!(facts.get("cgpa"), Some(&Value::Float(3.8)));
    }

    #[test]
    fn get_missing_returns_none() {
        let facts = Facts::new().set("cgpa", 3.8);
        assert_eq!(facts.get("family_income"), None);
    }

    #[test]
    fn overwrite_value() {
        let facts = Facts::new().set("score", 10_i64).set("score", 20_i64);
        assert_eq!(facts.get("score"), Some(&Value::Int(20)));
    }

    #[test]
    fn insert_mutable_ref() {
        let mut facts = Facts::new();
        facts.insert("enrolled", Value::Bool(true));
        assert_eq!(facts.get("enrolled"), Some(&Value::Bool(true)));
    }

    #[test]
    fn empty_facts() {
        let facts = Facts::new();
        assert!(facts.is_empty());
        assert_eq!(facts.len(), 0);
        assert_eq!(facts.get("anything"), None);
    }

    #[test]
    fn mixed_value_types() {
        let facts = Facts::new()
            .set("cgpa", 3.5)
            .set("disciplinary_actions", 0_i64)
            .set("enrolled", true)
            .set("campus", "north");

        assert_eq!(facts.len(), 4);
        assert_eq!(facts.get("enrolled"), Some(&Value::Bool(true)));
        assert_eq!(facts.get("campus"), Some(&Value::String("north".into())));
    }

    #[test]
    fn deserialize_from_json_object() {
        let facts: Facts = serde_json::from_str(
            r#"{"cgpa": 3.8, "co_curricular_score": 85, "enrolled": true}"#,
        )
        .unwrap();

        assert_eq!(facts.get("cgpa"), Some(&Value::Float(3.8)));
        assert_eq!(facts.get("co_curricular_score"), Some(&Value::Int(85)));
        assert_eq!(facts.get("enrolled"), Some(&Value::Bool(true)));
    }

    #[test]
    fn deserialize_rejects_nested_object() {
        let result = serde_json::from_str::<Facts>(r#"{"profile": {"cgpa": 3.8}}"#);
        assert!(result.is_err());
    }
}
