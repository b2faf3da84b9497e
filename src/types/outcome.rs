use std::fmt;

use serde::Serialize;

/// Decision and reason when no rule matched.
pub(crate) const NO_MATCH_DECISION: &str = "REVIEW";
pub(crate) const NO_MATCH_REASON: &str =
    "No rules matched for this applicant. Rules may need review.";

/// The result of evaluating a fact set against a rule set.
///
/// Carries the winning rule's decision and reason, the names of every rule
/// that matched (in rule-set order), and the name of the selected rule.
/// When nothing matched, the decision is the `REVIEW` safe-default and
/// `selected_rule` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[must_use]
pub struct Outcome {
    decision: String,
    reason: String,
    matched_rules: Vec<String>,
    selected_rule: Option<String>,
}

impl Outcome {
    pub(crate) fn new(
        decision: impl Into<String>,
        reason: impl Into<String>,
        matched_rules: Vec<String>,
        selected_rule: impl Into<String>,
    ) -> Self {
        Self {
            decision: decision.into(),
            reason: reason.into(),
            matched_rules,
            selected_rule: Some(selected_rule.into()),
        }
    }

    /// The outcome when no rule matched: a request for human review,
    /// never a crash or an implicit approval.
    pub fn unmatched() -> Self {
        Self {
            decision: NO_MATCH_DECISION.to_owned(),
            reason: NO_MATCH_REASON.to_owned(),
            matched_rules: Vec::new(),
            selected_rule: None,
        }
    }

    /// The winning rule's decision, or `"REVIEW"` if nothing matched.
    #[must_use]
    pub fn decision(&self) -> &str {
        &self.decision
    }

    /// The winning rule's reason, or the fixed no-match explanation.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Names of every rule that matched, in rule-set order.
    #[must_use]
    pub fn matched_rules(&self) -> &[String] {
        &self.matched_rules
    }

    /// Name of the winning rule, or `None` if nothing matched.
    #[must_use]
    pub fn selected_rule(&self) -> Option<&str> {
        self.selected_rule.as_deref()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.selected_rule {
            Some(rule) => write!(f, "{} via '{}'", self.decision, rule),
            None => write!(f, "{} (no rules matched)", self.decision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let outcome = Outcome::new(
            "AWARD_FULL",
            "excellent record",
            vec!["Top merit candidate".into()],
            "Top merit candidate",
        );
        assert_eq!(outcome.decision(), "AWARD_FULL");
        assert_eq!(outcome.reason(), "excellent record");
        assert_eq!(outcome.matched_rules(), &["Top merit candidate"]);
        assert_eq!(outcome.selected_rule(), Some("Top merit candidate"));
    }

    #[test]
    fn unmatched_defaults() {
        let outcome = Outcome::unmatched();
        assert_eq!(outcome.decision(), "REVIEW");
        assert_eq!(
            outcome.reason(),
            "No rules matched for this applicant. Rules may need review."
        );
        assert!(outcome.matched_rules().is_empty());
        assert_eq!(outcome.selected_rule(), None);
    }

    #[test]
    fn equality() {
        let a = Outcome::new("REJECT", "r", vec!["x".into()], "x");
        let b = Outcome::new("REJECT", "r", vec!["x".into()], "x");
        assert_eq!(a, b);
        assert_ne!(a, Outcome::unmatched());
    }

    #[test]
    fn display_with_selection() {
        let outcome = Outcome::new("AWARD_PARTIAL", "good", vec!["Good".into()], "Good");
        assert_eq!(outcome.to_string(), "AWARD_PARTIAL via 'Good'");
    }

    #[test]
    fn display_unmatched() {
        assert_eq!(Outcome::unmatched().to_string(), "REVIEW (no rules matched)");
    }

    #[test]
    fn serializes_to_json_record() {
        let outcome = Outcome::new("REJECT", "too many", vec!["a".into(), "b".into()], "a");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "decision": "REJECT",
                "reason": "too many",
                "matched_rules": ["a", "b"],
                "selected_rule": "a",
            })
        );
    }

    #[test]
    fn unmatched_serializes_null_selection() {
        let json = serde_json::to_value(Outcome::unmatched()).unwrap();
        assert_eq!(json["selected_rule"], serde_json::Value::Null);
        assert_eq!(json["matched_rules"], serde_json::json!([]));
    }
}
