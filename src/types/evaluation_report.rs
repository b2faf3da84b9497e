use std::fmt;
use std::time::Duration;

use super::outcome::Outcome;

/// Detailed evaluation report returned by
/// [`RuleSet::evaluate_detailed()`](super::ruleset::RuleSet::evaluate_detailed).
///
/// Contains the outcome, the names of all rules checked in rule-set order,
/// the names of rules that matched, and the wall-clock duration of the
/// evaluation.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationReport {
    outcome: Outcome,
    checked: Vec<String>,
    matched: Vec<String>,
    duration: Duration,
}

impl EvaluationReport {
    pub(crate) fn new(
        outcome: Outcome,
        checked: Vec<String>,
        matched: Vec<String>,
        duration: Duration,
    ) -> Self {
        Self {
            outcome,
            checked,
            matched,
            duration,
        }
    }

    /// The evaluation outcome, same as [`RuleSet::evaluate()`](super::ruleset::RuleSet::evaluate).
    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// All rule names in the order they were checked (rule-set order).
    #[must_use]
    pub fn checked(&self) -> &[String] {
        &self.checked
    }

    /// Names of rules that matched, in rule-set order.
    #[must_use]
    pub fn matched(&self) -> &[String] {
        &self.matched
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "outcome: {}", self.outcome)?;
        write!(f, ", matched: [{}]", self.matched.join(", "))?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
