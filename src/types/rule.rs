use std::fmt;

use serde::Deserialize;

use super::condition::Condition;
use super::facts::Facts;

/// Placeholder for rules that arrive without a name.
pub(crate) const UNNAMED_RULE: &str = "Unnamed rule";

/// A named, prioritized bundle of conditions plus the action taken when
/// they all hold.
///
/// Rules are created via [`RuleSetBuilder`](super::RuleSetBuilder) or by
/// loading a JSON document with [`RuleSet::from_json()`](super::RuleSet::from_json).
/// Every field is optional in the document: `name` defaults to
/// `"Unnamed rule"`, `priority` to 0, `conditions` to an empty list (which
/// matches unconditionally), and `action` to a `REVIEW` decision with no
/// reason. Names and priorities carry no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rule {
    #[serde(default = "default_rule_name")]
    pub name: String,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub action: Action,
}

/// What a rule decides when all of its conditions hold.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Action {
    #[serde(default = "default_decision")]
    pub decision: String,
    #[serde(default)]
    pub reason: String,
}

impl Rule {
    /// Check whether every condition of this rule holds against the facts.
    ///
    /// Conditions are conjunctive and short-circuit on the first failure.
    /// Missing fields, unsupported conditions, and incomparable values all
    /// fail the rule without raising an error. An empty condition list
    /// matches unconditionally.
    #[must_use]
    pub fn matches(&self, facts: &Facts) -> bool {
        crate::evaluate::rule_matches(self, facts)
    }
}

impl Default for Action {
    fn default() -> Self {
        Action {
            decision: default_decision(),
            reason: String::new(),
        }
    }
}

fn default_rule_name() -> String {
    UNNAMED_RULE.to_owned()
}

fn default_decision() -> String {
    "REVIEW".to_owned()
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (priority {}, {} conditions) -> {}",
            self.name,
            self.priority,
            self.conditions.len(),
            self.action.decision,
        )
    }
}
