use std::fmt;

use super::evaluation_report::EvaluationReport;
use super::facts::Facts;
use super::outcome::Outcome;
use super::rule::{Action, Rule};
use super::Condition;

/// Builder for constructing a [`RuleSet`] in code.
///
/// Rules are defined via closures, in the order they should be checked.
///
/// # Example
///
/// ```
/// use ruling::{field, RuleSetBuilder};
///
/// let ruleset = RuleSetBuilder::new()
///     .rule("Low CGPA - not eligible", |r| {
///         r.priority(95)
///             .when(field("cgpa").lt(2.5))
///             .decide("REJECT", "CGPA below minimum requirement")
///     })
///     .rule("Need-based review", |r| {
///         r.priority(70)
///             .when(field("cgpa").gte(2.5))
///             .when(field("family_income").lte(4000_i64))
///             .decide("REVIEW", "High need but borderline academic score")
///     })
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<Rule>,
}

/// Intermediate builder passed to the rule definition closure.
///
/// `when()` may be called repeatedly; conditions are conjunctive. A rule
/// defined without `when()` matches unconditionally, and one defined
/// without `decide()` falls back to the default `REVIEW` action.
#[derive(Debug, Default)]
pub struct RuleBuilder {
    priority: i64,
    conditions: Vec<Condition>,
    action: Option<Action>,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a rule. Rules are checked in definition order.
    #[must_use]
    pub fn rule(mut self, name: &str, f: impl FnOnce(RuleBuilder) -> RuleBuilder) -> Self {
        let builder = f(RuleBuilder::default());
        self.rules.push(Rule {
            name: name.to_owned(),
            priority: builder.priority,
            conditions: builder.conditions,
            action: builder.action.unwrap_or_default(),
        });
        self
    }

    /// Finish building. There are no cross-rule references to validate,
    /// so construction cannot fail.
    pub fn build(self) -> RuleSet {
        RuleSet { rules: self.rules }
    }
}

impl RuleBuilder {
    /// Set the rule's priority. Higher values are more authoritative.
    #[must_use]
    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Add a condition. All conditions of a rule must hold for it to match.
    #[must_use]
    pub fn when(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Set the decision and reason taken when the rule wins.
    #[must_use]
    pub fn decide(mut self, decision: &str, reason: &str) -> Self {
        self.action = Some(Action {
            decision: decision.to_owned(),
            reason: reason.to_owned(),
        });
        self
    }
}

/// An ordered, immutable set of rules. Thread-safe and designed to live
/// behind `Arc` when shared across evaluations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    pub(crate) rules: Vec<Rule>,
}

impl RuleSet {
    /// Wrap an ordered list of rules.
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Evaluate this rule set against the given facts.
    ///
    /// Every rule whose conditions all hold is collected in rule-set
    /// order; the winner is the matched rule with the highest priority.
    /// When several matched rules share the highest priority, the one
    /// earliest in the rule set wins -- this tie-break is part of the
    /// behavioral contract, not an accident of implementation. If nothing
    /// matches, the outcome is the `REVIEW` safe-default.
    pub fn evaluate(&self, facts: &Facts) -> Outcome {
        crate::evaluate::evaluate(&self.rules, facts)
    }

    /// Evaluate with detailed diagnostics.
    ///
    /// Returns an [`EvaluationReport`] with the outcome, which rules were
    /// checked and which matched, and timing information.
    pub fn evaluate_detailed(&self, facts: &Facts) -> EvaluationReport {
        crate::evaluate::evaluate_detailed(&self.rules, facts)
    }

    /// Parse a JSON rule document and build a `RuleSet`.
    ///
    /// This is a convenience method combining [`parse`](crate::parse::parse)
    /// and [`RuleSet::new()`].
    ///
    /// # Errors
    ///
    /// Returns [`RulingError`](crate::RulingError) if the document is not
    /// valid JSON or its top level is not an array of rule objects.
    pub fn from_json(input: &str) -> Result<Self, crate::RulingError> {
        let rules = crate::parse::parse(input)?;
        Ok(Self::new(rules))
    }

    /// Read a JSON rule document from a file and build a `RuleSet`.
    ///
    /// # Errors
    ///
    /// Returns [`RulingError`](crate::RulingError) on I/O or parse failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::RulingError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json(&input)
    }

    /// The rules in rule-set order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({} rules)", self.rules.len())
    }
}
