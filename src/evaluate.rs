use std::time::Instant;

use crate::types::{Condition, EvaluationReport, Facts, Outcome, Rule};

/// Check whether every condition of a rule holds against the facts.
///
/// Conditions are conjunctive and checked in order; the first failure
/// short-circuits. An empty condition list matches unconditionally.
pub(crate) fn rule_matches(rule: &Rule, facts: &Facts) -> bool {
    rule.conditions.iter().all(|c| condition_holds(c, facts))
}

/// A condition holds only when it is well-formed, its field is present,
/// and the comparison is both possible and true. Everything else --
/// unsupported shape, missing field, incomparable types -- is a
/// non-match, never an error.
fn condition_holds(condition: &Condition, facts: &Facts) -> bool {
    match condition {
        Condition::Compare { field, op, value } => facts
            .get(field)
            .and_then(|actual| actual.compare(*op, value))
            .unwrap_or(false),
        Condition::Unsupported(_) => false,
    }
}

pub(crate) fn evaluate(rules: &[Rule], facts: &Facts) -> Outcome {
    let matched: Vec<&Rule> = rules.iter().filter(|r| rule_matches(r, facts)).collect();

    let Some(&first) = matched.first() else {
        return Outcome::unmatched();
    };

    // Strict > keeps the earliest matched rule on priority ties,
    // so the winner is stable in rule-set order.
    let mut winner = first;
    for &rule in &matched[1..] {
        if rule.priority > winner.priority {
            winner = rule;
        }
    }

    let matched_names = matched.iter().map(|r| r.name.clone()).collect();
    Outcome::new(
        winner.action.decision.clone(),
        winner.action.reason.clone(),
        matched_names,
        winner.name.clone(),
    )
}

pub(crate) fn evaluate_detailed(rules: &[Rule], facts: &Facts) -> EvaluationReport {
    let start = Instant::now();
    let outcome = evaluate(rules, facts);
    let duration = start.elapsed();

    let checked = rules.iter().map(|r| r.name.clone()).collect();
    let matched = outcome.matched_rules().to_vec();
    EvaluationReport::new(outcome, checked, matched, duration)
}
