use ruling::{Facts, RuleSet};

fn main() {
    // Load rules from a JSON document, the shape the rule editor produces.
    let ruleset = RuleSet::from_json(
        r#"[
            {
                "name": "Top merit candidate",
                "priority": 100,
                "conditions": [
                    ["cgpa", ">=", 3.7],
                    ["co_curricular_score", ">=", 80],
                    ["family_income", "<=", 8000],
                    ["disciplinary_actions", "==", 0]
                ],
                "action": {
                    "decision": "AWARD_FULL",
                    "reason": "Excellent academic & co-curricular performance, with acceptable need"
                }
            },
            {
                "name": "Low CGPA – not eligible",
                "priority": 95,
                "conditions": [["cgpa", "<", 2.5]],
                "action": {
                    "decision": "REJECT",
                    "reason": "CGPA below minimum scholarship requirement"
                }
            }
        ]"#,
    )
    .expect("failed to load ruleset");

    println!("{ruleset}");

    // Evaluate an applicant's facts
    let facts = Facts::new()
        .set("cgpa", 3.8)
        .set("co_curricular_score", 85_i64)
        .set("family_income", 5000_i64)
        .set("disciplinary_actions", 0_i64);

    let outcome = ruleset.evaluate(&facts);
    println!("Outcome: {outcome}");
    println!("Reason: {}", outcome.reason());
}
