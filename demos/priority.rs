use ruling::{field, Facts, RuleSetBuilder};

fn main() {
    // Conflict resolution: when several rules match, the highest priority
    // wins; ties go to the earliest rule in the set.
    let ruleset = RuleSetBuilder::new()
        .rule("Low CGPA – not eligible", |r| {
            r.priority(95)
                .when(field("cgpa").lt(2.5))
                .decide("REJECT", "CGPA below minimum scholarship requirement")
        })
        .rule("Serious disciplinary record", |r| {
            r.priority(90)
                .when(field("disciplinary_actions").gte(2_i64))
                .decide("REJECT", "Too many disciplinary records")
        })
        .rule("Need-based review", |r| {
            r.priority(70)
                .when(field("cgpa").gte(2.5))
                .when(field("family_income").lte(4000_i64))
                .decide("REVIEW", "High need but borderline academic score")
        })
        .build();

    // Matches both rejection rules: the low-CGPA rule (95) beats the
    // disciplinary rule (90).
    let facts = Facts::new()
        .set("cgpa", 2.0)
        .set("family_income", 5000_i64)
        .set("disciplinary_actions", 3_i64);

    let outcome = ruleset.evaluate(&facts);
    println!("Failing student: {outcome}");
    println!("  matched: {:?}", outcome.matched_rules());

    // Matches only the review rule.
    let facts = Facts::new()
        .set("cgpa", 2.8)
        .set("family_income", 3000_i64)
        .set("disciplinary_actions", 0_i64);

    let outcome = ruleset.evaluate(&facts);
    println!("Borderline student: {outcome}");

    // Matches nothing: the safe-default asks for human review.
    let facts = Facts::new()
        .set("cgpa", 3.5)
        .set("family_income", 9000_i64)
        .set("disciplinary_actions", 0_i64);

    let outcome = ruleset.evaluate(&facts);
    println!("Unmatched student: {outcome}");
}
