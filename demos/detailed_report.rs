use ruling::{field, Facts, RuleSetBuilder};

fn main() {
    let ruleset = RuleSetBuilder::new()
        .rule("Top merit candidate", |r| {
            r.priority(100)
                .when(field("cgpa").gte(3.7))
                .when(field("co_curricular_score").gte(80_i64))
                .decide("AWARD_FULL", "excellent record")
        })
        .rule("Good candidate - partial scholarship", |r| {
            r.priority(80)
                .when(field("cgpa").gte(3.3))
                .when(field("co_curricular_score").gte(60_i64))
                .decide("AWARD_PARTIAL", "good record")
        })
        .rule("Low CGPA – not eligible", |r| {
            r.priority(95)
                .when(field("cgpa").lt(2.5))
                .decide("REJECT", "below minimum")
        })
        .build();

    let facts = Facts::new()
        .set("cgpa", 3.8)
        .set("co_curricular_score", 85_i64);

    let report = ruleset.evaluate_detailed(&facts);

    println!("{report}");
    println!();
    println!("Rules checked: {:?}", report.checked());
    println!("Rules matched: {:?}", report.matched());
    println!("Duration: {:?}", report.duration());
}
