use std::sync::Arc;
use std::thread;

use ruling::{field, Facts, RuleSetBuilder};

fn main() {
    let ruleset = Arc::new(
        RuleSetBuilder::new()
            .rule("eligible", |r| {
                r.priority(10)
                    .when(field("cgpa").gte(2.5))
                    .decide("PROCEED", "meets minimum CGPA")
            })
            .rule("ineligible", |r| {
                r.priority(20)
                    .when(field("cgpa").lt(2.5))
                    .decide("REJECT", "below minimum CGPA")
            })
            .build(),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let rs = Arc::clone(&ruleset);
            thread::spawn(move || {
                let cgpa = 2.0 + 0.3 * f64::from(i);
                let facts = Facts::new().set("cgpa", cgpa);
                let outcome = rs.evaluate(&facts);
                println!("Thread {i} (cgpa {cgpa:.1}): {outcome}");
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
