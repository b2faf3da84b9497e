mod condition;
mod evaluation_report;
mod facts;
mod outcome;
mod rule;
mod ruleset;
mod value;

pub use condition::{field, CompareOp, Condition, FieldCond};
pub use evaluation_report::EvaluationReport;
pub use facts::Facts;
pub use outcome::Outcome;
pub use rule::{Action, Rule};
pub use ruleset::{RuleBuilder, RuleSet, RuleSetBuilder};
pub use value::Value;
