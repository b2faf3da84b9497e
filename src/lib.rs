mod error;
mod evaluate;
mod parse;
mod types;

pub use error::RulingError;
pub use parse::{parse, ParseError};
pub use types::{
    field, Action, CompareOp, Condition, EvaluationReport, Facts, FieldCond, Outcome, Rule,
    RuleBuilder, RuleSet, RuleSetBuilder, Value,
};
