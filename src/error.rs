use thiserror::Error;

use crate::parse::ParseError;

/// Unified error type covering rule-document loading and I/O.
///
/// Returned by convenience methods like [`RuleSet::from_json()`](crate::RuleSet::from_json)
/// and [`RuleSet::from_file()`](crate::RuleSet::from_file). Evaluation
/// itself is infallible: malformed conditions, missing facts, and
/// incomparable values are non-matches, not errors.
#[derive(Debug, Error)]
pub enum RulingError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
