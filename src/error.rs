use thiserror::Error;

use crate::evaluate::EvalError;
use crate::parse::ParseError;
use crate::serial::{DeserializeError, SerializeError};

/// Unified error type covering parsing, evaluation, and serialization.
///
/// Returned by convenience entry points like [`evaluate_rule`](crate::evaluate_rule)
/// and [`evaluate_json`](crate::evaluate_json); callers that need the precise
/// taxonomy match on the wrapped error.
#[derive(Debug, Error)]
pub enum RulekitError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),

    #[error(transparent)]
    Deserialize(#[from] DeserializeError),
}
