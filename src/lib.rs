//! Compile, combine, and evaluate boolean eligibility rules.
//!
//! A rule string like `age > 30 AND department = 'Sales'` is parsed into an
//! immutable [`Node`] tree, which can be merged with other trees under a
//! logical operator via [`combine`], serialized to a JSON wire shape, and
//! evaluated against a flat attribute [`Record`].
//!
//! ```
//! use rulekit::{evaluate, parse, Record};
//!
//! let tree = parse("age > 30 AND department = 'Sales'")?;
//! let record = Record::new().set("age", 35_i64).set("department", "Sales");
//! assert!(evaluate(&tree, &record)?);
//! # Ok::<(), rulekit::RulekitError>(())
//! ```
//!
//! All operations are synchronous pure functions; a tree is immutable once
//! built and may be evaluated from any number of threads concurrently.

mod combine;
mod error;
mod evaluate;
mod parse;
mod serial;
mod types;

pub use combine::{combine, CombinedRule};
pub use error::RulekitError;
pub use evaluate::{evaluate, EvalError};
pub use parse::{parse, LexError, ParseError};
pub use serial::{DeserializeError, SerializeError};
pub use types::{CompareOp, Condition, LogicalOp, Node, Record, Value};

/// Parse a rule string and evaluate it against a record in one call.
///
/// # Errors
///
/// Returns [`RulekitError`] on parse or evaluation failure.
pub fn evaluate_rule(rule: &str, record: &Record) -> Result<bool, RulekitError> {
    let node = parse(rule)?;
    Ok(evaluate(&node, record)?)
}

/// Decode a serialized tree and evaluate it against a record in one call.
///
/// This is the shape of the evaluate endpoint a transport layer exposes: it
/// receives the stored JSON tree and the attribute record, and returns the
/// verdict.
///
/// # Errors
///
/// Returns [`RulekitError`] on decode or evaluation failure.
pub fn evaluate_json(tree: &str, record: &Record) -> Result<bool, RulekitError> {
    let node = Node::from_json(tree)?;
    Ok(evaluate(&node, record)?)
}
