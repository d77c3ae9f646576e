use thiserror::Error;

use crate::types::{CompareOp, LogicalOp, Node, Record};

/// Errors produced when evaluating a tree against an attribute record.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("missing attribute '{0}' in record")]
    MissingAttribute(String),

    #[error("comparator '{0}' is not defined for the given operand types")]
    InvalidComparator(CompareOp),

    #[error("malformed expression node")]
    MalformedNode,
}

/// Evaluate a compiled rule tree against an attribute record.
///
/// Both children of every operator node are evaluated; there is no boolean
/// short-circuit, so a missing attribute on either side always surfaces.
///
/// # Errors
///
/// Returns [`EvalError`] if the record lacks a referenced attribute, an
/// ordering comparator meets operands with no defined order, or the tree
/// violates the node invariants.
pub fn evaluate(node: &Node, record: &Record) -> Result<bool, EvalError> {
    match node {
        Node::Operand { value: condition } => {
            if condition.attribute.is_empty() {
                return Err(EvalError::MalformedNode);
            }
            let actual = record
                .get(&condition.attribute)
                .ok_or_else(|| EvalError::MissingAttribute(condition.attribute.clone()))?;
            actual
                .compare(condition.comparator, &condition.compare_value)
                .ok_or(EvalError::InvalidComparator(condition.comparator))
        }
        Node::Operator {
            operator,
            left,
            right,
        } => {
            let lhs = evaluate(left, record)?;
            let rhs = evaluate(right, record)?;
            Ok(match operator {
                LogicalOp::And => lhs && rhs,
                LogicalOp::Or => lhs || rhs,
            })
        }
    }
}
