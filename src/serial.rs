//! JSON serialization and deserialization of rule trees.
//!
//! The wire shape is a discriminated record, shared with the collaborating
//! persistence and transport layers:
//!
//! ```json
//! {"type": "operand", "value": {"attribute": "age", "operator": ">", "compareValue": 30.0}}
//! {"type": "operator", "operator": "AND", "left": { ... }, "right": { ... }}
//! ```
//!
//! `compareValue` is a JSON number or string. Encoding and decoding are
//! lossless: a decoded tree is structurally equal to the encoded one and
//! evaluates identically against every record.

use thiserror::Error;

use crate::types::Node;

/// Errors that can occur when serializing a tree to JSON.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("failed to encode rule tree: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors that can occur when deserializing a tree from JSON.
#[derive(Debug, Error)]
pub enum DeserializeError {
    #[error("failed to decode rule tree: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("validation failed: {0}")]
    Validation(String),
}

pub(crate) fn to_json(node: &Node) -> Result<String, SerializeError> {
    Ok(serde_json::to_string(node)?)
}

pub(crate) fn from_json(input: &str) -> Result<Node, DeserializeError> {
    let node: Node = serde_json::from_str(input)?;
    validate(&node)?;
    Ok(node)
}

/// Decoded trees come from outside the crate; re-check the invariants the
/// parser guarantees by construction.
fn validate(node: &Node) -> Result<(), DeserializeError> {
    match node {
        Node::Operand { value } => {
            if value.attribute.is_empty() {
                return Err(DeserializeError::Validation(
                    "operand node has an empty attribute name".to_owned(),
                ));
            }
            Ok(())
        }
        Node::Operator { left, right, .. } => {
            validate(left)?;
            validate(right)
        }
    }
}
