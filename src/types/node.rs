use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::Value;

/// Logical connectives joining two sub-trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOp {
    And,
    Or,
}

/// Comparison operators supported in conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Neq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
}

/// A single attribute comparison, the payload of a leaf node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub attribute: String,
    #[serde(rename = "operator")]
    pub comparator: CompareOp,
    #[serde(rename = "compareValue")]
    pub compare_value: Value,
}

/// The compiled, immutable tree representation of a rule string.
///
/// Produced by [`parse`](crate::parse) and consumed by
/// [`combine`](crate::combine) and [`evaluate`](crate::evaluate). Children are
/// exclusively owned; the derived `PartialEq` is the structural equality the
/// combiner deduplicates with.
///
/// The derived serde shape is the external wire format: an operand serializes
/// as `{"type":"operand","value":{..}}` and an operator as
/// `{"type":"operator","operator":"AND","left":..,"right":..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Operand {
        value: Condition,
    },
    Operator {
        operator: LogicalOp,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Build a leaf node from a condition.
    #[must_use]
    pub fn operand(condition: Condition) -> Node {
        Node::Operand { value: condition }
    }

    /// Build an operator node joining two sub-trees.
    #[must_use]
    pub fn operator(op: LogicalOp, left: Node, right: Node) -> Node {
        Node::Operator {
            operator: op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Serialize this tree to its JSON wire shape.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError`](crate::SerializeError) if encoding fails.
    pub fn to_json(&self) -> Result<String, crate::SerializeError> {
        crate::serial::to_json(self)
    }

    /// Deserialize a tree from its JSON wire shape, validating the result.
    ///
    /// # Errors
    ///
    /// Returns [`DeserializeError`](crate::DeserializeError) on malformed JSON,
    /// an unknown operator or comparator, or a tree violating the node
    /// invariants.
    pub fn from_json(input: &str) -> Result<Node, crate::DeserializeError> {
        crate::serial::from_json(input)
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOp::And => write!(f, "AND"),
            LogicalOp::Or => write!(f, "OR"),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Eq => write!(f, "="),
            CompareOp::Neq => write!(f, "!="),
            CompareOp::Gt => write!(f, ">"),
            CompareOp::Gte => write!(f, ">="),
            CompareOp::Lt => write!(f, "<"),
            CompareOp::Lte => write!(f, "<="),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Operand { value } => write!(
                f,
                "{} {} {}",
                value.attribute, value.comparator, value.compare_value
            ),
            Node::Operator {
                operator,
                left,
                right,
            } => write!(f, "({left} {operator} {right})"),
        }
    }
}
