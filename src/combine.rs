use crate::parse::{parse, ParseError};
use crate::types::{LogicalOp, Node};

/// The result of combining several rules: the folded tree and the rebuilt
/// rule text.
///
/// The text is folded from the original input strings, not re-rendered from
/// the tree, so duplicate inputs still appear in the text even when the tree
/// fold deduplicated them.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRule {
    pub node: Node,
    pub text: String,
}

/// Parse each rule string independently and fold the trees left-to-right
/// under `op`, skipping any tree structurally equal to the running combined
/// tree. The rule text is folded in parallel by wrapping each successive pair
/// as `"(left op right)"`.
///
/// # Errors
///
/// Returns [`ParseError::EmptyInput`] for an empty slice, or the first error
/// from parsing any of the inputs.
pub fn combine<S: AsRef<str>>(rules: &[S], op: LogicalOp) -> Result<CombinedRule, ParseError> {
    let mut iter = rules.iter();
    let first = iter.next().ok_or(ParseError::EmptyInput)?;

    let mut node = parse(first.as_ref())?;
    let mut text = first.as_ref().to_owned();

    for rule in iter {
        let next = parse(rule.as_ref())?;
        if next != node {
            node = Node::operator(op, node, next);
        }
        text = format!("({text} {op} {})", rule.as_ref());
    }

    Ok(CombinedRule { node, text })
}
