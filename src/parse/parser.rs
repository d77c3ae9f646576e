use crate::types::{LogicalOp, Node};

use super::error::ParseError;
use super::lexer::Token;

/// Entries on the operator stack: open-paren markers and pending logical
/// operators awaiting reduction.
#[derive(Debug, Clone, Copy)]
enum StackEntry {
    OpenParen,
    Op(LogicalOp),
}

/// Shift-reduce the token sequence into a single tree.
///
/// Two local stacks: operators (parens and pending AND/OR) and operands
/// (finished sub-trees). A new logical operator first reduces every pending
/// operator on top of the stack, so AND and OR fold strictly left-to-right
/// with no precedence between them; grouping is expressed with parentheses.
pub(crate) fn parse_tokens(tokens: Vec<Token>) -> Result<Node, ParseError> {
    let mut operators: Vec<StackEntry> = Vec::new();
    let mut operands: Vec<Node> = Vec::new();

    for token in tokens {
        match token {
            Token::OpenParen => operators.push(StackEntry::OpenParen),
            Token::CloseParen => loop {
                match operators.pop() {
                    None => return Err(ParseError::UnmatchedCloseParen),
                    Some(StackEntry::OpenParen) => break,
                    Some(StackEntry::Op(op)) => reduce(op, &mut operands)?,
                }
            },
            Token::Logical(op) => {
                while let Some(StackEntry::Op(pending)) = operators.last().copied() {
                    operators.pop();
                    reduce(pending, &mut operands)?;
                }
                operators.push(StackEntry::Op(op));
            }
            Token::Condition(condition) => operands.push(Node::operand(condition)),
        }
    }

    while let Some(entry) = operators.pop() {
        match entry {
            StackEntry::OpenParen => return Err(ParseError::UnmatchedOpenParen),
            StackEntry::Op(op) => reduce(op, &mut operands)?,
        }
    }

    let root = operands.pop().ok_or(ParseError::MalformedExpression)?;
    if !operands.is_empty() {
        return Err(ParseError::MalformedExpression);
    }
    Ok(root)
}

/// Pop the top two operands and push them back joined under `op`.
fn reduce(op: LogicalOp, operands: &mut Vec<Node>) -> Result<(), ParseError> {
    let right = operands.pop().ok_or(ParseError::MissingOperands)?;
    let left = operands.pop().ok_or(ParseError::MissingOperands)?;
    operands.push(Node::operator(op, left, right));
    Ok(())
}
