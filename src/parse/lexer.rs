use winnow::ascii::multispace0;
use winnow::combinator::{alt, delimited, not, opt, terminated};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::types::{CompareOp, Condition, LogicalOp, Value};

use super::error::LexError;

/// One lexical unit of a rule string. Produced transiently for the parser and
/// not retained.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    OpenParen,
    CloseParen,
    Logical(LogicalOp),
    Condition(Condition),
}

/// Split rule text into tokens.
///
/// Whitespace separates tokens but is also tolerated inside a condition
/// between attribute, comparator, and literal, so `age>30` and `age > 30`
/// tokenize identically.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut rest = input;
    let mut tokens = Vec::new();
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        let start = rest;
        match token.parse_next(&mut rest) {
            Ok(t) => tokens.push(t),
            Err(_) => return Err(LexError::Unrecognized(fragment(start))),
        }
    }
    Ok(tokens)
}

/// The offending fragment for error reporting: everything up to the next
/// whitespace or parenthesis.
fn fragment(input: &str) -> String {
    input
        .split(|c: char| c.is_ascii_whitespace() || c == '(' || c == ')')
        .next()
        .unwrap_or(input)
        .to_owned()
}

fn token(input: &mut &str) -> ModalResult<Token> {
    alt((
        '('.value(Token::OpenParen),
        ')'.value(Token::CloseParen),
        logical_op.map(Token::Logical),
        condition.map(Token::Condition),
    ))
    .parse_next(input)
}

fn logical_op(input: &mut &str) -> ModalResult<LogicalOp> {
    // The keyword must not run into an identifier: `ANDy` is an attribute.
    terminated(
        alt(("AND".value(LogicalOp::And), "OR".value(LogicalOp::Or))),
        not(one_of(|c: char| c.is_ascii_alphanumeric() || c == '_')),
    )
    .parse_next(input)
}

fn ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_').parse_next(input)
}

fn compare_op(input: &mut &str) -> ModalResult<CompareOp> {
    // Two-character comparators before their one-character prefixes.
    alt((
        ">=".value(CompareOp::Gte),
        "<=".value(CompareOp::Lte),
        "!=".value(CompareOp::Neq),
        ">".value(CompareOp::Gt),
        "<".value(CompareOp::Lt),
        "=".value(CompareOp::Eq),
    ))
    .parse_next(input)
}

fn quoted_string(input: &mut &str) -> ModalResult<String> {
    delimited('\'', take_while(0.., |c: char| c != '\''), '\'')
        .map(str::to_owned)
        .parse_next(input)
}

fn numeral(input: &mut &str) -> ModalResult<f64> {
    (
        opt('-'),
        take_while(1.., |c: char| c.is_ascii_digit()),
        opt(('.', take_while(1.., |c: char| c.is_ascii_digit()))),
    )
        .take()
        .try_map(|s: &str| s.parse::<f64>())
        .parse_next(input)
}

fn literal(input: &mut &str) -> ModalResult<Value> {
    alt((quoted_string.map(Value::String), numeral.map(Value::Number))).parse_next(input)
}

fn condition(input: &mut &str) -> ModalResult<Condition> {
    let attribute = ident.parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    let comparator = compare_op.parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    let compare_value = literal.parse_next(input)?;
    Ok(Condition {
        attribute: attribute.to_owned(),
        comparator,
        compare_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token> {
        tokenize(input).unwrap()
    }

    #[test]
    fn tokenize_simple_condition() {
        let tokens = lex("age > 30");
        assert_eq!(tokens.len(), 1);
        match &tokens[0] {
            Token::Condition(c) => {
                assert_eq!(c.attribute, "age");
                assert_eq!(c.comparator, CompareOp::Gt);
                assert_eq!(c.compare_value, Value::Number(30.0));
            }
            other => panic!("expected condition, got {other:?}"),
        }
    }

    #[test]
    fn tokenize_condition_without_inner_whitespace() {
        assert_eq!(lex("age>30"), lex("age > 30"));
        assert_eq!(lex("age>=30"), lex("age >= 30"));
    }

    #[test]
    fn tokenize_quoted_string_strips_quotes() {
        let tokens = lex("department = 'Sales'");
        match &tokens[0] {
            Token::Condition(c) => {
                assert_eq!(c.compare_value, Value::String("Sales".to_owned()));
            }
            other => panic!("expected condition, got {other:?}"),
        }
    }

    #[test]
    fn tokenize_quoted_string_keeps_inner_whitespace() {
        let tokens = lex("region = 'North America'");
        match &tokens[0] {
            Token::Condition(c) => {
                assert_eq!(c.compare_value, Value::String("North America".to_owned()));
            }
            other => panic!("expected condition, got {other:?}"),
        }
    }

    #[test]
    fn tokenize_parens_without_surrounding_whitespace() {
        let tokens = lex("(age > 30)");
        assert_eq!(tokens[0], Token::OpenParen);
        assert_eq!(tokens[2], Token::CloseParen);
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn tokenize_logical_keywords() {
        let tokens = lex("age > 30 AND salary < 100 OR age = 25");
        assert_eq!(tokens[1], Token::Logical(LogicalOp::And));
        assert_eq!(tokens[3], Token::Logical(LogicalOp::Or));
    }

    #[test]
    fn keyword_prefix_is_an_attribute() {
        // `ANDy` must lex as an attribute name, not the AND keyword.
        let tokens = lex("ANDy = 1");
        assert_eq!(tokens.len(), 1);
        match &tokens[0] {
            Token::Condition(c) => assert_eq!(c.attribute, "ANDy"),
            other => panic!("expected condition, got {other:?}"),
        }
    }

    #[test]
    fn tokenize_negative_and_fractional_numerals() {
        match &lex("delta >= -1.5")[0] {
            Token::Condition(c) => assert_eq!(c.compare_value, Value::Number(-1.5)),
            other => panic!("expected condition, got {other:?}"),
        }
    }

    #[test]
    fn all_comparators_lex() {
        let cases = [
            ("x >= 1", CompareOp::Gte),
            ("x <= 1", CompareOp::Lte),
            ("x != 1", CompareOp::Neq),
            ("x > 1", CompareOp::Gt),
            ("x < 1", CompareOp::Lt),
            ("x = 1", CompareOp::Eq),
        ];
        for (text, expected) in cases {
            match &lex(text)[0] {
                Token::Condition(c) => assert_eq!(c.comparator, expected, "failed for {text}"),
                other => panic!("expected condition for {text}, got {other:?}"),
            }
        }
    }

    #[test]
    fn unrecognized_fragment_errors() {
        let err = tokenize("age > 30 && salary > 10").unwrap_err();
        let LexError::Unrecognized(fragment) = err;
        assert_eq!(fragment, "&&");
    }

    #[test]
    fn bare_word_literal_is_rejected() {
        // Unquoted string literals are not part of the grammar.
        let err = tokenize("department = Sales").unwrap_err();
        let LexError::Unrecognized(fragment) = err;
        assert_eq!(fragment, "department");
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   \t\n").unwrap().is_empty());
    }
}
