use thiserror::Error;

/// Errors produced when tokenizing rule text.
#[derive(Debug, Error)]
pub enum LexError {
    #[error("unrecognized token '{0}'")]
    Unrecognized(String),
}

/// Errors produced when parsing rule text into a tree.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("empty rule string")]
    EmptyInput,

    #[error("unmatched '(' in rule")]
    UnmatchedOpenParen,

    #[error("unmatched ')' in rule")]
    UnmatchedCloseParen,

    #[error("logical operator is missing its operands")]
    MissingOperands,

    #[error("rule did not reduce to a single expression")]
    MalformedExpression,
}
