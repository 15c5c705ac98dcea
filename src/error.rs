//! Error types.

use std::fmt;

/// Category of a [`ParseError`], without positional detail.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    UnmatchedParenthesis,
    InsufficientOperands,
    InvalidToken,
    MalformedExpression,
}

/// Failure to build a syntax tree from an expression.
///
/// Positions are character offsets into the input (not byte offsets).
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// A `)` without a matching `(`, or a `(` left open at the end of input.
    UnmatchedParenthesis { position: usize },
    /// An operator was reduced with too few operands available.
    InsufficientOperands { operator: char, position: usize },
    /// A character outside the grammar alphabet.
    InvalidToken { token: char, position: usize },
    /// More than one operand remained after full reduction (a missing operator).
    MalformedExpression { operands: usize },
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::UnmatchedParenthesis { .. } => ParseErrorKind::UnmatchedParenthesis,
            ParseError::InsufficientOperands { .. } => ParseErrorKind::InsufficientOperands,
            ParseError::InvalidToken { .. } => ParseErrorKind::InvalidToken,
            ParseError::MalformedExpression { .. } => ParseErrorKind::MalformedExpression,
        }
    }

    /// Character offset at which the error was detected, if it has one.
    pub fn position(&self) -> Option<usize> {
        match *self {
            ParseError::UnmatchedParenthesis { position }
            | ParseError::InsufficientOperands { position, .. }
            | ParseError::InvalidToken { position, .. } => Some(position),
            ParseError::MalformedExpression { .. } => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnmatchedParenthesis { position } => {
                write!(f, "unmatched parenthesis at position {}", position)
            }
            ParseError::InsufficientOperands { operator, position } => {
                write!(f, "not enough operands for '{}' at position {}", operator, position)
            }
            ParseError::InvalidToken { token, position } => {
                write!(f, "invalid token {:?} at position {}", token, position)
            }
            ParseError::MalformedExpression { operands } => {
                write!(f, "malformed expression: {} operands left without an operator", operands)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Rejection of a custom [`Grammar`][crate::grammar::Grammar] table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GrammarError {
    /// The operator appears more than once, so the precedence order would not be total.
    DuplicateOperator(char),
    /// A unary operator that is missing from the operator list.
    UnknownUnary(char),
    /// The symbol is whitespace, a parenthesis or a terminal.
    ReservedSymbol(char),
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::DuplicateOperator(c) => write!(f, "operator '{}' is listed twice", c),
            GrammarError::UnknownUnary(c) => write!(f, "unary operator '{}' is not in the operator list", c),
            GrammarError::ReservedSymbol(c) => write!(f, "symbol {:?} is reserved and cannot be an operator", c),
        }
    }
}

impl std::error::Error for GrammarError {}
