use std::fmt;

use crate::syntax::{Operator, Token};

/// Errors produced while splitting raw text into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character outside the accepted set (digits, `.`, `+ - * / ^`,
    /// parentheses, whitespace).
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character in the input line.
        pos: usize,
    },
    /// A numeric literal that does not parse, such as `1.2.3`.
    MalformedNumber {
        /// The literal as written.
        literal: String,
        /// Byte offset of the literal's first character.
        pos: usize,
    },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedChar { ch, pos } => {
                write!(f, "Unexpected character '{ch}' at column {}.", pos + 1)
            }
            Self::MalformedNumber { literal, pos } => {
                write!(f, "Malformed number '{literal}' at column {}.", pos + 1)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Errors produced while classifying a token sequence as one of the three
/// notations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// The sequence validates under more than one grammar and no tie-break
    /// applies.
    AmbiguousNotation,
    /// The sequence validates under none of the three grammars.
    InvalidSyntax,
}

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousNotation => {
                write!(f, "Expression matches more than one notation; cannot pick one.")
            }
            Self::InvalidSyntax => {
                write!(f, "Expression is not valid infix, prefix, or postfix notation.")
            }
        }
    }
}

impl std::error::Error for DetectError {}

/// Errors produced while building the expression tree from tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The token sequence was empty; a tree needs at least one operand.
    EmptyExpression,
    /// A token that the current grammar does not allow at this point.
    UnexpectedToken {
        /// The token encountered.
        token: Token,
    },
    /// The token sequence ended while an expression was still incomplete.
    UnexpectedEndOfInput,
    /// A `(` was never matched by a `)`.
    ExpectedClosingParen,
    /// Tokens remained after the top-level expression was complete.
    UnexpectedTrailingTokens {
        /// The first leftover token.
        token: Token,
    },
    /// A postfix operator was reached with fewer than two operands built.
    NotEnoughOperands {
        /// The operator that could not be applied.
        op: Operator,
    },
    /// More than one operand remained once all tokens were consumed.
    TooManyOperands,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Expression is empty."),
            Self::UnexpectedToken { token } => write!(f, "Unexpected token '{token}'."),
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),
            Self::ExpectedClosingParen => {
                write!(f, "Expected closing parenthesis ')' but none found.")
            }
            Self::UnexpectedTrailingTokens { token } => {
                write!(f, "Extra token '{token}' after the expression.")
            }
            Self::NotEnoughOperands { op } => {
                write!(f, "Operator '{op}' needs two operands.")
            }
            Self::TooManyOperands => {
                write!(f, "Expression ends with operands left over.")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors produced while evaluating a built tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The right-hand side of a division was zero.
    DivisionByZero,
    /// Zero raised to a negative power.
    InvalidExponent,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::InvalidExponent => {
                write!(f, "Zero cannot be raised to a negative power.")
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Any failure the pipeline can surface, stage by stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Lex(LexError),
    Detect(DetectError),
    Parse(ParseError),
    Eval(EvalError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Detect(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Eval(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Detect(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<DetectError> for Error {
    fn from(e: DetectError) -> Self {
        Self::Detect(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
