//! notix parses a one-line arithmetic expression written in infix, prefix,
//! or postfix notation, builds the expression tree behind it, converts the
//! tree back into any of the three notations, and evaluates it.

pub mod convert;
pub mod error;
pub mod eval;
pub mod render;
pub mod syntax;

pub use convert::{convert, to_infix, to_postfix, to_prefix};
pub use error::{DetectError, Error, EvalError, LexError, ParseError};
pub use eval::evaluate;
pub use syntax::{build, detect, tokenize, Expr, Notation, Operator, Token};

/// A classified and parsed expression: which notation the input was written
/// in, and the tree it maps onto.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub notation: Notation,
    pub tree: Expr,
}

/// Runs the front half of the pipeline in one call: tokenize the line,
/// detect its notation, and build the tree.
pub fn analyze(line: &str) -> Result<Analysis, Error> {
    let tokens = tokenize(line)?;
    let notation = detect(&tokens)?;
    let tree = build(&tokens, notation)?;

    Ok(Analysis { notation, tree })
}
