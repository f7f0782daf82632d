use std::fmt;

use super::token::Token;
use crate::error::DetectError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Infix,
    Prefix,
    Postfix,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infix => write!(f, "infix"),
            Self::Prefix => write!(f, "prefix"),
            Self::Postfix => write!(f, "postfix"),
        }
    }
}

/// Classifies a token sequence by checking it against each notation's
/// grammar in full. Infix wins any tie; the only sequences that satisfy
/// more than one grammar are operator-free operands like `2`, which all
/// three accept.
pub fn detect(tokens: &[Token]) -> Result<Notation, DetectError> {
    let infix = infix_signature(tokens);
    let prefix = prefix_signature(tokens);
    let postfix = postfix_signature(tokens);
    log::debug!("signatures: infix={infix} prefix={prefix} postfix={postfix}");

    match (infix, prefix, postfix) {
        (true, _, _) => Ok(Notation::Infix),
        (false, true, false) => Ok(Notation::Prefix),
        (false, false, true) => Ok(Notation::Postfix),
        (false, true, true) => Err(DetectError::AmbiguousNotation),
        (false, false, false) => Err(DetectError::InvalidSyntax),
    }
}

fn postfix_signature(tokens: &[Token]) -> bool {
    depth_signature(tokens.iter())
}

fn prefix_signature(tokens: &[Token]) -> bool {
    depth_signature(tokens.iter().rev())
}

// Operand-depth check: a number resolves to one operand, an operator consumes
// the two most recently resolved ones. A valid sequence never underflows and
// leaves exactly one operand. Scanned left-to-right this accepts postfix;
// scanned right-to-left, prefix. Parentheses belong to neither grammar.
fn depth_signature<'t>(tokens: impl Iterator<Item = &'t Token>) -> bool {
    let mut depth: usize = 0;

    for token in tokens {
        match token {
            Token::Number(_) => depth += 1,
            Token::Op(_) => {
                if depth < 2 {
                    return false;
                }
                depth -= 1;
            }
            Token::LParen | Token::RParen => return false,
        }
    }

    depth == 1
}

// Operands and operators strictly alternate; a `(` may stand wherever an
// operand may start and a `)` wherever one just ended.
fn infix_signature(tokens: &[Token]) -> bool {
    let mut expect_operand = true;
    let mut open_parens: usize = 0;

    for token in tokens {
        match token {
            Token::Number(_) if expect_operand => expect_operand = false,
            Token::LParen if expect_operand => open_parens += 1,
            Token::Op(_) if !expect_operand => expect_operand = true,
            Token::RParen if !expect_operand => {
                if open_parens == 0 {
                    return false;
                }
                open_parens -= 1;
            }
            _ => return false,
        }
    }

    !expect_operand && open_parens == 0
}
