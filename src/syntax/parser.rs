use super::{
    expr::Expr,
    notation::Notation,
    token::{Assoc, Precedence, Token},
};
use crate::error::ParseError;

/// Builds the expression tree for `tokens` under the given notation's
/// grammar. The whole sequence must form exactly one expression.
pub fn build(tokens: &[Token], notation: Notation) -> Result<Expr, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut parser = Parser::new(tokens);
    let expr = match notation {
        Notation::Infix => parser.parse_infix_expr(1)?,
        Notation::Prefix => parser.parse_prefix_expr()?,
        Notation::Postfix => parser.parse_postfix_expr()?,
    };

    match parser.next() {
        Some(token) => Err(ParseError::UnexpectedTrailingTokens { token }),
        None => Ok(expr),
    }
}

struct Parser<'t> {
    tokens: &'t [Token],
    index: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.index).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.bump();
        }
        token
    }

    #[inline]
    fn bump(&mut self) {
        self.index += 1;
    }

    // Precedence climbing. A left-associative operator re-parses its
    // right-hand side one level tighter so equal precedences chain left;
    // the right-associative `^` re-parses at its own level.
    fn parse_infix_expr(&mut self, min_prec: Precedence) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_infix_operand()?;

        while let Some(Token::Op(op)) = self.peek() {
            let (prec, assoc) = op.get();

            if prec < min_prec {
                break;
            }
            self.bump();

            let next_min_prec = if assoc == Assoc::Left { prec + 1 } else { prec };
            let rhs = self.parse_infix_expr(next_min_prec)?;

            lhs = Expr::Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn parse_infix_operand(&mut self) -> Result<Expr, ParseError> {
        match self.next() {
            None => Err(ParseError::UnexpectedEndOfInput),
            Some(Token::Number(value)) => Ok(Expr::Number(value)),
            Some(Token::LParen) => {
                let inner = self.parse_infix_expr(1)?;
                match self.next() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(ParseError::ExpectedClosingParen),
                }
            }
            Some(token) => Err(ParseError::UnexpectedToken { token }),
        }
    }

    // An operator is followed by its two operands, recursively.
    fn parse_prefix_expr(&mut self) -> Result<Expr, ParseError> {
        match self.next() {
            None => Err(ParseError::UnexpectedEndOfInput),
            Some(Token::Number(value)) => Ok(Expr::Number(value)),
            Some(Token::Op(op)) => {
                let lhs = self.parse_prefix_expr()?;
                let rhs = self.parse_prefix_expr()?;
                Ok(Expr::Binary {
                    lhs: Box::new(lhs),
                    op,
                    rhs: Box::new(rhs),
                })
            }
            Some(token) => Err(ParseError::UnexpectedToken { token }),
        }
    }

    // Numbers pile up on a stack; an operator combines the two most recent
    // subtrees. The first pop is the right child.
    fn parse_postfix_expr(&mut self) -> Result<Expr, ParseError> {
        let mut stack: Vec<Expr> = Vec::new();

        while let Some(token) = self.next() {
            match token {
                Token::Number(value) => stack.push(Expr::Number(value)),
                Token::Op(op) => {
                    let rhs = stack.pop().ok_or(ParseError::NotEnoughOperands { op })?;
                    let lhs = stack.pop().ok_or(ParseError::NotEnoughOperands { op })?;
                    stack.push(Expr::Binary {
                        lhs: Box::new(lhs),
                        op,
                        rhs: Box::new(rhs),
                    });
                }
                token => return Err(ParseError::UnexpectedToken { token }),
            }
        }

        let expr = stack.pop().ok_or(ParseError::EmptyExpression)?;
        if !stack.is_empty() {
            return Err(ParseError::TooManyOperands);
        }
        Ok(expr)
    }
}

#[cfg(test)]
mod test {
    use super::{
        super::{
            lexer::tokenize,
            token::{Operator, Token},
        },
        build, Expr, Notation, ParseError,
    };

    fn build_str(s: &str, notation: Notation) -> Result<Expr, ParseError> {
        build(&tokenize(s).unwrap(), notation)
    }

    #[test]
    fn parse_infix_precedence() {
        use Expr::*;
        use Operator::*;

        let expr = build_str("2 + 3 * 4", Notation::Infix).unwrap();
        let expected = Binary {
            lhs: Box::new(Number(2.0)),
            op: Plus,
            rhs: Box::new(Binary {
                lhs: Box::new(Number(3.0)),
                op: Mul,
                rhs: Box::new(Number(4.0)),
            }),
        };

        assert_eq!(expr, expected);
    }

    #[test]
    fn parse_infix_grouping() {
        use Expr::*;
        use Operator::*;

        let expr = build_str("(2 + 3) * 4", Notation::Infix).unwrap();
        let expected = Binary {
            lhs: Box::new(Binary {
                lhs: Box::new(Number(2.0)),
                op: Plus,
                rhs: Box::new(Number(3.0)),
            }),
            op: Mul,
            rhs: Box::new(Number(4.0)),
        };

        assert_eq!(expr, expected);
    }

    #[test]
    fn parse_infix_left_assoc() {
        use Expr::*;
        use Operator::*;

        // 2 - 3 - 4 groups as (2 - 3) - 4
        let expr = build_str("2 - 3 - 4", Notation::Infix).unwrap();
        let expected = Binary {
            lhs: Box::new(Binary {
                lhs: Box::new(Number(2.0)),
                op: Minus,
                rhs: Box::new(Number(3.0)),
            }),
            op: Minus,
            rhs: Box::new(Number(4.0)),
        };

        assert_eq!(expr, expected);
    }

    #[test]
    fn parse_infix_pow_right_assoc() {
        use Expr::*;
        use Operator::*;

        // 2 ^ 3 ^ 2 groups as 2 ^ (3 ^ 2)
        let expr = build_str("2 ^ 3 ^ 2", Notation::Infix).unwrap();
        let expected = Binary {
            lhs: Box::new(Number(2.0)),
            op: Pow,
            rhs: Box::new(Binary {
                lhs: Box::new(Number(3.0)),
                op: Pow,
                rhs: Box::new(Number(2.0)),
            }),
        };

        assert_eq!(expr, expected);
    }

    #[test]
    fn parse_prefix() {
        use Expr::*;
        use Operator::*;

        let expr = build_str("* + 1 2 3", Notation::Prefix).unwrap();
        let expected = Binary {
            lhs: Box::new(Binary {
                lhs: Box::new(Number(1.0)),
                op: Plus,
                rhs: Box::new(Number(2.0)),
            }),
            op: Mul,
            rhs: Box::new(Number(3.0)),
        };

        assert_eq!(expr, expected);
    }

    #[test]
    fn parse_postfix() {
        use Expr::*;
        use Operator::*;

        let expr = build_str("2 3 4 * +", Notation::Postfix).unwrap();
        let expected = Binary {
            lhs: Box::new(Number(2.0)),
            op: Plus,
            rhs: Box::new(Binary {
                lhs: Box::new(Number(3.0)),
                op: Mul,
                rhs: Box::new(Number(4.0)),
            }),
        };

        assert_eq!(expr, expected);
    }

    #[test]
    fn postfix_operand_underflow() {
        let err = build_str("2 3 +  +", Notation::Postfix).unwrap_err();
        assert_eq!(err, ParseError::NotEnoughOperands { op: Operator::Plus });
    }

    #[test]
    fn postfix_leftover_operands() {
        let err = build_str("2 3", Notation::Postfix).unwrap_err();
        assert_eq!(err, ParseError::TooManyOperands);
    }

    #[test]
    fn infix_missing_closing_paren() {
        let err = build_str("(2 + 3", Notation::Infix).unwrap_err();
        assert_eq!(err, ParseError::ExpectedClosingParen);
    }

    #[test]
    fn prefix_runs_out_of_tokens() {
        let err = build_str("+ 2", Notation::Prefix).unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEndOfInput);
    }

    #[test]
    fn trailing_tokens_rejected() {
        let err = build_str("+ 2 3 4", Notation::Prefix).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedTrailingTokens {
                token: Token::Number(4.0),
            }
        );
    }

    #[test]
    fn empty_input_rejected() {
        let err = build(&[], Notation::Infix).unwrap_err();
        assert_eq!(err, ParseError::EmptyExpression);
    }
}
