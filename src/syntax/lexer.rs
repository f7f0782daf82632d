use std::{iter::Peekable, str::CharIndices};

use super::token::{Operator, Token};
use crate::error::LexError;

pub struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.chars.next() {
            None => None,
            Some((_, '*')) => Some(Ok(Token::Op(Operator::Mul))),
            Some((_, '/')) => Some(Ok(Token::Op(Operator::Div))),
            Some((_, '^')) => Some(Ok(Token::Op(Operator::Pow))),
            Some((_, '(')) => Some(Ok(Token::LParen)),
            Some((_, ')')) => Some(Ok(Token::RParen)),
            Some((off, c @ ('+' | '-'))) => {
                if self.starts_signed_number(off) {
                    return Some(self.read_number(off));
                }
                let op = if c == '+' { Operator::Plus } else { Operator::Minus };
                Some(Ok(Token::Op(op)))
            }
            Some((off, c)) => {
                if c.is_whitespace() {
                    return self.next();
                }
                if c.is_ascii_digit() || c == '.' {
                    return Some(self.read_number(off));
                }

                Some(Err(LexError::UnexpectedChar { ch: c, pos: off }))
            }
        }
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    // A `+` or `-` opens a numeric literal when it is glued to the digits and
    // not glued to a preceding operand: `-3` and `2*-3` fold the sign, while
    // the `-` in `2-3` stays an operator.
    fn starts_signed_number(&mut self, off: usize) -> bool {
        let glued_to_digits = matches!(
            self.chars.peek(),
            Some(&(_, c)) if c.is_ascii_digit() || c == '.'
        );
        let glued_to_operand = self.src[..off]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_digit() || c == '.' || c == ')');

        glued_to_digits && !glued_to_operand
    }

    fn read_number(&mut self, from_off: usize) -> Result<Token, LexError> {
        let s = self.slice_until(from_off, |c| !c.is_ascii_digit() && c != '.');
        match s.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Token::Number(value)),
            _ => Err(LexError::MalformedNumber {
                literal: s.to_string(),
                pos: from_off,
            }),
        }
    }
}

pub fn tokenize(src: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(src).collect()
}

#[cfg(test)]
mod test {
    use super::{
        super::token::{Operator, Token},
        tokenize, LexError,
    };

    #[test]
    fn read_numbers() {
        let tokens = tokenize("48 7.5 1024 \n9\n.5").unwrap();
        let expected = &[
            Token::Number(48.0),
            Token::Number(7.5),
            Token::Number(1024.0),
            Token::Number(9.0),
            Token::Number(0.5),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn read_unspaced_infix() {
        let tokens = tokenize("(2+3)*4").unwrap();
        let expected = &[
            Token::LParen,
            Token::Number(2.0),
            Token::Op(Operator::Plus),
            Token::Number(3.0),
            Token::RParen,
            Token::Op(Operator::Mul),
            Token::Number(4.0),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn sign_folds_into_literal() {
        let tokens = tokenize("-3.5 2*-3").unwrap();
        let expected = &[
            Token::Number(-3.5),
            Token::Number(2.0),
            Token::Op(Operator::Mul),
            Token::Number(-3.0),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn sign_after_operand_is_an_operator() {
        let tokens = tokenize("2-3").unwrap();
        let expected = &[
            Token::Number(2.0),
            Token::Op(Operator::Minus),
            Token::Number(3.0),
        ];

        assert_eq!(tokens, expected);

        let tokens = tokenize("(2+3)-4").unwrap();
        assert_eq!(tokens[5], Token::Op(Operator::Minus));
    }

    #[test]
    fn unexpected_character() {
        let err = tokenize("48$7").unwrap_err();
        assert_eq!(err, LexError::UnexpectedChar { ch: '$', pos: 2 });
    }

    #[test]
    fn malformed_number() {
        let err = tokenize("1.2.3 + 4").unwrap_err();
        assert_eq!(
            err,
            LexError::MalformedNumber {
                literal: "1.2.3".to_string(),
                pos: 0,
            }
        );
    }
}
