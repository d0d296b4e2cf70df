use crate::error::Error;
use crate::token::Token;
use crate::util::is_operator;
use std::iter::Peekable;
use std::str::Chars;

/// An helper struct for scanning the input into tokens
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(string: &str) -> Lexer {
        Lexer {
            input: string.chars().peekable(),
        }
    }

    /// Scan the input left to right into a flat token sequence.
    ///
    /// Digits and `.` accumulate into a single `Number` token, flushed when
    /// an operator or parenthesis shows up or at end of input. Whitespace
    /// never ends up in a token, but a numeral interrupted by whitespace is
    /// rejected: `1 2` has no operator between the halves, so it fails with
    /// `MissingOperator`. Any other character is skipped.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();
        let mut digits = String::new();
        // set by whitespace, cleared by the next accepted character
        let mut boundary = false;

        while let Some(c) = self.input.next() {
            if c.is_ascii_digit() || c == '.' {
                if boundary && !digits.is_empty() {
                    return Err(Error::MissingOperator);
                }
                digits.push(c);
                boundary = false;
            } else if is_operator(c) || c == '(' || c == ')' {
                if !digits.is_empty() {
                    tokens.push(Token::Number(std::mem::take(&mut digits)));
                }
                boundary = false;
                tokens.push(match c {
                    '(' => Token::LParen,
                    ')' => Token::RParen,
                    op => Token::Op(op),
                });
            } else if c.is_whitespace() {
                boundary = true;
            }
        }
        if !digits.is_empty() {
            tokens.push(Token::Number(digits));
        }
        Ok(tokens)
    }
}
