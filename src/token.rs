use crate::error::Error;

/// Possible tokens to find in the input string
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, kept as the scanned characters in input order
    Number(String),
    /// One of the operators `+ - * / ^`
    Op(char),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

impl Token {
    /// Get the numeric value of this token.
    ///
    /// Fails with `MissingOperand` when the token is an operator, a
    /// parenthesis, or a malformed numeral such as `1.2.3`.
    pub fn number(&self) -> Result<f64, Error> {
        match self {
            Self::Number(digits) => digits.parse().map_err(|_| Error::MissingOperand),
            _ => Err(Error::MissingOperand),
        }
    }
}

/// Grouping direction for operators of equal precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    /// Repeated application groups left to right, as for `+ - * /`
    Left,
    /// Repeated application groups right to left, as for `^`
    Right,
}
