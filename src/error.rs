use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the rpncalc crate.
///
/// Every variant is terminal for the evaluation that raised it; there is no
/// recovery path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Too few operands for an operator, or a non-numeric value in operand
    /// position, during postfix evaluation
    MissingOperand,
    /// The divisor of a division was zero
    DivisionByZero,
    /// Unbalanced parentheses, or two numerals with no operator between them
    MissingOperator,
    /// Precedence or associativity was requested for a symbol outside the
    /// operator set. Unreachable as long as the tokenizer only emits known
    /// operators, so hitting it means a bug rather than bad input
    OperatorNotFound,
}

impl Error {
    /// Get the static message for this error kind
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingOperand => "Missing or bad operand",
            Self::DivisionByZero => "Division with 0",
            Self::MissingOperator => "Missing operator or parenthesis",
            Self::OperatorNotFound => "Operator not found",
        }
    }
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(self.message())
    }
}

impl error::Error for Error {}
