use crate::error::Error;
use crate::eval::eval_postfix;
use crate::lexer::Lexer;
use crate::postfix::to_postfix;
use crate::token::Token;

/// Evaluate a single expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// scanning, converting or evaluating the expression failed. An empty input
/// evaluates to `NaN` rather than an error.
///
/// # Examples
///
/// ```
/// # use rpncalc::evaluate;
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
/// assert!(evaluate("").unwrap().is_nan());
/// ```
pub fn evaluate(input: &str) -> Result<f64, Error> {
    if input.is_empty() {
        return Ok(f64::NAN);
    }
    Expr::parse(input).and_then(|expr| expr.eval())
}

/// A parsed arithmetic expression, held in postfix order.
///
/// Splitting parsing from evaluation allows running the same expression
/// repeatedly without scanning it again.
///
/// # Examples
/// ```
/// # use rpncalc::Expr;
/// let expr = Expr::parse("3 + 5 * 2").unwrap();
/// assert_eq!(expr.eval(), Ok(13.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    postfix: Vec<Token>,
}

impl Expr {
    /// Parse the given arithmetic `expression` into its postfix form.
    ///
    /// # Examples
    /// ```
    /// # use rpncalc::Expr;
    /// // a valid expression
    /// assert!(Expr::parse("3 + 5 * 2").is_ok());
    /// // an unbalanced one
    /// assert!(Expr::parse("(3 + 5 * 2").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        let tokens = Lexer::new(expression).tokenize()?;
        let postfix = to_postfix(&tokens)?;
        Ok(Self { postfix })
    }

    /// Evaluate the parsed expression.
    ///
    /// # Examples
    /// ```
    /// # use rpncalc::Expr;
    /// let expr = Expr::parse("2^3^2").unwrap();
    /// assert_eq!(expr.eval(), Ok(512.0));
    /// assert_eq!(expr.eval(), Ok(512.0));
    /// ```
    pub fn eval(&self) -> Result<f64, Error> {
        eval_postfix(&self.postfix)
    }

    /// Get the tokens of this expression in postfix order
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate, Expr};
    use crate::error::Error;

    #[test]
    fn parse() {
        let valid_expressions = ["3 + 5", "(3 + 5.0)*\t\n45", "(3 + 5^5)*45", "((1+2)*3)^2"];
        for expr in &valid_expressions {
            assert!(Expr::parse(expr).is_ok());
        }
    }

    #[test]
    fn eval() {
        let eval_pairs = [
            ("3 + 5", 8.0),
            ("7 - 5", 2.0),
            ("2 * 5", 10.0),
            ("10 / 5", 2.0),
            ("2 ^ 3", 8.0),
            ("2+3*4", 14.0),
            ("(2+3)*4", 20.0),
            ("2^3^2", 512.0),
            ("10/2/5", 1.0),
            ("((1+2)*3)", 9.0),
            ("(1+(2*3))", 7.0),
            ("3.5 * 2", 7.0),
            ("100/(2+3)", 20.0),
        ];
        for eval_pair in &eval_pairs {
            assert_eq!(evaluate(eval_pair.0), Ok(eval_pair.1));
        }
    }

    #[test]
    fn empty_input_is_nan() {
        assert!(evaluate("").unwrap().is_nan());
    }

    #[test]
    fn errors() {
        let error_pairs = [
            ("5/0", Error::DivisionByZero),
            ("10/(5-5)", Error::DivisionByZero),
            ("1 2", Error::MissingOperator),
            ("(1+2", Error::MissingOperator),
            ("1+2)", Error::MissingOperator),
            ("1+", Error::MissingOperand),
            ("+", Error::MissingOperand),
        ];
        for error_pair in &error_pairs {
            assert_eq!(evaluate(error_pair.0), Err(error_pair.1));
        }
    }

    #[test]
    fn error_messages() {
        let result = evaluate("5/0");
        assert_eq!(result.err().unwrap().to_string(), "Division with 0");
        let result = evaluate("(1+2");
        assert_eq!(
            result.err().unwrap().to_string(),
            "Missing operator or parenthesis"
        );
    }

    #[test]
    fn idempotence() {
        for _ in 0..3 {
            assert_eq!(evaluate("2+3*4"), Ok(14.0));
        }
        let expr = Expr::parse("(2+3)*4").unwrap();
        assert_eq!(expr.eval(), expr.eval());
    }
}
