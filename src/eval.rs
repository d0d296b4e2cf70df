use crate::error::Error;
use crate::token::Token;

/// Reduce a postfix token sequence to a single value.
///
/// Tokens are pushed onto a value stack; an operator on top of the stack
/// triggers an immediate reduction of the two most recent operands. A well
/// formed sequence leaves exactly one number on the stack, anything else
/// fails with `MissingOperand`.
pub fn eval_postfix(postfix: &[Token]) -> Result<f64, Error> {
    let mut stack: Vec<Token> = Vec::new();
    for token in postfix {
        stack.push(token.clone());
        if let Some(&Token::Op(symbol)) = stack.last() {
            // the operator itself is on the stack, hence three entries
            if stack.len() < 3 {
                return Err(Error::MissingOperand);
            }
            stack.pop();
            let a = pop_number(&mut stack)?;
            let b = pop_number(&mut stack)?;
            let value = apply(symbol, a, b)?;
            stack.push(Token::Number(value.to_string()));
        }
    }
    match stack.pop() {
        Some(token) if stack.is_empty() => token.number(),
        _ => Err(Error::MissingOperand),
    }
}

fn pop_number(stack: &mut Vec<Token>) -> Result<f64, Error> {
    stack.pop().ok_or(Error::MissingOperand)?.number()
}

/// Apply `op` to its operands, with `a` popped first (the right hand side of
/// the original infix expression) and `b` second (the left hand side)
fn apply(op: char, a: f64, b: f64) -> Result<f64, Error> {
    match op {
        '+' => Ok(a + b),
        '-' => Ok(b - a),
        '*' => Ok(a * b),
        '/' => {
            if a == 0.0 {
                Err(Error::DivisionByZero)
            } else {
                Ok(b / a)
            }
        }
        '^' => Ok(libm::pow(b, a)),
        _ => Err(Error::OperatorNotFound),
    }
}
