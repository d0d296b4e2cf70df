use crate::error::Error;
use crate::token::{Assoc, Token};
use crate::util::{associativity, precedence};

/// Reorder an infix token sequence into postfix (reverse polish) order.
///
/// Parenthesised groups are collected verbatim into a side buffer and
/// converted by a recursive call, so recursion depth equals parenthesis
/// nesting depth. Unbalanced parentheses, whether a stray close or an open
/// that never closes, fail with `MissingOperator`.
pub fn to_postfix(infix: &[Token]) -> Result<Vec<Token>, Error> {
    let mut output = Vec::new();
    let mut operators: Vec<char> = Vec::new();
    // parenthesis group being collected, with its own nesting counter
    let mut group: Vec<Token> = Vec::new();
    let mut depth = 0_usize;
    let mut collecting = false;

    for token in infix {
        if collecting {
            match token {
                Token::LParen => {
                    depth += 1;
                    group.push(token.clone());
                }
                Token::RParen if depth == 0 => {
                    output.extend(to_postfix(&group)?);
                    group.clear();
                    collecting = false;
                }
                Token::RParen => {
                    depth -= 1;
                    group.push(token.clone());
                }
                other => group.push(other.clone()),
            }
        } else {
            match token {
                Token::LParen => collecting = true,
                Token::RParen => return Err(Error::MissingOperator),
                Token::Number(_) => output.push(token.clone()),
                Token::Op(symbol) => {
                    let symbol = *symbol;
                    // consecutive right-associative operators stack up
                    // instead of popping, grouping them right to left
                    let stacked = match operators.last() {
                        Some(&top) => {
                            associativity(top)? == Assoc::Right
                                && associativity(symbol)? == Assoc::Right
                        }
                        None => false,
                    };
                    if !stacked {
                        while let Some(&top) = operators.last() {
                            if precedence(top)? >= precedence(symbol)? {
                                operators.pop();
                                output.push(Token::Op(top));
                            } else {
                                break;
                            }
                        }
                    }
                    operators.push(symbol);
                }
            }
        }
    }

    if collecting {
        return Err(Error::MissingOperator);
    }
    while let Some(op) = operators.pop() {
        output.push(Token::Op(op));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn postfix_of(input: &str) -> Result<String, Error> {
        let tokens = Lexer::new(input).tokenize()?;
        let postfix = to_postfix(&tokens)?;
        let mut rendered = Vec::new();
        for token in postfix {
            rendered.push(match token {
                Token::Number(digits) => digits,
                Token::Op(op) => op.to_string(),
                other => panic!("found {:?} in postfix output", other),
            });
        }
        Ok(rendered.join(" "))
    }

    #[test]
    fn precedence_ordering() {
        assert_eq!(postfix_of("2+3*4").unwrap(), "2 3 4 * +");
        assert_eq!(postfix_of("2*3+4").unwrap(), "2 3 * 4 +");
        assert_eq!(postfix_of("1+2-3").unwrap(), "1 2 + 3 -");
    }

    #[test]
    fn exponent_groups_right() {
        assert_eq!(postfix_of("2^3^2").unwrap(), "2 3 2 ^ ^");
        // a lower precedence operator still drains the stacked exponents
        assert_eq!(postfix_of("2^3^2*5").unwrap(), "2 3 2 ^ ^ 5 *");
    }

    #[test]
    fn division_groups_left() {
        assert_eq!(postfix_of("10/2/5").unwrap(), "10 2 / 5 /");
    }

    #[test]
    fn parenthesised_groups() {
        assert_eq!(postfix_of("(2+3)*4").unwrap(), "2 3 + 4 *");
        assert_eq!(postfix_of("((1+2)*3)").unwrap(), "1 2 + 3 *");
        assert_eq!(postfix_of("(1+(2*3))").unwrap(), "1 2 3 * +");
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(postfix_of("(1+2"), Err(Error::MissingOperator));
        assert_eq!(postfix_of("1+2)"), Err(Error::MissingOperator));
        assert_eq!(postfix_of("((1+2)"), Err(Error::MissingOperator));
        // a stray close inside a group is the group's own error
        assert_eq!(postfix_of("(1+2))"), Err(Error::MissingOperator));
    }
}
