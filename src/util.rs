use crate::error::Error;
use crate::token::Assoc;
use std::collections::HashMap;

/// The characters accepted as operators by the whole pipeline
pub const OPERATORS: &str = "+-*/^";

lazy_static! {
    /// Precedence rank of every known operator. A higher rank binds tighter.
    pub static ref PRECEDENCE: HashMap<char, u8> = {
        let mut map = HashMap::new();
        map.insert('+', 2);
        map.insert('-', 2);
        map.insert('*', 3);
        map.insert('/', 3);
        map.insert('^', 4);
        map
    };

    /// Associativity of every known operator
    pub static ref ASSOCIATIVITY: HashMap<char, Assoc> = {
        let mut map = HashMap::new();
        map.insert('+', Assoc::Left);
        map.insert('-', Assoc::Left);
        map.insert('*', Assoc::Left);
        map.insert('/', Assoc::Left);
        map.insert('^', Assoc::Right);
        map
    };
}

#[must_use]
/// Check if `c` is one of the known operator characters
pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(c)
}

/// Get the precedence rank of `op`.
///
/// Fails with `OperatorNotFound` for a symbol outside the operator set.
pub fn precedence(op: char) -> Result<u8, Error> {
    PRECEDENCE.get(&op).copied().ok_or(Error::OperatorNotFound)
}

/// Get the associativity of `op`.
///
/// Fails with `OperatorNotFound` for a symbol outside the operator set.
pub fn associativity(op: char) -> Result<Assoc, Error> {
    ASSOCIATIVITY.get(&op).copied().ok_or(Error::OperatorNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_metadata() {
        assert_eq!(precedence('+'), Ok(2));
        assert_eq!(precedence('-'), Ok(2));
        assert_eq!(precedence('*'), Ok(3));
        assert_eq!(precedence('/'), Ok(3));
        assert_eq!(precedence('^'), Ok(4));
        assert_eq!(precedence('%'), Err(Error::OperatorNotFound));

        assert_eq!(associativity('*'), Ok(Assoc::Left));
        assert_eq!(associativity('^'), Ok(Assoc::Right));
        assert_eq!(associativity(')'), Err(Error::OperatorNotFound));
    }

    #[test]
    fn operator_set() {
        for c in "+-*/^".chars() {
            assert!(is_operator(c));
        }
        for c in "().%!a 2".chars() {
            assert!(!is_operator(c));
        }
    }
}
