#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::float_cmp
)]

//! rpncalc, a crate for evaluating arithmetic expressions embedded in
//! strings.
//!
//! Evaluation runs a three stage pipeline: a tokenizer turns the input into
//! a flat token sequence, a shunting-yard pass reorders it into postfix
//! (reverse polish) notation, and a stack reduction computes the result.
//! The easiest way to use this crate is the [`evaluate`](fn.evaluate.html)
//! function:
//!
//! ```
//! assert_eq!(rpncalc::evaluate("3 + 5 * 2"), Ok(13.0));
//! ```
//!
//! Parsing can be separated from evaluation with the
//! [`Expr`](struct.Expr.html) type, which keeps the postfix form around for
//! repeated evaluation:
//!
//! ```
//! use rpncalc::Expr;
//!
//! let expr = Expr::parse("(3 + 5) * 2").unwrap();
//! assert_eq!(expr.eval(), Ok(16.0));
//! ```
//!
//! # Language definition
//!
//! The language implemented by rpncalc contains the following elements:
//!
//! - numeric literals built from digits and `.`: `12`, `3.25`, ...;
//! - left and right parenthesis;
//! - arithmetic operators: `+` for addition, `-` for subtraction, `*` for
//!   multiplication, `/` for division and `^` for exponentiation.
//!
//! There are no negative literals, unary operators, variables or functions.
//! Whitespace is insignificant except that it may not split a numeral in
//! two (`1 2` is rejected); characters outside the set above are skipped.
//!
//! `*` and `/` bind tighter than `+` and `-`, and `^` binds tighter still.
//! All operators group left to right except `^`, which groups right to
//! left: `2^3^2` is `2^(3^2)`. An empty input evaluates to `NaN`.
//!
//! # Technical details
//!
//! rpncalc interprets the postfix form directly, without building an AST.
//! Parenthesised groups are converted by a recursive call on the isolated
//! sub-sequence, so parenthesis nesting depth turns into recursion depth;
//! callers handling adversarial input should bound it themselves. All
//! working state is local to a call, so evaluation is reentrant.

#[macro_use]
extern crate lazy_static;

mod error;
mod eval;
mod expr;
mod lexer;
mod postfix;
mod token;
mod util;

pub use error::Error;
pub use eval::eval_postfix;
pub use expr::{evaluate, Expr};
pub use lexer::Lexer;
pub use postfix::to_postfix;
pub use token::{Assoc, Token};
pub use util::{associativity, is_operator, precedence, OPERATORS};
