//! The expression pipeline: tokens, postfix nodes and polynomial values.

mod expr;
mod ops;
mod parse;
mod polynomial;
mod rpn;

pub use expr::{Builtin, Node, Operation};
pub use ops::{evaluate, EvaluationError};
pub use parse::{
    tokenize, NumberDefect, ParseError, Token, TokenKind, Tokens, NEGATION,
    VARIABLE,
};
pub use polynomial::{AlgebraError, Polynomial, EPSILON};
pub use rpn::{to_postfix, ReorderError};
