//! A calculator for arithmetic expressions and linear equations in `x`.
//!
//! Text is tokenized, reordered into postfix form with the shunting-yard
//! algorithm, then evaluated over polynomials with at most two coefficients.
//! If the input was an equation the root of the resulting polynomial is
//! returned.

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

pub mod algebra;
mod calculator;
mod equations;
mod error;

pub use calculator::{evaluate, format_number, Calculator};
pub use equations::{ClassifyError, Problem};
pub use error::{Error, ErrorKind};
