//! A tiny polynomial algebra over a single implicit variable.

use arrayvec::ArrayVec;
use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Neg},
};

/// Values closer to zero than this are treated as zero.
pub const EPSILON: f64 = 1e-6;

/// The most coefficients a [`Polynomial`] may hold (`c0 + c1*x`).
const MAX_COEFFICIENTS: usize = 2;

type Coefficients = ArrayVec<[f64; MAX_COEFFICIENTS]>;

/// A constant or linear function of the variable, stored as coefficients
/// indexed by power.
///
/// The size of a polynomial is described by its *coefficient count* (1 for
/// a constant, 2 for a linear function) rather than its mathematical degree.
/// Every arithmetic rule below is phrased in terms of that count.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Coefficients,
}

impl Polynomial {
    pub fn constant(value: f64) -> Self {
        let mut coefficients = Coefficients::new();
        coefficients.push(value);
        Polynomial { coefficients }
    }

    pub fn zero() -> Self { Polynomial::constant(0.0) }

    /// The polynomial `constant + slope*x`.
    pub fn linear(constant: f64, slope: f64) -> Self {
        Polynomial {
            coefficients: Coefficients::from([constant, slope]),
        }
    }

    /// The variable itself, `0 + 1*x`.
    pub fn variable() -> Self { Polynomial::linear(0.0, 1.0) }

    pub fn coefficients(&self) -> &[f64] { &self.coefficients }

    pub fn coefficient_count(&self) -> usize { self.coefficients.len() }

    pub fn is_constant(&self) -> bool { self.coefficient_count() == 1 }

    pub fn constant_term(&self) -> f64 { self.coefficients[0] }

    fn coefficient(&self, power: usize) -> f64 {
        self.coefficients.get(power).copied().unwrap_or(0.0)
    }

    fn map<F>(&self, mut func: F) -> Polynomial
    where
        F: FnMut(f64) -> f64,
    {
        Polynomial {
            coefficients: self.coefficients.iter().map(|&c| func(c)).collect(),
        }
    }

    /// Subtraction is only defined when at least one side is a constant.
    pub fn try_sub(
        &self,
        rhs: &Polynomial,
    ) -> Result<Polynomial, AlgebraError> {
        if !self.is_constant() && !rhs.is_constant() {
            return Err(AlgebraError::UnsupportedOperation {
                operation: "subtraction",
            });
        }

        Ok(self.clone() + -rhs.clone())
    }

    /// Multiplication is rejected when both sides are linear because the
    /// result would have too many coefficients.
    pub fn try_mul(
        &self,
        rhs: &Polynomial,
    ) -> Result<Polynomial, AlgebraError> {
        if !self.is_constant() && !rhs.is_constant() {
            return Err(AlgebraError::UnsupportedOperation {
                operation: "multiplication",
            });
        }

        let (scaled, factor) =
            if self.coefficient_count() >= rhs.coefficient_count() {
                (self, rhs.constant_term())
            } else {
                (rhs, self.constant_term())
            };

        Ok(scaled.map(|c| c * factor))
    }

    /// Divide every coefficient by a constant divisor.
    pub fn try_div(
        &self,
        rhs: &Polynomial,
    ) -> Result<Polynomial, AlgebraError> {
        if !rhs.is_constant() {
            return Err(AlgebraError::UnsupportedOperation {
                operation: "division",
            });
        }

        let divisor = rhs.constant_term();
        if divisor.abs() < EPSILON {
            return Err(AlgebraError::DivisionByZero);
        }

        Ok(self.map(|c| c / divisor))
    }

    /// Find the root of `c0 + c1*x = 0`.
    pub fn solve_linear(&self) -> Result<f64, AlgebraError> {
        let slope = self.coefficient(1);

        if self.is_constant() || slope.abs() < EPSILON {
            return if self.constant_term().abs() < EPSILON {
                Err(AlgebraError::InfiniteSolutions)
            } else {
                Err(AlgebraError::NoSolution)
            };
        }

        Ok(-self.constant_term() / slope)
    }
}

impl Default for Polynomial {
    fn default() -> Self { Polynomial::zero() }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output { self.map(|c| -c) }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        let count = self.coefficient_count().max(rhs.coefficient_count());

        Polynomial {
            coefficients: (0..count)
                .map(|power| self.coefficient(power) + rhs.coefficient(power))
                .collect(),
        }
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.constant_term())?;

        if let Some(slope) = self.coefficients.get(1) {
            if slope.is_sign_negative() {
                write!(f, " - {}*x", -slope)?;
            } else {
                write!(f, " + {}*x", slope)?;
            }
        }

        Ok(())
    }
}

/// Failures of the partial [`Polynomial`] operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlgebraError {
    #[error("{operation} is only supported when one operand is a constant")]
    UnsupportedOperation { operation: &'static str },
    #[error("Can't divide a polynomial by 0")]
    DivisionByZero,
    #[error("Constant can't equal 0, no solutions")]
    NoSolution,
    #[error("Expression evaluates to 0, infinite number of solutions")]
    InfiniteSolutions,
}
