//! Evaluating postfix [`Node`] sequences.

use crate::algebra::{
    expr::Node,
    polynomial::{AlgebraError, Polynomial},
};
use smol_str::SmolStr;

/// Reduce a postfix sequence of [`Node`]s to a single [`Polynomial`].
pub fn evaluate(postfix: &[Node]) -> Result<Polynomial, EvaluationError> {
    let mut stack: Vec<Polynomial> = Vec::new();

    for node in postfix {
        match node {
            Node::Scalar { value, .. } => stack.push(value.clone()),
            Node::Operation(op) => {
                if stack.len() < op.arity {
                    return Err(EvaluationError::InsufficientOperands {
                        operator: op.identifier.clone(),
                    });
                }

                // split_off() keeps the operands in left-to-right order
                let operands = stack.split_off(stack.len() - op.arity);
                stack.push(op.apply(&operands)?);
            },
        }
    }

    match stack.len() {
        0 => Err(EvaluationError::NothingToEvaluate),
        1 => Ok(stack.remove(0)),
        remaining => Err(EvaluationError::ExcessOperands { remaining }),
    }
}

/// Possible errors that may occur while evaluating.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("Insufficient number of operands for {operator}")]
    InsufficientOperands { operator: SmolStr },
    #[error("Insufficient scalars left")]
    NothingToEvaluate,
    #[error("Too many scalars left ({remaining})")]
    ExcessOperands { remaining: usize },
    #[error("Can't use {function} on a non-constant polynomial")]
    NonConstantOperand { function: SmolStr },
    #[error("{function} isn't defined for {argument}")]
    DomainError { function: SmolStr, argument: f64 },
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}
