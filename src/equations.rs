use crate::algebra::{AlgebraError, Polynomial, Token, TokenKind};

/// What the user is asking for, decided by looking at the tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Problem {
    /// Evaluate an expression containing only constants.
    Expression,
    /// Find the value of the variable which makes both sides equal.
    Equation,
}

impl Problem {
    /// Decide whether some tokens form an expression or an equation.
    ///
    /// An equation needs both the variable and exactly one `=`, while an
    /// expression has neither.
    pub fn classify(tokens: &[Token]) -> Result<Problem, ClassifyError> {
        let mut equals_signs = 0;
        let mut contains_variable = false;

        for token in tokens {
            match token.kind {
                TokenKind::Equals => equals_signs += 1,
                TokenKind::Variable => contains_variable = true,
                _ => {},
            }
        }

        match (equals_signs, contains_variable) {
            (count, _) if count > 1 => {
                Err(ClassifyError::MultipleEqualitySigns { count })
            },
            (1, true) => Ok(Problem::Equation),
            (0, false) => Ok(Problem::Expression),
            _ => Err(ClassifyError::InconsistentEquationForm),
        }
    }

    /// Turn `left = right` into `left - right` so the equation can be
    /// evaluated like any other expression.
    pub fn rewrite(self, tokens: &mut [Token]) {
        if self != Problem::Equation {
            return;
        }

        for token in tokens
            .iter_mut()
            .filter(|token| token.kind == TokenKind::Equals)
        {
            token.kind = TokenKind::Operator;
            token.identifier = "-".into();
        }
    }

    /// Get the final answer from the evaluated polynomial.
    pub fn answer(self, result: &Polynomial) -> Result<f64, AlgebraError> {
        match self {
            Problem::Expression => Ok(result.constant_term()),
            Problem::Equation => result.solve_linear(),
        }
    }
}

/// Errors from deciding what kind of [`Problem`] something is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error("Expression contains too many equal signs ({count})")]
    MultipleEqualitySigns { count: usize },
    #[error(
        "Expression must contain both a variable and equal sign or neither"
    )]
    InconsistentEquationForm,
}
