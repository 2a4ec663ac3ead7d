use crate::algebra::{
    ops::EvaluationError,
    parse::{Token, TokenKind, NEGATION},
    polynomial::{Polynomial, EPSILON},
};
use smol_str::SmolStr;
use std::fmt::{self, Display, Formatter};

/// One element of an expression in postfix order.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A literal number or the variable.
    Scalar {
        identifier: SmolStr,
        value: Polynomial,
    },
    /// An operator or function which consumes a fixed number of operands.
    Operation(Operation),
}

impl Node {
    /// Turn a number or variable token into a [`Node::Scalar`].
    ///
    /// Returns `None` for any other kind of token.
    pub fn scalar(token: &Token) -> Option<Node> {
        let value = match token.kind {
            TokenKind::Number => Polynomial::constant(
                token
                    .identifier
                    .parse()
                    .expect("Guaranteed correct by the tokenizer"),
            ),
            TokenKind::Variable => Polynomial::variable(),
            _ => return None,
        };

        Some(Node::Scalar {
            identifier: token.identifier.clone(),
            value,
        })
    }

    pub fn identifier(&self) -> &str {
        match self {
            Node::Scalar { identifier, .. } => identifier.as_str(),
            Node::Operation(op) => op.identifier.as_str(),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// The builtin behaviour behind an [`Operation`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Builtin {
    Add,
    Subtract,
    Multiply,
    Divide,
    Negate,
    Log,
    Max,
    Min,
    Pow,
    Sine,
    Cosine,
}

impl Builtin {
    fn is_function(self) -> bool {
        match self {
            Builtin::Log
            | Builtin::Max
            | Builtin::Min
            | Builtin::Pow
            | Builtin::Sine
            | Builtin::Cosine => true,
            _ => false,
        }
    }
}

/// An operator or function, with the arity and precedence the reorderer
/// needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub identifier: SmolStr,
    pub arity: usize,
    /// Only meaningful for operators, function calls are delimited by
    /// parentheses.
    pub precedence: u8,
    pub builtin: Builtin,
}

/// `(identifier, token kind, arity, precedence, builtin)`
type Definition = (&'static str, TokenKind, usize, u8, Builtin);

/// Every operator and function the calculator knows about.
const DEFINITIONS: &[Definition] = &[
    ("+", TokenKind::Operator, 2, 1, Builtin::Add),
    ("-", TokenKind::Operator, 2, 1, Builtin::Subtract),
    ("*", TokenKind::Operator, 2, 2, Builtin::Multiply),
    ("/", TokenKind::Operator, 2, 2, Builtin::Divide),
    (NEGATION, TokenKind::Operator, 1, 10, Builtin::Negate),
    ("log", TokenKind::Function, 1, 0, Builtin::Log),
    ("max", TokenKind::Function, 2, 0, Builtin::Max),
    ("min", TokenKind::Function, 2, 0, Builtin::Min),
    ("pow", TokenKind::Function, 2, 0, Builtin::Pow),
    ("sin", TokenKind::Function, 1, 0, Builtin::Sine),
    ("cos", TokenKind::Function, 1, 0, Builtin::Cosine),
];

impl Operation {
    /// Look up the [`Operation`] for an operator or function token.
    pub fn for_token(token: &Token) -> Option<Operation> {
        DEFINITIONS
            .iter()
            .find(|(identifier, kind, ..)| {
                *kind == token.kind && token.identifier.as_str() == *identifier
            })
            .map(|&(identifier, _, arity, precedence, builtin)| Operation {
                identifier: identifier.into(),
                arity,
                precedence,
                builtin,
            })
    }

    /// Apply the operation to its operands, in left-to-right order.
    pub fn apply(
        &self,
        operands: &[Polynomial],
    ) -> Result<Polynomial, EvaluationError> {
        debug_assert_eq!(operands.len(), self.arity);

        if self.builtin.is_function() {
            return self.apply_function(operands).map(Polynomial::constant);
        }

        let result = match (self.builtin, operands) {
            (Builtin::Negate, [operand]) => -operand.clone(),
            (Builtin::Add, [left, right]) => left.clone() + right.clone(),
            (Builtin::Subtract, [left, right]) => left.try_sub(right)?,
            (Builtin::Multiply, [left, right]) => left.try_mul(right)?,
            (Builtin::Divide, [left, right]) => left.try_div(right)?,
            _ => return Err(self.insufficient_operands()),
        };

        Ok(result)
    }

    /// Functions only operate on plain numbers.
    fn apply_function(
        &self,
        operands: &[Polynomial],
    ) -> Result<f64, EvaluationError> {
        if operands.iter().any(|operand| !operand.is_constant()) {
            return Err(EvaluationError::NonConstantOperand {
                function: self.identifier.clone(),
            });
        }

        let args: Vec<f64> =
            operands.iter().map(Polynomial::constant_term).collect();

        let value = match (self.builtin, args.as_slice()) {
            (Builtin::Log, &[value]) => {
                if value <= EPSILON {
                    return Err(EvaluationError::DomainError {
                        function: self.identifier.clone(),
                        argument: value,
                    });
                }
                value.ln()
            },
            (Builtin::Sine, &[value]) => value.sin(),
            (Builtin::Cosine, &[value]) => value.cos(),
            (Builtin::Max, &[a, b]) => a.max(b),
            (Builtin::Min, &[a, b]) => a.min(b),
            (Builtin::Pow, &[base, exponent]) => base.powf(exponent),
            _ => return Err(self.insufficient_operands()),
        };

        Ok(value)
    }

    fn insufficient_operands(&self) -> EvaluationError {
        EvaluationError::InsufficientOperands {
            operator: self.identifier.clone(),
        }
    }
}
