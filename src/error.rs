use crate::{
    algebra::{AlgebraError, EvaluationError, ParseError, ReorderError},
    equations::ClassifyError,
};

/// Everything that can go wrong while calculating, tagged with the stage
/// that noticed it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Error in tokenizer: {0}")]
    Tokenize(#[from] ParseError),
    #[error("{0}")]
    Classify(#[from] ClassifyError),
    #[error("Error in building reverse polish notation: {0}")]
    Reorder(#[from] ReorderError),
    #[error("Error in processing reverse polish notation: {0}")]
    Evaluate(#[from] EvaluationError),
    #[error("{0}")]
    Solve(#[from] AlgebraError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Tokenize(ParseError::InvalidNumber { .. }) => {
                ErrorKind::InvalidNumber
            },
            Error::Tokenize(ParseError::InvalidFunctionSyntax { .. }) => {
                ErrorKind::InvalidFunctionSyntax
            },
            Error::Tokenize(ParseError::InvalidOperator { .. }) => {
                ErrorKind::InvalidOperator
            },
            Error::Classify(ClassifyError::MultipleEqualitySigns { .. }) => {
                ErrorKind::MultipleEqualitySigns
            },
            Error::Classify(ClassifyError::InconsistentEquationForm) => {
                ErrorKind::InconsistentEquationForm
            },
            Error::Reorder(ReorderError::UnknownSymbol { .. }) => {
                ErrorKind::UnknownSymbol
            },
            Error::Reorder(ReorderError::MismatchedParentheses) => {
                ErrorKind::MismatchedParentheses
            },
            Error::Evaluate(e) => match e {
                EvaluationError::InsufficientOperands { .. }
                | EvaluationError::NothingToEvaluate => {
                    ErrorKind::InsufficientOperands
                },
                EvaluationError::ExcessOperands { .. } => {
                    ErrorKind::ExcessOperands
                },
                EvaluationError::NonConstantOperand { .. } => {
                    ErrorKind::NonConstantOperand
                },
                EvaluationError::DomainError { .. } => ErrorKind::DomainError,
                EvaluationError::Algebra(inner) => inner.into(),
            },
            Error::Solve(inner) => inner.into(),
        }
    }
}

/// A flat classification of every [`Error`], ignoring which stage it came
/// from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidNumber,
    InvalidFunctionSyntax,
    InvalidOperator,
    UnknownSymbol,
    MismatchedParentheses,
    InsufficientOperands,
    ExcessOperands,
    NonConstantOperand,
    DomainError,
    UnsupportedOperation,
    DivisionByZero,
    MultipleEqualitySigns,
    InconsistentEquationForm,
    NoSolution,
    InfiniteSolutions,
}

impl<'a> From<&'a AlgebraError> for ErrorKind {
    fn from(e: &'a AlgebraError) -> ErrorKind {
        match e {
            AlgebraError::UnsupportedOperation { .. } => {
                ErrorKind::UnsupportedOperation
            },
            AlgebraError::DivisionByZero => ErrorKind::DivisionByZero,
            AlgebraError::NoSolution => ErrorKind::NoSolution,
            AlgebraError::InfiniteSolutions => ErrorKind::InfiniteSolutions,
        }
    }
}
