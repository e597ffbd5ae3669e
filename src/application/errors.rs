use crate::domain::{CalcError, CreditError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error(transparent)]
    Credit(#[from] CreditError),

    #[error("unsupported credit type: {0}")]
    UnsupportedCreditKind(String),

    #[error("plot error: {0}")]
    Plot(String),
}

pub type AppResult<T> = Result<T, AppError>;
