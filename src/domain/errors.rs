/// Failure while turning an expression into a number.
///
/// `Syntax` covers everything wrong with the shape of the input (bad
/// characters, stacked operators, unbalanced parentheses, empty input).
/// `Domain` covers well-formed input that asks for something undefined,
/// such as division by zero or the square root of a negative number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("domain error: {0}")]
    Domain(String),
}

impl CalcError {
    pub fn syntax(msg: impl Into<String>) -> Self {
        CalcError::Syntax(msg.into())
    }

    pub fn domain(msg: impl Into<String>) -> Self {
        CalcError::Domain(msg.into())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreditError {
    #[error("invalid input values: {0}")]
    InvalidInput(String),

    #[error("calculation error: {0}")]
    Calculation(String),
}

pub type CalcResult<T> = Result<T, CalcError>;

pub type CreditResult<T> = Result<T, CreditError>;
