use std::fmt;
use serde::{Deserialize, Serialize};

use super::errors::{CalcError, CalcResult, CreditError, CreditResult};

/// An expression after keyword, whitespace, variable and exponent rewriting.
///
/// Only the normalizer and tests build these directly; everything else gets
/// one by running [`crate::domain::normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalExpression(String);

impl CanonicalExpression {
    pub fn new(expr: impl Into<String>) -> Self {
        Self(expr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for CanonicalExpression {
    fn from(expr: &str) -> Self {
        Self::new(expr)
    }
}

impl fmt::Display for CanonicalExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the nine unary functions the calculator understands.
///
/// Each function has a surface keyword (`asin`) and a single-character marker
/// (`S`) used in canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionToken {
    Sqrt,
    Acos,
    Asin,
    Atan,
    Cos,
    Sin,
    Tan,
    Log,
    Ln,
}

impl FunctionToken {
    /// Every function, ordered so that a keyword is always listed before any
    /// shorter keyword it contains (`asin` before `sin`).
    pub const ALL: [FunctionToken; 9] = [
        FunctionToken::Sqrt,
        FunctionToken::Acos,
        FunctionToken::Asin,
        FunctionToken::Atan,
        FunctionToken::Cos,
        FunctionToken::Sin,
        FunctionToken::Tan,
        FunctionToken::Log,
        FunctionToken::Ln,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            FunctionToken::Sqrt => "sqrt",
            FunctionToken::Acos => "acos",
            FunctionToken::Asin => "asin",
            FunctionToken::Atan => "atan",
            FunctionToken::Cos => "cos",
            FunctionToken::Sin => "sin",
            FunctionToken::Tan => "tan",
            FunctionToken::Log => "log",
            FunctionToken::Ln => "ln",
        }
    }

    pub fn marker(self) -> char {
        match self {
            FunctionToken::Sqrt => 'q',
            FunctionToken::Acos => 'C',
            FunctionToken::Asin => 'S',
            FunctionToken::Atan => 'T',
            FunctionToken::Cos => 'c',
            FunctionToken::Sin => 's',
            FunctionToken::Tan => 't',
            FunctionToken::Log => 'L',
            FunctionToken::Ln => 'l',
        }
    }

    pub fn from_marker(marker: char) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.marker() == marker)
    }

    /// Applies the function to `arg` (radians for the trigonometric family).
    pub fn apply(self, arg: f64) -> CalcResult<f64> {
        match self {
            FunctionToken::Sqrt => {
                if arg < 0.0 {
                    Err(CalcError::domain("square root of a negative number"))
                } else {
                    Ok(arg.sqrt())
                }
            }
            FunctionToken::Acos => {
                if !(-1.0..=1.0).contains(&arg) {
                    Err(CalcError::domain("acos argument outside [-1, 1]"))
                } else {
                    Ok(arg.acos())
                }
            }
            FunctionToken::Asin => {
                if !(-1.0..=1.0).contains(&arg) {
                    Err(CalcError::domain("asin argument outside [-1, 1]"))
                } else {
                    Ok(arg.asin())
                }
            }
            FunctionToken::Atan => Ok(arg.atan()),
            FunctionToken::Cos => Ok(arg.cos()),
            FunctionToken::Sin => Ok(arg.sin()),
            FunctionToken::Tan => Ok(arg.tan()),
            FunctionToken::Log => {
                if arg <= 0.0 {
                    Err(CalcError::domain("log of a non-positive number"))
                } else {
                    Ok(arg.log10())
                }
            }
            FunctionToken::Ln => {
                if arg <= 0.0 {
                    Err(CalcError::domain("ln of a non-positive number"))
                } else {
                    Ok(arg.ln())
                }
            }
        }
    }
}

/// Longest loan accepted, in months.
pub const MAX_DURATION_MONTHS: f64 = 12_000.0;

/// Loan parameters shared by both credit calculators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditInputs {
    pub principal: f64,
    pub duration_months: f64,
    pub annual_rate_percent: f64,
}

impl CreditInputs {
    /// Builds validated inputs; every field must be strictly positive.
    pub fn new(principal: f64, duration_months: f64, annual_rate_percent: f64) -> CreditResult<Self> {
        let inputs = Self {
            principal,
            duration_months,
            annual_rate_percent,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    pub fn validate(&self) -> CreditResult<()> {
        // NaN fails every comparison, so test for "not positive" rather than "<= 0"
        if !(self.principal > 0.0) {
            return Err(CreditError::InvalidInput("principal must be positive".to_string()));
        }
        if !(self.duration_months > 0.0) {
            return Err(CreditError::InvalidInput("duration must be positive".to_string()));
        }
        if self.duration_months > MAX_DURATION_MONTHS {
            return Err(CreditError::InvalidInput(format!(
                "duration must not exceed {} months",
                MAX_DURATION_MONTHS
            )));
        }
        if !(self.annual_rate_percent > 0.0) {
            return Err(CreditError::InvalidInput("interest rate must be positive".to_string()));
        }
        Ok(())
    }

    /// Monthly interest rate as a fraction.
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 12.0 / 100.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnuityPayments {
    pub monthly_payment: f64,
    pub overpay: f64,
    pub total_repayment: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DifferentiatedPayments {
    pub first_month_payment: f64,
    pub last_month_payment: f64,
    pub overpay: f64,
    pub total_repayment: f64,
}
