//! The calculation engine consumed by the presentation layer.
//!
//! [`CalculatorEngine`] is the seam between the calculator front end and the
//! numeric core. [`ScientificEngine`] is the stateless implementation: it
//! runs raw expressions through normalization, validation and evaluation, and
//! forwards loan parameters to the credit formulas.
//!
//! The free functions [`calculate`], [`credit_annuity`] and
//! [`credit_differentiated`] expose the same operations with the
//! value-plus-optional-error shape the front end expects, where every numeric
//! field is `0.0` whenever an error is present.

use log::{debug, warn};

use super::credit::{annuity, differentiated};
use super::errors::{CalcError, CalcResult, CreditError, CreditResult};
use super::models::{AnnuityPayments, CanonicalExpression, CreditInputs, DifferentiatedPayments};
use super::normalizer::normalize;
use super::parser::parse_and_evaluate;
use super::validator::validate;

/// Operations the calculator front end needs from the numeric core.
///
/// Implementations must be safe to call concurrently and must not keep any
/// state between calls.
pub trait CalculatorEngine: Send + Sync {
    /// Evaluates an expression that is already in canonical form.
    fn evaluate(&self, expr: &CanonicalExpression) -> CalcResult<f64>;

    fn credit_annuity(&self, inputs: &CreditInputs) -> CreditResult<AnnuityPayments>;

    fn credit_differentiated(&self, inputs: &CreditInputs) -> CreditResult<DifferentiatedPayments>;

    /// Normalizes `expression` with `x_value` substituted for `x`, validates
    /// it, then evaluates it.
    fn calculate(&self, expression: &str, x_value: &str) -> CalcResult<f64> {
        let canonical = normalize(expression, x_value);
        debug!("normalized {:?} (x = {:?}) to {:?}", expression, x_value, canonical.as_str());
        validate(&canonical)?;
        self.evaluate(&canonical)
    }
}

/// The double-precision scientific calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScientificEngine;

impl ScientificEngine {
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorEngine for ScientificEngine {
    fn evaluate(&self, expr: &CanonicalExpression) -> CalcResult<f64> {
        evaluate(expr)
    }

    fn credit_annuity(&self, inputs: &CreditInputs) -> CreditResult<AnnuityPayments> {
        annuity(inputs)
    }

    fn credit_differentiated(&self, inputs: &CreditInputs) -> CreditResult<DifferentiatedPayments> {
        differentiated(inputs)
    }
}

/// Evaluates a canonical expression.
///
/// # Examples
///
/// ```
/// use smartcalc::domain::{evaluate, CanonicalExpression};
///
/// assert_eq!(evaluate(&CanonicalExpression::from("2+3^3*2")).unwrap(), 56.0);
/// assert!(evaluate(&CanonicalExpression::from("7/0")).is_err());
/// ```
pub fn evaluate(expr: &CanonicalExpression) -> CalcResult<f64> {
    let result = parse_and_evaluate(expr.as_str());
    if let Err(ref err) = result {
        debug!("evaluation of {:?} failed: {}", expr.as_str(), err);
    }
    result
}

/// Evaluates a raw expression, returning `0.0` alongside any error.
///
/// # Examples
///
/// ```
/// use smartcalc::domain::calculate;
///
/// assert_eq!(calculate("sqrt(x)", "144"), (12.0, None));
///
/// let (value, err) = calculate("8++2", "");
/// assert_eq!(value, 0.0);
/// assert!(err.is_some());
/// ```
pub fn calculate(expression: &str, x_value: &str) -> (f64, Option<CalcError>) {
    match ScientificEngine.calculate(expression, x_value) {
        Ok(value) => (value, None),
        Err(err) => (0.0, Some(err)),
    }
}

/// Annuity schedule, or zeroed figures alongside the error.
pub fn credit_annuity(
    sum: f64,
    duration_months: f64,
    annual_rate_percent: f64,
) -> (AnnuityPayments, Option<CreditError>) {
    let result = CreditInputs::new(sum, duration_months, annual_rate_percent)
        .and_then(|inputs| ScientificEngine.credit_annuity(&inputs));
    split_credit(result)
}

/// Differentiated schedule, or zeroed figures alongside the error.
pub fn credit_differentiated(
    sum: f64,
    duration_months: f64,
    annual_rate_percent: f64,
) -> (DifferentiatedPayments, Option<CreditError>) {
    let result = CreditInputs::new(sum, duration_months, annual_rate_percent)
        .and_then(|inputs| ScientificEngine.credit_differentiated(&inputs));
    split_credit(result)
}

fn split_credit<T: Default>(result: CreditResult<T>) -> (T, Option<CreditError>) {
    match result {
        Ok(payments) => (payments, None),
        Err(err) => {
            if let CreditError::InvalidInput(ref msg) = err {
                warn!("rejected credit input: {}", msg);
            }
            (T::default(), Some(err))
        }
    }
}
