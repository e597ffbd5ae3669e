//! SmartCalc - Scientific Calculator Library
//!
//! A double-precision expression calculator with trigonometric and
//! logarithmic functions, a variable `x`, loan repayment formulas and
//! expression sampling for plotting.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::{
    calculate, credit_annuity, credit_differentiated, CalcError, CalculatorEngine, CreditError,
    ScientificEngine,
};
pub use application::{Calculator, CreditKind, CreditReport, Settings};
