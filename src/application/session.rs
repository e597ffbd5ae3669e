//! Calculator session logic shared by every front end.
//!
//! A [`Calculator`] sits between the user-facing surface and the engine. It
//! expands display constants, supplies the default `x`, dispatches credit
//! requests by kind and samples expressions for plotting.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;

use super::constants::expand_constants;
use super::errors::{AppError, AppResult};
use super::settings::Settings;
use crate::domain::{
    AnnuityPayments, CalculatorEngine, CreditInputs, DifferentiatedPayments, ScientificEngine,
};

/// The two supported amortization schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CreditKind {
    Annuity,
    Differentiated,
}

impl FromStr for CreditKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "annuity" => Ok(CreditKind::Annuity),
            "differentiated" => Ok(CreditKind::Differentiated),
            _ => Err(AppError::UnsupportedCreditKind(s.to_string())),
        }
    }
}

impl fmt::Display for CreditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreditKind::Annuity => write!(f, "Annuity"),
            CreditKind::Differentiated => write!(f, "Differentiated"),
        }
    }
}

/// Result of a credit calculation, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum CreditReport {
    Annuity(AnnuityPayments),
    Differentiated(DifferentiatedPayments),
}

impl CreditReport {
    pub fn kind(&self) -> CreditKind {
        match self {
            CreditReport::Annuity(_) => CreditKind::Annuity,
            CreditReport::Differentiated(_) => CreditKind::Differentiated,
        }
    }

    /// Labelled figures in display order.
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        match self {
            CreditReport::Annuity(p) => vec![
                ("Monthly Payment", p.monthly_payment),
                ("Overpayment", p.overpay),
                ("Total Repayment", p.total_repayment),
            ],
            CreditReport::Differentiated(p) => vec![
                ("First Month", p.first_month_payment),
                ("Last Month", p.last_month_payment),
                ("Overpayment", p.overpay),
                ("Total Repayment", p.total_repayment),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Stateless calculator front end over a [`CalculatorEngine`].
///
/// # Examples
///
/// ```
/// use smartcalc::application::{Calculator, Settings};
///
/// let calc = Calculator::new(Settings::default());
/// assert_eq!(calc.evaluate("2+2").unwrap(), 4.0);
/// assert_eq!(calc.evaluate_with_x("x^2", "3").unwrap(), 9.0);
/// ```
#[derive(Clone)]
pub struct Calculator {
    engine: Arc<dyn CalculatorEngine>,
    settings: Settings,
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Calculator {
    pub fn new(settings: Settings) -> Self {
        Self::with_engine(Arc::new(ScientificEngine::new()), settings)
    }

    pub fn with_engine(engine: Arc<dyn CalculatorEngine>, settings: Settings) -> Self {
        Self { engine, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Evaluates `expr` with the configured default for `x`.
    pub fn evaluate(&self, expr: &str) -> AppResult<f64> {
        self.evaluate_with_x(expr, &self.settings.x_value)
    }

    pub fn evaluate_with_x(&self, expr: &str, x_value: &str) -> AppResult<f64> {
        let expanded = expand_constants(expr)?;
        Ok(self.engine.calculate(&expanded, x_value)?)
    }

    pub fn credit(
        &self,
        kind: CreditKind,
        sum: f64,
        duration_months: f64,
        annual_rate_percent: f64,
    ) -> AppResult<CreditReport> {
        let inputs = CreditInputs::new(sum, duration_months, annual_rate_percent)?;
        let report = match kind {
            CreditKind::Annuity => CreditReport::Annuity(self.engine.credit_annuity(&inputs)?),
            CreditKind::Differentiated => {
                CreditReport::Differentiated(self.engine.credit_differentiated(&inputs)?)
            }
        };
        info!("{} credit computed for {:?}", kind, inputs);
        Ok(report)
    }

    /// Plots over the configured default range and sample count.
    pub fn plot_default(&self, expr: &str) -> AppResult<Vec<PlotPoint>> {
        let plot = &self.settings.plot;
        self.plot(expr, plot.x_min, plot.x_max, plot.samples)
    }

    /// Samples `expr` at `samples` evenly spaced points starting at `x_min`.
    ///
    /// The range is clamped to the configured limit. Each x is rounded to six
    /// decimals and substituted as a six-decimal numeral. Points that fail
    /// to evaluate are left out.
    pub fn plot(&self, expr: &str, x_min: f64, x_max: f64, samples: usize) -> AppResult<Vec<PlotPoint>> {
        if expr.trim().is_empty() {
            return Err(AppError::Plot("expression is empty".to_string()));
        }
        if samples == 0 {
            return Err(AppError::Plot("at least one sample is required".to_string()));
        }

        if x_min.is_nan() || x_max.is_nan() {
            return Err(AppError::Plot("range bounds must be numbers".to_string()));
        }

        let clamp = self.settings.plot.clamp;
        let x_min = x_min.max(-clamp);
        let x_max = x_max.min(clamp);
        if !(x_min < x_max) {
            return Err(AppError::Plot(format!("invalid range [{}, {}]", x_min, x_max)));
        }

        let expanded = expand_constants(expr)?;
        let interval = (x_max - x_min) / samples as f64;
        let mut points = Vec::with_capacity(samples);

        for i in 0..samples {
            let x = round_to_micros(x_min + interval * i as f64);
            match self.engine.calculate(&expanded, &format!("{:.6}", x)) {
                Ok(y) => points.push(PlotPoint { x, y }),
                Err(err) => debug!("skipping x = {:.6}: {}", x, err),
            }
        }

        debug!("plotted {} of {} samples for {:?}", points.len(), samples, expr);
        Ok(points)
    }
}

fn round_to_micros(x: f64) -> f64 {
    (x * 1e6).round_ties_even() / 1e6
}
