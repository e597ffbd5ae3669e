use serde::{Deserialize, Serialize};

/// User-adjustable calculator settings.
///
/// Every field has a default, so a settings file may list only the values it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show results as mantissa and exponent instead of plain decimals.
    pub scientific: bool,
    /// Numeral substituted for `x` when no other value is given.
    pub x_value: String,
    pub plot: PlotSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scientific: false,
            x_value: "0".to_string(),
            plot: PlotSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    pub x_min: f64,
    pub x_max: f64,
    pub samples: usize,
    /// Sampling ranges are clamped to `[-clamp, clamp]`.
    pub clamp: f64,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            samples: 1000,
            clamp: 1_000_000.0,
        }
    }
}
