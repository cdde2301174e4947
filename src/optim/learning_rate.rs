use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::error::SgdError;

/// Step-size schedule for the SGD trainers.
///
/// - `Constant`       — η = η0
/// - `Pegasos`        — η = 1 / (α·t); needs α > 0
/// - `InverseScaling` — η = η0 / t^power_t
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningRate {
    Constant,
    Pegasos,
    InverseScaling,
}

impl LearningRate {
    /// Step size at step `t` (1-based, counted across epochs).
    #[inline]
    pub fn eta(self, alpha: f64, eta0: f64, power_t: f64, t: usize) -> f64 {
        get_eta(self, alpha, eta0, power_t, t)
    }
}

/// Step size for `kind` at step `t ≥ 1`.
///
/// Not guarded: `Pegasos` with `alpha == 0` returns `inf`. The trainers
/// reject that combination before their first step.
#[inline]
pub fn get_eta(kind: LearningRate, alpha: f64, eta0: f64, power_t: f64, t: usize) -> f64 {
    match kind {
        LearningRate::Constant       => eta0,
        LearningRate::Pegasos        => 1.0 / (alpha * t as f64),
        LearningRate::InverseScaling => eta0 / (t as f64).powf(power_t),
    }
}

impl fmt::Display for LearningRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LearningRate::Constant       => "constant",
            LearningRate::Pegasos        => "pegasos",
            LearningRate::InverseScaling => "invscaling",
        };
        f.write_str(name)
    }
}

impl FromStr for LearningRate {
    type Err = SgdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "constant"                       => Ok(LearningRate::Constant),
            "pegasos"                        => Ok(LearningRate::Pegasos),
            "invscaling" | "inverse_scaling" => Ok(LearningRate::InverseScaling),
            other => Err(SgdError::UnknownLearningRate(other.to_string())),
        }
    }
}
