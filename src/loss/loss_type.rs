use serde::{Serialize, Deserialize};

use crate::loss::{
    EpsilonInsensitiveLoss, HingeLoss, HuberLoss, LogLoss, LossFunction, ModifiedHuberLoss,
    SparseLogLoss, SquaredLoss,
};

/// Selects which loss function the binary trainer uses, together with its
/// construction-time parameters.
///
/// - `ModifiedHuber`      — smoothed hinge; labels ±1.
/// - `Hinge`              — SVM hinge (`threshold = 1`) or perceptron (`threshold = 0`).
/// - `Log`                — logistic regression; labels ±1.
/// - `SparseLog`          — logistic at a scaled margin, zero past `threshold`.
/// - `Squared`            — ordinary least squares.
/// - `Huber`              — robust regression, linear beyond `c`.
/// - `EpsilonInsensitive` — SVR; errors inside `epsilon` are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LossType {
    ModifiedHuber,
    Hinge {
        #[serde(default = "default_hinge_threshold")]
        threshold: f64,
    },
    Log,
    SparseLog {
        #[serde(default = "default_sparse_log_threshold")]
        threshold: f64,
    },
    Squared,
    Huber { c: f64 },
    EpsilonInsensitive { epsilon: f64 },
}

fn default_hinge_threshold() -> f64 {
    1.0
}

fn default_sparse_log_threshold() -> f64 {
    0.99
}

impl LossType {
    /// Instantiates the selected loss. Derived parameters (the `SparseLog`
    /// margin scale) are computed here once rather than per sample.
    pub fn build(&self) -> Box<dyn LossFunction + Send + Sync> {
        match *self {
            LossType::ModifiedHuber              => Box::new(ModifiedHuberLoss),
            LossType::Hinge { threshold }        => Box::new(HingeLoss::new(threshold)),
            LossType::Log                        => Box::new(LogLoss),
            LossType::SparseLog { threshold }    => Box::new(SparseLogLoss::new(threshold)),
            LossType::Squared                    => Box::new(SquaredLoss),
            LossType::Huber { c }                => Box::new(HuberLoss::new(c)),
            LossType::EpsilonInsensitive { epsilon } => Box::new(EpsilonInsensitiveLoss::new(epsilon)),
        }
    }
}
