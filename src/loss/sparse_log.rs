use crate::loss::LossFunction;
use crate::loss::log_loss::LogLoss;

/// Logistic loss evaluated at a scaled margin γ·z that is cut to zero once the
/// margin exceeds `threshold`, so well-classified samples stop producing updates.
///
/// γ = −ln((1 − threshold) / threshold) is chosen so that the logistic of γ·1
/// equals `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparseLogLoss {
    threshold: f64,
    gamma: f64,
}

impl SparseLogLoss {
    pub fn new(threshold: f64) -> Self {
        let gamma = -((1.0 - threshold) / threshold).ln();
        SparseLogLoss { threshold, gamma }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Margin scale γ, for callers that need the scaled margin γ·p·y.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Default for SparseLogLoss {
    fn default() -> Self {
        SparseLogLoss::new(0.99)
    }
}

impl LossFunction for SparseLogLoss {
    /// 0 if p·y > threshold, else γ·y / (exp(γ·p·y) + 1).
    #[inline]
    fn get_update(&self, p: f64, y: f64) -> f64 {
        let z = p * y;
        if z > self.threshold {
            0.0
        } else {
            self.gamma * y / ((self.gamma * z).exp() + 1.0)
        }
    }

    fn loss(&self, p: f64, y: f64) -> f64 {
        let z = p * y;
        if z > self.threshold {
            0.0
        } else {
            LogLoss::loss_at_margin(self.gamma * z)
        }
    }
}
