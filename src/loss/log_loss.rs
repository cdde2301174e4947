use crate::loss::LossFunction;

/// Beyond this margin the logistic terms are replaced by their asymptotes
/// so that `exp` never overflows.
const CUTOFF: f64 = 18.0;

/// Logistic loss for binary classification.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogLoss;

impl LogLoss {
    /// Shared by `SparseLogLoss`, which evaluates the logistic at a scaled margin.
    #[inline]
    pub(crate) fn update_at_margin(z: f64, y: f64) -> f64 {
        if z > CUTOFF {
            (-z).exp() * y
        } else if z < -CUTOFF {
            y
        } else {
            y / (z.exp() + 1.0)
        }
    }

    #[inline]
    pub(crate) fn loss_at_margin(z: f64) -> f64 {
        if z > CUTOFF {
            (-z).exp()
        } else if z < -CUTOFF {
            -z
        } else {
            (-z).exp().ln_1p()
        }
    }
}

impl LossFunction for LogLoss {
    /// y / (exp(p·y) + 1), with the tails approximated past |z| > 18.
    #[inline]
    fn get_update(&self, p: f64, y: f64) -> f64 {
        Self::update_at_margin(p * y, y)
    }

    /// ln(1 + exp(−p·y))
    fn loss(&self, p: f64, y: f64) -> f64 {
        Self::loss_at_margin(p * y)
    }
}
