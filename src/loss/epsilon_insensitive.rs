use crate::loss::LossFunction;

/// Epsilon-insensitive loss (SVR): errors smaller than `epsilon` are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsilonInsensitiveLoss {
    pub epsilon: f64,
}

impl EpsilonInsensitiveLoss {
    pub fn new(epsilon: f64) -> Self {
        EpsilonInsensitiveLoss { epsilon }
    }
}

impl LossFunction for EpsilonInsensitiveLoss {
    /// 1 if y − p > ε,  −1 if p − y > ε,  else 0
    #[inline]
    fn get_update(&self, p: f64, y: f64) -> f64 {
        if y - p > self.epsilon {
            1.0
        } else if p - y > self.epsilon {
            -1.0
        } else {
            0.0
        }
    }

    fn loss(&self, p: f64, y: f64) -> f64 {
        ((y - p).abs() - self.epsilon).max(0.0)
    }
}
