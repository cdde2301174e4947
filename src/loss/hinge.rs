use crate::loss::LossFunction;

/// Hinge loss for binary classification.
///
/// `threshold = 1.0` is the SVM hinge, `threshold = 0.0` the perceptron rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HingeLoss {
    pub threshold: f64,
}

impl HingeLoss {
    pub fn new(threshold: f64) -> Self {
        HingeLoss { threshold }
    }
}

impl Default for HingeLoss {
    fn default() -> Self {
        HingeLoss { threshold: 1.0 }
    }
}

impl LossFunction for HingeLoss {
    /// `y` if p·y ≤ threshold, else 0.
    #[inline]
    fn get_update(&self, p: f64, y: f64) -> f64 {
        if p * y <= self.threshold { y } else { 0.0 }
    }

    /// max(0, threshold − p·y)
    fn loss(&self, p: f64, y: f64) -> f64 {
        let z = p * y;
        if z <= self.threshold { self.threshold - z } else { 0.0 }
    }
}
