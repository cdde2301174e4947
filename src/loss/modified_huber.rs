use crate::loss::LossFunction;

/// Modified Huber loss for binary classification: a quadratically smoothed
/// hinge that becomes linear for badly misclassified samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModifiedHuberLoss;

impl LossFunction for ModifiedHuberLoss {
    /// With z = p·y:
    ///   0           if z ≥ 1
    ///   2(1 − z)·y  if −1 ≤ z < 1
    ///   4y          if z < −1
    #[inline]
    fn get_update(&self, p: f64, y: f64) -> f64 {
        let z = p * y;
        if z >= 1.0 {
            0.0
        } else if z >= -1.0 {
            2.0 * (1.0 - z) * y
        } else {
            4.0 * y
        }
    }

    fn loss(&self, p: f64, y: f64) -> f64 {
        let z = p * y;
        if z >= 1.0 {
            0.0
        } else if z >= -1.0 {
            (1.0 - z) * (1.0 - z)
        } else {
            -4.0 * z
        }
    }
}
