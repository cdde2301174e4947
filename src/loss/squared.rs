use crate::loss::LossFunction;

/// Squared error for regression.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SquaredLoss;

impl LossFunction for SquaredLoss {
    /// y − p
    #[inline]
    fn get_update(&self, p: f64, y: f64) -> f64 {
        y - p
    }

    /// ½(p − y)²
    fn loss(&self, p: f64, y: f64) -> f64 {
        0.5 * (p - y) * (p - y)
    }
}
