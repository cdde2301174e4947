pub mod modified_huber;
pub mod hinge;
pub mod log_loss;
pub mod sparse_log;
pub mod squared;
pub mod huber;
pub mod epsilon_insensitive;
pub mod loss_type;

pub use modified_huber::ModifiedHuberLoss;
pub use hinge::HingeLoss;
pub use log_loss::LogLoss;
pub use sparse_log::SparseLogLoss;
pub use squared::SquaredLoss;
pub use huber::HuberLoss;
pub use epsilon_insensitive::EpsilonInsensitiveLoss;
pub use loss_type::LossType;

/// A per-sample loss used by the binary SGD trainer.
///
/// `p` is the current prediction `w·x (+ intercept)` and `y` the true label
/// (±1 for classification losses, a real target for regression losses).
pub trait LossFunction {
    /// Update signal for one sample: the negative (sub)gradient of the loss
    /// with respect to `p`. The trainer multiplies it by the learning rate and
    /// by `x` before adding it to the weights.
    fn get_update(&self, p: f64, y: f64) -> f64;

    /// Scalar loss for one sample. Only used for epoch statistics.
    fn loss(&self, p: f64, y: f64) -> f64;
}

impl<L: LossFunction + ?Sized> LossFunction for Box<L> {
    #[inline]
    fn get_update(&self, p: f64, y: f64) -> f64 {
        (**self).get_update(p, y)
    }

    #[inline]
    fn loss(&self, p: f64, y: f64) -> f64 {
        (**self).loss(p, y)
    }
}
