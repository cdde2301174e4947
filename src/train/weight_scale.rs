//! Lazy L2 shrinkage.
//!
//! Each weight row carries a scalar `scale` and the effective row is
//! `W[row] * scale`. Shrinking the row by `(1 − λη)` then costs one multiply
//! instead of `n_features`. Updates added to the stored row must be divided by
//! the current scale so the effective row receives them unscaled.

use log::debug;

use crate::math::matrix::Matrix;
use crate::math::ops::scale_row;

/// Scales smaller than this in magnitude are folded into the row immediately.
pub const UNDERFLOW_THRESHOLD: f64 = 1e-9;

/// Folds `scale` into `W[row]` and resets it to 1.
#[inline]
pub fn renormalize(w: &mut Matrix, row: usize, scale: &mut f64) {
    scale_row(w, row, *scale);
    *scale = 1.0;
}

/// Multiplies `scale` by `factor`, renormalizing if it underflows.
#[inline]
pub fn shrink(w: &mut Matrix, row: usize, scale: &mut f64, factor: f64) {
    *scale *= factor;
    if scale.abs() < UNDERFLOW_THRESHOLD {
        debug!("row {row}: scale {:e} underflowed, renormalizing", *scale);
        renormalize(w, row, scale);
    }
}

/// End-of-training fold: after this `W[row]` alone is the model.
#[inline]
pub fn finalize(w: &mut Matrix, row: usize, scale: &mut f64) {
    if *scale != 1.0 {
        renormalize(w, row, scale);
    }
}
