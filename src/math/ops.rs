use crate::math::matrix::Matrix;

// These are the only O(n_features) operations in the per-sample hot path.
// No shape checks here; the trainers validate once up front.

/// Inner product of `x[sample, :]` with `w[row, :]`.
#[inline]
pub fn dot(w: &Matrix, row: usize, x: &Matrix, sample: usize) -> f64 {
    w.row(row).iter().zip(x.row(sample).iter())
        .map(|(a, b)| a * b)
        .sum()
}

/// `w[row, j] += x[sample, j] * scale` for every feature `j`.
#[inline]
pub fn add_scaled(w: &mut Matrix, row: usize, x: &Matrix, sample: usize, scale: f64) {
    for (wj, xj) in w.row_mut(row).iter_mut().zip(x.row(sample).iter()) {
        *wj += xj * scale;
    }
}

/// `w[row, j] *= factor` for every feature `j`.
#[inline]
pub fn scale_row(w: &mut Matrix, row: usize, factor: f64) {
    for wj in w.row_mut(row).iter_mut() {
        *wj *= factor;
    }
}
