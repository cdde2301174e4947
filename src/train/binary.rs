use std::time::Instant;

use log::debug;

use crate::error::{Result, SgdError};
use crate::loss::LossFunction;
use crate::math::matrix::Matrix;
use crate::math::ops::{add_scaled, dot};
use crate::optim::learning_rate::LearningRate;
use crate::train::epoch_stats::{report_epoch, EpochStats};
use crate::train::shuffle::Shuffler;
use crate::train::train_config::SgdConfig;
use crate::train::weight_scale::{finalize, shrink};

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Fits weight row `row` of `weights` (and `intercepts[row]`) to `y` by SGD.
///
/// `weights` and `intercepts` are updated in place starting from whatever
/// they hold (zeros are the usual start). L2 shrinkage is applied through a
/// lazy scale factor; on return the scale has been folded back so
/// `weights[row]` alone is the fitted vector.
///
/// # Arguments
/// - `weights`    — `n_vectors × n_features`; only row `row` is touched
/// - `row`        — the weight row being fitted
/// - `intercepts` — length `n_vectors`; only `intercepts[row]` is touched
/// - `x`          — design matrix, `n_samples × n_features`
/// - `y`          — labels, ±1 for classification losses
/// - `loss`       — per-sample update rule
/// - `config`     — hyperparameters
/// - `shuffler`   — sample order for each epoch
///
/// # Errors
/// Shape mismatches and `Pegasos` with `alpha == 0` are rejected before the
/// first step; nothing is mutated in that case.
#[allow(clippy::too_many_arguments)]
pub fn plain_sgd<L, S>(
    weights: &mut Matrix,
    row: usize,
    intercepts: &mut [f64],
    x: &Matrix,
    y: &[f64],
    loss: &L,
    config: &SgdConfig,
    shuffler: &mut S,
) -> Result<()>
where
    L: LossFunction + ?Sized,
    S: Shuffler + ?Sized,
{
    check_inputs(weights, row, intercepts, x, y.len(), config)?;
    fit_binary(weights, row, intercepts, x, y, loss, config, shuffler);
    Ok(())
}

/// Shape and schedule checks shared by both trainers. O(1); runs once.
pub(crate) fn check_inputs(
    weights: &Matrix,
    row: usize,
    intercepts: &[f64],
    x: &Matrix,
    n_labels: usize,
    config: &SgdConfig,
) -> Result<()> {
    if row >= weights.rows {
        return Err(SgdError::RowOutOfRange { row, n_rows: weights.rows });
    }
    if x.cols != weights.cols {
        return Err(SgdError::DimensionMismatch {
            what: "n_features (x vs weights)",
            expected: weights.cols,
            actual: x.cols,
        });
    }
    if n_labels != x.rows {
        return Err(SgdError::DimensionMismatch {
            what: "n_samples (y vs x)",
            expected: x.rows,
            actual: n_labels,
        });
    }
    if intercepts.len() != weights.rows {
        return Err(SgdError::DimensionMismatch {
            what: "n_vectors (intercepts vs weights)",
            expected: weights.rows,
            actual: intercepts.len(),
        });
    }
    if config.learning_rate == LearningRate::Pegasos && config.alpha == 0.0 {
        return Err(SgdError::PegasosRequiresAlpha);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Training loop
// ---------------------------------------------------------------------------

/// The SGD loop proper. Returns the scale left after the final fold, which is
/// always exactly 1.0.
#[allow(clippy::too_many_arguments)]
fn fit_binary<L, S>(
    weights: &mut Matrix,
    row: usize,
    intercepts: &mut [f64],
    x: &Matrix,
    y: &[f64],
    loss: &L,
    config: &SgdConfig,
    shuffler: &mut S,
) -> f64
where
    L: LossFunction + ?Sized,
    S: Shuffler + ?Sized,
{
    let n_samples = x.rows;
    let track = config.tracks_progress();

    debug!(
        "plain_sgd: {} samples x {} features, row {}, alpha={}, schedule={}, eta0={}, max_iter={}",
        n_samples, x.cols, row, config.alpha, config.learning_rate, config.eta0, config.max_iter
    );

    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut w_scale = 1.0;
    let mut t: usize = 1;

    for epoch in 1..=config.max_iter {
        let t_start = Instant::now();
        let mut n_updates = 0;
        let mut sum_loss = 0.0;

        shuffler.shuffle(&mut indices);

        for &i in &indices {
            let label = y[i];
            let pred = dot(weights, row, x, i) * w_scale + intercepts[row];
            let eta = config.eta(t);

            if track {
                sum_loss += loss.loss(pred, label);
            }

            let mut update = loss.get_update(pred, label);
            if update != 0.0 {
                update *= eta;
                add_scaled(weights, row, x, i, update / w_scale);
                if config.fit_intercept {
                    intercepts[row] += update * config.intercept_decay;
                }
                n_updates += 1;
            }

            shrink(weights, row, &mut w_scale, 1.0 - config.alpha * eta);
            t += 1;
        }

        if track {
            report_epoch(config, EpochStats {
                epoch,
                total_epochs: config.max_iter,
                n_updates,
                mean_loss: (n_samples > 0).then(|| sum_loss / n_samples as f64),
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            });
        }
    }

    finalize(weights, row, &mut w_scale);
    w_scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loss::{HingeLoss, LogLoss, SquaredLoss};
    use crate::train::shuffle::{FixedOrder, IdentityOrder, SeededShuffler};
    use approx::assert_abs_diff_eq;
    use std::sync::mpsc;

    fn separable() -> (Matrix, Vec<f64>) {
        let x = Matrix::from_data(vec![
            vec![2.0, 1.0],
            vec![1.0, 2.0],
            vec![-1.0, -2.0],
            vec![-2.0, -1.0],
        ]);
        (x, vec![1.0, 1.0, -1.0, -1.0])
    }

    fn constant(eta0: f64, alpha: f64, max_iter: usize) -> SgdConfig {
        let mut config = SgdConfig::new(LearningRate::Constant, eta0, max_iter);
        config.alpha = alpha;
        config
    }

    #[test]
    fn single_step_matches_hand_computation() {
        // pred = 0, hinge update = y = 1, eta = 0.1
        let x = Matrix::from_data(vec![vec![1.0, 2.0]]);
        let mut w = Matrix::zeros(1, 2);
        let mut b = vec![0.0];
        let config = constant(0.1, 0.5, 1);

        let scale = fit_binary(&mut w, 0, &mut b, &x, &[1.0], &HingeLoss::default(), &config, &mut IdentityOrder);

        // effective w = 0.1·x, then shrunk by (1 − 0.5·0.1)
        assert_eq!(scale, 1.0);
        assert_abs_diff_eq!(w.row(0)[0], 0.1 * 0.95, epsilon = 1e-15);
        assert_abs_diff_eq!(w.row(0)[1], 0.2 * 0.95, epsilon = 1e-15);
        assert_abs_diff_eq!(b[0], 0.1, epsilon = 1e-15);
    }

    #[test]
    fn scale_is_folded_after_training() {
        let (x, y) = separable();
        let mut w = Matrix::zeros(1, 2);
        let mut b = vec![0.0];
        let config = constant(0.05, 0.3, 7);
        let scale = fit_binary(&mut w, 0, &mut b, &x, &y, &LogLoss, &config, &mut SeededShuffler::new(3));
        assert_eq!(scale, 1.0);
    }

    #[test]
    fn separable_points_are_classified() {
        let (x, y) = separable();
        let mut w = Matrix::zeros(1, 2);
        let mut b = vec![0.0];
        let config = constant(0.01, 1e-4, 50);

        plain_sgd(&mut w, 0, &mut b, &x, &y, &HingeLoss::default(), &config, &mut IdentityOrder).unwrap();

        for (i, &label) in y.iter().enumerate() {
            let pred = dot(&w, 0, &x, i) + b[0];
            assert_eq!(pred.signum(), label, "sample {i} misclassified: {pred}");
        }
    }

    #[test]
    fn pegasos_first_step_zeroes_then_recovers() {
        // At t = 1, alpha·eta = 1 so the scale hits 0 and the row is reset.
        let (x, y) = separable();
        let mut w = Matrix::zeros(1, 2);
        let mut b = vec![0.0];
        let mut config = SgdConfig::new(LearningRate::Pegasos, 0.0, 5);
        config.alpha = 0.1;

        plain_sgd(&mut w, 0, &mut b, &x, &y, &HingeLoss::default(), &config, &mut IdentityOrder).unwrap();

        assert!(w.row(0).iter().all(|v| v.is_finite()));
        for (i, &label) in y.iter().enumerate() {
            assert!((dot(&w, 0, &x, i) + b[0]) * label > 0.0);
        }
    }

    #[test]
    fn only_the_requested_row_is_written() {
        let (x, y) = separable();
        let mut w = Matrix::from_data(vec![vec![9.0, 9.0], vec![0.0, 0.0], vec![-9.0, -9.0]]);
        let mut b = vec![1.0, 0.0, -1.0];
        plain_sgd(&mut w, 1, &mut b, &x, &y, &HingeLoss::default(), &constant(0.1, 0.01, 3), &mut IdentityOrder).unwrap();

        assert_eq!(w.row(0), &[9.0, 9.0]);
        assert_eq!(w.row(2), &[-9.0, -9.0]);
        assert_eq!((b[0], b[2]), (1.0, -1.0));
        assert!(w.row(1).iter().any(|&v| v != 0.0));
    }

    #[test]
    fn intercept_respects_flag_and_decay() {
        let (x, y) = separable();

        let mut config = constant(0.1, 0.0, 2);
        config.fit_intercept = false;
        let mut w = Matrix::zeros(1, 2);
        let mut b = vec![0.25];
        plain_sgd(&mut w, 0, &mut b, &x, &y, &HingeLoss::default(), &config, &mut IdentityOrder).unwrap();
        assert_eq!(b[0], 0.25);

        // first sample: update = 0.1 · 1, decay 0.5
        let mut config = constant(0.1, 0.0, 1);
        config.intercept_decay = 0.5;
        let mut w = Matrix::zeros(1, 2);
        let mut b = vec![0.0];
        let one = Matrix::from_data(vec![x.row(0).to_vec()]);
        plain_sgd(&mut w, 0, &mut b, &one, &[1.0], &HingeLoss::default(), &config, &mut IdentityOrder).unwrap();
        assert_abs_diff_eq!(b[0], 0.05, epsilon = 1e-15);
    }

    #[test]
    fn zero_epochs_leave_weights_alone() {
        let (x, y) = separable();
        let mut w = Matrix::from_data(vec![vec![0.5, -0.5]]);
        let mut b = vec![0.1];
        plain_sgd(&mut w, 0, &mut b, &x, &y, &SquaredLoss, &constant(0.1, 0.1, 0), &mut IdentityOrder).unwrap();
        assert_eq!(w.row(0), &[0.5, -0.5]);
        assert_eq!(b[0], 0.1);
    }

    #[test]
    fn regression_fits_a_line() {
        // y = 2·x0 − x1 + 0.5
        let x = Matrix::from_data(vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
            vec![0.5, -0.5],
        ]);
        let y: Vec<f64> = x.data.iter().map(|r| 2.0 * r[0] - r[1] + 0.5).collect();
        let mut w = Matrix::zeros(1, 2);
        let mut b = vec![0.0];
        let config = constant(0.1, 0.0, 2000);
        plain_sgd(&mut w, 0, &mut b, &x, &y, &SquaredLoss, &config, &mut FixedOrder(vec![3, 0, 4, 1, 2])).unwrap();

        assert_abs_diff_eq!(w.row(0)[0], 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(w.row(0)[1], -1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(b[0], 0.5, epsilon = 1e-3);
    }

    #[test]
    fn shape_errors_leave_inputs_untouched() {
        let (x, y) = separable();
        let mut w = Matrix::zeros(1, 3);
        let mut b = vec![0.0];
        let err = plain_sgd(&mut w, 0, &mut b, &x, &y, &LogLoss, &SgdConfig::default(), &mut IdentityOrder).unwrap_err();
        assert!(matches!(err, SgdError::DimensionMismatch { expected: 3, actual: 2, .. }));

        let mut w = Matrix::zeros(1, 2);
        let err = plain_sgd(&mut w, 1, &mut b, &x, &y, &LogLoss, &SgdConfig::default(), &mut IdentityOrder).unwrap_err();
        assert!(matches!(err, SgdError::RowOutOfRange { row: 1, n_rows: 1 }));

        let err = plain_sgd(&mut w, 0, &mut b, &x, &y[..3], &LogLoss, &SgdConfig::default(), &mut IdentityOrder).unwrap_err();
        assert!(matches!(err, SgdError::DimensionMismatch { expected: 4, actual: 3, .. }));

        let mut no_b: Vec<f64> = vec![];
        let err = plain_sgd(&mut w, 0, &mut no_b, &x, &y, &LogLoss, &SgdConfig::default(), &mut IdentityOrder).unwrap_err();
        assert!(matches!(err, SgdError::DimensionMismatch { expected: 1, actual: 0, .. }));
    }

    #[test]
    fn pegasos_without_alpha_is_rejected() {
        let (x, y) = separable();
        let mut w = Matrix::zeros(1, 2);
        let mut b = vec![0.0];
        let mut config = SgdConfig::new(LearningRate::Pegasos, 0.0, 3);
        config.alpha = 0.0;
        let err = plain_sgd(&mut w, 0, &mut b, &x, &y, &HingeLoss::default(), &config, &mut IdentityOrder).unwrap_err();
        assert!(matches!(err, SgdError::PegasosRequiresAlpha));
        assert_eq!(w.row(0), &[0.0, 0.0]);
    }

    #[test]
    fn progress_channel_receives_every_epoch() {
        let (x, y) = separable();
        let (tx, rx) = mpsc::channel();
        let mut config = constant(0.01, 1e-4, 4);
        config.progress_tx = Some(tx);

        let mut w = Matrix::zeros(1, 2);
        let mut b = vec![0.0];
        plain_sgd(&mut w, 0, &mut b, &x, &y, &HingeLoss::default(), &config, &mut IdentityOrder).unwrap();
        drop(config);

        let stats: Vec<EpochStats> = rx.iter().collect();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0].epoch, 1);
        assert_eq!(stats[3].total_epochs, 4);
        // all four points start inside the margin
        assert_eq!(stats[0].n_updates, 4);
        assert!(stats.iter().all(|s| s.mean_loss.is_some()));
        assert!(stats[3].mean_loss < stats[0].mean_loss);
    }

    #[test]
    fn boxed_loss_type_is_accepted() {
        let (x, y) = separable();
        let loss = crate::loss::LossType::ModifiedHuber.build();
        let mut w = Matrix::zeros(1, 2);
        let mut b = vec![0.0];
        plain_sgd(&mut w, 0, &mut b, &x, &y, &loss, &constant(0.01, 1e-4, 20), &mut IdentityOrder).unwrap();
        for (i, &label) in y.iter().enumerate() {
            assert!((dot(&w, 0, &x, i) + b[0]) * label > 0.0);
        }
    }
}
