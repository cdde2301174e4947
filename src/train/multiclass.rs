use std::time::Instant;

use log::debug;

use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::math::ops::{add_scaled, dot};
use crate::train::binary::check_inputs;
use crate::train::epoch_stats::{report_epoch, EpochStats};
use crate::train::shuffle::Shuffler;
use crate::train::train_config::SgdConfig;
use crate::train::weight_scale::{finalize, shrink};

/// Index of the highest-scoring row for sample `sample`, where
/// `score[l] = (w[l]·x[sample]) · w_scales[l] + intercepts[l]`.
///
/// Ties go to the lowest row index.
pub fn predict_multiclass(
    weights: &Matrix,
    w_scales: &[f64],
    intercepts: &[f64],
    x: &Matrix,
    sample: usize,
) -> usize {
    let mut best = 0;
    let mut best_score = f64::NEG_INFINITY;
    for l in 0..weights.rows {
        let score = dot(weights, l, x, sample) * w_scales[l] + intercepts[l];
        if l == 0 || score > best_score {
            best = l;
            best_score = score;
        }
    }
    best
}

/// Fits one weight row per class with a multiclass hinge (Crammer-Singer
/// style) rule: when the top-scoring row `k` is not the true class, row `k`
/// is pushed down and the true row pushed up by the current step size.
///
/// Every row is shrunk by `(1 − αη)` on every step, whether or not it took
/// part in the update. Each row has its own lazy scale; all are folded back
/// before returning.
///
/// # Preconditions
/// Every label must be `< weights.rows`. This is not checked; an
/// out-of-range label panics on indexing.
///
/// # Errors
/// Shape mismatches and `Pegasos` with `alpha == 0` are rejected before the
/// first step.
pub fn multiclass_sgd<S>(
    weights: &mut Matrix,
    intercepts: &mut [f64],
    x: &Matrix,
    y: &[usize],
    config: &SgdConfig,
    shuffler: &mut S,
) -> Result<()>
where
    S: Shuffler + ?Sized,
{
    if weights.rows > 0 {
        check_inputs(weights, 0, intercepts, x, y.len(), config)?;
    }
    fit_multiclass(weights, intercepts, x, y, config, shuffler);
    Ok(())
}

/// Returns the per-row scales after the final fold (all exactly 1.0).
fn fit_multiclass<S>(
    weights: &mut Matrix,
    intercepts: &mut [f64],
    x: &Matrix,
    y: &[usize],
    config: &SgdConfig,
    shuffler: &mut S,
) -> Vec<f64>
where
    S: Shuffler + ?Sized,
{
    let n_samples = x.rows;
    let n_vectors = weights.rows;
    let track = config.tracks_progress();

    debug!(
        "multiclass_sgd: {} samples x {} features, {} classes, alpha={}, schedule={}, eta0={}, max_iter={}",
        n_samples, x.cols, n_vectors, config.alpha, config.learning_rate, config.eta0, config.max_iter
    );

    let mut w_scales = vec![1.0; n_vectors];
    if n_vectors == 0 {
        return w_scales;
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut t: usize = 1;

    for epoch in 1..=config.max_iter {
        let t_start = Instant::now();
        let mut n_updates = 0;

        shuffler.shuffle(&mut indices);

        for &i in &indices {
            let k = predict_multiclass(weights, &w_scales, intercepts, x, i);
            let eta = config.eta(t);
            let target = y[i];

            if k != target {
                add_scaled(weights, k, x, i, -eta / w_scales[k]);
                add_scaled(weights, target, x, i, eta / w_scales[target]);
                if config.fit_intercept {
                    intercepts[k] -= eta * config.intercept_decay;
                    intercepts[target] += eta * config.intercept_decay;
                }
                n_updates += 1;
            }

            let factor = 1.0 - config.alpha * eta;
            for (l, scale) in w_scales.iter_mut().enumerate() {
                shrink(weights, l, scale, factor);
            }
            t += 1;
        }

        if track {
            report_epoch(config, EpochStats {
                epoch,
                total_epochs: config.max_iter,
                n_updates,
                mean_loss: None,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            });
        }
    }

    for (l, scale) in w_scales.iter_mut().enumerate() {
        finalize(weights, l, scale);
    }
    w_scales
}
