//! Binary classification on two noisy Gaussian-ish blobs, once per loss.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example separable

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sgd_linear::math::ops::dot;
use sgd_linear::{plain_sgd, LearningRate, LossType, Matrix, SeededShuffler, SgdConfig};

fn make_blobs(n_per_class: usize, seed: u64) -> (Matrix, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::with_capacity(2 * n_per_class);
    let mut labels = Vec::with_capacity(2 * n_per_class);
    for &(cx, cy, label) in &[(1.5, 1.0, 1.0), (-1.0, -1.5, -1.0)] {
        for _ in 0..n_per_class {
            rows.push(vec![cx + rng.gen_range(-1.0..1.0), cy + rng.gen_range(-1.0..1.0)]);
            labels.push(label);
        }
    }
    (Matrix::from_data(rows), labels)
}

fn accuracy(w: &Matrix, b: f64, x: &Matrix, y: &[f64]) -> f64 {
    let correct = y.iter().enumerate()
        .filter(|&(i, &label)| (dot(w, 0, x, i) + b) * label > 0.0)
        .count();
    correct as f64 / y.len() as f64
}

fn main() -> sgd_linear::Result<()> {
    env_logger::init();

    let (x, y) = make_blobs(200, 7);

    let losses = [
        LossType::Hinge { threshold: 1.0 },
        LossType::Log,
        LossType::ModifiedHuber,
        LossType::SparseLog { threshold: 0.99 },
    ];

    for loss_type in losses {
        let mut config = SgdConfig::new(LearningRate::Pegasos, 0.0, 10);
        config.alpha = 1e-3;
        config.verbose = 1;

        let loss = loss_type.build();
        let mut w = Matrix::zeros(1, 2);
        let mut b = vec![0.0];
        plain_sgd(&mut w, 0, &mut b, &x, &y, &loss, &config, &mut SeededShuffler::new(42))?;

        println!(
            "{:<45} w = [{:+.3}, {:+.3}]  b = {:+.3}  train acc = {:.3}",
            format!("{loss_type:?}"),
            w.row(0)[0],
            w.row(0)[1],
            b[0],
            accuracy(&w, b[0], &x, &y),
        );
    }
    Ok(())
}
