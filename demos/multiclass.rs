//! Multiclass SGD on three clusters arranged around the origin.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example multiclass

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sgd_linear::{multiclass_sgd, predict_multiclass, LearningRate, Matrix, SeededShuffler, SgdConfig};

fn main() -> sgd_linear::Result<()> {
    env_logger::init();

    let centers = [(3.0, 0.0), (-1.5, 2.6), (-1.5, -2.6)];
    let mut rng = StdRng::seed_from_u64(3);
    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for (class, &(cx, cy)) in centers.iter().enumerate() {
        for _ in 0..100 {
            rows.push(vec![cx + rng.gen_range(-1.2..1.2), cy + rng.gen_range(-1.2..1.2)]);
            labels.push(class);
        }
    }
    let x = Matrix::from_data(rows);

    let mut config = SgdConfig::new(LearningRate::InverseScaling, 0.5, 15);
    config.alpha = 1e-4;
    config.verbose = 1;

    let mut w = Matrix::zeros(centers.len(), 2);
    let mut b = vec![0.0; centers.len()];
    multiclass_sgd(&mut w, &mut b, &x, &labels, &config, &mut SeededShuffler::new(1))?;

    let ones = vec![1.0; centers.len()];
    let correct = labels.iter().enumerate()
        .filter(|&(i, &label)| predict_multiclass(&w, &ones, &b, &x, i) == label)
        .count();

    for (l, row) in w.data.iter().enumerate() {
        println!("class {l}: w = [{:+.3}, {:+.3}]  b = {:+.3}", row[0], row[1], b[l]);
    }
    println!("train acc = {:.3}", correct as f64 / labels.len() as f64);
    Ok(())
}
