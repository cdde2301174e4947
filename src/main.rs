// The library does the work; this binary fits one small problem end to end.
// Run the larger demos with:
//   cargo run --example separable
//   cargo run --example multiclass
use sgd_linear::loss::HingeLoss;
use sgd_linear::math::ops::dot;
use sgd_linear::train::IdentityOrder;
use sgd_linear::{plain_sgd, LearningRate, Matrix, SgdConfig};

fn main() -> sgd_linear::Result<()> {
    env_logger::init();

    let x = Matrix::from_data(vec![
        vec![2.0, 1.0],
        vec![1.0, 2.0],
        vec![-1.0, -2.0],
        vec![-2.0, -1.0],
    ]);
    let y = vec![1.0, 1.0, -1.0, -1.0];

    let mut config = SgdConfig::new(LearningRate::Constant, 0.01, 50);
    config.alpha = 1e-4;

    let mut weights = Matrix::zeros(1, 2);
    let mut intercepts = vec![0.0];
    plain_sgd(&mut weights, 0, &mut intercepts, &x, &y, &HingeLoss::default(), &config, &mut IdentityOrder)?;

    println!("w = {:?}, b = {:.4}", weights.row(0), intercepts[0]);
    for (i, label) in y.iter().enumerate() {
        let pred = dot(&weights, 0, &x, i) + intercepts[0];
        println!("x = {:?}  y = {:+}  f(x) = {:+.4}", x.row(i), label, pred);
    }
    Ok(())
}
