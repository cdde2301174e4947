pub mod matrix;
pub mod ops;

pub use matrix::Matrix;
pub use ops::{add_scaled, dot, scale_row};
