pub mod learning_rate;

pub use learning_rate::{get_eta, LearningRate};
