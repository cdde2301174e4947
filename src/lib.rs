pub mod error;
pub mod math;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{Result, SgdError};
pub use math::matrix::Matrix;
pub use loss::{LossFunction, LossType};
pub use optim::learning_rate::{get_eta, LearningRate};
pub use train::{
    multiclass_sgd, plain_sgd, predict_multiclass, EpochStats, SeededShuffler, SgdConfig, Shuffler,
};
