pub mod binary;
pub mod epoch_stats;
pub mod multiclass;
pub mod shuffle;
pub mod train_config;
pub mod weight_scale;

pub use binary::plain_sgd;
pub use epoch_stats::EpochStats;
pub use multiclass::{multiclass_sgd, predict_multiclass};
pub use shuffle::{FixedOrder, IdentityOrder, SeededShuffler, Shuffler};
pub use train_config::SgdConfig;
