use std::sync::mpsc;

use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::optim::learning_rate::LearningRate;
use crate::train::epoch_stats::EpochStats;

/// Hyperparameters shared by the binary and multiclass trainers.
///
/// # Fields
/// - `alpha`           — L2 regularization strength λ ≥ 0
/// - `learning_rate`   — step-size schedule
/// - `eta0`            — base step size (`Constant`, `InverseScaling`)
/// - `power_t`         — decay exponent (`InverseScaling`)
/// - `fit_intercept`   — whether intercepts are updated
/// - `intercept_decay` — multiplier applied to intercept updates
/// - `max_iter`        — number of epochs; the only termination control
/// - `verbose`         — `> 0` logs one line per epoch at info level
/// - `progress_tx`     — optional channel receiving one `EpochStats` per epoch.
///                       Not serialized. A dropped receiver does not stop training.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SgdConfig {
    pub alpha: f64,
    pub learning_rate: LearningRate,
    pub eta0: f64,
    pub power_t: f64,
    pub fit_intercept: bool,
    pub intercept_decay: f64,
    pub max_iter: usize,
    pub verbose: usize,
    #[serde(skip)]
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl Default for SgdConfig {
    fn default() -> Self {
        SgdConfig {
            alpha: 1e-4,
            learning_rate: LearningRate::InverseScaling,
            eta0: 0.01,
            power_t: 0.5,
            fit_intercept: true,
            intercept_decay: 1.0,
            max_iter: 5,
            verbose: 0,
            progress_tx: None,
        }
    }
}

impl SgdConfig {
    /// Creates a config with the given schedule and epoch count; everything
    /// else takes its default.
    pub fn new(learning_rate: LearningRate, eta0: f64, max_iter: usize) -> Self {
        SgdConfig {
            learning_rate,
            eta0,
            max_iter,
            ..SgdConfig::default()
        }
    }

    /// Current step size at step `t`.
    #[inline]
    pub fn eta(&self, t: usize) -> f64 {
        self.learning_rate.eta(self.alpha, self.eta0, self.power_t, t)
    }

    /// True when per-epoch statistics have an observer.
    pub(crate) fn tracks_progress(&self) -> bool {
        self.verbose > 0 || self.progress_tx.is_some()
    }

    /// Serializes the hyperparameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes hyperparameters from a JSON file. Missing fields take
    /// their defaults.
    pub fn load_json(path: &str) -> Result<SgdConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
