use log::{info, trace};
use serde::{Serialize, Deserialize};

use crate::train::train_config::SgdConfig;

/// Per-epoch training statistics.
///
/// When a `progress_tx` channel is configured in `SgdConfig`, the trainers
/// send one `EpochStats` value at the end of every epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run (`max_iter`).
    pub total_epochs: usize,
    /// Samples that changed the weights: a non-zero loss update for the
    /// binary trainer, a misclassification for the multiclass trainer.
    pub n_updates: usize,
    /// Mean per-sample loss at prediction time; binary trainer only.
    pub mean_loss: Option<f64>,
    /// Wall-clock duration of this epoch in milliseconds.
    pub elapsed_ms: u64,
}

/// Sends and logs one epoch's statistics.
pub(crate) fn report_epoch(config: &SgdConfig, stats: EpochStats) {
    if config.verbose > 0 {
        info!(
            "epoch {}/{}: {} updates, mean loss {}, {} ms",
            stats.epoch,
            stats.total_epochs,
            stats.n_updates,
            stats.mean_loss.map_or_else(|| "-".to_string(), |l| format!("{l:.6}")),
            stats.elapsed_ms,
        );
    } else {
        trace!("epoch {}/{}: {} updates", stats.epoch, stats.total_epochs, stats.n_updates);
    }
    if let Some(ref tx) = config.progress_tx {
        // A dropped receiver only loses the report; training carries on.
        let _ = tx.send(stats);
    }
}
