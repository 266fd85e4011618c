//! Per-epoch loss history and the best-epoch summary derived from it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Training and validation loss recorded once per epoch.
///
/// Both sequences always have the same, non-zero length. The serialized form
/// matches the `history.history` mapping Keras produces:
/// `{"loss": [...], "val_loss": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct TrainingHistory {
    #[serde(rename = "loss")]
    train_loss: Vec<f64>,
    val_loss: Vec<f64>,
}

#[derive(Deserialize)]
struct RawHistory {
    loss: Vec<f64>,
    val_loss: Vec<f64>,
}

impl TryFrom<RawHistory> for TrainingHistory {
    type Error = ReportError;

    fn try_from(raw: RawHistory) -> Result<Self> {
        TrainingHistory::new(raw.loss, raw.val_loss)
    }
}

impl TrainingHistory {
    /// Create a history from complete loss sequences
    pub fn new(train_loss: Vec<f64>, val_loss: Vec<f64>) -> Result<Self> {
        if train_loss.len() != val_loss.len() {
            return Err(ReportError::dimension_mismatch(
                format!("{} validation losses", train_loss.len()),
                format!("{}", val_loss.len()),
            ));
        }
        if train_loss.is_empty() {
            return Err(ReportError::invalid_parameter(
                "history",
                "at least one epoch is required",
            ));
        }
        Ok(TrainingHistory { train_loss, val_loss })
    }

    /// Load a Keras-shaped JSON history
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Append the losses of one more epoch
    pub fn record_epoch(&mut self, train_loss: f64, val_loss: f64) {
        self.train_loss.push(train_loss);
        self.val_loss.push(val_loss);
    }

    pub fn train_loss(&self) -> &[f64] {
        &self.train_loss
    }

    pub fn val_loss(&self) -> &[f64] {
        &self.val_loss
    }

    /// Number of recorded epochs
    pub fn epochs(&self) -> usize {
        self.train_loss.len()
    }

    /// Index of the smallest validation loss.
    ///
    /// Ties resolve to the earliest epoch. A NaN counts as the minimum, the
    /// way numpy's `argmin` treats it.
    pub fn best_epoch(&self) -> usize {
        let mut best = 0;
        for (i, &loss) in self.val_loss.iter().enumerate() {
            if loss.is_nan() {
                return i;
            }
            if loss < self.val_loss[best] {
                best = i;
            }
        }
        best
    }
}

/// Losses at the epoch with the lowest validation loss
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossSummary {
    pub train_loss: f64,
    pub val_loss: f64,
    #[serde(skip)]
    epoch: usize,
}

impl LossSummary {
    /// Epoch index the losses were taken from
    pub fn epoch(&self) -> usize {
        self.epoch
    }
}

/// Pick the training and validation loss at the epoch of minimum validation loss
pub fn extract_final_losses(history: &TrainingHistory) -> LossSummary {
    let epoch = history.best_epoch();
    LossSummary {
        train_loss: history.train_loss[epoch],
        val_loss: history.val_loss[epoch],
        epoch,
    }
}
