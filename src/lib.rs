//! # trainviz - Training report plots and summaries
//!
//! Helpers run after a neural network has been trained: they turn loss
//! histories, classifier scores, datasets and time-series predictions into
//! PNG reports, and pick the losses of the best validation epoch.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trainviz::config::ReportConfig;
//! use trainviz::history::{extract_final_losses, TrainingHistory};
//! use trainviz::visualization::plot_training_error_curves;
//!
//! let history = TrainingHistory::new(vec![0.8, 0.5, 0.3], vec![0.9, 0.4, 0.5]).unwrap();
//! let summary = extract_final_losses(&history);
//! assert_eq!(summary.val_loss, 0.4);
//!
//! let config = ReportConfig::with_output_dir("results");
//! plot_training_error_curves(&config, &history, Some("3")).unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Output directory and canvas sizes
//! - [`dataset`] - Named numeric/categorical columns for exploratory plots
//! - [`error`] - Error types and result handling
//! - [`history`] - Per-epoch losses and the best-epoch summary
//! - [`metrics`] - ROC curve and AUC
//! - [`scaler`] - Feature scaling undone before plotting series
//! - [`series`] - Alignment of predictions onto the original series
//! - [`visualization`] - PNG plots and history export

pub mod config;
pub mod dataset;
pub mod error;
pub mod history;
pub mod metrics;
pub mod scaler;
pub mod series;
pub mod visualization;

#[cfg(test)]
mod tests;
