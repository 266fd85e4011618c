pub mod plots;
pub mod export;

pub use plots::{
    plot_training_error_curves, plot_roc_curve, plot_scatter_matrix, plot_box_plot, plot_series,
    plot_2d_series,
};
pub use export::{export_history_csv, export_history_json, export_summary_json};
