//! PNG reports rendered with plotters.
//!
//! Every function writes exactly one file into [`ReportConfig::output_dir`]
//! and returns its path.

use std::ops::Range;
use std::path::PathBuf;

use log::{debug, info, warn};
use ndarray::{ArrayView1, ArrayView2};
use plotters::chart::SeriesLabelPosition;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::config::{check_file_component, ReportConfig};
use crate::dataset::{DatasetTable, SCATTER_FEATURES, TARGET_COLUMN};
use crate::error::{ReportError, Result};
use crate::history::TrainingHistory;
use crate::metrics::roc_curve;
use crate::scaler::Scaler;
use crate::series::{finite_segments, SeriesOverlay, SeriesPredictions};

pub const LOSS_CURVES_FILE: &str = "plot.png";
pub const ROC_FILE: &str = "roc.png";
pub const SCATTER_MATRIX_FILE: &str = "dset_scat_matrix.png";
pub const BOX_PLOT_FILE: &str = "dset_boxplot.png";
pub const SERIES_FILE_SUFFIX: &str = "_serie.png";

const BOX_PLOT_Y_RANGE: Range<f32> = -1.4..10.0;
const HISTOGRAM_BINS: usize = 10;
const FONT: &str = "sans-serif";

// matplotlib's default color cycle
const PALETTE: [RGBColor; 5] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
];

type Chart<'a, 'b> = ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Plot training and validation loss against the epoch index.
///
/// Written to `plot.png`, or `arch_<id>_plot.png` when `arch` is given.
pub fn plot_training_error_curves(
    config: &ReportConfig,
    history: &TrainingHistory,
    arch: Option<&str>,
) -> Result<PathBuf> {
    info!("Plotting training error curves...");
    config.prepare_output_dir()?;
    let path = config.artifact_path(LOSS_CURVES_FILE, arch)?;

    {
        let root = BitMapBackend::new(&path, config.figure_size).into_drawing_area();
        root.fill(&WHITE)?;

        let x_range = padded(0.0, history.epochs().saturating_sub(1) as f64);
        let y_range = value_range(history.train_loss().iter().chain(history.val_loss()));
        let mut chart = ChartBuilder::on(&root)
            .caption("Training and Validation Error Curves", (FONT, 20).into_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("Epochs")
            .y_desc("Loss (MSE)")
            .draw()?;

        draw_curve(&mut chart, history.train_loss(), PALETTE[0], Some("Train"))?;
        draw_curve(&mut chart, history.val_loss(), PALETTE[1], Some("Validation"))?;

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        root.present()?;
    }

    debug!("Saved training error curves to {}", path.display());
    Ok(path)
}

/// Plot the ROC curve of `predictions` against binary `labels`, together
/// with the dashed chance diagonal.
pub fn plot_roc_curve(
    config: &ReportConfig,
    labels: ArrayView1<f64>,
    predictions: ArrayView1<f64>,
    arch: Option<&str>,
) -> Result<PathBuf> {
    info!("Plotting ROC curve...");
    let roc = roc_curve(labels, predictions)?;
    config.prepare_output_dir()?;
    let path = config.artifact_path(ROC_FILE, arch)?;

    {
        let root = BitMapBackend::new(&path, config.figure_size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("ROC Curve", (FONT, 20).into_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(padded(0.0, 1.0), padded(0.0, 1.0))?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("False positive rate")
            .y_desc("True positive rate")
            .draw()?;

        // chance diagonal, dashed
        let dashes = 20;
        chart.draw_series((0..dashes).step_by(2).map(|i| {
            let from = i as f64 / dashes as f64;
            let to = (i + 1) as f64 / dashes as f64;
            PathElement::new(vec![(from, from), (to, to)], BLACK.stroke_width(1))
        }))?;

        let style = PALETTE[0].stroke_width(2);
        chart
            .draw_series(LineSeries::new(roc.points(), style))?
            .label(format!("AUC = {:.3}", roc.auc()))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        root.present()?;
    }

    debug!("Saved ROC curve ({} points) to {}", roc.len(), path.display());
    Ok(path)
}

/// Pairwise scatter matrix of the features `f1`..`f6`, colored and marked
/// by the categorical column `hue`. Diagonal panels hold per-class
/// histograms. Written to `dset_scat_matrix.png`.
pub fn plot_scatter_matrix(
    config: &ReportConfig,
    dataset: &DatasetTable,
    hue: &str,
) -> Result<PathBuf> {
    info!("Plotting scatter matrix...");
    let columns = SCATTER_FEATURES
        .iter()
        .map(|name| dataset.numeric(name))
        .collect::<Result<Vec<_>>>()?;
    let hue_values = dataset.categorical(hue)?;
    let classes = dataset.classes(hue)?;
    config.prepare_output_dir()?;
    let path = config.artifact_path(SCATTER_MATRIX_FILE, None)?;

    let n = columns.len();
    let panel = config.scatter_panel_size;
    let grid_size = panel * n as u32;
    let legend_width = (panel / 2).max(80);
    {
        let root = BitMapBackend::new(&path, (grid_size + legend_width, grid_size))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let (grid, legend_area) = root.split_horizontally(grid_size);
        let ranges: Vec<Range<f64>> = columns.iter().map(|c| value_range(c.iter())).collect();

        for (idx, area) in grid.split_evenly((n, n)).iter().enumerate() {
            let (row, col) = (idx / n, idx % n);
            let (xs, ys) = (columns[col], columns[row]);

            let y_range = if row == col {
                let tallest = classes
                    .iter()
                    .map(|class| {
                        let values = select(xs, hue_values, class);
                        histogram(&values, &ranges[col], HISTOGRAM_BINS)
                            .into_iter()
                            .fold(0.0, f64::max)
                    })
                    .fold(1.0, f64::max);
                0.0..tallest * 1.05
            } else {
                ranges[row].clone()
            };

            let mut builder = ChartBuilder::on(area);
            builder.margin(4);
            if col == 0 {
                builder.y_label_area_size(40);
            }
            if row == n - 1 {
                builder.x_label_area_size(35);
            }
            let mut chart = builder.build_cartesian_2d(ranges[col].clone(), y_range)?;

            let mut mesh = chart.configure_mesh();
            mesh.disable_mesh().x_labels(3).y_labels(3);
            if row == n - 1 {
                mesh.x_desc(SCATTER_FEATURES[col]);
            }
            if col == 0 {
                mesh.y_desc(SCATTER_FEATURES[row]);
            }
            mesh.draw()?;

            for (k, class) in classes.iter().enumerate() {
                let color = PALETTE[k % PALETTE.len()];
                if row == col {
                    draw_histogram(&mut chart, &select(xs, hue_values, class), &ranges[col], color)?;
                    continue;
                }
                let points = xs
                    .iter()
                    .zip(ys)
                    .zip(hue_values)
                    .filter(|(_, h)| *h == class)
                    .map(|((&x, &y), _)| (x, y))
                    .filter(|(x, y)| x.is_finite() && y.is_finite());
                if k % 2 == 0 {
                    chart.draw_series(points.map(|p| Circle::new(p, 2, color.filled())))?;
                } else {
                    chart.draw_series(points.map(|p| Cross::new(p, 3, color)))?;
                }
            }
        }

        // legend sits to the right of the grid, vertically centered
        let top = grid_size as i32 / 2 - 12 * (classes.len() as i32 + 1);
        legend_area.draw(&Text::new(hue.to_string(), (10, top), (FONT, 16).into_font()))?;
        for (k, class) in classes.iter().enumerate() {
            let color = PALETTE[k % PALETTE.len()];
            let y = top + 24 * (k as i32 + 1);
            if k % 2 == 0 {
                legend_area.draw(&Circle::new((18, y + 7), 4, color.filled()))?;
            } else {
                legend_area.draw(&Cross::new((18, y + 7), 4, color))?;
            }
            legend_area.draw(&Text::new(class.clone(), (30, y), (FONT, 14).into_font()))?;
        }
        root.present()?;
    }

    debug!("Saved scatter matrix to {}", path.display());
    Ok(path)
}

/// Box plots of every numeric column grouped by the `target` column, one
/// panel per column, y axis fixed to `[-1.4, 10]`. Written to
/// `dset_boxplot.png`.
pub fn plot_box_plot(config: &ReportConfig, dataset: &DatasetTable) -> Result<PathBuf> {
    info!("Plotting box plot...");
    let features: Vec<&str> = dataset.numeric_columns().collect();
    if features.is_empty() {
        return Err(ReportError::invalid_parameter(
            "dataset",
            "no numeric columns to plot",
        ));
    }
    let targets = dataset.classes(TARGET_COLUMN)?;
    config.prepare_output_dir()?;
    let path = config.artifact_path(BOX_PLOT_FILE, None)?;

    {
        let root = BitMapBackend::new(&path, config.box_plot_size).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled(
            &format!("Boxplot grouped by {}", TARGET_COLUMN),
            (FONT, 20).into_font(),
        )?;

        let panels = root.split_evenly(grid_layout(features.len()));
        for (feature, area) in features.iter().zip(panels.iter()) {
            let mut groups = Vec::with_capacity(targets.len());
            for (i, target) in targets.iter().enumerate() {
                let values: Vec<f64> = dataset
                    .group(feature, TARGET_COLUMN, target)?
                    .into_iter()
                    .filter(|v| v.is_finite())
                    .collect();
                if values.is_empty() {
                    warn!("No '{}' values for {} = {}", feature, TARGET_COLUMN, target);
                    continue;
                }
                groups.push((i, Quartiles::new(&values)));
            }

            let mut chart = ChartBuilder::on(area)
                .caption(*feature, (FONT, 16).into_font())
                .margin(10)
                .x_label_area_size(30)
                .y_label_area_size(40)
                .build_cartesian_2d(targets[..].into_segmented(), BOX_PLOT_Y_RANGE)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_desc(TARGET_COLUMN)
                .x_label_formatter(&|v| match v {
                    SegmentValue::CenterOf(t) | SegmentValue::Exact(t) => t.to_string(),
                    SegmentValue::Last => String::new(),
                })
                .draw()?;

            chart.draw_series(groups.iter().map(|(i, quartiles)| {
                Boxplot::new_vertical(SegmentValue::CenterOf(&targets[*i]), quartiles)
                    .width(30)
                    .whisker_width(0.5)
                    .style(PALETTE[0])
            }))?;
        }
        root.present()?;
    }

    debug!("Saved box plot to {}", path.display());
    Ok(path)
}

/// Plot a series next to its train, validation and test predictions.
///
/// `full_series` is in scaled units and is inverse-transformed with
/// `scaler` before drawing; predictions are drawn as given, shifted onto the
/// series index by [`SeriesOverlay::build`]. Written to
/// `<dimension>_serie.png`, prefixed `arch_<id>_` when `arch` is given.
pub fn plot_series(
    config: &ReportConfig,
    full_series: ArrayView2<f64>,
    predictions: &SeriesPredictions,
    look_back: usize,
    scaler: &dyn Scaler,
    dimension: &str,
    arch: Option<&str>,
) -> Result<PathBuf> {
    info!("Plotting serie curve...");
    check_file_component("dimension", dimension)?;
    let overlay = SeriesOverlay::build(full_series, predictions, look_back)?;
    let baseline = scaler.inverse_transform(full_series)?;
    config.prepare_output_dir()?;
    let path = config.artifact_path(&format!("{}{}", dimension, SERIES_FILE_SUFFIX), arch)?;

    {
        let root = BitMapBackend::new(&path, config.figure_size).into_drawing_area();
        root.fill(&WHITE)?;

        let x_range = padded(0.0, full_series.nrows().saturating_sub(1) as f64);
        let y_range = value_range(
            baseline
                .iter()
                .chain(overlay.train.iter())
                .chain(overlay.validation.iter())
                .chain(overlay.test.iter()),
        );
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)?;
        chart.configure_mesh().disable_mesh().draw()?;

        let curves = std::iter::once(("Series", &baseline)).chain(overlay.iter());
        for (k, (name, values)) in curves.enumerate() {
            let color = PALETTE[k % PALETTE.len()];
            for (j, column) in values.columns().into_iter().enumerate() {
                let label = (j == 0).then_some(name);
                draw_curve(&mut chart, column.iter(), color, label)?;
            }
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        root.present()?;
    }

    debug!("Saved {} series plot to {}", dimension, path.display());
    Ok(path)
}

/// Two-dimensional counterpart of [`plot_series`]. Not available yet:
/// always fails with [`ReportError::NotImplemented`] and writes nothing.
pub fn plot_2d_series(
    _config: &ReportConfig,
    _full_series: ArrayView2<f64>,
    _predictions: &SeriesPredictions,
    _look_back: usize,
    _scaler: &dyn Scaler,
) -> Result<PathBuf> {
    info!("Plotting 2D serie curve...");
    Err(ReportError::NotImplemented("plot_2d_series"))
}

/// Draw `values` against their index, breaking the line at NaN
fn draw_curve<'v, I>(
    chart: &mut Chart<'_, '_>,
    values: I,
    color: RGBColor,
    label: Option<&str>,
) -> Result<()>
where
    I: IntoIterator<Item = &'v f64>,
{
    let style = color.stroke_width(2);
    for (i, segment) in finite_segments(values).into_iter().enumerate() {
        let anno = chart.draw_series(LineSeries::new(segment, style))?;
        if let (0, Some(label)) = (i, label) {
            anno.label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }
    }
    Ok(())
}

fn draw_histogram(
    chart: &mut Chart<'_, '_>,
    values: &[f64],
    range: &Range<f64>,
    color: RGBColor,
) -> Result<()> {
    let width = (range.end - range.start) / HISTOGRAM_BINS as f64;
    let counts = histogram(values, range, HISTOGRAM_BINS);
    chart.draw_series(counts.into_iter().enumerate().map(|(b, count)| {
        let left = range.start + b as f64 * width;
        Rectangle::new([(left, 0.0), (left + width, count)], color.mix(0.4).filled())
    }))?;
    Ok(())
}

/// Bin counts of `values` over `range`; the last bin is closed
fn histogram(values: &[f64], range: &Range<f64>, bins: usize) -> Vec<f64> {
    let mut counts = vec![0.0; bins];
    let width = (range.end - range.start) / bins as f64;
    for &v in values.iter().filter(|v| v.is_finite()) {
        let bin = ((v - range.start) / width).floor();
        if bin >= 0.0 {
            counts[(bin as usize).min(bins - 1)] += 1.0;
        }
    }
    counts
}

fn select(values: &[f64], keys: &[String], class: &str) -> Vec<f64> {
    values
        .iter()
        .zip(keys)
        .filter(|(_, k)| k.as_str() == class)
        .map(|(&v, _)| v)
        .collect()
}

/// Rows and columns of the subplot grid, the way pandas lays out grouped
/// box plots.
fn grid_layout(panels: usize) -> (usize, usize) {
    match panels {
        0 | 1 => (1, 1),
        2 => (1, 2),
        3 | 4 => (2, 2),
        n => {
            let cols = (n as f64).sqrt().ceil() as usize;
            (n.div_ceil(cols), cols)
        }
    }
}

/// Axis range covering the finite `values`, with a 5% margin
fn value_range<'v, I>(values: I) -> Range<f64>
where
    I: IntoIterator<Item = &'v f64>,
{
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if lo > hi {
        return 0.0..1.0;
    }
    padded(lo, hi)
}

fn padded(lo: f64, hi: f64) -> Range<f64> {
    if lo == hi {
        return lo - 0.5..hi + 0.5;
    }
    let margin = (hi - lo) * 0.05;
    lo - margin..hi + margin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout_matches_pandas() {
        assert_eq!(grid_layout(1), (1, 1));
        assert_eq!(grid_layout(2), (1, 2));
        assert_eq!(grid_layout(3), (2, 2));
        assert_eq!(grid_layout(6), (2, 3));
        assert_eq!(grid_layout(7), (3, 3));
    }

    #[test]
    fn test_value_range_ignores_nan() {
        let r = value_range(&[f64::NAN, 0.0, 10.0, f64::NAN]);
        assert!((r.start + 0.5).abs() < 1e-12);
        assert!((r.end - 10.5).abs() < 1e-12);

        let flat = value_range(&[2.0, 2.0]);
        assert_eq!(flat, 1.5..2.5);

        assert_eq!(value_range(&[f64::NAN]), 0.0..1.0);
    }

    #[test]
    fn test_histogram_closes_last_bin() {
        let counts = histogram(&[0.0, 0.5, 1.0, 1.0, f64::NAN], &(0.0..1.0), 2);
        assert_eq!(counts, vec![1.0, 3.0]);
    }
}
