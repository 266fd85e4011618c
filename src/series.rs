//! Alignment of windowed predictions back onto the index space of the
//! series they were made for.

use std::ops::Range;

use ndarray::{s, Array2, ArrayView2};

use crate::error::{ReportError, Result};

/// Model outputs for the three splits of a time series
#[derive(Debug, Clone, Copy)]
pub struct SeriesPredictions<'a> {
    pub train: ArrayView2<'a, f64>,
    pub validation: ArrayView2<'a, f64>,
    pub test: ArrayView2<'a, f64>,
}

/// Predictions shifted into the shape of the full series, NaN elsewhere
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesOverlay {
    pub train: Array2<f64>,
    pub validation: Array2<f64>,
    pub test: Array2<f64>,
}

impl SeriesOverlay {
    /// Place each split at the rows it predicts.
    ///
    /// Train predictions start after the `look_back` window, validation
    /// follows train directly and test fills the tail of the series.
    pub fn build(
        full_series: ArrayView2<f64>,
        predictions: &SeriesPredictions,
        look_back: usize,
    ) -> Result<Self> {
        let (rows, cols) = full_series.dim();
        let train_len = predictions.train.nrows();
        let val_len = predictions.validation.nrows();
        let test_len = predictions.test.nrows();

        let train_rows = look_back..look_back + train_len;
        let val_rows = train_rows.end..train_rows.end + val_len;
        let test_start = rows.checked_sub(test_len).ok_or_else(|| {
            ReportError::dimension_mismatch(
                format!("at most {} test rows", rows),
                format!("{}", test_len),
            )
        })?;
        let test_rows = test_start..rows;

        Ok(SeriesOverlay {
            train: place("train", predictions.train, train_rows, (rows, cols))?,
            validation: place("validation", predictions.validation, val_rows, (rows, cols))?,
            test: place("test", predictions.test, test_rows, (rows, cols))?,
        })
    }

    /// Iterate over the three overlays with their legend names
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Array2<f64>)> {
        [
            ("Train", &self.train),
            ("Validation", &self.validation),
            ("Test", &self.test),
        ]
        .into_iter()
    }
}

fn place(
    split: &str,
    values: ArrayView2<f64>,
    rows: Range<usize>,
    shape: (usize, usize),
) -> Result<Array2<f64>> {
    if values.ncols() != shape.1 {
        return Err(ReportError::dimension_mismatch(
            format!("{} columns in {} predictions", shape.1, split),
            format!("{}", values.ncols()),
        ));
    }
    if rows.end > shape.0 {
        return Err(ReportError::dimension_mismatch(
            format!("{} predictions ending within {} rows", split, shape.0),
            format!("rows {}..{}", rows.start, rows.end),
        ));
    }

    let mut overlay = Array2::from_elem(shape, f64::NAN);
    overlay.slice_mut(s![rows, ..]).assign(&values);
    Ok(overlay)
}

/// Split a column into its maximal runs of finite values, as `(index, value)`
/// points. Missing values break the line instead of being interpolated over.
pub fn finite_segments<'a, I>(values: I) -> Vec<Vec<(f64, f64)>>
where
    I: IntoIterator<Item = &'a f64>,
{
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (i, &v) in values.into_iter().enumerate() {
        if v.is_finite() {
            current.push((i as f64, v));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}
