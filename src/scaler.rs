use ndarray::{Array1, Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Feature scaling applied to a series before training; plots undo it.
pub trait Scaler {
    fn transform(&self, data: ArrayView2<f64>) -> Result<Array2<f64>>;

    fn inverse_transform(&self, data: ArrayView2<f64>) -> Result<Array2<f64>>;
}

/// Leaves values untouched, for series that were never scaled
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityScaler;

impl Scaler for IdentityScaler {
    fn transform(&self, data: ArrayView2<f64>) -> Result<Array2<f64>> {
        Ok(data.to_owned())
    }

    fn inverse_transform(&self, data: ArrayView2<f64>) -> Result<Array2<f64>> {
        Ok(data.to_owned())
    }
}

/// Per-column min-max scaling into `feature_range`.
///
/// Columns with zero range get a scale of 1 so they map onto the lower
/// bound instead of producing NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    feature_range: (f64, f64),
    scale: Array1<f64>,
    offset: Array1<f64>,
}

impl MinMaxScaler {
    /// Learn column minima and maxima from `data`
    pub fn fit(data: ArrayView2<f64>, feature_range: (f64, f64)) -> Result<Self> {
        let (lo, hi) = feature_range;
        if !(lo < hi) {
            return Err(ReportError::invalid_parameter(
                "feature_range".to_string(),
                format!("minimum {} must be smaller than maximum {}", lo, hi),
            ));
        }
        if data.nrows() == 0 {
            return Err(ReportError::dimension_mismatch("at least one row", "0"));
        }

        let data_min = data.fold_axis(Axis(0), f64::INFINITY, |&acc, &x| acc.min(x));
        let data_max = data.fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &x| acc.max(x));
        let scale = (&data_max - &data_min).mapv(|range| {
            let range = if range == 0.0 { 1.0 } else { range };
            (hi - lo) / range
        });
        let offset = lo - &data_min * &scale;

        Ok(MinMaxScaler {
            feature_range,
            scale,
            offset,
        })
    }

    pub fn feature_range(&self) -> (f64, f64) {
        self.feature_range
    }

    fn check_columns(&self, data: &ArrayView2<f64>) -> Result<()> {
        if data.ncols() != self.scale.len() {
            return Err(ReportError::dimension_mismatch(
                format!("{} columns", self.scale.len()),
                format!("{}", data.ncols()),
            ));
        }
        Ok(())
    }
}

impl Scaler for MinMaxScaler {
    fn transform(&self, data: ArrayView2<f64>) -> Result<Array2<f64>> {
        self.check_columns(&data)?;
        Ok(&data * &self.scale + &self.offset)
    }

    fn inverse_transform(&self, data: ArrayView2<f64>) -> Result<Array2<f64>> {
        self.check_columns(&data)?;
        Ok((&data - &self.offset) / &self.scale)
    }
}
