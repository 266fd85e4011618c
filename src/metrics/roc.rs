use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Receiver operating characteristic of a binary classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocCurve {
    /// False positive rate at each threshold
    pub fpr: Vec<f64>,
    /// True positive rate at each threshold
    pub tpr: Vec<f64>,
    /// Decreasing score thresholds; the first one is `+inf`
    pub thresholds: Vec<f64>,
}

impl RocCurve {
    /// Area under the curve
    pub fn auc(&self) -> f64 {
        auc(&self.fpr, &self.tpr)
    }

    pub fn len(&self) -> usize {
        self.fpr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fpr.is_empty()
    }

    /// `(fpr, tpr)` pairs, ready to be drawn
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.fpr.iter().copied().zip(self.tpr.iter().copied())
    }
}

/// Compute the ROC curve of `scores` against binary `labels` (1.0 is the
/// positive class).
///
/// One point is produced per distinct score, points lying on a straight
/// segment between their neighbours are dropped, and an initial `(0, 0)`
/// point with an infinite threshold is prepended.
pub fn roc_curve(labels: ArrayView1<f64>, scores: ArrayView1<f64>) -> Result<RocCurve> {
    if labels.len() != scores.len() {
        return Err(ReportError::dimension_mismatch(
            format!("{} scores", labels.len()),
            format!("{}", scores.len()),
        ));
    }
    if labels.is_empty() {
        return Err(ReportError::dimension_mismatch("at least one sample", "0"));
    }
    if let Some(bad) = labels.iter().find(|&&l| l != 0.0 && l != 1.0) {
        return Err(ReportError::invalid_parameter(
            "labels".to_string(),
            format!("expected binary labels 0/1, found {}", bad),
        ));
    }
    if scores.iter().any(|s| !s.is_finite()) {
        return Err(ReportError::invalid_parameter(
            "scores",
            "scores must be finite",
        ));
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    // Cumulative counts at the last sample of each distinct score
    let mut fps = Vec::new();
    let mut tps = Vec::new();
    let mut thresholds = Vec::new();
    let (mut tp, mut fp) = (0.0, 0.0);
    for (rank, &i) in order.iter().enumerate() {
        if labels[i] == 1.0 {
            tp += 1.0;
        } else {
            fp += 1.0;
        }
        let last_of_group = order
            .get(rank + 1)
            .map_or(true, |&next| scores[next] != scores[i]);
        if last_of_group {
            fps.push(fp);
            tps.push(tp);
            thresholds.push(scores[i]);
        }
    }

    if fp == 0.0 {
        return Err(ReportError::invalid_parameter(
            "labels",
            "no negative samples, false positive rate is undefined",
        ));
    }
    if tp == 0.0 {
        return Err(ReportError::invalid_parameter(
            "labels",
            "no positive samples, true positive rate is undefined",
        ));
    }

    let keep = corner_points(&fps, &tps);
    let mut curve = RocCurve {
        fpr: Vec::with_capacity(keep.len() + 1),
        tpr: Vec::with_capacity(keep.len() + 1),
        thresholds: Vec::with_capacity(keep.len() + 1),
    };
    curve.fpr.push(0.0);
    curve.tpr.push(0.0);
    curve.thresholds.push(f64::INFINITY);
    for k in keep {
        curve.fpr.push(fps[k] / fp);
        curve.tpr.push(tps[k] / tp);
        curve.thresholds.push(thresholds[k]);
    }
    Ok(curve)
}

/// Indices whose point is not collinear with both neighbours; the first and
/// last points are always kept.
fn corner_points(fps: &[f64], tps: &[f64]) -> Vec<usize> {
    let n = fps.len();
    (0..n)
        .filter(|&k| {
            if k == 0 || k + 1 == n {
                return true;
            }
            let bend = |v: &[f64]| v[k - 1] - 2.0 * v[k] + v[k + 1] != 0.0;
            bend(fps) || bend(tps)
        })
        .collect()
}

/// Area under a curve by the trapezoidal rule.
///
/// `x` must be monotonic; a decreasing `x` yields a positive area as well.
pub fn auc(x: &[f64], y: &[f64]) -> f64 {
    let area: f64 = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
        .sum();
    area.abs()
}
