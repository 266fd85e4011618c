use ndarray::array;
use crate::error::ReportError;
use crate::metrics::{auc, roc_curve};

#[test]
fn test_roc_curve_matches_reference_example() {
    let labels = array![0.0, 0.0, 1.0, 1.0];
    let scores = array![0.1, 0.4, 0.35, 0.8];
    let roc = roc_curve(labels.view(), scores.view()).unwrap();

    assert_eq!(roc.fpr, vec![0.0, 0.0, 0.5, 0.5, 1.0]);
    assert_eq!(roc.tpr, vec![0.0, 0.5, 0.5, 1.0, 1.0]);
    assert!(roc.thresholds[0].is_infinite());
    assert_eq!(&roc.thresholds[1..], &[0.8, 0.4, 0.35, 0.1]);
    assert!((roc.auc() - 0.75).abs() < 1e-12);
}

#[test]
fn test_roc_curve_drops_collinear_points() {
    // Perfect ranking: every intermediate point lies on the two axis-aligned legs
    let labels = array![1.0, 1.0, 1.0, 0.0, 0.0, 0.0];
    let scores = array![0.9, 0.8, 0.7, 0.3, 0.2, 0.1];
    let roc = roc_curve(labels.view(), scores.view()).unwrap();

    assert_eq!(roc.fpr, vec![0.0, 0.0, 0.0, 1.0]);
    assert_eq!(roc.tpr, vec![0.0, 1.0 / 3.0, 1.0, 1.0]);
    assert_eq!(roc.auc(), 1.0);
}

#[test]
fn test_roc_curve_groups_tied_scores() {
    let labels = array![1.0, 0.0, 1.0, 0.0];
    let scores = array![0.5, 0.5, 0.5, 0.5];
    let roc = roc_curve(labels.view(), scores.view()).unwrap();

    assert_eq!(roc.fpr, vec![0.0, 1.0]);
    assert_eq!(roc.tpr, vec![0.0, 1.0]);
    assert_eq!(roc.thresholds[1], 0.5);
    assert!((roc.auc() - 0.5).abs() < 1e-12);
}

#[test]
fn test_roc_curve_rejects_bad_input() {
    let scores = array![0.1, 0.2];

    let mismatch = roc_curve(array![0.0, 1.0, 1.0].view(), scores.view());
    assert!(matches!(mismatch, Err(ReportError::DimensionMismatch { .. })));

    let not_binary = roc_curve(array![0.0, 2.0].view(), scores.view());
    assert!(matches!(not_binary, Err(ReportError::InvalidParameter { .. })));

    let one_class = roc_curve(array![1.0, 1.0].view(), scores.view());
    assert!(matches!(one_class, Err(ReportError::InvalidParameter { .. })));

    let nan_score = roc_curve(array![0.0, 1.0].view(), array![f64::NAN, 0.2].view());
    assert!(nan_score.is_err());

    let empty: [f64; 0] = [];
    let no_samples = roc_curve(ndarray::ArrayView1::from(&empty), ndarray::ArrayView1::from(&empty));
    assert!(no_samples.is_err());
}

#[test]
fn test_auc_trapezoid() {
    assert_eq!(auc(&[0.0, 1.0], &[0.0, 1.0]), 0.5);
    assert_eq!(auc(&[0.0, 0.5, 1.0], &[1.0, 1.0, 1.0]), 1.0);
    assert_eq!(auc(&[1.0, 0.0], &[0.0, 1.0]), 0.5);
    assert_eq!(auc(&[], &[]), 0.0);
}
