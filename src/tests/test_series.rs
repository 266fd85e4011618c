use ndarray::{Array2, ArrayView2};
use crate::error::ReportError;
use crate::series::{finite_segments, SeriesOverlay, SeriesPredictions};

fn filled_rows(overlay: &Array2<f64>) -> Vec<usize> {
    overlay
        .rows()
        .into_iter()
        .enumerate()
        .filter(|(_, row)| row.iter().all(|v| !v.is_nan()))
        .map(|(i, _)| i)
        .collect()
}

fn column(values: &[f64]) -> Array2<f64> {
    Array2::from_shape_vec((values.len(), 1), values.to_vec()).unwrap()
}

#[test]
fn test_overlay_boundaries() {
    let full = column(&(0..10).map(|i| i as f64).collect::<Vec<_>>());
    let train = column(&[10.0, 11.0, 12.0]);
    let val = column(&[20.0, 21.0, 22.0]);
    let test = column(&[30.0, 31.0, 32.0]);
    let predictions = SeriesPredictions {
        train: train.view(),
        validation: val.view(),
        test: test.view(),
    };

    let overlay = SeriesOverlay::build(full.view(), &predictions, 1).unwrap();

    assert_eq!(overlay.train.dim(), (10, 1));
    assert_eq!(filled_rows(&overlay.train), vec![1, 2, 3]);
    assert_eq!(filled_rows(&overlay.validation), vec![4, 5, 6]);
    assert_eq!(filled_rows(&overlay.test), vec![7, 8, 9]);

    assert_eq!(overlay.train[[1, 0]], 10.0);
    assert_eq!(overlay.validation[[6, 0]], 22.0);
    assert_eq!(overlay.test[[7, 0]], 30.0);
    assert!(overlay.train[[0, 0]].is_nan());
    assert!(overlay.validation[[3, 0]].is_nan());
}

#[test]
fn test_overlay_multiple_columns() {
    let full = Array2::<f64>::zeros((8, 2));
    let train = Array2::from_elem((2, 2), 1.0);
    let val = Array2::from_elem((1, 2), 2.0);
    let test = Array2::from_elem((2, 2), 3.0);
    let predictions = SeriesPredictions {
        train: train.view(),
        validation: val.view(),
        test: test.view(),
    };

    let overlay = SeriesOverlay::build(full.view(), &predictions, 2).unwrap();
    assert_eq!(filled_rows(&overlay.train), vec![2, 3]);
    assert_eq!(filled_rows(&overlay.validation), vec![4]);
    assert_eq!(filled_rows(&overlay.test), vec![6, 7]);
}

#[test]
fn test_overlay_rejects_out_of_range_predictions() {
    let full = Array2::<f64>::zeros((5, 1));
    let train = Array2::<f64>::zeros((3, 1));
    let val = Array2::<f64>::zeros((2, 1));
    let test = Array2::<f64>::zeros((1, 1));
    let predictions = SeriesPredictions {
        train: train.view(),
        validation: val.view(),
        test: test.view(),
    };

    // 1 + 3 + 2 rows overflow a 5-row series
    let result = SeriesOverlay::build(full.view(), &predictions, 1);
    assert!(matches!(result, Err(ReportError::DimensionMismatch { .. })));

    let long_test = Array2::<f64>::zeros((6, 1));
    let predictions = SeriesPredictions {
        test: long_test.view(),
        ..predictions
    };
    assert!(SeriesOverlay::build(full.view(), &predictions, 0).is_err());
}

#[test]
fn test_overlay_rejects_column_mismatch() {
    let full = Array2::<f64>::zeros((6, 2));
    let narrow = Array2::<f64>::zeros((1, 1));
    let empty: ArrayView2<f64> = ArrayView2::from_shape((0, 2), &[]).unwrap();
    let predictions = SeriesPredictions {
        train: narrow.view(),
        validation: empty,
        test: empty,
    };
    let result = SeriesOverlay::build(full.view(), &predictions, 0);
    assert!(matches!(result, Err(ReportError::DimensionMismatch { .. })));
}

#[test]
fn test_finite_segments_split_on_nan() {
    let values = [f64::NAN, 1.0, 2.0, f64::NAN, f64::NAN, 3.0];
    let segments = finite_segments(&values);
    assert_eq!(segments, vec![vec![(1.0, 1.0), (2.0, 2.0)], vec![(5.0, 3.0)]]);

    assert!(finite_segments(&[f64::NAN; 3]).is_empty());
}
