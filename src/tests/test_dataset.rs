use crate::dataset::{ColumnData, DatasetTable};
use crate::error::ReportError;

fn sample() -> DatasetTable {
    DatasetTable::new()
        .with_numeric("f1", vec![1.0, 2.0, 3.0, 4.0])
        .unwrap()
        .with_numeric("f2", vec![0.5, 0.5, 1.5, 1.5])
        .unwrap()
        .with_categorical("target", vec!["b", "a", "b", "a"])
        .unwrap()
}

#[test]
fn test_columns_are_typed() {
    let table = sample();
    assert_eq!(table.rows(), Some(4));
    assert_eq!(table.numeric("f1").unwrap(), &[1.0, 2.0, 3.0, 4.0]);
    assert!(matches!(table.numeric("target"), Err(ReportError::MissingColumn(_))));
    assert!(matches!(table.categorical("f1"), Err(ReportError::MissingColumn(_))));
    assert!(matches!(table.column("f2"), Some(ColumnData::Numeric(_))));
    assert_eq!(table.numeric_columns().collect::<Vec<_>>(), vec!["f1", "f2"]);
}

#[test]
fn test_classes_keep_first_appearance_order() {
    assert_eq!(sample().classes("target").unwrap(), vec!["b", "a"]);
}

#[test]
fn test_group_selects_rows_by_class() {
    let table = sample();
    assert_eq!(table.group("f1", "target", "a").unwrap(), vec![2.0, 4.0]);
    assert_eq!(table.group("f2", "target", "b").unwrap(), vec![0.5, 1.5]);
    assert!(table.group("f1", "target", "c").unwrap().is_empty());
}

#[test]
fn test_rejects_ragged_or_duplicate_columns() {
    let ragged = sample().with_numeric("f3", vec![1.0]);
    assert!(matches!(ragged, Err(ReportError::DimensionMismatch { .. })));

    let duplicate = sample().with_numeric("f1", vec![0.0; 4]);
    assert!(matches!(duplicate, Err(ReportError::InvalidParameter { .. })));
}
