use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Name of the categorical column box plots are grouped by
pub const TARGET_COLUMN: &str = "target";

/// Feature columns shown in the scatter matrix
pub const SCATTER_FEATURES: [&str; 6] = ["f1", "f2", "f3", "f4", "f5", "f6"];

/// Values of a single dataset column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(values) => values.len(),
            ColumnData::Categorical(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only table of equally long, named columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetTable {
    columns: Vec<(String, ColumnData)>,
}

impl DatasetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a numeric column
    pub fn with_numeric<S: Into<String>>(self, name: S, values: Vec<f64>) -> Result<Self> {
        self.with_column(name.into(), ColumnData::Numeric(values))
    }

    /// Add a categorical column
    pub fn with_categorical<S, V>(self, name: S, values: Vec<V>) -> Result<Self>
    where
        S: Into<String>,
        V: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.with_column(name.into(), ColumnData::Categorical(values))
    }

    fn with_column(mut self, name: String, data: ColumnData) -> Result<Self> {
        if self.column(&name).is_some() {
            return Err(ReportError::invalid_parameter(
                name,
                "column already exists".to_string(),
            ));
        }
        if let Some(rows) = self.rows() {
            if data.len() != rows {
                return Err(ReportError::dimension_mismatch(
                    format!("{} rows in column '{}'", rows, name),
                    format!("{}", data.len()),
                ));
            }
        }
        self.columns.push((name, data));
        Ok(self)
    }

    /// Number of rows, `None` while the table has no columns
    pub fn rows(&self) -> Option<usize> {
        self.columns.first().map(|(_, data)| data.len())
    }

    pub fn column(&self, name: &str) -> Option<&ColumnData> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, data)| data)
    }

    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        match self.column(name) {
            Some(ColumnData::Numeric(values)) => Ok(values),
            _ => Err(ReportError::MissingColumn(format!("{} (numeric)", name))),
        }
    }

    pub fn categorical(&self, name: &str) -> Result<&[String]> {
        match self.column(name) {
            Some(ColumnData::Categorical(values)) => Ok(values),
            _ => Err(ReportError::MissingColumn(format!("{} (categorical)", name))),
        }
    }

    /// Names of all numeric columns, in insertion order
    pub fn numeric_columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().filter_map(|(name, data)| match data {
            ColumnData::Numeric(_) => Some(name.as_str()),
            ColumnData::Categorical(_) => None,
        })
    }

    /// Distinct values of a categorical column, in order of first appearance
    pub fn classes(&self, name: &str) -> Result<Vec<String>> {
        let mut classes: Vec<String> = Vec::new();
        for value in self.categorical(name)? {
            if !classes.contains(value) {
                classes.push(value.clone());
            }
        }
        Ok(classes)
    }

    /// Values of numeric column `column` for the rows where `by == class`
    pub fn group(&self, column: &str, by: &str, class: &str) -> Result<Vec<f64>> {
        let values = self.numeric(column)?;
        let keys = self.categorical(by)?;
        Ok(values
            .iter()
            .zip(keys)
            .filter(|(_, key)| key.as_str() == class)
            .map(|(&v, _)| v)
            .collect())
    }
}
