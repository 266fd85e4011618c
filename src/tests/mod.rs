// Test modules for all components
pub mod test_config;
pub mod test_dataset;
pub mod test_roc;
pub mod test_series;
