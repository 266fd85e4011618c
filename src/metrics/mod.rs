pub mod roc;

pub use roc::{auc, roc_curve, RocCurve};
