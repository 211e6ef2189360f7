//! Per-resource emitters

pub mod blocks;
pub mod charts;
pub mod dashboard;
pub mod detector;

pub use charts::emit_chart;
pub use dashboard::{emit_dashboard, ChartLookup};
pub use detector::{emit_detector, emit_legacy_detector};
