//! Typed API resources
//!
//! The API sends `null` for unset fields as often as it omits them; both
//! decode to the field's default.

use serde::{Deserialize, Deserializer};

pub mod chart;
pub mod dashboard;
pub mod detector;
pub mod notification;

pub use chart::{
    Chart, ChartKind, ChartOptions, ChartTime, ColorRange, ColorScaleBucket,
    EventPublishLabelOptions, HistogramChartOptions, LegendField, LegendOptions,
    OnChartLegendOptions, ProgramOptions, PublishLabelOptions,
};
pub use dashboard::{
    ChartDensity, ChartPlacement, Dashboard, DashboardFilters, DashboardVariable, SourceFilter,
    TimeFilter,
};
pub use detector::{Detector, DetectorRecord, DetectorSchema, DetectorV1, Rule, RuleV1, Severity};
pub use notification::{LegacyNotification, Notification};

/// Decode a field, treating an explicit `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
