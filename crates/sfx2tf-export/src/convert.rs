//! Scalar field conversions
//!
//! The API reports durations in milliseconds; the provider takes seconds.
//! All conversions truncate toward zero.

use sfx2tf_api::{ChartOptions, OnChartLegendOptions};

/// Milliseconds to whole seconds
pub fn ms_to_seconds(ms: i64) -> i64 {
    ms / 1000
}

/// Optional milliseconds to seconds, absent meaning 0
pub fn optional_ms_to_seconds(ms: Option<i64>) -> i64 {
    ms.map(ms_to_seconds).unwrap_or(0)
}

/// Chart max delay in seconds; 0 when program options or the field are absent
pub fn max_delay(options: &ChartOptions) -> i64 {
    match &options.program_options {
        Some(program) => optional_ms_to_seconds(program.max_delay),
        None => 0,
    }
}

/// Chart minimum resolution in seconds; 0 when program options or the field are absent
pub fn min_resolution(options: &ChartOptions) -> i64 {
    match &options.program_options {
        Some(program) => optional_ms_to_seconds(program.minimum_resolution),
        None => 0,
    }
}

/// Chart refresh interval in seconds, 0 when absent
pub fn refresh_interval(options: &ChartOptions) -> i64 {
    optional_ms_to_seconds(options.refresh_interval)
}

/// Whether sampling is disabled, false when program options are absent
pub fn disable_sampling(options: &ChartOptions) -> bool {
    options
        .program_options
        .as_ref()
        .map(|program| program.disable_sampling)
        .unwrap_or(false)
}

/// Parse a millisecond string into seconds, 0 when it does not parse
pub fn string_to_seconds(raw: &str) -> i64 {
    raw.trim().parse::<i64>().map(ms_to_seconds).unwrap_or(0)
}

/// Dimension shown in the on-chart legend, in provider terms
pub fn on_chart_legend_dimension(options: Option<&OnChartLegendOptions>) -> String {
    match options.and_then(|o| o.dimension_in_legend.as_deref()) {
        Some("sf_metric") => "plot_label".to_string(),
        Some("sf_originatingMetric") => "metric".to_string(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
