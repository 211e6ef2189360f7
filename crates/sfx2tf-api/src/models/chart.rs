//! Chart models (`/v2/chart/{id}`)

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Presentation kinds the exporter knows how to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Heatmap chart
    Heatmap,
    /// Single value chart
    SingleValue,
    /// Time series chart
    TimeSeriesChart,
    /// List chart
    List,
    /// Markdown text chart
    Text,
}

impl ChartKind {
    /// All supported kinds
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Heatmap,
        ChartKind::SingleValue,
        ChartKind::TimeSeriesChart,
        ChartKind::List,
        ChartKind::Text,
    ];

    /// Parse the API `options.type` tag
    pub fn from_type(tag: &str) -> Option<Self> {
        match tag {
            "Heatmap" => Some(ChartKind::Heatmap),
            "SingleValue" => Some(ChartKind::SingleValue),
            "TimeSeriesChart" => Some(ChartKind::TimeSeriesChart),
            "List" => Some(ChartKind::List),
            "Text" => Some(ChartKind::Text),
            _ => None,
        }
    }

    /// The API `options.type` tag
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Heatmap => "Heatmap",
            ChartKind::SingleValue => "SingleValue",
            ChartKind::TimeSeriesChart => "TimeSeriesChart",
            ChartKind::List => "List",
            ChartKind::Text => "Text",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chart as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    /// Chart id
    pub id: String,
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Kind-specific options
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: ChartOptions,
    /// SignalFlow program
    #[serde(default, deserialize_with = "null_as_default")]
    pub program_text: String,
    /// Tags
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl Chart {
    /// The chart's kind, if it is one the exporter supports
    pub fn kind(&self) -> Option<ChartKind> {
        ChartKind::from_type(&self.options.chart_type)
    }
}

/// The `options` bag. Which fields are meaningful depends on the kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// Kind tag (`Heatmap`, `SingleValue`, ...)
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub chart_type: String,
    pub unit_prefix: Option<String>,
    pub group_by: Option<Vec<String>>,
    pub color_by: Option<String>,
    pub color_range: Option<ColorRange>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color_scale2: Vec<ColorScaleBucket>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publish_label_options: Vec<PublishLabelOptions>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_publish_label_options: Vec<EventPublishLabelOptions>,
    pub legend_options: Option<LegendOptions>,
    pub on_chart_legend_options: Option<OnChartLegendOptions>,
    pub histogram_chart_options: Option<HistogramChartOptions>,
    pub time: Option<ChartTime>,
    pub program_options: Option<ProgramOptions>,
    /// Milliseconds
    pub refresh_interval: Option<i64>,
    pub secondary_visualization: Option<String>,
    pub default_plot_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stacked: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub include_zero: bool,
    pub markdown: Option<String>,
}

impl ChartOptions {
    /// Color-by mode is `Range`
    pub fn colors_by_range(&self) -> bool {
        self.color_by.as_deref() == Some("Range")
    }

    /// Color-by mode is `Scale`
    pub fn colors_by_scale(&self) -> bool {
        self.color_by.as_deref() == Some("Scale")
    }
}

/// Single color plus thresholds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorRange {
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub min: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max: f64,
}

/// One threshold bucket of a color scale
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScaleBucket {
    pub gt: Option<f64>,
    pub gte: Option<f64>,
    pub lt: Option<f64>,
    pub lte: Option<f64>,
    pub palette_index: Option<i32>,
}

impl ColorScaleBucket {
    /// Whether any bound is set
    pub fn has_bounds(&self) -> bool {
        self.gt.is_some() || self.gte.is_some() || self.lt.is_some() || self.lte.is_some()
    }
}

/// Per-plot presentation options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishLabelOptions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    pub palette_index: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub plot_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value_prefix: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value_suffix: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value_unit: String,
    /// 0 is the left axis, anything else the right
    #[serde(default, deserialize_with = "null_as_default")]
    pub y_axis: i32,
}

/// Per-event presentation options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPublishLabelOptions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    pub palette_index: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<LegendField>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendField {
    #[serde(default, deserialize_with = "null_as_default")]
    pub property: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnChartLegendOptions {
    pub dimension_in_legend: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub show_legend: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramChartOptions {
    pub color_theme_index: Option<i32>,
}

/// Chart time window, relative (`range`) or absolute (`start`/`end`), in ms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartTime {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub time_type: String,
    pub range: Option<i64>,
    pub start: Option<i64>,
    pub end: Option<i64>,
}

/// SignalFlow execution options, delays in ms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramOptions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub disable_sampling: bool,
    pub max_delay: Option<i64>,
    pub minimum_resolution: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        for kind in ChartKind::ALL {
            assert_eq!(ChartKind::from_type(kind.as_str()), Some(kind));
        }
        assert_eq!(ChartKind::from_type("Event"), None);
    }

    #[test]
    fn test_decode_time_series_chart() {
        let json = r#"{
            "id": "Dx1",
            "name": "Latency",
            "programText": "A = data('latency').publish(label='A')",
            "options": {
                "type": "TimeSeriesChart",
                "defaultPlotType": "LineChart",
                "stacked": true,
                "time": {"type": "relative", "range": 900000},
                "programOptions": {"maxDelay": 1500, "disableSampling": true},
                "publishLabelOptions": [
                    {"label": "A", "displayName": "p99", "paletteIndex": 0, "yAxis": 1}
                ],
                "colorScale2": [{"gte": 5, "paletteIndex": 3}]
            }
        }"#;

        let chart: Chart = serde_json::from_str(json).unwrap();
        assert_eq!(chart.kind(), Some(ChartKind::TimeSeriesChart));
        assert!(chart.options.stacked);
        assert_eq!(chart.options.time.as_ref().and_then(|t| t.range), Some(900_000));

        let program = chart.options.program_options.as_ref().unwrap();
        assert_eq!(program.max_delay, Some(1500));
        assert_eq!(program.minimum_resolution, None);

        let plot = &chart.options.publish_label_options[0];
        assert_eq!(plot.palette_index, Some(0));
        assert_eq!(plot.y_axis, 1);

        let bucket = &chart.options.color_scale2[0];
        assert_eq!(bucket.gte, Some(5.0));
        assert!(bucket.gt.is_none());
        assert!(bucket.has_bounds());
    }

    #[test]
    fn test_decode_minimal_chart() {
        let chart: Chart = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert_eq!(chart.kind(), None);
        assert!(chart.options.program_options.is_none());
        assert!(chart.options.color_scale2.is_empty());
    }

    #[test]
    fn test_nulls_decode_as_defaults() {
        let json = r#"{
            "id": "c",
            "name": null,
            "description": null,
            "tags": null,
            "programText": null,
            "options": {
                "type": "List",
                "colorScale2": null,
                "publishLabelOptions": [{"label": "A", "displayName": null, "yAxis": null}],
                "eventPublishLabelOptions": null,
                "stacked": null,
                "legendOptions": {"fields": null},
                "onChartLegendOptions": {"showLegend": null, "dimensionInLegend": null},
                "programOptions": {"disableSampling": null, "maxDelay": null}
            }
        }"#;

        let chart: Chart = serde_json::from_str(json).unwrap();
        assert_eq!(chart.kind(), Some(ChartKind::List));
        assert!(chart.description.is_empty());
        assert!(chart.tags.is_empty());
        assert!(chart.options.color_scale2.is_empty());
        assert!(!chart.options.stacked);
        assert!(chart.options.legend_options.unwrap().fields.is_empty());
        assert_eq!(chart.options.publish_label_options[0].y_axis, 0);
        assert_eq!(chart.options.publish_label_options[0].display_name, "");
    }

    #[test]
    fn test_null_options_bag() {
        let chart: Chart = serde_json::from_str(r#"{"id": "x", "options": null}"#).unwrap();
        assert_eq!(chart.options, ChartOptions::default());
    }

    #[test]
    fn test_color_by_modes() {
        let options = ChartOptions {
            color_by: Some("Scale".to_string()),
            ..Default::default()
        };
        assert!(options.colors_by_scale());
        assert!(!options.colors_by_range());
        assert!(!ChartOptions::default().colors_by_scale());
    }
}
