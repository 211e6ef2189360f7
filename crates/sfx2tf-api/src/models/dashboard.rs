//! Dashboard models (`/v2/dashboard/{id}`)

use serde::{Deserialize, Deserializer, Serialize};

use super::null_as_default;

/// A dashboard as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub group_id: String,
    pub chart_density: Option<ChartDensity>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub charts: Vec<ChartPlacement>,
    pub filters: Option<DashboardFilters>,
}

/// Dashboard chart density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChartDensity {
    Default,
    Low,
    High,
    Highest,
    #[serde(other)]
    Unknown,
}

/// Position of one chart on the dashboard grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPlacement {
    pub chart_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub column: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub row: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub width: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardFilters {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<SourceFilter>,
    pub time: Option<TimeFilter>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variables: Vec<DashboardVariable>,
}

/// A source filter applied to every chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFilter {
    #[serde(default, deserialize_with = "null_as_default")]
    pub property: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: Vec<String>,
    #[serde(rename = "NOT", default, deserialize_with = "null_as_default")]
    pub not: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub apply_if_exists: bool,
}

/// Dashboard time window
///
/// The API sends either relative strings (`"-1h"`, `"Now"`) or epoch
/// milliseconds, as strings or numbers. Both bounds are kept as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeFilter {
    #[serde(default, deserialize_with = "string_or_number")]
    pub start: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub end: String,
}

/// A user-facing dashboard variable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardVariable {
    #[serde(default, deserialize_with = "null_as_default")]
    pub property: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alias: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub replace_only: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub apply_if_exists: bool,
    pub value: Option<Vec<String>>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Int(n)) => n.to_string(),
        Some(Raw::Float(n)) => n.to_string(),
        None => String::new(),
    })
}
