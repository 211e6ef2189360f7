//! Detector models for both API generations

use serde::{Deserialize, Serialize};

use super::{
    notification::{LegacyNotification, Notification},
    null_as_default,
};

/// A current-generation (v2) detector
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detector {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Milliseconds
    pub max_delay: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub program_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rules: Vec<Rule>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<String>,
}

/// Rule severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Major,
    Minor,
    Warning,
    #[default]
    Info,
    #[serde(other)]
    Unknown,
}

impl Severity {
    /// Provider severity name; unknown severities become `Info`
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Major => "Major",
            Severity::Minor => "Minor",
            Severity::Warning => "Warning",
            Severity::Info | Severity::Unknown => "Info",
        }
    }
}

/// A v2 detector rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub detect_label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub disabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notifications: Vec<Notification>,
    pub parameterized_body: Option<String>,
    pub parameterized_subject: Option<String>,
    pub runbook_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: Severity,
    pub tip: Option<String>,
}

/// A legacy (v1) detector record from `/v1/detector/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectorV1 {
    #[serde(rename = "sf_id")]
    pub id: String,
    #[serde(rename = "sf_detector", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "sf_description", default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Milliseconds
    #[serde(rename = "sf_jobMaxDelay")]
    pub job_max_delay: Option<i64>,
    #[serde(rename = "sf_programText", default, deserialize_with = "null_as_default")]
    pub program_text: String,
    #[serde(rename = "sf_rules", default, deserialize_with = "null_as_default")]
    pub rules: Vec<RuleV1>,
}

/// A legacy detector rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleV1 {
    #[serde(default, deserialize_with = "null_as_default")]
    pub detect_label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub disabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notifications: Vec<LegacyNotification>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameterized: String,
    /// Human readable rule text
    #[serde(default, deserialize_with = "null_as_default")]
    pub readable: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: String,
}

/// A detector fetched from either API generation
#[derive(Debug, Clone, PartialEq)]
pub enum DetectorRecord {
    Current(Detector),
    Legacy(DetectorV1),
}

impl DetectorRecord {
    /// Source id, whichever generation
    pub fn id(&self) -> &str {
        match self {
            DetectorRecord::Current(d) => &d.id,
            DetectorRecord::Legacy(d) => &d.id,
        }
    }
}

/// Which schema a detector body uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorSchema {
    Current,
    Legacy,
}

impl DetectorSchema {
    /// Classify a raw detector body by its identity keys
    pub fn sniff(body: &serde_json::Value) -> Option<Self> {
        let object = body.as_object()?;
        if object.contains_key("sf_id") || object.contains_key("sf_detector") {
            Some(DetectorSchema::Legacy)
        } else if object.contains_key("id") {
            Some(DetectorSchema::Current)
        } else {
            None
        }
    }
}
