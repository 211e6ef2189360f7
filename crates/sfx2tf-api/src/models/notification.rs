//! Detector notification channels

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A notification channel attached to a detector rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Notification {
    BigPanda {
        #[serde(default, deserialize_with = "null_as_default")]
        credential_id: String,
    },
    Email {
        #[serde(default, deserialize_with = "null_as_default")]
        email: String,
    },
    Office365 {
        #[serde(default, deserialize_with = "null_as_default")]
        credential_id: String,
    },
    Opsgenie {
        #[serde(default, deserialize_with = "null_as_default")]
        credential_id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        responder_name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        responder_id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        responder_type: String,
    },
    PagerDuty {
        #[serde(default, deserialize_with = "null_as_default")]
        credential_id: String,
    },
    ServiceNow {
        #[serde(default, deserialize_with = "null_as_default")]
        credential_id: String,
    },
    Slack {
        #[serde(default, deserialize_with = "null_as_default")]
        credential_id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        channel: String,
    },
    Team {
        #[serde(default, deserialize_with = "null_as_default")]
        team: String,
    },
    TeamEmail {
        #[serde(default, deserialize_with = "null_as_default")]
        team: String,
    },
    VictorOps {
        #[serde(default, deserialize_with = "null_as_default")]
        credential_id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        routing_key: String,
    },
    Webhook {
        #[serde(default, deserialize_with = "null_as_default")]
        credential_id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        secret: String,
        #[serde(default, deserialize_with = "null_as_default")]
        url: String,
    },
    XMatters {
        #[serde(default, deserialize_with = "null_as_default")]
        credential_id: String,
    },
    /// Any channel kind this tool does not know about
    #[serde(other)]
    Unknown,
}

impl Notification {
    /// Channel kind name, `None` for unknown kinds
    pub fn kind(&self) -> Option<&'static str> {
        Some(match self {
            Notification::BigPanda { .. } => "BigPanda",
            Notification::Email { .. } => "Email",
            Notification::Office365 { .. } => "Office365",
            Notification::Opsgenie { .. } => "Opsgenie",
            Notification::PagerDuty { .. } => "PagerDuty",
            Notification::ServiceNow { .. } => "ServiceNow",
            Notification::Slack { .. } => "Slack",
            Notification::Team { .. } => "Team",
            Notification::TeamEmail { .. } => "TeamEmail",
            Notification::VictorOps { .. } => "VictorOps",
            Notification::Webhook { .. } => "Webhook",
            Notification::XMatters { .. } => "XMatters",
            Notification::Unknown => return None,
        })
    }
}

/// A legacy (v1) notification: an untyped map with a lower-case `type`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegacyNotification(pub BTreeMap<String, serde_json::Value>);

impl LegacyNotification {
    /// The `type` discriminator, empty when missing
    pub fn kind(&self) -> String {
        self.field("type")
    }

    /// A field rendered as text; missing or structured values give `""`
    pub fn field(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            Some(serde_json::Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LegacyNotification {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), serde_json::Value::String(v.into())))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_slack() {
        let n: Notification =
            serde_json::from_str(r##"{"type": "Slack", "credentialId": "abc", "channel": "#ops"}"##)
                .unwrap();
        assert_eq!(
            n,
            Notification::Slack {
                credential_id: "abc".into(),
                channel: "#ops".into()
            }
        );
        assert_eq!(n.kind(), Some("Slack"));
    }

    #[test]
    fn test_decode_unknown_kind() {
        let n: Notification =
            serde_json::from_str(r#"{"type": "Carrier Pigeon", "loft": "north"}"#).unwrap();
        assert_eq!(n, Notification::Unknown);
        assert_eq!(n.kind(), None);
    }

    #[test]
    fn test_legacy_fields() {
        let n: LegacyNotification = serde_json::from_str(
            r#"{"type": "victorops", "credentialId": "c1", "routingKey": "rk", "priority": 2}"#,
        )
        .unwrap();
        assert_eq!(n.kind(), "victorops");
        assert_eq!(n.field("routingKey"), "rk");
        assert_eq!(n.field("priority"), "2");
        assert_eq!(n.field("missing"), "");
    }
}
