//! Notification channel formatting
//!
//! The provider takes each notification as one comma-joined string,
//! `Kind,field,field...`. Unknown kinds become `""` so the list keeps
//! its length and order.

use sfx2tf_api::{LegacyNotification, Notification};
use sfx2tf_hcl::Value;
use tracing::warn;

/// Format a v2 notification
pub fn format(notification: &Notification) -> String {
    let Some(kind) = notification.kind() else {
        warn!("Dropping notification of unrecognized kind");
        return String::new();
    };
    join(kind, &fields(notification))
}

/// Channel fields in provider order
fn fields(notification: &Notification) -> Vec<&String> {
    match notification {
        Notification::BigPanda { credential_id }
        | Notification::Office365 { credential_id }
        | Notification::PagerDuty { credential_id }
        | Notification::ServiceNow { credential_id }
        | Notification::XMatters { credential_id } => vec![credential_id],
        Notification::Email { email } => vec![email],
        Notification::Opsgenie {
            credential_id,
            responder_name,
            responder_id,
            responder_type,
        } => vec![credential_id, responder_name, responder_id, responder_type],
        Notification::Slack {
            credential_id,
            channel,
        } => vec![credential_id, channel],
        Notification::Team { team } | Notification::TeamEmail { team } => vec![team],
        Notification::VictorOps {
            credential_id,
            routing_key,
        } => vec![credential_id, routing_key],
        Notification::Webhook {
            credential_id,
            secret,
            url,
        } => vec![credential_id, secret, url],
        Notification::Unknown => Vec::new(),
    }
}

/// Legacy kind names and the output kind plus fields each one carries
const LEGACY_KINDS: [(&str, &str, &[&str]); 12] = [
    ("bigpanda", "BigPanda", &["credentialId"]),
    ("email", "Email", &["email"]),
    ("office365", "Office365", &["credentialId"]),
    (
        "opsgenie",
        "Opsgenie",
        &["credentialId", "responderName", "responderId", "responderType"],
    ),
    ("pagerduty", "PagerDuty", &["credentialId"]),
    ("servicenow", "ServiceNow", &["credentialId"]),
    ("slack", "Slack", &["credentialId", "channel"]),
    ("team", "Team", &["team"]),
    ("teamemail", "TeamEmail", &["team"]),
    ("victorops", "VictorOps", &["credentialId", "routingKey"]),
    ("webhook", "Webhook", &["credentialId", "secret", "url"]),
    ("xmatters", "XMatters", &["credentialId"]),
];

/// Format a legacy (v1) notification map
pub fn format_legacy(notification: &LegacyNotification) -> String {
    let kind = notification.kind();
    match LEGACY_KINDS.iter().find(|(raw, _, _)| *raw == kind) {
        Some((_, name, keys)) => {
            let fields: Vec<String> = keys.iter().map(|key| notification.field(key)).collect();
            let refs: Vec<&String> = fields.iter().collect();
            join(name, &refs)
        }
        None => {
            warn!("Dropping legacy notification of unrecognized kind {:?}", kind);
            String::new()
        }
    }
}

/// Format a v2 notification list as a string-list value
pub fn format_all(notifications: &[Notification]) -> Value {
    Value::string_list(notifications.iter().map(format))
}

/// Format a legacy notification list as a string-list value
pub fn format_all_legacy(notifications: &[LegacyNotification]) -> Value {
    Value::string_list(notifications.iter().map(format_legacy))
}

fn join(kind: &str, fields: &[&String]) -> String {
    let mut out = kind.to_string();
    for field in fields {
        out.push(',');
        out.push_str(field);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Notification {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_slack() {
        let n = decode(json!({"type": "Slack", "credentialId": "abc", "channel": "#ops"}));
        assert_eq!(format(&n), "Slack,abc,#ops");
    }

    #[test]
    fn test_unknown_kind_is_empty() {
        let n = decode(json!({"type": "Carrier Pigeon"}));
        assert_eq!(format(&n), "");

        let list = [n.clone(), decode(json!({"type": "Email", "email": "a@b.c"})), n];
        let formatted = format_all(&list);
        let items = formatted.as_list().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_str(), Some(""));
        assert_eq!(items[1].as_str(), Some("Email,a@b.c"));
    }

    #[test]
    fn test_every_known_kind() {
        let cases = [
            (json!({"type": "BigPanda", "credentialId": "c"}), "BigPanda,c"),
            (json!({"type": "Email", "email": "e@x"}), "Email,e@x"),
            (json!({"type": "Office365", "credentialId": "c"}), "Office365,c"),
            (
                json!({"type": "Opsgenie", "credentialId": "c", "responderName": "n",
                       "responderId": "i", "responderType": "Team"}),
                "Opsgenie,c,n,i,Team",
            ),
            (json!({"type": "PagerDuty", "credentialId": "c"}), "PagerDuty,c"),
            (json!({"type": "ServiceNow", "credentialId": "c"}), "ServiceNow,c"),
            (json!({"type": "Slack", "credentialId": "c", "channel": "ch"}), "Slack,c,ch"),
            (json!({"type": "Team", "team": "t"}), "Team,t"),
            (json!({"type": "TeamEmail", "team": "t"}), "TeamEmail,t"),
            (
                json!({"type": "VictorOps", "credentialId": "c", "routingKey": "r"}),
                "VictorOps,c,r",
            ),
            (
                json!({"type": "Webhook", "credentialId": "c", "secret": "s", "url": "u"}),
                "Webhook,c,s,u",
            ),
            (json!({"type": "XMatters", "credentialId": "c"}), "XMatters,c"),
        ];

        for (raw, expected) in cases {
            let n = decode(raw);
            assert_eq!(n.kind(), expected.split(',').next());
            assert_eq!(format(&n), expected);
        }
    }

    #[test]
    fn test_legacy_kinds() {
        let n: LegacyNotification = [("type", "bigpanda"), ("credentialId", "c")]
            .into_iter()
            .collect();
        assert_eq!(format_legacy(&n), "BigPanda,c");

        let n: LegacyNotification = [
            ("type", "webhook"),
            ("credentialId", "c"),
            ("secret", "s"),
            ("url", "https://hook"),
        ]
        .into_iter()
        .collect();
        assert_eq!(format_legacy(&n), "Webhook,c,s,https://hook");

    }

    #[test]
    fn test_legacy_missing_fields_are_empty() {
        let n: LegacyNotification = [("type", "slack")].into_iter().collect();
        assert_eq!(format_legacy(&n), "Slack,,");
    }

    #[test]
    fn test_legacy_unknown_kind() {
        let n: LegacyNotification = [("type", "fax")].into_iter().collect();
        assert_eq!(format_legacy(&n), "");
        let n: LegacyNotification = [("type", "amazoneventbridge"), ("credentialId", "c")]
            .into_iter()
            .collect();
        assert_eq!(format_legacy(&n), "");
        assert_eq!(format_legacy(&LegacyNotification::default()), "");
    }

    #[test]
    fn test_empty_list_is_empty_list_value() {
        assert_eq!(format_all(&[]).as_list().map(<[Value]>::len), Some(0));
        assert_eq!(format_all_legacy(&[]).as_list().map(<[Value]>::len), Some(0));
    }

    fn notification_strategy() -> impl Strategy<Value = Notification> {
        prop_oneof![
            "[a-z]{1,8}".prop_map(|email| Notification::Email { email }),
            ("[a-z0-9]{1,8}", "#[a-z]{1,8}").prop_map(|(credential_id, channel)| {
                Notification::Slack {
                    credential_id,
                    channel,
                }
            }),
            "[a-z]{1,8}".prop_map(|team| Notification::Team { team }),
            Just(Notification::Unknown),
        ]
    }

    proptest! {
        #[test]
        fn prop_format_all_preserves_length(list in prop::collection::vec(notification_strategy(), 0..16)) {
            let formatted = format_all(&list);
            prop_assert_eq!(formatted.as_list().map(<[Value]>::len), Some(list.len()));
        }
    }
}
