//! Detector emitters for both schema generations

use sfx2tf_api::{Detector, DetectorV1, Rule, RuleV1};
use sfx2tf_hcl::{Block, Body};
use tracing::debug;

use crate::{
    convert::optional_ms_to_seconds,
    notification,
    resource::{EmitContext, ResourceKind},
};

/// Emit a current-generation detector
pub fn emit_detector(ctx: &EmitContext<'_>, detector: &Detector) -> Block {
    debug!("Emitting detector {}", detector.id);
    let mut block = ctx.resource_block(ResourceKind::Detector, &detector.id);
    let body = block.body_mut();

    body.set_attribute("name", ctx.options.display_name(&detector.name))
        .set_attribute("description", detector.description.as_str());
    if !detector.teams.is_empty() {
        body.set_attribute(
            "teams",
            sfx2tf_hcl::Value::string_list(detector.teams.iter().cloned()),
        );
    }
    body.set_attribute("max_delay", optional_ms_to_seconds(detector.max_delay))
        .set_heredoc("program_text", detector.program_text.as_str());

    for rule in &detector.rules {
        emit_rule(body.append_new_block("rule", vec![]), rule);
    }
    block
}

fn emit_rule(body: &mut Body, rule: &Rule) {
    body.set_attribute("description", rule.description.as_str())
        .set_attribute("severity", rule.severity.as_str())
        .set_attribute("detect_label", rule.detect_label.as_str());
    if rule.disabled {
        body.set_attribute("disabled", true);
    }
    body.set_optional("parameterized_body", rule.parameterized_body.as_deref())
        .set_optional("parameterized_subject", rule.parameterized_subject.as_deref())
        .set_optional("runbook_url", non_empty(&rule.runbook_url))
        .set_optional("tip", non_empty(&rule.tip))
        .set_attribute("notifications", notification::format_all(&rule.notifications));
}

/// Emit a legacy (v1) detector
pub fn emit_legacy_detector(ctx: &EmitContext<'_>, detector: &DetectorV1) -> Block {
    debug!("Emitting legacy detector {}", detector.id);
    let mut block = ctx.resource_block(ResourceKind::Detector, &detector.id);
    let body = block.body_mut();

    body.set_attribute("name", ctx.options.display_name(&detector.name))
        .set_attribute("description", detector.description.as_str())
        .set_attribute("max_delay", optional_ms_to_seconds(detector.job_max_delay))
        .set_heredoc("program_text", detector.program_text.as_str());

    for rule in &detector.rules {
        emit_legacy_rule(body.append_new_block("rule", vec![]), rule);
    }
    block
}

fn emit_legacy_rule(body: &mut Body, rule: &RuleV1) {
    body.set_attribute("severity", rule.severity.as_str())
        .set_attribute("detect_label", rule.detect_label.as_str())
        .set_attribute("description", rule.readable.as_str())
        .set_attribute(
            "notifications",
            notification::format_all_legacy(&rule.notifications),
        );
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{palette::ColorPalettes, resource::ExportOptions};
    use serde_json::json;
    use sfx2tf_hcl::Value;

    fn ctx_options() -> (ColorPalettes, ExportOptions) {
        (ColorPalettes::new(), ExportOptions::default().with_name_prefix("tf-"))
    }

    fn value<'a>(body: &'a Body, key: &str) -> Option<&'a Value> {
        body.attribute(key).and_then(|e| e.as_value())
    }

    #[test]
    fn test_current_detector() {
        let detector: Detector = serde_json::from_value(json!({
            "id": "X1",
            "name": "cpu",
            "maxDelay": 30500,
            "programText": "detect(when(A > 90)).publish('cpu')",
            "rules": [{
                "detectLabel": "cpu",
                "severity": "Critical",
                "runbookUrl": "",
                "tip": "scale out",
                "notifications": [
                    {"type": "Slack", "credentialId": "abc", "channel": "#ops"},
                    {"type": "Carrier Pigeon"}
                ]
            }]
        }))
        .unwrap();

        let (palettes, options) = ctx_options();
        let block = emit_detector(&EmitContext::new(&palettes, &options), &detector);
        assert_eq!(block.labels()[0], "signalfx_detector");
        assert_eq!(block.labels()[1], "sfx-X1");

        let body = block.body();
        assert_eq!(value(body, "name"), Some(&Value::from("tf-cpu")));
        assert_eq!(value(body, "max_delay"), Some(&Value::Int(30)));
        assert!(!body.has_attribute("teams"));

        let rule = body.blocks_of_type("rule").next().unwrap();
        assert_eq!(
            rule.body().attribute_keys(),
            vec!["description", "severity", "detect_label", "tip", "notifications"]
        );
        assert_eq!(
            value(rule.body(), "notifications"),
            Some(&Value::string_list(["Slack,abc,#ops", ""]))
        );
    }

    #[test]
    fn test_rule_flags() {
        let detector: Detector = serde_json::from_value(json!({
            "id": "X2",
            "teams": ["T1"],
            "rules": [{"severity": "Bogus", "disabled": true, "notifications": []}]
        }))
        .unwrap();

        let (palettes, options) = ctx_options();
        let block = emit_detector(&EmitContext::new(&palettes, &options), &detector);
        assert_eq!(value(block.body(), "teams"), Some(&Value::string_list(["T1"])));
        assert_eq!(value(block.body(), "max_delay"), Some(&Value::Int(0)));

        let rule = block.body().blocks_of_type("rule").next().unwrap();
        assert_eq!(value(rule.body(), "severity"), Some(&Value::from("Info")));
        assert_eq!(value(rule.body(), "disabled"), Some(&Value::Bool(true)));
        assert_eq!(value(rule.body(), "notifications"), Some(&Value::empty_list()));
    }

    #[test]
    fn test_legacy_detector() {
        let detector: DetectorV1 = serde_json::from_value(json!({
            "sf_id": "L1",
            "sf_detector": "old cpu",
            "sf_description": "legacy",
            "sf_jobMaxDelay": 60000,
            "sf_programText": "detect(when(A > 1))",
            "sf_rules": [{
                "detectLabel": "cpu",
                "severity": "Major",
                "readable": "CPU above 1",
                "notifications": [{"type": "slack", "credentialId": "c", "channel": "#x"}]
            }]
        }))
        .unwrap();

        let (palettes, options) = ctx_options();
        let block = emit_legacy_detector(&EmitContext::new(&palettes, &options), &detector);
        assert_eq!(block.labels()[1], "sfx-L1");

        let body = block.body();
        assert_eq!(value(body, "name"), Some(&Value::from("tf-old cpu")));
        assert_eq!(value(body, "max_delay"), Some(&Value::Int(60)));

        let rule = body.blocks_of_type("rule").next().unwrap();
        assert_eq!(value(rule.body(), "description"), Some(&Value::from("CPU above 1")));
        assert_eq!(
            value(rule.body(), "notifications"),
            Some(&Value::string_list(["Slack,c,#x"]))
        );
    }
}
