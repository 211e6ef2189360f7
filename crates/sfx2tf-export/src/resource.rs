//! Resource naming and the context shared by all emitters

use sfx2tf_api::ChartKind;
use sfx2tf_hcl::{Block, Traversal};

use crate::{
    error::{ExportError, Result},
    palette::{ColorPalettes, PaletteContext},
};

/// Prefix of every emitted block label
pub const LABEL_PREFIX: &str = "sfx-";

/// Default provider namespace
pub const DEFAULT_RESOURCE_PREFIX: &str = "signalfx";

/// Block label for a source id
pub fn label(id: &str) -> String {
    format!("{LABEL_PREFIX}{id}")
}

/// Kinds of emitted resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Chart(ChartKind),
    Dashboard,
    Detector,
}

impl ResourceKind {
    /// Resource type name without the provider namespace
    pub fn type_suffix(&self) -> &'static str {
        match self {
            ResourceKind::Chart(ChartKind::Heatmap) => "heatmap_chart",
            ResourceKind::Chart(ChartKind::SingleValue) => "single_value_chart",
            ResourceKind::Chart(ChartKind::TimeSeriesChart) => "time_chart",
            ResourceKind::Chart(ChartKind::List) => "list_chart",
            ResourceKind::Chart(ChartKind::Text) => "text_chart",
            ResourceKind::Dashboard => "dashboard",
            ResourceKind::Detector => "detector",
        }
    }
}

/// User-tunable export settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Provider namespace for resource types
    pub resource_prefix: String,
    /// Prepended to emitted dashboard and detector names
    pub name_prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            resource_prefix: DEFAULT_RESOURCE_PREFIX.to_string(),
            name_prefix: String::new(),
        }
    }
}

impl ExportOptions {
    /// Set the name prefix
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Set the provider namespace
    pub fn with_resource_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.resource_prefix = prefix.into();
        self
    }

    /// Full resource type, e.g. `signalfx_time_chart`
    pub fn resource_type(&self, kind: ResourceKind) -> String {
        format!("{}_{}", self.resource_prefix, kind.type_suffix())
    }

    /// Display name with the configured prefix
    pub fn display_name(&self, name: &str) -> String {
        format!("{}{}", self.name_prefix, name)
    }
}

/// Read-only state every emitter works from
#[derive(Debug, Clone, Copy)]
pub struct EmitContext<'a> {
    pub palettes: &'a ColorPalettes,
    pub options: &'a ExportOptions,
}

impl<'a> EmitContext<'a> {
    pub fn new(palettes: &'a ColorPalettes, options: &'a ExportOptions) -> Self {
        Self { palettes, options }
    }

    /// Empty `resource "<type>" "sfx-<id>"` block
    pub fn resource_block(&self, kind: ResourceKind, id: &str) -> Block {
        Block::new(
            "resource",
            vec![self.options.resource_type(kind), label(id)],
        )
    }

    /// `<type>.sfx-<id>.id` reference
    pub fn reference(&self, kind: ResourceKind, id: &str) -> Result<Traversal> {
        Ok(Traversal::new([
            self.options.resource_type(kind),
            label(id),
            "id".to_string(),
        ])?)
    }

    /// Resolve a palette index or fail with enough context to find it
    pub fn color(
        &self,
        resource: &str,
        field: &'static str,
        context: PaletteContext,
        index: i32,
    ) -> Result<&'static str> {
        self.palettes
            .resolve(context, index)
            .ok_or_else(|| ExportError::PaletteIndexOutOfRange {
                resource: resource.to_string(),
                field,
                context,
                index,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_types() {
        let options = ExportOptions::default();
        let expected = [
            (ChartKind::Heatmap, "signalfx_heatmap_chart"),
            (ChartKind::SingleValue, "signalfx_single_value_chart"),
            (ChartKind::TimeSeriesChart, "signalfx_time_chart"),
            (ChartKind::List, "signalfx_list_chart"),
            (ChartKind::Text, "signalfx_text_chart"),
        ];
        for (kind, name) in expected {
            assert_eq!(options.resource_type(ResourceKind::Chart(kind)), name);
        }
        assert_eq!(options.resource_type(ResourceKind::Dashboard), "signalfx_dashboard");
        assert_eq!(options.resource_type(ResourceKind::Detector), "signalfx_detector");
    }

    #[test]
    fn test_custom_prefixes() {
        let options = ExportOptions::default()
            .with_resource_prefix("splunk")
            .with_name_prefix("adopted-");
        assert_eq!(options.resource_type(ResourceKind::Detector), "splunk_detector");
        assert_eq!(options.display_name("cpu"), "adopted-cpu");
    }

    #[test]
    fn test_reference() {
        let palettes = ColorPalettes::new();
        let options = ExportOptions::default();
        let ctx = EmitContext::new(&palettes, &options);
        let traversal = ctx
            .reference(ResourceKind::Chart(ChartKind::List), "Ex1")
            .unwrap();
        assert_eq!(traversal.to_string(), "signalfx_list_chart.sfx-Ex1.id");
    }

    #[test]
    fn test_color_error_context() {
        let palettes = ColorPalettes::new();
        let options = ExportOptions::default();
        let ctx = EmitContext::new(&palettes, &options);
        let err = ctx
            .color("sfx-C1", "viz_options", PaletteContext::Visualization, 40)
            .unwrap_err();
        assert!(matches!(
            err,
            ExportError::PaletteIndexOutOfRange { index: 40, field: "viz_options", .. }
        ));
        assert!(err.to_string().contains("sfx-C1"));
    }
}
