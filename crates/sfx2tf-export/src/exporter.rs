//! Export driver: fetch, emit, assemble

use std::{collections::HashSet, sync::Arc};

use sfx2tf_api::{Chart, DetectorRecord, SignalFxApi};
use sfx2tf_hcl::{Block, Document};
use tracing::{info, warn};

use crate::{
    emit::{emit_chart, emit_dashboard, emit_detector, emit_legacy_detector},
    error::{ExportError, Result},
    palette::ColorPalettes,
    resource::{EmitContext, ExportOptions},
};

/// Turns SignalFx resources into a Terraform document
///
/// Each export call builds every block first and only then assembles the
/// document, so a failure leaves no partial output behind.
pub struct Exporter {
    api: Arc<dyn SignalFxApi>,
    options: ExportOptions,
    palettes: ColorPalettes,
}

impl Exporter {
    /// Create an exporter over an API client
    pub fn new(api: Arc<dyn SignalFxApi>, options: ExportOptions) -> Self {
        Self {
            api,
            options,
            palettes: ColorPalettes::new(),
        }
    }

    /// Export options in use
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    fn context(&self) -> EmitContext<'_> {
        EmitContext::new(&self.palettes, &self.options)
    }

    /// Export a dashboard followed by every chart it places, in placement order
    pub async fn export_dashboard(&self, id: &str) -> Result<Document> {
        info!("Exporting dashboard {}", id);
        let dashboard = self
            .api
            .dashboard(id)
            .await
            .map_err(|e| ExportError::fetch("dashboard", id, e))?;

        let charts = self.fetch_charts(&dashboard.charts).await?;
        let ctx = self.context();

        let mut blocks = vec![emit_dashboard(&ctx, &dashboard, &charts)?];
        for chart in &charts {
            if chart.kind().is_none() {
                warn!(
                    "Skipping chart {} of unsupported kind {:?}",
                    chart.id, chart.options.chart_type
                );
                continue;
            }
            blocks.push(emit_chart(&ctx, chart)?);
        }

        Ok(assemble(blocks))
    }

    /// Export a single chart
    pub async fn export_chart(&self, id: &str) -> Result<Document> {
        info!("Exporting chart {}", id);
        let chart = self
            .api
            .chart(id)
            .await
            .map_err(|e| ExportError::fetch("chart", id, e))?;
        Ok(assemble(vec![emit_chart(&self.context(), &chart)?]))
    }

    /// Export a detector from whichever schema generation holds it
    pub async fn export_detector(&self, id: &str) -> Result<Document> {
        info!("Exporting detector {}", id);
        let record = self
            .api
            .detector(id)
            .await
            .map_err(|e| ExportError::fetch("detector", id, e))?;

        let ctx = self.context();
        let block = match &record {
            DetectorRecord::Current(detector) => emit_detector(&ctx, detector),
            DetectorRecord::Legacy(detector) => {
                info!("Detector {} uses the legacy schema", id);
                emit_legacy_detector(&ctx, detector)
            }
        };
        Ok(assemble(vec![block]))
    }

    async fn fetch_charts(&self, placements: &[sfx2tf_api::ChartPlacement]) -> Result<Vec<Chart>> {
        let mut seen = HashSet::new();
        let mut charts = Vec::new();
        for placement in placements {
            if !seen.insert(placement.chart_id.as_str()) {
                continue;
            }
            let chart = self
                .api
                .chart(&placement.chart_id)
                .await
                .map_err(|e| ExportError::fetch("chart", &placement.chart_id, e))?;
            charts.push(chart);
        }
        Ok(charts)
    }
}

fn assemble(blocks: Vec<Block>) -> Document {
    let mut document = Document::new();
    for block in blocks {
        document.append_block(block);
    }
    document
}
