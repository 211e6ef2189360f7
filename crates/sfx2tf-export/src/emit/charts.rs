//! Chart emitters, one per chart kind
//!
//! Each emitter reads only the options its kind uses and returns a finished
//! block; nothing reaches the document unless the whole block was built.

use sfx2tf_api::{Chart, ChartKind};
use sfx2tf_hcl::{Block, Body};
use tracing::debug;

use super::blocks::{self, VizStyle};
use crate::{
    convert,
    error::{ExportError, Result},
    palette::PaletteContext,
    resource::{label, EmitContext, ResourceKind},
};

/// Emit the resource block for a chart of any supported kind
pub fn emit_chart(ctx: &EmitContext<'_>, chart: &Chart) -> Result<Block> {
    let kind = chart
        .kind()
        .ok_or_else(|| ExportError::UnsupportedChartKind {
            id: chart.id.clone(),
            kind: chart.options.chart_type.clone(),
        })?;
    debug!("Emitting {} chart {}", kind, chart.id);

    let mut block = ctx.resource_block(ResourceKind::Chart(kind), &chart.id);
    let resource = label(&chart.id);
    let body = block.body_mut();
    match kind {
        ChartKind::Heatmap => heatmap(ctx, &resource, body, chart)?,
        ChartKind::SingleValue => single_value(ctx, &resource, body, chart)?,
        ChartKind::TimeSeriesChart => time_series(ctx, &resource, body, chart)?,
        ChartKind::List => list(ctx, &resource, body, chart)?,
        ChartKind::Text => text(body, chart),
    }
    Ok(block)
}

fn heatmap(ctx: &EmitContext<'_>, resource: &str, body: &mut Body, chart: &Chart) -> Result<()> {
    let options = &chart.options;
    body.set_attribute("name", chart.name.as_str())
        .set_attribute("description", chart.description.as_str())
        .set_heredoc("program_text", chart.program_text.as_str())
        .set_optional("unit_prefix", options.unit_prefix.as_deref())
        .set_attribute("max_delay", convert::max_delay(options))
        .set_attribute("group_by", blocks::group_by(options));
    blocks::color_range(body, options);
    blocks::color_scale(ctx, resource, body, options, PaletteContext::Heatmap)?;
    body.set_attribute("minimum_resolution", convert::min_resolution(options))
        .set_attribute("disable_sampling", convert::disable_sampling(options))
        .set_attribute("refresh_interval", convert::refresh_interval(options));
    Ok(())
}

fn single_value(
    ctx: &EmitContext<'_>,
    resource: &str,
    body: &mut Body,
    chart: &Chart,
) -> Result<()> {
    let options = &chart.options;
    body.set_attribute("name", chart.name.as_str())
        .set_attribute("description", chart.description.as_str())
        .set_heredoc("program_text", chart.program_text.as_str())
        .set_optional("unit_prefix", options.unit_prefix.as_deref())
        .set_attribute("max_delay", convert::max_delay(options))
        .set_optional("color_by", options.color_by.as_deref());
    blocks::color_scale(ctx, resource, body, options, PaletteContext::Threshold)?;
    body.set_attribute("refresh_interval", convert::refresh_interval(options));
    blocks::viz_options(ctx, resource, body, options, VizStyle::Short)?;
    body.set_optional(
        "secondary_visualization",
        options.secondary_visualization.as_deref(),
    );
    Ok(())
}

fn time_series(
    ctx: &EmitContext<'_>,
    resource: &str,
    body: &mut Body,
    chart: &Chart,
) -> Result<()> {
    let options = &chart.options;
    body.set_attribute("name", chart.name.as_str())
        .set_attribute("description", chart.description.as_str())
        .set_optional("plot_type", options.default_plot_type.as_deref())
        .set_attribute("stacked", options.stacked)
        .set_attribute("axes_include_zero", options.include_zero);
    blocks::histogram_options(ctx, resource, body, options)?;
    blocks::legend_fields(body, options);
    blocks::viz_options(ctx, resource, body, options, VizStyle::Full)?;
    blocks::event_options(ctx, resource, body, options)?;
    body.set_heredoc("program_text", chart.program_text.as_str())
        .set_attribute("disable_sampling", convert::disable_sampling(options))
        .set_attribute("minimum_resolution", convert::min_resolution(options))
        .set_optional("unit_prefix", options.unit_prefix.as_deref())
        .set_attribute("max_delay", convert::max_delay(options))
        .set_optional("color_by", options.color_by.as_deref())
        .set_attribute(
            "on_chart_legend_dimension",
            convert::on_chart_legend_dimension(options.on_chart_legend_options.as_ref()),
        );
    blocks::time_range(body, options.time.as_ref());
    Ok(())
}

fn list(ctx: &EmitContext<'_>, resource: &str, body: &mut Body, chart: &Chart) -> Result<()> {
    let options = &chart.options;
    body.set_attribute("name", chart.name.as_str())
        .set_attribute("description", chart.description.as_str())
        .set_heredoc("program_text", chart.program_text.as_str())
        .set_attribute("disable_sampling", convert::disable_sampling(options))
        .set_optional("unit_prefix", options.unit_prefix.as_deref());
    blocks::color_range(body, options);
    body.set_optional("color_by", options.color_by.as_deref());
    blocks::color_scale(ctx, resource, body, options, PaletteContext::Threshold)?;
    body.set_attribute("max_delay", convert::max_delay(options))
        .set_attribute("refresh_interval", convert::refresh_interval(options));
    blocks::legend_fields(body, options);
    blocks::viz_options(ctx, resource, body, options, VizStyle::Short)?;
    body.set_optional(
        "secondary_visualization",
        options.secondary_visualization.as_deref(),
    );
    Ok(())
}

fn text(body: &mut Body, chart: &Chart) {
    body.set_attribute("name", chart.name.as_str())
        .set_attribute("description", chart.description.as_str())
        .set_attribute(
            "markdown",
            chart.options.markdown.as_deref().unwrap_or_default(),
        );
}
