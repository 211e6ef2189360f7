//! Nested blocks shared by several chart kinds

use sfx2tf_api::{ChartOptions, ChartTime, ColorScaleBucket};
use sfx2tf_hcl::{Body, Value};

use crate::{
    convert::ms_to_seconds,
    error::Result,
    palette::PaletteContext,
    resource::EmitContext,
};

/// Color used when a color range has none
pub const DEFAULT_RANGE_COLOR: &str = "#05ce00";

/// Which subset of per-plot attributes a chart kind takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VizStyle {
    /// Time series charts: axis and plot type too
    Full,
    /// Single value and list charts
    Short,
}

/// Group-by dimensions, always a list
pub fn group_by(options: &ChartOptions) -> Value {
    match &options.group_by {
        Some(dimensions) => Value::string_list(dimensions.iter().cloned()),
        None => Value::empty_list(),
    }
}

/// `color_range` block, only when coloring by range
pub fn color_range(body: &mut Body, options: &ChartOptions) {
    if !options.colors_by_range() {
        return;
    }
    let range = options.color_range.clone().unwrap_or_default();
    let color = range
        .color
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_RANGE_COLOR.to_string());

    body.append_new_block("color_range", vec![])
        .set_attribute("color", color)
        .set_attribute("min_value", range.min)
        .set_attribute("max_value", range.max);
}

/// One `color_scale` block per bucket, only when coloring by scale
pub fn color_scale(
    ctx: &EmitContext<'_>,
    resource: &str,
    body: &mut Body,
    options: &ChartOptions,
    context: PaletteContext,
) -> Result<()> {
    if !options.colors_by_scale() {
        return Ok(());
    }
    for bucket in &options.color_scale2 {
        let scale = color_scale_bucket(ctx, resource, bucket, context)?;
        body.append_block(scale);
    }
    Ok(())
}

fn color_scale_bucket(
    ctx: &EmitContext<'_>,
    resource: &str,
    bucket: &ColorScaleBucket,
    context: PaletteContext,
) -> Result<sfx2tf_hcl::Block> {
    let mut block = sfx2tf_hcl::Block::new("color_scale", vec![]);
    let body = block.body_mut();
    body.set_optional("gt", bucket.gt)
        .set_optional("gte", bucket.gte)
        .set_optional("lt", bucket.lt)
        .set_optional("lte", bucket.lte);

    if bucket.has_bounds() {
        if let Some(index) = bucket.palette_index {
            body.set_attribute("color", ctx.color(resource, "color_scale", context, index)?);
        }
    }
    Ok(block)
}

/// One `legend_options_fields` block per configured field
pub fn legend_fields(body: &mut Body, options: &ChartOptions) {
    let Some(legend) = &options.legend_options else {
        return;
    };
    for field in &legend.fields {
        body.append_new_block("legend_options_fields", vec![])
            .set_attribute("property", field.property.as_str())
            .set_attribute("enabled", field.enabled);
    }
}

/// One `viz_options` block per published plot
pub fn viz_options(
    ctx: &EmitContext<'_>,
    resource: &str,
    body: &mut Body,
    options: &ChartOptions,
    style: VizStyle,
) -> Result<()> {
    for plot in &options.publish_label_options {
        let mut block = sfx2tf_hcl::Block::new("viz_options", vec![]);
        let viz = block.body_mut();
        viz.set_attribute("display_name", plot.display_name.as_str())
            .set_attribute("label", plot.label.as_str());

        if let Some(index) = plot.palette_index {
            viz.set_attribute(
                "color",
                ctx.color(resource, "viz_options", PaletteContext::Visualization, index)?,
            );
        }
        if style == VizStyle::Full {
            if plot.y_axis != 0 {
                viz.set_attribute("axis", "right");
            }
            if !plot.plot_type.is_empty() {
                viz.set_attribute("plot_type", plot.plot_type.as_str());
            }
        }
        if !plot.value_unit.is_empty() {
            viz.set_attribute("value_unit", plot.value_unit.as_str());
        }
        viz.set_attribute("value_prefix", plot.value_prefix.as_str())
            .set_attribute("value_suffix", plot.value_suffix.as_str());

        body.append_block(block);
    }
    Ok(())
}

/// One `event_options` block per published event stream
pub fn event_options(
    ctx: &EmitContext<'_>,
    resource: &str,
    body: &mut Body,
    options: &ChartOptions,
) -> Result<()> {
    for event in &options.event_publish_label_options {
        let mut block = sfx2tf_hcl::Block::new("event_options", vec![]);
        let opts = block.body_mut();
        opts.set_attribute("display_name", event.display_name.as_str())
            .set_attribute("label", event.label.as_str());
        if let Some(index) = event.palette_index {
            opts.set_attribute(
                "color",
                ctx.color(resource, "event_options", PaletteContext::Visualization, index)?,
            );
        }
        body.append_block(block);
    }
    Ok(())
}

/// `histogram_options` block when the chart has histogram settings
pub fn histogram_options(
    ctx: &EmitContext<'_>,
    resource: &str,
    body: &mut Body,
    options: &ChartOptions,
) -> Result<()> {
    let Some(histogram) = &options.histogram_chart_options else {
        return Ok(());
    };
    let mut block = sfx2tf_hcl::Block::new("histogram_options", vec![]);
    if let Some(index) = histogram.color_theme_index {
        block.body_mut().set_attribute(
            "color_theme",
            ctx.color(resource, "histogram_options", PaletteContext::Heatmap, index)?,
        );
    }
    body.append_block(block);
    Ok(())
}

/// `time_range` for relative windows, `start_time`/`end_time` for absolute ones
pub fn time_range(body: &mut Body, time: Option<&ChartTime>) {
    let Some(time) = time else {
        return;
    };
    match time.time_type.as_str() {
        "relative" => {
            body.set_optional("time_range", time.range.map(ms_to_seconds));
        }
        "absolute" => {
            body.set_optional("start_time", time.start.map(ms_to_seconds))
                .set_optional("end_time", time.end.map(ms_to_seconds));
        }
        _ => {}
    }
}
