//! Dashboard emitter

use sfx2tf_api::{Chart, ChartDensity, Dashboard, DashboardFilters, TimeFilter};
use sfx2tf_hcl::{Body, Value};
use tracing::{debug, warn};

use crate::{
    convert::string_to_seconds,
    error::{ExportError, Result},
    resource::{EmitContext, ResourceKind},
};

/// Charts already fetched for a dashboard, looked up by id
pub trait ChartLookup {
    fn chart(&self, id: &str) -> Option<&Chart>;
}

impl ChartLookup for [Chart] {
    fn chart(&self, id: &str) -> Option<&Chart> {
        self.iter().find(|chart| chart.id == id)
    }
}

impl ChartLookup for Vec<Chart> {
    fn chart(&self, id: &str) -> Option<&Chart> {
        self.as_slice().chart(id)
    }
}

/// Provider name for a chart density
pub fn charts_resolution(density: Option<ChartDensity>) -> &'static str {
    match density {
        Some(ChartDensity::Low) => "low",
        Some(ChartDensity::High) => "high",
        Some(ChartDensity::Highest) => "highest",
        Some(ChartDensity::Default) | Some(ChartDensity::Unknown) | None => "default",
    }
}

/// Emit the dashboard resource block
///
/// Every placement must name a chart present in `charts`; placements of
/// unsupported chart kinds are left out.
pub fn emit_dashboard<L: ChartLookup + ?Sized>(
    ctx: &EmitContext<'_>,
    dashboard: &Dashboard,
    charts: &L,
) -> Result<sfx2tf_hcl::Block> {
    debug!("Emitting dashboard {}", dashboard.id);
    let mut block = ctx.resource_block(ResourceKind::Dashboard, &dashboard.id);
    let body = block.body_mut();

    body.set_attribute("dashboard_group", dashboard.group_id.as_str())
        .set_attribute("name", ctx.options.display_name(&dashboard.name))
        .set_attribute("description", dashboard.description.as_str())
        .set_attribute("charts_resolution", charts_resolution(dashboard.chart_density));

    let filters = dashboard.filters.clone().unwrap_or_default();
    time(body, filters.time.as_ref());
    sources(body, &filters);
    variables(body, &filters);

    for placement in &dashboard.charts {
        let chart = charts
            .chart(&placement.chart_id)
            .ok_or_else(|| ExportError::MissingChart {
                dashboard: dashboard.id.clone(),
                chart: placement.chart_id.clone(),
            })?;
        let Some(kind) = chart.kind() else {
            warn!(
                "Leaving chart {} of unsupported kind {:?} off dashboard {}",
                chart.id, chart.options.chart_type, dashboard.id
            );
            continue;
        };

        body.append_new_block("chart", vec![])
            .set_traversal("chart_id", ctx.reference(ResourceKind::Chart(kind), &chart.id)?)
            .set_attribute("column", placement.column)
            .set_attribute("row", placement.row)
            .set_attribute("width", placement.width)
            .set_attribute("height", placement.height);
    }

    Ok(block)
}

fn time(body: &mut Body, time: Option<&TimeFilter>) {
    let Some(time) = time else {
        return;
    };
    if time.end == "Now" {
        body.set_attribute("time_range", time.start.as_str());
    } else {
        body.set_attribute("start_time", string_to_seconds(&time.start))
            .set_attribute("end_time", string_to_seconds(&time.end));
    }
}

fn sources(body: &mut Body, filters: &DashboardFilters) {
    for source in &filters.sources {
        body.append_new_block("filter", vec![])
            .set_attribute("property", source.property.as_str())
            .set_attribute("values", Value::string_list(source.value.iter().cloned()))
            .set_attribute("negated", source.not)
            .set_attribute("apply_if_exist", source.apply_if_exists);
    }
}

fn variables(body: &mut Body, filters: &DashboardFilters) {
    for variable in &filters.variables {
        body.append_new_block("variable", vec![])
            .set_attribute("property", variable.property.as_str())
            .set_attribute("description", variable.description.as_str())
            .set_attribute("alias", variable.alias.as_str())
            .set_attribute("value_required", variable.required)
            .set_optional(
                "values",
                variable
                    .value
                    .as_ref()
                    .map(|values| Value::string_list(values.iter().cloned())),
            )
            .set_attribute("replace_only", variable.replace_only)
            .set_attribute("apply_if_exist", variable.apply_if_exists);
    }
}
