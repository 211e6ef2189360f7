//! Export error types

use sfx2tf_api::ApiError;
use sfx2tf_hcl::HclError;
use thiserror::Error;

use crate::palette::PaletteContext;

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that abort an export run
#[derive(Debug, Error)]
pub enum ExportError {
    /// A required resource could not be fetched
    #[error("Failed to fetch {resource} {id}: {source}")]
    Fetch {
        resource: &'static str,
        id: String,
        #[source]
        source: ApiError,
    },

    /// A palette index outside the known table
    #[error("{resource}: {field} uses color index {index}, outside the {context} palette")]
    PaletteIndexOutOfRange {
        resource: String,
        field: &'static str,
        context: PaletteContext,
        index: i32,
    },

    /// Chart kind the exporter cannot emit
    #[error("Chart {id} has unsupported kind {kind:?}")]
    UnsupportedChartKind { id: String, kind: String },

    /// A dashboard placement references a chart that was not fetched
    #[error("Dashboard {dashboard} places chart {chart}, which was not fetched")]
    MissingChart { dashboard: String, chart: String },

    /// Document construction or serialization failed
    #[error("Failed to render document: {0}")]
    Render(#[from] HclError),
}

impl ExportError {
    pub(crate) fn fetch(resource: &'static str, id: &str, source: ApiError) -> Self {
        ExportError::Fetch {
            resource,
            id: id.to_string(),
            source,
        }
    }
}
