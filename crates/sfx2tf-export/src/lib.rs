//! SignalFx to Terraform export
//!
//! Reads dashboards, charts and detectors through [`sfx2tf_api::SignalFxApi`]
//! and writes equivalent `signalfx_*` resource blocks as an HCL
//! [`Document`](sfx2tf_hcl::Document).
//!
//! ```text
//! Exporter ──fetch──▶ SignalFxApi
//!    │
//!    └─emit──▶ charts / dashboard / detector ──▶ blocks, convert, palette, notification
//! ```
//!
//! Emitters are synchronous and pure: the same input always yields the same
//! block. Palette lookups outside a known table abort the export with
//! [`ExportError::PaletteIndexOutOfRange`] rather than guessing a color.

pub mod convert;
pub mod emit;
pub mod error;
pub mod exporter;
pub mod notification;
pub mod palette;
pub mod resource;

pub use emit::{emit_chart, emit_dashboard, emit_detector, emit_legacy_detector, ChartLookup};
pub use error::{ExportError, Result};
pub use exporter::Exporter;
pub use palette::{ColorPalettes, Palette, PaletteContext};
pub use resource::{label, EmitContext, ExportOptions, ResourceKind};
