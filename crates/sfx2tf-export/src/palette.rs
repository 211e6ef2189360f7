//! Color palettes
//!
//! The API stores colors as small palette indices. The provider wants color
//! names, and which name an index means depends on where it is used, so
//! there is one table per context. Duplicate names within a table match
//! what the product itself does.

use std::fmt;

/// Where a palette index is being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteContext {
    /// Color-scale thresholds on single value and list charts
    Threshold,
    /// Per-plot and per-event options
    Visualization,
    /// Heatmap color scales and histogram themes
    Heatmap,
}

impl fmt::Display for PaletteContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaletteContext::Threshold => "threshold",
            PaletteContext::Visualization => "visualization",
            PaletteContext::Heatmap => "heatmap",
        })
    }
}

const THRESHOLD: [&str; 22] = [
    "gray", "blue", "azure", "navy", "brown", "orange", "yellow", "magenta", "purple", "pink",
    "violet", "lilac", "iris", "emerald", "green", "aquamarine", "red", "yellow", "yellow",
    "green", "green", "gray",
];

const VISUALIZATION: [&str; 21] = [
    "gray", "blue", "azure", "navy", "brown", "orange", "yellow", "pink", "magenta", "iris",
    "purple", "violet", "lilac", "emerald", "green", "aquamarine", "red", "gold", "greenyellow",
    "chartreuse", "jade",
];

const HEATMAP: [&str; 21] = [
    "gray", "blue", "azure", "navy", "brown", "orange", "yellow", "iris", "magenta", "pink",
    "purple", "violet", "lilac", "emerald", "green", "aquamarine", "red", "gold", "greenyellow",
    "chartreuse", "jade",
];

/// One ordered index-to-name table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    names: &'static [&'static str],
}

impl Palette {
    /// Color name at `index`, `None` when out of range
    pub fn get(&self, index: i32) -> Option<&'static str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.names.get(i))
            .copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The full set of palettes, built once and shared read-only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalettes {
    threshold: Palette,
    visualization: Palette,
    heatmap: Palette,
}

impl Default for ColorPalettes {
    fn default() -> Self {
        Self {
            threshold: Palette { names: &THRESHOLD },
            visualization: Palette { names: &VISUALIZATION },
            heatmap: Palette { names: &HEATMAP },
        }
    }
}

impl ColorPalettes {
    /// The product's palettes
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette for a context
    pub fn palette(&self, context: PaletteContext) -> Palette {
        match context {
            PaletteContext::Threshold => self.threshold,
            PaletteContext::Visualization => self.visualization,
            PaletteContext::Heatmap => self.heatmap,
        }
    }

    /// Resolve an index to a color name
    pub fn resolve(&self, context: PaletteContext, index: i32) -> Option<&'static str> {
        self.palette(context).get(index)
    }
}
