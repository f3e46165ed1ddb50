use serde::{Deserialize, Serialize};

use crate::core::SeriesData;

/// One data series as seen by the accessibility pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesModel {
    #[serde(default)]
    pub series_index: usize,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub sub_type: String,
    /// Assign palette entries per data item instead of per series (pie, funnel, ...).
    #[serde(default)]
    pub use_color_palette_on_data: bool,
    /// Hidden from the current view, e.g. toggled off in a legend.
    #[serde(default)]
    pub filtered: bool,
    #[serde(default)]
    pub data: SeriesData,
}

impl SeriesModel {
    #[must_use]
    pub fn new(sub_type: impl Into<String>, data: SeriesData) -> Self {
        Self {
            series_index: 0,
            name: None,
            sub_type: sub_type.into(),
            use_color_palette_on_data: false,
            filtered: false,
            data,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_color_palette_on_data(mut self, enabled: bool) -> Self {
        self.use_color_palette_on_data = enabled;
        self
    }

    #[must_use]
    pub fn with_filtered(mut self, filtered: bool) -> Self {
        self.filtered = filtered;
        self
    }

    /// Declared name, treating an empty name as absent.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
