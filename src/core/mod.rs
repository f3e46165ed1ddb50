//! Chart read model consumed by the accessibility pipeline.

pub mod chart;
pub mod data;
pub mod decal_style;
pub mod series;
pub mod types;

pub use chart::{ChartModel, DEFAULT_LOCALE, TitleBlock};
pub use data::{SeriesData, VisualStyle};
pub use decal_style::DecalStyle;
pub use series::SeriesModel;
pub use types::{DataItem, RawValue, format_number};
