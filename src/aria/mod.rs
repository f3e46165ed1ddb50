//! Accessibility pipeline: template resolution, interpolation, decal
//! assignment and label synthesis.

pub mod config;
pub mod decal;
pub mod interpolate;
pub mod label;
pub mod locale;
pub mod resolver;
pub mod tree;

pub use config::{AriaConfig, DecalConfig, LabelConfig};
pub use decal::{
    DecalAssignment, DecalPalette, DefaultDecalPalette, PaletteScope, assign_decals,
    builtin_decals,
};
pub use interpolate::{Bindings, interpolate, interpolate_str};
pub use label::{AriaLabel, LabelSource, SeriesDescription, synthesize};
pub use locale::{FALLBACK_SERIES_TYPE_NAME, LocaleRegistry, LocaleResource};
pub use resolver::{DEFAULT_MAX_COUNT, Template, TemplateResolver};
pub use tree::ConfigNode;
