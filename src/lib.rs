//! chart-aria: accessibility descriptions and decal patterns for charts.
//!
//! The crate turns a chart read model into a screen-reader description
//! (user templates falling back to locale defaults, bounded previews of
//! series and data) and assigns decal textures so series stay
//! distinguishable without colour.

pub mod api;
pub mod aria;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{AriaEngine, AriaOutcome};
pub use aria::{AriaConfig, LabelConfig, LocaleRegistry, LocaleResource};
pub use error::{AriaError, AriaResult};
