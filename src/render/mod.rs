mod null_surface;

pub use null_surface::NullSurface;

use crate::error::AriaResult;

/// Rendering surface that exposes a settable accessibility label.
///
/// Backends bind this to whatever attribute their platform reads
/// (`aria-label` on a DOM node, an accessible name on a native widget).
pub trait LabelSurface {
    fn set_aria_label(&mut self, label: &str) -> AriaResult<()>;
}
