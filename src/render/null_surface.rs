use crate::error::{AriaError, AriaResult};
use crate::render::LabelSurface;

/// Headless surface used by tests and server-side rendering.
///
/// It records the last label and rejects empty ones, so callers that
/// forget the "nothing to announce" case fail loudly.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub last_label: Option<String>,
    pub write_count: usize,
}

impl LabelSurface for NullSurface {
    fn set_aria_label(&mut self, label: &str) -> AriaResult<()> {
        if label.is_empty() {
            return Err(AriaError::InvalidData(
                "aria label must not be empty".to_owned(),
            ));
        }
        self.last_label = Some(label.to_owned());
        self.write_count += 1;
        Ok(())
    }
}
