use crate::error::{AriaError, AriaResult};
use crate::extensions::AriaHook;
use crate::render::LabelSurface;

use super::AriaEngine;

impl<S: LabelSurface> AriaEngine<S> {
    /// Registers a diagnostic hook. Ids must be non-empty and unique.
    pub fn register_hook(&mut self, hook: Box<dyn AriaHook>) -> AriaResult<()> {
        let hook_id = hook.id().to_owned();
        if hook_id.is_empty() {
            return Err(AriaError::InvalidData(
                "hook id must not be empty".to_owned(),
            ));
        }
        if self.has_hook(&hook_id) {
            return Err(AriaError::InvalidData(format!(
                "hook with id `{hook_id}` is already registered"
            )));
        }
        self.hooks.push(hook);
        Ok(())
    }

    /// Removes the hook with `hook_id`; returns whether one was removed.
    pub fn unregister_hook(&mut self, hook_id: &str) -> bool {
        if let Some(position) = self.hooks.iter().position(|entry| entry.id() == hook_id) {
            self.hooks.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    #[must_use]
    pub fn has_hook(&self, hook_id: &str) -> bool {
        self.hooks.iter().any(|hook| hook.id() == hook_id)
    }
}
