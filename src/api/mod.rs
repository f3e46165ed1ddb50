mod aria_engine;
mod hook_registry;

pub use aria_engine::{AriaEngine, AriaOutcome};
