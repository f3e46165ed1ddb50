//! Observer hooks around the accessibility pipeline.

pub mod hooks;

pub use hooks::{AriaEvent, AriaHook, SuppressReason};
