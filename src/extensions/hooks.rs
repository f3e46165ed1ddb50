use serde::{Deserialize, Serialize};

/// Why a pass produced no label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuppressReason {
    /// `aria.show` is off.
    AriaDisabled,
    /// `aria.label.enabled` is off.
    LabelDisabled,
    /// The chart has no series to announce.
    NoSeries,
    /// Every template resolved to an empty string.
    EmptyLabel,
}

/// Diagnostic events emitted during one accessibility pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AriaEvent {
    DecalsAssigned {
        series_decals: usize,
        item_decals: usize,
    },
    /// One series clause was written; `displayed` items out of `data_count`.
    SeriesDescribed {
        series_index: usize,
        data_count: usize,
        displayed: usize,
    },
    LabelApplied {
        len: usize,
    },
    LabelSuppressed {
        reason: SuppressReason,
    },
}

/// Caller-supplied observer of accessibility passes.
///
/// Hooks see events only; they cannot alter the chart or the label.
pub trait AriaHook {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: AriaEvent);
}
