use std::borrow::Cow;
use std::fmt::Display;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Captures, Regex};

use crate::aria::resolver::Template;

static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\s*([A-Za-z0-9_$.\-]+)\s*\}").expect("Invalid placeholder regex")
});

/// Values substituted for `{key}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bindings {
    values: IndexMap<String, String>,
}

impl Bindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `key` to the display form of `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.values.insert(key.into(), value.to_string());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Substitutes bound placeholders in `template`.
///
/// `{key}` and `{ key }` both match, case-sensitively. Substitution is a
/// single left-to-right pass: inserted values are never rescanned, and
/// placeholders without a binding are left untouched. `Literal` templates
/// are returned unchanged.
#[must_use]
pub fn interpolate(template: &Template<'_>, bindings: &Bindings) -> String {
    match template {
        Template::Literal(literal) => literal.clone(),
        Template::Text(text) => interpolate_str(text, bindings).into_owned(),
    }
}

/// String-level form of [`interpolate`]; borrows `text` when nothing matches.
#[must_use]
pub fn interpolate_str<'t>(text: &'t str, bindings: &Bindings) -> Cow<'t, str> {
    if bindings.is_empty() || !text.contains('{') {
        return Cow::Borrowed(text);
    }
    PLACEHOLDER_PATTERN.replace_all(text, |caps: &Captures<'_>| {
        bindings
            .get(&caps[1])
            .map_or_else(|| caps[0].to_owned(), str::to_owned)
    })
}
