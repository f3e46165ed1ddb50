use tracing::debug;

use crate::aria::config::LabelConfig;
use crate::aria::locale::LocaleResource;
use crate::aria::tree::ConfigNode;
use crate::core::format_number;
use crate::error::{AriaError, AriaResult};

/// Cap applied when `series.maxCount` / `data.maxCount` is absent or unusable.
pub const DEFAULT_MAX_COUNT: usize = 10;

/// A resolved template.
///
/// `Text` may contain `{key}` placeholders. `Literal` is a precomputed
/// scalar supplied by the user and is emitted as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Template<'a> {
    Text(&'a str),
    Literal(String),
}

impl Template<'_> {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Literal(literal) => literal,
        }
    }
}

/// Resolves dotted template paths: user override first, active locale second.
#[derive(Debug, Clone, Copy)]
pub struct TemplateResolver<'a> {
    label: &'a LabelConfig,
    locale: &'a LocaleResource,
}

impl<'a> TemplateResolver<'a> {
    #[must_use]
    pub fn new(label: &'a LabelConfig, locale: &'a LocaleResource) -> Self {
        Self { label, locale }
    }

    #[must_use]
    pub fn locale(&self) -> &'a LocaleResource {
        self.locale
    }

    /// Returns the override at `path` verbatim when present, else the
    /// locale default. A locale miss is reported as an error.
    pub fn resolve(&self, path: &str) -> AriaResult<Template<'a>> {
        if let Some(node) = self.label.override_at(path) {
            return template_from_node(node, path);
        }
        template_from_node(self.locale.entry(path)?, path)
    }

    /// Reads a positive integer cap from the overrides at `path`.
    #[must_use]
    pub fn max_count(&self, path: &str) -> usize {
        let Some(node) = self.label.override_at(path) else {
            return DEFAULT_MAX_COUNT;
        };
        let parsed = match node {
            ConfigNode::Number(value) => Some(*value),
            ConfigNode::Text(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed.filter(|value| value.is_finite() && *value >= 1.0) {
            Some(value) if value < usize::MAX as f64 => value.floor() as usize,
            Some(_) => usize::MAX,
            None => {
                debug!(path, "unusable max count override, using default");
                DEFAULT_MAX_COUNT
            }
        }
    }

    #[must_use]
    pub fn series_type_name(&self, sub_type: &str) -> &'a str {
        self.locale.series_type_name(sub_type)
    }
}

fn template_from_node<'a>(node: &'a ConfigNode, path: &str) -> AriaResult<Template<'a>> {
    match node {
        ConfigNode::Text(text) => Ok(Template::Text(text)),
        ConfigNode::Branch(_) => Err(AriaError::NotATemplate {
            path: path.to_owned(),
        }),
        other => Ok(Template::Literal(literal_text(other))),
    }
}

fn literal_text(node: &ConfigNode) -> String {
    match node {
        ConfigNode::Null | ConfigNode::Branch(_) => String::new(),
        ConfigNode::Flag(flag) => flag.to_string(),
        ConfigNode::Number(value) => format_number(*value),
        ConfigNode::Text(text) => text.clone(),
        ConfigNode::List(items) => items
            .iter()
            .map(literal_text)
            .collect::<Vec<_>>()
            .join(","),
    }
}
