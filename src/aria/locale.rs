use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::aria::tree::{ConfigNode, split_path};
use crate::core::DEFAULT_LOCALE;
use crate::error::{AriaError, AriaResult};

const EN_JSON: &str = include_str!("locales/en.json");
const ZH_JSON: &str = include_str!("locales/zh.json");

/// Series type name used when neither the type nor `custom` is mapped.
pub const FALLBACK_SERIES_TYPE_NAME: &str = "Custom chart";

const CUSTOM_SERIES_TYPE: &str = "custom";

#[derive(Debug, Deserialize)]
struct LocaleDocument {
    aria: ConfigNode,
    #[serde(default)]
    series: SeriesLocale,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeriesLocale {
    #[serde(default)]
    type_names: IndexMap<String, String>,
}

/// Default templates and series type names for one language.
///
/// Immutable once parsed; share it through [`LocaleRegistry`].
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleResource {
    id: String,
    aria: ConfigNode,
    series_type_names: IndexMap<String, String>,
}

impl LocaleResource {
    /// Parses a locale document of the form
    /// `{"aria": {...}, "series": {"typeNames": {...}}}`.
    pub fn from_json_str(id: &str, input: &str) -> AriaResult<Self> {
        let document: LocaleDocument = serde_json::from_str(input).map_err(|e| {
            AriaError::InvalidConfig(format!("failed to parse locale `{id}`: {e}"))
        })?;
        if !matches!(document.aria, ConfigNode::Branch(_)) {
            return Err(AriaError::InvalidConfig(format!(
                "locale `{id}` must define `aria` as an object"
            )));
        }
        Ok(Self {
            id: normalize_locale_id(id),
            aria: document.aria,
            series_type_names: document.series.type_names,
        })
    }

    pub fn english() -> AriaResult<Self> {
        Self::from_json_str("EN", EN_JSON)
    }

    pub fn chinese() -> AriaResult<Self> {
        Self::from_json_str("ZH", ZH_JSON)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn aria(&self) -> &ConfigNode {
        &self.aria
    }

    /// Locates the default entry at `path`.
    ///
    /// A missing segment is an error naming the full path; an explicitly
    /// empty string is a valid entry.
    pub fn entry(&self, path: &str) -> AriaResult<&ConfigNode> {
        let segments = split_path(path);
        match self.aria.lookup_segments(&segments) {
            Ok(ConfigNode::Null) | Err(_) => Err(AriaError::MissingLocaleEntry {
                locale: self.id.clone(),
                path: path.to_owned(),
            }),
            Ok(node) => Ok(node),
        }
    }

    /// Human-readable name of a series type, e.g. `bar` -> `Bar chart`.
    #[must_use]
    pub fn series_type_name(&self, sub_type: &str) -> &str {
        self.series_type_names
            .get(sub_type)
            .or_else(|| self.series_type_names.get(CUSTOM_SERIES_TYPE))
            .map_or(FALLBACK_SERIES_TYPE_NAME, String::as_str)
    }
}

/// Parsed locale resources keyed by upper-case id.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: IndexMap<String, Arc<LocaleResource>>,
    default_id: String,
}

impl LocaleRegistry {
    /// Empty registry whose fallback locale is `default_id`.
    #[must_use]
    pub fn new(default_id: &str) -> Self {
        Self {
            locales: IndexMap::new(),
            default_id: normalize_locale_id(default_id),
        }
    }

    /// Registry holding the embedded `EN` and `ZH` resources, falling back to `EN`.
    pub fn with_builtins() -> AriaResult<Self> {
        let mut registry = Self::new(DEFAULT_LOCALE);
        registry.register(LocaleResource::english()?);
        registry.register(LocaleResource::chinese()?);
        Ok(registry)
    }

    pub fn register(&mut self, resource: LocaleResource) {
        debug!(locale = resource.id(), "register locale resource");
        self.locales
            .insert(resource.id().to_owned(), Arc::new(resource));
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<LocaleResource>> {
        self.locales.get(&normalize_locale_id(id)).cloned()
    }

    /// Returns the resource for `id`, or the default locale when `id` is
    /// unknown.
    pub fn resolve(&self, id: &str) -> AriaResult<Arc<LocaleResource>> {
        if let Some(resource) = self.get(id) {
            return Ok(resource);
        }
        warn!(
            requested = id,
            fallback = %self.default_id,
            "unknown locale, using fallback"
        );
        self.get(&self.default_id)
            .ok_or_else(|| AriaError::UnknownLocale(id.to_owned()))
    }
}

fn normalize_locale_id(id: &str) -> String {
    id.trim().to_ascii_uppercase()
}
