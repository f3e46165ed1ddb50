use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pattern parameters of a decal fill (`color`, `symbol`, `dashArrayX`, ...).
///
/// Keys keep insertion order so merged styles serialize deterministically.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecalStyle {
    params: IndexMap<String, Value>,
}

impl DecalStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.params.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.params.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns a copy of `self` with every key of `defaults` that `self` lacks.
    ///
    /// Keys already present in `self` always win, so merging the same pair
    /// twice yields the same style.
    #[must_use]
    pub fn with_defaults(&self, defaults: &DecalStyle) -> DecalStyle {
        let mut merged = self.clone();
        for (key, value) in &defaults.params {
            merged
                .params
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        merged
    }
}
