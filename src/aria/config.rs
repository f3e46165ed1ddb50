use serde::{Deserialize, Serialize};

use crate::aria::tree::ConfigNode;
use crate::core::DecalStyle;
use crate::error::{AriaError, AriaResult};

/// Accessibility options of a chart (`aria` block of the chart option).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AriaConfig {
    /// Master switch; nothing runs while it is `false`.
    #[serde(default)]
    pub show: bool,
    #[serde(default)]
    pub decal: DecalConfig,
    #[serde(default)]
    pub label: LabelConfig,
}

impl AriaConfig {
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            show: true,
            ..Self::default()
        }
    }

    pub fn from_json_str(input: &str) -> AriaResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| AriaError::InvalidConfig(format!("failed to parse aria config: {e}")))
    }

    pub fn to_json_pretty(&self) -> AriaResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AriaError::InvalidConfig(format!("failed to serialize aria config: {e}"))
        })
    }

    #[must_use]
    pub fn with_decal(mut self, decal: DecalConfig) -> Self {
        self.decal = decal;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: LabelConfig) -> Self {
        self.label = label;
        self
    }

    /// Whether decals should be assigned: master switch on and
    /// `decal.show` not turned off.
    #[must_use]
    pub fn decals_enabled(&self) -> bool {
        self.show && self.decal.show
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecalConfig {
    #[serde(default = "default_true")]
    pub show: bool,
    /// Replaces the built-in decal palette when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decals: Option<Vec<DecalStyle>>,
}

impl Default for DecalConfig {
    fn default() -> Self {
        Self {
            show: true,
            decals: None,
        }
    }
}

impl DecalConfig {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            show: false,
            decals: None,
        }
    }
}

/// Label options: on/off, a full description, and template overrides
/// addressed by dotted path (`general.withTitle`, `data.maxCount`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigNode", into = "ConfigNode")]
pub struct LabelConfig {
    pub enabled: bool,
    pub description: Option<String>,
    overrides: ConfigNode,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            description: None,
            overrides: ConfigNode::branch(),
        }
    }
}

impl LabelConfig {
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the override at `path`, e.g. `("data.maxCount", 5.0.into())`.
    #[must_use]
    pub fn with_override(mut self, path: &str, value: ConfigNode) -> Self {
        self.overrides.insert(path, value);
        self
    }

    /// User override at `path`; `null` counts as absent.
    #[must_use]
    pub fn override_at(&self, path: &str) -> Option<&ConfigNode> {
        self.overrides.lookup(path).filter(|node| !node.is_null())
    }

    /// Full description supplied by the user, if non-empty.
    #[must_use]
    pub fn explicit_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|text| !text.is_empty())
    }

    #[must_use]
    pub fn overrides(&self) -> &ConfigNode {
        &self.overrides
    }
}

impl TryFrom<ConfigNode> for LabelConfig {
    type Error = AriaError;

    fn try_from(node: ConfigNode) -> Result<Self, Self::Error> {
        let mut children = match node {
            ConfigNode::Branch(children) => children,
            ConfigNode::Null => return Ok(Self::default()),
            _ => {
                return Err(AriaError::InvalidConfig(
                    "`label` must be an object".to_owned(),
                ));
            }
        };

        let enabled = match children.shift_remove("enabled") {
            None | Some(ConfigNode::Null) => true,
            Some(ConfigNode::Flag(flag)) => flag,
            Some(_) => {
                return Err(AriaError::InvalidConfig(
                    "`label.enabled` must be a boolean".to_owned(),
                ));
            }
        };
        let description = match children.shift_remove("description") {
            None | Some(ConfigNode::Null) => None,
            Some(ConfigNode::Text(text)) => Some(text),
            Some(_) => {
                return Err(AriaError::InvalidConfig(
                    "`label.description` must be a string".to_owned(),
                ));
            }
        };

        Ok(Self {
            enabled,
            description,
            overrides: ConfigNode::Branch(children),
        })
    }
}

impl From<LabelConfig> for ConfigNode {
    fn from(config: LabelConfig) -> Self {
        let mut node = config.overrides;
        node.insert("enabled", ConfigNode::Flag(config.enabled));
        if let Some(description) = config.description {
            node.insert("description", ConfigNode::Text(description));
        }
        node
    }
}

fn default_true() -> bool {
    true
}
