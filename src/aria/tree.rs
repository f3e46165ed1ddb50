use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Path segments of a dotted key such as `series.multiple.prefix`.
pub type PathSegments<'a> = SmallVec<[&'a str; 4]>;

#[must_use]
pub fn split_path(path: &str) -> PathSegments<'_> {
    path.split('.').collect()
}

/// Nested configuration value addressed by dotted paths.
///
/// Shared by user label overrides and locale resources.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigNode {
    #[default]
    Null,
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<ConfigNode>),
    Branch(IndexMap<String, ConfigNode>),
}

impl ConfigNode {
    #[must_use]
    pub fn branch() -> Self {
        Self::Branch(IndexMap::new())
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    #[must_use]
    pub fn child(&self, key: &str) -> Option<&ConfigNode> {
        match self {
            Self::Branch(children) => children.get(key),
            _ => None,
        }
    }

    /// Walks `path` segment by segment.
    ///
    /// Returns `None` as soon as a segment is missing or an intermediate
    /// node is not a branch. A `Null` leaf is returned as found.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&ConfigNode> {
        split_path(path)
            .into_iter()
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Like [`ConfigNode::lookup`], but reports how many leading segments
    /// matched when the walk stops early.
    pub fn lookup_segments(&self, segments: &[&str]) -> Result<&ConfigNode, usize> {
        let mut node = self;
        for (depth, segment) in segments.iter().enumerate() {
            node = node.child(segment).ok_or(depth)?;
        }
        Ok(node)
    }

    /// Inserts `value` at `path`, creating intermediate branches and
    /// replacing non-branch nodes in the way.
    pub fn insert(&mut self, path: &str, value: ConfigNode) {
        let segments = split_path(path);
        let Some((last, parents)) = segments.split_last() else {
            return;
        };
        let mut node = self;
        for segment in parents {
            node = node.ensure_branch().entry((*segment).to_owned()).or_default();
        }
        node.ensure_branch().insert((*last).to_owned(), value);
    }

    fn ensure_branch(&mut self) -> &mut IndexMap<String, ConfigNode> {
        if !matches!(self, Self::Branch(_)) {
            *self = Self::branch();
        }
        match self {
            Self::Branch(children) => children,
            _ => unreachable!("node was just replaced by a branch"),
        }
    }
}

impl From<&str> for ConfigNode {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ConfigNode {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for ConfigNode {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for ConfigNode {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}
