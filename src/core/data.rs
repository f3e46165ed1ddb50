use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DataItem, DecalStyle, RawValue};
use crate::error::{AriaError, AriaResult};

/// Host-authored style attached to a series or one of its items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decal: Option<DecalStyle>,
}

impl VisualStyle {
    #[must_use]
    pub fn with_decal(mut self, decal: DecalStyle) -> Self {
        self.decal = Some(decal);
        self
    }
}

/// Ordered data items of one series plus their visual channels.
///
/// `style` and per-item styles are inputs owned by the host and never
/// written here. Computed visuals (materialized item styles and the decal
/// channel) are not serialized and are dropped by `clear_visuals`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesData {
    #[serde(default)]
    items: Vec<DataItem>,
    #[serde(default)]
    style: VisualStyle,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    item_styles: IndexMap<usize, VisualStyle>,
    #[serde(skip)]
    item_visual_styles: IndexMap<usize, VisualStyle>,
    #[serde(skip)]
    decal: Option<DecalStyle>,
    #[serde(skip)]
    item_decals: IndexMap<usize, DecalStyle>,
}

impl SeriesData {
    #[must_use]
    pub fn new(items: Vec<DataItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: VisualStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_item_style(mut self, index: usize, style: VisualStyle) -> Self {
        self.item_styles.insert(index, style);
        self
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn items(&self) -> &[DataItem] {
        &self.items
    }

    /// Display name of item `index`; empty names read as `None`.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.items.get(index).and_then(DataItem::display_name)
    }

    /// Underlying value of item `index`, unformatted.
    #[must_use]
    pub fn raw_value(&self, index: usize) -> Option<&RawValue> {
        self.items.get(index).map(|item| &item.value)
    }

    #[must_use]
    pub fn style(&self) -> &VisualStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: VisualStyle) {
        self.style = style;
    }

    #[must_use]
    pub fn item_style(&self, index: usize) -> Option<&VisualStyle> {
        self.item_styles.get(&index)
    }

    /// Returns the computed style of item `index`, materializing it on first
    /// use from the item's own style with the series style filling any unset
    /// field. Host styles are left untouched.
    pub fn ensure_unique_item_style(&mut self, index: usize) -> AriaResult<&VisualStyle> {
        self.check_index(index)?;
        let Self {
            style,
            item_styles,
            item_visual_styles,
            ..
        } = self;
        Ok(item_visual_styles.entry(index).or_insert_with(|| {
            let own = item_styles.get(&index);
            VisualStyle {
                color: own
                    .and_then(|item| item.color.clone())
                    .or_else(|| style.color.clone()),
                decal: own
                    .and_then(|item| item.decal.clone())
                    .or_else(|| style.decal.clone()),
            }
        }))
    }

    /// Drops every computed visual so the next pass reads the host styles afresh.
    pub fn clear_visuals(&mut self) {
        self.item_visual_styles.clear();
        self.decal = None;
        self.item_decals.clear();
    }

    #[must_use]
    pub fn decal_visual(&self) -> Option<&DecalStyle> {
        self.decal.as_ref()
    }

    #[must_use]
    pub fn item_decal_visual(&self, index: usize) -> Option<&DecalStyle> {
        self.item_decals.get(&index)
    }

    pub fn set_decal_visual(&mut self, decal: DecalStyle) {
        self.decal = Some(decal);
    }

    pub fn set_item_decal_visual(&mut self, index: usize, decal: DecalStyle) -> AriaResult<()> {
        self.check_index(index)?;
        self.item_decals.insert(index, decal);
        Ok(())
    }

    fn check_index(&self, index: usize) -> AriaResult<()> {
        if index >= self.items.len() {
            return Err(AriaError::InvalidData(format!(
                "data index {index} out of range for {} items",
                self.items.len()
            )));
        }
        Ok(())
    }
}
