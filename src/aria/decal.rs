use indexmap::IndexMap;
use serde_json::json;
use tracing::{debug, trace};

use crate::aria::config::AriaConfig;
use crate::core::{ChartModel, DecalStyle};
use crate::error::AriaResult;

const DECAL_COLOR: &str = "rgba(0, 0, 0, 0.2)";

/// Namespace in which palette entries are handed out.
///
/// Series-level decals share the chart scope; per-item decals get one
/// scope per series so every series starts from the first entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteScope {
    Chart,
    Series(usize),
}

/// Source of palette-derived decals.
pub trait DecalPalette {
    /// Decal for `key` within `scope`, sized for `request_count` consumers.
    ///
    /// Implementations must return the same decal for the same
    /// `(scope, key)` on repeated calls.
    fn decal_for(&mut self, scope: PaletteScope, key: &str, request_count: usize) -> DecalStyle;

    /// Called once at the start of every assignment pass. Entries handed
    /// out afterwards must depend only on requests made within the pass.
    fn begin_pass(&mut self) {}
}

#[derive(Debug, Clone, Default)]
struct ScopeState {
    assigned: IndexMap<String, usize>,
    next: usize,
}

/// Cycling decal palette that memoizes `key -> entry` per scope.
#[derive(Debug, Clone)]
pub struct DefaultDecalPalette {
    layers: Vec<Vec<DecalStyle>>,
    scopes: IndexMap<PaletteScope, ScopeState>,
}

impl Default for DefaultDecalPalette {
    fn default() -> Self {
        Self::new(builtin_decals())
    }
}

impl DefaultDecalPalette {
    #[must_use]
    pub fn new(decals: Vec<DecalStyle>) -> Self {
        Self::layered(vec![decals])
    }

    /// Palette made of several candidate layers; each request uses the
    /// shortest layer that still has `request_count` entries, or the
    /// longest layer when none is long enough.
    #[must_use]
    pub fn layered(layers: Vec<Vec<DecalStyle>>) -> Self {
        let layers = layers
            .into_iter()
            .filter(|layer| !layer.is_empty())
            .collect();
        Self {
            layers,
            scopes: IndexMap::new(),
        }
    }

    /// Palette from `aria.decal.decals`, or the built-in one.
    #[must_use]
    pub fn from_config(config: &AriaConfig) -> Self {
        match &config.decal.decals {
            Some(decals) if !decals.is_empty() => Self::new(decals.clone()),
            _ => Self::default(),
        }
    }

    /// Forgets every `key -> entry` assignment.
    pub fn clear_scopes(&mut self) {
        self.scopes.clear();
    }

    fn layer_for(&self, request_count: usize) -> Option<&[DecalStyle]> {
        self.layers
            .iter()
            .filter(|layer| layer.len() >= request_count)
            .min_by_key(|layer| layer.len())
            .or_else(|| self.layers.iter().max_by_key(|layer| layer.len()))
            .map(Vec::as_slice)
    }
}

impl DecalPalette for DefaultDecalPalette {
    fn begin_pass(&mut self) {
        self.clear_scopes();
    }

    fn decal_for(&mut self, scope: PaletteScope, key: &str, request_count: usize) -> DecalStyle {
        let state = self.scopes.entry(scope).or_default();
        let slot = match state.assigned.get(key) {
            Some(slot) => *slot,
            None => {
                let slot = state.next;
                state.next += 1;
                state.assigned.insert(key.to_owned(), slot);
                slot
            }
        };
        self.layer_for(request_count)
            .map(|layer| layer[slot % layer.len()].clone())
            .unwrap_or_default()
    }
}

/// Summary of one decal assignment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecalAssignment {
    pub skipped: bool,
    pub series_visited: usize,
    pub series_decals: usize,
    pub item_decals: usize,
}

/// Merges explicit decal overrides onto palette decals for every raw series.
///
/// Series that use the palette per data item get one decal per item,
/// keyed by item name (or index) and sized by the item count. Other
/// series get one series-level decal keyed by series name (or index) and
/// sized by the series count. Overrides always win over palette keys.
///
/// Every pass starts from the host styles alone: computed visuals and
/// palette scopes from earlier passes are discarded first.
pub fn assign_decals(
    chart: &mut ChartModel,
    config: &AriaConfig,
    palette: &mut dyn DecalPalette,
) -> AriaResult<DecalAssignment> {
    if !config.decals_enabled() {
        debug!(
            show = config.show,
            decal_show = config.decal.show,
            "decal assignment skipped"
        );
        return Ok(DecalAssignment {
            skipped: true,
            ..DecalAssignment::default()
        });
    }

    palette.begin_pass();
    let series_count = chart.series_count();
    let mut assignment = DecalAssignment::default();

    for series in chart.each_raw_series_mut() {
        assignment.series_visited += 1;
        let series_index = series.series_index;
        series.data.clear_visuals();

        if series.use_color_palette_on_data {
            let data = &mut series.data;
            let data_count = data.count();
            for index in 0..data_count {
                let key = data
                    .name(index)
                    .map_or_else(|| index.to_string(), str::to_owned);
                let existing = data
                    .ensure_unique_item_style(index)?
                    .decal
                    .clone()
                    .unwrap_or_default();
                let palette_decal =
                    palette.decal_for(PaletteScope::Series(series_index), &key, data_count);
                data.set_item_decal_visual(index, existing.with_defaults(&palette_decal))?;
            }
            assignment.item_decals += data_count;
            trace!(series_index, data_count, "assigned per-item decals");
        } else {
            let key = series
                .display_name()
                .map_or_else(|| format!("series\u{0}{series_index}"), str::to_owned);
            let existing = series.data.style().decal.clone().unwrap_or_default();
            let palette_decal = palette.decal_for(PaletteScope::Chart, &key, series_count);
            series
                .data
                .set_decal_visual(existing.with_defaults(&palette_decal));
            assignment.series_decals += 1;
            trace!(series_index, "assigned series decal");
        }
    }

    debug!(
        series_visited = assignment.series_visited,
        series_decals = assignment.series_decals,
        item_decals = assignment.item_decals,
        "decal assignment finished"
    );
    Ok(assignment)
}

/// Built-in decal palette.
#[must_use]
pub fn builtin_decals() -> Vec<DecalStyle> {
    let base = DecalStyle::new().with("color", DECAL_COLOR);
    vec![
        base.clone()
            .with("dashArrayX", json!([1, 0]))
            .with("dashArrayY", json!([2, 5]))
            .with("symbolSize", 1)
            .with("rotation", std::f64::consts::PI / 6.0),
        base.clone()
            .with("symbol", "circle")
            .with("dashArrayX", json!([[8, 8], [0, 8, 8, 0]]))
            .with("dashArrayY", json!([6, 0]))
            .with("symbolSize", 0.8),
        base.clone()
            .with("dashArrayX", json!([1, 0]))
            .with("dashArrayY", json!([4, 3]))
            .with("rotation", -std::f64::consts::PI / 4.0),
        base.clone()
            .with("dashArrayX", json!([[6, 6], [0, 6, 6, 0]]))
            .with("dashArrayY", json!([6, 0])),
        base.clone()
            .with("dashArrayX", json!([[1, 0], [1, 6]]))
            .with("dashArrayY", json!([1, 0, 6, 0]))
            .with("rotation", std::f64::consts::PI / 4.0),
        base.with("symbol", "triangle")
            .with("dashArrayX", json!([[9, 9], [0, 9, 9, 0]]))
            .with("dashArrayY", json!([7, 2]))
            .with("symbolSize", 0.75),
    ]
}
