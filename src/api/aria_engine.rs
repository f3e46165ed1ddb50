use tracing::{debug, warn};

use crate::aria::{
    AriaConfig, AriaLabel, DecalAssignment, DecalPalette, DefaultDecalPalette, LocaleRegistry,
    assign_decals, synthesize,
};
use crate::core::ChartModel;
use crate::error::AriaResult;
use crate::extensions::{AriaEvent, AriaHook, SuppressReason};
use crate::render::LabelSurface;

/// Result of one accessibility pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AriaOutcome {
    pub decals: DecalAssignment,
    /// The label written to the surface, if any.
    pub label: Option<AriaLabel>,
    pub suppressed: Option<SuppressReason>,
}

impl AriaOutcome {
    fn suppressed(decals: DecalAssignment, reason: SuppressReason) -> Self {
        Self {
            decals,
            label: None,
            suppressed: Some(reason),
        }
    }

    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_ref().map(|label| label.text.as_str())
    }
}

/// Runs decal assignment and label synthesis for a chart and writes the
/// label to a [`LabelSurface`].
///
/// Every call recomputes from the current chart state. The engine is the
/// only writer of the chart's decal channel during a pass.
pub struct AriaEngine<S: LabelSurface> {
    surface: S,
    config: AriaConfig,
    locales: LocaleRegistry,
    palette: Box<dyn DecalPalette>,
    pub(super) hooks: Vec<Box<dyn AriaHook>>,
}

impl<S: LabelSurface> AriaEngine<S> {
    /// Engine with the built-in locales and the palette named by `config`.
    pub fn new(surface: S, config: AriaConfig) -> AriaResult<Self> {
        let palette = DefaultDecalPalette::from_config(&config);
        Ok(Self {
            surface,
            config,
            locales: LocaleRegistry::with_builtins()?,
            palette: Box::new(palette),
            hooks: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_locales(mut self, locales: LocaleRegistry) -> Self {
        self.locales = locales;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Box<dyn DecalPalette>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn config(&self) -> &AriaConfig {
        &self.config
    }

    /// Replaces the config. The decal palette is rebuilt when the palette
    /// entries changed, which also resets its name assignments.
    pub fn set_config(&mut self, config: AriaConfig) {
        if config.decal.decals != self.config.decal.decals {
            debug!("decal palette changed, rebuilding");
            self.palette = Box::new(DefaultDecalPalette::from_config(&config));
        }
        self.config = config;
    }

    #[must_use]
    pub fn locales(&self) -> &LocaleRegistry {
        &self.locales
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Runs one accessibility pass over `chart`.
    ///
    /// Disabled switches and empty charts are not errors; they end the pass
    /// early and leave the surface untouched. Template resolution failures
    /// are returned and nothing is written.
    pub fn apply(&mut self, chart: &mut ChartModel) -> AriaResult<AriaOutcome> {
        if !self.config.show {
            debug!("aria disabled, skipping pass");
            return Ok(self.suppress(DecalAssignment::default(), SuppressReason::AriaDisabled));
        }

        let decals = assign_decals(chart, &self.config, self.palette.as_mut())?;
        if !decals.skipped {
            self.emit(AriaEvent::DecalsAssigned {
                series_decals: decals.series_decals,
                item_decals: decals.item_decals,
            });
        }

        if !self.config.label.enabled {
            return Ok(self.suppress(decals, SuppressReason::LabelDisabled));
        }

        let locale = self.locales.resolve(chart.locale())?;
        let label = match synthesize(chart, &self.config.label, &locale) {
            Ok(Some(label)) => label,
            Ok(None) => return Ok(self.suppress(decals, SuppressReason::NoSeries)),
            Err(err) => {
                warn!(error = %err, locale = locale.id(), "aria label synthesis failed");
                return Err(err);
            }
        };

        for described in &label.described {
            self.emit(AriaEvent::SeriesDescribed {
                series_index: described.series_index,
                data_count: described.data_count,
                displayed: described.displayed_count,
            });
        }
        if label.text.is_empty() {
            return Ok(self.suppress(decals, SuppressReason::EmptyLabel));
        }

        self.surface.set_aria_label(&label.text)?;
        self.emit(AriaEvent::LabelApplied {
            len: label.text.len(),
        });

        Ok(AriaOutcome {
            decals,
            label: Some(label),
            suppressed: None,
        })
    }

    fn suppress(&mut self, decals: DecalAssignment, reason: SuppressReason) -> AriaOutcome {
        debug!(?reason, "aria label suppressed");
        self.emit(AriaEvent::LabelSuppressed { reason });
        AriaOutcome::suppressed(decals, reason)
    }

    fn emit(&mut self, event: AriaEvent) {
        for hook in &mut self.hooks {
            hook.on_event(event);
        }
    }
}
