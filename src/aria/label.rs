use tracing::{debug, trace};

use crate::aria::config::LabelConfig;
use crate::aria::interpolate::{Bindings, interpolate};
use crate::aria::locale::LocaleResource;
use crate::aria::resolver::TemplateResolver;
use crate::core::{ChartModel, SeriesModel};
use crate::error::AriaResult;

/// Where the final label text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    /// The user-supplied `label.description`, used verbatim.
    Description,
    /// Composed from title, series and data templates.
    Composed,
}

/// What one per-series clause covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesDescription {
    pub series_index: usize,
    pub data_count: usize,
    pub displayed_count: usize,
}

impl SeriesDescription {
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.displayed_count < self.data_count
    }
}

/// Synthesized accessibility label plus the series it described.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AriaLabel {
    pub text: String,
    pub source: LabelSource,
    pub described: Vec<SeriesDescription>,
}

/// Builds the accessibility description of `chart`.
///
/// Returns `Ok(None)` when the chart has no series: there is nothing to
/// announce and the caller must not write an empty label. Series beyond
/// `series.maxCount` and items beyond `data.maxCount` are omitted without
/// renumbering the rest.
pub fn synthesize(
    chart: &ChartModel,
    label: &LabelConfig,
    locale: &LocaleResource,
) -> AriaResult<Option<AriaLabel>> {
    if let Some(description) = label.explicit_description() {
        debug!(len = description.len(), "using explicit aria description");
        return Ok(Some(AriaLabel {
            text: description.to_owned(),
            source: LabelSource::Description,
            described: Vec::new(),
        }));
    }

    let series_count = chart.series_count();
    if series_count == 0 {
        debug!("chart has no series, no aria label");
        return Ok(None);
    }

    let synthesizer = LabelSynthesizer::new(TemplateResolver::new(label, locale), series_count);
    let label = synthesizer.compose(chart)?;
    debug!(
        locale = locale.id(),
        series_count,
        described = label.described.len(),
        len = label.text.len(),
        "aria label synthesized"
    );
    Ok(Some(label))
}

struct LabelSynthesizer<'a> {
    resolver: TemplateResolver<'a>,
    series_count: usize,
    max_series: usize,
    max_data: usize,
}

impl<'a> LabelSynthesizer<'a> {
    fn new(resolver: TemplateResolver<'a>, series_count: usize) -> Self {
        Self {
            max_series: resolver.max_count("series.maxCount"),
            max_data: resolver.max_count("data.maxCount"),
            resolver,
            series_count,
        }
    }

    fn multiple(&self) -> bool {
        self.series_count > 1
    }

    fn render(&self, path: &str, bindings: &Bindings) -> AriaResult<String> {
        Ok(interpolate(&self.resolver.resolve(path)?, bindings))
    }

    fn compose(&self, chart: &ChartModel) -> AriaResult<AriaLabel> {
        let mut text = match chart.title_text() {
            Some(title) => self.render("general.withTitle", &Bindings::new().with("title", title))?,
            None => self.render("general.withoutTitle", &Bindings::new())?,
        };

        let prefix_path = if self.multiple() {
            "series.multiple.prefix"
        } else {
            "series.single.prefix"
        };
        text.push_str(&self.render(
            prefix_path,
            &Bindings::new().with("seriesCount", self.series_count),
        )?);

        let display_series = self.series_count.min(self.max_series);
        let mut clauses = Vec::with_capacity(display_series);
        let mut described = Vec::with_capacity(display_series);
        for series in chart
            .each_series()
            .take_while(|series| series.series_index < display_series)
        {
            let (clause, description) = self.describe_series(series)?;
            clauses.push(clause);
            described.push(description);
        }

        let middle = self.render("series.multiple.separator.middle", &Bindings::new())?;
        text.push_str(&clauses.join(middle.as_str()));
        text.push_str(&self.render("series.multiple.separator.end", &Bindings::new())?);

        Ok(AriaLabel {
            text,
            source: LabelSource::Composed,
            described,
        })
    }

    fn describe_series(&self, series: &SeriesModel) -> AriaResult<(String, SeriesDescription)> {
        let arity = if self.multiple() { "multiple" } else { "single" };
        let naming = if series.display_name().is_some() {
            "withName"
        } else {
            "withoutName"
        };
        let mut clause = self.render(
            &format!("series.{arity}.{naming}"),
            &Bindings::new()
                .with("seriesId", series.series_index)
                .with("seriesName", series.display_name().unwrap_or_default())
                .with(
                    "seriesType",
                    self.resolver.series_type_name(&series.sub_type),
                ),
        )?;

        let data = &series.data;
        let data_count = data.count();
        if data_count > self.max_data {
            clause.push_str(&self.render(
                "data.partialData",
                &Bindings::new().with("displayCnt", self.max_data),
            )?);
        } else {
            clause.push_str(&self.render("data.allData", &Bindings::new())?);
        }

        let displayed_count = data_count.min(self.max_data);
        let mut items = Vec::with_capacity(displayed_count);
        for item in data.items().iter().take(displayed_count) {
            let path = if item.display_name().is_some() {
                "data.withName"
            } else {
                "data.withoutName"
            };
            items.push(self.render(
                path,
                &Bindings::new()
                    .with("name", item.display_name().unwrap_or_default())
                    .with("value", &item.value),
            )?);
        }
        let middle = self.render("data.separator.middle", &Bindings::new())?;
        clause.push_str(&items.join(middle.as_str()));
        clause.push_str(&self.render("data.separator.end", &Bindings::new())?);

        trace!(
            series_index = series.series_index,
            data_count,
            displayed_count,
            "described series"
        );
        Ok((
            clause,
            SeriesDescription {
                series_index: series.series_index,
                data_count,
                displayed_count,
            },
        ))
    }
}
