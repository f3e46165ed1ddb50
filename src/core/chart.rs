use serde::{Deserialize, Deserializer, Serialize};

use crate::core::SeriesModel;
use crate::error::{AriaError, AriaResult};

pub const DEFAULT_LOCALE: &str = "EN";

/// One title block of a chart. Only the first block feeds descriptions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TitleBlock {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub subtext: Option<String>,
}

impl TitleBlock {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            subtext: None,
        }
    }
}

/// Read model of a whole chart: title blocks, locale and series in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    #[serde(default, rename = "title", deserialize_with = "one_or_many_titles")]
    titles: Vec<TitleBlock>,
    #[serde(default = "default_locale")]
    locale: String,
    #[serde(default)]
    series: Vec<SeriesModel>,
}

impl Default for ChartModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartModel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            titles: Vec::new(),
            locale: default_locale(),
            series: Vec::new(),
        }
    }

    /// Parses a chart option document and assigns series indices in
    /// declaration order.
    pub fn from_json_str(input: &str) -> AriaResult<Self> {
        let mut model: Self = serde_json::from_str(input)
            .map_err(|e| AriaError::InvalidData(format!("failed to parse chart json: {e}")))?;
        model.reindex_series();
        Ok(model)
    }

    #[must_use]
    pub fn with_title(mut self, title: TitleBlock) -> Self {
        self.titles.push(title);
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesModel) -> Self {
        self.push_series(series);
        self
    }

    /// Appends a series; its `series_index` becomes its declaration position.
    pub fn push_series(&mut self, mut series: SeriesModel) {
        series.series_index = self.series.len();
        self.series.push(series);
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn titles(&self) -> &[TitleBlock] {
        &self.titles
    }

    /// Text of the first title block, when it is present and non-empty.
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.titles
            .first()
            .and_then(|title| title.text.as_deref())
            .filter(|text| !text.is_empty())
    }

    /// Number of declared series, including filtered ones.
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn series(&self, index: usize) -> Option<&SeriesModel> {
        self.series.get(index)
    }

    #[must_use]
    pub fn series_mut(&mut self, index: usize) -> Option<&mut SeriesModel> {
        self.series.get_mut(index)
    }

    /// Visible series in declaration order. Filtered series are skipped but
    /// the others keep their raw `series_index`.
    pub fn each_series(&self) -> impl Iterator<Item = &SeriesModel> {
        self.series.iter().filter(|series| !series.filtered)
    }

    /// Every declared series, filtered or not.
    pub fn each_raw_series(&self) -> impl Iterator<Item = &SeriesModel> {
        self.series.iter()
    }

    pub fn each_raw_series_mut(&mut self) -> impl Iterator<Item = &mut SeriesModel> {
        self.series.iter_mut()
    }

    fn reindex_series(&mut self) {
        for (index, series) in self.series.iter_mut().enumerate() {
            series.series_index = index;
        }
    }
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_owned()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TitleOption {
    Many(Vec<TitleBlock>),
    One(TitleBlock),
}

fn one_or_many_titles<'de, D>(deserializer: D) -> Result<Vec<TitleBlock>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TitleOption::deserialize(deserializer)? {
        TitleOption::Many(titles) => titles,
        TitleOption::One(title) => vec![title],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DataItem, SeriesData};

    #[test]
    fn single_title_object_and_title_list_both_parse() {
        let one = ChartModel::from_json_str(r#"{"title": {"text": "Sales"}}"#).expect("one");
        let many = ChartModel::from_json_str(r#"{"title": [{"text": "A"}, {"text": "B"}]}"#)
            .expect("many");

        assert_eq!(one.title_text(), Some("Sales"));
        assert_eq!(many.title_text(), Some("A"));
    }

    #[test]
    fn empty_first_title_reads_as_no_title() {
        let chart = ChartModel::new()
            .with_title(TitleBlock::new(""))
            .with_title(TitleBlock::new("ignored"));
        assert_eq!(chart.title_text(), None);
    }

    #[test]
    fn json_series_receive_declaration_indices() {
        let chart = ChartModel::from_json_str(
            r#"{"series": [
                {"type": "bar", "seriesIndex": 7, "data": {"items": [{"value": 1}]}},
                {"type": "line", "filtered": true},
                {"type": "pie"}
            ]}"#,
        )
        .expect("chart");

        let indices: Vec<usize> = chart.each_raw_series().map(|s| s.series_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        let visible: Vec<usize> = chart.each_series().map(|s| s.series_index).collect();
        assert_eq!(visible, vec![0, 2]);
        assert_eq!(chart.locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn pushed_series_are_indexed_in_order() {
        let chart = ChartModel::new()
            .with_series(SeriesModel::new("bar", SeriesData::new(vec![DataItem::new(1.0)])))
            .with_series(SeriesModel::new("line", SeriesData::default()));
        assert_eq!(chart.series_count(), 2);
        assert_eq!(chart.series(1).map(|s| s.series_index), Some(1));
    }
}
