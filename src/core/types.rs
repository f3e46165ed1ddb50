use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw, unformatted value stored for one data item.
///
/// Descriptions always read this value, never a display-formatted one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Tuple(Vec<RawValue>),
    #[default]
    Missing,
}

impl RawValue {
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(values: Vec<T>) -> Self {
        Self::Tuple(values.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&format_number(*value)),
            Self::Text(text) => f.write_str(text),
            Self::Tuple(values) => {
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
            Self::Missing => f.write_str("-"),
        }
    }
}

/// Formats a number the way chart hosts print plain numeric values.
///
/// Magnitudes in `[1e-6, 1e21)` print positionally; others use the
/// shortest exponent form with an explicit sign, e.g. `1e+21` or `1.5e-7`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        }
    } else if value == 0.0 {
        "0".to_owned()
    } else if (1e-6..1e21).contains(&value.abs()) {
        value.to_string()
    } else {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    }
}

/// One data point within a series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: RawValue,
}

impl DataItem {
    #[must_use]
    pub fn new(value: impl Into<RawValue>) -> Self {
        Self {
            name: None,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn named(name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
        }
    }

    /// Display name, treating an empty name as absent.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_print_without_trailing_fraction() {
        assert_eq!(RawValue::from(12.0).to_string(), "12");
        assert_eq!(RawValue::from(1.5).to_string(), "1.5");
        assert_eq!(RawValue::from(-0.0).to_string(), "0");
        assert_eq!(RawValue::from(f64::INFINITY).to_string(), "Infinity");
    }

    #[test]
    fn extreme_magnitudes_switch_to_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn tuples_join_with_commas() {
        let value = RawValue::from(vec![3.0, 4.5]);
        assert_eq!(value.to_string(), "3,4.5");
        assert_eq!(RawValue::Missing.to_string(), "-");
    }

    #[test]
    fn raw_value_deserializes_untagged() {
        let values: Vec<RawValue> =
            serde_json::from_str(r#"[1, "a", [2, 3], null]"#).expect("parse values");
        assert_eq!(
            values,
            vec![
                RawValue::Number(1.0),
                RawValue::Text("a".to_owned()),
                RawValue::Tuple(vec![RawValue::Number(2.0), RawValue::Number(3.0)]),
                RawValue::Missing,
            ]
        );
    }

    #[test]
    fn empty_item_name_is_not_a_display_name() {
        assert_eq!(DataItem::named("", 1.0).display_name(), None);
        assert_eq!(DataItem::named("Mon", 1.0).display_name(), Some("Mon"));
    }
}
