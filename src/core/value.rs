use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Flat, insertion-ordered working copy of a mark datum.
///
/// Enumeration order is observable: all-fields tooltips list rows in this order.
pub type FieldRecord = IndexMap<String, FieldValue>;

/// A single datum value.
///
/// An absent value is modeled as `Option::None` by callers, never as a variant.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
    Map(FieldRecord),
    Null,
}

impl FieldValue {
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    #[must_use]
    pub fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Truthiness as the datum producer sees it: empty strings, zero, `NaN`,
    /// `false` and `null` are falsy. Dates and maps are always truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::String(value) => !value.is_empty(),
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::Boolean(value) => *value,
            Self::Date(_) | Self::Map(_) => true,
            Self::Null => false,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&FieldRecord> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// String coercion used when values are concatenated into labels.
    ///
    /// Numbers print like script numbers (`10`, `1.5`, `NaN`, `Infinity`),
    /// dates print as RFC 3339 and maps as compact JSON.
    #[must_use]
    pub fn to_concat_string(&self) -> String {
        match self {
            Self::String(value) => value.clone(),
            Self::Number(value) => number_to_concat_string(*value),
            Self::Boolean(value) => value.to_string(),
            Self::Date(value) => value.to_rfc3339_opts(SecondsFormat::Millis, true),
            Self::Map(_) => self.to_json_value().to_string(),
            Self::Null => "null".to_owned(),
        }
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::String(value) => serde_json::Value::String(value.clone()),
            Self::Number(value) => serde_json::Number::from_f64(*value)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::Boolean(value) => serde_json::Value::Bool(*value),
            Self::Date(_) => serde_json::Value::String(self.to_concat_string()),
            Self::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json_value()))
                    .collect(),
            ),
            Self::Null => serde_json::Value::Null,
        }
    }
}

/// Script-style number to string: plain decimal between `1e-6` and `1e21`,
/// exponent form (`1e+21`, `1.5e-7`) outside that range.
pub(crate) fn number_to_concat_string(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        }
    } else if value == 0.0 {
        // Covers negative zero.
        "0".to_owned()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        value.to_string()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<FieldRecord> for FieldValue {
    fn from(value: FieldRecord) -> Self {
        Self::Map(value)
    }
}

/// Arrays become maps keyed by element index, matching property access on
/// the original datum (`items.0`).
impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(value) => Self::Boolean(value),
            serde_json::Value::Number(value) => Self::Number(value.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(value) => Self::String(value),
            serde_json::Value::Array(items) => Self::Map(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), Self::from(item)))
                    .collect(),
            ),
            serde_json::Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(key, item)| (key, Self::from(item)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(value) => serializer.serialize_str(value),
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::Boolean(value) => serializer.serialize_bool(*value),
            Self::Date(_) => serializer.serialize_str(&self.to_concat_string()),
            Self::Map(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
            Self::Null => serializer.serialize_unit(),
        }
    }
}
