use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{TooltipError, TooltipResult};

use super::value::{FieldRecord, FieldValue};

/// Mark type tag of a rendered item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarkType {
    Arc,
    Area,
    Group,
    Image,
    Line,
    Path,
    Rect,
    Rule,
    Shape,
    Symbol,
    Text,
    Trail,
    Other(String),
}

impl MarkType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Arc => "arc",
            Self::Area => "area",
            Self::Group => "group",
            Self::Image => "image",
            Self::Line => "line",
            Self::Path => "path",
            Self::Rect => "rect",
            Self::Rule => "rule",
            Self::Shape => "shape",
            Self::Symbol => "symbol",
            Self::Text => "text",
            Self::Trail => "trail",
            Self::Other(name) => name,
        }
    }

    /// Line and area marks only report the last datum of their series.
    #[must_use]
    pub fn is_series_outline(&self) -> bool {
        matches!(self, Self::Line | Self::Area)
    }
}

impl FromStr for MarkType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "arc" => Self::Arc,
            "area" => Self::Area,
            "group" => Self::Group,
            "image" => Self::Image,
            "line" => Self::Line,
            "path" => Self::Path,
            "rect" => Self::Rect,
            "rule" => Self::Rule,
            "shape" => Self::Shape,
            "symbol" => Self::Symbol,
            "text" => Self::Text,
            "trail" => Self::Trail,
            other => Self::Other(other.to_owned()),
        })
    }
}

impl fmt::Display for MarkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MarkType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MarkType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        let Ok(mark_type) = name.parse::<MarkType>();
        Ok(mark_type)
    }
}

/// A rendered mark together with the datum it was drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkItem {
    pub mark_type: MarkType,
    pub datum: FieldRecord,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarkItemJson {
    mark_type: MarkType,
    #[serde(default)]
    datum: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    date_fields: Vec<String>,
}

impl MarkItem {
    #[must_use]
    pub fn new(mark_type: MarkType, datum: FieldRecord) -> Self {
        Self { mark_type, datum }
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.datum.insert(name.into(), value.into());
        self
    }

    /// Parses `{ "markType": ..., "datum": {...}, "dateFields": [...] }`.
    ///
    /// JSON has no date type, so fields listed in `dateFields` are converted
    /// from RFC 3339 strings or epoch milliseconds.
    pub fn from_json_str(input: &str) -> TooltipResult<Self> {
        let payload: MarkItemJson = serde_json::from_str(input)
            .map_err(|e| TooltipError::Json(format!("failed to parse mark item: {e}")))?;

        let mut datum: FieldRecord = payload
            .datum
            .into_iter()
            .map(|(key, value)| (key, FieldValue::from(value)))
            .collect();

        for name in &payload.date_fields {
            let Some(value) = datum.get_mut(name) else {
                continue;
            };
            *value = FieldValue::Date(parse_date_value(name, value)?);
        }

        Ok(Self::new(payload.mark_type, datum))
    }
}

fn parse_date_value(name: &str, value: &FieldValue) -> TooltipResult<DateTime<Utc>> {
    match value {
        FieldValue::Date(date) => Ok(*date),
        FieldValue::String(text) => DateTime::parse_from_rfc3339(text)
            .map(|date| date.with_timezone(&Utc))
            .map_err(|e| {
                TooltipError::InvalidConfig(format!(
                    "date field `{name}` is not RFC 3339 (`{text}`): {e}"
                ))
            }),
        FieldValue::Number(millis) if millis.is_finite() => {
            DateTime::<Utc>::from_timestamp_millis(millis.round() as i64).ok_or_else(|| {
                TooltipError::InvalidConfig(format!(
                    "date field `{name}` is out of range: {millis}"
                ))
            })
        }
        other => Err(TooltipError::InvalidConfig(format!(
            "date field `{name}` must be a string or epoch milliseconds, got {}",
            other.to_concat_string()
        ))),
    }
}
