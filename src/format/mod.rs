//! Value formatting collaborators used by tooltip rows.
//!
//! `custom_format` applies an explicit `formatType`/`format` hint and may
//! decline; `auto_format` always produces a display string.

pub mod number;
pub mod time;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::FieldValue;

pub use number::{NumberFormatKind, NumberFormatSpec};
pub use time::format_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    Number,
    Time,
    String,
}

/// Formats `value` with an explicit hint.
///
/// Returns `None` when either hint is missing, when the value does not fit
/// the hint, or when the specifier cannot be parsed.
pub fn custom_format(
    value: &FieldValue,
    format_type: Option<FormatType>,
    format: Option<&str>,
) -> Option<String> {
    let (format_type, format) = (format_type?, format?);
    match format_type {
        FormatType::Number => {
            let number = match value {
                FieldValue::Number(number) => *number,
                FieldValue::String(text) => text.trim().parse::<f64>().ok()?,
                _ => return None,
            };
            match NumberFormatSpec::parse(format) {
                Ok(spec) => Some(spec.format(number)),
                Err(err) => {
                    warn!(error = %err, "falling back to auto format");
                    None
                }
            }
        }
        FormatType::Time => {
            let FieldValue::Date(date) = value else {
                return None;
            };
            match format_time(*date, format) {
                Ok(text) => Some(text),
                Err(err) => {
                    warn!(error = %err, "falling back to auto format");
                    None
                }
            }
        }
        FormatType::String => Some(value.to_concat_string()),
    }
}

/// Default display string for a value with no usable hint.
#[must_use]
pub fn auto_format(value: &FieldValue) -> String {
    match value {
        // Beyond 1e21 the grouped form is unreadable; exponent form as in coercion.
        FieldValue::Number(number) if number.abs() >= 1e21 && number.is_finite() => {
            value.to_concat_string()
        }
        FieldValue::Number(number) => {
            let spec = if number.fract() == 0.0 {
                NumberFormatSpec::INTEGER_GROUPED
            } else {
                NumberFormatSpec::FIXED_2_GROUPED
            };
            spec.format(*number)
        }
        FieldValue::Date(date) => date.format(time::AUTO_DATE_PATTERN).to_string(),
        other => other.to_concat_string(),
    }
}

/// Custom format when it yields a non-empty string, auto format otherwise.
#[must_use]
pub fn format_field_value(
    value: &FieldValue,
    format_type: Option<FormatType>,
    format: Option<&str>,
) -> String {
    custom_format(value, format_type, format)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| auto_format(value))
}
