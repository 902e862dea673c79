use crate::core::value::number_to_concat_string;
use crate::error::{TooltipError, TooltipResult};

const DEFAULT_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormatKind {
    /// `f`: fixed-point with `precision` decimals.
    Fixed,
    /// `d`: rounded integer.
    Integer,
    /// `%`: value times 100, fixed-point, with a percent sign.
    Percent,
    /// `e`: exponent notation with `precision` mantissa decimals.
    Exponent,
    /// `g` or no type: `precision` significant digits, shortest form otherwise.
    General,
}

/// Parsed numeric specifier of the form `[,][.precision][~][type]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormatSpec {
    pub grouping: bool,
    pub precision: Option<usize>,
    pub trim: bool,
    pub kind: NumberFormatKind,
}

impl NumberFormatSpec {
    pub const INTEGER_GROUPED: Self = Self {
        grouping: true,
        precision: Some(0),
        trim: false,
        kind: NumberFormatKind::Fixed,
    };

    pub const FIXED_2_GROUPED: Self = Self {
        grouping: true,
        precision: Some(2),
        trim: false,
        kind: NumberFormatKind::Fixed,
    };

    pub fn parse(specifier: &str) -> TooltipResult<Self> {
        let invalid = |reason: &str| TooltipError::InvalidFormat {
            specifier: specifier.to_owned(),
            reason: reason.to_owned(),
        };

        let mut rest = specifier;
        let grouping = rest.starts_with(',');
        if grouping {
            rest = &rest[1..];
        }

        let mut precision = None;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let digits_len = after_dot
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_dot.len());
            if digits_len == 0 {
                return Err(invalid("`.` must be followed by a precision"));
            }
            let digits = &after_dot[..digits_len];
            let value = digits
                .parse::<usize>()
                .map_err(|_| invalid("precision is out of range"))?;
            if value > 20 {
                return Err(invalid("precision must be <= 20"));
            }
            precision = Some(value);
            rest = &after_dot[digits_len..];
        }

        let trim = rest.starts_with('~');
        if trim {
            rest = &rest[1..];
        }

        let kind = match rest {
            "" | "g" => NumberFormatKind::General,
            "f" => NumberFormatKind::Fixed,
            "d" => NumberFormatKind::Integer,
            "%" => NumberFormatKind::Percent,
            "e" => NumberFormatKind::Exponent,
            _ => return Err(invalid("unsupported format type")),
        };

        Ok(Self {
            grouping,
            precision,
            trim,
            kind,
        })
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_owned();
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
        }

        let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
        match self.kind {
            NumberFormatKind::Fixed => {
                let text = format!("{:.*}", precision, value);
                self.finish(text)
            }
            NumberFormatKind::Integer => {
                let text = format!("{:.0}", value.round());
                self.finish(text)
            }
            NumberFormatKind::Percent => {
                let text = format!("{:.*}", precision, value * 100.0);
                let mut out = self.finish(text);
                out.push('%');
                out
            }
            NumberFormatKind::Exponent => {
                let text = format!("{:.*e}", precision, value);
                let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
                let mantissa = if self.trim {
                    trim_insignificant_zeros(mantissa)
                } else {
                    mantissa.to_owned()
                };
                let exponent = if exponent.starts_with('-') {
                    exponent.to_owned()
                } else {
                    format!("+{exponent}")
                };
                format!("{mantissa}e{exponent}")
            }
            NumberFormatKind::General => {
                let rounded = match self.precision {
                    Some(significant) => round_to_significant(value, significant.max(1)),
                    None => value,
                };
                let text = number_to_concat_string(rounded);
                if text.contains('e') {
                    return text;
                }
                self.finish(text)
            }
        }
    }

    fn finish(self, text: String) -> String {
        let text = if self.trim {
            trim_insignificant_zeros(&text)
        } else {
            text
        };
        let text = normalize_negative_zero(text);
        if self.grouping {
            group_thousands(&text)
        } else {
            text
        }
    }
}

fn round_to_significant(value: f64, significant: usize) -> f64 {
    format!("{:.*e}", significant - 1, value)
        .parse::<f64>()
        .unwrap_or(value)
}

fn normalize_negative_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(unsigned) if unsigned.chars().all(|c| c == '0' || c == '.') => unsigned.to_owned(),
        _ => text,
    }
}

pub(crate) fn trim_insignificant_zeros(text: &str) -> String {
    if !text.contains('.') {
        return text.to_owned();
    }
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

pub(crate) fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(unsigned) => ("-", unsigned),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
