use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::error::{TooltipError, TooltipResult};

pub const AUTO_DATE_PATTERN: &str = "%B %d, %Y";

/// Formats `date` in UTC with a d3/strftime-style specifier.
///
/// `%L` (milliseconds) is accepted as an alias of `%3f`.
pub fn format_time(date: DateTime<Utc>, specifier: &str) -> TooltipResult<String> {
    let pattern = translate_millis_directive(specifier);
    let items: Vec<Item<'_>> = StrftimeItems::new(&pattern).collect();
    let invalid = |reason: &str| TooltipError::InvalidFormat {
        specifier: specifier.to_owned(),
        reason: reason.to_owned(),
    };
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(invalid("unsupported time directive"));
    }

    // Some directives (e.g. `%#z`) parse but cannot be rendered.
    let mut out = String::with_capacity(pattern.len() + 8);
    write!(out, "{}", date.format_with_items(items.into_iter()))
        .map_err(|_| invalid("time directive cannot be rendered"))?;
    Ok(out)
}

fn translate_millis_directive(specifier: &str) -> String {
    let mut out = String::with_capacity(specifier.len() + 2);
    let mut chars = specifier.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('L') => out.push_str("%3f"),
            Some(next) => {
                out.push('%');
                out.push(next);
            }
            None => out.push('%'),
        }
    }
    out
}
