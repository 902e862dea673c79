use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use tracing::debug;

use crate::core::FieldValue;

use super::{SortOption, TooltipRow};

/// Row attribute the default comparator reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    RawValue,
}

/// Comparable view of a row attribute, ranked dates first, then numbers,
/// then everything else.
#[derive(Debug, Clone, Copy)]
enum SortValue<'a> {
    Date(DateTime<Utc>),
    Number(f64),
    Text(&'a str),
    Other,
}

impl<'a> SortValue<'a> {
    fn of_row(row: &'a TooltipRow, key: SortKey) -> Self {
        match key {
            SortKey::Title => Self::Text(&row.title),
            SortKey::RawValue => match &row.raw_value {
                FieldValue::Date(date) => Self::Date(*date),
                FieldValue::Number(number) => Self::Number(*number),
                FieldValue::String(text) => Self::Text(text),
                _ => Self::Other,
            },
        }
    }

    fn rank(self) -> u8 {
        match self {
            Self::Date(_) => 0,
            Self::Number(_) => 1,
            Self::Text(_) | Self::Other => 2,
        }
    }
}

/// Default tooltip row ordering for `key`.
///
/// Numbers sort descending, strings ascending (case-insensitive first),
/// dates ascending. Across types dates come first, then numbers; remaining
/// mixed pairs compare equal so the sort stays a total order.
pub fn default_sort(key: SortKey) -> impl Fn(&TooltipRow, &TooltipRow) -> Ordering {
    move |a, b| compare_sort_values(SortValue::of_row(a, key), SortValue::of_row(b, key))
}

fn compare_sort_values(a: SortValue<'_>, b: SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Number(a), SortValue::Number(b)) => OrderedFloat(b).cmp(&OrderedFloat(a)),
        (SortValue::Text(a), SortValue::Text(b)) => locale_compare(a, b),
        (SortValue::Date(a), SortValue::Date(b)) => a.cmp(&b),
        (a, b) => a.rank().cmp(&b.rank()),
    }
}

/// Case-insensitive comparison with a case-sensitive tie-break, so `"a"`
/// sorts next to `"A"` rather than after `"Z"`.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}

pub(crate) fn sort_rows(rows: &mut [TooltipRow], sort: &SortOption) {
    debug!(mode = ?sort, rows = rows.len(), "sorting tooltip rows");
    match sort {
        SortOption::Title => rows.sort_by(default_sort(SortKey::Title)),
        SortOption::Value => rows.sort_by(default_sort(SortKey::RawValue)),
        SortOption::Custom(comparator) => rows.sort_by(|a, b| comparator(a, b)),
    }
}
