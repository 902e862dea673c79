use tracing::trace;

use crate::core::{FieldRecord, FieldValue, MarkType};

use super::FieldOption;

/// Layout-engine artifacts that never carry user data.
pub const LAYOUT_METADATA_KEYS: [&str; 10] = [
    "width",
    "height",
    "count_start",
    "count_end",
    "layout_start",
    "layout_mid",
    "layout_end",
    "layout_path",
    "layout_x",
    "layout_y",
];

/// Removes `keys` while keeping the order of the remaining fields.
pub fn remove_fields<S: AsRef<str>>(record: &mut FieldRecord, keys: &[S]) {
    for key in keys {
        record.shift_remove(key.as_ref());
    }
}

pub fn strip_layout_metadata(record: &mut FieldRecord) {
    remove_fields(record, &LAYOUT_METADATA_KEYS);
}

/// Drops the raw temporal field that a timeUnit field duplicates
/// (e.g. keeps `YEAR(date)` and removes `date`).
pub fn remove_duplicate_time_fields(record: &mut FieldRecord, fields: &[FieldOption]) {
    for option in fields {
        if let Some(original) = option.remove_original_temporal_field.as_deref() {
            record.shift_remove(original);
        }
    }
}

/// Collapses `field`, `field_mid` and `field_end` into a single `"start-end"`
/// string stored under `field`.
///
/// `field_mid` and `field_end` are removed even when the range cannot be built.
pub fn combine_bin_fields(record: &mut FieldRecord, fields: &[FieldOption]) {
    for option in fields.iter().filter(|option| option.bin) {
        let Some(start_key) = option.field.as_deref() else {
            continue;
        };
        let mid_key = format!("{start_key}_mid");
        let end_key = format!("{start_key}_end");

        let range = match (record.get(start_key), record.get(&end_key)) {
            (Some(start), Some(end)) => Some(format!(
                "{}-{}",
                start.to_concat_string(),
                end.to_concat_string()
            )),
            _ => None,
        };
        if let Some(range) = range {
            trace!(field = start_key, range = %range, "combined bin range");
            record.insert(start_key.to_owned(), FieldValue::String(range));
        }

        record.shift_remove(&mid_key);
        record.shift_remove(&end_key);
    }
}

/// Line and area marks only expose the last datum of their series, so
/// date-valued fields are dropped and the stable nominal fields remain.
pub fn drop_fields_for_line_area(mark_type: &MarkType, record: &mut FieldRecord) {
    if !mark_type.is_series_outline() {
        return;
    }
    let before = record.len();
    record.retain(|_, value| !value.is_date());
    trace!(
        mark_type = %mark_type,
        dropped = before - record.len(),
        "dropped temporal fields for series mark"
    );
}
