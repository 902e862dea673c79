use smallvec::SmallVec;
use tracing::warn;

use crate::core::{FieldRecord, FieldValue};

/// Resolves a dot-separated field path against the record.
///
/// Quirks kept for compatibility with existing tooltip configs:
/// - a falsy first-level value (`0`, `""`, `false`, `null`) counts as missing;
/// - a nested segment that is missing or falsy is skipped without failing
///   the lookup; later segments apply to the last resolved value;
/// - only map values are descended into, so segments naming properties of
///   strings or lists (`name.length`) are skipped like missing keys.
///
/// A missing field logs a warning unless `is_composition` is set.
pub fn get_value(record: &FieldRecord, path: Option<&str>, is_composition: bool) -> Option<FieldValue> {
    // Accessor-only options reach here without a path.
    let path = path.filter(|path| !path.is_empty())?;

    let segments: SmallVec<[&str; 4]> = path.split('.').collect();
    let (first, rest) = segments.split_first()?;

    let resolved = record
        .get(*first)
        .filter(|value| value.is_truthy())
        .map(|root| {
            let mut current = root;
            for segment in rest {
                match current.as_map().and_then(|map| map.get(*segment)) {
                    Some(next) if next.is_truthy() => current = next,
                    _ => {}
                }
            }
            current
        });

    match resolved {
        Some(value) => Some(value.clone()),
        None => {
            if !is_composition {
                warn!(field = path, "cannot find tooltip field in data");
            }
            None
        }
    }
}
