use std::collections::HashMap;

use serde::Serialize;

use crate::core::{FieldRecord, FieldValue};
use crate::format::format_field_value;

use super::lookup::get_value;
use super::{FieldOption, TooltipOptions};

/// One display row bound to the tooltip markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipRow {
    pub title: String,
    pub value: String,
    pub raw_value: FieldValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<serde_json::Value>,
}

/// Builds rows for the configured fields, in configuration order.
///
/// Options whose value cannot be resolved produce no row.
pub fn prepare_custom_fields_data(record: &FieldRecord, options: &TooltipOptions) -> Vec<TooltipRow> {
    options
        .fields
        .iter()
        .filter_map(|option| custom_field_row(record, option, options.is_composition))
        .collect()
}

fn custom_field_row(
    record: &FieldRecord,
    option: &FieldOption,
    is_composition: bool,
) -> Option<TooltipRow> {
    let title = option
        .title
        .as_ref()
        .and_then(|title| title.resolve(record))
        .or_else(|| option.field.clone())
        .unwrap_or_default();

    // Falsy accessor results fall through to the path lookup.
    let raw_value = option
        .value_accessor
        .as_ref()
        .and_then(|accessor| accessor(record))
        .filter(FieldValue::is_truthy)
        .or_else(|| get_value(record, option.field.as_deref(), is_composition))?;

    let value = format_field_value(&raw_value, option.format_type, option.format.as_deref());
    Some(TooltipRow {
        title,
        value,
        raw_value,
        render: option.render.clone(),
    })
}

/// Builds one row per remaining record field, in record order.
///
/// Configured options only contribute titles and format hints here; options
/// naming fields absent from the record are ignored.
pub fn prepare_all_fields_data(record: &FieldRecord, options: &TooltipOptions) -> Vec<TooltipRow> {
    // Later options for the same field win.
    let by_field: HashMap<&str, &FieldOption> = options
        .fields
        .iter()
        .filter_map(|option| option.field.as_deref().map(|field| (field, option)))
        .collect();

    record
        .iter()
        .map(|(field, raw_value)| {
            let option = by_field.get(field.as_str()).copied();
            let title = option
                .and_then(|option| option.title.as_ref())
                .and_then(|title| title.resolve(record))
                .unwrap_or_else(|| field.clone());
            let value = format_field_value(
                raw_value,
                option.and_then(|option| option.format_type),
                option.and_then(|option| option.format.as_deref()),
            );
            TooltipRow {
                title,
                value,
                raw_value: raw_value.clone(),
                render: None,
            }
        })
        .collect()
}
