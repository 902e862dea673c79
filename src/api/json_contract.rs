use serde::Serialize;

use crate::error::{TooltipError, TooltipResult};

use super::TooltipRow;

pub const TOOLTIP_ROWS_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipRowsJsonContractV1<'a> {
    pub schema_version: u32,
    pub rows: &'a [TooltipRow],
}

pub fn rows_to_json_pretty(rows: &[TooltipRow]) -> TooltipResult<String> {
    serde_json::to_string_pretty(rows)
        .map_err(|e| TooltipError::Json(format!("failed to serialize tooltip rows: {e}")))
}

pub fn rows_to_json_contract_v1_pretty(rows: &[TooltipRow]) -> TooltipResult<String> {
    let payload = TooltipRowsJsonContractV1 {
        schema_version: TOOLTIP_ROWS_JSON_SCHEMA_V1,
        rows,
    };
    serde_json::to_string_pretty(&payload).map_err(|e| {
        TooltipError::Json(format!("failed to serialize tooltip rows contract v1: {e}"))
    })
}
