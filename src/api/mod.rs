pub mod cleaning;
mod config;
mod json_contract;
pub mod lookup;
mod options;
mod rows;
pub mod sort;
mod tooltip;

pub use cleaning::{
    LAYOUT_METADATA_KEYS, combine_bin_fields, drop_fields_for_line_area,
    remove_duplicate_time_fields, remove_fields, strip_layout_metadata,
};
pub use config::{FieldConfig, TooltipConfig};
pub use json_contract::{
    TOOLTIP_ROWS_JSON_SCHEMA_V1, TooltipRowsJsonContractV1, rows_to_json_contract_v1_pretty,
    rows_to_json_pretty,
};
pub use lookup::get_value;
pub use options::{
    FieldOption, RowComparatorFn, SortOption, TitleFn, TitleOption, TooltipOptions,
    ValueAccessorFn,
};
pub use rows::{TooltipRow, prepare_all_fields_data, prepare_custom_fields_data};
pub use sort::{SortKey, default_sort, locale_compare};
pub use tooltip::{TooltipFormatter, get_tooltip_data};
