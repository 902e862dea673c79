//! chart-tooltip: tooltip content preparation for rendered chart marks.
//!
//! Given a mark item (mark type plus the datum it was drawn from) and a set
//! of tooltip options, this crate selects, reshapes and formats the datum's
//! fields into ordered `{title, value}` rows ready for a presentation layer.

pub mod api;
pub mod core;
pub mod error;
pub mod format;
pub mod telemetry;

pub use api::{
    FieldOption, SortOption, TitleOption, TooltipConfig, TooltipFormatter, TooltipOptions,
    TooltipRow, get_tooltip_data,
};
pub use crate::core::{FieldRecord, FieldValue, MarkItem, MarkType};
pub use error::{TooltipError, TooltipResult};
