use tracing::{debug, trace};

use crate::core::{MarkItem, MarkType};

use super::cleaning::{
    combine_bin_fields, drop_fields_for_line_area, remove_duplicate_time_fields,
    strip_layout_metadata,
};
use super::rows::{prepare_all_fields_data, prepare_custom_fields_data};
use super::sort::sort_rows;
use super::{TooltipOptions, TooltipRow};

/// Prepares tooltip rows for a hovered mark item.
///
/// Returns `None` for group marks, which carry no displayable datum.
/// The item's datum is copied; the caller's item is never modified.
pub fn get_tooltip_data(item: &MarkItem, options: &TooltipOptions) -> Option<Vec<TooltipRow>> {
    if item.mark_type == MarkType::Group {
        trace!("skipping tooltip for group mark");
        return None;
    }

    let mut record = item.datum.clone();
    strip_layout_metadata(&mut record);
    remove_duplicate_time_fields(&mut record, &options.fields);
    combine_bin_fields(&mut record, &options.fields);
    drop_fields_for_line_area(&item.mark_type, &mut record);

    let mut rows = if options.show_all_fields || options.fields.is_empty() {
        prepare_all_fields_data(&record, options)
    } else {
        prepare_custom_fields_data(&record, options)
    };

    if let Some(sort) = &options.sort {
        sort_rows(&mut rows, sort);
    }

    debug!(
        mark_type = %item.mark_type,
        show_all_fields = options.show_all_fields,
        rows = rows.len(),
        "prepared tooltip rows"
    );
    Some(rows)
}

/// Owns tooltip options across hover events.
#[derive(Debug, Clone, Default)]
pub struct TooltipFormatter {
    options: TooltipOptions,
}

impl TooltipFormatter {
    #[must_use]
    pub fn new(options: TooltipOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &TooltipOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TooltipOptions) {
        self.options = options;
    }

    #[must_use]
    pub fn tooltip_rows(&self, item: &MarkItem) -> Option<Vec<TooltipRow>> {
        get_tooltip_data(item, &self.options)
    }
}
