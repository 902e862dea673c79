use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::core::{FieldRecord, FieldValue};
use crate::format::FormatType;

use super::TooltipRow;

pub type TitleFn = Arc<dyn Fn(&FieldRecord) -> String + Send + Sync + 'static>;
pub type ValueAccessorFn = Arc<dyn Fn(&FieldRecord) -> Option<FieldValue> + Send + Sync + 'static>;
pub type RowComparatorFn = Arc<dyn Fn(&TooltipRow, &TooltipRow) -> Ordering + Send + Sync + 'static>;

/// Row title: a fixed label or one computed from the cleaned record.
#[derive(Clone)]
pub enum TitleOption {
    Literal(String),
    Computed(TitleFn),
}

impl TitleOption {
    /// Resolves the title; an empty result means "no title".
    #[must_use]
    pub fn resolve(&self, record: &FieldRecord) -> Option<String> {
        let title = match self {
            Self::Literal(text) => text.clone(),
            Self::Computed(title_fn) => title_fn(record),
        };
        (!title.is_empty()).then_some(title)
    }
}

impl fmt::Debug for TitleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

/// How tooltip rows are ordered after preparation.
#[derive(Clone)]
pub enum SortOption {
    /// Default comparator keyed on the row title.
    Title,
    /// Default comparator keyed on the raw (unformatted) value.
    Value,
    Custom(RowComparatorFn),
}

impl SortOption {
    pub fn custom<F>(comparator: F) -> Self
    where
        F: Fn(&TooltipRow, &TooltipRow) -> Ordering + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(comparator))
    }

    /// Maps the declarative sort keyword; unknown keywords disable sorting.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "title" => Some(Self::Title),
            "value" => Some(Self::Value),
            _ => None,
        }
    }
}

impl fmt::Debug for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("Title"),
            Self::Value => f.write_str("Value"),
            Self::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

/// One configured tooltip field.
#[derive(Clone, Default)]
pub struct FieldOption {
    /// Dot-path into the record. Optional when `value_accessor` is set.
    pub field: Option<String>,
    pub title: Option<TitleOption>,
    pub value_accessor: Option<ValueAccessorFn>,
    pub format_type: Option<FormatType>,
    pub format: Option<String>,
    /// Marks `field` as the start of a `field`/`field_mid`/`field_end` bin range.
    pub bin: bool,
    /// Raw temporal field duplicated by this timeUnit field; dropped from the record.
    pub remove_original_temporal_field: Option<String>,
    /// Opaque payload handed through to the presentation layer.
    pub render: Option<serde_json::Value>,
}

impl FieldOption {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..Self::default()
        }
    }

    pub fn accessor_only<F>(accessor: F) -> Self
    where
        F: Fn(&FieldRecord) -> Option<FieldValue> + Send + Sync + 'static,
    {
        Self {
            value_accessor: Some(Arc::new(accessor)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(TitleOption::Literal(title.into()));
        self
    }

    pub fn with_title_fn<F>(mut self, title: F) -> Self
    where
        F: Fn(&FieldRecord) -> String + Send + Sync + 'static,
    {
        self.title = Some(TitleOption::Computed(Arc::new(title)));
        self
    }

    pub fn with_value_accessor<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&FieldRecord) -> Option<FieldValue> + Send + Sync + 'static,
    {
        self.value_accessor = Some(Arc::new(accessor));
        self
    }

    #[must_use]
    pub fn with_format(mut self, format_type: FormatType, format: impl Into<String>) -> Self {
        self.format_type = Some(format_type);
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_bin(mut self, bin: bool) -> Self {
        self.bin = bin;
        self
    }

    #[must_use]
    pub fn with_remove_original_temporal_field(mut self, field: impl Into<String>) -> Self {
        self.remove_original_temporal_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_render(mut self, render: serde_json::Value) -> Self {
        self.render = Some(render);
        self
    }
}

impl fmt::Debug for FieldOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldOption")
            .field("field", &self.field)
            .field("title", &self.title)
            .field(
                "value_accessor",
                &self.value_accessor.as_ref().map(|_| "<fn>"),
            )
            .field("format_type", &self.format_type)
            .field("format", &self.format)
            .field("bin", &self.bin)
            .field(
                "remove_original_temporal_field",
                &self.remove_original_temporal_field,
            )
            .field("render", &self.render)
            .finish()
    }
}

/// Tooltip options shared across hover events.
#[derive(Debug, Clone, Default)]
pub struct TooltipOptions {
    /// Ordered field list. When empty, every remaining datum field is shown
    /// regardless of `show_all_fields`.
    pub fields: Vec<FieldOption>,
    pub show_all_fields: bool,
    /// Suppresses missing-field warnings for composed views.
    pub is_composition: bool,
    pub sort: Option<SortOption>,
}

impl TooltipOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Vec<FieldOption>) -> Self {
        self.fields = fields;
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldOption) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_show_all_fields(mut self, show_all_fields: bool) -> Self {
        self.show_all_fields = show_all_fields;
        self
    }

    #[must_use]
    pub fn with_composition(mut self, is_composition: bool) -> Self {
        self.is_composition = is_composition;
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = Some(sort);
        self
    }
}
