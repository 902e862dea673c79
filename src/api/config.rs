use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TooltipError, TooltipResult};
use crate::format::FormatType;

use super::{FieldOption, SortOption, TitleOption, TooltipOptions};

/// Declarative field entry as found in JSON tooltip configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    pub field: Option<String>,
    pub title: Option<String>,
    pub format_type: Option<String>,
    pub format: Option<String>,
    #[serde(default)]
    pub bin: bool,
    pub remove_original_temporal_field: Option<String>,
    pub render: Option<serde_json::Value>,
}

/// Declarative tooltip options. Closures (computed titles, value accessors,
/// custom comparators) are only available through [`TooltipOptions`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipConfig {
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
    #[serde(default)]
    pub show_all_fields: bool,
    #[serde(default)]
    pub is_composition: bool,
    pub sort: Option<String>,
}

impl TooltipConfig {
    pub fn from_json_str(input: &str) -> TooltipResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TooltipError::Json(format!("failed to parse tooltip config: {e}")))
    }

    pub fn into_options(self) -> TooltipResult<TooltipOptions> {
        let fields = self
            .fields
            .into_iter()
            .enumerate()
            .map(|(index, field)| field.into_option(index))
            .collect::<TooltipResult<Vec<_>>>()?;

        let sort = self.sort.as_deref().and_then(|keyword| {
            let sort = SortOption::from_keyword(keyword);
            if sort.is_none() {
                debug!(keyword, "unrecognized tooltip sort keyword; rows stay unsorted");
            }
            sort
        });

        Ok(TooltipOptions {
            fields,
            show_all_fields: self.show_all_fields,
            is_composition: self.is_composition,
            sort,
        })
    }
}

impl FieldConfig {
    fn into_option(self, index: usize) -> TooltipResult<FieldOption> {
        let Some(field) = self.field.filter(|field| !field.is_empty()) else {
            return Err(TooltipError::InvalidConfig(format!(
                "fields[{index}] requires a non-empty `field`"
            )));
        };

        let format_type = self
            .format_type
            .as_deref()
            .map(|name| parse_format_type(name, index))
            .transpose()?;

        Ok(FieldOption {
            field: Some(field),
            title: self.title.map(TitleOption::Literal),
            value_accessor: None,
            format_type,
            format: self.format,
            bin: self.bin,
            remove_original_temporal_field: self.remove_original_temporal_field,
            render: self.render,
        })
    }
}

fn parse_format_type(name: &str, index: usize) -> TooltipResult<FormatType> {
    match name {
        "number" => Ok(FormatType::Number),
        "time" => Ok(FormatType::Time),
        "string" => Ok(FormatType::String),
        other => Err(TooltipError::InvalidConfig(format!(
            "fields[{index}] has unsupported formatType `{other}`"
        ))),
    }
}

impl TryFrom<TooltipConfig> for TooltipOptions {
    type Error = TooltipError;

    fn try_from(config: TooltipConfig) -> TooltipResult<Self> {
        config.into_options()
    }
}
