use thiserror::Error;

pub type TooltipResult<T> = Result<T, TooltipError>;

#[derive(Debug, Error)]
pub enum TooltipError {
    #[error("invalid format specifier `{specifier}`: {reason}")]
    InvalidFormat { specifier: String, reason: String },

    #[error("invalid tooltip config: {0}")]
    InvalidConfig(String),

    #[error("json error: {0}")]
    Json(String),
}
