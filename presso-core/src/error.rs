pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("`{field}` is not a valid number (got `{value}`)")]
    ParameterFormat { field: String, value: String },

    #[error("missing required parameter `{0}`")]
    MissingParameter(String),

    #[error("hold time would be negative: duration {duration} minus ramp-up {ramp_up}")]
    NegativeDuration { duration: i64, ramp_up: i64 },
}

impl Error {
    pub(crate) fn format(field: impl Into<String>, value: impl std::fmt::Display) -> Self {
        Self::ParameterFormat {
            field: field.into(),
            value: value.to_string(),
        }
    }

    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingParameter(field.into())
    }
}
