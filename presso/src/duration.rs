use std::time::Duration;

/// Why a duration string was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DurationError {
    /// Not a duration at all.
    Invalid(String),
    /// A duration with a sub-second part, which would be truncated away.
    SubSecond(String),
}

impl std::fmt::Display for DurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(s) => write!(f, "invalid duration '{s}' (expected e.g. 120, 90s, 1m30s)"),
            Self::SubSecond(s) => write!(f, "duration '{s}' must be whole seconds"),
        }
    }
}

/// Parses `120` (plain seconds) or a humantime string like `1m30s`.
///
/// Durations feed whole-second engine fields, so any fractional second is rejected.
pub(crate) fn parse_whole_secs(input: &str) -> Result<Duration, DurationError> {
    let s = input.trim();
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        return s
            .parse()
            .map(Duration::from_secs)
            .map_err(|_| DurationError::Invalid(s.to_string()));
    }

    let d = humantime::parse_duration(s).map_err(|_| DurationError::Invalid(s.to_string()))?;
    if d.subsec_nanos() != 0 {
        return Err(DurationError::SubSecond(s.to_string()));
    }
    Ok(d)
}
