/// Pressure test mode (the string form used by contexts/CLI).
///
/// Only [`PressureTestMode::Fixed`] keeps the full duration as hold time; every
/// ramped mode subtracts the ramp-up period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive)]
pub enum PressureTestMode {
    #[strum(to_string = "FIXED", serialize = "1")]
    Fixed,

    #[strum(
        to_string = "LINEAR",
        serialize = "RAMPED",
        serialize = "RAMP",
        serialize = "2"
    )]
    Linear,

    #[strum(
        to_string = "STAIR",
        serialize = "STEP",
        serialize = "STEPPED",
        serialize = "3"
    )]
    Stair,
}

impl PressureTestMode {
    /// Mode used for identifiers that match no known spelling.
    pub const DEFAULT: Self = Self::Linear;

    /// Strict lookup. `None` means [`resolve`](Self::resolve) would fall back.
    #[must_use]
    pub fn try_resolve(identifier: &str) -> Option<Self> {
        identifier.trim().parse().ok()
    }

    /// Total resolution: unknown or empty identifiers map to [`Self::DEFAULT`].
    #[must_use]
    pub fn resolve(identifier: &str) -> Self {
        Self::try_resolve(identifier).unwrap_or_else(|| {
            tracing::debug!(
                target: "presso.mode",
                identifier,
                fallback = %Self::DEFAULT,
                "unrecognized pressure mode"
            );
            Self::DEFAULT
        })
    }

    #[must_use]
    pub fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed)
    }
}
