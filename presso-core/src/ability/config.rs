use crate::attributes::ExtraAttributes;

/// Concurrency-ramp thread group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcurrencyAbility {
    pub name: String,
    pub extra_attributes: ExtraAttributes,
    pub expect_throughput: u64,
    /// Seconds the target concurrency is held after ramp-up.
    pub hold_time: u64,
    pub steps: u64,
    pub ramp_up: u64,
}

/// Arrival-rate (TPS) thread group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TpsAbility {
    pub name: String,
    pub extra_attributes: ExtraAttributes,
    /// Target TPS as engine text (e.g. `"500"`).
    pub target_tps: String,
    pub hold_time: u64,
    pub steps: u64,
    pub ramp_up: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowDebugAbility {
    pub name: String,
    pub extra_attributes: ExtraAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryRunAbility {
    pub name: String,
    pub extra_attributes: ExtraAttributes,
    pub expect_throughput: u64,
    pub loops: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionAbility {
    pub name: String,
    pub extra_attributes: ExtraAttributes,
    pub loops: u64,
}

/// Any ability record, as returned by scene dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbilityConfig {
    Concurrency(ConcurrencyAbility),
    Tps(TpsAbility),
    FlowDebug(FlowDebugAbility),
    TryRun(TryRunAbility),
    Inspection(InspectionAbility),
}

impl AbilityConfig {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Concurrency(a) => &a.name,
            Self::Tps(a) => &a.name,
            Self::FlowDebug(a) => &a.name,
            Self::TryRun(a) => &a.name,
            Self::Inspection(a) => &a.name,
        }
    }

    #[must_use]
    pub fn extra_attributes(&self) -> &ExtraAttributes {
        match self {
            Self::Concurrency(a) => &a.extra_attributes,
            Self::Tps(a) => &a.extra_attributes,
            Self::FlowDebug(a) => &a.extra_attributes,
            Self::TryRun(a) => &a.extra_attributes,
            Self::Inspection(a) => &a.extra_attributes,
        }
    }

    /// Hold time in seconds, for the abilities that derive one.
    #[must_use]
    pub fn hold_time(&self) -> Option<u64> {
        match self {
            Self::Concurrency(a) => Some(a.hold_time),
            Self::Tps(a) => Some(a.hold_time),
            Self::FlowDebug(_) | Self::TryRun(_) | Self::Inspection(_) => None,
        }
    }
}
