use presso_value::{ObjectMap, Value};

use crate::coerce;
use crate::error::{Error, Result};
use crate::hold_time::hold_time;
use crate::mode::PressureTestMode;

/// Generic engine parameters keyed by name (e.g. [`TPS_TARGET_LEVEL`]).
pub type ParamBag = ObjectMap;

/// Parameter-bag key holding the target TPS for the throughput ability.
pub const TPS_TARGET_LEVEL: &str = "tpsTargetLevel";

/// Pressure test parameters supplied by the plan assembler.
///
/// `duration` and `ramp_up` are kept as raw [`Value`]s because they often arrive
/// as formatted text (`"120.0"`); abilities coerce them on use.
#[derive(Debug, Clone, Default)]
pub struct PressureContext {
    /// Total test duration in seconds.
    pub duration: Option<Value>,
    /// Ramp-up period in seconds. Absent or null means no ramp-up.
    pub ramp_up: Option<Value>,
    pub pressure_mode: String,
    pub expect_throughput: Option<u64>,
    pub steps: Option<u64>,
    pub loops: Option<u64>,
    pub params: ParamBag,
}

impl PressureContext {
    #[must_use]
    pub fn mode(&self) -> PressureTestMode {
        PressureTestMode::resolve(&self.pressure_mode)
    }

    pub fn duration_secs(&self) -> Result<i64> {
        match &self.duration {
            None | Some(Value::Null) => Err(Error::missing("duration")),
            Some(v) => coerce::integral("duration", v),
        }
    }

    /// Ramp-up in whole seconds, `None` when the context carries none.
    pub fn ramp_up_secs(&self) -> Result<Option<i64>> {
        match &self.ramp_up {
            None | Some(Value::Null) => Ok(None),
            Some(v) => coerce::integral("rampUp", v).map(Some),
        }
    }

    /// Hold time for this context's resolved mode.
    ///
    /// Both inputs are coerced in every mode, so malformed ramp-up text is an
    /// error even when the mode ignores it.
    pub fn hold_time(&self) -> Result<u64> {
        let duration = self.duration_secs()?;
        let ramp_up = self.ramp_up_secs()?;
        hold_time(duration, ramp_up, self.mode())
    }

    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key).filter(|v| !v.is_null())
    }

    pub(crate) fn require_expect_throughput(&self) -> Result<u64> {
        self.expect_throughput
            .ok_or_else(|| Error::missing("expectThroughput"))
    }

    pub(crate) fn require_steps(&self) -> Result<u64> {
        self.steps.ok_or_else(|| Error::missing("steps"))
    }

    pub(crate) fn require_loops(&self) -> Result<u64> {
        self.loops.ok_or_else(|| Error::missing("loops"))
    }
}
