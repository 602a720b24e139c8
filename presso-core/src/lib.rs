//! Maps abstract pressure test parameters onto load-engine thread groups.
//!
//! A [`PressureContext`] goes in, one [`PressureModeAbility`] operation runs, and
//! an engine-specific configuration record comes out. Nothing here does I/O or
//! keeps state between calls.

pub mod ability;
pub mod coerce;

mod attributes;
mod context;
mod error;
mod hold_time;
mod mode;

pub use ability::{
    AbilityConfig, ConcurrencyAbility, DisplayLocale, FlowDebugAbility, InspectionAbility,
    JmeterAbility, PressureModeAbility, PressureScene, TpsAbility, TryRunAbility,
};
pub use attributes::ExtraAttributes;
pub use context::{ParamBag, PressureContext, TPS_TARGET_LEVEL};
pub use error::{Error, Result};
pub use hold_time::hold_time;
pub use mode::PressureTestMode;
pub use presso_value::Value;
