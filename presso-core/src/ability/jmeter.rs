use crate::attributes::ExtraAttributes;
use crate::coerce;
use crate::context::{PressureContext, TPS_TARGET_LEVEL};
use crate::error::{Error, Result};

use super::PressureModeAbility;
use super::config::{
    ConcurrencyAbility, FlowDebugAbility, InspectionAbility, TpsAbility, TryRunAbility,
};

const CONCURRENCY_THREAD_GROUP: &str =
    "com.blazemeter.jmeter.threads.concurrency.ConcurrencyThreadGroup";
const CONCURRENCY_THREAD_GROUP_GUI: &str =
    "com.blazemeter.jmeter.threads.concurrency.ConcurrencyThreadGroupGui";
const CONCURRENCY_TEST_NAME: &str = "bzm - Concurrency Thread Group";

const ARRIVALS_THREAD_GROUP: &str = "com.blazemeter.jmeter.threads.arrivals.ArrivalsThreadGroup";
const ARRIVALS_THREAD_GROUP_GUI: &str =
    "com.blazemeter.jmeter.threads.arrivals.ArrivalsThreadGroupGui";
const ARRIVALS_TEST_NAME: &str = "bzm - Arrivals Thread Group";

const THREAD_GROUP: &str = "ThreadGroup";
const THREAD_GROUP_GUI: &str = "ThreadGroupGui";

/// Language of the stock thread group's display name.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::EnumString, strum::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DisplayLocale {
    #[default]
    Zh,
    En,
}

impl DisplayLocale {
    #[must_use]
    pub fn thread_group_name(self) -> &'static str {
        match self {
            Self::Zh => "线程组",
            Self::En => "Thread Group",
        }
    }
}

/// JMeter flavor: blazemeter plugin groups for ramped load, the stock
/// `ThreadGroup` for one-shot runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JmeterAbility {
    locale: DisplayLocale,
}

impl JmeterAbility {
    #[must_use]
    pub fn new(locale: DisplayLocale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub fn locale(&self) -> DisplayLocale {
        self.locale
    }

    fn thread_group_attributes(&self) -> ExtraAttributes {
        engine_attributes(
            THREAD_GROUP_GUI,
            THREAD_GROUP,
            self.locale.thread_group_name(),
        )
    }
}

fn engine_attributes(gui: &str, class: &str, test_name: &str) -> ExtraAttributes {
    ExtraAttributes::new()
        .with("guiclass", gui)
        .with("testclass", class)
        .with("testname", test_name)
        .with("enabled", "true")
}

/// Hold time and ramp-up shared by the ramped abilities.
struct Ramp {
    hold_time: u64,
    ramp_up: u64,
    steps: u64,
}

impl Ramp {
    fn from_context(ctx: &PressureContext) -> Result<Self> {
        let hold_time = ctx.hold_time()?;
        let ramp_up = match ctx.ramp_up_secs()? {
            None => 0,
            Some(v) => u64::try_from(v).map_err(|_| Error::format("rampUp", v))?,
        };
        let steps = ctx.require_steps()?;
        Ok(Self {
            hold_time,
            ramp_up,
            steps,
        })
    }
}

impl PressureModeAbility for JmeterAbility {
    fn concurrency(&self, ctx: &PressureContext) -> Result<ConcurrencyAbility> {
        let expect_throughput = ctx.require_expect_throughput()?;
        let ramp = Ramp::from_context(ctx)?;

        Ok(ConcurrencyAbility {
            name: CONCURRENCY_THREAD_GROUP.to_string(),
            extra_attributes: engine_attributes(
                CONCURRENCY_THREAD_GROUP_GUI,
                CONCURRENCY_THREAD_GROUP,
                CONCURRENCY_TEST_NAME,
            ),
            expect_throughput,
            hold_time: ramp.hold_time,
            steps: ramp.steps,
            ramp_up: ramp.ramp_up,
        })
    }

    fn tps(&self, ctx: &PressureContext) -> Result<TpsAbility> {
        let target = ctx
            .param(TPS_TARGET_LEVEL)
            .ok_or_else(|| Error::missing(TPS_TARGET_LEVEL))?;
        let target_tps = coerce::numeric_text(TPS_TARGET_LEVEL, target)?;
        let ramp = Ramp::from_context(ctx)?;

        Ok(TpsAbility {
            name: ARRIVALS_THREAD_GROUP.to_string(),
            extra_attributes: engine_attributes(
                ARRIVALS_THREAD_GROUP_GUI,
                ARRIVALS_THREAD_GROUP,
                ARRIVALS_TEST_NAME,
            ),
            target_tps,
            hold_time: ramp.hold_time,
            steps: ramp.steps,
            ramp_up: ramp.ramp_up,
        })
    }

    fn flow_debug(&self, _ctx: &PressureContext) -> FlowDebugAbility {
        FlowDebugAbility {
            name: THREAD_GROUP.to_string(),
            extra_attributes: self.thread_group_attributes(),
        }
    }

    fn try_run(&self, ctx: &PressureContext) -> Result<TryRunAbility> {
        Ok(TryRunAbility {
            name: THREAD_GROUP.to_string(),
            extra_attributes: self.thread_group_attributes(),
            expect_throughput: ctx.require_expect_throughput()?,
            loops: ctx.require_loops()?,
        })
    }

    fn inspection(&self, ctx: &PressureContext) -> Result<InspectionAbility> {
        Ok(InspectionAbility {
            name: THREAD_GROUP.to_string(),
            extra_attributes: self.thread_group_attributes(),
            loops: ctx.require_loops()?,
        })
    }
}
