mod config;
mod jmeter;

pub use config::{
    AbilityConfig, ConcurrencyAbility, FlowDebugAbility, InspectionAbility, TpsAbility,
    TryRunAbility,
};
pub use jmeter::{DisplayLocale, JmeterAbility};

use crate::context::PressureContext;
use crate::error::Result;

/// Which ability a caller asks for (the string form used by the CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PressureScene {
    Concurrency,
    Tps,
    FlowDebug,
    TryRun,
    Inspection,
}

/// Pressure-mode abilities of one load engine.
///
/// Each operation is a pure mapping from the context to that engine's
/// thread-group configuration. Implementations carry only constants.
pub trait PressureModeAbility: Send + Sync {
    fn concurrency(&self, ctx: &PressureContext) -> Result<ConcurrencyAbility>;

    fn tps(&self, ctx: &PressureContext) -> Result<TpsAbility>;

    fn flow_debug(&self, ctx: &PressureContext) -> FlowDebugAbility;

    fn try_run(&self, ctx: &PressureContext) -> Result<TryRunAbility>;

    fn inspection(&self, ctx: &PressureContext) -> Result<InspectionAbility>;

    fn build(&self, scene: PressureScene, ctx: &PressureContext) -> Result<AbilityConfig> {
        let config = match scene {
            PressureScene::Concurrency => AbilityConfig::Concurrency(self.concurrency(ctx)?),
            PressureScene::Tps => AbilityConfig::Tps(self.tps(ctx)?),
            PressureScene::FlowDebug => AbilityConfig::FlowDebug(self.flow_debug(ctx)),
            PressureScene::TryRun => AbilityConfig::TryRun(self.try_run(ctx)?),
            PressureScene::Inspection => AbilityConfig::Inspection(self.inspection(ctx)?),
        };

        tracing::debug!(
            target: "presso.ability",
            %scene,
            name = config.name(),
            hold_time = config.hold_time(),
            "ability built"
        );

        Ok(config)
    }
}
