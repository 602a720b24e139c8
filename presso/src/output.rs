use std::fmt::Write as _;

use presso_core::{AbilityConfig, PressureScene, PressureTestMode};

pub(crate) fn render(
    scene: PressureScene,
    mode: PressureTestMode,
    config: &AbilityConfig,
) -> String {
    let mut out = String::new();

    writeln!(&mut out, "scene: {scene}").ok();
    writeln!(&mut out, "name: {}", config.name()).ok();

    match config {
        AbilityConfig::Concurrency(a) => {
            writeln!(&mut out, "mode: {mode}").ok();
            writeln!(&mut out, "  expectThroughput: {}", a.expect_throughput).ok();
            writeln!(&mut out, "  holdTime: {}s", a.hold_time).ok();
            writeln!(&mut out, "  rampUp: {}s", a.ramp_up).ok();
            writeln!(&mut out, "  steps: {}", a.steps).ok();
        }
        AbilityConfig::Tps(a) => {
            writeln!(&mut out, "mode: {mode}").ok();
            writeln!(&mut out, "  targetTps: {}", a.target_tps).ok();
            writeln!(&mut out, "  holdTime: {}s", a.hold_time).ok();
            writeln!(&mut out, "  rampUp: {}s", a.ramp_up).ok();
            writeln!(&mut out, "  steps: {}", a.steps).ok();
        }
        AbilityConfig::FlowDebug(_) => {}
        AbilityConfig::TryRun(a) => {
            writeln!(&mut out, "  expectThroughput: {}", a.expect_throughput).ok();
            writeln!(&mut out, "  loops: {}", a.loops).ok();
        }
        AbilityConfig::Inspection(a) => {
            writeln!(&mut out, "  loops: {}", a.loops).ok();
        }
    }

    out.push_str("attributes:\n");
    for (k, v) in config.extra_attributes().iter() {
        writeln!(&mut out, "  {k}: {v}").ok();
    }

    out
}
