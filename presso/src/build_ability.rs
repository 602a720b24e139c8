use crate::cli::BuildArgs;
use crate::context_yaml::{self, ContextOverrides, ContextYaml};
use crate::exit_codes::ExitCode;
use crate::output;
use crate::run_error::RunError;

use presso_core::{JmeterAbility, PressureModeAbility};

pub fn build(args: BuildArgs) -> Result<ExitCode, RunError> {
    let params = args
        .params
        .iter()
        .map(|raw| context_yaml::parse_param_override(raw))
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(RunError::InvalidInput)?;

    let doc = match &args.context {
        Some(path) => context_yaml::load_context_yaml(path).map_err(classify_load_error)?,
        None => ContextYaml::default(),
    };

    let overrides = ContextOverrides {
        mode: args.mode,
        duration: args.duration,
        ramp_up: args.ramp_up,
        expect_throughput: args.expect_throughput,
        steps: args.steps,
        loops: args.loops,
        params,
    };

    let ctx = context_yaml::build_context(doc, overrides).map_err(RunError::InvalidInput)?;
    tracing::debug!(
        target: "presso.cli",
        scene = %args.scene,
        mode = %ctx.mode(),
        params = ctx.params.len(),
        "context resolved"
    );

    let provider = JmeterAbility::new(args.locale);
    tracing::debug!(target: "presso.cli", locale = %provider.locale(), "provider ready");
    let config = provider.build(args.scene, &ctx).map_err(|e| {
        RunError::InvalidInput(
            anyhow::Error::new(e).context(format!("cannot build `{}` ability", args.scene)),
        )
    })?;

    print!("{}", output::render(args.scene, ctx.mode(), &config));
    Ok(ExitCode::Success)
}

fn classify_load_error(err: anyhow::Error) -> RunError {
    // A missing context file or malformed YAML is the caller's input problem;
    // other IO failures are not.
    match err.downcast_ref::<std::io::Error>() {
        Some(io) if io.kind() != std::io::ErrorKind::NotFound => RunError::RuntimeError(err),
        _ => RunError::InvalidInput(err),
    }
}
