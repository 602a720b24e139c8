use crate::cli::ModeArgs;
use crate::exit_codes::ExitCode;
use crate::run_error::RunError;

use presso_core::PressureTestMode;

pub fn resolve(args: ModeArgs) -> Result<ExitCode, RunError> {
    match PressureTestMode::try_resolve(&args.identifier) {
        Some(mode) => println!("{mode}"),
        None if args.strict => {
            return Err(RunError::InvalidInput(anyhow::anyhow!(
                "unknown pressure mode `{}` (expected FIXED, LINEAR, or STAIR)",
                args.identifier
            )));
        }
        None => println!("{} (fallback)", PressureTestMode::DEFAULT),
    }
    Ok(ExitCode::Success)
}
