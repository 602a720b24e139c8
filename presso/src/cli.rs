use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use presso_core::{DisplayLocale, PressureScene};

use crate::duration;

fn parse_duration(input: &str) -> Result<Duration, String> {
    duration::parse_whole_secs(input).map_err(|e| e.to_string())
}

fn parse_scene(input: &str) -> Result<PressureScene, String> {
    input.parse().map_err(|_| {
        format!(
            "invalid scene '{input}' (expected concurrency, tps, flow-debug, try-run, or inspection)"
        )
    })
}

fn parse_locale(input: &str) -> Result<DisplayLocale, String> {
    input
        .parse()
        .map_err(|_| format!("invalid locale '{input}' (expected zh or en)"))
}

#[derive(Debug, Parser)]
#[command(
    name = "presso",
    author,
    version,
    about = "Map pressure test parameters onto load-engine thread groups",
    long_about = "presso turns an abstract pressure test description (duration, ramp-up, mode, targets) into the thread-group configuration a load engine needs for one test scene.\n\nThe context is read from a YAML file and/or CLI flags; flags win.",
    after_help = "Examples:\n  presso build ctx.yaml --scene concurrency\n  presso build --scene tps --duration 5m --ramp-up 30s --steps 3 --param tpsTargetLevel=500\n  presso mode RAMPED\n\nSet PRESSO_LOG=debug to trace ability building."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the thread-group configuration for one scene
    Build(BuildArgs),

    /// Show how a pressure mode identifier resolves
    Mode(ModeArgs),
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Path to a context YAML file (optional; flags alone are enough)
    pub context: Option<PathBuf>,

    /// Scene to build: concurrency, tps, flow-debug, try-run, inspection
    #[arg(long, value_parser = parse_scene)]
    pub scene: PressureScene,

    /// Pressure mode identifier (e.g. FIXED, LINEAR, STAIR)
    #[arg(long)]
    pub mode: Option<String>,

    /// Total duration in whole seconds (e.g. 120, 90s, 1m30s)
    #[arg(long, value_parser = parse_duration)]
    pub duration: Option<Duration>,

    /// Ramp-up period in whole seconds (e.g. 20, 30s, 1m)
    #[arg(long = "ramp-up", value_parser = parse_duration)]
    pub ramp_up: Option<Duration>,

    /// Expected throughput / concurrency target
    #[arg(long = "expect-throughput")]
    pub expect_throughput: Option<u64>,

    /// Number of ramp steps
    #[arg(long)]
    pub steps: Option<u64>,

    /// Loop count for one-shot scenes
    #[arg(long)]
    pub loops: Option<u64>,

    /// Add/override engine parameters (repeatable, KEY=VALUE)
    #[arg(long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Language of the stock thread group display name
    #[arg(long, value_parser = parse_locale, default_value = "zh")]
    pub locale: DisplayLocale,
}

#[derive(Debug, Args)]
pub struct ModeArgs {
    /// Mode identifier to resolve
    pub identifier: String,

    /// Fail instead of falling back to the default mode
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_accepts_common_units() {
        assert_eq!(parse_duration("120"), Ok(Duration::from_secs(120)));
        assert_eq!(parse_duration("90s"), Ok(Duration::from_secs(90)));
        assert_eq!(parse_duration("2m"), Ok(Duration::from_secs(120)));
        assert_eq!(parse_duration("1m30s"), Ok(Duration::from_secs(90)));
        assert_eq!(parse_duration("1h"), Ok(Duration::from_secs(60 * 60)));
    }

    #[test]
    fn parse_duration_rejects_invalid_values() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("10x").is_err());
        assert!(parse_duration("250ms").is_err());
    }

    #[test]
    fn cli_parses_build_with_overrides() {
        let parsed = Cli::try_parse_from([
            "presso",
            "build",
            "ctx.yaml",
            "--scene",
            "tps",
            "--mode",
            "STAIR",
            "--duration",
            "5m",
            "--ramp-up",
            "30s",
            "--steps",
            "3",
            "--param",
            "tpsTargetLevel=500",
            "--locale",
            "en",
        ]);

        let cli = match parsed {
            Ok(v) => v,
            Err(err) => panic!("failed to parse args: {err}"),
        };

        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.context, Some(PathBuf::from("ctx.yaml")));
                assert_eq!(args.scene, PressureScene::Tps);
                assert_eq!(args.mode.as_deref(), Some("STAIR"));
                assert_eq!(args.duration, Some(Duration::from_secs(300)));
                assert_eq!(args.ramp_up, Some(Duration::from_secs(30)));
                assert_eq!(args.steps, Some(3));
                assert_eq!(args.params, vec!["tpsTargetLevel=500".to_string()]);
                assert_eq!(args.locale, DisplayLocale::En);
            }
            Command::Mode(_) => panic!("expected build command"),
        }
    }

    #[test]
    fn cli_parses_build_defaults() {
        let parsed = Cli::try_parse_from(["presso", "build", "--scene", "flow-debug"]);
        let cli = match parsed {
            Ok(v) => v,
            Err(err) => panic!("failed to parse args: {err}"),
        };

        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.context, None);
                assert_eq!(args.scene, PressureScene::FlowDebug);
                assert_eq!(args.locale, DisplayLocale::Zh);
                assert!(args.params.is_empty());
            }
            Command::Mode(_) => panic!("expected build command"),
        }
    }

    #[test]
    fn cli_rejects_unknown_scene() {
        assert!(Cli::try_parse_from(["presso", "build", "--scene", "soak"]).is_err());
    }
}
