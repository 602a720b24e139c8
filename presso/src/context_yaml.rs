use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use presso_core::{ParamBag, PressureContext, Value};
use serde::Deserialize;

use crate::duration::{self, DurationError};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct ContextYaml {
    /// Total duration: humantime string, seconds, or numeric text.
    #[serde(default)]
    pub duration: Option<YamlNumber>,

    #[serde(default)]
    pub ramp_up: Option<YamlNumber>,

    #[serde(default)]
    pub pressure_mode: Option<String>,

    #[serde(default)]
    pub expect_throughput: Option<u64>,

    #[serde(default)]
    pub steps: Option<u64>,

    #[serde(default)]
    pub loops: Option<u64>,

    /// Engine parameter bag (e.g. `tpsTargetLevel`).
    #[serde(default)]
    pub params: BTreeMap<String, serde_yaml::Value>,
}

/// A numeric-ish YAML scalar.
///
/// Duration strings (`120`, `1m30s`) become whole seconds and sub-second ones
/// (`500ms`) are rejected. Other strings are kept as text so the core decides
/// whether they coerce (`"20.0"`) or not.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct YamlNumber(Value);

impl YamlNumber {
    fn into_inner(self) -> Value {
        self.0
    }
}

impl<'de> Deserialize<'de> for YamlNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct V;

        impl serde::de::Visitor<'_> for V {
            type Value = YamlNumber;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("seconds as integer/float, a duration string (e.g. 2m), or numeric text")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(YamlNumber(Value::U64(v)))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(YamlNumber(Value::I64(v)))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(YamlNumber(Value::F64(v)))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match duration::parse_whole_secs(v) {
                    Ok(d) => Ok(YamlNumber(Value::U64(d.as_secs()))),
                    Err(err @ DurationError::SubSecond(_)) => Err(E::custom(err)),
                    Err(DurationError::Invalid(_)) => Ok(YamlNumber(Value::from(v))),
                }
            }
        }

        deserializer.deserialize_any(V)
    }
}

/// CLI flags that take precedence over the YAML document.
#[derive(Debug, Clone, Default)]
pub(crate) struct ContextOverrides {
    pub mode: Option<String>,
    pub duration: Option<Duration>,
    pub ramp_up: Option<Duration>,
    pub expect_throughput: Option<u64>,
    pub steps: Option<u64>,
    pub loops: Option<u64>,
    pub params: Vec<(String, String)>,
}

pub(crate) fn load_context_yaml(path: &Path) -> anyhow::Result<ContextYaml> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read context YAML: {}", path.display()))?;

    serde_yaml::from_slice(&bytes)
        .with_context(|| format!("failed to parse YAML: {}", path.display()))
}

pub(crate) fn build_context(
    doc: ContextYaml,
    overrides: ContextOverrides,
) -> anyhow::Result<PressureContext> {
    let ContextYaml {
        duration,
        ramp_up,
        pressure_mode,
        expect_throughput,
        steps,
        loops,
        params,
    } = doc;

    let mut bag = ParamBag::default();
    for (k, v) in params {
        let value = yaml_to_value(v).with_context(|| format!("invalid value for param `{k}`"))?;
        bag.insert(Arc::from(k), value);
    }
    for (k, v) in overrides.params {
        bag.insert(Arc::from(k), Value::from(v));
    }

    let seconds = |d: Duration| Value::U64(d.as_secs());

    Ok(PressureContext {
        duration: overrides
            .duration
            .map(seconds)
            .or_else(|| duration.map(YamlNumber::into_inner)),
        ramp_up: overrides
            .ramp_up
            .map(seconds)
            .or_else(|| ramp_up.map(YamlNumber::into_inner)),
        pressure_mode: overrides.mode.or(pressure_mode).unwrap_or_default(),
        expect_throughput: overrides.expect_throughput.or(expect_throughput),
        steps: overrides.steps.or(steps),
        loops: overrides.loops.or(loops),
        params: bag,
    })
}

fn yaml_to_value(v: serde_yaml::Value) -> anyhow::Result<Value> {
    Ok(match v {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Value::U64(u)
            } else if let Some(i) = n.as_i64() {
                Value::I64(i)
            } else {
                Value::F64(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_yaml::Value::String(s) => Value::from(s),
        serde_yaml::Value::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_value)
                .collect::<anyhow::Result<Vec<_>>>()?,
        ),
        serde_yaml::Value::Mapping(map) => {
            let mut out = ParamBag::default();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    other => anyhow::bail!("unsupported mapping key: {other:?}"),
                };
                out.insert(Arc::from(key), yaml_to_value(v)?);
            }
            Value::Object(out)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_value(tagged.value)?,
    })
}

pub(crate) fn parse_param_override(s: &str) -> anyhow::Result<(String, String)> {
    let (k, v) = s
        .split_once('=')
        .with_context(|| format!("invalid --param (expected KEY=VALUE): {s}"))?;
    if k.is_empty() {
        anyhow::bail!("invalid --param (empty KEY): {s}");
    }
    Ok((k.to_string(), v.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> ContextYaml {
        match serde_yaml::from_str(raw) {
            Ok(v) => v,
            Err(err) => panic!("failed to parse yaml: {err}"),
        }
    }

    #[test]
    fn durations_accept_humantime_numbers_and_text() {
        let doc = parse("duration: 2m\nrampUp: \"20.0\"\n");
        assert_eq!(doc.duration, Some(YamlNumber(Value::U64(120))));
        assert_eq!(doc.ramp_up, Some(YamlNumber(Value::from("20.0"))));

        let doc = parse("duration: 90\nrampUp: 12.5\n");
        assert_eq!(doc.duration, Some(YamlNumber(Value::U64(90))));
        assert_eq!(doc.ramp_up, Some(YamlNumber(Value::F64(12.5))));

        let doc = parse("duration: 60\nrampUp: null\n");
        assert_eq!(doc.ramp_up, None);
    }

    #[test]
    fn yaml_and_cli_agree_on_durations() {
        use clap::Parser as _;

        let cli_duration = |raw: &str| {
            crate::cli::Cli::try_parse_from(["presso", "build", "--scene", "tps", "--duration", raw])
                .map(|cli| match cli.command {
                    crate::cli::Command::Build(args) => args.duration,
                    crate::cli::Command::Mode(_) => panic!("expected build command"),
                })
        };

        let doc = parse("duration: 1m30s\nrampUp: 90\n");
        assert_eq!(doc.duration, Some(YamlNumber(Value::U64(90))));
        assert_eq!(doc.ramp_up, Some(YamlNumber(Value::U64(90))));
        match cli_duration("1m30s") {
            Ok(d) => assert_eq!(d, Some(Duration::from_secs(90))),
            Err(err) => panic!("expected cli to accept 1m30s: {err}"),
        }

        for raw in ["500ms", "1500ms"] {
            assert!(
                serde_yaml::from_str::<ContextYaml>(&format!("rampUp: {raw}\n")).is_err(),
                "yaml accepted {raw}"
            );
            assert!(cli_duration(raw).is_err(), "cli accepted {raw}");
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_yaml::from_str::<ContextYaml>("durration: 10\n").is_err());
    }

    #[test]
    fn params_map_onto_values() -> anyhow::Result<()> {
        let doc = parse(
            "params:\n  tpsTargetLevel: 500\n  ratio: 0.5\n  label: smoke\n  hosts: [a, b]\n  nested:\n    depth: -1\n",
        );
        let ctx = build_context(doc, ContextOverrides::default())?;

        assert_eq!(ctx.param("tpsTargetLevel"), Some(&Value::U64(500)));
        assert_eq!(ctx.param("ratio"), Some(&Value::F64(0.5)));
        assert_eq!(ctx.param("label"), Some(&Value::from("smoke")));
        assert_eq!(
            ctx.param("hosts"),
            Some(&Value::Array(vec![Value::from("a"), Value::from("b")]))
        );
        match ctx.param("nested") {
            Some(Value::Object(map)) => assert_eq!(map.get("depth"), Some(&Value::I64(-1))),
            other => panic!("expected nested object, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn param_override_requires_key_value() {
        assert!(parse_param_override("a=b").is_ok());
        assert!(parse_param_override("a=").is_ok());
        assert!(parse_param_override("=b").is_err());
        assert!(parse_param_override("ab").is_err());
    }
}
