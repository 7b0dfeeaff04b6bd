use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::refresh::REFRESH_INTERVAL;
use crate::reveal::{COMPACT_REVEAL_DELAY, DEFAULT_REVEAL_DELAY};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// What the router does with an identifier outside the view enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownViewPolicy {
    /// Log a warning and show the dashboard.
    #[default]
    Fallback,
    /// Reject with `ShellError::UnknownView`.
    Strict,
}

/// Settings consumed by the shell controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub refresh_interval: Duration,
    pub reveal_delay: Duration,
    pub compact_reveal_delay: Duration,
    pub unknown_view_policy: UnknownViewPolicy,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            refresh_interval: REFRESH_INTERVAL,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            compact_reveal_delay: COMPACT_REVEAL_DELAY,
            unknown_view_policy: UnknownViewPolicy::Fallback,
        }
    }
}

impl ShellConfig {
    pub fn reveal_delay_for(&self, compact: bool) -> Duration {
        if compact {
            self.compact_reveal_delay
        } else {
            self.reveal_delay
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub viewport_width: u32,
    pub data_dir: Option<PathBuf>,
    pub log_json: bool,
    pub shell: ShellConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ShellConfig::default();
        let strict = env_bool(&lookup, "EDUCORE_STRICT_VIEWS", false)?;

        Ok(Self {
            bind_addr: lookup("EDUCORE_BIND_ADDR")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            viewport_width: env_u64(
                &lookup,
                "EDUCORE_VIEWPORT_WIDTH",
                DEFAULT_VIEWPORT_WIDTH as u64,
            )?
            .try_into()
            .map_err(|_| ConfigError {
                name: "EDUCORE_VIEWPORT_WIDTH",
                value: lookup("EDUCORE_VIEWPORT_WIDTH").unwrap_or_default(),
                expected: "a width that fits in 32 bits",
            })?,
            data_dir: lookup("EDUCORE_DATA_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            log_json: env_bool(&lookup, "EDUCORE_LOG_JSON", false)?,
            shell: ShellConfig {
                refresh_interval: env_positive_duration_ms(
                    &lookup,
                    "EDUCORE_REFRESH_INTERVAL_MS",
                    defaults.refresh_interval,
                )?,
                reveal_delay: env_duration_ms(
                    &lookup,
                    "EDUCORE_REVEAL_DELAY_MS",
                    defaults.reveal_delay,
                )?,
                compact_reveal_delay: env_duration_ms(
                    &lookup,
                    "EDUCORE_COMPACT_REVEAL_DELAY_MS",
                    defaults.compact_reveal_delay,
                )?,
                unknown_view_policy: if strict {
                    UnknownViewPolicy::Strict
                } else {
                    UnknownViewPolicy::Fallback
                },
            },
        })
    }
}

fn env_bool<F>(lookup: &F, name: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(v) => match v.trim() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Ok(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Ok(false),
            _ => Err(ConfigError {
                name,
                value: v,
                expected: "a boolean",
            }),
        },
    }
}

fn env_u64<F>(lookup: &F, name: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(v) => v.trim().parse::<u64>().map_err(|_| ConfigError {
            name,
            value: v,
            expected: "a non-negative integer",
        }),
    }
}

fn env_duration_ms<F>(
    lookup: &F,
    name: &'static str,
    default: Duration,
) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    env_u64(lookup, name, default.as_millis() as u64).map(Duration::from_millis)
}

fn env_positive_duration_ms<F>(
    lookup: &F,
    name: &'static str,
    default: Duration,
) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let duration = env_duration_ms(lookup, name, default)?;
    if duration.is_zero() {
        return Err(ConfigError {
            name,
            value: lookup(name).unwrap_or_default(),
            expected: "a positive number of milliseconds",
        });
    }
    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.viewport_width, 1280);
        assert!(config.data_dir.is_none());
        assert!(!config.log_json);
        assert_eq!(config.shell, ShellConfig::default());
        assert_eq!(config.shell.refresh_interval, Duration::from_millis(300_000));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("EDUCORE_BIND_ADDR", "0.0.0.0:9000"),
            ("EDUCORE_REFRESH_INTERVAL_MS", "5000"),
            ("EDUCORE_VIEWPORT_WIDTH", "600"),
            ("EDUCORE_STRICT_VIEWS", "yes"),
            ("EDUCORE_DATA_DIR", "/srv/educore"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.shell.refresh_interval, Duration::from_millis(5_000));
        assert_eq!(config.viewport_width, 600);
        assert_eq!(config.shell.unknown_view_policy, UnknownViewPolicy::Strict);
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/educore")));
    }

    #[test]
    fn unparseable_value_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("EDUCORE_REVEAL_DELAY_MS", "soon")]))
            .unwrap_err();
        assert_eq!(err.name, "EDUCORE_REVEAL_DELAY_MS");
        assert_eq!(err.value, "soon");

        let err =
            AppConfig::from_lookup(lookup_from(&[("EDUCORE_LOG_JSON", "maybe")])).unwrap_err();
        assert_eq!(err.name, "EDUCORE_LOG_JSON");
    }

    #[test]
    fn zero_refresh_interval_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("EDUCORE_REFRESH_INTERVAL_MS", "0")]))
            .unwrap_err();
        assert_eq!(err.name, "EDUCORE_REFRESH_INTERVAL_MS");
        assert_eq!(err.value, "0");
        assert_eq!(err.expected, "a positive number of milliseconds");

        let config =
            AppConfig::from_lookup(lookup_from(&[("EDUCORE_REVEAL_DELAY_MS", "0")])).unwrap();
        assert_eq!(config.shell.reveal_delay, Duration::ZERO);
    }

    #[test]
    fn compact_mode_uses_the_longer_delay() {
        let shell = ShellConfig::default();
        assert_eq!(shell.reveal_delay_for(false), Duration::from_millis(100));
        assert_eq!(shell.reveal_delay_for(true), Duration::from_millis(200));
    }
}
