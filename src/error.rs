use thiserror::Error;

use crate::view::ViewId;

/// Failures while loading or validating the static content fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed fixture {name}: {source}")]
    Json {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid fixture content: {0}")]
    Invalid(String),
}

/// Failures surfaced by the shell controller.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("unknown view identifier `{0}`")]
    UnknownView(String),

    #[error("action `{action}` targets the {expected} view but {active} is active")]
    ActionMismatch {
        action: &'static str,
        expected: ViewId,
        active: ViewId,
    },

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    Schedule(#[from] ZeroPeriod),
}

/// A repeating schedule was asked to fire every zero milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("repeating schedule needs a non-zero period")]
pub struct ZeroPeriod;

/// A configuration value was present but could not be parsed.
#[derive(Debug, Error)]
#[error("invalid value `{value}` for {name}: expected {expected}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
    pub expected: &'static str,
}

pub type Result<T> = std::result::Result<T, ShellError>;
