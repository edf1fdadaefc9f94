//! Typed view of the `ENVIRONMENT` variable that selects the logging layout

use std::{fmt, str::FromStr};
use thiserror::Error;

/// Name of the variable every lab binary reads its [Environment] from
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Where a lab binary is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Deployed lambda serving real traffic
    Production,
    /// Deployed lambda in a sandbox account
    Develop,
    /// Running on a workstation, e.g. through `cargo lambda watch`
    Local,
}

/// Why [Environment::new_from_env] could not produce a value
#[derive(Debug, Error)]
pub enum EnvironmentErr {
    /// the variable is unset or not unicode
    #[error("{ENVIRONMENT_VAR} could not be read: {0}")]
    Unreadable(#[source] std::env::VarError),
    /// the variable holds something other than `prod`, `dev` or `local`
    #[error(transparent)]
    Unrecognized(#[from] UnknownValue),
}

/// A string that names no [Environment]
#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` is not one of prod, dev, local")]
pub struct UnknownValue(String);

impl Environment {
    const ALL: [Environment; 3] = [
        Environment::Production,
        Environment::Develop,
        Environment::Local,
    ];

    /// The value of `ENVIRONMENT` that selects this variant
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Production => "prod",
            Environment::Develop => "dev",
            Environment::Local => "local",
        }
    }

    /// Whether this is one of the deployed lambda environments
    pub fn is_deployed(self) -> bool {
        !matches!(self, Environment::Local)
    }

    /// Reads and parses `ENVIRONMENT`
    #[tracing::instrument(err, level = tracing::Level::TRACE)]
    pub fn new_from_env() -> Result<Self, EnvironmentErr> {
        let raw = std::env::var(ENVIRONMENT_VAR).map_err(EnvironmentErr::Unreadable)?;
        Ok(raw.parse()?)
    }

    /// Production unless `ENVIRONMENT` names something else
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(value: &str) -> Result<Self, UnknownValue> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == value)
            .ok_or_else(|| UnknownValue(value.to_string()))
    }
}
