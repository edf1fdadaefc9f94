use anyhow::Context;

/// The configuration parameters for the ingestion lambda.
///
/// Validated once at cold start so a missing variable shows up immediately in the logs
/// instead of on the first record.
#[derive(Debug, Clone)]
pub struct Config {
    /// Table receiving one item per object version
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let table_name = std::env::var("TABLE_NAME").context("TABLE_NAME must be provided")?;
        Ok(Config { table_name })
    }
}
