use anyhow::Context;

/// The configuration parameters for the notes api.
#[derive(Debug, Clone)]
pub struct Config {
    /// The single table holding every note under `PK = NOTE`
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let table_name = std::env::var("TABLE_NAME").context("TABLE_NAME must be provided")?;
        Ok(Config { table_name })
    }
}
