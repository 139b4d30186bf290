use anyhow::{Context, Result};
use env_logger::Env;

pub fn setup_logger() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init()
        .context("Failed to initialize logger")
}
