use anyhow::Context;
use cake::ViewportConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Hello {} {}! Escape to quit", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    cake::run(ViewportConfig::default()).context("demo aborted during startup")?;

    Ok(())
}
