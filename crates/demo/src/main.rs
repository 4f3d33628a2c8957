use std::io::Write;

use anyhow::Context;
use wizcoin_demo::{DemoConfig, write_reports};

fn main() -> anyhow::Result<()> {
    wizcoin_observability::init();

    let config = DemoConfig::from_env().context("invalid demo configuration")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_reports(&mut out, &config.purses).context("failed to write purse reports")?;
    out.flush().context("failed to flush stdout")?;

    tracing::info!(purses = config.purses.len(), "rendered purse reports");
    Ok(())
}
