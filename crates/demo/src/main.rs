use std::io::Write;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let today = chrono::Local::now().date_naive();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = stockroom_demo::run_scenario(&mut out, today)?;
    out.flush().context("flushing scenario output")?;

    tracing::info!(
        order_total = %report.order_total,
        engine_v6_remaining = report.engine_v6_remaining,
        "scenario finished"
    );
    Ok(())
}
