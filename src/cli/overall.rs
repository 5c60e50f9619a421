//! Overall stats command implementation

use anyhow::Result;
use std::path::Path;
use tracing::info;

use flowstats::config::Config;

use super::input::{load_flows, print_json};
use super::window::WindowArgs;

/// Print the overview across all flows
pub fn overall_command(
    config: &Config,
    input: &Path,
    window: &WindowArgs,
    pretty: bool,
) -> Result<()> {
    let flows = load_flows(input)?;
    let options = window.options(config)?;
    let engine = window.engine(config)?;

    let stats = engine.compute_overall_stats(&flows, &options)?;
    info!(
        flows = stats.overall.total_flows,
        success_rate = stats.overall.success_rate,
        "Computed overall stats"
    );

    print_json(&stats, pretty)
}
