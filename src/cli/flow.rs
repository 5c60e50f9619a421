//! Single-flow stats command implementation

use anyhow::{Result, bail};
use std::path::Path;

use flowstats::config::Config;

use super::input::{load_flows, print_json};
use super::window::WindowArgs;

/// Print the detailed report for one flow
pub fn flow_command(
    config: &Config,
    input: &Path,
    id: &str,
    window: &WindowArgs,
    pretty: bool,
) -> Result<()> {
    let flows = load_flows(input)?;
    let Some(flow) = flows.iter().find(|f| f.id == id) else {
        bail!("Flow not found: {}", id);
    };

    let options = window.options(config)?;
    let engine = window.engine(config)?;
    let stats = engine.compute_flow_stats(flow, &options)?;

    print_json(&stats, pretty)
}
