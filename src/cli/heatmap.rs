//! Heat map command implementation

use anyhow::Result;
use std::path::Path;

use flowstats::config::Config;

use super::input::{load_flows, print_json};
use super::window::WindowArgs;

/// Print the completion heat map for one month
pub fn heatmap_command(
    config: &Config,
    input: &Path,
    window: &WindowArgs,
    pretty: bool,
) -> Result<()> {
    let flows = load_flows(input)?;
    let options = window.options(config)?;
    let engine = window.engine(config)?;

    let heat_map = engine.heat_map(&flows, &options)?;
    print_json(&heat_map, pretty)
}
