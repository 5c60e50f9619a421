//! Loading exported flows and printing results

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use flowstats::Flow;

/// Accepted shapes of a flow export
#[derive(Deserialize)]
#[serde(untagged)]
enum FlowExport {
    List(Vec<Flow>),
    Wrapped { flows: Vec<Flow> },
}

/// Parse flows from JSON: a bare array or `{ "flows": [...] }`.
pub fn parse_flows(content: &str) -> Result<Vec<Flow>> {
    let export: FlowExport = serde_json::from_str(content)
        .context("Expected a JSON array of flows or { \"flows\": [...] }")?;
    Ok(match export {
        FlowExport::List(flows) => flows,
        FlowExport::Wrapped { flows } => flows,
    })
}

/// Load flows from a file, or from stdin when `path` is "-".
pub fn load_flows(path: &Path) -> Result<Vec<Flow>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read flows from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read flows file: {}", path.display()))?
    };

    let flows = parse_flows(&content)
        .with_context(|| format!("Failed to parse flows file: {}", path.display()))?;
    debug!(count = flows.len(), "Loaded flows");
    Ok(flows)
}

/// Print a value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
