//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;
use tracing::info;

use flowstats::config::{Config, write_atomic};

/// Default configuration content for flowstats init
pub const DEFAULT_CONFIG: &str = r#"# flowstats configuration
# =======================

# ============================================================================
# SETTINGS
# ============================================================================
#
# Available options:
#   default_timeframe    - Window when none is passed (default: monthly)
#                          "weekly", "monthly" or "yearly"
#   include_archived     - Count archived flows (default: false)
#   include_deleted      - Count deleted flows (default: false)
#   streak_lookback_days - How far back the current streak is walked (default: 365)

[settings]
default_timeframe = "monthly"
include_archived = false
include_deleted = false
streak_lookback_days = 365

# Points per completed day, plus bonuses per full goal multiple exceeded
[settings.scoring]
base_points = 10
quantitative_bonus = 5
time_bonus = 3
"#;

/// Initialize a new flowstats configuration.
/// By default creates .flowstats/config.toml in the working directory;
/// `--global` targets ~/.flowstats/config.toml and `--config` a custom path.
pub fn init_command(
    work_dir: &Path,
    config_path: Option<&Path>,
    force: bool,
    global: bool,
) -> Result<()> {
    let config_path = match config_path {
        Some(path) => path.to_path_buf(),
        None if global => Config::global_config_path(),
        None => Config::local_config_path(work_dir),
    };

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    write_atomic(&config_path, DEFAULT_CONFIG)?;
    info!(path = %config_path.display(), "Wrote default config");
    println!("Created: {}", config_path.display());

    Ok(())
}
