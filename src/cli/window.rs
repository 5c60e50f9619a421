//! Shared window flags and engine construction

use anyhow::Result;
use clap::Args;

use flowstats::config::Config;
use flowstats::stats::{DateRange, StatsEngine, StatsOptions, Timeframe, parse_day, parse_month};

/// Flags selecting the stats window
#[derive(Args, Debug, Clone, Default)]
pub struct WindowArgs {
    /// Lookback window: weekly, monthly or yearly (default from config)
    #[arg(short, long)]
    pub timeframe: Option<Timeframe>,

    /// Explicit range start (YYYY-MM-DD); requires --end
    #[arg(long, requires = "end")]
    pub start: Option<String>,

    /// Explicit range end (YYYY-MM-DD); requires --start
    #[arg(long, requires = "start")]
    pub end: Option<String>,

    /// Include archived flows
    #[arg(long)]
    pub include_archived: bool,

    /// Include deleted flows
    #[arg(long)]
    pub include_deleted: bool,

    /// Heat map month (YYYY-MM, default: month of today)
    #[arg(long)]
    pub month: Option<String>,

    /// Override today's date (YYYY-MM-DD) for streaks and the heat map
    #[arg(long)]
    pub today: Option<String>,
}

impl WindowArgs {
    /// Merge flags over the config defaults.
    pub fn options(&self, config: &Config) -> Result<StatsOptions> {
        let settings = &config.settings;
        let mut options = settings.stats_options();

        if let Some(timeframe) = self.timeframe {
            options.timeframe = timeframe;
        }
        if let (Some(start), Some(end)) = (&self.start, &self.end) {
            options.range = Some(DateRange::parse(start, end)?);
        }
        options.include_archived |= self.include_archived;
        options.include_deleted |= self.include_deleted;
        if let Some(month) = &self.month {
            options.current_month = Some(parse_month(month)?);
        }

        Ok(options)
    }

    /// Build an engine from config, pinned to `--today` when given.
    pub fn engine(&self, config: &Config) -> Result<StatsEngine> {
        let engine = StatsEngine::from_settings(&config.settings);
        Ok(match &self.today {
            Some(today) => engine.at(parse_day(today)?),
            None => engine,
        })
    }
}
