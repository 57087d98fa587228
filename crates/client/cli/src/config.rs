//! Terminal client configuration.
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use hex_core::{FollowBand, HexConfig, HexLayout};

/// Settings for the hexcrawl terminal client.
///
/// Everything here is passed explicitly into the session and renderer; there
/// is no global state.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub map: MapConfig,
    pub engine: HexConfig,
    pub ui: UiConfig,
    pub session_id: Option<String>,
    /// Settings that were rejected and replaced by defaults. Reported once
    /// logging is up.
    pub rejected: Vec<ConfigError>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            engine: HexConfig::default(),
            ui: UiConfig::default(),
            session_id: None,
            rejected: Vec::new(),
        }
    }
}

/// A configuration value that could not be used.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("follow band {low}..={high} must satisfy 0 <= low <= high <= 100; using defaults")]
    InvalidFollowBand { low: i64, high: i64 },
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HEXCRAWL_ROWS` - Map rows (default: 10)
    /// - `HEXCRAWL_COLUMNS` - Map columns (default: 21)
    /// - `HEXCRAWL_SEED` - Terrain seed (default: derived from the clock)
    /// - `HEXCRAWL_SETTLEMENT_CHANCE` - Settlement chance in percent (default: 10)
    /// - `HEXCRAWL_FOLLOW_LOW` / `HEXCRAWL_FOLLOW_HIGH` - Scroll comfort band (default: 25/75)
    /// - `HEXCRAWL_LEGEND_WIDTH` - Legend panel width in columns (default: 24)
    /// - `HEXCRAWL_MESSAGE_CAPACITY` - Message log capacity (default: 32)
    /// - `HEXCRAWL_SESSION_ID` - Log session directory name
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(rows) = read_env::<u32>("HEXCRAWL_ROWS") {
            config.map.rows = rows.clamp(1, MapConfig::MAX_DIMENSION);
        }
        if let Some(columns) = read_env::<u32>("HEXCRAWL_COLUMNS") {
            config.map.columns = columns.clamp(1, MapConfig::MAX_DIMENSION);
        }
        if let Some(seed) = read_env::<u64>("HEXCRAWL_SEED") {
            config.map.seed = Some(seed);
        }
        if let Some(chance) = read_env::<u32>("HEXCRAWL_SETTLEMENT_CHANCE") {
            config.map.settlement_chance = chance.min(100);
        }

        let low = read_env::<i64>("HEXCRAWL_FOLLOW_LOW").unwrap_or(FollowBand::DEFAULT_LOW);
        let high = read_env::<i64>("HEXCRAWL_FOLLOW_HIGH").unwrap_or(FollowBand::DEFAULT_HIGH);
        match follow_band(low, high) {
            Ok(band) => config.engine.follow = band,
            Err(error) => config.rejected.push(error),
        }

        if let Some(width) = read_env::<u16>("HEXCRAWL_LEGEND_WIDTH") {
            config.ui.legend_width = width.max(UiConfig::MIN_LEGEND_WIDTH);
        }
        if let Some(capacity) = read_env::<usize>("HEXCRAWL_MESSAGE_CAPACITY") {
            config.ui.message_capacity = capacity.max(1);
        }

        config.session_id = env::var("HEXCRAWL_SESSION_ID").ok();

        config
    }

    pub fn layout(&self) -> &HexLayout {
        &self.engine.layout
    }
}

/// Map size and terrain generation settings.
#[derive(Clone, Debug)]
pub struct MapConfig {
    pub rows: u32,
    pub columns: u32,
    /// Fixed terrain seed; `None` picks one from the clock at startup.
    pub seed: Option<u64>,
    /// Chance in percent that a land hex carries a settlement.
    pub settlement_chance: u32,
}

impl MapConfig {
    pub const MAX_DIMENSION: u32 = 512;

    /// Seed to use for the first map.
    pub fn initial_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 21,
            seed: None,
            settlement_chance: 10,
        }
    }
}

/// UI layout configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Width of the legend panel in columns (including borders).
    pub legend_width: u16,
    /// Number of messages kept in the status log.
    pub message_capacity: usize,
}

impl UiConfig {
    pub const MIN_LEGEND_WIDTH: u16 = 18;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            legend_width: 24,
            message_capacity: 32,
        }
    }
}

/// Seed derived from the wall clock; falls back to a constant if the clock is
/// before the epoch.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0x5eed)
}

/// Validates a follow band read from the environment.
pub fn follow_band(low: i64, high: i64) -> Result<FollowBand, ConfigError> {
    FollowBand::new(low, high).ok_or(ConfigError::InvalidFollowBand { low, high })
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
