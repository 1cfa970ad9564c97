//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tally/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::product::DEFAULT_LOW_STOCK_THRESHOLD;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub items_per_page: Option<usize>,
    pub show_chart: Option<bool>,
    pub low_stock_threshold: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SeedConfig {
    /// Path to a JSON product list. Relative paths resolve against `~/.tally/`.
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub items_per_page: usize,
    pub show_chart: bool,
    pub low_stock_threshold: u32,
    pub seed_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tally/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tally").join("config.toml"))
}

/// Load config from `~/.tally/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TallyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TallyConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TallyConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TallyConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TallyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Tally Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# items_per_page = 10          # Rows per table page (5, 10, 25, 50)
# show_chart = true            # Show the category chart panel at startup
# low_stock_threshold = 10     # Stock at or below this shows a warning badge

# [seed]
# file = "inventory.json"      # JSON product list, relative to ~/.tally/
                               # (or an absolute path). Or set TALLY_SEED_FILE,
                               # or pass --seed on the command line.
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env → CLI.
///
/// `cli_seed` is the `--seed` flag (None = not specified).
pub fn resolve(config: &TallyConfig, cli_seed: Option<&std::path::Path>) -> ResolvedConfig {
    let items_per_page = config
        .general
        .items_per_page
        .unwrap_or(DEFAULT_ITEMS_PER_PAGE);
    let items_per_page = if items_per_page == 0 {
        warn!("items_per_page = 0 is meaningless, using {}", DEFAULT_ITEMS_PER_PAGE);
        DEFAULT_ITEMS_PER_PAGE
    } else {
        items_per_page
    };

    // Seed file: CLI → env → config (config paths resolve against ~/.tally/)
    let seed_file = cli_seed
        .map(PathBuf::from)
        .or_else(|| std::env::var("TALLY_SEED_FILE").ok().map(PathBuf::from))
        .or_else(|| config.seed.file.as_ref().map(|f| resolve_seed_path(f)));

    ResolvedConfig {
        items_per_page,
        show_chart: config.general.show_chart.unwrap_or(true),
        low_stock_threshold: config
            .general
            .low_stock_threshold
            .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD),
        seed_file,
    }
}

/// Config-file seed paths are relative to `~/.tally/` unless absolute.
fn resolve_seed_path(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match dirs::home_dir() {
        Some(home) => home.join(".tally").join(path),
        None => path,
    }
}
