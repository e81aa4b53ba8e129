//! Configuration settings for Cointrack.

use crate::state::Stock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `COINTRACK__API__NEWS_URL`.
const ENV_PREFIX: &str = "COINTRACK";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API configuration.
    pub api: ApiConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Local user store configuration.
    pub storage: StorageConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Theme configuration.
    pub theme: ThemeConfig,
    /// Stocks shown on the watchlist before any remote refresh.
    pub watchlist: Vec<Stock>,
}

impl Config {
    /// Load configuration from the default location, falling back to defaults.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file, layered under `COINTRACK__*` environment variables.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(default_path);
        Self::load_with_env(&config_path, ENV_PREFIX)
    }

    fn load_with_env(config_path: &Path, env_prefix: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(default_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn default_path() -> PathBuf {
    super::config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// How to treat individual news items that fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedItems {
    /// Drop the item and keep the rest of the page.
    #[default]
    Skip,
    /// Fail the whole page.
    Reject,
}

/// API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// News endpoint; pages are requested as `{news_url}?page={n}`.
    pub news_url: Option<String>,
    /// Optional watchlist endpoint returning `{ "data": [stock, ...] }`.
    pub stocks_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Policy for malformed items inside an otherwise valid page.
    pub malformed_items: MalformedItems,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            news_url: None,
            stocks_url: None,
            timeout_secs: 30,
            malformed_items: MalformedItems::Skip,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick rate in milliseconds for UI updates and animations.
    pub tick_rate_ms: u64,
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Enable Unicode symbols.
    pub unicode_symbols: bool,
    /// Rows from the end of the news list at which the next page is requested.
    pub end_reached_threshold: usize,
    /// Show status bar.
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            mouse_support: true,
            unicode_symbols: true,
            end_reached_threshold: 5,
            show_status_bar: true,
        }
    }
}

/// Local user store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the key/value store file. Defaults to `<data_dir>/storage.json`.
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the store file path.
    pub fn resolve_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            super::data_dir()
                .map(|p| p.join("storage.json"))
                .unwrap_or_else(|_| PathBuf::from("storage.json"))
        })
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up.
    pub up: String,
    /// Navigate down.
    pub down: String,
    /// Select/confirm.
    pub select: String,
    /// Cancel/back.
    pub back: String,
    /// Refresh the current screen (pull-to-refresh).
    pub refresh: String,
    /// Open or close the drawer menu.
    pub drawer: String,
    /// Sign out from the drawer.
    pub logout: String,
    /// Switch to the stocks tab.
    pub stocks: String,
    /// Switch to the news tab.
    pub news: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            select: "Enter".to_string(),
            back: "Esc".to_string(),
            refresh: "r".to_string(),
            drawer: "m".to_string(),
            logout: "x".to_string(),
            stocks: "1".to_string(),
            news: "2".to_string(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Background color (hex).
    pub background: String,
    /// Foreground/text color (hex).
    pub foreground: String,
    /// Headline color (hex).
    pub heading: String,
    /// Accent color used by placeholder screens (hex).
    pub accent: String,
    /// Price gain color (hex).
    pub gain: String,
    /// Price loss and logout color (hex).
    pub loss: String,
    /// Error message color (hex).
    pub error: String,
    /// Border color (hex).
    pub border: String,
    /// Selection/highlight color (hex).
    pub selection: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#141323".to_string(),
            foreground: "#EEEEEE".to_string(),
            heading: "#FFFFFF".to_string(),
            accent: "#FF5F1F".to_string(),
            gain: "#6AC77E".to_string(),
            loss: "#D0585C".to_string(),
            error: "#FF6B6B".to_string(),
            border: "#EEEEEE".to_string(),
            selection: "#2A2940".to_string(),
        }
    }
}
