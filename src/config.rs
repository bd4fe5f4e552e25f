// src/config.rs
use serde::Deserialize;
use std::path::{Path, PathBuf};
use crate::errors::{PanelError, Result};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Optional settings read from a TOML file.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Base URL the panel page is served from
    pub base_url: Option<String>,
    pub bind_addr: Option<String>,
    pub port: Option<u16>,
    /// When set, an in-process stub proxy answers with these names
    pub stub_names: Option<Vec<String>>,
}

/// High-level application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: String,
    pub bind_addr: String,
    pub port: u16,
    pub stub_names: Option<Vec<String>>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

impl AppConfig {
    /// Load configuration from the environment, falling back to the config
    /// file and then to defaults.
    pub fn from_env() -> Result<Self> {
        let file = match std::env::var("PANEL_CONFIG") {
            Ok(path) => FileConfig::from_file(Path::new(&path))?,
            Err(_) => match default_config_path() {
                Some(path) if path.is_file() => {
                    log::info!("Reading configuration from {}", path.display());
                    FileConfig::from_file(&path)?
                }
                _ => FileConfig::default(),
            },
        };

        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Merge `file` with values looked up through `env`; `env` wins.
    pub fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = env("PANEL_BIND_ADDR")
            .or(file.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let port = match env("PANEL_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                PanelError::Config(format!("PANEL_PORT '{}' is not a valid port: {}", raw, e))
            })?,
            None => file.port.unwrap_or(DEFAULT_PORT),
        };

        // Without an explicit base the page is assumed to be served by this panel.
        let base_url = env("PANEL_BASE_URL")
            .or(file.base_url)
            .unwrap_or_else(|| default_base_url(port));

        let stub_names = env("PANEL_STUB_NAMES")
            .map(|raw| parse_names(&raw))
            .or(file.stub_names);

        Ok(AppConfig { base_url, bind_addr, port, stub_names })
    }
}

fn default_base_url(port: u16) -> String {
    format!("http://127.0.0.1:{}/gui/", port)
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("teststand-panel").join("config.toml"))
}

fn parse_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
