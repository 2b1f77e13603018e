//! Configuration management for mdtable.
//!
//! Loads configuration from ${MDTABLE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Output format for rendered tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sortable HTML table (default)
    #[default]
    Html,
    /// Boxed table for the terminal
    Terminal,
    /// Markdown pipe table in display order
    Markdown,
    /// Headers, sort state and rows as JSON
    Json,
}

impl OutputFormat {
    pub fn display_name(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Terminal => "terminal",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        }
    }

    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Html,
            OutputFormat::Terminal,
            OutputFormat::Markdown,
            OutputFormat::Json,
        ]
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        OutputFormat::all()
            .iter()
            .copied()
            .find(|format| format.display_name() == name)
            .ok_or_else(|| {
                let names: Vec<&str> = OutputFormat::all()
                    .iter()
                    .map(OutputFormat::display_name)
                    .collect();
                format!(
                    "unknown format '{s}' (expected one of: {})",
                    names.join(", ")
                )
            })
    }
}

/// Parsing options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Reject ragged tables instead of warning about them.
    pub strict: bool,
}

/// Rendering options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Interpret cells as markdown in HTML output
    pub cell_markdown: bool,
    /// Maximum width for terminal output
    pub max_width: u16,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            cell_markdown: true,
            max_width: Config::DEFAULT_MAX_WIDTH,
        }
    }
}

/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for mdtable configuration.
    //!
    //! MDTABLE_HOME resolution order:
    //! 1. MDTABLE_HOME environment variable (if set)
    //! 2. ~/.config/mdtable (default)

    use std::path::PathBuf;

    /// Returns the mdtable home directory.
    ///
    /// Checks MDTABLE_HOME env var first, falls back to ~/.config/mdtable
    pub fn mdtable_home() -> PathBuf {
        if let Ok(home) = std::env::var("MDTABLE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("mdtable"))
            .unwrap_or_else(|| PathBuf::from(".mdtable"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        mdtable_home().join("config.toml")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter used when MDTABLE_LOG is unset
    pub log_level: String,

    #[serde(default)]
    pub parse: ParseConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Config::DEFAULT_LOG_LEVEL.to_string(),
            parse: ParseConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl Config {
    const DEFAULT_LOG_LEVEL: &str = "warn";
    const DEFAULT_MAX_WIDTH: u16 = 100;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}
