//! # Configuration
//!
//! Exemption keywords loaded once at startup and injected into the parser.
//!
//! ## Configuration Sources (Priority Order)
//! 1. `RECEIPT_EXEMPT_KEYWORDS` environment variable (comma-separated)
//! 2. JSON file at `RECEIPT_CONFIG_PATH`, or `config.json` in the platform
//!    config directory when that variable is unset
//! 3. Defaults (`book`, `chocolate`, `pill`, `medicine`, `headache`)
//!
//! ## Config File
//! ```json
//! { "exemptKeywords": ["book", "chocolate", "pill", "medicine", "headache"] }
//! ```
//!
//! Read-only after startup, so it is passed by value and never locked.

use std::env::{self, VarError};
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use receipt_core::ExemptionKeywords;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_VAR: &str = "RECEIPT_CONFIG_PATH";

/// Environment variable overriding the keyword list.
pub const EXEMPT_KEYWORDS_VAR: &str = "RECEIPT_EXEMPT_KEYWORDS";

const CONFIG_FILE_NAME: &str = "config.json";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptConfig {
    /// Names containing any of these are exempt from basic sales tax.
    pub exempt_keywords: ExemptionKeywords,
}

impl ReceiptConfig {
    /// Loads configuration from environment variables, config file and defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = env_var(CONFIG_PATH_VAR)?.map(PathBuf::from);
        let keyword_override = env_var(EXEMPT_KEYWORDS_VAR)?;
        Self::resolve(config_path, keyword_override.as_deref(), default_config_path())
    }

    /// Applies the source priority to already-read values.
    ///
    /// `config_path` is the explicit file; `fallback_path` is only used when
    /// no explicit file is given, and only if it exists.
    pub fn resolve(
        config_path: Option<PathBuf>,
        keyword_override: Option<&str>,
        fallback_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match fallback_path {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        Ok(match keyword_override {
            Some(raw) => {
                debug!(var = EXEMPT_KEYWORDS_VAR, "Keyword override from environment");
                config.with_keyword_list(raw)
            }
            None => config,
        })
    }

    /// Reads a JSON config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            path = %path.display(),
            keywords = config.exempt_keywords.len(),
            "Loaded config file"
        );
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replaces the keywords with a comma-separated list.
    ///
    /// An empty list is allowed and taxes every product.
    pub fn with_keyword_list(mut self, raw: &str) -> Self {
        self.exempt_keywords = ExemptionKeywords::new(raw.split(','));
        self
    }
}

/// Reads an environment variable; unset is `None`, non-Unicode is an error.
fn env_var(name: &str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue(name.to_string())),
    }
}

/// `config.json` inside the platform config directory.
///
/// - **Linux**: `~/.config/receipt/config.json`
/// - **macOS**: `~/Library/Application Support/com.receipt.receipt/config.json`
/// - **Windows**: `%APPDATA%\receipt\receipt\config\config.json`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "receipt", "receipt")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================
