//! Configuration loading.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.claimcheck/config.toml` (user)
//! 3. `/etc/claimcheck/config.toml` (system)
//! 4. built-in defaults
//!
//! Secrets are loaded separately with mandatory permission checks:
//! 1. `~/.claimcheck/secrets.toml` (user, must be 0600)
//! 2. `/etc/claimcheck/secrets.toml` (system, must be 0600)
//! 3. environment variables

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::providers::{fact_check, huggingface, web_search};
use crate::types::DEFAULT_FALSE_LABELS;
use crate::{ClaimCheckError, Result};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub fact_check: FactCheckConfig,
    #[serde(default)]
    pub web_search: WebSearchConfig,
}

/// Web form network configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8501).
    #[serde(default = "default_address")]
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1:8501".to_string()
}

/// Classification model settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// HuggingFace model ID.
    #[serde(default = "default_model")]
    pub model: String,
    /// Inference API base URL.
    #[serde(default = "default_hf_base_url")]
    pub base_url: String,
    /// Raw model labels that mean "false" (case-insensitive).
    #[serde(default = "default_false_labels")]
    pub false_labels: Vec<String>,
    /// TRUE predictions below this confidence skip the lookups (default: 0.0, disabled).
    #[serde(default)]
    pub min_confidence: f32,
    /// Request timeout in seconds (default: 60).
    #[serde(default = "default_hf_timeout")]
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_hf_base_url(),
            false_labels: default_false_labels(),
            min_confidence: 0.0,
            timeout_secs: default_hf_timeout(),
        }
    }
}

fn default_model() -> String {
    huggingface::DEFAULT_MODEL.to_string()
}

fn default_hf_base_url() -> String {
    huggingface::DEFAULT_BASE_URL.to_string()
}

fn default_false_labels() -> Vec<String> {
    DEFAULT_FALSE_LABELS.iter().map(|s| s.to_string()).collect()
}

fn default_hf_timeout() -> u64 {
    huggingface::DEFAULT_TIMEOUT_SECS
}

/// Fact-check search settings.
#[derive(Debug, Clone, Deserialize)]
pub struct FactCheckConfig {
    #[serde(default = "default_fact_check_endpoint")]
    pub endpoint: String,
    /// Language filter (default: "en").
    #[serde(default = "default_language_code")]
    pub language_code: String,
    /// Request timeout in seconds (default: 60).
    #[serde(default = "default_fact_check_timeout")]
    pub timeout_secs: u64,
}

impl Default for FactCheckConfig {
    fn default() -> Self {
        Self {
            endpoint: default_fact_check_endpoint(),
            language_code: default_language_code(),
            timeout_secs: default_fact_check_timeout(),
        }
    }
}

fn default_fact_check_endpoint() -> String {
    fact_check::DEFAULT_ENDPOINT.to_string()
}

fn default_language_code() -> String {
    fact_check::DEFAULT_LANGUAGE_CODE.to_string()
}

fn default_fact_check_timeout() -> u64 {
    fact_check::DEFAULT_TIMEOUT_SECS
}

/// Site-restricted web search settings.
#[derive(Debug, Clone, Deserialize)]
pub struct WebSearchConfig {
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,
    /// Custom search engine ID.
    #[serde(default = "default_cx")]
    pub cx: String,
    /// Domain to restrict results to (default: "bbc.com").
    #[serde(default = "default_site")]
    pub site: String,
    /// Display name of the site (default: "BBC News").
    #[serde(default = "default_site_name")]
    pub site_name: String,
    /// Results per query (default: 5).
    #[serde(default = "default_num")]
    pub num: u8,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_search_timeout")]
    pub timeout_secs: u64,
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_search_endpoint(),
            cx: default_cx(),
            site: default_site(),
            site_name: default_site_name(),
            num: default_num(),
            timeout_secs: default_search_timeout(),
        }
    }
}

fn default_search_endpoint() -> String {
    web_search::DEFAULT_ENDPOINT.to_string()
}

fn default_cx() -> String {
    web_search::DEFAULT_CX.to_string()
}

fn default_site() -> String {
    web_search::DEFAULT_SITE.to_string()
}

fn default_site_name() -> String {
    "BBC News".to_string()
}

fn default_num() -> u8 {
    web_search::DEFAULT_NUM_RESULTS
}

fn default_search_timeout() -> u64 {
    web_search::DEFAULT_TIMEOUT_SECS
}

/// Secrets configuration (API keys).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Secrets {
    #[serde(default)]
    pub huggingface: Option<ApiKeySecret>,
    #[serde(default)]
    pub fact_check: Option<ApiKeySecret>,
    #[serde(default)]
    pub web_search: Option<ApiKeySecret>,
}

/// A single API key secret.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeySecret {
    pub api_key: String,
}

/// Service name → environment variable name mapping.
const SERVICE_ENV_VARS: &[(&str, &str)] = &[
    ("huggingface", "HF_API_KEY"),
    ("fact_check", "FACTCHECK_API_KEY"),
    ("web_search", "SEARCH_API_KEY"),
];

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// An explicit path that does not exist is an error; when no path is
    /// given and no standard file exists, defaults are used.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => {
                info!("no config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Parse a config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ClaimCheckError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            ClaimCheckError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(ClaimCheckError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".claimcheck").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        let system_config = PathBuf::from("/etc/claimcheck/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}

impl Secrets {
    /// Load secrets from the standard locations with permission checks.
    ///
    /// Resolution order:
    /// 1. `~/.claimcheck/secrets.toml` (if exists, must be 0600)
    /// 2. `/etc/claimcheck/secrets.toml` (if exists, must be 0600)
    ///
    /// Returns empty secrets if no file exists (keys may come from env vars).
    pub fn load() -> Result<Self> {
        if let Some(home) = dirs::home_dir() {
            let user_secrets = home.join(".claimcheck").join("secrets.toml");
            if user_secrets.exists() {
                return Self::load_from_file(&user_secrets);
            }
        }

        let system_secrets = PathBuf::from("/etc/claimcheck/secrets.toml");
        if system_secrets.exists() {
            return Self::load_from_file(&system_secrets);
        }

        Ok(Secrets::default())
    }

    /// Parse a secrets file after checking its permissions.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::check_permissions(path)?;
        let content = fs::read_to_string(path).map_err(|e| {
            ClaimCheckError::Configuration(format!("Failed to read secrets file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            ClaimCheckError::Configuration(format!("Failed to parse secrets file {path:?}: {e}"))
        })
    }

    /// Check that the secrets file has secure permissions (0600 or 0400).
    #[cfg(unix)]
    fn check_permissions(path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(path).map_err(|e| {
            ClaimCheckError::Configuration(format!("Failed to stat secrets file {path:?}: {e}"))
        })?;

        let mode = metadata.permissions().mode();
        if mode & 0o077 != 0 {
            return Err(ClaimCheckError::Configuration(format!(
                "Secrets file {path:?} has insecure permissions {:o}. Must be 0600 or 0400.",
                mode & 0o777
            )));
        }

        Ok(())
    }

    #[cfg(not(unix))]
    fn check_permissions(_path: &Path) -> Result<()> {
        Ok(())
    }

    /// Get the API key for a service, falling back to its environment variable.
    ///
    /// The web search key falls back to the fact-check key, since both are
    /// usually the same Google Cloud key.
    pub fn api_key(&self, service: &str) -> Option<String> {
        let key = self.lookup(service);
        if key.is_none() && service == "web_search" {
            return self.lookup("fact_check");
        }
        key
    }

    fn lookup(&self, service: &str) -> Option<String> {
        let from_file = match service {
            "huggingface" => self.huggingface.as_ref(),
            "fact_check" => self.fact_check.as_ref(),
            "web_search" => self.web_search.as_ref(),
            _ => None,
        }
        .map(|s| s.api_key.clone());

        from_file.or_else(|| {
            SERVICE_ENV_VARS
                .iter()
                .find(|(name, _)| *name == service)
                .and_then(|(_, env_var)| std::env::var(env_var).ok())
                .filter(|key| !key.is_empty())
        })
    }
}
