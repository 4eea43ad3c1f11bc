use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::{Latency, DEFAULT_HOLDER_LIMIT, DEFAULT_TX_LIMIT};
use crate::page::ToastContainer;

/// Address the wallet-connect stub pretends to connect
pub const DEMO_WALLET_ADDRESS: &str = "0xCoffeeHolics1234567890beef";

pub const DEFAULT_LOG_LEVEL: &str = "beans_dash=info,warn";

const CONFIG_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Config version (for future migrations)
    pub version: u32,

    /// Transactions requested on load
    pub tx_limit: usize,

    /// Holders requested on load
    pub holder_limit: usize,

    /// How long a toast stays before fading
    pub toast_timeout_ms: u64,

    /// Simulated latency of the demo data source
    pub latency: Latency,

    /// Address set by the wallet-connect stub
    pub wallet_address: String,

    /// Directory for the rolling log file
    pub log_dir: Option<PathBuf>,

    /// Filter directive used when RUST_LOG is unset
    pub log_level: String,
}

/// Edits requested by the `config` command
#[derive(Debug, Default)]
pub struct ConfigChanges {
    pub tx_limit: Option<usize>,
    pub holder_limit: Option<usize>,
    pub toast_timeout_ms: Option<u64>,
    pub wallet_address: Option<String>,
    pub log_level: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            tx_limit: DEFAULT_TX_LIMIT,
            holder_limit: DEFAULT_HOLDER_LIMIT,
            toast_timeout_ms: ToastContainer::DEFAULT_TIMEOUT.as_millis() as u64,
            latency: Latency::default(),
            wallet_address: DEMO_WALLET_ADDRESS.to_string(),
            log_dir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load config from `path`, or from the default location.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = Self::load_unchecked(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Like `load`, but accepts values `validate` would reject so the
    /// `config` command can repair them
    pub fn load_unchecked(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let data = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;

        serde_json::from_str(&data).with_context(|| format!("Failed to parse config {}", config_path.display()))
    }

    /// Apply the requested edits. Returns true when anything was set.
    pub fn apply(&mut self, changes: ConfigChanges) -> bool {
        let mut changed = false;
        if let Some(v) = changes.tx_limit {
            self.tx_limit = v;
            changed = true;
        }
        if let Some(v) = changes.holder_limit {
            self.holder_limit = v;
            changed = true;
        }
        if let Some(v) = changes.toast_timeout_ms {
            self.toast_timeout_ms = v;
            changed = true;
        }
        if let Some(v) = changes.wallet_address {
            self.wallet_address = v;
            changed = true;
        }
        if let Some(v) = changes.log_level {
            self.log_level = v;
            changed = true;
        }
        changed
    }

    /// Save config to `path`, or to the default location
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        self.validate()?;

        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        // Ensure .beans directory exists
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config {}", config_path.display()))?;

        Ok(config_path)
    }

    fn beans_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
        Ok(home.join(".beans"))
    }

    /// `~/.beans/config.json`
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::beans_dir()?.join("config.json"))
    }

    /// Configured log directory, or `~/.beans/logs`
    pub fn resolved_log_dir(&self) -> Result<PathBuf> {
        match &self.log_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::beans_dir()?.join("logs")),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.tx_limit == 0 {
            bail!("tx_limit must be at least 1");
        }
        if self.holder_limit == 0 {
            bail!("holder_limit must be at least 1");
        }
        if self.wallet_address.trim().is_empty() {
            bail!("wallet_address must not be empty");
        }
        Ok(())
    }
}
