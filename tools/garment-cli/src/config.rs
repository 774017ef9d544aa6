//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use garment_commerce::cart::DEFAULT_SHIPPING_FEE;
use garment_commerce::Currency;
use garment_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["garment.toml", ".garment.toml", "garment.json"];

/// Environment variable that overrides `session.path`.
pub const SESSION_ENV: &str = "GARMENT_SESSION";

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Store and catalog settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Where the shopping session is kept.
    #[serde(default)]
    pub session: SessionConfig,

    /// Checkout settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Sign-in settings.
    #[serde(default)]
    pub account: AccountConfig,

    /// Log settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config content; JSON when the path ends in `.json`, TOML otherwise.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Currency override, if one is configured.
    pub fn currency(&self) -> Result<Option<Currency>> {
        match &self.store.currency {
            None => Ok(None),
            Some(code) => Currency::from_code(code)
                .map(Some)
                .with_context(|| format!("Unknown currency code: {}", code)),
        }
    }

    /// Problems that make the config unusable.
    pub fn errors(&self, base: &Path) -> Vec<String> {
        let mut errors = Vec::new();

        if let Some(code) = &self.store.currency {
            if Currency::from_code(code).is_none() {
                errors.push(format!("store.currency '{}' is not a supported code", code));
            }
        }

        if let Some(catalog) = &self.store.catalog {
            if !base.join(catalog).exists() {
                errors.push(format!("store.catalog '{}' does not exist", catalog));
            }
        }

        if self.checkout.shipping_fee < 0 {
            errors.push("checkout.shipping_fee must not be negative".to_string());
        }

        if self.session.path.trim().is_empty() {
            errors.push("session.path must not be empty".to_string());
        }

        errors
    }
}

/// Store metadata and catalog source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name shown in page headers.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Catalog JSON file. The bundled catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    /// Currency code overriding the catalog's own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

fn default_store_name() -> String {
    "Clothing Store".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            catalog: None,
            currency: None,
        }
    }
}

/// Session persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session file, relative to the working directory.
    #[serde(default = "default_session_path")]
    pub path: String,
}

fn default_session_path() -> String {
    ".garment/session.json".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

/// Checkout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Flat shipping fee for non-empty orders.
    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: i64,

    /// Simulated payment processing time.
    #[serde(default = "default_payment_delay_ms")]
    pub payment_delay_ms: u64,
}

fn default_shipping_fee() -> i64 {
    DEFAULT_SHIPPING_FEE
}

fn default_payment_delay_ms() -> u64 {
    2000
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            shipping_fee: default_shipping_fee(),
            payment_delay_ms: default_payment_delay_ms(),
        }
    }
}

/// Sign-in settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Simulated sign-in time.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
}

fn default_login_delay_ms() -> u64 {
    1000
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
        }
    }
}

/// Log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level written to stderr.
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Line format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Generate a default garment.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Garment storefront configuration

[store]
name = "{name}"
# catalog = "catalog.json"
# currency = "INR"

[session]
path = ".garment/session.json"

[checkout]
shipping_fee = 100
payment_delay_ms = 2000

[account]
login_delay_ms = 1000

[log]
level = "warn"
format = "human"
"#,
        name = name
    )
}
