//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::Utc;
use garment_commerce::catalog::Catalog;
use garment_commerce::session::SessionState;
use garment_observability::{LogLevel, StructuredLogger};

use crate::config::{StorefrontConfig, CONFIG_FILE_NAMES, SESSION_ENV};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// File the config was loaded from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    command: &'static str,
    verbose: bool,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        output: Output,
        command: &'static str,
        verbose: bool,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (StorefrontConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match find_config(&cwd)? {
                Some((path, config)) => (config, Some(path)),
                None => (StorefrontConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            command,
            verbose,
        })
    }

    /// Directory relative config paths are resolved against: the config
    /// file's directory, or the working directory without one.
    pub fn base_dir(&self) -> PathBuf {
        self.config_path
            .as_ref()
            .and_then(|p| p.parent())
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Resolve a path relative to the base directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.base_dir().join(path)
        }
    }

    /// Load the catalog: the configured file, or the bundled one.
    pub fn catalog(&self) -> Result<Catalog> {
        let mut catalog = match &self.config.store.catalog {
            Some(path) => {
                let path = self.resolve_path(path);
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                Catalog::from_json(&content)
                    .with_context(|| format!("Failed to parse catalog: {}", path.display()))?
            }
            None => Catalog::bundled().context("Bundled catalog is malformed")?,
        };

        if let Some(currency) = self.config.currency()? {
            catalog.currency = currency;
        }

        Ok(catalog)
    }

    /// Session file location; `GARMENT_SESSION` wins over the config.
    pub fn session_path(&self) -> PathBuf {
        match std::env::var(SESSION_ENV) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => self.resolve_path(&self.config.session.path),
        }
    }

    /// Load the saved session, or start a new one. The cart reports totals
    /// in the catalog's currency.
    pub fn load_session(&self, catalog: &Catalog) -> Result<SessionState> {
        let path = self.session_path();
        match read_session(&path)? {
            Some(mut session) => {
                self.output
                    .debug(&format!("Loaded session {} from {}", session.id, path.display()));
                if session.cart.currency() != catalog.currency {
                    self.output.debug(&format!(
                        "Cart currency {} -> {}",
                        session.cart.currency(),
                        catalog.currency
                    ));
                    session.cart.set_currency(catalog.currency);
                }
                Ok(session)
            }
            None => {
                let session = SessionState::new(catalog.currency, Utc::now());
                self.output.debug(&format!("Started session {}", session.id));
                Ok(session)
            }
        }
    }

    /// Record a change and write the session back.
    pub fn save_session(&self, session: &mut SessionState) -> Result<()> {
        session.touch(Utc::now());
        let path = self.session_path();
        write_session(&path, session)?;
        self.output.debug(&format!(
            "Saved session {} (version {}) to {}",
            session.id,
            session.version,
            path.display()
        ));
        Ok(())
    }

    /// A logger for one component, tagged with the session id.
    pub fn logger(&self, session: &SessionState, component: &str) -> StructuredLogger {
        let level = if self.verbose {
            LogLevel::Debug.min(self.config.log.level)
        } else {
            self.config.log.level
        };

        StructuredLogger::new(session.id.as_str())
            .with_component(component)
            .with_command(self.command)
            .with_min_level(level)
            .with_format(self.config.log.format)
    }
}

/// Find config file in directory tree. The nearest file wins; if it does
/// not parse, that is an error rather than a reason to keep searching.
fn find_config(start: &Path) -> Result<Option<(PathBuf, StorefrontConfig)>> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                let config = StorefrontConfig::load(&config_path.to_string_lossy())?;
                return Ok(Some((config_path, config)));
            }
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

/// Read a session file; `None` when it does not exist yet.
pub fn read_session(path: &Path) -> Result<Option<SessionState>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session: {}", path.display()))?;
    let session = SessionState::from_json(&content)
        .with_context(|| format!("Failed to parse session: {}", path.display()))?;
    Ok(Some(session))
}

/// Write a session file, creating its directory.
pub fn write_session(path: &Path, session: &SessionState) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = session.to_json()?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write session: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use garment_commerce::account::UserRecord;
    use garment_commerce::Currency;

    #[test]
    fn test_missing_session_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_session(&dir.path().join("session.json")).unwrap().is_none());
    }

    #[test]
    fn test_session_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let catalog = Catalog::bundled().unwrap();
        let tee = &catalog.products[0];
        let mut session = SessionState::new(Currency::INR, Utc::now());
        session.cart.add_units(tee.catalog_candidate(), 2);
        session.sign_in(UserRecord::from_email("meera@example.com"));

        write_session(&path, &session).unwrap();
        let restored = read_session(&path).unwrap().unwrap();

        assert_eq!(restored, session);
        assert_eq!(restored.cart.item_count(), 2);
    }

    #[test]
    fn test_corrupt_session_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_session(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse session"));
    }

    #[test]
    fn test_find_config_searches_upward() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("garment.toml"),
            "[checkout]\nshipping_fee = 40\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (path, config) = find_config(&nested).unwrap().unwrap();
        assert_eq!(path, dir.path().join("garment.toml"));
        assert_eq!(config.checkout.shipping_fee, 40);
    }

    #[test]
    fn test_unparsable_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("garment.toml"),
            "[checkout]\nshipping_fee = 40\n",
        )
        .unwrap();
        let nested = dir.path().join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("garment.toml"), "[checkout\nshipping_fee = ").unwrap();

        let err = find_config(&nested).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }

    fn context_in(dir: &Path, config: StorefrontConfig) -> Context {
        Context {
            config,
            config_path: Some(dir.join("garment.toml")),
            output: Output::new(false, false),
            cwd: dir.to_path_buf(),
            command: "cart",
            verbose: false,
        }
    }

    #[test]
    fn test_saved_cart_follows_configured_currency() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StorefrontConfig::default();
        config.session.path = "session.json".to_string();

        let catalog = Catalog::bundled().unwrap();
        let mut session = SessionState::new(Currency::INR, Utc::now());
        session.cart.add_item(catalog.products[0].catalog_candidate());
        write_session(&dir.path().join("session.json"), &session).unwrap();

        config.store.currency = Some("USD".to_string());
        let ctx = context_in(dir.path(), config);
        let catalog = ctx.catalog().unwrap();
        assert_eq!(catalog.currency, Currency::USD);

        let loaded = ctx.load_session(&catalog).unwrap();
        assert_eq!(loaded.cart.currency(), Currency::USD);
        assert_eq!(loaded.cart.total().currency, Currency::USD);
        assert_eq!(loaded.cart.item_count(), 1);
    }
}
