use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "userdir.toml",
    "config/userdir.toml",
    "crates/config/userdir.toml",
];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Accounts the in-memory directory is built from at startup.
///
/// Entries are handed to the store in file order, so a repeated username or
/// email is reported against the later entry.
///
/// ```
/// use userdir_config::DirectoryConfig;
///
/// let directory = DirectoryConfig::default();
/// assert!(directory.seed_users.is_empty());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub seed_users: Vec<SeedUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_filter")]
    pub filter: String,
}

impl LoggingConfig {
    fn default_filter() -> String {
        "info".to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: Self::default_filter(),
        }
    }
}

/// Load the application configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use userdir_config::load;
///
/// std::env::remove_var("USERDIR_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.logging.filter.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder()
        .set_default("logging.filter", defaults.logging.filter.clone())
        .context("unable to register configuration defaults")?;

    let environment_overrides = config::Environment::with_prefix("USERDIR").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("USERDIR_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via USERDIR_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    debug!(
        seed_users = config.directory.seed_users.len(),
        filter = %config.logging.filter,
        "loaded directory configuration"
    );
    Ok(config)
}
