use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "basedchat.toml",
    "config/basedchat.toml",
    "crates/config/basedchat.toml",
    "../basedchat.toml",
    "../config/basedchat.toml",
    "../crates/config/basedchat.toml",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub http: HttpConfig,
}

/// Listen address for the chat server.
///
/// ```
/// use basedchat_config::HttpConfig;
///
/// let http = HttpConfig::default();
/// assert_eq!(http.address, "127.0.0.1");
/// assert_eq!(http.port, 50052);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub address: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 50052,
        }
    }
}

/// Load the server configuration by combining defaults, an optional file,
/// and environment overrides.
///
/// ```
/// use basedchat_config::load;
///
/// std::env::remove_var("BASEDCHAT_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.http.address.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder();
    builder = builder
        .set_default("http.address", defaults.http.address.clone())
        .unwrap()
        .set_default("http.port", i64::from(defaults.http.port))
        .unwrap();

    let environment_overrides = config::Environment::with_prefix("BASEDCHAT").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("BASEDCHAT_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via BASEDCHAT_CONFIG");
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

    debug!(?config, "loaded chat server configuration");
    Ok(config)
}
