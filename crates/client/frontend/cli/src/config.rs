//! Host adapter configuration.
use std::env;
use std::path::PathBuf;

/// Settings specific to the stdio host adapter, separate from the
/// cross-adapter [`client_frontend_core::FrontendConfig`].
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub host: HostConfig,
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Construct adapter configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HOST_SUPPORTS_CLOSE` - Host can dismiss the screen itself (default: false)
    /// - `BATTLE_SESSION_ID` - Log session name (default: timestamp based)
    /// - `LOG_DIR` - Log directory override (default: platform cache dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(supports_close) = read_env_bool("HOST_SUPPORTS_CLOSE") {
            config.host.supports_close = supports_close;
        }

        config.logging.session_id = env::var("BATTLE_SESSION_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());

        config.logging.log_dir = env::var_os("LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config
    }
}

#[derive(Clone, Debug, Default)]
pub struct HostConfig {
    /// When set, quitting asks the host to close the screen instead of
    /// sending a quit command.
    pub supports_close: bool,
}

#[derive(Clone, Debug, Default)]
pub struct LoggingConfig {
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

fn read_env_bool(key: &str) -> Option<bool> {
    let value = env::var(key).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
