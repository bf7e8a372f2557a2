//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "TeamSkin";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "teamskin";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "TeamSkin";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "TEAMSKIN_CONFIG_DIR";

/// Default `RUST_LOG` filter when none is set.
pub const DEFAULT_LOG_FILTER: &str = "teamskin=info";
