//! Client configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A static WASM bundle has no process environment, so values are captured by
//! `option_env!` when the bundle is compiled. Parsing goes through a key lookup
//! closure so tests can feed arbitrary values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const LOGIN_PATH: &str = "/login";
pub const LANDING_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid boolean for {var}: {value}")]
    InvalidBool { var: &'static str, value: String },
    #[error("invalid log level for {var}: {value}")]
    InvalidLogLevel { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every API path, without a trailing slash.
    pub api_base: String,
    /// Whether the session tracks a refresh token and exposes `refresh`.
    pub refresh_capable: bool,
    pub log_level: log::Level,
    pub access_token_key: &'static str,
    pub refresh_token_key: &'static str,
    /// Where unauthenticated users are sent.
    pub login_path: &'static str,
    /// Where authenticated users without the required role are sent.
    pub landing_path: &'static str,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            refresh_capable: true,
            log_level: log::Level::Info,
            access_token_key: ACCESS_TOKEN_KEY,
            refresh_token_key: REFRESH_TOKEN_KEY,
            login_path: LOGIN_PATH,
            landing_path: LANDING_PATH,
        }
    }
}

impl ClientConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `PEDIDOS_API_BASE`: default `/api`
    /// - `PEDIDOS_REFRESH_TOKENS`: `true` (default) or `false`
    /// - `PEDIDOS_LOG_LEVEL`: `info` (default), `error`, `warn`, `debug`, `trace`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a flag or level cannot be parsed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            "PEDIDOS_API_BASE" => option_env!("PEDIDOS_API_BASE").map(str::to_owned),
            "PEDIDOS_REFRESH_TOKENS" => option_env!("PEDIDOS_REFRESH_TOKENS").map(str::to_owned),
            "PEDIDOS_LOG_LEVEL" => option_env!("PEDIDOS_LOG_LEVEL").map(str::to_owned),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a flag or level cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let api_base = parse_api_base(lookup("PEDIDOS_API_BASE").as_deref());
        let refresh_capable =
            parse_bool("PEDIDOS_REFRESH_TOKENS", lookup("PEDIDOS_REFRESH_TOKENS").as_deref(), defaults.refresh_capable)?;
        let log_level = parse_log_level(lookup("PEDIDOS_LOG_LEVEL").as_deref(), defaults.log_level)?;
        Ok(Self { api_base, refresh_capable, log_level, ..defaults })
    }
}

fn parse_api_base(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        None | Some("") => DEFAULT_API_BASE.to_owned(),
        Some(value) => value.trim_end_matches('/').to_owned(),
    }
}

fn parse_bool(var: &'static str, raw: Option<&str>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(default);
    };
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value: value.to_owned() }),
    }
}

fn parse_log_level(raw: Option<&str>, default: log::Level) -> Result<log::Level, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(default);
    };
    value
        .parse::<log::Level>()
        .map_err(|_| ConfigError::InvalidLogLevel { var: "PEDIDOS_LOG_LEVEL", value: value.to_owned() })
}
