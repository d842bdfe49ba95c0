use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
    str::FromStr,
};

use axum::http::HeaderValue;
use secrecy::SecretString;
use time::Duration;

use super::InfraError;

const DEFAULT_BIND_PORT: u16 = 3001;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ADMIN_SESSION_TTL_MINUTES: i64 = 60;

pub struct AppConfig {
    pub database_url: SecretString,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub admin_password: SecretString,
    pub jwt_secret: SecretString,
    pub admin_session_ttl: Duration,
    /// When set, logs are also written to this file as JSON.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Store credentials are required:
    /// startup fails instead of falling back to placeholders.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, InfraError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = SecretString::new(required(&get, "DATABASE_URL")?.into());
        let database_max_connections =
            parsed_or(&get, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let bind_addr = parsed_or(
            &get,
            "BIND_ADDR",
            SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_BIND_PORT)),
        )?;
        let cors_origin = match get("CORS_ORIGIN") {
            Some(origin) => HeaderValue::from_str(&origin).map_err(|e| InfraError::ConfigInvalid {
                var: "CORS_ORIGIN",
                reason: e.to_string(),
            })?,
            None => HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
        };
        let admin_password = SecretString::new(required(&get, "ADMIN_PASSWORD")?.into());
        let jwt_secret = SecretString::new(required(&get, "JWT_SECRET")?.into());
        let admin_session_ttl_minutes: i64 = parsed_or(
            &get,
            "ADMIN_SESSION_TTL_MINUTES",
            DEFAULT_ADMIN_SESSION_TTL_MINUTES,
        )?;
        if admin_session_ttl_minutes <= 0 {
            return Err(InfraError::ConfigInvalid {
                var: "ADMIN_SESSION_TTL_MINUTES",
                reason: "must be positive".into(),
            });
        }
        let log_file = get("LOG_FILE").map(PathBuf::from);

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            cors_origin,
            admin_password,
            jwt_secret,
            admin_session_ttl: Duration::minutes(admin_session_ttl_minutes),
            log_file,
        })
    }
}

fn required(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<String, InfraError> {
    get(var).ok_or(InfraError::ConfigMissing { var })
}

fn parsed_or<T>(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, InfraError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| InfraError::ConfigInvalid {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
