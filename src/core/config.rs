use std::env;
use std::fmt;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

/// Connection settings for the registration database.
///
/// A fresh connection is opened with these settings for every submission.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database_name: String,
    pub require_ssl: bool,
    pub run_migrations: bool,
}

/// Values shown on the diagnostics panels of the page
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub server_software: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            app: AppConfig::from_lookup(&lookup)?,
            database: DatabaseConfig::from_lookup(&lookup)?,
            site: SiteConfig::from_lookup(&lookup),
        })
    }
}

impl AppConfig {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 8080;

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let host = lookup("HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let port = parse_or("PORT", lookup, Self::DEFAULT_PORT)?;

        Ok(Self { host, port })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_HOST: &'static str = "localhost";
    const DEFAULT_PORT: u16 = 5432;

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let host = lookup("DB_HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let port = parse_or("DB_PORT", lookup, Self::DEFAULT_PORT)?;
        let username = required("DB_USERNAME", lookup)?;
        let password = required("DB_PASSWORD", lookup)?;
        let database_name = required("DB_NAME", lookup)?;
        let require_ssl = parse_bool_or("DB_REQUIRE_SSL", lookup, false)?;
        let run_migrations = parse_bool_or("DB_RUN_MIGRATIONS", lookup, false)?;

        Ok(Self {
            host,
            port,
            username,
            password,
            database_name,
            require_ssl,
            run_migrations,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };

        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database_name)
            .ssl_mode(ssl_mode)
    }
}

// Keeps the password out of logs and panic messages
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("database_name", &self.database_name)
            .field("require_ssl", &self.require_ssl)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

impl SiteConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let server_software = lookup("SERVER_SOFTWARE")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                format!(
                    "{}/{} (axum)",
                    env!("CARGO_PKG_NAME"),
                    env!("CARGO_PKG_VERSION")
                )
            });

        Self { server_software }
    }
}

fn required(key: &str, lookup: &impl Fn(&str) -> Option<String>) -> Result<String, String> {
    lookup(key).ok_or_else(|| format!("{} environment variable is required", key))
}

fn parse_or<T>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{} must be a valid number", key)),
        None => Ok(default),
    }
}

fn parse_bool_or(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: bool,
) -> Result<bool, String> {
    match lookup(key).as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some("1") | Some("true") | Some("TRUE") | Some("yes") => Ok(true),
        Some("0") | Some("false") | Some("FALSE") | Some("no") => Ok(false),
        Some(_) => Err(format!("{} must be true or false", key)),
    }
}
