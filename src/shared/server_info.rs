use chrono::Local;
use serde::Serialize;

use crate::core::config::SiteConfig;
use crate::shared::constants::{DISPLAY_TIME_FORMAT, UNKNOWN_HOSTNAME};

/// Live environment values interpolated into the page. Display only.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub hostname: String,
    pub time: String,
    pub runtime_version: String,
    pub server_software: String,
    pub database_driver: &'static str,
    pub database_driver_available: bool,
}

impl ServerInfo {
    pub fn collect(site: &SiteConfig) -> Self {
        Self {
            hostname: hostname(),
            time: Local::now().format(DISPLAY_TIME_FORMAT).to_string(),
            runtime_version: format!("Rust {}", env!("CARGO_PKG_RUST_VERSION")),
            server_software: site.server_software.clone(),
            database_driver: "PostgreSQL (sqlx)",
            // The driver is linked in at build time
            database_driver_available: true,
        }
    }
}

pub fn hostname() -> String {
    sys_info::hostname()
        .ok()
        .filter(|h| !h.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_HOSTNAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_fills_every_field() {
        let site = SiteConfig {
            server_software: "test-server".to_string(),
        };
        let info = ServerInfo::collect(&site);

        assert!(!info.hostname.is_empty());
        assert!(!info.time.is_empty());
        assert!(info.runtime_version.starts_with("Rust"));
        assert_eq!(info.server_software, "test-server");
        assert!(info.database_driver_available);
    }

    #[test]
    fn test_time_carries_utc_offset() {
        let info = ServerInfo::collect(&SiteConfig {
            server_software: "test-server".to_string(),
        });

        let parsed = chrono::DateTime::parse_from_str(&info.time, DISPLAY_TIME_FORMAT);
        assert!(parsed.is_ok(), "unexpected time format: {}", info.time);
    }
}
