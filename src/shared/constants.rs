/// Query key that turns any request into a health check
pub const HEALTH_QUERY_KEY: &str = "health";

/// Path fragment that turns any request into a health check
pub const HEALTH_PATH_MARKER: &str = "/health";

pub const HEALTH_RESPONSE_BODY: &str = "OK";

/// Shown on the page when the host name cannot be read
pub const UNKNOWN_HOSTNAME: &str = "unknown";

/// Display format for the server clock on the page
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";
