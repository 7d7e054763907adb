use std::time::Duration;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin, without the `/api/v1` prefix (default: `http://localhost:3000`).
    pub base_url: String,
    /// Per-request timeout (default: 10 seconds).
    pub timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default                 |
    /// |-----------------------|-------------------------|
    /// | `API_BASE_URL`        | `http://localhost:3000` |
    /// | `CLIENT_TIMEOUT_SECS` | `10`                    |
    pub fn from_env() -> Self {
        let base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs: u64 = std::env::var("CLIENT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

const DEFAULT_TIMEOUT_SECS: u64 = 10;
