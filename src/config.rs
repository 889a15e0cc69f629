//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Example
//!
//! ```bash
//! export LISTEN="0.0.0.0:3001"
//! export BASE_URL="https://s.example.com"
//!
//! export TELEMETRY_URL="https://logs.example.com/api/logs"
//! export TELEMETRY_TOKEN="secret"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3001`)
//! - `PORT` - Overrides only the port of `LISTEN`
//! - `BASE_URL` - Prefix for returned short links (default: `http://localhost:{port}`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_VALIDITY_MINUTES` - Validity when a request omits it (default: 30)
//! - `BEHIND_PROXY` - Read client address from proxy headers (default: false)
//! - `TELEMETRY_URL` / `TELEMETRY_TOKEN` - Remote log collector; both must be
//!   set, otherwise telemetry only goes to the local log
//! - `TELEMETRY_STACK` - Stack label sent with every event (default: `backend`)
//! - `TELEMETRY_TIMEOUT_SECS` - Collector request timeout (default: 3)
//! - `TELEMETRY_QUEUE_CAPACITY` - Telemetry event buffer size (default: 1000)
//! - `TELEMETRY_WORKER_CONCURRENCY` - Concurrent deliveries (default: 4)

use anyhow::{Context, Result};
use std::env;

const DEFAULT_LISTEN: &str = "0.0.0.0:3001";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub default_validity_minutes: u32,
    /// When true, the client identifier is read from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,

    // ── Telemetry ───────────────────────────────────────────────────────────
    /// Collector endpoint (`TELEMETRY_URL`). Unset means local logging only.
    pub telemetry_url: Option<String>,
    /// Bearer token for the collector (`TELEMETRY_TOKEN`). Never logged.
    pub telemetry_token: Option<String>,
    pub telemetry_stack: String,
    pub telemetry_timeout_secs: u64,
    pub telemetry_queue_capacity: usize,
    /// Maximum number of telemetry events delivered concurrently.
    pub telemetry_worker_concurrency: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr()?;

        let base_url = env_non_empty("BASE_URL")
            .unwrap_or_else(|| format!("http://localhost:{}", port_of(&listen_addr)));

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let default_validity_minutes = env_parse("DEFAULT_VALIDITY_MINUTES").unwrap_or(30);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let telemetry_url = env_non_empty("TELEMETRY_URL");
        let telemetry_token = env_non_empty("TELEMETRY_TOKEN");
        let telemetry_stack =
            env::var("TELEMETRY_STACK").unwrap_or_else(|_| "backend".to_string());
        let telemetry_timeout_secs = env_parse("TELEMETRY_TIMEOUT_SECS").unwrap_or(3);
        let telemetry_queue_capacity = env_parse("TELEMETRY_QUEUE_CAPACITY").unwrap_or(1_000);
        let telemetry_worker_concurrency = env_parse("TELEMETRY_WORKER_CONCURRENCY").unwrap_or(4);

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            default_validity_minutes,
            behind_proxy,
            telemetry_url,
            telemetry_token,
            telemetry_stack,
            telemetry_timeout_secs,
            telemetry_queue_capacity,
            telemetry_worker_concurrency,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN`, or `0.0.0.0:3001` when unset
    /// 2. A non-empty `PORT` replaces only the port
    fn load_listen_addr() -> Result<String> {
        let listen = env_non_empty("LISTEN").unwrap_or_else(|| DEFAULT_LISTEN.to_string());

        let Some(port) = env_non_empty("PORT") else {
            return Ok(listen);
        };

        let port: u16 = port
            .parse()
            .with_context(|| format!("PORT must be a valid port number, got '{port}'"))?;

        let host = listen
            .rsplit_once(':')
            .map(|(host, _)| host)
            .unwrap_or(listen.as_str());

        Ok(format!("{host}:{port}"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `log_format` is not `text` or `json`
    /// - `base_url` or `telemetry_url` is not an http(s) URL
    /// - a numeric setting is outside its allowed range
    pub fn validate(&self) -> Result<()> {
        // Validate listen address format
        match self.listen_addr.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => {}
            _ => anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            ),
        }

        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !is_http_url(&self.base_url) {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.default_validity_minutes == 0 {
            anyhow::bail!("DEFAULT_VALIDITY_MINUTES must be at least 1");
        }

        if let Some(ref url) = self.telemetry_url
            && !is_http_url(url)
        {
            anyhow::bail!(
                "TELEMETRY_URL must start with 'http://' or 'https://', got '{}'",
                url
            );
        }

        if self.telemetry_stack.trim().is_empty() {
            anyhow::bail!("TELEMETRY_STACK must not be empty");
        }

        if self.telemetry_timeout_secs == 0 {
            anyhow::bail!("TELEMETRY_TIMEOUT_SECS must be greater than 0");
        }

        if !(10..=100_000).contains(&self.telemetry_queue_capacity) {
            anyhow::bail!(
                "TELEMETRY_QUEUE_CAPACITY must be between 10 and 100000, got {}",
                self.telemetry_queue_capacity
            );
        }

        if !(1..=64).contains(&self.telemetry_worker_concurrency) {
            anyhow::bail!(
                "TELEMETRY_WORKER_CONCURRENCY must be between 1 and 64, got {}",
                self.telemetry_worker_concurrency
            );
        }

        Ok(())
    }

    /// Returns the collector endpoint and token when both are configured.
    pub fn remote_telemetry(&self) -> Option<(&str, &str)> {
        match (&self.telemetry_url, &self.telemetry_token) {
            (Some(url), Some(token)) => Some((url, token)),
            _ => None,
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Default validity: {} min", self.default_validity_minutes);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);

        match (self.remote_telemetry(), &self.telemetry_url) {
            (Some((url, token)), _) => tracing::info!(
                "  Telemetry: {} (token {})",
                url,
                mask_secret(token)
            ),
            (None, Some(url)) => {
                tracing::warn!("  Telemetry: {} ignored, TELEMETRY_TOKEN not set", url)
            }
            (None, None) => tracing::info!("  Telemetry: local log only"),
        }

        tracing::info!("  Telemetry stack: {}", self.telemetry_stack);
        tracing::info!(
            "  Telemetry queue capacity: {}",
            self.telemetry_queue_capacity
        );
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn port_of(listen_addr: &str) -> &str {
    listen_addr
        .rsplit_once(':')
        .map(|(_, port)| port)
        .unwrap_or("3001")
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Masks a secret for logging, keeping at most its first four characters.
///
/// - `abcdef123456` → `abcd***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
