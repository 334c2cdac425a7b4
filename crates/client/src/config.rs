//! # Client Configuration Module
//!
//! Loads the settings the clinic client needs from environment variables,
//! with defaults where a value is optional.
//!
//! ## Environment Variables
//!
//! - `CLINICA_API_URL`: Base URL of the clinic backend (required)
//! - `CLINICA_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `CLINICA_PAGE_SIZE`: Page size for patient/doctor listings (default: 100)
//! - `LOG_LEVEL`: Logging level (default: "info")

use eyre::{eyre, Result, WrapErr};
use std::env;
use std::time::Duration;
use tracing::Level;

pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Configuration for the clinic API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g. "http://localhost:8080")
    pub api_url: String,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Page size requested when listing patients and doctors
    pub page_size: u32,

    /// Log level for the application
    pub log_level: Level,
}

impl ClientConfig {
    /// Configuration pointing at `api_url` with every optional value defaulted.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            page_size: DEFAULT_PAGE_SIZE,
            log_level: Level::INFO,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Fails when `CLINICA_API_URL` is missing or blank, or when
    /// `CLINICA_PAGE_SIZE` is not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("CLINICA_API_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| eyre!("CLINICA_API_URL environment variable not set"))?
            .trim()
            .trim_end_matches('/')
            .to_string();

        let request_timeout = lookup("CLINICA_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .filter(|seconds| *seconds > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS);

        let page_size = match lookup("CLINICA_PAGE_SIZE") {
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| eyre!("{value:?} is not a positive integer"))
                .wrap_err("Invalid CLINICA_PAGE_SIZE value")?,
            None => DEFAULT_PAGE_SIZE,
        };

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            api_url,
            request_timeout,
            page_size,
            log_level,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}
