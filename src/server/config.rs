//! Server configuration.

use std::net::SocketAddr;
use thiserror::Error;

use crate::context::ExecutionContext;

/// Base URL of the web app when `NEXTAUTH_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Cookie holding the session token.
pub const DEFAULT_SESSION_COOKIE: &str = "next-auth.session-token";

/// Header (and value) that lets internal scripts call the prompt endpoint.
pub const SCRIPT_ACCESS_HEADER: &str = "x-python-script-access";
pub const SCRIPT_ACCESS_VALUE: &str = "python-script";

/// Lifetime of an execution link (24 hours).
pub const DEFAULT_EXECUTION_TTL_SECONDS: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid base URL {0:?}: expected http:// or https://")]
    InvalidBaseUrl(String),

    #[error("Execution TTL must be positive, got {0}s")]
    InvalidTtl(i64),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,

    /// Absolute base of execution links, without a trailing slash.
    pub base_url: String,

    /// Name of the session cookie.
    pub session_cookie: String,

    /// Honour the script-access header. Off unless explicitly enabled.
    pub script_access: bool,

    /// Identity assumed by script-access requests.
    pub script_identity: ExecutionContext,

    /// Lifetime of execution links, in seconds.
    pub execution_ttl_seconds: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3001)),
            base_url: DEFAULT_BASE_URL.to_string(),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            script_access: false,
            script_identity: ExecutionContext::new("python-script", "default"),
            execution_ttl_seconds: DEFAULT_EXECUTION_TTL_SECONDS,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bind_address(mut self, addr: SocketAddr) -> Self {
        self.bind_address = addr;
        self
    }

    /// Set the base URL of execution links. A trailing `/` is dropped.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .is_some_and(|host| !host.is_empty());
        if !has_host {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_session_cookie(mut self, name: impl Into<String>) -> Self {
        self.session_cookie = name.into();
        self
    }

    /// Enable or disable the script-access header.
    pub fn with_script_access(mut self, enabled: bool) -> Self {
        self.script_access = enabled;
        self
    }

    pub fn with_script_identity(mut self, identity: ExecutionContext) -> Self {
        self.script_identity = identity;
        self
    }

    pub fn with_execution_ttl_seconds(mut self, seconds: i64) -> Result<Self, ConfigError> {
        if seconds <= 0 {
            return Err(ConfigError::InvalidTtl(seconds));
        }
        self.execution_ttl_seconds = seconds;
        Ok(self)
    }

    /// Absolute link to an execution.
    pub fn execution_url(&self, execution_id: &str) -> String {
        format!("{}/executions/{}", self.base_url, execution_id)
    }
}
