//! Hostname resolution used as a validity gate for submitted URLs.

use async_trait::async_trait;

/// Failure to resolve a hostname.
#[derive(Debug, thiserror::Error)]
#[error("failed to resolve host '{host}': {reason}")]
pub struct ResolveError {
    pub host: String,
    pub reason: String,
}

impl ResolveError {
    pub fn new(host: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            reason: reason.into(),
        }
    }
}

/// Resolves hostnames; the resolved addresses themselves are discarded.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::DnsResolver`] - System resolver via Tokio
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Succeeds if `host` resolves to at least one address.
    async fn resolve(&self, host: &str) -> Result<(), ResolveError>;
}
