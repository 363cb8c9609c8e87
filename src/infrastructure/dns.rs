//! System DNS resolver.

use async_trait::async_trait;

use crate::domain::resolver::{HostResolver, ResolveError};

/// Resolves hostnames through the operating system resolver.
///
/// Lookups run on Tokio's blocking pool, so only the calling request is suspended.
#[derive(Debug, Clone, Default)]
pub struct DnsResolver;

impl DnsResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for DnsResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        let mut addrs = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|e| ResolveError::new(host, e.to_string()))?;

        if addrs.next().is_none() {
            return Err(ResolveError::new(host, "no addresses returned"));
        }

        Ok(())
    }
}
