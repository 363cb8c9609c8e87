//! Syntactic validation of submitted URLs.
//!
//! Only the shape is checked here; whether the host actually resolves is the
//! job of [`crate::domain::resolver::HostResolver`].

use url::{Host, Url};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,
    #[error("URL could not be parsed: {0}")]
    Malformed(String),
    #[error("URL has no host")]
    MissingHost,
}

/// Parses `input` as an absolute URL and returns the host to resolve.
///
/// Any scheme is accepted as long as the URL carries a host.
/// IPv6 literals are returned without brackets so they can be passed to the
/// resolver as-is.
///
/// # Examples
///
/// ```
/// use shorturl::utils::url_validator::host_to_resolve;
///
/// assert_eq!(host_to_resolve("https://example.com/a?b=c").unwrap(), "example.com");
/// assert!(host_to_resolve("not a url").is_err());
/// ```
pub fn host_to_resolve(input: &str) -> Result<String, UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => Ok(domain.to_string()),
        Some(Host::Ipv4(ip)) => Ok(ip.to_string()),
        Some(Host::Ipv6(ip)) => Ok(ip.to_string()),
        _ => Err(UrlValidationError::MissingHost),
    }
}
