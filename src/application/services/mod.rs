//! Business logic services for the application layer.

pub mod id_allocator;
pub mod url_service;

pub use id_allocator::IdAllocator;
pub use url_service::{DEFAULT_ALLOCATION_RETRIES, UrlService};
