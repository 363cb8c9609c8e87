//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Shortening, resolution and listing
//! - [`services::id_allocator::IdAllocator`] - Next short URL computation

pub mod services;
