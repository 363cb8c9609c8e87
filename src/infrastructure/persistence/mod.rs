//! Repository implementations.
//!
//! - [`PgUrlRepository`] - PostgreSQL storage used by the server
//! - [`InMemoryUrlRepository`] - Process-local storage used by handler tests

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
