//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - URL record storage (PostgreSQL and in-memory)
//! - [`dns`] - System hostname resolver

pub mod dns;
pub mod persistence;
