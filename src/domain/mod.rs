//! Domain layer containing business entities and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`resolver`] - Hostname resolution contract
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
pub mod resolver;
