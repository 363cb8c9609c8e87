//! Helper functions used across the application.
//!
//! - [`url_validator`] - Syntactic checks on submitted URLs
//! - [`db_error`] - Classification of database constraint violations

pub mod db_error;
pub mod url_validator;
