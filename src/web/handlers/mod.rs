//! HTML page handlers.

mod index;

pub use index::index_handler;
