//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UrlService;

/// State cloned into every request handler.
///
/// The store connection lives inside [`UrlService`]; it is opened once at
/// startup and shared by all requests.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>) -> Self {
        Self { url_service }
    }
}
