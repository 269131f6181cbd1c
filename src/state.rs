//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::application::services::AliasService;

#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<AliasService>,
}

impl AppState {
    pub fn new(alias_service: Arc<AliasService>) -> Self {
        Self { alias_service }
    }
}
