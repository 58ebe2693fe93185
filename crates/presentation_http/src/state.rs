//! Application state shared across handlers

use std::sync::Arc;

use application::{AddressService, LookupService};

use crate::session::SessionStore;
use crate::templates::PageTemplates;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Address read/update service
    pub address_service: Arc<AddressService>,
    /// Geocode-then-wind lookup service
    pub lookup_service: Arc<LookupService>,
    /// Session and form-token store
    pub sessions: Arc<SessionStore>,
    /// Page templates
    pub templates: Arc<PageTemplates>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
