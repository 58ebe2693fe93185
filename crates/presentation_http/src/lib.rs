//! Wind Lantern HTTP presentation layer
//!
//! Serves the single address page: a form to save the monitored address
//! and the current wind conditions at that address.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod session;
pub mod state;
pub mod templates;

pub use error::ApiError;
pub use routes::create_router;
pub use session::{SESSION_COOKIE, SessionStore};
pub use state::AppState;
pub use templates::PageTemplates;
