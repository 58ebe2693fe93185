//! Application services

mod address_service;
mod lookup_service;
mod map_view;

pub use address_service::AddressService;
pub use lookup_service::{LookupService, WindReport};
pub use map_view::MapView;
