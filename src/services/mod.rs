pub mod portal_service;

pub use portal_service::{PortalService, ServiceError};
