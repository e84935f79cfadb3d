//! Domain services (business logic)

pub mod permission_edit_service;

pub use permission_edit_service::{EditSession, PermissionEditService};
