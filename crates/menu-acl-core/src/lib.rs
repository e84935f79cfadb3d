//! # Menu ACL Core
//! 
//! Menu catalog tree, cascading grant editing, and the Permission Store port
//! used by the role, business-role and staff permission pages.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
