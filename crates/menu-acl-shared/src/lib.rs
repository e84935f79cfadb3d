//! # Menu ACL Shared
//! 
//! Shared identifiers, configuration, telemetry and error types for the
//! menu permission crates.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
