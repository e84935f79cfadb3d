//! Repository traits (ports)

pub mod permission_store;

pub use permission_store::PermissionStore;

#[cfg(test)]
pub use permission_store::MockPermissionStore;
