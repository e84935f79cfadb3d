//! Common types

/// Identifier of a menu record as served by the Permission Store.
pub type MenuId = i64;

pub type RoleId = i64;
pub type BusinessId = i64;
pub type StaffId = i64;
