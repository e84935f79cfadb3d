//! Domain errors

use menu_acl_shared::MenuId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Duplicate menu id in catalog: {0}")]
    DuplicateMenuId(MenuId),

    #[error("Menu catalog too large: {size} entries (limit {limit})")]
    CatalogTooLarge { size: usize, limit: usize },

    #[error("Permission store error: {0}")]
    PermissionStore(String),
}
