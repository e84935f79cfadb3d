//! Permission Store trait (port)

use async_trait::async_trait;
use menu_acl_shared::MenuId;

use crate::domain::{GrantTarget, MenuNode};
use crate::error::DomainError;

/// Backend that serves menu catalogs and grant sets and persists the result
/// of an editing session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PermissionStore: Send + Sync {
    async fn fetch_catalog(&self, target: GrantTarget) -> Result<Vec<MenuNode>, DomainError>;
    async fn fetch_granted(&self, target: GrantTarget) -> Result<Vec<MenuId>, DomainError>;
    /// Replace the target's grants with exactly `menu_ids`.
    async fn replace_granted(&self, target: GrantTarget, menu_ids: &[MenuId]) -> Result<(), DomainError>;
}
