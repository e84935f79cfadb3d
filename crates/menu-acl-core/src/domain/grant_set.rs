// ============================================================================
// Menu ACL Core - Grant Set
// File: crates/menu-acl-core/src/domain/grant_set.rs
// Description: Set of menu ids granted to the target being edited
// ============================================================================

use std::collections::BTreeSet;

use menu_acl_shared::MenuId;
use serde::{Deserialize, Serialize};

/// Menus granted to one role or staff member. Only
/// [`GrantSetEditor`](super::GrantSetEditor) mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrantSet(BTreeSet<MenuId>);

impl GrantSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: MenuId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = MenuId> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<MenuId> {
        self.iter().collect()
    }

    pub(crate) fn insert(&mut self, id: MenuId) -> bool {
        self.0.insert(id)
    }

    pub(crate) fn remove(&mut self, id: MenuId) -> bool {
        self.0.remove(&id)
    }
}

impl FromIterator<MenuId> for GrantSet {
    fn from_iter<I: IntoIterator<Item = MenuId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
