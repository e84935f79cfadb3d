// ============================================================================
// Menu ACL Core - Grant Set Editor
// File: crates/menu-acl-core/src/domain/grant_editor.rs
// Description: Cascading select/deselect over a menu tree
// ============================================================================
//! Editing session state for one role or staff member.
//!
//! Selecting a menu grants it, its whole subtree and every ancestor up to
//! the root. Deselecting a menu revokes it and its whole subtree; ancestors
//! keep their grant. Toggling the same menu twice in a row restores the
//! exact grant set held before the first toggle.

use std::sync::Arc;

use menu_acl_shared::MenuId;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GrantSet, MenuTree};

/// Checkbox state of a menu given the current grant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionState {
    /// The menu and its whole subtree are granted.
    Granted,
    /// Something in the subtree is granted, but not all of it.
    Partial,
    NotGranted,
}

impl SelectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionState::Granted => "granted",
            SelectionState::Partial => "partial",
            SelectionState::NotGranted => "not_granted",
        }
    }
}

/// Membership changes made by the most recent toggle.
#[derive(Debug, Clone)]
struct ToggleRecord {
    menu_id: MenuId,
    added: Vec<MenuId>,
    removed: Vec<MenuId>,
}

/// Grant set of one editing session over a shared [`MenuTree`].
///
/// Keeps no history beyond the immediately preceding toggle, which is
/// remembered only so that repeating it undoes it exactly.
#[derive(Debug, Clone)]
pub struct GrantSetEditor {
    tree: Arc<MenuTree>,
    granted: GrantSet,
    last_toggle: Option<ToggleRecord>,
}

impl GrantSetEditor {
    pub fn new(tree: Arc<MenuTree>) -> Self {
        Self {
            tree,
            granted: GrantSet::new(),
            last_toggle: None,
        }
    }

    pub fn with_granted(tree: Arc<MenuTree>, granted_ids: impl IntoIterator<Item = MenuId>) -> Self {
        let mut editor = Self::new(tree);
        editor.initialize(granted_ids);
        editor
    }

    /// Replace the grant set wholesale. Ids missing from the tree are kept
    /// as they are and exported again unchanged.
    pub fn initialize(&mut self, granted_ids: impl IntoIterator<Item = MenuId>) {
        self.granted = granted_ids.into_iter().collect();
        self.last_toggle = None;
    }

    pub fn toggle(&mut self, menu_id: MenuId) -> &GrantSet {
        if !self.tree.contains(menu_id) {
            debug!("Ignoring toggle of unknown menu {}", menu_id);
            return &self.granted;
        }

        let record = match self.last_toggle.take() {
            Some(previous) if previous.menu_id == menu_id => {
                self.revert(previous);
                return &self.granted;
            }
            _ if self.granted.contains(menu_id) => self.deselect(menu_id),
            _ => self.select(menu_id),
        };

        debug!(
            "Toggled menu {}: {} added, {} removed",
            menu_id,
            record.added.len(),
            record.removed.len()
        );
        self.last_toggle = Some(record);
        &self.granted
    }

    pub fn granted(&self) -> &GrantSet {
        &self.granted
    }

    pub fn is_granted(&self, menu_id: MenuId) -> bool {
        self.granted.contains(menu_id)
    }

    /// Complete desired grant set, ready to replace the stored one.
    pub fn export_granted(&self) -> Vec<MenuId> {
        self.granted.to_vec()
    }

    pub fn selection_state(&self, menu_id: MenuId) -> SelectionState {
        let Some(node) = self.tree.get(menu_id) else {
            return SelectionState::NotGranted;
        };

        let granted = std::iter::once(node)
            .chain(node.descendants())
            .filter(|n| self.granted.contains(n.id()))
            .count();

        match granted {
            0 => SelectionState::NotGranted,
            n if n == node.subtree_len() => SelectionState::Granted,
            _ => SelectionState::Partial,
        }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    fn select(&mut self, menu_id: MenuId) -> ToggleRecord {
        let mut added = Vec::new();
        if let Some(node) = self.tree.get(menu_id) {
            let cascade = std::iter::once(node)
                .chain(node.descendants())
                .chain(node.ancestors());
            for id in cascade.map(|n| n.id()) {
                if self.granted.insert(id) {
                    added.push(id);
                }
            }
        }
        ToggleRecord { menu_id, added, removed: Vec::new() }
    }

    fn deselect(&mut self, menu_id: MenuId) -> ToggleRecord {
        let mut removed = Vec::new();
        if let Some(node) = self.tree.get(menu_id) {
            for id in std::iter::once(node).chain(node.descendants()).map(|n| n.id()) {
                if self.granted.remove(id) {
                    removed.push(id);
                }
            }
        }
        ToggleRecord { menu_id, added: Vec::new(), removed }
    }

    fn revert(&mut self, record: ToggleRecord) {
        for id in record.added {
            self.granted.remove(id);
        }
        for id in record.removed {
            self.granted.insert(id);
        }
        debug!("Reverted toggle of menu {}", record.menu_id);
    }
}
