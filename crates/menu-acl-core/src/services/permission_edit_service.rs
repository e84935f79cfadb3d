// ============================================================================
// Menu ACL Core - Permission Edit Service
// File: crates/menu-acl-core/src/services/permission_edit_service.rs
// ============================================================================
//! Opens and commits grant editing sessions against a Permission Store.

use std::sync::Arc;

use menu_acl_shared::config::EditorSettings;
use menu_acl_shared::MenuId;
use tracing::{info, warn};

use crate::domain::{GrantSetEditor, GrantTarget, MenuTree, MenuTreeBuilder};
use crate::error::DomainError;
use crate::repositories::PermissionStore;

/// Shared entry point for the role, business-role and staff permission pages
pub struct PermissionEditService<S: PermissionStore> {
    store: Arc<S>,
    settings: EditorSettings,
}

impl<S: PermissionStore> PermissionEditService<S> {
    pub fn new(store: Arc<S>, settings: EditorSettings) -> Self {
        Self { store, settings }
    }

    /// Load the catalog and current grants for `target` and start a session
    pub async fn open(&self, target: GrantTarget) -> Result<EditSession, DomainError> {
        // 1. Load the catalog
        let catalog = self.store.fetch_catalog(target).await?;
        if catalog.len() > self.settings.max_catalog_size {
            warn!(
                "Refusing catalog for {}: {} menus exceeds limit {}",
                target,
                catalog.len(),
                self.settings.max_catalog_size
            );
            return Err(DomainError::CatalogTooLarge {
                size: catalog.len(),
                limit: self.settings.max_catalog_size,
            });
        }

        // 2. Build the tree
        let tree = Arc::new(MenuTreeBuilder::build(catalog)?);

        // 3. Seed the editor with the stored grants
        let granted = self.store.fetch_granted(target).await?;
        let stale = granted.iter().filter(|id| !tree.contains(**id)).count();
        if stale > 0 {
            warn!("{} granted menus of {} are not in the catalog", stale, target);
        }

        let editor = GrantSetEditor::with_granted(tree, granted);

        info!(
            "Opened permission session for {}: {} menus, {} granted",
            target,
            editor.tree().len(),
            editor.granted().len()
        );

        Ok(EditSession { target, editor })
    }

    /// Persist the session's grant set, replacing what the store holds
    pub async fn commit(&self, session: EditSession) -> Result<Vec<MenuId>, DomainError> {
        let menu_ids = session.editor.export_granted();
        self.store.replace_granted(session.target, &menu_ids).await?;

        info!(
            "Committed {} granted menus for {}",
            menu_ids.len(),
            session.target
        );
        Ok(menu_ids)
    }
}

/// One open editor. Dropping it without committing discards the edits.
#[derive(Debug)]
pub struct EditSession {
    target: GrantTarget,
    editor: GrantSetEditor,
}

impl EditSession {
    pub fn target(&self) -> GrantTarget {
        self.target
    }

    pub fn editor(&self) -> &GrantSetEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut GrantSetEditor {
        &mut self.editor
    }

    pub fn tree(&self) -> &MenuTree {
        self.editor.tree()
    }
}
