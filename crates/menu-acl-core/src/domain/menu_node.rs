// ============================================================================
// Menu ACL Core - Menu Node Entity
// File: crates/menu-acl-core/src/domain/menu_node.rs
// Description: Flat menu catalog record
// ============================================================================

use menu_acl_shared::MenuId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One record of the menu catalog served by the Permission Store.
///
/// Serialized in the store's camelCase shape:
/// `{ id, parentId, name, sortOrder, description }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    pub id: MenuId,

    pub parent_id: Option<MenuId>,

    #[validate(length(min = 1, max = 100, message = "Menu name must be between 1 and 100 characters"))]
    pub name: String,

    pub sort_order: i32,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Menu description too long"))]
    pub description: Option<String>,
}

impl MenuNode {
    pub fn new(
        id: MenuId,
        name: String,
        parent_id: Option<MenuId>,
        sort_order: i32,
        description: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let menu = Self {
            id,
            parent_id,
            name: name.trim().to_string(),
            sort_order,
            description: description.map(|d| d.trim().to_string()),
        };

        menu.validate()?;
        Ok(menu)
    }

    /// Declares no parent. A node with a dangling or cyclic parent is still
    /// placed as a root by the tree builder even though this returns false.
    pub fn is_root_menu(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Sibling ordering key: sort order, then id.
    pub fn sort_key(&self) -> (i32, MenuId) {
        (self.sort_order, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_menu() {
        let menu = MenuNode::new(1, "  Inventory ".to_string(), None, 0, None);
        assert!(menu.is_ok());
        let menu = menu.unwrap();
        assert_eq!(menu.name, "Inventory");
        assert!(menu.is_root_menu());
    }

    #[test]
    fn test_reject_blank_name() {
        let menu = MenuNode::new(1, "   ".to_string(), None, 0, None);
        assert!(menu.is_err());
    }

    #[test]
    fn test_reject_long_description() {
        let menu = MenuNode::new(2, "Items".to_string(), Some(1), 0, Some("x".repeat(1001)));
        assert!(menu.is_err());
    }

    #[test]
    fn test_deserialize_store_shape() {
        let json = r#"{"id":2,"parentId":1,"name":"Items","sortOrder":3,"description":null}"#;
        let menu: MenuNode = serde_json::from_str(json).unwrap();
        assert_eq!(menu.parent_id, Some(1));
        assert_eq!(menu.sort_key(), (3, 2));
        assert!(menu.description.is_none());

        let root: MenuNode =
            serde_json::from_str(r#"{"id":1,"parentId":null,"name":"Inventory","sortOrder":0}"#).unwrap();
        assert!(root.is_root_menu());
    }
}
