//! # Menu ACL Core - Domain Module
//! 
//! Domain entities for menu permission editing.

pub mod menu_node;
pub mod menu_tree;
pub mod tree_builder;
pub mod grant_set;
pub mod grant_editor;
pub mod grant_target;

// Re-export all entities and enums
pub use menu_node::MenuNode;
pub use menu_tree::{MenuBranch, MenuTree, TreeNode};
pub use tree_builder::MenuTreeBuilder;
pub use grant_set::GrantSet;
pub use grant_editor::{GrantSetEditor, SelectionState};
pub use grant_target::GrantTarget;
