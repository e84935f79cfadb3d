// ============================================================================
// Menu ACL Core - Menu Tree
// File: crates/menu-acl-core/src/domain/menu_tree.rs
// Description: Arena-backed menu forest indexed by pre-order position
// ============================================================================

use std::collections::HashMap;
use std::fmt;

use menu_acl_shared::MenuId;
use serde::Serialize;

use super::MenuNode;

/// Read-only menu forest built once per editing session by
/// [`MenuTreeBuilder`](super::MenuTreeBuilder).
///
/// Nodes live in a flat arena addressed by slot. Parent links are slots, not
/// owning pointers. Every subtree is a contiguous run of the pre-order walk,
/// so a node's descendants are a slice and its ancestors a parent-link walk.
/// All indexes are linear in the catalog size.
#[derive(Debug, Clone)]
pub struct MenuTree {
    pub(crate) nodes: Vec<MenuNode>,
    pub(crate) slots: HashMap<MenuId, usize>,
    pub(crate) parents: Vec<Option<usize>>,
    pub(crate) children: Vec<Vec<usize>>,
    pub(crate) roots: Vec<usize>,
    pub(crate) preorder: Vec<usize>,
    /// Index of each slot in `preorder`.
    pub(crate) positions: Vec<usize>,
    pub(crate) depths: Vec<usize>,
    /// Node count of the subtree rooted at each slot, itself included.
    pub(crate) subtree_sizes: Vec<usize>,
}

impl MenuTree {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: MenuId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn get(&self, id: MenuId) -> Option<TreeNode<'_>> {
        self.slots.get(&id).map(|&slot| self.node(slot))
    }

    pub fn roots(&self) -> impl Iterator<Item = TreeNode<'_>> + '_ {
        self.roots.iter().map(move |&slot| self.node(slot))
    }

    /// Depth-first walk in display order.
    pub fn iter(&self) -> impl Iterator<Item = TreeNode<'_>> + '_ {
        self.preorder.iter().map(move |&slot| self.node(slot))
    }

    /// Nested, serializable copy of the forest for the UI layer.
    pub fn to_branches(&self) -> Vec<MenuBranch> {
        self.roots().map(MenuBranch::from).collect()
    }

    fn node(&self, slot: usize) -> TreeNode<'_> {
        TreeNode { tree: self, slot }
    }
}

/// Borrowed view of one node of a [`MenuTree`].
#[derive(Clone, Copy)]
pub struct TreeNode<'a> {
    tree: &'a MenuTree,
    slot: usize,
}

impl<'a> TreeNode<'a> {
    pub fn menu(&self) -> &'a MenuNode {
        &self.tree.nodes[self.slot]
    }

    pub fn id(&self) -> MenuId {
        self.menu().id
    }

    /// Resolved parent. `None` for declared roots and for nodes demoted to
    /// root because their parent was dangling or cyclic.
    pub fn parent(&self) -> Option<TreeNode<'a>> {
        self.tree.parents[self.slot].map(|slot| self.tree.node(slot))
    }

    pub fn is_root(&self) -> bool {
        self.tree.parents[self.slot].is_none()
    }

    pub fn depth(&self) -> usize {
        self.tree.depths[self.slot]
    }

    pub fn children(&self) -> impl Iterator<Item = TreeNode<'a>> + 'a {
        let tree = self.tree;
        tree.children[self.slot].iter().map(move |&slot| tree.node(slot))
    }

    /// Nearest parent first, root last.
    pub fn ancestors(&self) -> impl Iterator<Item = TreeNode<'a>> + 'a {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// Whole subtree below this node in pre-order, the node itself excluded.
    pub fn descendants(&self) -> impl Iterator<Item = TreeNode<'a>> + 'a {
        let tree = self.tree;
        let start = tree.positions[self.slot] + 1;
        let end = tree.positions[self.slot] + tree.subtree_sizes[self.slot];
        tree.preorder[start..end].iter().map(move |&slot| tree.node(slot))
    }

    pub fn subtree_len(&self) -> usize {
        self.tree.subtree_sizes[self.slot]
    }
}

impl PartialEq for TreeNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.slot == other.slot
    }
}

impl Eq for TreeNode<'_> {}

impl fmt::Debug for TreeNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("id", &self.id())
            .field("parent", &self.parent().map(|p| p.id()))
            .finish()
    }
}

/// Owned nested menu, serialized as the menu fields plus `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuBranch {
    #[serde(flatten)]
    pub menu: MenuNode,
    pub children: Vec<MenuBranch>,
}

impl From<TreeNode<'_>> for MenuBranch {
    fn from(node: TreeNode<'_>) -> Self {
        Self {
            menu: node.menu().clone(),
            children: node.children().map(MenuBranch::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuTreeBuilder;

    fn menu(id: MenuId, parent_id: Option<MenuId>, sort_order: i32) -> MenuNode {
        MenuNode::new(id, format!("Menu {}", id), parent_id, sort_order, None).unwrap()
    }

    fn sample_tree() -> MenuTree {
        // 1 ─ 2 ─ 4
        //   └ 3
        // 5
        MenuTreeBuilder::build(vec![
            menu(4, Some(2), 0),
            menu(3, Some(1), 1),
            menu(5, None, 1),
            menu(2, Some(1), 0),
            menu(1, None, 0),
        ])
        .unwrap()
    }

    #[test]
    fn test_navigation() {
        let tree = sample_tree();
        let node = tree.get(4).unwrap();

        assert_eq!(node.parent().map(|p| p.id()), Some(2));
        assert_eq!(node.depth(), 2);
        assert_eq!(node.ancestors().map(|a| a.id()).collect::<Vec<_>>(), vec![2, 1]);

        let root = tree.get(1).unwrap();
        assert!(root.is_root());
        assert_eq!(root.children().map(|c| c.id()).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(root.descendants().map(|d| d.id()).collect::<Vec<_>>(), vec![2, 4, 3]);
        assert_eq!(root.subtree_len(), 4);
        assert!(tree.get(99).is_none());
    }

    #[test]
    fn test_preorder_iteration() {
        let tree = sample_tree();
        let ids: Vec<_> = tree.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec![1, 2, 4, 3, 5]);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_branches_serialize_nested() {
        let tree = sample_tree();
        let branches = tree.to_branches();
        assert_eq!(branches.len(), 2);
        assert_eq!(branches[0].children[0].children[0].menu.id, 4);

        let json = serde_json::to_value(&branches).unwrap();
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["children"][1]["sortOrder"], 1);
        assert_eq!(json[1]["children"].as_array().map(Vec::len), Some(0));
    }
}
