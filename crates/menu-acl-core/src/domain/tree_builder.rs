// ============================================================================
// Menu ACL Core - Menu Tree Builder
// File: crates/menu-acl-core/src/domain/tree_builder.rs
// Description: Flat catalog to sorted forest, repairing broken parent links
// ============================================================================
//! Turns the flat menu catalog into a [`MenuTree`].
//!
//! Catalog data comes from the Permission Store and is not trusted: a parent
//! id that matches nothing, or a parent chain that loops back on itself, is
//! repaired by making the node a root. Nodes are never dropped. Duplicate ids
//! are the only input that is refused.

use std::collections::HashMap;

use menu_acl_shared::MenuId;
use tracing::{debug, error, warn};

use super::{MenuNode, MenuTree};
use crate::error::DomainError;

pub struct MenuTreeBuilder;

impl MenuTreeBuilder {
    pub fn build(catalog: Vec<MenuNode>) -> Result<MenuTree, DomainError> {
        let slots = index_catalog(&catalog)?;

        let mut parents: Vec<Option<usize>> = catalog
            .iter()
            .map(|menu| resolve_parent(menu, &slots))
            .collect();

        for slot in cycle_members(&parents) {
            warn!(
                "Menu {} is part of a parent cycle, placing it at root",
                catalog[slot].id
            );
            parents[slot] = None;
        }

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); catalog.len()];
        let mut roots = Vec::new();
        for (slot, parent) in parents.iter().enumerate() {
            match parent {
                Some(parent) => children[*parent].push(slot),
                None => roots.push(slot),
            }
        }

        let sort_key = |slot: &usize| catalog[*slot].sort_key();
        roots.sort_by_key(sort_key);
        for siblings in children.iter_mut() {
            siblings.sort_by_key(sort_key);
        }

        let preorder = preorder(&roots, &children);
        debug_assert_eq!(preorder.len(), catalog.len());

        let mut positions = vec![0; catalog.len()];
        let mut depths = vec![0; catalog.len()];
        for (pos, &slot) in preorder.iter().enumerate() {
            positions[slot] = pos;
            if let Some(parent) = parents[slot] {
                depths[slot] = depths[parent] + 1;
            }
        }

        let mut subtree_sizes = vec![1; catalog.len()];
        for &slot in preorder.iter().rev() {
            if let Some(parent) = parents[slot] {
                subtree_sizes[parent] += subtree_sizes[slot];
            }
        }

        debug!(
            "Built menu tree: {} menus, {} roots",
            catalog.len(),
            roots.len()
        );

        Ok(MenuTree {
            nodes: catalog,
            slots,
            parents,
            children,
            roots,
            preorder,
            positions,
            depths,
            subtree_sizes,
        })
    }
}

fn index_catalog(catalog: &[MenuNode]) -> Result<HashMap<MenuId, usize>, DomainError> {
    let mut slots = HashMap::with_capacity(catalog.len());
    for (slot, menu) in catalog.iter().enumerate() {
        if slots.insert(menu.id, slot).is_some() {
            error!("Menu catalog contains duplicate id {}", menu.id);
            return Err(DomainError::DuplicateMenuId(menu.id));
        }
    }
    Ok(slots)
}

fn resolve_parent(menu: &MenuNode, slots: &HashMap<MenuId, usize>) -> Option<usize> {
    let parent_id = menu.parent_id?;
    let parent = slots.get(&parent_id).copied();
    if parent.is_none() {
        warn!(
            "Menu {} references missing parent {}, placing it at root",
            menu.id, parent_id
        );
    }
    parent
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Slots lying on a cycle of the parent relation, self-parents included.
/// Each slot is visited once.
fn cycle_members(parents: &[Option<usize>]) -> Vec<usize> {
    let mut marks = vec![Mark::Unvisited; parents.len()];
    let mut members = Vec::new();
    let mut path = Vec::new();

    for start in 0..parents.len() {
        if marks[start] != Mark::Unvisited {
            continue;
        }

        path.clear();
        let mut cursor = Some(start);
        while let Some(slot) = cursor {
            match marks[slot] {
                Mark::Unvisited => {
                    marks[slot] = Mark::OnPath;
                    path.push(slot);
                    cursor = parents[slot];
                }
                Mark::OnPath => {
                    if let Some(pos) = path.iter().position(|&s| s == slot) {
                        members.extend_from_slice(&path[pos..]);
                    }
                    break;
                }
                Mark::Done => break,
            }
        }

        for &slot in &path {
            marks[slot] = Mark::Done;
        }
    }

    members
}

fn preorder(roots: &[usize], children: &[Vec<usize>]) -> Vec<usize> {
    let mut order = Vec::with_capacity(children.len());
    let mut stack: Vec<usize> = roots.iter().rev().copied().collect();
    while let Some(slot) = stack.pop() {
        order.push(slot);
        stack.extend(children[slot].iter().rev());
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(id: MenuId, parent_id: Option<MenuId>, sort_order: i32) -> MenuNode {
        MenuNode::new(id, format!("Menu {}", id), parent_id, sort_order, None).unwrap()
    }

    fn root_ids(tree: &MenuTree) -> Vec<MenuId> {
        tree.roots().map(|n| n.id()).collect()
    }

    fn child_ids(tree: &MenuTree, id: MenuId) -> Vec<MenuId> {
        tree.get(id).unwrap().children().map(|n| n.id()).collect()
    }

    #[test]
    fn test_empty_catalog() {
        let tree = MenuTreeBuilder::build(Vec::new()).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.roots().count(), 0);
    }

    #[test]
    fn test_siblings_sorted_by_order_then_id() {
        let tree = MenuTreeBuilder::build(vec![
            menu(10, None, 0),
            menu(14, Some(10), 2),
            menu(13, Some(10), 1),
            menu(12, Some(10), 1),
            menu(11, Some(10), 5),
            menu(2, None, 3),
            menu(1, None, 3),
        ])
        .unwrap();

        assert_eq!(root_ids(&tree), vec![10, 1, 2]);
        assert_eq!(child_ids(&tree, 10), vec![12, 13, 14, 11]);
    }

    #[test]
    fn test_dangling_parent_becomes_root() {
        let tree = MenuTreeBuilder::build(vec![menu(1, None, 0), menu(2, Some(42), 0)]).unwrap();

        let orphan = tree.get(2).unwrap();
        assert!(orphan.is_root());
        assert!(orphan.parent().is_none());
        assert_eq!(root_ids(&tree), vec![1, 2]);
    }

    #[test]
    fn test_two_node_cycle_keeps_both() {
        let tree = MenuTreeBuilder::build(vec![menu(1, Some(2), 0), menu(2, Some(1), 0)]).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(root_ids(&tree), vec![1, 2]);
        assert_eq!(tree.iter().count(), 2);
    }

    #[test]
    fn test_self_parent_becomes_root() {
        let tree = MenuTreeBuilder::build(vec![menu(7, Some(7), 0)]).unwrap();
        assert!(tree.get(7).unwrap().is_root());
    }

    #[test]
    fn test_tail_below_cycle_keeps_parent() {
        // 1 -> 2 -> 3 -> 1 is a cycle, 4 hangs off 2, 5 off 4
        let tree = MenuTreeBuilder::build(vec![
            menu(1, Some(3), 0),
            menu(2, Some(1), 0),
            menu(3, Some(2), 0),
            menu(4, Some(2), 0),
            menu(5, Some(4), 0),
        ])
        .unwrap();

        assert_eq!(root_ids(&tree), vec![1, 2, 3]);
        assert_eq!(child_ids(&tree, 2), vec![4]);
        assert_eq!(tree.get(5).unwrap().ancestors().map(|n| n.id()).collect::<Vec<_>>(), vec![4, 2]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = MenuTreeBuilder::build(vec![menu(1, None, 0), menu(2, None, 0), menu(1, None, 1)]);
        assert!(matches!(result, Err(DomainError::DuplicateMenuId(1))));
    }

    #[test]
    fn test_every_menu_placed_once() {
        let catalog = vec![
            menu(1, None, 0),
            menu(2, Some(1), 0),
            menu(3, Some(2), 0),
            menu(4, Some(99), 0),
            menu(5, Some(6), 0),
            menu(6, Some(5), 0),
            menu(7, Some(7), 0),
        ];
        let tree = MenuTreeBuilder::build(catalog.clone()).unwrap();

        let mut placed: Vec<MenuId> = tree.iter().map(|n| n.id()).collect();
        placed.sort();
        assert_eq!(placed, vec![1, 2, 3, 4, 5, 6, 7]);

        let from_roots: usize = tree.roots().map(|r| r.subtree_len()).sum();
        assert_eq!(from_roots, catalog.len());
    }

    #[test]
    fn test_build_is_deterministic() {
        let catalog = vec![
            menu(3, None, 1),
            menu(1, None, 1),
            menu(2, Some(1), 0),
            menu(4, Some(1), 0),
        ];
        let first: Vec<MenuId> = MenuTreeBuilder::build(catalog.clone()).unwrap().iter().map(|n| n.id()).collect();
        let mut reversed = catalog;
        reversed.reverse();
        let second: Vec<MenuId> = MenuTreeBuilder::build(reversed).unwrap().iter().map(|n| n.id()).collect();

        assert_eq!(first, vec![1, 2, 4, 3]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_deep_chain() {
        let depth: MenuId = 10_000;
        let catalog: Vec<MenuNode> = (0..depth)
            .map(|id| menu(id, if id == 0 { None } else { Some(id - 1) }, 0))
            .collect();
        let tree = MenuTreeBuilder::build(catalog).unwrap();

        assert_eq!(root_ids(&tree), vec![0]);
        assert_eq!(tree.get(0).unwrap().subtree_len(), depth as usize);
        assert_eq!(tree.positions.len(), depth as usize);
        assert_eq!(tree.subtree_sizes.len(), depth as usize);

        let leaf = tree.get(depth - 1).unwrap();
        assert_eq!(leaf.depth(), depth as usize - 1);
        assert_eq!(leaf.ancestors().count(), depth as usize - 1);
        assert_eq!(leaf.ancestors().last().map(|n| n.id()), Some(0));

        let middle = tree.get(5_000).unwrap();
        assert_eq!(middle.descendants().count(), 4_999);
        assert_eq!(middle.descendants().next().map(|n| n.id()), Some(5_001));
    }
}
