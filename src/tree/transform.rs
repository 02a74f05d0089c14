//! Pure whole-tree transformations.
//!
//! The controller never mutates the forest in place: every structural
//! change goes through one of these functions, each of which leaves its
//! input untouched and returns a freshly built forest. Functions taking a
//! path return `None` when the path no longer resolves, so a stale row
//! action degrades into a no-op instead of a fault.

use super::node::TreeNode;

/// Set every node's expansion flag uniformly, returning the new forest
pub fn toggle_expanded_for_all(forest: &[TreeNode], expanded: bool) -> Vec<TreeNode> {
    forest
        .iter()
        .map(|node| {
            let mut out = node.clone();
            out.expanded = expanded;
            out.children = toggle_expanded_for_all(&node.children, expanded);
            out
        })
        .collect()
}

/// Resolve a path to the node it points at
pub fn node_at_path<'a>(forest: &'a [TreeNode], path: &[usize]) -> Option<&'a TreeNode> {
    let (&first, rest) = path.split_first()?;
    let node = forest.get(first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        node_at_path(&node.children, rest)
    }
}

/// Insert a new child under the node at `parent`, expanding that parent.
///
/// `as_first` picks between prepending and appending to the existing
/// children. Returns `None` when the parent no longer resolves.
pub fn add_node_under_parent(
    forest: &[TreeNode],
    parent: &[usize],
    child: TreeNode,
    as_first: bool,
) -> Option<Vec<TreeNode>> {
    let (&first, rest) = parent.split_first()?;
    let mut out = forest.to_vec();
    let slot = out.get_mut(first)?;

    if rest.is_empty() {
        slot.expanded = true;
        if as_first {
            slot.children.insert(0, child);
        } else {
            slot.children.push(child);
        }
    } else {
        slot.children = add_node_under_parent(&slot.children, rest, child, as_first)?;
    }

    Some(out)
}

/// Insert a node at an exact position among a parent's children.
///
/// An empty `parent` path inserts at the root level. The index is clamped
/// to the child count, so "insert after the last sibling" is always valid.
pub fn insert_node_at(
    forest: &[TreeNode],
    parent: &[usize],
    index: usize,
    child: TreeNode,
) -> Option<Vec<TreeNode>> {
    let mut out = forest.to_vec();

    match parent.split_first() {
        None => {
            let index = index.min(out.len());
            out.insert(index, child);
        }
        Some((&first, rest)) => {
            let slot = out.get_mut(first)?;
            if rest.is_empty() {
                let index = index.min(slot.children.len());
                slot.expanded = true;
                slot.children.insert(index, child);
            } else {
                slot.children = insert_node_at(&slot.children, rest, index, child)?;
            }
        }
    }

    Some(out)
}

/// Remove the node at `path` together with its whole subtree.
///
/// Siblings keep their original order. Returns `None` when the path no
/// longer resolves.
pub fn remove_node_at_path(forest: &[TreeNode], path: &[usize]) -> Option<Vec<TreeNode>> {
    let (&first, rest) = path.split_first()?;
    let mut out = forest.to_vec();

    if rest.is_empty() {
        if first >= out.len() {
            return None;
        }
        out.remove(first);
    } else {
        let slot = out.get_mut(first)?;
        slot.children = remove_node_at_path(&slot.children, rest)?;
    }

    Some(out)
}

/// Set the expansion flag of the single node at `path`
pub fn set_expanded_at(
    forest: &[TreeNode],
    path: &[usize],
    expanded: bool,
) -> Option<Vec<TreeNode>> {
    let (&first, rest) = path.split_first()?;
    let mut out = forest.to_vec();
    let slot = out.get_mut(first)?;

    if rest.is_empty() {
        slot.expanded = expanded;
    } else {
        slot.children = set_expanded_at(&slot.children, rest, expanded)?;
    }

    Some(out)
}

/// Expand every ancestor of the node at `path` so the node is visible.
///
/// The node itself keeps its own expansion state. Unresolvable paths
/// expand whatever prefix still exists.
pub fn expand_along_path(forest: &[TreeNode], path: &[usize]) -> Vec<TreeNode> {
    let mut out = forest.to_vec();
    if let Some((&first, rest)) = path.split_first()
        && let Some(slot) = out.get_mut(first)
        && !rest.is_empty()
    {
        slot.expanded = true;
        slot.children = expand_along_path(&slot.children, rest);
    }
    out
}

/// Total number of nodes in the forest, visible or not
pub fn node_count(forest: &[TreeNode]) -> usize {
    forest
        .iter()
        .map(|node| 1 + node_count(&node.children))
        .sum()
}

/// Depth of the deepest node in the forest (root rows are depth 1)
pub fn deepest_level(forest: &[TreeNode]) -> usize {
    forest
        .iter()
        .map(TreeNode::subtree_levels)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two roots; the first has children [A, B] and A has one child
    fn sample_forest() -> Vec<TreeNode> {
        vec![
            TreeNode {
                expanded: true,
                children: vec![
                    TreeNode {
                        children: vec![TreeNode::new("A1")],
                        ..TreeNode::new("A")
                    },
                    TreeNode::new("B"),
                ],
                ..TreeNode::new("first")
            },
            TreeNode::new("second"),
        ]
    }

    #[test]
    fn test_toggle_expanded_for_all_is_uniform_and_pure() {
        let forest = sample_forest();
        let expanded = toggle_expanded_for_all(&forest, true);

        assert!(expanded[0].expanded);
        assert!(expanded[0].children[0].expanded);
        assert!(expanded[0].children[0].children[0].expanded);
        assert!(expanded[1].expanded);
        // The input forest is untouched
        assert!(!forest[0].children[0].expanded);

        let collapsed = toggle_expanded_for_all(&expanded, false);
        assert!(!collapsed[0].expanded);
        assert!(!collapsed[0].children[0].expanded);
    }

    #[test]
    fn test_node_at_path_resolves_nested_nodes() {
        let forest = sample_forest();

        assert_eq!(node_at_path(&forest, &[0]).unwrap().title, "first");
        assert_eq!(node_at_path(&forest, &[0, 1]).unwrap().title, "B");
        assert_eq!(node_at_path(&forest, &[0, 0, 0]).unwrap().title, "A1");
        assert!(node_at_path(&forest, &[]).is_none());
        assert!(node_at_path(&forest, &[2]).is_none());
        assert!(node_at_path(&forest, &[0, 5]).is_none());
        assert!(node_at_path(&forest, &[1, 0]).is_none());
    }

    #[test]
    fn test_add_node_appends_as_last_child_and_expands_parent() {
        let forest = sample_forest();
        let collapsed_parent = &forest[0].children[0];
        assert!(!collapsed_parent.expanded);

        let out = add_node_under_parent(&forest, &[0, 0], TreeNode::new("A2"), false).unwrap();

        let parent = node_at_path(&out, &[0, 0]).unwrap();
        assert!(parent.expanded);
        let titles: Vec<&str> = parent.children.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["A1", "A2"]);
        // Pure: the original still has one child
        assert_eq!(forest[0].children[0].children.len(), 1);
    }

    #[test]
    fn test_add_node_as_first_child() {
        let forest = sample_forest();
        let out = add_node_under_parent(&forest, &[0], TreeNode::new("new"), true).unwrap();

        let titles: Vec<&str> = out[0].children.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["new", "A", "B"]);
    }

    #[test]
    fn test_add_node_under_missing_parent_is_none() {
        let forest = sample_forest();
        assert!(add_node_under_parent(&forest, &[7], TreeNode::new("x"), false).is_none());
        assert!(add_node_under_parent(&forest, &[0, 9], TreeNode::new("x"), false).is_none());
        assert!(add_node_under_parent(&forest, &[], TreeNode::new("x"), false).is_none());
    }

    #[test]
    fn test_insert_node_at_root_level_and_nested() {
        let forest = sample_forest();

        let out = insert_node_at(&forest, &[], 1, TreeNode::new("between")).unwrap();
        let titles: Vec<&str> = out.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["first", "between", "second"]);

        let out = insert_node_at(&forest, &[0], 1, TreeNode::new("mid")).unwrap();
        let titles: Vec<&str> = out[0].children.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["A", "mid", "B"]);

        // Index past the end clamps to an append
        let out = insert_node_at(&forest, &[0], 99, TreeNode::new("tail")).unwrap();
        assert_eq!(out[0].children.last().unwrap().title, "tail");
    }

    #[test]
    fn test_remove_node_drops_subtree_and_keeps_sibling_order() {
        let forest = sample_forest();
        let out = remove_node_at_path(&forest, &[0, 0]).unwrap();

        let first = &out[0];
        assert_eq!(first.children.len(), 1);
        assert_eq!(first.children[0].title, "B");
        // A's own child went with it
        assert_eq!(node_count(&out), node_count(&forest) - 2);
    }

    #[test]
    fn test_remove_node_with_stale_path_is_none() {
        let forest = sample_forest();
        assert!(remove_node_at_path(&forest, &[4]).is_none());
        assert!(remove_node_at_path(&forest, &[1, 0]).is_none());
        assert!(remove_node_at_path(&forest, &[]).is_none());
    }

    #[test]
    fn test_set_expanded_at_touches_only_the_target() {
        let forest = sample_forest();
        let out = set_expanded_at(&forest, &[0, 0], true).unwrap();

        assert!(out[0].children[0].expanded);
        assert!(!out[0].children[1].expanded);
        assert!(set_expanded_at(&forest, &[3], true).is_none());
    }

    #[test]
    fn test_expand_along_path_reveals_ancestors_only() {
        let forest = toggle_expanded_for_all(&sample_forest(), false);
        let out = expand_along_path(&forest, &[0, 0, 0]);

        assert!(out[0].expanded);
        assert!(out[0].children[0].expanded);
        // The target itself keeps its own state
        assert!(!out[0].children[0].children[0].expanded);
        // Unrelated branches stay collapsed
        assert!(!out[1].expanded);
    }

    #[test]
    fn test_node_count_and_deepest_level() {
        let forest = sample_forest();
        assert_eq!(node_count(&forest), 5);
        assert_eq!(deepest_level(&forest), 3);
        assert_eq!(node_count(&[]), 0);
        assert_eq!(deepest_level(&[]), 0);
    }
}
