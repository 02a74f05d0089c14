//! Flattening the forest into renderable rows.
//!
//! Walks only expanded nodes, pre-computing the tree-line prefix and the
//! display fields for each row so rendering is a straight pass over the
//! result.

use super::DragRules;
use crate::tree::{NodePath, TreeNode};

/// A flattened row ready for rendering
#[derive(Debug, Clone)]
pub struct VisibleRow {
    /// Path to the node this row shows
    pub path: NodePath,
    /// Pre-built tree-line prefix ("│  ├" etc.; empty for root rows)
    pub prefix: String,
    pub title: String,
    pub subtitle: Option<String>,
    /// Does this node have children to expand?
    pub is_expandable: bool,
    pub is_expanded: bool,
    /// Result of the controller's can_drag predicate for this node
    pub draggable: bool,
    /// Row index in the flattened list (zebra striping, diagnostics)
    pub row_index: usize,
}

/// Flatten the visible part of the forest into a row list.
///
/// Children of collapsed nodes are skipped entirely; every emitted row
/// carries its document-order index among visible rows.
pub fn flatten_visible(forest: &[TreeNode], rules: &DragRules) -> Vec<VisibleRow> {
    let mut rows = Vec::new();
    let count = forest.len();

    for (index, node) in forest.iter().enumerate() {
        let is_last = index == count - 1;
        flatten_node(node, vec![index], "", is_last, true, rules, &mut rows);
    }

    rows
}

/// Recursively flatten a single node and its visible children
fn flatten_node(
    node: &TreeNode,
    path: NodePath,
    prefix: &str,
    is_last: bool,
    is_root: bool,
    rules: &DragRules,
    rows: &mut Vec<VisibleRow>,
) {
    // Prefix ends at the branch point (├ or └); the dash or expand icon
    // is added during rendering for proper alignment
    let (current_prefix, child_prefix) = if is_root {
        (String::new(), String::new())
    } else {
        let connector = if is_last { "└" } else { "├" };
        let current = format!("{}{}", prefix, connector);
        let child = if is_last {
            format!("{}   ", prefix)
        } else {
            format!("{}│  ", prefix)
        };
        (current, child)
    };

    rows.push(VisibleRow {
        path: path.clone(),
        prefix: current_prefix,
        title: node.title.clone(),
        subtitle: node.subtitle.clone(),
        is_expandable: node.is_expandable(),
        is_expanded: node.expanded,
        draggable: (rules.can_drag)(node),
        row_index: rows.len(),
    });

    // Recurse into children if expanded
    if node.expanded {
        let count = node.children.len();
        for (index, child) in node.children.iter().enumerate() {
            let mut child_path = path.clone();
            child_path.push(index);
            let is_last_child = index == count - 1;
            flatten_node(
                child,
                child_path,
                &child_prefix,
                is_last_child,
                false,
                rules,
                rows,
            );
        }
    }
}

/// Position of a path among the visible rows, if it is visible at all
pub fn row_position(rows: &[VisibleRow], path: &[usize]) -> Option<usize> {
    rows.iter().position(|row| row.path == path)
}
