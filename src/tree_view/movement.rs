//! Structural move planning.
//!
//! Moves are keyboard-driven here (Alt+arrows) but follow the same rules
//! a pointer drag would: the moved node must be draggable, the receiving
//! parent must accept children, and the moved subtree must stay within
//! the depth limit. Planning is pure: the caller gets back a whole new
//! forest to apply, or the reason the move was refused.

use super::DragRules;
use crate::tree::transform::{insert_node_at, node_at_path, remove_node_at_path};
use crate::tree::{NodePath, TreeNode};

/// Where the selected row should move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Swap with the previous sibling
    Up,
    /// Swap with the next sibling
    Down,
    /// Become the parent's next sibling (one level shallower)
    Promote,
    /// Become the previous sibling's last child (one level deeper)
    Demote,
}

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveBlocked {
    /// The path no longer resolves; the row is stale
    Stale,
    /// can_drag said no
    Locked,
    /// can_drop said no for the prospective parent
    Refused,
    /// The subtree would sink below the depth limit
    TooDeep,
    /// No sibling or level to move to in that direction
    AtEdge,
}

impl MoveBlocked {
    /// Status-bar explanation; stale rows stay silent
    pub fn reason(&self) -> &'static str {
        match self {
            MoveBlocked::Stale => "",
            MoveBlocked::Locked => "This node cannot be moved",
            MoveBlocked::Refused => "That target does not accept children",
            MoveBlocked::TooDeep => "Move would exceed the depth limit",
            MoveBlocked::AtEdge => "No room to move that way",
        }
    }
}

/// A planned move: the replacement forest and the node's new path
#[derive(Debug, Clone)]
pub struct MovePlan {
    pub tree: Vec<TreeNode>,
    pub new_path: NodePath,
}

/// Plan moving the node at `path` one step in `direction`.
///
/// Checks run in fixed order: path resolution, can_drag, the move's
/// geometry, can_drop on the new parent, then the depth limit.
pub fn plan_move(
    forest: &[TreeNode],
    path: &[usize],
    direction: MoveDirection,
    rules: &DragRules,
) -> Result<MovePlan, MoveBlocked> {
    let node = node_at_path(forest, path).ok_or(MoveBlocked::Stale)?;
    if !(rules.can_drag)(node) {
        return Err(MoveBlocked::Locked);
    }

    let last = *path.last().ok_or(MoveBlocked::Stale)?;
    let parent_path = &path[..path.len() - 1];

    // Work out where the node lands: (new parent path, insert index)
    let (new_parent, index): (NodePath, usize) = match direction {
        MoveDirection::Up => {
            if last == 0 {
                return Err(MoveBlocked::AtEdge);
            }
            (parent_path.to_vec(), last - 1)
        }
        MoveDirection::Down => {
            let sibling_count = match parent_path.split_last() {
                None => forest.len(),
                Some(_) => {
                    node_at_path(forest, parent_path)
                        .ok_or(MoveBlocked::Stale)?
                        .children
                        .len()
                }
            };
            if last + 1 >= sibling_count {
                return Err(MoveBlocked::AtEdge);
            }
            (parent_path.to_vec(), last + 1)
        }
        MoveDirection::Promote => {
            // Root rows have no parent to climb past
            let (&parent_index, grandparent) =
                parent_path.split_last().ok_or(MoveBlocked::AtEdge)?;
            (grandparent.to_vec(), parent_index + 1)
        }
        MoveDirection::Demote => {
            if last == 0 {
                return Err(MoveBlocked::AtEdge);
            }
            let mut prev_path = parent_path.to_vec();
            prev_path.push(last - 1);
            let prev = node_at_path(forest, &prev_path).ok_or(MoveBlocked::Stale)?;
            let index = prev.children.len();
            (prev_path, index)
        }
    };

    // The new parent must accept children; None means the root level
    let next_parent = if new_parent.is_empty() {
        None
    } else {
        Some(node_at_path(forest, &new_parent).ok_or(MoveBlocked::Stale)?)
    };
    if !(rules.can_drop)(next_parent) {
        return Err(MoveBlocked::Refused);
    }

    // Deepest descendant must stay within max_depth
    if new_parent.len() + node.subtree_levels() > rules.max_depth {
        return Err(MoveBlocked::TooDeep);
    }

    // Detach, then re-insert. Sibling reorders compute their index
    // against the pre-removal layout, which insert positions match after
    // the shift; promote/demote targets sit outside the removed range.
    let detached = node.clone();
    let removed = remove_node_at_path(forest, path).ok_or(MoveBlocked::Stale)?;
    let tree = insert_node_at(&removed, &new_parent, index, detached).ok_or(MoveBlocked::Stale)?;

    let mut new_path = new_parent;
    new_path.push(index);

    Ok(MovePlan { tree, new_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(max_depth: usize) -> DragRules {
        DragRules {
            max_depth,
            can_drag: |node| !node.no_dragging,
            can_drop: |parent| parent.is_none_or(|p| !p.no_children),
        }
    }

    /// Roadmap[Research, Design(locked), Build[Backend]], Inbox(no drops), Archive
    fn sample_forest() -> Vec<TreeNode> {
        vec![
            TreeNode {
                expanded: true,
                children: vec![
                    TreeNode::new("Research"),
                    TreeNode {
                        no_dragging: true,
                        ..TreeNode::new("Design")
                    },
                    TreeNode {
                        expanded: true,
                        children: vec![TreeNode::new("Backend")],
                        ..TreeNode::new("Build")
                    },
                ],
                ..TreeNode::new("Roadmap")
            },
            TreeNode {
                no_children: true,
                ..TreeNode::new("Inbox")
            },
            TreeNode::new("Archive"),
        ]
    }

    fn titles(forest: &[TreeNode], parent: &[usize]) -> Vec<String> {
        let children = if parent.is_empty() {
            forest
        } else {
            &node_at_path(forest, parent).unwrap().children
        };
        children.iter().map(|c| c.title.clone()).collect()
    }

    #[test]
    fn test_move_down_swaps_with_next_sibling() {
        let forest = sample_forest();
        let plan = plan_move(&forest, &[0, 0], MoveDirection::Down, &rules(5)).unwrap();

        assert_eq!(titles(&plan.tree, &[0]), ["Design", "Research", "Build"]);
        assert_eq!(plan.new_path, vec![0, 1]);
        // Planning is pure
        assert_eq!(titles(&forest, &[0]), ["Research", "Design", "Build"]);
    }

    #[test]
    fn test_move_up_swaps_with_previous_sibling() {
        let forest = sample_forest();
        let plan = plan_move(&forest, &[0, 2], MoveDirection::Up, &rules(5)).unwrap();

        assert_eq!(titles(&plan.tree, &[0]), ["Research", "Build", "Design"]);
        assert_eq!(plan.new_path, vec![0, 1]);
    }

    #[test]
    fn test_move_at_edges_is_refused() {
        let forest = sample_forest();

        let up = plan_move(&forest, &[0, 0], MoveDirection::Up, &rules(5));
        assert_eq!(up.unwrap_err(), MoveBlocked::AtEdge);

        let down = plan_move(&forest, &[2], MoveDirection::Down, &rules(5));
        assert_eq!(down.unwrap_err(), MoveBlocked::AtEdge);

        // Root rows cannot promote further
        let promote = plan_move(&forest, &[1], MoveDirection::Promote, &rules(5));
        assert_eq!(promote.unwrap_err(), MoveBlocked::AtEdge);

        // First child has no previous sibling to demote under
        let demote = plan_move(&forest, &[0, 0], MoveDirection::Demote, &rules(5));
        assert_eq!(demote.unwrap_err(), MoveBlocked::AtEdge);
    }

    #[test]
    fn test_promote_lands_after_former_parent() {
        let forest = sample_forest();
        let plan = plan_move(&forest, &[0, 2, 0], MoveDirection::Promote, &rules(5)).unwrap();

        assert_eq!(
            titles(&plan.tree, &[0]),
            ["Research", "Design", "Build", "Backend"]
        );
        assert!(node_at_path(&plan.tree, &[0, 2]).unwrap().children.is_empty());
        assert_eq!(plan.new_path, vec![0, 3]);
    }

    #[test]
    fn test_promote_root_child_to_root_level() {
        let forest = sample_forest();
        let plan = plan_move(&forest, &[0, 0], MoveDirection::Promote, &rules(5)).unwrap();

        assert_eq!(
            titles(&plan.tree, &[]),
            ["Roadmap", "Research", "Inbox", "Archive"]
        );
        assert_eq!(plan.new_path, vec![1]);
    }

    #[test]
    fn test_demote_appends_under_previous_sibling_and_expands_it() {
        let forest = sample_forest();
        // Archive demotes under Inbox? No - Inbox refuses. Demote Build under Design? Design is locked
        // but lock only gates the MOVED node; Design can still receive.
        let plan = plan_move(&forest, &[0, 2], MoveDirection::Demote, &rules(5)).unwrap();

        let design = node_at_path(&plan.tree, &[0, 1]).unwrap();
        assert_eq!(design.title, "Design");
        assert!(design.expanded, "receiving parent expands to show the drop");
        assert_eq!(design.children.len(), 1);
        assert_eq!(design.children[0].title, "Build");
        assert_eq!(plan.new_path, vec![0, 1, 0]);
    }

    #[test]
    fn test_locked_node_cannot_move() {
        let forest = sample_forest();
        let blocked = plan_move(&forest, &[0, 1], MoveDirection::Down, &rules(5));
        assert_eq!(blocked.unwrap_err(), MoveBlocked::Locked);
        assert_eq!(MoveBlocked::Locked.reason(), "This node cannot be moved");
    }

    #[test]
    fn test_no_children_parent_refuses_drops() {
        let forest = sample_forest();
        // Archive demoting would land under Inbox, which refuses children
        let blocked = plan_move(&forest, &[2], MoveDirection::Demote, &rules(5));
        assert_eq!(blocked.unwrap_err(), MoveBlocked::Refused);
    }

    #[test]
    fn test_depth_limit_blocks_deep_demotes() {
        let forest = sample_forest();
        // Build carries Backend below it: demoting Build under Design
        // needs levels for Design(2) + Build(1) + Backend(1) = 4
        let blocked = plan_move(&forest, &[0, 2], MoveDirection::Demote, &rules(3));
        assert_eq!(blocked.unwrap_err(), MoveBlocked::TooDeep);

        let allowed = plan_move(&forest, &[0, 2], MoveDirection::Demote, &rules(4));
        assert!(allowed.is_ok());
    }

    #[test]
    fn test_stale_path_reports_stale() {
        let forest = sample_forest();
        let gone = plan_move(&forest, &[9, 9], MoveDirection::Up, &rules(5));
        assert_eq!(gone.unwrap_err(), MoveBlocked::Stale);
        assert_eq!(MoveBlocked::Stale.reason(), "");
    }
}
