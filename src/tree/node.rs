use serde::{Deserialize, Serialize};

/// Path to a node: child indices descending from the forest root.
///
/// `[2, 0]` is the first child of the third root node. The path length
/// equals the node's depth (root rows are depth 1). An empty path refers
/// to the forest itself and never resolves to a node.
pub type NodePath = Vec<usize>;

/// A single node in the tree.
///
/// Serializes with the camelCase field names the node schema uses
/// (`noDragging`, `noChildren`); absent optional fields stay absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// The node's display title
    pub title: String,
    /// Optional secondary line shown dimmed next to the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Whether the node's children are currently shown
    #[serde(default)]
    pub expanded: bool,
    /// When set, the node cannot be picked up and moved
    #[serde(default)]
    pub no_dragging: bool,
    /// When set, the node refuses to receive moved-in children
    #[serde(default)]
    pub no_children: bool,
    /// Ordered child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a collapsed leaf node with the given title
    pub fn new(title: impl Into<String>) -> Self {
        TreeNode {
            title: title.into(),
            subtitle: None,
            expanded: false,
            no_dragging: false,
            no_children: false,
            children: Vec::new(),
        }
    }

    /// Does this node have children to expand?
    pub fn is_expandable(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of levels in this node's subtree (a leaf counts as 1)
    pub fn subtree_levels(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::subtree_levels)
            .max()
            .unwrap_or(0)
    }
}
