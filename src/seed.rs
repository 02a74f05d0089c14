//! The startup tree.
//!
//! Built literally in code; there is no file format behind it. The seed
//! exercises every node feature the UI demonstrates: subtitles,
//! pre-expanded sections, a locked (`no_dragging`) node, a node that
//! refuses drops (`no_children`), and nesting four levels deep.

use crate::tree::TreeNode;

/// The forest shown when the application starts
pub fn seed_forest() -> Vec<TreeNode> {
    vec![
        TreeNode {
            subtitle: Some(String::from("Q3 planning")),
            expanded: true,
            children: vec![
                TreeNode {
                    subtitle: Some(String::from("user interviews")),
                    children: vec![
                        TreeNode::new("Interview notes"),
                        TreeNode::new("Survey results"),
                    ],
                    ..TreeNode::new("Research")
                },
                TreeNode {
                    subtitle: Some(String::from("sign-off pending")),
                    no_dragging: true,
                    children: vec![TreeNode::new("Wireframes")],
                    ..TreeNode::new("Design")
                },
                TreeNode {
                    expanded: true,
                    children: vec![
                        TreeNode {
                            children: vec![TreeNode::new("Schema migration")],
                            ..TreeNode::new("Backend")
                        },
                        TreeNode::new("Frontend"),
                    ],
                    ..TreeNode::new("Build")
                },
            ],
            ..TreeNode::new("Roadmap")
        },
        TreeNode {
            subtitle: Some(String::from("drops disabled")),
            no_children: true,
            ..TreeNode::new("Inbox")
        },
        TreeNode {
            children: vec![TreeNode::new("2024"), TreeNode::new("2025")],
            ..TreeNode::new("Archive")
        },
    ]
}
