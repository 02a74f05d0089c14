// Declare the tree data store submodules
pub mod node;
pub mod transform;

// Re-export for easier access
pub use node::NodePath;
pub use node::TreeNode;
