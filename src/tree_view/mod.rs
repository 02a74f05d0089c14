//! The tree view collaborator.
//!
//! Everything about how the tree is presented and manipulated row-wise
//! lives behind this module's boundary: flattening the forest into
//! visible rows, enumerating search matches, planning structural moves,
//! and rendering. The controller talks to it only through [`Props`]
//! (declarative inputs), [`Event`] values mapped into its own messages,
//! and the pure functions [`evaluate_matches`] and [`plan_move`].

pub mod flatten;
pub mod matches;
pub mod movement;
mod view;

use iced::advanced::widget::Id as WidgetId;
use iced::widget::scrollable::Viewport;

use crate::tree::{NodePath, TreeNode};

pub use flatten::{flatten_visible, row_position, VisibleRow};
pub use matches::{evaluate_matches, MatchOptions, Matches};
pub use movement::{plan_move, MoveBlocked, MoveDirection, MovePlan};
pub use view::view;

/// Height of one tree row in pixels (fixed, for scroll arithmetic)
pub const ROW_HEIGHT: f32 = 24.0;

/// Snapshot of one rendered row, handed to the row decorator on every
/// render pass.
pub struct RowContext<'a> {
    pub node: &'a TreeNode,
    pub path: &'a [usize],
    pub row_index: usize,
}

/// Per-row action descriptors produced by the controller's decorator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Show the row's node fields in a modal dump
    Inspect,
    /// Insert a placeholder child under this row
    AddChild,
    /// Remove this row and its subtree (after confirmation)
    Delete,
}

impl RowAction {
    /// Button glyph for this action
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Inspect => "ℹ",
            RowAction::AddChild => "+",
            RowAction::Delete => "−",
        }
    }
}

/// Movement permissions, supplied by the controller and enforced here.
///
/// `can_drop` receives the prospective parent, or `None` when the node
/// would land at the root level (always allowed there).
#[derive(Clone, Copy)]
pub struct DragRules {
    pub max_depth: usize,
    pub can_drag: fn(&TreeNode) -> bool,
    pub can_drop: fn(Option<&TreeNode>) -> bool,
}

/// Pure row-decoration callback: context in, action descriptors out
pub type RowDecorator = fn(&RowContext<'_>) -> Vec<RowAction>;

/// Declarative inputs consumed per render
pub struct Props<'a> {
    pub tree: &'a [TreeNode],
    pub selected: Option<&'a [usize]>,
    pub matches: &'a Matches,
    /// Path of the focused match, if any
    pub focus: Option<&'a [usize]>,
    pub rules: DragRules,
    pub decorate: RowDecorator,
    pub scrollable_id: WidgetId,
}

/// Events reported back to the controller
#[derive(Debug, Clone)]
pub enum Event {
    /// Expand/collapse handle clicked on the row at this path
    ToggleRow(NodePath),
    /// Row title clicked (select, or deselect when already selected)
    SelectRow(NodePath),
    /// One of the decorated row buttons pressed
    RowAction(RowAction, NodePath),
    /// Scroll position changed
    Scrolled(Viewport),
}
