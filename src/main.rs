mod config;
mod port;
mod search;
mod seed;
mod style;
mod tree;
mod tree_view;

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Center, Element, Fill, Length, Subscription, Task};
use iced::advanced::widget::{Id as WidgetId, operate};
use iced::advanced::widget::operation::scrollable::{scroll_to, AbsoluteOffset};
use iced::advanced::widget::operation::focusable;
use iced::keyboard::{self, Key, Modifiers, key::Named};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::port::{DialogPort, InteractionPort};
use crate::search::SearchNavigator;
use crate::style::{
    button_3d_style, button_toggle_style, COLOR_ERROR, COLOR_NOTE, COLOR_READOUT, COLOR_STATUS_BG,
    COLOR_TITLE, COLOR_TOOLBAR_BG,
};
use crate::tree::transform::{
    add_node_under_parent, deepest_level, expand_along_path, node_at_path, node_count,
    remove_node_at_path, set_expanded_at, toggle_expanded_for_all,
};
use crate::tree::{NodePath, TreeNode};
use crate::tree_view::{
    evaluate_matches, flatten_visible, plan_move, row_position, DragRules, MatchOptions, Matches,
    MoveDirection, Props, RowAction, RowContext, ROW_HEIGHT,
};

pub fn main() -> iced::Result {
    // RUST_LOG overrides the default filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "grove=info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    iced::application(App::boot, App::update, App::view)
        .window_size((900.0, 700.0))
        .resizable(true)
        .title(|_app: &App| String::from("Grove - Tree Organizer"))
        .subscription(App::subscription)
        .run()
}

// The application state (Model)
struct App {
    // The forest itself; replaced wholesale by every structural change
    tree: Vec<TreeNode>,
    // Search query, match count, and the focused match index
    navigator: SearchNavigator,
    // Matching paths in document order, as last reported by the tree view
    matches: Matches,
    // Set when the regex toggle is on and the pattern does not parse
    match_error: Option<String>,
    search_case_sensitive: bool,
    search_use_regex: bool,
    // Path of the selected row, if any
    selected: Option<NodePath>,
    // Persisted preferences (~/.grove/config.json)
    config: Config,
    // Note shown at the right of the status bar
    status: String,
    // Viewport height in pixels (updated on scroll, used to center jumps)
    viewport_height: f32,
    // Scrollable ID for programmatic scrolling
    tree_scrollable_id: WidgetId,
    // Search input ID for programmatic focus
    search_input_id: WidgetId,
    // Track current keyboard modifiers (for Shift+Enter in search input)
    current_modifiers: Modifiers,
    // Confirm/notify dialogs; swapped for a stub in tests
    port: Box<dyn InteractionPort>,
}

impl Default for App {
    fn default() -> Self {
        App {
            tree: seed::seed_forest(),
            navigator: SearchNavigator::new(),
            matches: Matches::default(),
            match_error: None,
            search_case_sensitive: false,
            search_use_regex: false,
            selected: None,
            config: Config::load(),
            status: String::new(),
            viewport_height: 600.0,
            tree_scrollable_id: WidgetId::unique(),
            search_input_id: WidgetId::unique(),
            current_modifiers: Modifiers::default(),
            port: Box::new(DialogPort),
        }
    }
}

// Messages that can be sent to update the app
#[derive(Debug, Clone)]
enum Message {
    // Everything the tree area reports, mapped into our message type
    TreeView(tree_view::Event),
    ExpandAll,
    CollapseAll,
    SearchQueryChanged(String),
    SearchNext,
    SearchPrev,
    // Search submit from text input (checks current_modifiers for Shift)
    SearchSubmit,
    ClearSearch,
    FocusSearch,
    ToggleCaseSensitive,
    ToggleRegex,
    // Flip the first-child/last-child insertion preference
    ToggleAddFirst,
    // Keyboard-driven structural move of the selected row
    MoveSelected(MoveDirection),
    KeyPressed(Key, Modifiers),
    ModifiersChanged(Modifiers),
}

/// Locked rows stay where they are
fn can_drag(node: &TreeNode) -> bool {
    !node.no_dragging
}

/// The root level always accepts drops; other targets must allow children
fn can_drop(next_parent: Option<&TreeNode>) -> bool {
    next_parent.is_none_or(|parent| !parent.no_children)
}

/// Every row gets the same three action buttons
fn row_actions(_context: &RowContext<'_>) -> Vec<RowAction> {
    vec![RowAction::Inspect, RowAction::AddChild, RowAction::Delete]
}

/// Titles along the path joined into a breadcrumb, or None if stale
fn breadcrumb(forest: &[TreeNode], path: &[usize]) -> Option<String> {
    let mut titles = Vec::new();
    let mut level = forest;
    for &index in path {
        let node = level.get(index)?;
        titles.push(node.title.clone());
        level = &node.children;
    }
    Some(titles.join(" ▸ "))
}

impl App {
    // Initialize the application (called once at startup)
    fn boot() -> (Self, Task<Message>) {
        let app = App::default();
        tracing::info!(
            nodes = node_count(&app.tree),
            depth = deepest_level(&app.tree),
            "seed forest loaded"
        );
        (app, Task::none())
    }

    // Listen for keyboard events that widgets did not consume
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            keyboard::Event::ModifiersChanged(modifiers) => {
                Some(Message::ModifiersChanged(modifiers))
            }
            // Ignore key releases
            _ => None,
        })
    }

    // Handle messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TreeView(event) => self.on_tree_event(event),
            Message::ExpandAll => {
                self.replace_tree(toggle_expanded_for_all(&self.tree, true));
                Task::none()
            }
            Message::CollapseAll => {
                self.replace_tree(toggle_expanded_for_all(&self.tree, false));
                Task::none()
            }
            Message::SearchQueryChanged(query) => {
                self.navigator.set_query(query);
                self.refresh_matches();
                self.reveal_focused_match()
            }
            Message::ToggleCaseSensitive => {
                self.search_case_sensitive = !self.search_case_sensitive;
                self.refresh_matches();
                self.reveal_focused_match()
            }
            Message::ToggleRegex => {
                self.search_use_regex = !self.search_use_regex;
                self.refresh_matches();
                self.reveal_focused_match()
            }
            Message::SearchNext => {
                self.navigator.select_next();
                self.reveal_focused_match()
            }
            Message::SearchPrev => {
                self.navigator.select_prev();
                self.reveal_focused_match()
            }
            Message::SearchSubmit => {
                // Enter in the search input; Shift reverses direction
                if self.current_modifiers.shift() {
                    self.update(Message::SearchPrev)
                } else {
                    self.update(Message::SearchNext)
                }
            }
            Message::ClearSearch => {
                self.navigator.set_query("");
                self.refresh_matches();
                Task::none()
            }
            Message::FocusSearch => operate(focusable::focus(self.search_input_id.clone())),
            Message::ToggleAddFirst => {
                self.config.add_as_first_child = !self.config.add_as_first_child;
                if let Err(e) = self.config.save() {
                    tracing::warn!("could not save preferences: {e}");
                }
                self.status = if self.config.add_as_first_child {
                    String::from("Adding new nodes as first child")
                } else {
                    String::from("Adding new nodes as last child")
                };
                Task::none()
            }
            Message::MoveSelected(direction) => {
                self.move_selected(direction);
                Task::none()
            }
            Message::KeyPressed(key, modifiers) => {
                let cmd_or_ctrl = modifiers.command() || modifiers.control();

                match key {
                    Key::Named(Named::Escape) => self.update(Message::ClearSearch),
                    Key::Named(Named::Enter) => {
                        if modifiers.shift() {
                            self.update(Message::SearchPrev)
                        } else {
                            self.update(Message::SearchNext)
                        }
                    }
                    Key::Named(Named::ArrowUp) if modifiers.alt() => {
                        self.update(Message::MoveSelected(MoveDirection::Up))
                    }
                    Key::Named(Named::ArrowDown) if modifiers.alt() => {
                        self.update(Message::MoveSelected(MoveDirection::Down))
                    }
                    Key::Named(Named::ArrowLeft) if modifiers.alt() => {
                        self.update(Message::MoveSelected(MoveDirection::Promote))
                    }
                    Key::Named(Named::ArrowRight) if modifiers.alt() => {
                        self.update(Message::MoveSelected(MoveDirection::Demote))
                    }
                    Key::Character(c) if c.as_str() == "f" && cmd_or_ctrl => {
                        self.update(Message::FocusSearch)
                    }
                    _ => Task::none(),
                }
            }
            Message::ModifiersChanged(modifiers) => {
                self.current_modifiers = modifiers;
                Task::none()
            }
        }
    }

    fn on_tree_event(&mut self, event: tree_view::Event) -> Task<Message> {
        match event {
            tree_view::Event::ToggleRow(path) => {
                match node_at_path(&self.tree, &path) {
                    Some(node) => {
                        let expanded = !node.expanded;
                        if let Some(tree) = set_expanded_at(&self.tree, &path, expanded) {
                            self.replace_tree(tree);
                            // Toggling also selects the row
                            self.selected = Some(path);
                        }
                    }
                    None => tracing::debug!(?path, "toggle on a stale row"),
                }
                Task::none()
            }
            tree_view::Event::SelectRow(path) => {
                // Clicking the selected row again deselects it
                if self.selected.as_deref() == Some(path.as_slice()) {
                    self.selected = None;
                } else {
                    self.selected = Some(path);
                }
                Task::none()
            }
            tree_view::Event::RowAction(action, path) => {
                match action {
                    RowAction::Inspect => self.describe_row(&path),
                    RowAction::AddChild => self.add_child_under_row(&path),
                    RowAction::Delete => self.delete_row(&path),
                }
                Task::none()
            }
            tree_view::Event::Scrolled(viewport) => {
                self.viewport_height = viewport.bounds().height;
                Task::none()
            }
        }
    }

    /// Replace the forest and re-derive everything hanging off it
    fn replace_tree(&mut self, tree: Vec<TreeNode>) {
        self.tree = tree;

        let selection_stale = self
            .selected
            .as_ref()
            .is_some_and(|path| node_at_path(&self.tree, path).is_none());
        if selection_stale {
            self.selected = None;
        }

        self.refresh_matches();
    }

    /// Re-run the match enumeration and re-clamp the navigator
    fn refresh_matches(&mut self) {
        let options = MatchOptions {
            case_sensitive: self.search_case_sensitive,
            use_regex: self.search_use_regex,
        };
        let (matches, error) = evaluate_matches(&self.tree, self.navigator.query(), options);

        self.match_error = error;
        self.navigator.on_matches_updated(matches.len());
        self.matches = matches;
    }

    /// Expand ancestors of the focused match and scroll it into view
    fn reveal_focused_match(&mut self) -> Task<Message> {
        let Some(path) = self.matches.get(self.navigator.focus_index()).cloned() else {
            return Task::none();
        };

        self.tree = expand_along_path(&self.tree, &path);
        self.scroll_to_row(&path)
    }

    /// Calculate the scroll offset that centers a row and return the task
    fn scroll_to_row(&self, path: &[usize]) -> Task<Message> {
        let rows = flatten_visible(&self.tree, &self.drag_rules());

        if let Some(row_pos) = row_position(&rows, path) {
            let target_offset = row_pos as f32 * ROW_HEIGHT;
            let center_offset = self.viewport_height / 2.0;
            let scroll_y = (target_offset - center_offset).max(0.0);

            let id = self.tree_scrollable_id.clone();
            let offset = AbsoluteOffset { x: Some(0.0), y: Some(scroll_y) };
            operate(scroll_to(id, offset))
        } else {
            Task::none()
        }
    }

    fn drag_rules(&self) -> DragRules {
        DragRules {
            max_depth: self.config.max_depth,
            can_drag,
            can_drop,
        }
    }

    /// Dump the node's fields, path, and row index into a modal
    fn describe_row(&self, path: &[usize]) {
        let Some(node) = node_at_path(&self.tree, path) else {
            tracing::debug!(?path, "describe on a stale row");
            return;
        };

        let rows = flatten_visible(&self.tree, &self.drag_rules());
        let Some(row_index) = row_position(&rows, path) else {
            tracing::debug!(?path, "describe on a hidden row");
            return;
        };

        let mut lines = vec![format!("title: {}", node.title)];
        if let Some(subtitle) = &node.subtitle {
            lines.push(format!("subtitle: {}", subtitle));
        }
        lines.push(format!("expanded: {}", node.expanded));
        lines.push(format!("noDragging: {}", node.no_dragging));
        lines.push(format!("noChildren: {}", node.no_children));
        lines.push(format!("children: [{} nodes]", node.children.len()));
        lines.push(format!("path: {:?}", path));
        lines.push(format!("row: {}", row_index));

        self.port.notify(&lines.join("\n"));
    }

    /// Insert a placeholder child under the row, honoring the position
    /// preference and the depth limit
    fn add_child_under_row(&mut self, path: &[usize]) {
        if node_at_path(&self.tree, path).is_none() {
            tracing::debug!(?path, "add under a stale row");
            return;
        }

        // The new child would sit one level below its parent
        if path.len() + 1 > self.config.max_depth {
            self.status = String::from("Maximum depth reached");
            return;
        }

        let child = TreeNode {
            subtitle: Some(String::from("new subtitle")),
            ..TreeNode::new("new title")
        };

        if let Some(tree) =
            add_node_under_parent(&self.tree, path, child, self.config.add_as_first_child)
        {
            self.replace_tree(tree);
            self.status = String::from("Added node");
        }
    }

    /// Remove the row's subtree after the user confirms
    fn delete_row(&mut self, path: &[usize]) {
        if node_at_path(&self.tree, path).is_none() {
            tracing::debug!(?path, "delete on a stale row");
            return;
        }

        if !self.port.confirm("Are you sure you want to delete this node?") {
            return;
        }

        if let Some(tree) = remove_node_at_path(&self.tree, path) {
            self.replace_tree(tree);
            self.status = String::from("Deleted node");
        }
    }

    /// Plan and apply a structural move of the selected row
    fn move_selected(&mut self, direction: MoveDirection) {
        let Some(path) = self.selected.clone() else {
            return;
        };

        match plan_move(&self.tree, &path, direction, &self.drag_rules()) {
            Ok(plan) => {
                tracing::debug!(from = ?path, to = ?plan.new_path, "node moved");
                self.replace_tree(plan.tree);
                self.selected = Some(plan.new_path);
            }
            Err(blocked) => {
                let reason = blocked.reason();
                if reason.is_empty() {
                    tracing::debug!(?path, "move on a stale row");
                } else {
                    self.status = String::from(reason);
                }
            }
        }
    }

    // Render the UI
    fn view(&self) -> Element<'_, Message> {
        // Toolbar: tree-wide buttons, search controls, insertion toggle
        let expand_all_button = button(text("Expand All").size(11))
            .padding([5, 12])
            .style(button_3d_style)
            .on_press(Message::ExpandAll);

        let collapse_all_button = button(text("Collapse All").size(11))
            .padding([5, 12])
            .style(button_3d_style)
            .on_press(Message::CollapseAll);

        let case_button = button(text("Aa").size(11))
            .padding([4, 8])
            .style(button_toggle_style(self.search_case_sensitive))
            .on_press(Message::ToggleCaseSensitive);

        let regex_button = button(text(".*").size(11))
            .padding([4, 8])
            .style(button_toggle_style(self.search_use_regex))
            .on_press(Message::ToggleRegex);

        let add_first_button = button(text("+⊤").size(11))
            .padding([4, 8])
            .style(button_toggle_style(self.config.add_as_first_child))
            .on_press(Message::ToggleAddFirst);

        // Search input with ID for programmatic focus
        let search_input = text_input("Find...", self.navigator.query())
            .id(self.search_input_id.clone())
            .on_input(Message::SearchQueryChanged)
            .on_submit(Message::SearchSubmit)
            .padding(5)
            .width(Length::Fixed(200.0));

        // Readout: pattern error, "No matches", or focus / count
        let readout = if let Some(error) = &self.match_error {
            error.clone()
        } else if self.matches.is_empty() {
            if self.navigator.query().is_empty() {
                String::new()
            } else {
                String::from("No matches")
            }
        } else {
            // A stale focus index never displays out of range
            let shown = self.navigator.focus_index().min(self.matches.len() - 1) + 1;
            format!("{} / {}", shown, self.matches.len())
        };
        let readout_color = if self.match_error.is_some() {
            COLOR_ERROR
        } else {
            COLOR_READOUT
        };

        let prev_button = button(text("◂ Prev").size(11))
            .padding([5, 12])
            .style(button_3d_style);
        let next_button = button(text("Next ▸").size(11))
            .padding([5, 12])
            .style(button_3d_style);

        // Only add on_press if there are matches
        let has_matches = self.navigator.has_matches();
        let prev_button = if has_matches {
            prev_button.on_press(Message::SearchPrev)
        } else {
            prev_button
        };
        let next_button = if has_matches {
            next_button.on_press(Message::SearchNext)
        } else {
            next_button
        };

        let toolbar = container(
            row![
                expand_all_button,
                Space::new().width(Length::Fixed(3.0)),
                collapse_all_button,
                Space::new().width(Length::Fixed(12.0)),
                case_button,
                Space::new().width(Length::Fixed(3.0)),
                regex_button,
                Space::new().width(Length::Fixed(8.0)),
                search_input,
                Space::new().width(Length::Fixed(10.0)),
                prev_button,
                Space::new().width(Length::Fixed(5.0)),
                next_button,
                Space::new().width(Length::Fixed(10.0)),
                text(readout).size(11).color(readout_color),
                Space::new().width(Length::Fill),
                add_first_button,
            ]
            .align_y(Center),
        )
        .width(Fill)
        .padding([8, 10])
        .style(|_theme| container::Style {
            background: Some(COLOR_TOOLBAR_BG.into()),
            ..Default::default()
        });

        // The tree area reports its events through our TreeView message
        let tree_pane = tree_view::view(Props {
            tree: &self.tree,
            selected: self.selected.as_deref(),
            matches: &self.matches,
            focus: self.matches.get(self.navigator.focus_index()).map(|p| p.as_slice()),
            rules: self.drag_rules(),
            decorate: row_actions,
            scrollable_id: self.tree_scrollable_id.clone(),
        })
        .map(Message::TreeView);

        // Status bar: node count, selected breadcrumb, last action note
        let count_label = format!("Nodes: {}", node_count(&self.tree));
        let selected_label: String = self
            .selected
            .as_ref()
            .and_then(|path| breadcrumb(&self.tree, path))
            .unwrap_or_default();

        let status_bar = container(
            row![
                text(count_label).size(12).color(COLOR_READOUT),
                text("  |  ").size(12).color(COLOR_READOUT),
                text(selected_label).size(12).color(COLOR_TITLE),
                Space::new().width(Length::Fill),
                text(self.status.as_str()).size(12).color(COLOR_NOTE),
            ],
        )
        .width(Fill)
        .padding([5, 10])
        .style(|_theme| container::Style {
            background: Some(COLOR_STATUS_BG.into()),
            ..Default::default()
        });

        column![toolbar, tree_pane, status_bar].into()
    }
}
