//! Row rendering for the tree view.
//!
//! Builds one fixed-height row per visible node: tree-line prefix,
//! expand handle, drag handle, title/subtitle, then the decorated action
//! buttons. Row backgrounds are prioritized: focused match over
//! selection over plain match over zebra stripe.

use iced::widget::{button, column, container, scrollable, text, Row, Space};
use iced::{Center, Color, Element, Fill, Font, Length};

use super::{Event, Props, RowContext, VisibleRow, ROW_HEIGHT};
use crate::style;
use crate::tree::transform::node_at_path;
use crate::tree_view::flatten::flatten_visible;

/// Render the tree area from declarative props
pub fn view<'a>(props: Props<'a>) -> Element<'a, Event> {
    let rows = flatten_visible(props.tree, &props.rules);

    if rows.is_empty() {
        let notice = text("Tree is empty").size(14).color(style::COLOR_SUBTITLE);
        return container(notice).width(Fill).height(Fill).center(Fill).into();
    }

    let mut elements: Vec<Element<'a, Event>> = Vec::with_capacity(rows.len());
    for row in &rows {
        elements.push(render_row(&props, row));
    }

    scrollable(container(column(elements).spacing(0)).padding([10, 0]))
        .id(props.scrollable_id.clone())
        .on_scroll(Event::Scrolled)
        .height(Fill)
        .width(Fill)
        .into()
}

/// Render a single visible row into an Element
fn render_row<'a>(props: &Props<'a>, row: &VisibleRow) -> Element<'a, Event> {
    let mut pieces: Vec<Element<'a, Event>> = vec![text(row.prefix.clone())
        .font(Font::MONOSPACE)
        .size(13)
        .color(style::COLOR_TREE_LINE)
        .into()];

    // Expand/collapse handle replaces the "─" part of the connector
    if row.is_expandable {
        let indicator = if row.is_expanded { "⊟ " } else { "⊞ " };
        pieces.push(
            button(
                text(indicator)
                    .font(Font::MONOSPACE)
                    .size(13)
                    .color(style::COLOR_INDICATOR),
            )
            .on_press(Event::ToggleRow(row.path.clone()))
            .padding(0)
            .style(button::text)
            .into(),
        );
    } else {
        pieces.push(
            text("─ ")
                .font(Font::MONOSPACE)
                .size(13)
                .color(style::COLOR_TREE_LINE)
                .into(),
        );
    }

    // Drag handle only on rows the controller lets move
    let handle = if row.draggable { "≡ " } else { "  " };
    pieces.push(
        text(handle)
            .font(Font::MONOSPACE)
            .size(13)
            .color(style::COLOR_HANDLE)
            .into(),
    );

    // Title selects the row; clicking again deselects
    pieces.push(
        button(text(row.title.clone()).size(13).color(style::COLOR_TITLE))
            .on_press(Event::SelectRow(row.path.clone()))
            .padding(0)
            .style(button::text)
            .into(),
    );

    if let Some(subtitle) = &row.subtitle {
        pieces.push(
            text(format!("  {}", subtitle))
                .size(11)
                .color(style::COLOR_SUBTITLE)
                .into(),
        );
    }

    pieces.push(Space::new().width(Length::Fixed(10.0)).into());

    // Action buttons come from the controller's decorator
    if let Some(node) = node_at_path(props.tree, &row.path) {
        let context = RowContext {
            node,
            path: &row.path,
            row_index: row.row_index,
        };
        for action in (props.decorate)(&context) {
            pieces.push(
                button(text(action.label()).size(10))
                    .on_press(Event::RowAction(action, row.path.clone()))
                    .padding([1, 6])
                    .style(style::button_3d_style)
                    .into(),
            );
            pieces.push(Space::new().width(Length::Fixed(3.0)).into());
        }
    }

    let content = Row::with_children(pieces).spacing(0).align_y(Center);

    // Background priority: focused match > selected > match > zebra
    let is_focus = props.focus.is_some_and(|f| f == row.path.as_slice());
    let is_selected = props.selected.is_some_and(|s| s == row.path.as_slice());
    let is_match = props.matches.contains(&row.path);

    let background: Option<Color> = if is_focus {
        Some(style::COLOR_SEARCH_CURRENT)
    } else if is_selected {
        Some(style::COLOR_SELECTED)
    } else if is_match {
        Some(style::COLOR_SEARCH_MATCH)
    } else if row.row_index % 2 == 1 {
        Some(style::COLOR_ROW_ODD)
    } else {
        None
    };

    let shell = container(content)
        .width(Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .padding([0, 6]);

    match background {
        Some(color) => shell
            .style(move |_theme| container::Style {
                background: Some(color.into()),
                ..Default::default()
            })
            .into(),
        None => shell.into(),
    }
}
