//! Shared colors and button styles.
//!
//! One place for the palette so the toolbar, tree rows, and status bar
//! stay consistent.

use iced::border::Radius;
use iced::widget::button;
use iced::widget::button::Status as ButtonStatus;
use iced::{Border, Color, Shadow};

// Tree row colors
pub const COLOR_TREE_LINE: Color = Color::from_rgb(0.45, 0.45, 0.45);
pub const COLOR_INDICATOR: Color = Color::from_rgb(0.55, 0.55, 0.55);
pub const COLOR_HANDLE: Color = Color::from_rgb(0.5, 0.5, 0.5);
pub const COLOR_TITLE: Color = Color::from_rgb(0.9, 0.9, 0.9);
pub const COLOR_SUBTITLE: Color = Color::from_rgb(0.6, 0.6, 0.6);
pub const COLOR_ROW_ODD: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.03); // Subtle alternating stripe
pub const COLOR_SEARCH_MATCH: Color = Color::from_rgba(0.9, 0.7, 0.2, 0.3); // Yellow highlight for matches
pub const COLOR_SEARCH_CURRENT: Color = Color::from_rgba(0.9, 0.5, 0.1, 0.5); // Orange for the focused match
pub const COLOR_SELECTED: Color = Color::from_rgba(0.3, 0.5, 0.8, 0.3); // Blue highlight for the selected row

// Chrome colors
pub const COLOR_TOOLBAR_BG: Color = Color::from_rgb(0.12, 0.12, 0.12);
pub const COLOR_STATUS_BG: Color = Color::from_rgb(0.15, 0.15, 0.15);
pub const COLOR_READOUT: Color = Color::from_rgb(0.7, 0.7, 0.7);
pub const COLOR_NOTE: Color = Color::from_rgb(0.7, 0.7, 0.5);
pub const COLOR_ERROR: Color = Color::from_rgb(0.9, 0.4, 0.4);

// Button colors for 3D effect
const COLOR_BTN_BG: Color = Color::from_rgb(0.28, 0.28, 0.30);
const COLOR_BTN_BG_HOVER: Color = Color::from_rgb(0.32, 0.32, 0.35);
const COLOR_BTN_BORDER_TOP: Color = Color::from_rgb(0.45, 0.45, 0.48);
const COLOR_BTN_BORDER_BOTTOM: Color = Color::from_rgb(0.15, 0.15, 0.17);
const COLOR_BTN_DISABLED: Color = Color::from_rgb(0.22, 0.22, 0.24);

/// Custom 3D button style with raised appearance
pub fn button_3d_style(_theme: &iced::Theme, status: ButtonStatus) -> button::Style {
    let (bg_color, text_color, border_color) = match status {
        ButtonStatus::Active => (
            COLOR_BTN_BG,
            Color::from_rgb(0.9, 0.9, 0.9),
            COLOR_BTN_BORDER_TOP,
        ),
        ButtonStatus::Hovered => (COLOR_BTN_BG_HOVER, Color::WHITE, COLOR_BTN_BORDER_TOP),
        ButtonStatus::Pressed => (
            COLOR_BTN_BORDER_BOTTOM,
            Color::from_rgb(0.8, 0.8, 0.8),
            COLOR_BTN_BORDER_BOTTOM,
        ),
        ButtonStatus::Disabled => (
            COLOR_BTN_DISABLED,
            Color::from_rgb(0.5, 0.5, 0.5),
            COLOR_BTN_DISABLED,
        ),
    };

    button::Style {
        background: Some(bg_color.into()),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: Radius::from(4.0),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        snap: true,
    }
}

/// Toggle button style - highlighted when active
pub fn button_toggle_style(is_active: bool) -> impl Fn(&iced::Theme, ButtonStatus) -> button::Style {
    move |_theme: &iced::Theme, status: ButtonStatus| {
        let active_bg = Color::from_rgb(0.3, 0.5, 0.7); // Blue when active
        let active_border = Color::from_rgb(0.4, 0.6, 0.8);

        let (bg_color, text_color, border_color) = match (is_active, status) {
            (true, ButtonStatus::Active) => (active_bg, Color::WHITE, active_border),
            (true, ButtonStatus::Hovered) => (
                Color::from_rgb(0.35, 0.55, 0.75),
                Color::WHITE,
                active_border,
            ),
            (true, ButtonStatus::Pressed) => (
                Color::from_rgb(0.25, 0.45, 0.65),
                Color::WHITE,
                active_border,
            ),
            (false, ButtonStatus::Active) => (
                COLOR_BTN_BG,
                Color::from_rgb(0.7, 0.7, 0.7),
                COLOR_BTN_BORDER_TOP,
            ),
            (false, ButtonStatus::Hovered) => (
                COLOR_BTN_BG_HOVER,
                Color::from_rgb(0.9, 0.9, 0.9),
                COLOR_BTN_BORDER_TOP,
            ),
            (false, ButtonStatus::Pressed) => (
                COLOR_BTN_BORDER_BOTTOM,
                Color::from_rgb(0.8, 0.8, 0.8),
                COLOR_BTN_BORDER_BOTTOM,
            ),
            (_, ButtonStatus::Disabled) => (
                COLOR_BTN_DISABLED,
                Color::from_rgb(0.5, 0.5, 0.5),
                COLOR_BTN_DISABLED,
            ),
        };

        button::Style {
            background: Some(bg_color.into()),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: Radius::from(4.0),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: iced::Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            snap: true,
        }
    }
}
