//! UI styles
//!
//! Defines consistent styling for the entire application.

use ratatui::style::{Color, Modifier, Style};

/// Color palette
pub mod colors {
    use ratatui::style::Color;

    // Base colors
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;

    // Header/footer bars
    pub const BAR_BG: Color = Color::Rgb(40, 44, 52);
    pub const BAR_FG: Color = Color::White;
    pub const BAR_DIM: Color = Color::DarkGray;

    // Rows
    pub const CURSOR_BG: Color = Color::Rgb(80, 80, 100);
    pub const CHECKED: Color = Color::Red;

    // Current branch
    pub const CURRENT_BRANCH: Color = Color::Green;
}

/// Collection of styles used throughout the UI
#[derive(Debug, Clone)]
pub struct Styles {
    // Header/Footer
    pub header: Style,
    pub footer: Style,
    pub footer_key: Style,
    pub current_branch: Style,

    // List rows
    pub row_normal: Style,
    pub row_cursor: Style,
    pub row_checked: Style,
    pub cursor_marker: Style,
    pub checkbox: Style,
    pub empty: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}

impl Styles {
    /// Create a new Styles instance with default values
    pub fn new() -> Self {
        Self {
            header: Style::default()
                .bg(colors::BAR_BG)
                .fg(colors::BAR_FG)
                .add_modifier(Modifier::BOLD),
            footer: Style::default()
                .bg(colors::BAR_BG)
                .fg(colors::BAR_DIM),
            footer_key: Style::default()
                .bg(colors::BAR_BG)
                .fg(colors::BAR_FG)
                .add_modifier(Modifier::BOLD),
            current_branch: Style::default()
                .bg(colors::BAR_BG)
                .fg(colors::CURRENT_BRANCH),

            row_normal: Style::default().fg(colors::FG),
            row_cursor: Style::default()
                .bg(colors::CURSOR_BG)
                .fg(colors::FG)
                .add_modifier(Modifier::BOLD),
            row_checked: Style::default()
                .fg(colors::CHECKED)
                .add_modifier(Modifier::CROSSED_OUT),
            cursor_marker: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            checkbox: Style::default().fg(colors::DIM),
            empty: Style::default()
                .fg(colors::DIM)
                .add_modifier(Modifier::ITALIC),
        }
    }
}
