//! Footer rendering
//!
//! Displays keybinding hints and the selection count.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::Styles;

/// Footer widget showing keybinding hints
pub struct Footer<'a> {
    /// Number of marked branches
    pub selected: usize,
    /// Number of listed branches
    pub total: usize,
    /// Styles
    pub styles: &'a Styles,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Clear the footer area
        for x in area.x..area.x + area.width {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.styles.footer);
        }

        let mut spans = vec![Span::styled(" ", self.styles.footer)];

        let hints = [
            ("j/k", "move"),
            ("space", "toggle"),
            ("q", "quit"),
        ];

        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", self.styles.footer));
            }
            spans.push(Span::styled(*key, self.styles.footer_key));
            spans.push(Span::styled(format!(" {}", desc), self.styles.footer));
        }

        // Selection count (right-aligned)
        let count = format!(" {}/{} selected ", self.selected, self.total);
        let left_width: u16 = spans.iter().map(|s| s.content.width() as u16).sum();
        let count_width = count.width() as u16;

        if left_width + count_width < area.width {
            let padding = area.width - left_width - count_width;
            spans.push(Span::styled(" ".repeat(padding as usize), self.styles.footer));
            spans.push(Span::styled(count, self.styles.footer_key));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
