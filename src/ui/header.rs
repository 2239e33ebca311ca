//! Header rendering
//!
//! Displays the title and the checked-out branch.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::Styles;

/// Header widget showing the title and current branch
pub struct Header<'a> {
    /// Title text
    pub title: &'a str,
    /// Checked-out branch, which is never listed
    pub current_branch: Option<&'a str>,
    /// Styles
    pub styles: &'a Styles,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Clear the header area
        for x in area.x..area.x + area.width {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.styles.header);
        }

        let mut spans = vec![Span::styled(format!(" {}", self.title), self.styles.header)];

        // Current branch (right-aligned)
        if let Some(branch) = self.current_branch {
            let branch_info = format!(" on {} ", branch);
            let branch_width = branch_info.width() as u16;
            let left_width: u16 = spans.iter().map(|s| s.content.width() as u16).sum();

            if left_width + branch_width < area.width {
                let padding = area.width - left_width - branch_width;
                spans.push(Span::styled(
                    " ".repeat(padding as usize),
                    self.styles.header,
                ));
                spans.push(Span::styled(branch_info, self.styles.current_branch));
            }
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
