//! Branch list rendering
//!
//! One row per branch: cursor marker, checkbox and name. The view
//! scrolls just enough to keep the cursor row on screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::selection::Selection;
use super::Styles;

/// Width of `"> [x] "` in front of each name
const ROW_PREFIX_WIDTH: usize = 6;

/// List widget over the session state
pub struct BranchList<'a> {
    pub selection: &'a Selection,
    pub styles: &'a Styles,
}

impl Widget for BranchList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.styles.checkbox)
            .title(Span::styled(" Branches ", self.styles.footer_key));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.selection.is_empty() {
            buf.set_line(
                inner.x,
                inner.y,
                &Line::styled(" (no other local branches)", self.styles.empty),
                inner.width,
            );
            return;
        }

        let visible_height = inner.height as usize;
        let scroll = scroll_offset(self.selection.cursor(), visible_height);
        let max_name_width = (inner.width as usize).saturating_sub(ROW_PREFIX_WIDTH);

        let rows = self
            .selection
            .items()
            .iter()
            .enumerate()
            .skip(scroll)
            .take(visible_height);

        for (row, (i, name)) in rows.enumerate() {
            let y = inner.y + row as u16;
            let is_cursor = i == self.selection.cursor();
            let is_checked = self.selection.is_selected(i);

            let style = if is_cursor {
                self.styles.row_cursor
            } else {
                self.styles.row_normal
            };
            let name_style = if is_checked {
                style.patch(self.styles.row_checked)
            } else {
                style
            };

            let line = Line::from(vec![
                Span::styled(if is_cursor { ">" } else { " " }, self.styles.cursor_marker),
                Span::styled(if is_checked { " [x] " } else { " [ ] " }, self.styles.checkbox),
                Span::styled(truncate(name, max_name_width), name_style),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);

            // Fill background for cursor line
            if is_cursor {
                for x in inner.x..inner.x + inner.width {
                    buf[(x, y)].set_bg(self.styles.row_cursor.bg.unwrap_or_default());
                }
            }
        }
    }
}

/// First visible row so that `cursor` fits in `height` rows
fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return cursor;
    }
    (cursor + 1).saturating_sub(height)
}

/// Cut `s` to at most `max_width` columns, ending in `…` when shortened
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > max_width - 1 {
            break;
        }
        width += cw;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(5, 5), 1);
        assert_eq!(scroll_offset(9, 5), 5);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("main", 10), "main");
        assert_eq!(truncate("feature-login", 8), "feature…");
        assert_eq!(truncate("日本語ブランチ", 5), "日本…");
        assert_eq!(truncate("main", 0), "");
    }
}
