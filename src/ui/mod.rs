//! UI module
//!
//! Contains all terminal UI components:
//! - Styles for consistent theming
//! - Branch list with cursor and checkboxes
//! - Header and footer

mod styles;
mod header;
mod footer;
mod branch_list;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use styles::Styles;
pub use header::Header;
pub use footer::Footer;
pub use branch_list::BranchList;

use crate::selection::Selection;

/// Draw the whole screen: header, branch list, footer
pub fn render(
    frame: &mut Frame,
    selection: &Selection,
    title: &str,
    current_branch: Option<&str>,
    styles: &Styles,
) {
    // Layout: header (1) + list + footer (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(
        Header {
            title,
            current_branch,
            styles,
        },
        chunks[0],
    );
    frame.render_widget(BranchList { selection, styles }, chunks[1]);
    frame.render_widget(
        Footer {
            selected: selection.selected().len(),
            total: selection.len(),
            styles,
        },
        chunks[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{Action, Step, DEFAULT_TITLE};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(selection: &Selection, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let styles = Styles::new();
        terminal
            .draw(|frame| render(frame, selection, DEFAULT_TITLE, Some("main"), &styles))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect::<String>()
    }

    fn step(selection: Selection, action: Action) -> Selection {
        match selection.update(action) {
            Step::Continue(s) | Step::Quit(s) => s,
        }
    }

    #[test]
    fn test_render_rows() {
        let mut s = Selection::new(vec!["dev".to_string(), "feature-x".to_string()]);
        s = step(s, Action::Down);
        s = step(s, Action::Toggle);

        let buffer = draw(&s, 60, 8);

        assert!(row(&buffer, 0).starts_with(" Select branches to delete:"));
        assert!(row(&buffer, 0).contains(" on main "));
        // Row 1 is the top border of the list
        assert!(row(&buffer, 2).starts_with("│  [ ] dev"));
        assert!(row(&buffer, 3).starts_with("│> [x] feature-x"));
        assert!(row(&buffer, 7).contains("q quit"));
        assert!(row(&buffer, 7).contains("1/2 selected"));
    }

    #[test]
    fn test_render_empty_list() {
        let buffer = draw(&Selection::new(Vec::new()), 60, 6);

        assert!(row(&buffer, 2).contains("(no other local branches)"));
        assert!(row(&buffer, 5).contains("0/0 selected"));
    }

    #[test]
    fn test_list_scrolls_to_cursor() {
        let names: Vec<String> = (0..10).map(|i| format!("branch-{i}")).collect();
        let mut s = Selection::new(names);
        for _ in 0..9 {
            s = step(s, Action::Down);
        }

        // 8 rows: header, border, 4 list rows, border, footer
        let buffer = draw(&s, 60, 8);

        assert!(row(&buffer, 2).starts_with("│  [ ] branch-6"));
        assert!(row(&buffer, 5).starts_with("│> [ ] branch-9"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let s = Selection::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(draw(&s, 30, 6), draw(&s, 30, 6));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let s = Selection::new(vec!["a".to_string()]);
        draw(&s, 3, 1);
        draw(&s, 1, 3);
    }
}
