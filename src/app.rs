//! Application shell and event loop
//!
//! Owns the terminal for the duration of the session. Every accepted
//! event is applied to the selection and followed by a full redraw.

use std::io;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::error::RuntimeError;
use crate::selection::{render_text, Action, Selection, Step};
use crate::ui::{self, Styles};

/// Main application state
#[derive(Debug)]
pub struct App {
    selection: Selection,
    title: String,
    current_branch: Option<String>,
    styles: Styles,
}

impl App {
    /// Create a new App instance
    pub fn new(selection: Selection, title: String, current_branch: Option<String>) -> Self {
        Self {
            selection,
            title,
            current_branch,
            styles: Styles::new(),
        }
    }

    /// Run the interactive session and return the final selection
    pub fn run(self) -> Result<Selection, RuntimeError> {
        // Setup terminal
        enable_raw_mode().map_err(RuntimeError::Setup)?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(RuntimeError::Setup(e));
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(RuntimeError::Setup(e));
            }
        };

        tracing::info!(branches = self.selection.len(), "session started");

        let result = self.drive(&mut terminal, std::iter::repeat_with(event::read));
        let restored = restore(&mut terminal);

        // A loop failure is the more useful report
        let selection = result?;
        restored?;

        tracing::info!(selected = selection.selected().len(), "session ended");
        Ok(selection)
    }

    /// Draw, then apply events one at a time until quit or end of input
    fn drive<B, I>(self, terminal: &mut Terminal<B>, events: I) -> Result<Selection, RuntimeError>
    where
        B: Backend,
        I: IntoIterator<Item = io::Result<Event>>,
    {
        let Self {
            mut selection,
            title,
            current_branch,
            styles,
        } = self;

        let draw = |terminal: &mut Terminal<B>, selection: &Selection| {
            terminal
                .draw(|frame| {
                    ui::render(frame, selection, &title, current_branch.as_deref(), &styles)
                })
                .map(|_| ())
                .map_err(RuntimeError::Draw)
        };

        draw(terminal, &selection)?;

        for event in events {
            let action = match event.map_err(RuntimeError::Input)? {
                Event::Key(key) => Action::from_key(key),
                Event::Resize(..) => {
                    draw(terminal, &selection)?;
                    continue;
                }
                _ => continue,
            };

            tracing::debug!(?action, cursor = selection.cursor(), "key");

            selection = match selection.update(action) {
                Step::Continue(selection) => selection,
                Step::Quit(selection) => return Ok(selection),
            };

            tracing::trace!("view:\n{}", render_text(&selection, &title));
            draw(terminal, &selection)?;
        }

        Ok(selection)
    }
}

/// Leave raw mode and the alternate screen
///
/// Every step runs even when an earlier one fails; the first failure
/// is reported.
fn restore<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> Result<(), RuntimeError> {
    let mut steps = Restore::default();
    steps.run(disable_raw_mode());
    steps.run(execute!(terminal.backend_mut(), LeaveAlternateScreen));
    steps.run(terminal.show_cursor());
    steps.finish()
}

/// Outcome of the teardown steps, keeping the first error
#[derive(Debug, Default)]
struct Restore {
    first_error: Option<io::Error>,
}

impl Restore {
    fn run(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "terminal restore step failed");
            self.first_error.get_or_insert(e);
        }
    }

    fn finish(self) -> Result<(), RuntimeError> {
        match self.first_error {
            Some(e) => Err(RuntimeError::Teardown(e)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn app(names: &[&str]) -> App {
        let items = names.iter().map(|s| s.to_string()).collect();
        App::new(Selection::new(items), "Select branches to delete:".to_string(), None)
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_drive_until_quit() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let events = vec![
            key(KeyCode::Char('j')),
            key(KeyCode::Char(' ')),
            key(KeyCode::Char('q')),
            // Never reached
            key(KeyCode::Char('k')),
        ];

        let selection = app(&["main", "dev", "feature-x"])
            .drive(&mut terminal, events)
            .unwrap();

        assert_eq!(selection.cursor(), 1);
        assert_eq!(selection.selected_items(), vec!["dev"]);
        assert!(screen(&terminal).contains("> [x] dev"));
    }

    #[test]
    fn test_ignores_unknown_events() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let events = vec![
            key(KeyCode::Char('x')),
            Ok(Event::FocusGained),
            Ok(Event::Resize(60, 10)),
            key(KeyCode::Down),
        ];

        let selection = app(&["a", "b"]).drive(&mut terminal, events).unwrap();
        assert_eq!(selection.cursor(), 1);
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn test_input_error_is_reported() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let events = vec![Err(io::Error::other("tty gone"))];

        let err = app(&["a"]).drive(&mut terminal, events).unwrap_err();
        assert!(matches!(err, RuntimeError::Input(_)));
    }

    #[test]
    fn test_initial_draw_before_input() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let selection = app(&[]).drive(&mut terminal, Vec::new()).unwrap();

        assert!(selection.is_empty());
        assert!(screen(&terminal).contains("Select branches to delete:"));
        assert!(screen(&terminal).contains("(no other local branches)"));
    }

    #[test]
    fn test_restore_keeps_first_error() {
        let mut steps = Restore::default();
        steps.run(Err(io::Error::other("raw mode")));
        steps.run(Ok(()));
        steps.run(Err(io::Error::other("cursor")));

        match steps.finish() {
            Err(RuntimeError::Teardown(e)) => assert_eq!(e.to_string(), "raw mode"),
            other => panic!("unexpected teardown result: {other:?}"),
        }
    }

    #[test]
    fn test_restore_all_ok() {
        let mut steps = Restore::default();
        steps.run(Ok(()));
        steps.run(Ok(()));
        assert!(steps.finish().is_ok());
    }
}
