//! Branch selection state machine
//!
//! Holds the branch list, the cursor and the set of marked rows, and
//! applies one [`Action`] at a time. Every transition is pure: the
//! session is passed in by value and handed back in the returned [`Step`].

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Header line of the plain-text rendering
pub const DEFAULT_TITLE: &str = "Select branches to delete:";

/// Footer line naming the quit key
pub const QUIT_HINT: &str = "Press 'q' to quit";

/// Input events understood by the selection engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// End the session
    Quit,
    /// Move the cursor one row up
    Up,
    /// Move the cursor one row down
    Down,
    /// Mark or unmark the row under the cursor
    Toggle,
    /// Anything else
    Ignore,
}

impl Action {
    /// Translate a terminal key event into an action
    pub fn from_key(key: KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return Action::Ignore;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char('q'), _) => Action::Quit,
            (KeyCode::Char('k') | KeyCode::Up, _) => Action::Up,
            (KeyCode::Char('j') | KeyCode::Down, _) => Action::Down,
            (KeyCode::Char(' ') | KeyCode::Enter, _) => Action::Toggle,
            _ => Action::Ignore,
        }
    }
}

/// Outcome of applying an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Keep reading input with the updated session
    Continue(Selection),
    /// Session is over; state is returned untouched
    Quit(Selection),
}

/// Session state: branch names, cursor row and marked rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<String>,
    cursor: usize,
    selected: BTreeSet<usize>,
}

impl Selection {
    /// Start a session over the given branch names
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            cursor: 0,
            selected: BTreeSet::new(),
        }
    }

    /// Apply a single action
    pub fn update(mut self, action: Action) -> Step {
        match action {
            Action::Quit => return Step::Quit(self),
            Action::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Action::Down => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
            }
            Action::Toggle => {
                // Empty list has no row under the cursor
                if self.cursor < self.items.len() && !self.selected.remove(&self.cursor) {
                    self.selected.insert(self.cursor);
                }
            }
            Action::Ignore => {}
        }

        Step::Continue(self)
    }

    /// Branch names in display order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Current cursor row
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Marked row indices, ascending
    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Names of the marked branches, in list order
    pub fn selected_items(&self) -> Vec<&str> {
        self.selected
            .iter()
            .filter_map(|&i| self.items.get(i).map(String::as_str))
            .collect()
    }
}

/// Render the session as plain text
///
/// Each branch gets one line: a `>` when the cursor is on it (a space
/// otherwise), a `[x]`/`[ ]` checkbox, then the name.
pub fn render_text(selection: &Selection, title: &str) -> String {
    let mut out = format!("{}\n\n", title);

    for (i, name) in selection.items().iter().enumerate() {
        let cursor = if i == selection.cursor() { ">" } else { " " };
        let checked = if selection.is_selected(i) { "x" } else { " " };
        out.push_str(&format!("{} [{}] {}\n", cursor, checked, name));
    }

    out.push('\n');
    out.push_str(QUIT_HINT);
    out
}
