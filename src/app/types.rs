//! Small UI state types owned by [`super::App`].

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    List,
    Detail,
}

/// Which list a page request was made for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Feed,
    Detail,
}

/// The single-line search box above the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    focused: bool,
}

impl SearchInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push(&mut self, c: char) {
        if !c.is_control() {
            self.text.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    /// Remove the last whitespace-delimited word (Ctrl+W).
    pub fn delete_word(&mut self) {
        let trimmed = self.text.trim_end().len();
        self.text.truncate(trimmed);
        let start = self
            .text
            .rfind(char::is_whitespace)
            .map(|i| i + 1)
            .unwrap_or(0);
        self.text.truncate(start);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
