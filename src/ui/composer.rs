//! Message composer: a multi-line text area that hands trimmed text to the
//! session when the user sends.

use ratatui::crossterm::event::KeyEvent;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::{Input as TAInput, TextArea};

const PLACEHOLDER: &str = "Type a message…";
const MAX_VISIBLE_LINES: u16 = 5;

pub struct Composer {
    textarea: TextArea<'static>,
    disabled: bool,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        let mut composer = Self {
            textarea: TextArea::default(),
            disabled: false,
        };
        composer.restyle();
        composer
    }

    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn is_blank(&self) -> bool {
        self.text().trim().is_empty()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Rows the text area wants, excluding its borders.
    pub fn height(&self) -> u16 {
        let lines = u16::try_from(self.textarea.lines().len()).unwrap_or(u16::MAX);
        lines.clamp(1, MAX_VISIBLE_LINES)
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            self.disabled = disabled;
            self.restyle();
        }
    }

    /// Forwards an editing key to the text area. Ignored while disabled.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if self.disabled {
            return false;
        }
        self.textarea.input(TAInput::from(key))
    }

    pub fn insert_newline(&mut self) {
        if !self.disabled {
            self.textarea.insert_newline();
        }
    }

    pub fn insert_str(&mut self, text: &str) -> bool {
        if self.disabled {
            return false;
        }
        self.textarea.insert_str(text)
    }

    /// Returns the trimmed text and empties the composer. Blank text is left
    /// in place and nothing is returned.
    pub fn take_submission(&mut self) -> Option<String> {
        if self.disabled {
            return None;
        }

        let value = self.text().trim().to_string();
        if value.is_empty() {
            return None;
        }

        self.textarea = TextArea::default();
        self.restyle();
        Some(value)
    }

    pub fn widget(&self) -> &TextArea<'static> {
        &self.textarea
    }

    fn restyle(&mut self) {
        let (border, text, title) = if self.disabled {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
                "Waiting for reply…",
            )
        } else {
            (
                Style::default().fg(Color::Cyan),
                Style::default(),
                "Message",
            )
        };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title),
        );
        self.textarea.set_style(text);
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.set_placeholder_text(PLACEHOLDER);
        self.textarea
            .set_placeholder_style(Style::default().fg(Color::DarkGray));
        let cursor = if self.disabled {
            Style::default()
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        };
        self.textarea.set_cursor_style(cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn take_submission_trims_and_clears() {
        let mut composer = Composer::new();
        composer.insert_str("  hello  ");
        assert_eq!(composer.take_submission().as_deref(), Some("hello"));
        assert_eq!(composer.text(), "");
    }

    #[test]
    fn blank_text_is_not_submitted_and_is_kept() {
        let mut composer = Composer::new();
        composer.insert_str("   ");
        assert_eq!(composer.take_submission(), None);
        assert_eq!(composer.text(), "   ");
        assert!(composer.is_blank());
    }

    #[test]
    fn typed_keys_and_newlines_build_multiline_text() {
        let mut composer = Composer::new();
        composer.input(key(KeyCode::Char('h')));
        composer.input(key(KeyCode::Char('i')));
        composer.insert_newline();
        composer.input(key(KeyCode::Char('!')));
        assert_eq!(composer.text(), "hi\n!");
        assert_eq!(composer.height(), 2);
    }

    #[test]
    fn disabled_composer_ignores_input_and_submission() {
        let mut composer = Composer::new();
        composer.insert_str("draft");
        composer.set_disabled(true);

        assert!(!composer.input(key(KeyCode::Char('x'))));
        composer.insert_newline();
        assert_eq!(composer.take_submission(), None);
        assert_eq!(composer.text(), "draft");

        composer.set_disabled(false);
        assert_eq!(composer.take_submission().as_deref(), Some("draft"));
    }

    #[test]
    fn height_is_capped() {
        let mut composer = Composer::new();
        composer.insert_str("1\n2\n3\n4\n5\n6\n7");
        assert_eq!(composer.height(), MAX_VISIBLE_LINES);
    }
}
