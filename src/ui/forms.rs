use anyhow::{anyhow, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::Book;

/// Internal representation of the add/edit book form fields. The cover URL is
/// deliberately absent: it is assigned when a record is created and the form
/// never exposes it.
#[derive(Default, Clone)]
pub(crate) struct BookForm {
    pub(crate) title: String,
    pub(crate) link: String,
    pub(crate) description: String,
    pub(crate) active: BookField,
    pub(crate) error: Option<String>,
}

/// Fields available within the book form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum BookField {
    #[default]
    Title,
    Link,
    Description,
}

impl BookForm {
    /// Populate the form from an existing record when editing.
    pub(crate) fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            link: book.wattpad_url.clone(),
            description: book.description.clone(),
            active: BookField::Title,
            error: None,
        }
    }

    /// Advance focus to the next field, wrapping around.
    pub(crate) fn next_field(&mut self) {
        self.active = match self.active {
            BookField::Title => BookField::Link,
            BookField::Link => BookField::Description,
            BookField::Description => BookField::Title,
        };
    }

    /// Move focus to the previous field, wrapping around.
    pub(crate) fn prev_field(&mut self) {
        self.active = match self.active {
            BookField::Title => BookField::Description,
            BookField::Link => BookField::Title,
            BookField::Description => BookField::Link,
        };
    }

    /// Append a character to the active field. Control characters are
    /// rejected so stray escape sequences cannot end up in the record.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.active_value_mut().push(ch);
        true
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        self.active_value_mut().pop();
    }

    /// Validate the inputs and return trimmed values ready for persistence:
    /// `(title, link, description)`. Only the title is required; the link and
    /// description are stored as free text without validation.
    pub(crate) fn parse_inputs(&self) -> Result<(String, String, String)> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(anyhow!("Title is required."));
        }
        Ok((
            title.to_string(),
            self.link.trim().to_string(),
            self.description.trim().to_string(),
        ))
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field_name: &str, field: BookField) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            if field == BookField::Title {
                "<required>".to_string()
            } else {
                "<optional>".to_string()
            }
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    /// Return the character count for the requested field.
    pub(crate) fn value_len(&self, field: BookField) -> usize {
        self.value(field).chars().count()
    }

    fn value(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Link => &self.link,
            BookField::Description => &self.description,
        }
    }

    fn active_value_mut(&mut self) -> &mut String {
        match self.active {
            BookField::Title => &mut self.title,
            BookField::Link => &mut self.link,
            BookField::Description => &mut self.description,
        }
    }
}

/// Pending deletion awaiting the user's yes/no answer.
#[derive(Clone)]
pub(crate) struct ConfirmBookDelete {
    pub(crate) id: String,
    pub(crate) title: String,
}

impl From<Book> for ConfirmBookDelete {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
        }
    }
}

/// Multi-line editor for the biography. Unlike the single-line book form,
/// Enter inserts a paragraph break here, so submission happens on Ctrl+S.
/// Editing is append-only at the tail, which keeps the cursor math trivial.
#[derive(Clone, Default)]
pub(crate) struct BioEditor {
    pub(crate) text: String,
}

impl BioEditor {
    /// Seed the editor with the currently stored biography.
    pub(crate) fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.text.push(ch);
        true
    }

    pub(crate) fn newline(&mut self) {
        self.text.push('\n');
    }

    pub(crate) fn backspace(&mut self) {
        self.text.pop();
    }

    /// Position of the append cursor as `(row, column)` in character cells.
    pub(crate) fn cursor(&self) -> (u16, u16) {
        let row = self.text.matches('\n').count();
        let col = self
            .text
            .rsplit('\n')
            .next()
            .map(|line| line.chars().count())
            .unwrap_or(0);
        (row as u16, col as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_form_requires_a_title() {
        let mut form = BookForm::default();
        assert!(form.parse_inputs().is_err());

        form.title = "  Untitled Draft  ".to_string();
        let (title, link, description) = form.parse_inputs().unwrap();
        assert_eq!(title, "Untitled Draft");
        assert!(link.is_empty());
        assert!(description.is_empty());
    }

    #[test]
    fn book_form_prefills_from_record() {
        let book = Book {
            id: "book1".to_string(),
            title: "Shadows of Desire".to_string(),
            wattpad_url: "https://www.wattpad.com/story/sample1".to_string(),
            description: "A dark romance.".to_string(),
            cover_url: "ignored-by-the-form".to_string(),
        };
        let form = BookForm::from_book(&book);
        assert_eq!(form.title, book.title);
        assert_eq!(form.link, book.wattpad_url);
        assert_eq!(form.description, book.description);
    }

    #[test]
    fn book_form_field_cycle_wraps_both_ways() {
        let mut form = BookForm::default();
        form.next_field();
        assert_eq!(form.active, BookField::Link);
        form.next_field();
        form.next_field();
        assert_eq!(form.active, BookField::Title);
        form.prev_field();
        assert_eq!(form.active, BookField::Description);
    }

    #[test]
    fn book_form_rejects_control_characters() {
        let mut form = BookForm::default();
        assert!(!form.push_char('\u{1b}'));
        assert!(form.push_char('S'));
        assert_eq!(form.title, "S");
        form.backspace();
        assert!(form.title.is_empty());
    }

    #[test]
    fn bio_editor_tracks_the_append_cursor() {
        let mut editor = BioEditor::from_text("First");
        assert_eq!(editor.cursor(), (0, 5));

        editor.newline();
        editor.push_char('S');
        assert_eq!(editor.cursor(), (1, 1));

        editor.backspace();
        editor.backspace();
        assert_eq!(editor.cursor(), (0, 5));
    }
}
