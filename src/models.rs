//! Domain models that mirror the persisted shelf layout and get passed
//! throughout the TUI. The intent is that these types stay light-weight data
//! holders so other layers can focus on presentation and persistence logic.
//! The serde renames are load-bearing: the stored JSON keeps the camelCase
//! field names the shelf data has always been written with, so an existing
//! store stays readable after upgrades.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One entry on the author's public shelf. The struct mirrors one element of
/// the JSON array stored under the `books` key.
pub struct Book {
    /// Synthetic identifier, unique within the stored list and immutable once
    /// assigned. Edit/delete flows bubble the id back to the persistence
    /// layer, so it is kept even where the UI only needs display fields.
    pub id: String,
    /// Title displayed on the card and in the detail view.
    pub title: String,
    /// URL of the hosted reading platform page for this book. Stored as raw
    /// text and never validated, so drafts can hold placeholders.
    #[serde(rename = "wattpadUrl")]
    pub wattpad_url: String,
    /// Free-text blurb shown under the title.
    pub description: String,
    /// Cover image URL. Assigned when the record is created and carried along
    /// unchanged afterwards; the edit form never exposes it.
    #[serde(rename = "coverUrl")]
    pub cover_url: String,
}

impl fmt::Display for Book {
    /// Write the book title to any formatter. Display is implemented so the
    /// type plays nicely with Ratatui widgets that consume strings implicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl Book {
    /// Truncate the description so it fits on a card without overwhelming the
    /// grid. Cuts on a character boundary and appends an ellipsis only when
    /// something was actually dropped.
    pub fn short_description(&self, max_chars: usize) -> String {
        let trimmed = self.description.trim();
        if trimmed.chars().count() <= max_chars {
            return trimmed.to_string();
        }
        let mut cut: String = trimmed.chars().take(max_chars.saturating_sub(1)).collect();
        while cut.ends_with(' ') {
            cut.pop();
        }
        cut.push('\u{2026}');
        cut
    }

    /// Whether the record carries a usable reading link.
    pub fn has_link(&self) -> bool {
        !self.wattpad_url.trim().is_empty()
    }
}

/// Split a stored biography into displayable paragraphs. Paragraphs are
/// separated by blank lines (a newline, optional whitespace, another
/// newline); leading and trailing whitespace is stripped and empty chunks are
/// dropped, so the text renders as the paragraphs it was written as.
pub fn bio_paragraphs(bio: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in bio.lines() {
        if line.trim().is_empty() {
            if !current.trim().is_empty() {
                paragraphs.push(current.trim().to_string());
            }
            current.clear();
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(line.trim());
        }
    }
    if !current.trim().is_empty() {
        paragraphs.push(current.trim().to_string());
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            id: "book_test".to_string(),
            title: "Shadows of Desire".to_string(),
            wattpad_url: "https://www.wattpad.com/story/sample1".to_string(),
            description: "A dark romance.".to_string(),
            cover_url: "https://example.com/cover.jpg".to_string(),
        }
    }

    #[test]
    fn serialized_field_names_match_stored_layout() {
        let json = serde_json::to_string(&sample_book()).unwrap();
        assert!(json.contains("\"wattpadUrl\""));
        assert!(json.contains("\"coverUrl\""));
        assert!(!json.contains("wattpad_url"));
    }

    #[test]
    fn stored_layout_round_trips() {
        let raw = r#"{
            "id": "book1",
            "title": "Whispers in the Void",
            "wattpadUrl": "https://www.wattpad.com/story/sample3",
            "description": "When the line between reality and nightmare blurs.",
            "coverUrl": "https://source.unsplash.com/random/600x900/?dark,book,3"
        }"#;
        let book: Book = serde_json::from_str(raw).unwrap();
        assert_eq!(book.id, "book1");
        assert_eq!(book.wattpad_url, "https://www.wattpad.com/story/sample3");

        let back: Book = serde_json::from_str(&serde_json::to_string(&book).unwrap()).unwrap();
        assert_eq!(back, book);
    }

    #[test]
    fn short_description_keeps_small_text_intact() {
        let book = sample_book();
        assert_eq!(book.short_description(80), "A dark romance.");
    }

    #[test]
    fn short_description_truncates_with_ellipsis() {
        let mut book = sample_book();
        book.description = "An unreasonably long blurb that keeps going".to_string();
        let short = book.short_description(10);
        assert!(short.chars().count() <= 10);
        assert!(short.ends_with('\u{2026}'));
    }

    #[test]
    fn bio_paragraphs_split_on_blank_lines() {
        let bio = "First paragraph\nstill first.\n\nSecond paragraph.\n   \nThird.";
        let paragraphs = bio_paragraphs(bio);
        assert_eq!(
            paragraphs,
            vec![
                "First paragraph still first.".to_string(),
                "Second paragraph.".to_string(),
                "Third.".to_string(),
            ]
        );
    }

    #[test]
    fn bio_paragraphs_ignores_surrounding_whitespace() {
        assert!(bio_paragraphs("   \n\n  ").is_empty());
        assert_eq!(bio_paragraphs("Only one."), vec!["Only one.".to_string()]);
    }
}
