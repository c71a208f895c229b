use crate::models::Book;

/// State for the drill-in view of a single book: the full description and
/// the reading link, the parts a grid card has no room for.
pub(crate) struct BookDetailScreen {
    pub(crate) book: Book,
}

impl BookDetailScreen {
    pub(crate) fn new(book: Book) -> Self {
        Self { book }
    }

    /// Re-sync with a freshly loaded list after a mutation. Returns `false`
    /// when the book no longer exists, in which case the caller should leave
    /// the detail view.
    pub(crate) fn refresh(&mut self, books: &[Book]) -> bool {
        match books.iter().find(|b| b.id == self.book.id) {
            Some(book) => {
                self.book = book.clone();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            wattpad_url: String::new(),
            description: String::new(),
            cover_url: String::new(),
        }
    }

    #[test]
    fn refresh_picks_up_edits_to_the_same_record() {
        let mut screen = BookDetailScreen::new(book("book1", "Old Title"));
        let updated = vec![book("book1", "New Title"), book("book2", "Other")];
        assert!(screen.refresh(&updated));
        assert_eq!(screen.book.title, "New Title");
    }

    #[test]
    fn refresh_reports_a_vanished_record() {
        let mut screen = BookDetailScreen::new(book("book1", "Gone"));
        assert!(!screen.refresh(&[book("book2", "Other")]));
    }
}
