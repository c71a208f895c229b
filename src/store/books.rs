//! Book list operations over the persisted blob. Every operation here is a
//! stateless transform: read the whole list, apply one change, write the
//! whole list back. There is no incremental patching, so each call sees the
//! latest stored state even when several UI flows mutate in one session.

use anyhow::Result;
use thiserror::Error;
use uuid::Uuid;

use crate::models::Book;

use super::{connection, ShelfStore};

/// Storage key holding the JSON array of book records.
const BOOKS_KEY: &str = "books";

/// Why `load_books` substituted the built-in seed list for stored data.
#[derive(Debug, Error)]
pub enum FallbackReason {
    /// Nothing has ever been stored under the books key.
    #[error("no book list stored yet")]
    Missing,
    /// A value exists but is not a valid JSON array of book records.
    #[error("stored book list is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result of reading the stored book list. The distinction lets tests and
/// diagnostics tell real data from the seed substitute; ordinary callers
/// collapse it with [`LoadOutcome::into_books`] and behave identically in
/// both cases, which keeps the shelf renderable no matter what is on disk.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The stored list parsed cleanly.
    Persisted(Vec<Book>),
    /// The stored value was absent or unreadable; `books` is the seed list.
    Fallback {
        books: Vec<Book>,
        reason: FallbackReason,
    },
}

impl LoadOutcome {
    /// The ordered list, regardless of where it came from.
    pub fn into_books(self) -> Vec<Book> {
        match self {
            LoadOutcome::Persisted(books) => books,
            LoadOutcome::Fallback { books, .. } => books,
        }
    }

    /// Borrowed view of the list.
    pub fn books(&self) -> &[Book] {
        match self {
            LoadOutcome::Persisted(books) => books,
            LoadOutcome::Fallback { books, .. } => books,
        }
    }

    /// Whether the seed list was substituted for stored data.
    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadOutcome::Fallback { .. })
    }
}

impl ShelfStore {
    /// Load the ordered book list. Absent or unparsable stored data yields
    /// the built-in seed list; nothing is written back in that case, and no
    /// error escapes for it. Only a failure of the storage medium itself
    /// propagates.
    pub fn load_books(&self) -> Result<Vec<Book>> {
        Ok(self.load_books_outcome()?.into_books())
    }

    /// Load the book list along with whether it came from storage or from
    /// the seed fallback.
    pub fn load_books_outcome(&self) -> Result<LoadOutcome> {
        let outcome = match connection::read_value(&self.conn, BOOKS_KEY)? {
            None => LoadOutcome::Fallback {
                books: seed_books(),
                reason: FallbackReason::Missing,
            },
            Some(raw) => match serde_json::from_str::<Vec<Book>>(&raw) {
                Ok(books) => LoadOutcome::Persisted(books),
                Err(err) => LoadOutcome::Fallback {
                    books: seed_books(),
                    reason: FallbackReason::Malformed(err),
                },
            },
        };
        Ok(outcome)
    }

    /// Insert or replace one record and persist the whole list. An empty id
    /// marks a new record and gets a freshly generated identifier first.
    /// When the id matches an existing record, that record is replaced in
    /// place (same position, every field except the id itself taken from the
    /// incoming record); otherwise the record is appended. Afterwards the
    /// list holds at most one record per id. The stored record is echoed
    /// back so the caller can pick up the assigned id without re-querying.
    pub fn upsert_book(&self, book: Book) -> Result<Book> {
        let mut record = book;
        if record.id.trim().is_empty() {
            record.id = generate_book_id();
        }

        let mut books = self.load_books_outcome()?.into_books();
        match books.iter().position(|b| b.id == record.id) {
            Some(index) => books[index] = record.clone(),
            None => books.push(record.clone()),
        }

        self.persist_books(&books)?;
        Ok(record)
    }

    /// Remove every record with the given id and persist the result.
    /// Removing an id that is not present is a no-op, not an error: the
    /// caller has already confirmed the deletion and there is nothing useful
    /// to report about an entry that is already gone.
    pub fn remove_book(&self, id: &str) -> Result<()> {
        let mut books = self.load_books_outcome()?.into_books();
        books.retain(|b| b.id != id);
        self.persist_books(&books)
    }

    /// Serialize and write the full list under the books key.
    fn persist_books(&self, books: &[Book]) -> Result<()> {
        let raw = serde_json::to_string(books)?;
        connection::write_value(&self.conn, BOOKS_KEY, &raw)
    }
}

/// Generate an identifier for a new record: the familiar `book_` prefix over
/// a random UUID, so ids stay unique even when records are created in quick
/// succession.
pub fn generate_book_id() -> String {
    format!("book_{}", Uuid::new_v4().simple())
}

/// Build a cover image URL for a newly created record. Covers come from a
/// themed placeholder service; the trailing number varies the image per
/// record.
pub fn generate_cover_url() -> String {
    let variant = Uuid::new_v4().as_u128() % 100;
    format!("https://source.unsplash.com/random/600x900/?dark,book,{variant}")
}

/// The fixed fallback shelf shown until the user stores something: three
/// sample records so the page never renders empty.
pub(crate) fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: "book1".to_string(),
            title: "Shadows of Desire".to_string(),
            wattpad_url: "https://www.wattpad.com/story/sample1".to_string(),
            description: "A dark romance that explores the shadows within us all. When Eliza \
                          meets the enigmatic Adrian, she's drawn into a world of passion and \
                          danger that will test the limits of her sanity."
                .to_string(),
            cover_url: "https://source.unsplash.com/random/600x900/?dark,book,1".to_string(),
        },
        Book {
            id: "book2".to_string(),
            title: "The Philosophy of Pain".to_string(),
            wattpad_url: "https://www.wattpad.com/story/sample2".to_string(),
            description: "A philosophical journey through the mind of a woman who discovers \
                          that her greatest suffering may be the key to her ultimate liberation."
                .to_string(),
            cover_url: "https://source.unsplash.com/random/600x900/?dark,book,2".to_string(),
        },
        Book {
            id: "book3".to_string(),
            title: "Whispers in the Void".to_string(),
            wattpad_url: "https://www.wattpad.com/story/sample3".to_string(),
            description: "When the line between reality and nightmare blurs, Sophia must \
                          confront the darkness of her past to save her future."
                .to_string(),
            cover_url: "https://source.unsplash.com/random/600x900/?dark,book,3".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ShelfStore {
        ShelfStore::open_in_memory().expect("in-memory store")
    }

    fn new_book(id: &str, title: &str) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            wattpad_url: format!("https://www.wattpad.com/story/{title}"),
            description: format!("About {title}."),
            cover_url: generate_cover_url(),
        }
    }

    #[test]
    fn load_on_empty_store_returns_seed_list() {
        let store = store();
        let books = store.load_books().unwrap();
        let ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["book1", "book2", "book3"]);
    }

    #[test]
    fn load_on_empty_store_reports_fallback_without_writing_back() {
        let store = store();
        let outcome = store.load_books_outcome().unwrap();
        assert!(outcome.is_fallback());
        assert!(matches!(
            outcome,
            LoadOutcome::Fallback {
                reason: FallbackReason::Missing,
                ..
            }
        ));

        // The seed substitution must not touch storage.
        let raw = connection::read_value(&store.conn, BOOKS_KEY).unwrap();
        assert!(raw.is_none());
    }

    #[test]
    fn load_on_malformed_value_returns_seed_list() {
        let store = store();
        connection::write_value(&store.conn, BOOKS_KEY, "{not json at all").unwrap();

        let outcome = store.load_books_outcome().unwrap();
        assert!(matches!(
            outcome,
            LoadOutcome::Fallback {
                reason: FallbackReason::Malformed(_),
                ..
            }
        ));
        assert_eq!(outcome.books().len(), 3);
        assert_eq!(outcome.books()[0].id, "book1");
    }

    #[test]
    fn upsert_with_unknown_id_appends_at_the_end() {
        let store = store();
        let book = new_book("book_fresh", "Fresh Ink");
        store.upsert_book(book.clone()).unwrap();

        let books = store.load_books().unwrap();
        assert_eq!(books.len(), 4);
        assert_eq!(books[3], book);
    }

    #[test]
    fn upsert_with_known_id_replaces_in_place() {
        let store = store();
        let mut replacement = new_book("book2", "The Philosophy of Pain, Revised");
        replacement.description = "New edition.".to_string();
        store.upsert_book(replacement.clone()).unwrap();

        let books = store.load_books().unwrap();
        assert_eq!(books.len(), 3);
        assert_eq!(books[1], replacement);
        // Neighbors untouched.
        assert_eq!(books[0].title, "Shadows of Desire");
        assert_eq!(books[2].title, "Whispers in the Void");
    }

    #[test]
    fn upsert_with_empty_id_assigns_a_fresh_one() {
        let store = store();
        let stored = store.upsert_book(new_book("", "Untitled Draft")).unwrap();
        assert!(!stored.id.is_empty());
        assert!(stored.id.starts_with("book_"));

        let books = store.load_books().unwrap();
        assert_eq!(books.len(), 4);
        assert_eq!(books[3].id, stored.id);
    }

    #[test]
    fn upsert_never_duplicates_an_id() {
        let store = store();
        let book = new_book("book_once", "Only Once");
        store.upsert_book(book.clone()).unwrap();
        store.upsert_book(book).unwrap();

        let books = store.load_books().unwrap();
        let matches = books.iter().filter(|b| b.id == "book_once").count();
        assert_eq!(matches, 1);
    }

    #[test]
    fn remove_excludes_every_record_with_the_id() {
        let store = store();
        store.remove_book("book2").unwrap();

        let books = store.load_books().unwrap();
        let ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["book1", "book3"]);
    }

    #[test]
    fn remove_of_absent_id_is_a_no_op() {
        let store = store();
        let before = store.load_books().unwrap();
        store.remove_book("book_never_existed").unwrap();
        let after = store.load_books().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn load_is_idempotent_between_mutations() {
        let store = store();
        store.upsert_book(new_book("", "Stable")).unwrap();
        let first = store.load_books().unwrap();
        let second = store.load_books().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn add_then_remove_returns_to_seed_content() {
        let store = store();
        let seed = store.load_books().unwrap();

        let stored = store.upsert_book(new_book("", "New Title")).unwrap();
        assert_eq!(store.load_books().unwrap().len(), 4);

        store.remove_book(&stored.id).unwrap();
        assert_eq!(store.load_books().unwrap(), seed);
    }

    #[test]
    fn generated_ids_are_prefixed_and_distinct() {
        let first = generate_book_id();
        let second = generate_book_id();
        assert!(first.starts_with("book_"));
        assert!(second.starts_with("book_"));
        assert_ne!(first, second);
    }

    #[test]
    fn generated_cover_urls_point_at_the_placeholder_service() {
        let url = generate_cover_url();
        assert!(url.starts_with("https://source.unsplash.com/random/600x900/?dark,book,"));
    }
}
