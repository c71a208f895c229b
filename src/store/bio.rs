//! Biography persistence: a single text key alongside the book list. The
//! value is the raw paragraph text (paragraphs separated by blank lines);
//! rendering splits it with [`crate::models::bio_paragraphs`].

use anyhow::Result;

use super::{connection, ShelfStore};

/// Storage key holding the biography text.
const BIO_KEY: &str = "authorBio";

/// Fallback biography shown until the author writes their own.
const DEFAULT_BIO: &str = "\
I write the stories that keep you up at night, about the shadows people \
carry and the strange comfort of facing them on the page.

My work lives on Wattpad, where every chapter goes up as soon as the ink is \
dry. The shelf on this page is always the current one.

When I am not writing I am reading, and when I am not reading I am taking \
notes for the next book.";

impl ShelfStore {
    /// Load the biography text, falling back to the built-in default when
    /// nothing has been stored yet.
    pub fn load_bio(&self) -> Result<String> {
        let bio = connection::read_value(&self.conn, BIO_KEY)?
            .unwrap_or_else(|| DEFAULT_BIO.to_string());
        Ok(bio)
    }

    /// Store the biography text, trimmed. An all-whitespace submission is
    /// ignored so a stray save cannot blank the page.
    pub fn save_bio(&self, text: &str) -> Result<()> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        connection::write_value(&self.conn, BIO_KEY, trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bio_paragraphs;

    #[test]
    fn load_on_empty_store_returns_default_bio() {
        let store = ShelfStore::open_in_memory().unwrap();
        let bio = store.load_bio().unwrap();
        assert_eq!(bio, DEFAULT_BIO);
        assert_eq!(bio_paragraphs(&bio).len(), 3);
    }

    #[test]
    fn save_then_load_round_trips_trimmed_text() {
        let store = ShelfStore::open_in_memory().unwrap();
        store.save_bio("  A new bio.\n\nSecond paragraph.  \n").unwrap();
        assert_eq!(
            store.load_bio().unwrap(),
            "A new bio.\n\nSecond paragraph."
        );
    }

    #[test]
    fn whitespace_only_save_is_ignored() {
        let store = ShelfStore::open_in_memory().unwrap();
        store.save_bio("Kept.").unwrap();
        store.save_bio("   \n\n  ").unwrap();
        assert_eq!(store.load_bio().unwrap(), "Kept.");
    }
}
