//! Persistence module split across logical submodules. The shelf keeps its
//! data in a tiny embedded key-value table: one text blob per concern, read
//! and written whole.

mod bio;
mod books;
mod connection;

use std::path::Path;

use anyhow::Result;
use rusqlite::Connection;

pub use books::{generate_book_id, generate_cover_url, FallbackReason, LoadOutcome};

/// Handle to the persisted shelf. Owns the storage connection and exposes the
/// book list operations plus the biography accessors, so every call site goes
/// through one place instead of re-reading the raw blobs ad hoc.
pub struct ShelfStore {
    conn: Connection,
}

impl ShelfStore {
    /// Open (and lazily create) the store at its default location inside the
    /// user's home directory.
    pub fn open() -> Result<Self> {
        Ok(Self {
            conn: connection::open_default()?,
        })
    }

    /// Open a store backed by an explicit database path. Used when the data
    /// should live somewhere other than the home directory, and by the
    /// integration tests.
    pub fn open_at(path: &Path) -> Result<Self> {
        Ok(Self {
            conn: connection::open_at(path)?,
        })
    }

    /// Open a store that lives only as long as the process. Handy for tests
    /// and throwaway sessions; nothing is written to disk.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: connection::open_in_memory()?,
        })
    }
}
