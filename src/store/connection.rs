use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rusqlite::{params, Connection, OptionalExtension};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".author-shelf-manager";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "shelf.sqlite";

/// Open the store at its default home-directory location, creating the data
/// directory and the schema on first use.
pub(crate) fn open_default() -> Result<Connection> {
    open_at(&default_db_path()?)
}

/// Open the store at an explicit path, creating parent directories and the
/// schema as needed.
pub(crate) fn open_at(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let conn = Connection::open(path).context("failed to open SQLite database")?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Open a throwaway store with no backing file.
pub(crate) fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    init_schema(&conn)?;
    Ok(conn)
}

/// The entire schema: one key-value table holding a text blob per concern.
/// Each key is read and written whole; there is nothing relational about the
/// data, the table is just durable string storage.
fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS storage (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )
    .context("failed to create storage table")?;
    Ok(())
}

/// Read the blob stored under `key`, if any.
pub(crate) fn read_value(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM storage WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .context("failed to read stored value")
}

/// Write (or overwrite) the blob stored under `key`.
pub(crate) fn write_value(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO storage (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )
    .context("failed to write stored value")?;
    Ok(())
}

/// Resolve the absolute path to the SQLite database inside the user's home.
fn default_db_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}
