//! Binary entry point that glues the storage-backed shelf to the TUI.
//! Summarizing the bootstrapping pipeline here keeps the intent obvious when
//! revisiting the code: we bring up the key-value store, hydrate the initial
//! shelf and biography, and drive the Ratatui event loop until the user exits.
use author_shelf_manager::{run_app, App, ShelfStore};

/// Initialize persistence, load cached data, and launch the Ratatui event loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for example
/// the user removing the writable data directory) to the terminal instead of
/// crashing silently.
fn main() -> anyhow::Result<()> {
    let store = ShelfStore::open()?;
    let books = store.load_books()?;
    let bio = store.load_bio()?;

    let mut app = App::new(store, books, bio);
    run_app(&mut app)
}
