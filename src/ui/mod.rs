//! Ratatui front end split across logical submodules. `app` owns the state
//! machine and rendering, `forms` the modal input widgets, `screens` the
//! per-screen state, `terminal` the event loop, and `helpers` the shared
//! drawing utilities.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
