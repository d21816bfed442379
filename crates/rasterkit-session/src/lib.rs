//! rasterkit-session - Undoable edit sessions
//!
//! Orchestrates the rasterkit operator crates behind a single session
//! object: typed operation requests, pre-operation undo snapshots, and
//! read-only views for rendering images, histograms, and projections.

mod error;
pub mod history;
mod session;

pub use error::{SessionError, SessionResult};
pub use history::UndoStack;
pub use session::{EditSession, Operation, Source};
