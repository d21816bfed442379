//! Error types for rasterkit-session

use thiserror::Error;

/// Errors that can occur while driving an edit session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Undo requested with no recorded operations
    #[error("nothing to reverse: undo history is empty")]
    EmptyHistory,

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Point operator error
    #[error("color error: {0}")]
    Color(#[from] rasterkit_color::ColorError),

    /// Filter operator error
    #[error("filter error: {0}")]
    Filter(#[from] rasterkit_filter::FilterError),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
