//! Undo history
//!
//! A LIFO stack of raster snapshots. `Raster` is immutable behind its
//! `Arc`, so a pushed clone is a true snapshot: nothing the session does
//! to the current buffer afterwards can show through it.

use crate::{SessionError, SessionResult};
use rasterkit_core::Raster;

/// Stack of pre-operation snapshots, most recent on top
#[derive(Debug, Default)]
pub struct UndoStack {
    snapshots: Vec<Raster>,
}

impl UndoStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot on top of the stack.
    pub fn push(&mut self, raster: Raster) {
        self.snapshots.push(raster);
    }

    /// Remove and return the most recent snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyHistory`] when nothing was recorded.
    pub fn pop(&mut self) -> SessionResult<Raster> {
        self.snapshots.pop().ok_or(SessionError::EmptyHistory)
    }

    /// Check whether at least one snapshot exists.
    pub fn can_reverse(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// Get the number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Discard all snapshots.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_core::{ChannelMode, Raster};

    fn gray(v: u8) -> Raster {
        Raster::from_samples(1, 1, ChannelMode::Gray, vec![v]).unwrap()
    }

    #[test]
    fn lifo_order() {
        let mut stack = UndoStack::new();
        stack.push(gray(1));
        stack.push(gray(2));
        assert_eq!(stack.pop().unwrap().samples(), &[2]);
        assert_eq!(stack.pop().unwrap().samples(), &[1]);
        assert!(!stack.can_reverse());
        assert!(matches!(stack.pop(), Err(SessionError::EmptyHistory)));
    }
}
