//! Edit session
//!
//! Owns the original and current buffers, dispatches operation requests
//! to the operator crates, and sequences the undo history. Operators
//! validate their own parameters; the session pushes an undo snapshot
//! only after an operation has produced a result, so a rejected request
//! consumes no undo slot and leaves the session untouched.

use crate::history::UndoStack;
use crate::{SessionError, SessionResult};
use rasterkit_core::{Axis, HISTOGRAM_BINS, Raster};
use rasterkit_filter::EdgeOperator;

/// A requested image transformation
///
/// Numeric parameters arrive unit-scaled (a percentage slider divided by
/// 100 for the factors); the operators reject values outside their
/// declared domain.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Luma grayscale conversion
    Grayscale,
    /// Channel inversion
    Negative,
    /// Brightness scaling, `factor >= 0`
    Brightness { factor: f64 },
    /// Contrast scaling around mid-gray, `factor >= 0`
    Contrast { factor: f64 },
    /// Global threshold to pure black/white
    Binarize { threshold: u8 },
    /// Box averaging filter, odd `kernel_size`
    Average { kernel_size: u32 },
    /// Unsharp-mask sharpening, odd `kernel_size`, `intensity >= 0`
    Sharpen { kernel_size: u32, intensity: f64 },
    /// Gaussian blur, odd `kernel_size`, `sigma > 0`
    Gaussian { kernel_size: u32, sigma: f64 },
    /// Gradient edge detection
    EdgeDetect(EdgeOperator),
}

/// Which buffer an analysis request reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The buffer as loaded
    Original,
    /// The buffer with all applied operations
    Current,
}

/// An undoable image editing session
///
/// # Example
///
/// ```
/// use rasterkit_core::{ChannelMode, Raster};
/// use rasterkit_session::{EditSession, Operation};
///
/// let image = Raster::from_samples(1, 1, ChannelMode::Rgb, vec![128, 128, 128]).unwrap();
/// let mut session = EditSession::new(image);
/// session.apply(&Operation::Brightness { factor: 0.5 }).unwrap();
/// assert_eq!(session.current().get_rgb(0, 0), Some((64, 64, 64)));
/// session.undo().unwrap();
/// assert_eq!(session.current().get_rgb(0, 0), Some((128, 128, 128)));
/// ```
#[derive(Debug)]
pub struct EditSession {
    original: Raster,
    current: Raster,
    history: UndoStack,
}

impl EditSession {
    /// Start a session over a decoded image.
    pub fn new(image: Raster) -> Self {
        EditSession {
            original: image.clone(),
            current: image,
            history: UndoStack::new(),
        }
    }

    /// Replace the session contents with a newly decoded image.
    ///
    /// Both buffers are reset and the undo history is discarded.
    pub fn load(&mut self, image: Raster) {
        self.original = image.clone();
        self.current = image;
        self.history.clear();
    }

    /// Apply an operation to the current buffer.
    ///
    /// On success the previous buffer is recorded for undo and replaced
    /// by the operator's output. On failure the session is unchanged:
    /// validation happens before the snapshot is pushed.
    ///
    /// # Errors
    ///
    /// Propagates the operator's validation error (bad kernel size,
    /// negative factor, malformed custom matrix, ...).
    pub fn apply(&mut self, operation: &Operation) -> SessionResult<()> {
        let next = self.run(operation)?;
        self.history.push(self.current.clone());
        self.current = next;
        Ok(())
    }

    fn run(&self, operation: &Operation) -> SessionResult<Raster> {
        let src = &self.current;
        let next = match operation {
            Operation::Grayscale => rasterkit_color::to_grayscale(src)?,
            Operation::Negative => rasterkit_color::to_negative(src)?,
            Operation::Brightness { factor } => {
                rasterkit_filter::adjust_brightness(src, *factor)?
            }
            Operation::Contrast { factor } => rasterkit_filter::adjust_contrast(src, *factor)?,
            Operation::Binarize { threshold } => rasterkit_color::binarize(src, *threshold)?,
            Operation::Average { kernel_size } => {
                rasterkit_filter::average_filter(src, *kernel_size)?
            }
            Operation::Sharpen {
                kernel_size,
                intensity,
            } => rasterkit_filter::sharpen_filter(src, *kernel_size, *intensity)?,
            Operation::Gaussian { kernel_size, sigma } => {
                rasterkit_filter::gaussian_filter(src, *kernel_size, *sigma)?
            }
            Operation::EdgeDetect(operator) => rasterkit_filter::detect_edges(src, operator)?,
        };
        Ok(next)
    }

    /// Revert the most recent operation.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyHistory`] when no operation has been
    /// applied since the last load.
    pub fn undo(&mut self) -> SessionResult<()> {
        self.current = self.history.pop()?;
        Ok(())
    }

    /// Check whether an undo is possible.
    pub fn can_undo(&self) -> bool {
        self.history.can_reverse()
    }

    /// Get the number of operations that can be reverted.
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// Get the current (modified) buffer.
    pub fn current(&self) -> &Raster {
        &self.current
    }

    /// Get the buffer as it was loaded. Never touched by apply or undo.
    pub fn original(&self) -> &Raster {
        &self.original
    }

    /// Compute the grayscale histogram of one of the buffers.
    pub fn histogram(&self, source: Source) -> [u32; HISTOGRAM_BINS] {
        self.buffer(source).gray_histogram()
    }

    /// Compute an intensity projection profile of the current buffer.
    ///
    /// # Errors
    ///
    /// Returns a core error for a negative or non-finite
    /// `normalization_factor`.
    pub fn projection(&self, axis: Axis, normalization_factor: f64) -> SessionResult<Vec<f64>> {
        Ok(self.current.projection_profile(axis, normalization_factor)?)
    }

    fn buffer(&self, source: Source) -> &Raster {
        match source {
            Source::Original => &self.original,
            Source::Current => &self.current,
        }
    }
}
