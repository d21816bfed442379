//! rasterkit - Raster-image transformation and analysis engine
//!
//! # Overview
//!
//! rasterkit is the engine behind an interactive image editor: it loads
//! an image, applies pixel-level and neighborhood transformations, and
//! reverses them one step at a time while exposing live histograms and
//! intensity projections.
//!
//! - Point operators: grayscale, negative, brightness, contrast,
//!   binarization
//! - Convolution filters: averaging, Gaussian blur, unsharp-mask
//!   sharpening
//! - Gradient edge detection: Roberts, Sobel, Scharr, Laplace, custom
//!   weight matrices
//! - Analysis: 256-bin histograms and row/column intensity projections
//! - An undoable [`session::EditSession`] sequencing all of the above
//!
//! # Example
//!
//! ```
//! use rasterkit::{ChannelMode, Raster};
//! use rasterkit::session::{EditSession, Operation};
//!
//! let image = Raster::from_samples(2, 2, ChannelMode::Rgb, vec![200u8; 12]).unwrap();
//! let mut session = EditSession::new(image);
//! session.apply(&Operation::Grayscale).unwrap();
//! assert!(session.can_undo());
//! session.undo().unwrap();
//! assert_eq!(session.current(), session.original());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterkit_color as color;
pub use rasterkit_filter as filter;
pub use rasterkit_io as io;
pub use rasterkit_session as session;
