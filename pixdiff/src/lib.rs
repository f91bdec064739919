//! pixdiff - Pixel-level image comparison
//!
//! Compares two equally sized RGBA images, renders their difference in one
//! of three [`RenderMode`]s and reports [`Metrics`] for the whole image or a
//! selected [`Rect`].
//!
//! # Crates
//!
//! - [`pixdiff_core`] (re-exported at the root): buffers, kernel, metrics
//! - [`io`]: PNG and JPEG loading, PNG output
//! - [`session`]: comparison state shared by interactive front ends
//!
//! # Example
//!
//! ```
//! use pixdiff::{DiffSession, PixelBuffer, Rect, RenderMode};
//!
//! let a = PixelBuffer::filled(4, 4, [0, 0, 0, 255]).unwrap();
//! let mut b = a.clone();
//! b.set_rgb(3, 3, 255, 255, 255).unwrap();
//!
//! let mut session = DiffSession::new(a, b).unwrap();
//! let r = session.compare(RenderMode::Highlight, 16).unwrap();
//! assert_eq!(r.metrics.diff_pixel_count, 1);
//!
//! let m = session.select_region(Rect::new(2, 2, 2, 2)).unwrap().unwrap();
//! assert_eq!(m.diff_percentage, 25.0);
//! ```

pub use pixdiff_core::*;

pub use pixdiff_io as io;

pub mod session;

pub use session::DiffSession;
