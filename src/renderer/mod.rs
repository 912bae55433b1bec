//! Terminal rendering stack.
//!
//! A frame is painted into a [`FrameBuffer`], then the [`DiffRenderer`]
//! compares it against the previous frame and writes only the changed
//! cells to stdout through a buffered, state-tracking ANSI emitter.

pub mod ansi;
pub mod buffer;
pub mod diff;
pub mod output;

pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
