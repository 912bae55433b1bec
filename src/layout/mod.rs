//! Layout solving.
//!
//! The scene's layout constraints are resolved by an external arrangement
//! pass (taffy's flexbox solver); nothing in this crate positions nodes by
//! hand. [`solve`] produces parent-relative rects in logical units.

mod taffy_bridge;
pub mod text_measure;

pub use taffy_bridge::{solve, LayoutRect, LayoutResult};
