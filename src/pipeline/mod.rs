//! Scene-to-terminal pipeline: layout, paint, mount.

pub mod frame;
pub mod mount;

pub use frame::{render_frame, Frame};
pub use mount::App;
