//! # casement
//!
//! Procedural window UI for the terminal.
//!
//! A declarative [`WindowConfig`] goes in; a retained scene tree of styled,
//! clickable nodes comes out, arranged by a flexbox pass and painted as
//! terminal cells.
//!
//! ## Architecture
//!
//! ```text
//! WindowConfig → build_window → SceneTree → solve → render_frame → DiffRenderer
//! ```
//!
//! The scene is built once and never torn down. Every repaint re-solves
//! layout for the current terminal size using a resolution-independent
//! scale (1920×1080 reference, width/height match factor 0.5), so the
//! window keeps its proportions whatever size the terminal is.
//!
//! ## Modules
//!
//! - [`config`] - Validated window configuration
//! - [`scene`] - Retained node tree with facets and layout constraints
//! - [`builder`] - Window construction and the button factory
//! - [`layout`] - Flexbox solve via taffy
//! - [`surface`] - Root surface and resolution-independent scaling
//! - [`input`] - Event conversion and click routing
//! - [`renderer`] - Frame buffer, ANSI output, diff rendering
//! - [`pipeline`] - Paint pass and the mounted event loop
//!
//! ## Example
//!
//! ```no_run
//! use casement::{build_window, App, Services, Stage, WindowConfig};
//!
//! fn main() -> std::io::Result<()> {
//!     let mut stage = Stage::new();
//!     build_window(&mut stage, &WindowConfig::default(), &Services::system());
//!
//!     let mut app = App::mount(stage)?;
//!     app.run()?;
//!     app.unmount()
//! }
//! ```

pub mod builder;
pub mod config;
pub mod input;
pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod scene;
pub mod services;
pub mod stage;
pub mod surface;
pub mod types;

// Re-export the everyday surface
pub use builder::{build_window, button, WindowHandles};
pub use config::{ConfigError, Icon, WindowConfig, BUTTON_COUNT, ICON_SLOTS, LINK_COUNT};
pub use pipeline::App;
pub use scene::{NodeId, SceneTree};
pub use services::{ClickLog, DebugLog, Services, SystemOpener, UrlOpener};
pub use stage::Stage;
pub use surface::Surface;
pub use types::{Attr, Cell, ClipRect, Rgba};
