//! Injected collaborators for window behavior.
//!
//! Click handlers never reach for ambient globals; whatever they talk to is
//! handed in here at build time. Production code uses [`Services::system`],
//! tests swap in recording fakes.

use std::rc::Rc;

/// Opens a link target in whatever handles URLs on this system.
pub trait UrlOpener {
    /// Fire and forget; failures are intentionally ignored.
    fn open(&self, url: &str);
}

/// Receives button activations.
pub trait ClickLog {
    /// `index` is 1-based.
    fn button_clicked(&self, index: usize);
}

/// [`UrlOpener`] backed by the operating system's URL handler.
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) {
        log::debug!("opening {url}");
        let _ = open::that(url);
    }
}

/// [`ClickLog`] that writes to the `log` facade.
pub struct DebugLog;

impl ClickLog for DebugLog {
    fn button_clicked(&self, index: usize) {
        log::info!("Button {index} clicked");
    }
}

/// The collaborator bundle handed to the window builder.
#[derive(Clone)]
pub struct Services {
    pub opener: Rc<dyn UrlOpener>,
    pub clicks: Rc<dyn ClickLog>,
}

impl Services {
    /// Real system services: OS URL handler, `log`-facade click log.
    pub fn system() -> Self {
        Self {
            opener: Rc::new(SystemOpener),
            clicks: Rc::new(DebugLog),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::system()
    }
}
