//! Window description.
//!
//! A [`WindowConfig`] is plain data handed to [`crate::builder::build_window`].
//! The window shape is fixed: exactly three buttons, exactly three links
//! (label + target, index-paired), and up to four optional icons. Counts
//! are validated at construction so the builder never has to guess what a
//! short array means.

use thiserror::Error;

use crate::types::Rgba;

/// Number of action buttons in a window.
pub const BUTTON_COUNT: usize = 3;
/// Number of links in a window.
pub const LINK_COUNT: usize = 3;
/// Number of icon slots in a window. Slots exist even when empty.
pub const ICON_SLOTS: usize = 4;

/// An icon assigned to one of the four slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    pub glyph: char,
    pub color: Rgba,
}

/// Rejected window descriptions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expected exactly 3 button labels, got {0}")]
    ButtonLabelCount(usize),
    #[error("expected exactly 3 link labels, got {0}")]
    LinkLabelCount(usize),
    #[error("expected exactly 3 link targets, got {0}")]
    LinkTargetCount(usize),
    #[error("at most 4 icons are supported, got {0}")]
    IconCount(usize),
}

/// Everything a window is built from.
///
/// Fields are private so a value can only exist with valid counts.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    title: String,
    button_labels: [String; BUTTON_COUNT],
    link_labels: [String; LINK_COUNT],
    link_targets: [String; LINK_COUNT],
    icons: [Option<Icon>; ICON_SLOTS],
}

impl WindowConfig {
    /// Validate counts and build a config.
    ///
    /// `icons` may hold fewer than four entries; missing trailing slots are
    /// treated as empty. More than four is an error, as are button/link
    /// lists that are not exactly three long.
    pub fn new(
        title: impl Into<String>,
        button_labels: Vec<String>,
        link_labels: Vec<String>,
        link_targets: Vec<String>,
        icons: Vec<Option<Icon>>,
    ) -> Result<Self, ConfigError> {
        let button_labels: [String; BUTTON_COUNT] = button_labels
            .try_into()
            .map_err(|v: Vec<String>| ConfigError::ButtonLabelCount(v.len()))?;
        let link_labels: [String; LINK_COUNT] = link_labels
            .try_into()
            .map_err(|v: Vec<String>| ConfigError::LinkLabelCount(v.len()))?;
        let link_targets: [String; LINK_COUNT] = link_targets
            .try_into()
            .map_err(|v: Vec<String>| ConfigError::LinkTargetCount(v.len()))?;

        if icons.len() > ICON_SLOTS {
            return Err(ConfigError::IconCount(icons.len()));
        }
        let mut slots = [None; ICON_SLOTS];
        for (slot, icon) in slots.iter_mut().zip(icons) {
            *slot = icon;
        }

        Ok(Self {
            title: title.into(),
            button_labels,
            link_labels,
            link_targets,
            icons: slots,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn button_labels(&self) -> &[String; BUTTON_COUNT] {
        &self.button_labels
    }

    pub fn link_labels(&self) -> &[String; LINK_COUNT] {
        &self.link_labels
    }

    pub fn link_targets(&self) -> &[String; LINK_COUNT] {
        &self.link_targets
    }

    pub fn icons(&self) -> &[Option<Icon>; ICON_SLOTS] {
        &self.icons
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Responsive Window".to_string(),
            button_labels: [
                "Button 1".to_string(),
                "Button 2".to_string(),
                "Button 3".to_string(),
            ],
            link_labels: [
                "Link 1".to_string(),
                "Link 2".to_string(),
                "Link 3".to_string(),
            ],
            link_targets: [
                "https://docs.rs".to_string(),
                "https://crates.io".to_string(),
                "https://github.com".to_string(),
            ],
            icons: [None; ICON_SLOTS],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
