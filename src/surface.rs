//! Scaled presentation surface.
//!
//! The layout world is designed against a 1920x1080 reference resolution in
//! logical units. A terminal is neither that big nor square-celled, so the
//! surface computes a scale factor from the terminal's pixel estimate
//! (cells x an 8x16 cell-pixel model) and exposes [`ViewMetrics`]: the
//! logical viewport to solve layout in, plus the per-axis unit/cell ratios
//! the paint pass uses to land unit rects on cells.
//!
//! The scale blends width and height deviation geometrically, weighted by
//! `match_factor` (0 = width only, 1 = height only). At 0.5 a terminal that
//! is half the reference width and half the reference height scales
//! everything by exactly one half.

use crate::scene::NodeId;

/// Assumed pixel width of one terminal cell.
pub const CELL_PIXEL_WIDTH: f32 = 8.0;
/// Assumed pixel height of one terminal cell.
pub const CELL_PIXEL_HEIGHT: f32 = 16.0;

/// The root presentation surface.
///
/// Owns the reference resolution, the width/height match factor and the
/// scene node everything else hangs from.
#[derive(Debug, Clone)]
pub struct Surface {
    root: NodeId,
    reference_width: f32,
    reference_height: f32,
    match_factor: f32,
}

impl Surface {
    pub(crate) fn new(root: NodeId) -> Self {
        Self {
            root,
            reference_width: 1920.0,
            reference_height: 1080.0,
            match_factor: 0.5,
        }
    }

    /// The scene node that roots the surface.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn reference_width(&self) -> f32 {
        self.reference_width
    }

    #[inline]
    pub fn reference_height(&self) -> f32 {
        self.reference_height
    }

    #[inline]
    pub fn match_factor(&self) -> f32 {
        self.match_factor
    }

    /// Scale factor for a terminal of `cols` x `rows` cells.
    pub fn scale_factor(&self, cols: u16, rows: u16) -> f32 {
        let pixel_width = cols.max(1) as f32 * CELL_PIXEL_WIDTH;
        let pixel_height = rows.max(1) as f32 * CELL_PIXEL_HEIGHT;
        let log_width = (pixel_width / self.reference_width).log2();
        let log_height = (pixel_height / self.reference_height).log2();
        let blended = log_width * (1.0 - self.match_factor) + log_height * self.match_factor;
        blended.exp2()
    }

    /// Metrics for solving and painting at a terminal size.
    pub fn metrics(&self, cols: u16, rows: u16) -> ViewMetrics {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let scale = self.scale_factor(cols, rows);
        let units_per_cell_x = CELL_PIXEL_WIDTH / scale;
        let units_per_cell_y = CELL_PIXEL_HEIGHT / scale;
        ViewMetrics {
            scale,
            viewport_width: cols as f32 * units_per_cell_x,
            viewport_height: rows as f32 * units_per_cell_y,
            units_per_cell_x,
            units_per_cell_y,
        }
    }
}

/// Unit/cell geometry for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewMetrics {
    pub scale: f32,
    /// Logical viewport width, in units.
    pub viewport_width: f32,
    /// Logical viewport height, in units.
    pub viewport_height: f32,
    pub units_per_cell_x: f32,
    pub units_per_cell_y: f32,
}

impl ViewMetrics {
    /// Column of a unit-space x coordinate.
    #[inline]
    pub fn cell_x(&self, units: f32) -> u16 {
        (units / self.units_per_cell_x).round() as u16
    }

    /// Row of a unit-space y coordinate.
    #[inline]
    pub fn cell_y(&self, units: f32) -> u16 {
        (units / self.units_per_cell_y).round() as u16
    }
}

// =============================================================================
// Tests
// =============================================================================
