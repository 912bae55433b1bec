//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of cells representing what the terminal
//! should show. Flat row-major storage; translucent backgrounds blend with
//! what is already in the cell; wide characters occupy two cells, the
//! second marked as a continuation the renderer skips.

use crate::layout::text_measure::{char_width, string_width};
use crate::types::{Attr, Cell, ClipRect, Rgba};

/// A 2D buffer of terminal cells.
///
/// Flat storage with row-major indexing: `index = y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Full buffer bounds as a clip region.
    #[inline]
    pub fn bounds(&self) -> ClipRect {
        ClipRect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Cell at a position; `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Mutable cell at a position; `None` out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell with optional clipping.
    ///
    /// Returns true if the cell was set.
    pub fn set_cell(
        &mut self,
        x: u16,
        y: u16,
        char: u32,
        fg: Rgba,
        bg: Rgba,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        if let Some(clip) = clip {
            if !clip.contains(x, y) {
                return false;
            }
        }

        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];

        // Alpha blend background if not opaque
        let blended_bg = if bg.is_opaque() || bg.is_terminal_default() {
            bg
        } else {
            Rgba::blend(bg, cell.bg)
        };

        cell.char = char;
        cell.fg = fg;
        cell.bg = blended_bg;
        cell.attrs = attrs;

        true
    }

    /// Fill a rectangle with a background color.
    pub fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        bg: Rgba,
        clip: Option<&ClipRect>,
    ) {
        let x1 = x;
        let y1 = y;
        let x2 = x.saturating_add(width).min(self.width);
        let y2 = y.saturating_add(height).min(self.height);

        let (x1, y1, x2, y2) = if let Some(clip) = clip {
            let cx2 = clip.x.saturating_add(clip.width);
            let cy2 = clip.y.saturating_add(clip.height);
            (x1.max(clip.x), y1.max(clip.y), x2.min(cx2), y2.min(cy2))
        } else {
            (x1, y1, x2, y2)
        };

        if x2 <= x1 || y2 <= y1 {
            return;
        }

        // Fast path for opaque fill
        let is_opaque = bg.is_opaque() || bg.is_terminal_default();

        for row in y1..y2 {
            let row_start = self.index(x1, row);
            let row_end = self.index(x2, row);
            for cell in &mut self.cells[row_start..row_end] {
                if is_opaque {
                    cell.bg = bg;
                } else {
                    cell.bg = Rgba::blend(bg, cell.bg);
                }
                cell.char = b' ' as u32;
                cell.attrs = Attr::NONE;
            }
        }
    }

    /// Draw a single character.
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        char: char,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> bool {
        let bg = bg.unwrap_or(Rgba::TRANSPARENT);
        self.set_cell(x, y, char as u32, fg, bg, attrs, clip)
    }

    /// Draw text at a position.
    ///
    /// Returns the number of cells used (handles wide characters).
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> u16 {
        let bg = bg.unwrap_or(Rgba::TRANSPARENT);
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }

            let char_width = char_width(ch);
            if char_width == 0 {
                continue;
            }

            if self.set_cell(col, y, ch as u32, fg, bg, attrs, clip) {
                // Wide characters claim the following cell as continuation
                if char_width == 2 && col + 1 < self.width {
                    if clip.is_none_or(|c| c.contains(col + 1, y)) {
                        if let Some(next) = self.get_mut(col + 1, y) {
                            next.char = 0;
                            next.fg = fg;
                            if !bg.is_transparent() {
                                next.bg = Rgba::blend(bg, next.bg);
                            }
                            next.attrs = attrs;
                        }
                    }
                }
            }

            col += char_width as u16;
        }

        col.saturating_sub(x)
    }

    /// Draw text centered within a width.
    pub fn draw_text_centered(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> u16 {
        let text_width = string_width(text);
        if text_width >= width as usize {
            return self.draw_text(x, y, text, fg, bg, attrs, clip);
        }
        let offset = ((width as usize - text_width) / 2) as u16;
        self.draw_text(x + offset, y, text, fg, bg, attrs, clip)
    }
}

// =============================================================================
// Tests
// =============================================================================
