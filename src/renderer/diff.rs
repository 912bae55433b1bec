//! Diff renderer.
//!
//! Keeps the previously rendered frame and emits only the cells that
//! changed, wrapped in a synchronized-update block so the terminal applies
//! the whole frame at once.

use std::io;

use crate::renderer::ansi;
use crate::renderer::buffer::FrameBuffer;
use crate::renderer::output::{OutputBuffer, StatefulCellRenderer};
use crate::types::Cell;

/// Renders frames to the terminal, diffing against the previous frame.
pub struct DiffRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Render a frame, emitting only cells that differ from the last one.
    ///
    /// Returns whether anything was written.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        ansi::begin_sync(&mut self.output)?;
        self.cell_renderer.reset();

        let mut has_changes = false;

        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let cell = match buffer.get(x, y) {
                    Some(cell) => cell,
                    None => continue,
                };

                let changed = match &self.previous {
                    Some(prev)
                        if prev.width() == buffer.width()
                            && prev.height() == buffer.height() =>
                    {
                        prev.get(x, y).is_none_or(|p| !cells_equal(p, cell))
                    }
                    _ => true,
                };

                if changed {
                    self.cell_renderer.render_cell(&mut self.output, x, y, cell);
                    has_changes = true;
                }
            }
        }

        ansi::end_sync(&mut self.output)?;

        if has_changes {
            self.output.flush_stdout()?;
        } else {
            self.output.clear();
        }

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Drop the stored frame so the next render repaints everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Switch to the alternate screen and hide the cursor.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        ansi::enter_alt_screen(&mut self.output)?;
        ansi::cursor_hide(&mut self.output)?;
        ansi::clear_screen(&mut self.output)?;
        self.output.flush_stdout()?;
        self.invalidate();
        Ok(())
    }

    /// Restore the main screen and show the cursor.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        ansi::reset(&mut self.output)?;
        ansi::cursor_show(&mut self.output)?;
        ansi::exit_alt_screen(&mut self.output)?;
        self.output.flush_stdout()?;
        Ok(())
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn cells_equal(a: &Cell, b: &Cell) -> bool {
    a.char == b.char && a.fg == b.fg && a.bg == b.bg && a.attrs == b.attrs
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attr, Rgba};

    #[test]
    fn test_diff_renderer_creation() {
        let renderer = DiffRenderer::new();
        assert!(!renderer.has_previous());
    }

    #[test]
    fn test_cells_equal() {
        let a = Cell::default();
        let b = Cell::default();
        assert!(cells_equal(&a, &b));

        let c = Cell {
            char: 'x' as u32,
            fg: Rgba::WHITE,
            bg: Rgba::BLACK,
            attrs: Attr::BOLD,
        };
        assert!(!cells_equal(&a, &c));
    }

    #[test]
    fn test_invalidate_clears_previous() {
        let mut renderer = DiffRenderer::new();
        renderer.previous = Some(FrameBuffer::new(4, 2));
        assert!(renderer.has_previous());

        renderer.invalidate();
        assert!(!renderer.has_previous());
    }
}
