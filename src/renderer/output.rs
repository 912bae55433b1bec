//! Buffered terminal output.
//!
//! All escape sequences and cell content accumulate in an OutputBuffer and
//! reach stdout in a single write. The StatefulCellRenderer sits on top and
//! drops redundant cursor moves, color changes, and attribute changes
//! between consecutive cells.

use std::io::{self, Write};

use crate::renderer::ansi;
use crate::types::{Attr, Cell, Rgba};

/// Accumulates output bytes, flushed to stdout in one write.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a buffer with a 16KB initial capacity.
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    /// Write a codepoint stored as u32, skipping invalid values.
    #[inline]
    pub fn write_codepoint(&mut self, code: u32) {
        if let Some(c) = char::from_u32(code) {
            self.write_char(c);
        }
    }

    /// Flush accumulated bytes to stdout in a single write, then clear.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(&self.data)?;
        handle.flush()?;
        self.data.clear();
        Ok(())
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.data).unwrap_or("")
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// Stateful Cell Renderer
// =============================================================================

/// Renders cells while tracking terminal state to skip redundant sequences.
#[derive(Debug)]
pub struct StatefulCellRenderer {
    last_x: i32,
    last_y: i32,
    last_fg: Option<Rgba>,
    last_bg: Option<Rgba>,
    last_attrs: Attr,
}

impl StatefulCellRenderer {
    pub fn new() -> Self {
        Self {
            last_x: -1,
            last_y: -1,
            last_fg: None,
            last_bg: None,
            last_attrs: Attr::NONE,
        }
    }

    /// Forget tracked state, forcing the next cell to emit everything.
    pub fn reset(&mut self) {
        self.last_x = -1;
        self.last_y = -1;
        self.last_fg = None;
        self.last_bg = None;
        self.last_attrs = Attr::NONE;
    }

    /// Render one cell at a position, emitting only what changed.
    pub fn render_cell(&mut self, out: &mut OutputBuffer, x: u16, y: u16, cell: &Cell) {
        // Continuation cell of a wide character: the terminal already
        // advanced past it when the wide char was written.
        if cell.char == 0 {
            self.last_x = x as i32;
            self.last_y = y as i32;
            return;
        }

        // Move the cursor unless we are already at the next column
        if y as i32 != self.last_y || x as i32 != self.last_x + 1 {
            ansi::cursor_to(out, x, y).ok();
        }

        // Attribute changes require a full reset since there is no way to
        // clear a single attribute reliably across terminals.
        if cell.attrs != self.last_attrs {
            ansi::reset(out).ok();
            ansi::attrs(out, cell.attrs).ok();
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = cell.attrs;
        }

        if self.last_fg.is_none_or(|fg| fg != cell.fg) {
            ansi::fg(out, cell.fg).ok();
            self.last_fg = Some(cell.fg);
        }

        if self.last_bg.is_none_or(|bg| bg != cell.bg) {
            ansi::bg(out, cell.bg).ok();
            self.last_bg = Some(cell.bg);
        }

        out.write_codepoint(cell.char);

        self.last_x = x as i32;
        self.last_y = y as i32;
    }
}

impl Default for StatefulCellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
