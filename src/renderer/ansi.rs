//! ANSI escape sequences.
//!
//! Thin writers over an [`OutputBuffer`]; nothing here talks to the
//! terminal directly. Colors emit truecolor sequences, except the
//! terminal-default sentinel which emits the plain reset codes (39/49).

use std::io::{self, Write};

use crate::types::{Attr, Rgba};

use super::output::OutputBuffer;

/// Move the cursor to a 0-based cell position.
pub fn cursor_to(out: &mut OutputBuffer, x: u16, y: u16) -> io::Result<()> {
    write!(out, "\x1b[{};{}H", y + 1, x + 1)
}

pub fn cursor_hide(out: &mut OutputBuffer) -> io::Result<()> {
    write!(out, "\x1b[?25l")
}

pub fn cursor_show(out: &mut OutputBuffer) -> io::Result<()> {
    write!(out, "\x1b[?25h")
}

pub fn clear_screen(out: &mut OutputBuffer) -> io::Result<()> {
    write!(out, "\x1b[2J")
}

pub fn enter_alt_screen(out: &mut OutputBuffer) -> io::Result<()> {
    write!(out, "\x1b[?1049h")
}

pub fn exit_alt_screen(out: &mut OutputBuffer) -> io::Result<()> {
    write!(out, "\x1b[?1049l")
}

/// Begin a synchronized update (DEC 2026). Terminals without support
/// ignore it.
pub fn begin_sync(out: &mut OutputBuffer) -> io::Result<()> {
    write!(out, "\x1b[?2026h")
}

/// End a synchronized update.
pub fn end_sync(out: &mut OutputBuffer) -> io::Result<()> {
    write!(out, "\x1b[?2026l")
}

/// Reset colors and attributes.
pub fn reset(out: &mut OutputBuffer) -> io::Result<()> {
    write!(out, "\x1b[0m")
}

/// Set the foreground color.
pub fn fg(out: &mut OutputBuffer, color: Rgba) -> io::Result<()> {
    if color.is_terminal_default() {
        write!(out, "\x1b[39m")
    } else {
        write!(out, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Set the background color.
pub fn bg(out: &mut OutputBuffer, color: Rgba) -> io::Result<()> {
    if color.is_terminal_default() {
        write!(out, "\x1b[49m")
    } else {
        write!(out, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Apply text attributes. Assumes a preceding reset; only set bits are
/// emitted.
pub fn attrs(out: &mut OutputBuffer, attrs: Attr) -> io::Result<()> {
    const CODES: [(Attr, u8); 8] = [
        (Attr::BOLD, 1),
        (Attr::DIM, 2),
        (Attr::ITALIC, 3),
        (Attr::UNDERLINE, 4),
        (Attr::BLINK, 5),
        (Attr::INVERSE, 7),
        (Attr::HIDDEN, 8),
        (Attr::STRIKETHROUGH, 9),
    ];
    for (flag, code) in CODES {
        if attrs.contains(flag) {
            write!(out, "\x1b[{code}m")?;
        }
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_to_is_one_based() {
        let mut out = OutputBuffer::new();
        cursor_to(&mut out, 0, 0).unwrap();
        assert_eq!(out.as_str(), "\x1b[1;1H");

        out.clear();
        cursor_to(&mut out, 3, 7).unwrap();
        assert_eq!(out.as_str(), "\x1b[8;4H");
    }

    #[test]
    fn test_truecolor_fg() {
        let mut out = OutputBuffer::new();
        fg(&mut out, Rgba::rgb(38, 64, 115)).unwrap();
        assert_eq!(out.as_str(), "\x1b[38;2;38;64;115m");
    }

    #[test]
    fn test_default_colors_emit_resets() {
        let mut out = OutputBuffer::new();
        fg(&mut out, Rgba::TERMINAL_DEFAULT).unwrap();
        bg(&mut out, Rgba::TERMINAL_DEFAULT).unwrap();
        assert_eq!(out.as_str(), "\x1b[39m\x1b[49m");
    }

    #[test]
    fn test_attrs_emit_set_bits_only() {
        let mut out = OutputBuffer::new();
        attrs(&mut out, Attr::BOLD | Attr::UNDERLINE).unwrap();
        assert_eq!(out.as_str(), "\x1b[1m\x1b[4m");

        out.clear();
        attrs(&mut out, Attr::NONE).unwrap();
        assert!(out.is_empty());
    }
}
