//! Core value types shared across the crate.
//!
//! Colors use an `i16`-per-channel representation so sentinel values can
//! live outside the `0..=255` range: `r == -1` marks the terminal default
//! color, which must survive untouched through blending and reach the
//! renderer as a plain reset sequence.

use bitflags::bitflags;

// =============================================================================
// Color
// =============================================================================

/// An RGBA color.
///
/// Channels are stored as `i16` so the terminal-default sentinel (`r == -1`)
/// fits alongside real `0..=255` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// The terminal's own default foreground/background.
    pub const TERMINAL_DEFAULT: Rgba = Rgba { r: -1, g: -1, b: -1, a: 255 };

    /// Fully transparent; blending leaves the destination untouched.
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };

    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Create a color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque color from 8-bit channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// True if this is the terminal-default sentinel.
    #[inline]
    pub const fn is_terminal_default(self) -> bool {
        self.r < 0
    }

    /// True if the color is fully opaque.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a >= 255
    }

    /// True if the color is fully transparent.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a <= 0 && !self.is_terminal_default()
    }

    /// Parse a hex color string.
    ///
    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`, with or without the
    /// leading `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use casement::types::Rgba;
    ///
    /// assert_eq!(Rgba::from_hex("#fff"), Some(Rgba::WHITE));
    /// assert_eq!(Rgba::from_hex("336699"), Some(Rgba::rgb(0x33, 0x66, 0x99)));
    /// assert_eq!(Rgba::from_hex("#00000080"), Some(Rgba::new(0, 0, 0, 0x80)));
    /// assert_eq!(Rgba::from_hex("nope"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        match s.len() {
            3 => {
                let r = hex_digit(s.as_bytes()[0])?;
                let g = hex_digit(s.as_bytes()[1])?;
                let b = hex_digit(s.as_bytes()[2])?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = hex_byte(s, 0)?;
                let g = hex_byte(s, 2)?;
                let b = hex_byte(s, 4)?;
                Some(Self::rgb(r, g, b))
            }
            8 => {
                let r = hex_byte(s, 0)?;
                let g = hex_byte(s, 2)?;
                let b = hex_byte(s, 4)?;
                let a = hex_byte(s, 6)?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Porter-Duff `over`: blend `src` onto `dst`.
    ///
    /// The terminal default has no known channel values, so as a blend
    /// destination it is treated as opaque black.
    pub fn blend(src: Rgba, dst: Rgba) -> Rgba {
        if src.is_opaque() || src.is_terminal_default() {
            return src;
        }
        if src.is_transparent() {
            return dst;
        }

        let dst = if dst.is_terminal_default() { Rgba::BLACK } else { dst };

        let sa = src.a as f32 / 255.0;
        let da = dst.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return Rgba::TRANSPARENT;
        }

        let channel = |s: i16, d: i16| -> i16 {
            let s = s as f32 / 255.0;
            let d = d as f32 / 255.0;
            let out = (s * sa + d * da * (1.0 - sa)) / out_a;
            (out * 255.0).round() as i16
        };

        Rgba {
            r: channel(src.r, dst.r),
            g: channel(src.g, dst.g),
            b: channel(src.b, dst.b),
            a: (out_a * 255.0).round() as i16,
        }
    }
}

#[inline]
fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn hex_byte(s: &str, at: usize) -> Option<u8> {
    let bytes = s.as_bytes();
    let hi = hex_digit(bytes[at])?;
    let lo = hex_digit(bytes[at + 1])?;
    Some(hi * 16 + lo)
}

// =============================================================================
// Text Attributes
// =============================================================================

bitflags! {
    /// Terminal text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// A single terminal cell.
///
/// `char` is the unicode codepoint; `0` marks the continuation cell of a
/// wide character (the renderer skips it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: u32,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// ClipRect
// =============================================================================

/// A rectangular clip region in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClipRect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Check whether a cell lies inside the region.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Intersect two regions; `None` when they do not overlap.
    pub fn intersect(&self, other: &ClipRect) -> Option<ClipRect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);
        if x2 > x1 && y2 > y1 {
            Some(ClipRect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
