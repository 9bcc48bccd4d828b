// SPDX-License-Identifier: MIT
//
// tw-color color system: hex parsing, HSL and perceptual luminance.
//
// Single-character variable names (r, g, b, h, s, l, d) are the standard
// mathematical convention in color science. Renaming them would make the
// code harder to compare against reference formulas.
#![allow(clippy::many_single_char_names)]
//
// Theme palettes arrive as CSS-style strings. This module is the only place
// that turns those strings into numbers:
//
//   "#RRGGBB" → Rgb (u8 channels) → Hsl (hue bands, saturation)
//                                 → relative luminance (contrast decisions)
//
// Nothing here allocates except hex encoding, and nothing here fails loudly:
// a string that is not exactly six hex digits is simply `None`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit-per-channel sRGB color.
///
/// # Examples
///
/// ```
/// use tw_color::color::{Rgb, hex_to_rgb};
///
/// let blue = hex_to_rgb("#0066ff").unwrap();
/// assert_eq!(blue, Rgb::new(0, 102, 255));
/// assert_eq!(blue.to_hex(), "#0066ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Encode as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Relative luminance in [0.0, 1.0].
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        relative_luminance(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in the HSL cylinder.
///
/// - `h`: hue in degrees, [0, 360)
/// - `s`: saturation in percent, [0, 100]
/// - `l`: lightness in percent, [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.1}, {:.1}%, {:.1}%)", self.h, self.s, self.l)
    }
}

// ─── Free Functions ──────────────────────────────────────────────────────────

/// Parse a hex color string into RGB channels.
///
/// Accepts exactly six hex digits with an optional leading `#`.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
    if digits.len() != 6 {
        return None;
    }

    let r = parse_hex_byte(digits[0], digits[1])?;
    let g = parse_hex_byte(digits[2], digits[3])?;
    let b = parse_hex_byte(digits[4], digits[5])?;
    Some(Rgb::new(r, g, b))
}

/// Standard RGB → HSL conversion on 8-bit channels.
///
/// Hue and saturation are 0 for achromatic input.
#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let rf = f64::from(r) / 255.0;
    let gf = f64::from(g) / 255.0;
    let bf = f64::from(b) / 255.0;
    let maxf = f64::from(max) / 255.0;
    let minf = f64::from(min) / 255.0;

    let l = (maxf + minf) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
    }

    let d = maxf - minf;
    let s = if l > 0.5 {
        d / (2.0 - maxf - minf)
    } else {
        d / (maxf + minf)
    };

    // Channel identity is decided on the integers so ties resolve the same
    // way every time (red wins, then green).
    let h = if max == r {
        (gf - bf) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (bf - rf) / d + 2.0
    } else {
        (rf - gf) / d + 4.0
    };

    Hsl {
        h: h * 60.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Compute the relative luminance of an sRGB color.
///
/// Each channel is normalized, linearized with [`srgb_to_linear`], then
/// combined with the BT.709 weights:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    let r_lin = srgb_to_linear(f64::from(r) / 255.0);
    let g_lin = srgb_to_linear(f64::from(g) / 255.0);
    let b_lin = srgb_to_linear(f64::from(b) / 255.0);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is the same regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ─── sRGB Gamma ──────────────────────────────────────────────────────────────
//
// The 0.03928 knee is the value from the original WCAG 2.0 text. It differs
// from the IEC figure (0.04045) only for channel values that cannot occur in
// 8-bit input, but it is the one contrast decisions are calibrated against.

/// Convert a single normalized sRGB component to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(hi: u8, lo: u8) -> Option<u8> {
    let hi = parse_hex_digit(hi)?;
    let lo = parse_hex_digit(lo)?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
