//! # tw-color: color space utilities
//!
//! Stateless conversions used by the theme engine:
//!
//! ```text
//! "#RRGGBB" ──hex_to_rgb──▶ Rgb ──rgb_to_hsl──▶ Hsl (hue band checks)
//!                            │
//!                            └──relative_luminance──▶ f64 in [0, 1]
//! ```
//!
//! Parsing is deliberately strict: exactly six hex digits with an optional
//! `#`. Everything else (gradients, short hex, named colors) is `None`, and
//! callers decide how to degrade.

pub mod color;

pub use color::{Hsl, Rgb, contrast_ratio, hex_to_rgb, relative_luminance, rgb_to_hsl};
