//! Editions: Light (identity), Dark (role inversion), Black (OLED surface).
//!
//! Both derived editions are pure functions of the base palette. They never
//! re-derive colors; they only move and substitute roles.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::palette::{BasePalette, ColorSet};

/// Dark edition surface when the base has no secondary text color.
pub const DARK_SURFACE_FALLBACK: &str = "#1f2937";
/// Text fallback for derived editions.
pub const WHITE_FALLBACK: &str = "#ffffff";
/// Secondary text fallback for derived editions.
pub const GREY_FALLBACK: &str = "#9ca3af";
/// Forced surface of the Black edition.
pub const PURE_BLACK: &str = "#000000";

/// A named transform applied to a base palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    #[default]
    Light,
    Dark,
    Black,
}

impl Edition {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::Black];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Black => "black",
        }
    }

    /// Apply this edition. `Light` borrows the base unchanged.
    #[must_use]
    pub fn apply(self, base: &BasePalette) -> Cow<'_, BasePalette> {
        match self {
            Self::Light => Cow::Borrowed(base),
            Self::Dark => Cow::Owned(to_dark(base)),
            Self::Black => Cow::Owned(to_black(base)),
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing an [`Edition`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown edition '{0}' (expected light, dark or black)")]
pub struct ParseEditionError(pub String);

impl FromStr for Edition {
    type Err = ParseEditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "black" => Ok(Self::Black),
            _ => Err(ParseEditionError(s.to_owned())),
        }
    }
}

/// Swap foreground and background roles to approximate a dark palette.
///
/// The background is always the base text role, even when that is absent.
#[must_use]
pub fn to_dark(base: &BasePalette) -> BasePalette {
    let c = &base.colors;
    BasePalette {
        name: format!("{} Dark", base.name),
        icon: base.icon.clone(),
        colors: ColorSet {
            background: c.text.clone(),
            surface: c.text_secondary.or(DARK_SURFACE_FALLBACK),
            primary: c.accent.or_value(&c.primary),
            accent: c.primary.or_value(&c.accent),
            text: c.background.or(WHITE_FALLBACK),
            text_secondary: c.surface.or(GREY_FALLBACK),
        },
    }
}

/// Keep the base roles but force a pure black surface.
#[must_use]
pub fn to_black(base: &BasePalette) -> BasePalette {
    let c = &base.colors;
    BasePalette {
        name: format!("{} Black Edition", base.name),
        icon: base.icon.clone(),
        colors: ColorSet {
            background: c.background.or(PURE_BLACK),
            surface: PURE_BLACK.into(),
            primary: c.primary.or_value(&c.accent),
            accent: c.accent.or_value(&c.primary),
            text: c.text.or(WHITE_FALLBACK),
            text_secondary: c.text_secondary.or(GREY_FALLBACK),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
