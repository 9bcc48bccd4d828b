//! Palette data model: role values, six-role color sets and base palettes.
//!
//! Role values are kept as the strings the palette author wrote. Whether a
//! value is a solid color, a gradient, or garbage is decided lazily by
//! [`ColorValue::kind`], so a palette never fails to load because of one
//! odd value.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tw_color::Rgb;

/// CSS gradient functions. Matched on the prefix only; the body is opaque.
static GRADIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:repeating-)?(?:linear|radial|conic)-gradient\s*\(")
        .expect("gradient regex")
});

// ---------------------------------------------------------------------------
// ColorValue
// ---------------------------------------------------------------------------

/// One role's value: a `#RRGGBB` color, a CSS gradient, or empty (absent).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(String);

/// What a [`ColorValue`] turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Solid(Rgb),
    Gradient,
    /// Empty string; the role was not supplied.
    Missing,
    /// Anything else: short hex, named colors, typos.
    Invalid,
}

impl ColorValue {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// An absent role.
    #[must_use]
    pub const fn missing() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the role was not supplied.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.0.trim().is_empty()
    }

    #[must_use]
    pub fn is_gradient(&self) -> bool {
        GRADIENT.is_match(&self.0)
    }

    /// Parse as a solid color. Gradients never parse, even if they happen to
    /// contain hex stops.
    #[must_use]
    pub fn rgb(&self) -> Option<Rgb> {
        if self.is_gradient() {
            return None;
        }
        tw_color::hex_to_rgb(&self.0)
    }

    #[must_use]
    pub fn kind(&self) -> ColorKind {
        if self.is_missing() {
            ColorKind::Missing
        } else if self.is_gradient() {
            ColorKind::Gradient
        } else {
            self.rgb().map_or(ColorKind::Invalid, ColorKind::Solid)
        }
    }

    /// This value, or `fallback` if the role is absent.
    #[must_use]
    pub fn or(&self, fallback: &str) -> Self {
        if self.is_missing() {
            Self::new(fallback)
        } else {
            self.clone()
        }
    }

    /// This value, or `other` if the role is absent.
    #[must_use]
    pub fn or_value(&self, other: &Self) -> Self {
        if self.is_missing() {
            other.clone()
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for ColorValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ColorValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ---------------------------------------------------------------------------
// ColorSet
// ---------------------------------------------------------------------------

/// The six color roles every palette defines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSet {
    /// Page background.
    #[serde(default)]
    pub background: ColorValue,
    /// Cards, sidebars, message bubbles.
    #[serde(default)]
    pub surface: ColorValue,
    #[serde(default)]
    pub primary: ColorValue,
    #[serde(default)]
    pub accent: ColorValue,
    /// Body text as the palette author intended it.
    #[serde(default)]
    pub text: ColorValue,
    /// Timestamps, captions, placeholders.
    #[serde(default)]
    pub text_secondary: ColorValue,
}

/// Role names in declaration order, as they appear in config files.
pub const ROLE_NAMES: [&str; 6] = [
    "background",
    "surface",
    "primary",
    "accent",
    "text",
    "textSecondary",
];

impl ColorSet {
    /// Build a set from six role strings, in [`ROLE_NAMES`] order.
    #[must_use]
    pub fn new(
        background: &str,
        surface: &str,
        primary: &str,
        accent: &str,
        text: &str,
        text_secondary: &str,
    ) -> Self {
        Self {
            background: background.into(),
            surface: surface.into(),
            primary: primary.into(),
            accent: accent.into(),
            text: text.into(),
            text_secondary: text_secondary.into(),
        }
    }

    /// `(role name, value)` pairs in [`ROLE_NAMES`] order.
    #[must_use]
    pub fn roles(&self) -> [(&'static str, &ColorValue); 6] {
        [
            (ROLE_NAMES[0], &self.background),
            (ROLE_NAMES[1], &self.surface),
            (ROLE_NAMES[2], &self.primary),
            (ROLE_NAMES[3], &self.accent),
            (ROLE_NAMES[4], &self.text),
            (ROLE_NAMES[5], &self.text_secondary),
        ]
    }
}

// ---------------------------------------------------------------------------
// BasePalette
// ---------------------------------------------------------------------------

/// Opaque icon identifier from the UI toolkit. Never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl IconRef {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named six-role palette that editions are derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePalette {
    pub name: String,
    #[serde(default)]
    pub icon: IconRef,
    pub colors: ColorSet,
}

impl BasePalette {
    #[must_use]
    pub fn new(name: impl Into<String>, icon: impl Into<String>, colors: ColorSet) -> Self {
        Self {
            name: name.into(),
            icon: IconRef::new(icon),
            colors,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn solid_value_parses() {
        let v = ColorValue::new("#0066ff");
        assert_eq!(v.kind(), ColorKind::Solid(Rgb::new(0, 102, 255)));
    }

    #[test]
    fn gradient_is_detected() {
        for s in [
            "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            "  Linear-Gradient(to right, #000000, #ffffff)",
            "radial-gradient(circle, #ff0000, #0000ff)",
            "repeating-linear-gradient(45deg, #111111 0 10px, #222222 10px 20px)",
            "conic-gradient(from 0deg, red, blue)",
        ] {
            let v = ColorValue::new(s);
            assert!(v.is_gradient(), "not a gradient: {s}");
            assert_eq!(v.kind(), ColorKind::Gradient);
            assert!(v.rgb().is_none());
        }
    }

    #[test]
    fn hex_is_not_gradient() {
        assert!(!ColorValue::new("#ffffff").is_gradient());
        assert!(!ColorValue::new("gradient").is_gradient());
    }

    #[test]
    fn missing_and_invalid() {
        assert_eq!(ColorValue::missing().kind(), ColorKind::Missing);
        assert_eq!(ColorValue::new("   ").kind(), ColorKind::Missing);
        assert_eq!(ColorValue::new("tomato").kind(), ColorKind::Invalid);
        assert_eq!(ColorValue::new("#abc").kind(), ColorKind::Invalid);
    }

    #[test]
    fn or_only_replaces_missing() {
        assert_eq!(ColorValue::missing().or("#111111"), "#111111");
        assert_eq!(ColorValue::new("nonsense").or("#111111"), "nonsense");
        assert_eq!(
            ColorValue::missing().or_value(&ColorValue::new("#222222")),
            "#222222"
        );
    }

    #[test]
    fn roles_are_in_declaration_order() {
        let set = ColorSet::new("#000001", "#000002", "#000003", "#000004", "#000005", "#000006");
        let names = set.roles().map(|(n, _)| n);
        assert_eq!(
            names,
            ["background", "surface", "primary", "accent", "text", "textSecondary"]
        );
        let (last, value) = set.roles()[5];
        assert_eq!(last, "textSecondary");
        assert_eq!(value.as_str(), "#000006");
    }

    #[test]
    fn color_set_uses_camel_case_and_defaults() {
        let set: ColorSet =
            serde_json::from_str(r##"{"background":"#ffffff","textSecondary":"#475569"}"##)
                .unwrap();
        assert_eq!(set.background, "#ffffff");
        assert_eq!(set.text_secondary, "#475569");
        assert!(set.surface.is_missing());

        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"textSecondary\":\"#475569\""), "{json}");
    }
}
