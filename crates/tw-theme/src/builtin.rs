//! Shipped base palettes, in gallery order.
//!
//! Index 0 is the default selection. Order is part of the contract: the UI
//! stores the selected palette by index.

use std::sync::LazyLock;

use crate::palette::{BasePalette, ColorSet};

/// `(name, icon, [background, surface, primary, accent, text, textSecondary])`
const TABLE: &[(&str, &str, [&str; 6])] = &[
    (
        "Digital Blue",
        "monitor",
        ["#e5f0ff", "#ffffff", "#0066ff", "#00b4d8", "#0066ff", "#3b82f6"],
    ),
    (
        "Midnight Ink",
        "moon",
        ["#0f172a", "#1e293b", "#6366f1", "#22d3ee", "#e2e8f0", "#94a3b8"],
    ),
    (
        "Sunlit Parchment",
        "scroll",
        ["#fdf6e3", "#eee8d5", "#b58900", "#cb4b16", "#586e75", "#93a1a1"],
    ),
    (
        "Lemon Zest",
        "citrus",
        ["#fffbea", "#fff3c4", "#f6e609", "#ff7a00", "#f6e609", "#e11d48"],
    ),
    (
        "Crimson Court",
        "crown",
        ["#2b0a0f", "#3d1118", "#dc2626", "#f59e0b", "#fecaca", "#f87171"],
    ),
    (
        "Aurora",
        "sparkles",
        [
            "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            "#2d2a4a",
            "#a78bfa",
            "#f472b6",
            "#ffffff",
            "#e0e7ff",
        ],
    ),
    (
        "Forest Canopy",
        "trees",
        ["#14281d", "#1f3a2b", "#4ade80", "#facc15", "#d1fae5", "#86efac"],
    ),
    (
        "Rose Quartz",
        "gem",
        ["#fff1f2", "#ffe4e6", "#e11d48", "#9333ea", "#4c0519", "#9f1239"],
    ),
    (
        "Slate Minimal",
        "square",
        ["#f8fafc", "#e2e8f0", "#334155", "#0ea5e9", "#0f172a", "#64748b"],
    ),
];

static PALETTES: LazyLock<Vec<BasePalette>> = LazyLock::new(|| {
    TABLE
        .iter()
        .map(|(name, icon, [bg, surface, primary, accent, text, text2])| {
            BasePalette::new(
                *name,
                *icon,
                ColorSet::new(bg, surface, primary, accent, text, text2),
            )
        })
        .collect()
});

/// All builtin palettes, in gallery order.
#[must_use]
pub fn builtin_palettes() -> &'static [BasePalette] {
    &PALETTES
}

/// List all builtin palette names, in gallery order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|(name, _, _)| *name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ColorKind;

    #[test]
    fn names_follow_gallery_order() {
        let names: Vec<_> = builtin_names().collect();
        let from_palettes: Vec<_> = builtin_palettes().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, from_palettes);
        assert!(names.len() >= 8);
    }

    #[test]
    fn default_is_digital_blue() {
        let p = &builtin_palettes()[0];
        assert_eq!(p.name, "Digital Blue");
        assert_eq!(p.colors.background, "#e5f0ff");
        assert_eq!(p.colors.text, "#0066ff");
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = builtin_names().map(str::to_ascii_lowercase).collect();
        let len = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), len);
    }

    #[test]
    fn every_role_is_solid_or_gradient() {
        for p in builtin_palettes() {
            for (role, value) in p.colors.roles() {
                assert!(
                    matches!(value.kind(), ColorKind::Solid(_) | ColorKind::Gradient),
                    "{}: {role} = {value}",
                    p.name
                );
            }
        }
    }

    #[test]
    fn at_least_one_gradient_background() {
        assert!(builtin_palettes().iter().any(|p| p.colors.background.is_gradient()));
    }
}
