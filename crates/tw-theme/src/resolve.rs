//! Theme resolution: `(palette index, edition)` → colors ready to render.
//!
//! This is the only entry point the UI layer needs. It never fails: a bad
//! index falls back to the first palette and bad colors fall back to fixed
//! text colors.

use serde::Serialize;
use tracing::debug;

use crate::edition::Edition;
use crate::guard::{TextTier, safe_text};
use crate::palette::{BasePalette, ColorSet};
use crate::registry::Registry;

/// A fully resolved theme.
///
/// `safe_text` and `safe_text_secondary` are always valid `#RRGGBB` colors
/// chosen for `colors.background`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    /// The palette the edition was derived from.
    pub base: BasePalette,
    pub edition: Edition,
    /// Index of `base` in the registry (after out-of-range fallback).
    pub index: usize,
    /// Name of the derived palette, e.g. `"Aurora Black Edition"`.
    pub name: String,
    pub colors: ColorSet,
    pub safe_text: String,
    pub safe_text_secondary: String,
}

impl Registry {
    /// Resolve the palette at `index` in the given edition.
    ///
    /// Out-of-range indices resolve the first palette.
    #[must_use]
    pub fn resolve(&self, index: usize, edition: Edition) -> ResolvedTheme {
        let (index, base) = self.get_or_first(index);
        resolve_palette(base, index, edition)
    }
}

/// Free-function form of [`Registry::resolve`].
#[must_use]
pub fn resolve(registry: &Registry, index: usize, edition: Edition) -> ResolvedTheme {
    registry.resolve(index, edition)
}

/// Resolve a palette that is not necessarily in a registry.
#[must_use]
pub fn resolve_palette(base: &BasePalette, index: usize, edition: Edition) -> ResolvedTheme {
    let derived = edition.apply(base);
    let colors = &derived.colors;

    let text = safe_text(&colors.background, &colors.text, TextTier::Primary);
    let text_secondary = safe_text(&colors.background, &colors.text_secondary, TextTier::Secondary);

    debug!(
        theme.name = %derived.name,
        theme.edition = %edition,
        theme.safe_text = %text,
        theme.safe_text_secondary = %text_secondary,
        "Theme resolved"
    );

    ResolvedTheme {
        base: base.clone(),
        edition,
        index,
        name: derived.name.clone(),
        colors: colors.clone(),
        safe_text: text,
        safe_text_secondary: text_secondary,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edition::{PURE_BLACK, to_black, to_dark};
    use crate::guard::{DARK_SECONDARY, DARK_TEXT, LIGHT_SECONDARY, LIGHT_TEXT};
    use pretty_assertions::assert_eq;
    use std::thread;

    fn registry() -> &'static Registry {
        Registry::builtin()
    }

    #[test]
    fn out_of_range_matches_first() {
        let r = registry();
        assert_eq!(r.resolve(999, Edition::Light), r.resolve(0, Edition::Light));
        assert_eq!(r.resolve(usize::MAX, Edition::Dark), r.resolve(0, Edition::Dark));
    }

    #[test]
    fn light_is_identity() {
        let r = registry();
        for (i, base) in r.palettes().iter().enumerate() {
            let theme = r.resolve(i, Edition::Light);
            assert_eq!(theme.colors, base.colors);
            assert_eq!(theme.name, base.name);
            assert_eq!(&theme.base, base);
            assert_eq!(theme.index, i);
        }
    }

    #[test]
    fn digital_blue_trusts_its_text() {
        let theme = registry().resolve(0, Edition::Light);
        assert_eq!(theme.colors.background, "#e5f0ff");
        assert_eq!(theme.safe_text, "#0066ff");
        assert_eq!(theme.safe_text_secondary, "#3b82f6");
    }

    #[test]
    fn dark_and_black_use_transforms() {
        let r = registry();
        for (i, base) in r.palettes().iter().enumerate() {
            let dark = r.resolve(i, Edition::Dark);
            assert_eq!(dark.colors, to_dark(base).colors);
            assert_eq!(dark.name, format!("{} Dark", base.name));

            let black = r.resolve(i, Edition::Black);
            assert_eq!(black.colors, to_black(base).colors);
            assert_eq!(black.colors.surface, PURE_BLACK);
            assert_eq!(black.name, format!("{} Black Edition", base.name));
        }
    }

    #[test]
    fn lemon_text_is_overridden() {
        let r = registry();
        let theme = r.resolve(r.find("Lemon Zest").unwrap(), Edition::Light);
        // Yellow text and rose secondary on a near-white background.
        assert_eq!(theme.safe_text, DARK_TEXT);
        assert_eq!(theme.safe_text_secondary, DARK_SECONDARY);
    }

    #[test]
    fn crimson_pinks_are_overridden() {
        let r = registry();
        let theme = r.resolve(r.find("Crimson Court").unwrap(), Edition::Light);
        // #fecaca is pale, but still a fully saturated red in HSL terms.
        assert_eq!(theme.safe_text, LIGHT_TEXT);
        assert_eq!(theme.safe_text_secondary, LIGHT_SECONDARY);
    }

    #[test]
    fn gradient_background_gets_light_fallbacks() {
        let r = registry();
        let theme = r.resolve(r.find("Aurora").unwrap(), Edition::Light);
        assert_eq!(theme.safe_text, LIGHT_TEXT);
        assert_eq!(theme.safe_text_secondary, LIGHT_SECONDARY);

        // Black keeps the gradient background.
        let black = r.resolve(r.find("Aurora").unwrap(), Edition::Black);
        assert_eq!(black.safe_text, LIGHT_TEXT);
    }

    #[test]
    fn dark_edition_of_digital_blue() {
        let theme = registry().resolve(0, Edition::Dark);
        // Background becomes the blue text; the old background becomes text.
        assert_eq!(theme.colors.background, "#0066ff");
        assert_eq!(theme.safe_text, "#e5f0ff");
        assert_eq!(theme.safe_text_secondary, "#ffffff");
    }

    #[test]
    fn safe_text_always_parses() {
        let r = registry();
        for i in 0..r.len() {
            for edition in Edition::ALL {
                let theme = r.resolve(i, edition);
                assert!(
                    theme.safe_text.starts_with('#')
                        && tw_color::hex_to_rgb(&theme.safe_text).is_some(),
                    "{}: {}",
                    theme.name,
                    theme.safe_text
                );
                assert!(
                    theme.safe_text_secondary.starts_with('#')
                        && tw_color::hex_to_rgb(&theme.safe_text_secondary).is_some(),
                    "{}: {}",
                    theme.name,
                    theme.safe_text_secondary
                );
            }
        }
    }

    #[test]
    fn missing_roles_still_resolve() {
        let r = Registry::new(vec![BasePalette::new("Bare", "", ColorSet::default())]).unwrap();
        let light = r.resolve(0, Edition::Light);
        assert_eq!(light.safe_text, LIGHT_TEXT);
        assert_eq!(light.safe_text_secondary, LIGHT_SECONDARY);

        // Dark takes its background from the missing text role.
        let dark = r.resolve(0, Edition::Dark);
        assert!(dark.colors.background.is_missing());
        assert_eq!(dark.safe_text, LIGHT_TEXT);
        assert_eq!(dark.safe_text_secondary, LIGHT_SECONDARY);
    }

    #[test]
    fn dark_without_base_text_uses_light_fallbacks() {
        let base = BasePalette::new(
            "No Text",
            "",
            ColorSet::new("#e5f0ff", "#ffffff", "#0066ff", "#00b4d8", "", "#3b82f6"),
        );
        let theme = resolve_palette(&base, 0, Edition::Dark);
        assert_eq!(theme.colors.background, base.colors.text);
        assert_eq!(theme.safe_text, LIGHT_TEXT);
        assert_eq!(theme.safe_text_secondary, LIGHT_SECONDARY);
    }

    #[test]
    fn free_function_matches_method() {
        let r = registry();
        assert_eq!(resolve(r, 3, Edition::Black), r.resolve(3, Edition::Black));
    }

    #[test]
    fn concurrent_resolution_is_consistent() {
        let expected = registry().resolve(2, Edition::Dark);
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| registry().resolve(2, Edition::Dark)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(registry().resolve(0, Edition::Black)).unwrap();
        assert_eq!(json["edition"], "black");
        assert_eq!(json["safeText"], "#0066ff");
        assert_eq!(json["colors"]["surface"], "#000000");
        assert_eq!(json["base"]["name"], "Digital Blue");
    }
}
