//! Readability guard: legible text colors for arbitrary backgrounds.
//!
//! Two tiers:
//!
//! - Trust the palette author's text color when it parses and is not in a
//!   known-bad hue band.
//! - Otherwise pick a fixed light or dark fallback from the background's
//!   relative luminance.
//!
//! Luminance alone is not enough for saturated yellows and reds: they read
//! poorly as body text at any lightness, so they are rejected by hue before
//! luminance is ever consulted.
//!
//! Gradient backgrounds are never luminance-analyzed. They always get the
//! light fallback.

use tracing::trace;

use crate::palette::ColorValue;

/// Light text for dark backgrounds.
pub const LIGHT_TEXT: &str = "#f5f7fa";
/// Dark text for light backgrounds.
pub const DARK_TEXT: &str = "#1f2937";
/// Light secondary text for dark backgrounds.
pub const LIGHT_SECONDARY: &str = "#cbd5e1";
/// Dark secondary text for light backgrounds.
pub const DARK_SECONDARY: &str = "#475569";

/// Backgrounds darker than this get light text.
///
/// Below the 0.5 midpoint on purpose: medium-brightness backgrounds get
/// light text.
pub const LUMINANCE_THRESHOLD: f64 = 0.45;

/// Yellow band, inclusive, in degrees.
pub const YELLOW_BAND: (f64, f64) = (40.0, 70.0);
/// Red band wraps through 0°: `h <= RED_LOW || h >= RED_HIGH`.
pub const RED_LOW: f64 = 15.0;
pub const RED_HIGH: f64 = 345.0;
/// Saturation (percent) above which a yellow/red hue is unsafe.
pub const SATURATION_LIMIT: f64 = 55.0;

/// Which text role a color is being chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTier {
    Primary,
    Secondary,
}

impl TextTier {
    #[must_use]
    pub const fn from_secondary(is_secondary: bool) -> Self {
        if is_secondary { Self::Secondary } else { Self::Primary }
    }

    /// `(light, dark)` fallback pair for this tier.
    #[must_use]
    pub const fn fallbacks(self) -> (&'static str, &'static str) {
        match self {
            Self::Primary => (LIGHT_TEXT, DARK_TEXT),
            Self::Secondary => (LIGHT_SECONDARY, DARK_SECONDARY),
        }
    }
}

/// Is this color a saturated yellow or red?
///
/// Returns `false` for anything that does not parse as `#RRGGBB`.
#[must_use]
pub fn is_hue_unsafe(hex: &str) -> bool {
    let Some(rgb) = tw_color::hex_to_rgb(hex) else {
        return false;
    };
    let hsl = rgb.to_hsl();

    let yellow = hsl.h >= YELLOW_BAND.0 && hsl.h <= YELLOW_BAND.1;
    let red = hsl.h <= RED_LOW || hsl.h >= RED_HIGH;
    (yellow || red) && hsl.s > SATURATION_LIMIT
}

/// Fixed text color for `background`, by luminance.
#[must_use]
pub fn readable_text_for(background: &str) -> &'static str {
    pick_for(background, TextTier::Primary)
}

/// Fixed secondary text color for `background`, by luminance.
#[must_use]
pub fn readable_secondary_for(background: &str) -> &'static str {
    pick_for(background, TextTier::Secondary)
}

fn pick_for(background: &str, tier: TextTier) -> &'static str {
    let (light, dark) = tier.fallbacks();
    match tw_color::hex_to_rgb(background) {
        Some(rgb) if rgb.relative_luminance() >= LUMINANCE_THRESHOLD => dark,
        _ => light,
    }
}

/// Pick the text color to render on `background`.
///
/// `candidate` is the palette's own text color. It is returned unchanged if
/// it is a hue-safe `#RRGGBB` color and the background is solid. Bare
/// `RRGGBB` digits are not trusted since they cannot be rendered as is.
#[must_use]
pub fn resolve_safe_text(background: &str, candidate: &str, is_secondary: bool) -> String {
    safe_text(
        &ColorValue::new(background),
        &ColorValue::new(candidate),
        TextTier::from_secondary(is_secondary),
    )
}

/// Typed form of [`resolve_safe_text`].
#[must_use]
pub fn safe_text(background: &ColorValue, candidate: &ColorValue, tier: TextTier) -> String {
    let (light, _) = tier.fallbacks();

    if background.rgb().is_none() {
        trace!(background = %background, ?tier, "unparsable background, light fallback");
        return light.to_owned();
    }

    if is_renderable_hex(candidate) && !is_hue_unsafe(candidate.as_str()) {
        return candidate.as_str().to_owned();
    }

    let chosen = pick_for(background.as_str(), tier);
    trace!(
        background = %background,
        candidate = %candidate,
        chosen,
        ?tier,
        "candidate text rejected"
    );
    chosen.to_owned()
}

fn is_renderable_hex(value: &ColorValue) -> bool {
    value.as_str().starts_with('#') && value.rgb().is_some()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
