//! Subcommand implementations. Each writes to a caller-supplied writer so
//! the output can be tested without a terminal.

use std::io::Write;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::info;
use tw_color::{Hsl, Rgb};
use tw_theme::guard::{TextTier, safe_text};
use tw_theme::{ColorKind, ColorValue, Registry, ResolvedTheme, is_hue_unsafe};

use crate::cli::{InspectArgs, ResolveArgs};

/// `taleweave palettes`
pub fn run_palettes(registry: &Registry, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        writeln!(out, "{}", registry.to_json()?)?;
        return Ok(());
    }

    let width = registry
        .palettes()
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0);
    for (i, palette) in registry.palettes().iter().enumerate() {
        writeln!(out, "{i:>3}  {:<width$}  {}", palette.name, palette.icon)?;
    }
    Ok(())
}

/// `taleweave resolve`
pub fn run_resolve(registry: &Registry, args: &ResolveArgs, out: &mut impl Write) -> Result<()> {
    let index = match (&args.name, args.index) {
        (Some(name), _) => registry
            .find(name)
            .with_context(|| format!("no palette named '{name}'"))?,
        // Negative indices are just another out-of-range selection.
        (None, Some(i)) => usize::try_from(i).unwrap_or(usize::MAX),
        (None, None) => 0,
    };

    let theme = registry.resolve(index, args.edition);
    info!(theme.name = %theme.name, theme.index = theme.index, "Resolved");

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&theme)?)?;
    } else {
        write_theme(&theme, out)?;
    }
    Ok(())
}

fn write_theme(theme: &ResolvedTheme, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} (#{}, {})", theme.name, theme.index, theme.edition)?;
    for (role, value) in theme.colors.roles() {
        writeln!(out, "  {role:<15} {value}")?;
    }
    writeln!(out, "  {:<15} {}", "safeText", theme.safe_text)?;
    writeln!(out, "  {:<15} {}", "safeTextSecondary", theme.safe_text_secondary)?;
    Ok(())
}

/// What `inspect` reports about one color.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ColorReport {
    color: String,
    kind: &'static str,
    rgb: Option<Rgb>,
    hsl: Option<Hsl>,
    luminance: Option<f64>,
    hue_unsafe: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    on: Option<BackgroundReport>,
}

/// The guard's verdict for a color placed on a background.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BackgroundReport {
    background: String,
    contrast: Option<f64>,
    text: String,
    text_secondary: String,
}

impl ColorReport {
    fn new(value: &ColorValue, background: Option<&ColorValue>) -> Self {
        let kind = value.kind();
        let rgb = match kind {
            ColorKind::Solid(rgb) => Some(rgb),
            _ => None,
        };
        let on = background.map(|bg| BackgroundReport {
            background: bg.to_string(),
            contrast: rgb
                .zip(bg.rgb())
                .map(|(fg, bg)| tw_color::contrast_ratio(fg, bg)),
            text: safe_text(bg, value, TextTier::Primary),
            text_secondary: safe_text(bg, value, TextTier::Secondary),
        });
        Self {
            color: value.to_string(),
            kind: match kind {
                ColorKind::Solid(_) => "solid",
                ColorKind::Gradient => "gradient",
                ColorKind::Missing => "missing",
                ColorKind::Invalid => "invalid",
            },
            rgb,
            hsl: rgb.map(Rgb::to_hsl),
            luminance: rgb.map(Rgb::relative_luminance),
            hue_unsafe: is_hue_unsafe(value.as_str()),
            on,
        }
    }

    fn write(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.color)?;
        writeln!(out, "  kind        {}", self.kind)?;
        if let (Some(rgb), Some(hsl), Some(lum)) = (self.rgb, self.hsl, self.luminance) {
            writeln!(out, "  rgb         ({}, {}, {})", rgb.r, rgb.g, rgb.b)?;
            writeln!(out, "  hsl         {hsl}")?;
            writeln!(out, "  luminance   {lum:.4}")?;
        }
        writeln!(out, "  hue-unsafe  {}", self.hue_unsafe)?;

        if let Some(on) = &self.on {
            writeln!(out, "on {}", on.background)?;
            if let Some(ratio) = on.contrast {
                writeln!(out, "  contrast    {ratio:.2}:1")?;
            }
            writeln!(out, "  text        {}", on.text)?;
            writeln!(out, "  secondary   {}", on.text_secondary)?;
        }
        Ok(())
    }
}

/// `taleweave inspect`
pub fn run_inspect(args: &InspectArgs, out: &mut impl Write) -> Result<()> {
    let color = ColorValue::new(args.color.as_str());
    if color.is_missing() {
        bail!("empty color");
    }
    let background = args.on.as_deref().map(ColorValue::new);
    let report = ColorReport::new(&color, background.as_ref());

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        report.write(out)?;
    }
    Ok(())
}
