//! The palette registry: an ordered, non-empty list of base palettes.
//!
//! The builtin registry is shared and built once. Custom registries come
//! from JSON or TOML documents of the form
//!
//! ```toml
//! [[palettes]]
//! name = "Night Market"
//! icon = "lantern"
//! colors = { background = "#1a1423", text = "#f4e9ff", textSecondary = "#b8a9c9" }
//! ```
//!
//! Loading is lenient about color values. A role that is neither a hex
//! color nor a gradient is kept as written and logged; the readability
//! guard degrades it at resolve time.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::builtin::builtin_palettes;
use crate::palette::{BasePalette, ColorKind};

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| Registry {
    palettes: builtin_palettes().to_vec(),
});

/// Error loading a palette registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Registry has no palettes")]
    Empty,
}

/// On-disk shape of a registry document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    palettes: Vec<BasePalette>,
}

/// Ordered palette catalogue, addressed by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    palettes: Vec<BasePalette>,
}

impl Registry {
    /// Build a registry from palettes, in order.
    ///
    /// # Errors
    /// Returns [`RegistryError::Empty`] if `palettes` is empty.
    pub fn new(palettes: Vec<BasePalette>) -> Result<Self, RegistryError> {
        if palettes.is_empty() {
            return Err(RegistryError::Empty);
        }
        for palette in &palettes {
            report_suspicious_roles(palette);
        }
        debug!(registry.len = palettes.len(), "Palette registry built");
        Ok(Self { palettes })
    }

    /// The shipped registry.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Load a registry from JSON text.
    ///
    /// # Errors
    /// Returns `RegistryError` if parsing fails or no palettes are defined.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = serde_json::from_str(json)?;
        Self::new(file.palettes)
    }

    /// Load a registry from TOML text.
    ///
    /// # Errors
    /// Returns `RegistryError` if parsing fails or no palettes are defined.
    pub fn from_toml(toml: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = toml::from_str(toml)?;
        Self::new(file.palettes)
    }

    /// Load a registry from a file (format inferred by extension).
    ///
    /// # Errors
    /// Returns `RegistryError` if reading, parsing, or validation fails.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        debug!(registry.path = %path.display(), "Loading palette registry");
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            Some(ext) => Err(RegistryError::UnsupportedFormat(ext.into())),
            None => Err(RegistryError::UnsupportedFormat("unknown".into())),
        }
    }

    /// Serialize this registry to pretty JSON.
    ///
    /// # Errors
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&RegistryFile {
            palettes: self.palettes.clone(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Always false; registries are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    #[must_use]
    pub fn palettes(&self) -> &[BasePalette] {
        &self.palettes
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BasePalette> {
        self.palettes.get(index)
    }

    /// The palette at `index`, or the first palette if out of range.
    #[must_use]
    pub fn get_or_first(&self, index: usize) -> (usize, &BasePalette) {
        match self.palettes.get(index) {
            Some(palette) => (index, palette),
            None => {
                warn!(
                    registry.index = index,
                    registry.len = self.palettes.len(),
                    "Palette index out of range, using first palette"
                );
                (0, &self.palettes[0])
            }
        }
    }

    /// Index of the palette named `name` (case-insensitive).
    #[must_use]
    pub fn find(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.palettes
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

fn report_suspicious_roles(palette: &BasePalette) {
    for (role, value) in palette.colors.roles() {
        if value.kind() == ColorKind::Invalid {
            warn!(
                palette.name = %palette.name,
                palette.role = role,
                palette.value = %value,
                "Palette color is neither #RRGGBB nor a gradient"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
