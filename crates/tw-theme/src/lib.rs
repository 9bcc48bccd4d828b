//! # tw-theme: palette editions and the readability guard
//!
//! Turns a palette selection into colors a renderer can use directly,
//! with text colors that stay legible on any background.
//!
//! # Architecture
//!
//! ```text
//! (palette index, Edition)
//!     │
//!     ▼
//! registry.rs: pick the base palette (out of range → index 0)
//!     │
//!     ▼
//! edition.rs:  Light = identity, Dark = role inversion, Black = #000 surface
//!     │
//!     ▼
//! guard.rs:    trust the palette's text colors unless hue-unsafe,
//!              else pick fixed fallbacks by background luminance
//!     │
//!     ▼
//! resolve.rs:  ResolvedTheme { colors, safe_text, safe_text_secondary }
//! ```
//!
//! Color math lives in `tw-color`. Everything here is pure and total:
//! malformed colors and gradients degrade to fallbacks, never to errors.
//! The only fallible surface is loading a registry from a file.

pub mod builtin;
pub mod edition;
pub mod guard;
pub mod palette;
pub mod registry;
pub mod resolve;

pub use edition::{Edition, ParseEditionError, to_black, to_dark};
pub use guard::{is_hue_unsafe, readable_secondary_for, readable_text_for, resolve_safe_text};
pub use palette::{BasePalette, ColorKind, ColorSet, ColorValue, IconRef};
pub use registry::{Registry, RegistryError};
pub use resolve::{ResolvedTheme, resolve};
