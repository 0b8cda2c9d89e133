//! # Lacquer - Color Model and Theming for Immediate-Mode Style Tables
//!
//! `lacquer` derives complete widget themes from a single accent color and
//! applies them to an immediate-mode GUI's style table, either permanently or
//! scoped to a region of a frame.
//!
//! The crate has no rendering of its own. The host GUI exposes its style
//! state through the [`StyleHost`] trait (a persistent per-slot color table
//! plus a push/pop override stack), and every theming entry point takes a
//! host handle explicitly. [`MemoryStyleTable`] is a ready-made in-memory
//! host for tests, tools, and embedders with raw slot storage.
//!
//! ## Core Concepts
//!
//! - [`Color`]: normalized `f32` RGBA, the canonical representation
//! - [`Hlsa`]: hue/lightness/saturation view, computed on demand
//! - [`palette`]: named color constants plus vivid semantic accents
//! - [`theme::ShadeSet`]: all interaction-state shades derived from one accent
//! - [`theme::ScopedTheme`] / [`theme::ScopedColor`]: RAII overrides that
//!   restore the previous style on drop
//!
//! ## Quick Start
//!
//! ```rust
//! use lacquer::theme::{self, ScopedTheme};
//! use lacquer::{palette, MemoryStyleTable};
//!
//! let mut table = MemoryStyleTable::new();
//!
//! // Install a blue theme in the persistent table.
//! theme::apply(&mut table, palette::semantic::NORMAL);
//!
//! // Temporarily render a region in the error accent.
//! {
//!     let _scope = ScopedTheme::new(&mut table, palette::semantic::ERROR);
//!     // draw widgets here
//! }
//! assert_eq!(table.stack_depth(), 0);
//! ```
//!
//! ## Color Math
//!
//! All derivation happens in HSL space over the lightness and saturation
//! channels:
//!
//! ```rust
//! use lacquer::Color;
//!
//! let accent = Color::from_hex("#49a3ff")?;
//! let dimmed = accent.multiply_luminance(0.4).multiply_saturation(0.5);
//! let label = dimmed.optimal_contrast_color();
//! assert!(label.contrast_ratio(dimmed) > 2.0);
//! # Ok::<(), lacquer::ColorError>(())
//! ```

pub mod color;
mod error;
pub mod host;
pub mod palette;
pub mod prelude;
pub mod theme;

// Error type
pub use error::ColorError;

// Color model exports
pub use color::{Color, Hlsa, OPTIMAL_TEXT_CONTRAST_RATIO};

// Host abstraction exports
pub use host::{MemoryStyleTable, StyleHost, StyleSlot};
