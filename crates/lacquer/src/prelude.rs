//! Theming prelude for convenient imports.
//!
//! Re-exports the types needed by a typical embedder in one line:
//!
//! ```rust
//! use lacquer::prelude::*;
//!
//! let mut table = MemoryStyleTable::new();
//! apply(&mut table, palette::semantic::NORMAL);
//! let _scope = ScopedTheme::new(&mut table, palette::semantic::ERROR);
//! ```

// Color model
pub use crate::color::{Color, Hlsa};
pub use crate::error::ColorError;
pub use crate::palette;

// Host abstraction
pub use crate::host::{MemoryStyleTable, StyleHost, StyleSlot};

// Theme engine
pub use crate::theme::{apply, ScopedColor, ScopedTheme, ShadeSet, ThemeTuning};
