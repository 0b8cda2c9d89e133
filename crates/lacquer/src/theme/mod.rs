//! Accent-color theming over a host style table.
//!
//! A theme is derived from a single accent color. The derivation produces a
//! [`ShadeSet`]: interaction-state shades (normal, hovered, active, drag), a
//! near-black background tinted toward the accent, and a text color chosen
//! for contrast against the accent. The derivation knobs live in
//! [`ThemeTuning`], a process-wide setting changed with [`set_tuning`].
//!
//! Applying a theme takes two forms, mirroring the host's own style APIs:
//!
//! - [`apply`] writes the shades into the persistent style table, with no
//!   rollback.
//! - [`ScopedTheme`] and [`ScopedColor`] push overrides onto the host's style
//!   stack and pop them on drop, so a theme can be confined to one widget or
//!   one region of a frame.
//!
//! ```rust
//! use lacquer::theme::{self, ScopedTheme};
//! use lacquer::{palette, MemoryStyleTable};
//!
//! let mut table = MemoryStyleTable::new();
//! theme::apply(&mut table, palette::semantic::NORMAL);
//!
//! {
//!     let scope = ScopedTheme::new(&mut table, palette::semantic::ERROR);
//!     // widgets drawn here render in red
//!     drop(scope);
//! }
//! // the blue base theme is back
//! assert_eq!(table.stack_depth(), 0);
//! ```

#[allow(clippy::module_inception)]
mod theme;

mod scoped;

pub use scoped::{ScopedColor, ScopedTheme};
pub use theme::{
    active_color, apply, background_color, drag_color, hovered_color, normal_color, set_tuning,
    state_color, text_color, tuning, ShadeSet, ThemeTuning,
};
