//! RAII guards for reversible style overrides.

use crate::color::Color;
use crate::host::{StyleHost, StyleSlot};
use crate::theme::theme::{scoped_assignments, ShadeSet};

/// A full accent theme pushed onto the host's style stack, popped on drop.
///
/// Construction derives the shade set once and pushes every slot assignment
/// in a fixed order; dropping the guard pops them all in one batch, restoring
/// whatever was in effect before, even during unwinding. Guards borrow the
/// host mutably, so scopes nest strictly and unwind in reverse construction
/// order.
///
/// ```rust
/// use lacquer::theme::ScopedTheme;
/// use lacquer::{palette, MemoryStyleTable};
///
/// let mut table = MemoryStyleTable::new();
/// {
///     let _error = ScopedTheme::new(&mut table, palette::semantic::ERROR);
///     // widgets here render in the error accent
/// }
/// assert_eq!(table.stack_depth(), 0);
/// ```
pub struct ScopedTheme<'a, H: StyleHost> {
    host: &'a mut H,
    pushed: usize,
}

impl<'a, H: StyleHost> ScopedTheme<'a, H> {
    /// Pushes the enabled theme for `base`.
    pub fn new(host: &'a mut H, base: Color) -> Self {
        Self::push(host, ShadeSet::derive(base, true))
    }

    /// Pushes the disabled theme for `base`: same structure, washed-out
    /// shades.
    pub fn disabled(host: &'a mut H, base: Color) -> Self {
        Self::push(host, ShadeSet::derive(base, false))
    }

    fn push(host: &'a mut H, shades: ShadeSet) -> Self {
        let assignments = scoped_assignments(&shades);
        for (slot, color) in assignments {
            host.push_color(slot, color);
        }
        Self {
            host,
            pushed: assignments.len(),
        }
    }

    /// Number of overrides this guard will pop.
    pub fn len(&self) -> usize {
        self.pushed
    }

    /// The host handle, for drawing or nesting further scopes while this
    /// guard is held.
    pub fn host(&mut self) -> &mut H {
        self.host
    }

    /// True when the guard holds no overrides. Never the case for guards
    /// built by [`new`](Self::new) or [`disabled`](Self::disabled).
    pub fn is_empty(&self) -> bool {
        self.pushed == 0
    }
}

impl<H: StyleHost> Drop for ScopedTheme<'_, H> {
    fn drop(&mut self) {
        self.host.pop_colors(self.pushed);
    }
}

/// A single slot override, popped on drop.
pub struct ScopedColor<'a, H: StyleHost> {
    host: &'a mut H,
}

impl<'a, H: StyleHost> ScopedColor<'a, H> {
    /// Overrides `slot` with `color` until the guard drops.
    pub fn new(host: &'a mut H, slot: StyleSlot, color: Color) -> Self {
        host.push_color(slot, color);
        Self { host }
    }

    /// Overrides the resting button color. Shorthand for the most common
    /// single-slot override.
    pub fn button(host: &'a mut H, color: Color) -> Self {
        Self::new(host, StyleSlot::Button, color)
    }

    /// The host handle, for drawing or nesting while this guard is held.
    pub fn host(&mut self) -> &mut H {
        self.host
    }
}

impl<H: StyleHost> Drop for ScopedColor<'_, H> {
    fn drop(&mut self) {
        self.host.pop_colors(1);
    }
}
