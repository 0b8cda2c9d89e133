//! The narrow interface to the host GUI's style state.
//!
//! The theme engine never owns style state of its own. The host GUI keeps a
//! persistent style table (one color per [`StyleSlot`]) and an override stack
//! layered on top of it; both are reached exclusively through the
//! [`StyleHost`] trait, and a handle is passed explicitly into every theme
//! entry point.
//!
//! [`MemoryStyleTable`] is a self-contained implementation of that contract.
//! It backs the tests and the example binary, and works as a real style table
//! for embedders whose host exposes raw slot storage.
//!
//! # Stack discipline
//!
//! `push_color` records the slot's previous value before overwriting it;
//! `pop_colors(n)` removes the `n` most recent entries and restores each
//! slot's previous value, newest first. Callers must pop exactly as many
//! entries as they pushed; the scoped guards in [`crate::theme`] enforce this
//! with move semantics.

use crate::color::Color;

/// Style-table slots of the host GUI.
///
/// Each slot controls the rendered color of one widget aspect. The set is the
/// host's vocabulary; this crate only routes derived colors into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleSlot {
    /// Default text.
    Text,
    /// Text of disabled widgets.
    TextDisabled,
    /// Background of selected text.
    TextSelectedBg,
    /// Button at rest.
    Button,
    /// Button while pressed.
    ButtonActive,
    /// Button under the cursor.
    ButtonHovered,
    /// Checkbox / radio mark.
    CheckMark,
    /// Collapsing header at rest.
    Header,
    /// Collapsing header while pressed.
    HeaderActive,
    /// Collapsing header under the cursor.
    HeaderHovered,
    /// Slider grab at rest.
    SliderGrab,
    /// Slider grab while dragged.
    SliderGrabActive,
    /// Tab at rest.
    Tab,
    /// Selected tab.
    TabActive,
    /// Tab under the cursor.
    TabHovered,
    /// Title bar of an unfocused window.
    TitleBg,
    /// Title bar of the focused window.
    TitleBgActive,
    /// Title bar of a collapsed window.
    TitleBgCollapsed,
    /// Window and frame borders.
    Border,
    /// Frame background (inputs, sliders).
    FrameBg,
    /// Frame background while active.
    FrameBgActive,
    /// Frame background under the cursor.
    FrameBgHovered,
    /// Keyboard-navigation highlight.
    NavHighlight,
    /// Window resize grip at rest.
    ResizeGrip,
    /// Resize grip while dragged.
    ResizeGripActive,
    /// Resize grip under the cursor.
    ResizeGripHovered,
    /// Plot line series.
    PlotLines,
    /// Plot line series under the cursor.
    PlotLinesHovered,
    /// Plot histogram bars.
    PlotHistogram,
    /// Plot histogram bars under the cursor.
    PlotHistogramHovered,
    /// Scrollbar grab at rest.
    ScrollbarGrab,
    /// Scrollbar grab while dragged.
    ScrollbarGrabActive,
    /// Scrollbar grab under the cursor.
    ScrollbarGrabHovered,
    /// Window background.
    WindowBg,
    /// Child-region background.
    ChildBg,
    /// Popup background.
    PopupBg,
}

impl StyleSlot {
    /// Number of slots in the host style table.
    pub const COUNT: usize = 36;

    /// Every slot, in declaration order.
    pub const ALL: [StyleSlot; Self::COUNT] = [
        StyleSlot::Text,
        StyleSlot::TextDisabled,
        StyleSlot::TextSelectedBg,
        StyleSlot::Button,
        StyleSlot::ButtonActive,
        StyleSlot::ButtonHovered,
        StyleSlot::CheckMark,
        StyleSlot::Header,
        StyleSlot::HeaderActive,
        StyleSlot::HeaderHovered,
        StyleSlot::SliderGrab,
        StyleSlot::SliderGrabActive,
        StyleSlot::Tab,
        StyleSlot::TabActive,
        StyleSlot::TabHovered,
        StyleSlot::TitleBg,
        StyleSlot::TitleBgActive,
        StyleSlot::TitleBgCollapsed,
        StyleSlot::Border,
        StyleSlot::FrameBg,
        StyleSlot::FrameBgActive,
        StyleSlot::FrameBgHovered,
        StyleSlot::NavHighlight,
        StyleSlot::ResizeGrip,
        StyleSlot::ResizeGripActive,
        StyleSlot::ResizeGripHovered,
        StyleSlot::PlotLines,
        StyleSlot::PlotLinesHovered,
        StyleSlot::PlotHistogram,
        StyleSlot::PlotHistogramHovered,
        StyleSlot::ScrollbarGrab,
        StyleSlot::ScrollbarGrabActive,
        StyleSlot::ScrollbarGrabHovered,
        StyleSlot::WindowBg,
        StyleSlot::ChildBg,
        StyleSlot::PopupBg,
    ];

    /// Stable index of this slot, for array-backed tables.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The injected handle to the host GUI's style table and override stack.
///
/// Implementations are single-threaded, matching the host's per-frame render
/// contract; no locking is performed on either side.
pub trait StyleHost {
    /// Returns the currently effective color of `slot`.
    fn color(&self, slot: StyleSlot) -> Color;

    /// Overwrites `slot` in the persistent style table. No rollback.
    fn set_color(&mut self, slot: StyleSlot, color: Color);

    /// Pushes an override for `slot` onto the style stack.
    fn push_color(&mut self, slot: StyleSlot, color: Color);

    /// Pops the `count` most recent overrides, restoring each slot's previous
    /// value in reverse push order.
    fn pop_colors(&mut self, count: usize);
}

/// An array-backed [`StyleHost`] with an undo stack.
#[derive(Debug, Clone)]
pub struct MemoryStyleTable {
    colors: [Color; StyleSlot::COUNT],
    stack: Vec<(StyleSlot, Color)>,
}

impl MemoryStyleTable {
    /// Creates a table with every slot set to opaque black.
    pub fn new() -> Self {
        Self {
            colors: [Color::default(); StyleSlot::COUNT],
            stack: Vec::new(),
        }
    }

    /// Number of overrides currently on the stack.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for MemoryStyleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleHost for MemoryStyleTable {
    fn color(&self, slot: StyleSlot) -> Color {
        self.colors[slot.index()]
    }

    fn set_color(&mut self, slot: StyleSlot, color: Color) {
        self.colors[slot.index()] = color;
    }

    fn push_color(&mut self, slot: StyleSlot, color: Color) {
        self.stack.push((slot, self.colors[slot.index()]));
        self.colors[slot.index()] = color;
    }

    fn pop_colors(&mut self, count: usize) {
        debug_assert!(
            count <= self.stack.len(),
            "popping {} overrides but only {} were pushed",
            count,
            self.stack.len()
        );
        for _ in 0..count {
            if let Some((slot, previous)) = self.stack.pop() {
                self.colors[slot.index()] = previous;
            }
        }
    }
}
