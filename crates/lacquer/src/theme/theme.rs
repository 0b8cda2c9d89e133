//! Shade derivation and whole-table theme application.

use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::color::Color;
use crate::host::{StyleHost, StyleSlot};

/// Multipliers that shape shade derivation.
///
/// Every shade is produced by scaling the accent's lightness and saturation
/// channels. The defaults match the tuning the derivation was designed
/// around: widgets sit well below the accent's lightness so the accent reads
/// as a highlight, and the background is a near-black tint of it.
///
/// Tuning is process-wide; change it with [`set_tuning`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeTuning {
    /// Lightness multiplier for widgets at rest.
    pub normal_luminance: f32,
    /// Saturation multiplier for widgets at rest.
    pub normal_saturation: f32,
    /// Lightness multiplier for hovered widgets.
    pub hover_luminance: f32,
    /// Saturation multiplier for hovered widgets.
    pub hover_saturation: f32,
    /// Lightness multiplier for pressed widgets.
    pub active_luminance: f32,
    /// Saturation multiplier for pressed widgets.
    pub active_saturation: f32,
    /// Lightness multiplier for drag handles.
    pub drag_luminance: f32,
    /// Lightness multiplier for window backgrounds.
    pub background_luminance: f32,
    /// Saturation multiplier for window backgrounds.
    pub background_saturation: f32,
    /// Saturation multiplier applied to the accent when disabled.
    pub disabled_saturation: f32,
}

impl Default for ThemeTuning {
    fn default() -> Self {
        Self {
            normal_luminance: 0.4,
            normal_saturation: 0.5,
            hover_luminance: 0.7,
            hover_saturation: 0.8,
            active_luminance: 0.6,
            active_saturation: 0.7,
            drag_luminance: 1.1,
            background_luminance: 0.13,
            background_saturation: 0.05,
            disabled_saturation: 0.1,
        }
    }
}

static TUNING: Lazy<Mutex<ThemeTuning>> = Lazy::new(|| Mutex::new(ThemeTuning::default()));

/// Replaces the process-wide derivation tuning.
///
/// Affects every derivation made after the call. Tests that change the
/// tuning must restore it and run serially.
pub fn set_tuning(tuning: ThemeTuning) {
    let mut guard = TUNING.lock().unwrap();
    *guard = tuning;
}

/// Returns a copy of the current process-wide tuning.
pub fn tuning() -> ThemeTuning {
    *TUNING.lock().unwrap()
}

// ─── Shade derivation ───

/// The accent itself, or its washed-out form when the widget is disabled.
pub fn state_color(base: Color, enabled: bool) -> Color {
    if enabled {
        base
    } else {
        base.multiply_saturation(tuning().disabled_saturation)
    }
}

/// Shade for widgets at rest.
pub fn normal_color(base: Color) -> Color {
    let t = tuning();
    base.multiply_luminance(t.normal_luminance)
        .multiply_saturation(t.normal_saturation)
}

/// Shade for widgets under the cursor.
pub fn hovered_color(base: Color) -> Color {
    let t = tuning();
    base.multiply_luminance(t.hover_luminance)
        .multiply_saturation(t.hover_saturation)
}

/// Shade for pressed widgets.
pub fn active_color(base: Color) -> Color {
    let t = tuning();
    base.multiply_luminance(t.active_luminance)
        .multiply_saturation(t.active_saturation)
}

/// Shade for drag handles, slightly brighter than the accent.
pub fn drag_color(base: Color) -> Color {
    base.multiply_luminance(tuning().drag_luminance)
}

/// Near-black background tinted toward the accent.
pub fn background_color(base: Color) -> Color {
    let t = tuning();
    base.multiply_luminance(t.background_luminance)
        .multiply_saturation(t.background_saturation)
}

/// Text shade readable against [`normal_color`] of the same accent.
pub fn text_color(base: Color) -> Color {
    normal_color(base).optimal_contrast_color()
}

/// All shades derived from one accent color.
///
/// Computed once per derivation so the tuning lock is taken a bounded number
/// of times and every consumer sees a consistent snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeSet {
    /// The accent this set was derived from.
    pub base: Color,
    /// Accent after the enabled/disabled adjustment.
    pub state: Color,
    /// Widgets at rest.
    pub normal: Color,
    /// Widgets under the cursor.
    pub hovered: Color,
    /// Pressed widgets.
    pub active: Color,
    /// Drag handles.
    pub drag: Color,
    /// Window backgrounds.
    pub background: Color,
    /// Text, contrast-picked against `normal`.
    pub text: Color,
    /// Borders, contrast-picked against `background`.
    pub border: Color,
}

impl ShadeSet {
    /// Derives the full shade set from `base`.
    ///
    /// When `enabled` is false the accent is desaturated first and every
    /// shade derives from the washed-out form.
    pub fn derive(base: Color, enabled: bool) -> Self {
        let state = state_color(base, enabled);
        let normal = normal_color(state);
        let background = background_color(state);
        Self {
            base,
            state,
            normal,
            hovered: hovered_color(state),
            active: active_color(state),
            drag: drag_color(state),
            background,
            text: normal.optimal_contrast_color(),
            border: background.optimal_contrast_color(),
        }
    }
}

/// Writes an accent-derived theme into the host's persistent style table.
///
/// Every slot is overwritten; there is no rollback. Use [`super::ScopedTheme`]
/// for reversible theming.
pub fn apply<H: StyleHost>(host: &mut H, base: Color) {
    let shades = ShadeSet::derive(base, true);
    for (slot, color) in global_assignments(&shades) {
        host.set_color(slot, color);
    }
}

/// Slot assignments for the persistent table.
fn global_assignments(s: &ShadeSet) -> [(StyleSlot, Color); StyleSlot::COUNT] {
    [
        (StyleSlot::Text, s.text),
        (StyleSlot::TextDisabled, s.text),
        (StyleSlot::TextSelectedBg, s.base),
        (StyleSlot::Button, s.normal),
        (StyleSlot::ButtonActive, s.active),
        (StyleSlot::ButtonHovered, s.hovered),
        (StyleSlot::CheckMark, s.text),
        (StyleSlot::Header, s.normal),
        (StyleSlot::HeaderActive, s.active),
        (StyleSlot::HeaderHovered, s.hovered),
        (StyleSlot::SliderGrab, s.drag),
        (StyleSlot::SliderGrabActive, s.base),
        (StyleSlot::Tab, s.normal),
        (StyleSlot::TabActive, s.active),
        (StyleSlot::TabHovered, s.hovered),
        (StyleSlot::TitleBg, s.normal),
        (StyleSlot::TitleBgActive, s.active),
        (StyleSlot::TitleBgCollapsed, s.normal),
        (StyleSlot::Border, s.border),
        (StyleSlot::FrameBg, s.normal),
        (StyleSlot::FrameBgActive, s.active),
        (StyleSlot::FrameBgHovered, s.hovered),
        (StyleSlot::NavHighlight, s.normal),
        (StyleSlot::ResizeGrip, s.normal),
        (StyleSlot::ResizeGripActive, s.active),
        (StyleSlot::ResizeGripHovered, s.hovered),
        (StyleSlot::PlotLines, s.normal),
        (StyleSlot::PlotLinesHovered, s.hovered),
        (StyleSlot::PlotHistogram, s.normal),
        (StyleSlot::PlotHistogramHovered, s.hovered),
        (StyleSlot::ScrollbarGrab, s.normal),
        (StyleSlot::ScrollbarGrabActive, s.active),
        (StyleSlot::ScrollbarGrabHovered, s.hovered),
        (StyleSlot::WindowBg, s.background),
        (StyleSlot::ChildBg, s.background),
        (StyleSlot::PopupBg, s.background),
    ]
}

/// Slot assignments pushed by a scoped theme.
///
/// Differs from the persistent mapping in four slots: selection and slider
/// grabs track the state color rather than the raw accent, and borders use
/// the text shade so nested scopes outline in their own accent.
pub(crate) fn scoped_assignments(s: &ShadeSet) -> [(StyleSlot, Color); StyleSlot::COUNT] {
    [
        (StyleSlot::Text, s.text),
        (StyleSlot::TextDisabled, s.text),
        (StyleSlot::TextSelectedBg, s.state),
        (StyleSlot::Button, s.normal),
        (StyleSlot::ButtonActive, s.active),
        (StyleSlot::ButtonHovered, s.hovered),
        (StyleSlot::CheckMark, s.text),
        (StyleSlot::Header, s.normal),
        (StyleSlot::HeaderActive, s.active),
        (StyleSlot::HeaderHovered, s.hovered),
        (StyleSlot::SliderGrab, s.state),
        (StyleSlot::SliderGrabActive, s.active),
        (StyleSlot::Tab, s.normal),
        (StyleSlot::TabActive, s.active),
        (StyleSlot::TabHovered, s.hovered),
        (StyleSlot::TitleBg, s.normal),
        (StyleSlot::TitleBgActive, s.active),
        (StyleSlot::TitleBgCollapsed, s.normal),
        (StyleSlot::Border, s.text),
        (StyleSlot::FrameBg, s.normal),
        (StyleSlot::FrameBgActive, s.active),
        (StyleSlot::FrameBgHovered, s.hovered),
        (StyleSlot::NavHighlight, s.normal),
        (StyleSlot::ResizeGrip, s.normal),
        (StyleSlot::ResizeGripActive, s.active),
        (StyleSlot::ResizeGripHovered, s.hovered),
        (StyleSlot::PlotLines, s.normal),
        (StyleSlot::PlotLinesHovered, s.hovered),
        (StyleSlot::PlotHistogram, s.normal),
        (StyleSlot::PlotHistogramHovered, s.hovered),
        (StyleSlot::ScrollbarGrab, s.normal),
        (StyleSlot::ScrollbarGrabActive, s.active),
        (StyleSlot::ScrollbarGrabHovered, s.hovered),
        (StyleSlot::WindowBg, s.background),
        (StyleSlot::ChildBg, s.background),
        (StyleSlot::PopupBg, s.background),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryStyleTable;
    use crate::palette;
    use serial_test::serial;

    const EPSILON: f32 = 1e-4;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < EPSILON, "{} != {}", a, b);
    }

    // ==== Shade derivation ====

    #[test]
    #[serial]
    fn test_normal_scales_lightness_and_saturation() {
        let base = palette::semantic::BLUE;
        let hlsa = base.to_hlsa();
        let normal = normal_color(base).to_hlsa();
        assert_close(normal.l, hlsa.l * 0.4);
        assert_close(normal.s, (hlsa.s * 0.5).min(1.0));
    }

    #[test]
    #[serial]
    fn test_state_color_desaturates_when_disabled() {
        let base = palette::semantic::RED;
        assert_eq!(state_color(base, true), base);
        let disabled = state_color(base, false).to_hlsa();
        assert_close(disabled.s, (base.to_hlsa().s * 0.1).min(1.0));
        assert_close(disabled.l, base.to_hlsa().l);
    }

    #[test]
    #[serial]
    fn test_drag_is_brighter_than_base_until_clamp() {
        let base = Color::from_rgb8(60, 90, 140);
        let l = base.to_hlsa().l;
        assert_close(drag_color(base).to_hlsa().l, (l * 1.1).min(1.0));
    }

    #[test]
    #[serial]
    fn test_background_is_near_black() {
        let bg = background_color(palette::semantic::BLUE).to_hlsa();
        assert!(bg.l < 0.1);
        assert!(bg.s < 0.1);
    }

    #[test]
    #[serial]
    fn test_black_base_derives_black_background() {
        let bg = background_color(palette::BLACK).to_hlsa();
        assert_close(bg.l, 0.0);
        assert_close(bg.s, 0.0);
    }

    #[test]
    #[serial]
    fn test_text_contrasts_against_normal() {
        for base in [
            palette::semantic::BLUE,
            palette::semantic::RED,
            palette::semantic::YELLOW,
            palette::GRAY,
        ] {
            let normal = normal_color(base);
            let ratio = text_color(base).contrast_ratio(normal);
            assert!(ratio >= 2.0, "ratio {} too low for {:?}", ratio, base);
        }
    }

    #[test]
    #[serial]
    fn test_derive_matches_free_functions() {
        let base = palette::semantic::ORANGE;
        let shades = ShadeSet::derive(base, true);
        assert_eq!(shades.state, base);
        assert_eq!(shades.normal, normal_color(base));
        assert_eq!(shades.hovered, hovered_color(base));
        assert_eq!(shades.active, active_color(base));
        assert_eq!(shades.drag, drag_color(base));
        assert_eq!(shades.background, background_color(base));
        assert_eq!(shades.text, text_color(base));
    }

    #[test]
    #[serial]
    fn test_disabled_derivation_flows_from_washed_state() {
        let base = palette::semantic::GREEN;
        let shades = ShadeSet::derive(base, false);
        assert_eq!(shades.base, base);
        assert_eq!(shades.state, state_color(base, false));
        assert_eq!(shades.normal, normal_color(shades.state));
    }

    // ==== Tuning global ====

    #[test]
    #[serial]
    fn test_set_tuning_changes_derivations() {
        let base = palette::semantic::BLUE;
        let before = normal_color(base);

        let custom = ThemeTuning {
            normal_luminance: 0.8,
            ..ThemeTuning::default()
        };
        set_tuning(custom);
        let after = normal_color(base);
        set_tuning(ThemeTuning::default());

        assert_ne!(before, after);
        assert!(after.to_hlsa().l > before.to_hlsa().l);
        assert_eq!(normal_color(base), before);
    }

    #[test]
    #[serial]
    fn test_tuning_returns_current_snapshot() {
        assert_eq!(tuning(), ThemeTuning::default());
    }

    // ==== Application ====

    #[test]
    #[serial]
    fn test_apply_writes_every_slot() {
        let mut table = MemoryStyleTable::new();
        let base = palette::semantic::BLUE;
        apply(&mut table, base);

        let shades = ShadeSet::derive(base, true);
        assert_eq!(table.color(StyleSlot::Button), shades.normal);
        assert_eq!(table.color(StyleSlot::ButtonHovered), shades.hovered);
        assert_eq!(table.color(StyleSlot::ButtonActive), shades.active);
        assert_eq!(table.color(StyleSlot::Text), shades.text);
        assert_eq!(table.color(StyleSlot::TextSelectedBg), base);
        assert_eq!(table.color(StyleSlot::SliderGrab), shades.drag);
        assert_eq!(table.color(StyleSlot::SliderGrabActive), base);
        assert_eq!(table.color(StyleSlot::Border), shades.border);
        assert_eq!(table.color(StyleSlot::WindowBg), shades.background);
        assert_eq!(table.color(StyleSlot::PopupBg), shades.background);
        assert_eq!(table.stack_depth(), 0);
    }

    #[test]
    #[serial]
    fn test_assignment_tables_cover_every_slot_once() {
        let shades = ShadeSet::derive(palette::semantic::BLUE, true);
        for table in [global_assignments(&shades), scoped_assignments(&shades)] {
            let mut seen = [false; StyleSlot::COUNT];
            for (slot, _) in table {
                assert!(!seen[slot.index()], "duplicate slot {:?}", slot);
                seen[slot.index()] = true;
            }
            assert!(seen.iter().all(|s| *s));
        }
    }

    #[test]
    #[serial]
    fn test_scoped_mapping_diverges_in_four_slots() {
        // disabled so state differs from base and the divergence is visible
        let shades = ShadeSet::derive(palette::semantic::PINK, false);
        let global = global_assignments(&shades);
        let scoped = scoped_assignments(&shades);
        let mut diverging = Vec::new();
        for ((slot, g), (_, s)) in global.iter().zip(scoped.iter()) {
            if g != s {
                diverging.push(*slot);
            }
        }
        assert_eq!(
            diverging,
            vec![
                StyleSlot::TextSelectedBg,
                StyleSlot::SliderGrab,
                StyleSlot::SliderGrabActive,
                StyleSlot::Border,
            ]
        );
    }
}
