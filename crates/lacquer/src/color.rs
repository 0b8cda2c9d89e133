//! Color values and HSL-space derivations.
//!
//! # Representation
//!
//! [`Color`] stores normalized `f32` RGBA components; it is the canonical
//! representation and every conversion round-trips through it. [`Hlsa`] is a
//! derived hue/lightness/saturation/alpha view (each component in `[0, 1]`,
//! hue as a fraction of a full turn), computed on demand and never stored as
//! the source of truth.
//!
//! # Conventions
//!
//! - Constructors do **not** clamp: `Color::new(1.2, ...)` keeps the raw value.
//! - Every derived operation (lighten, saturate, contrast helpers, HSL
//!   round-trips) clamps its result components to `[0, 1]`.
//! - Hue wraps modulo 1 instead of clamping.
//!
//! # Example
//!
//! ```rust
//! use lacquer::Color;
//!
//! let coral = Color::from_hex("#ff7f50").unwrap();
//! let darker = coral.darken_by(0.2);
//! assert!(darker.to_hlsa().l < coral.to_hlsa().l);
//!
//! // Pick a readable text color for a coral background.
//! let text = coral.optimal_contrast_color();
//! assert!(coral.contrast_ratio(text) > 1.0);
//! ```

use crate::error::ColorError;

/// Contrast ratio targeted by [`Color::optimal_contrast_color`].
pub const OPTIMAL_TEXT_CONTRAST_RATIO: f32 = 4.5;

// ─── Color ──────────────────────────────────────────────────────────────────

/// A color as normalized RGBA components.
///
/// Components are nominally in `[0, 1]`. Constructors accept raw values
/// unclamped; derived operations always clamp their results.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component (1.0 is fully opaque).
    pub a: f32,
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::from_rgb(0.0, 0.0, 0.0)
    }
}

/// A hue/lightness/saturation/alpha view of a [`Color`].
///
/// All components are in `[0, 1]`; hue is a fraction of a full turn, not
/// degrees. Hue is only meaningful when saturation is greater than zero —
/// fully desaturated colors report a hue of 0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hlsa {
    /// Hue as a fraction of a full turn.
    pub h: f32,
    /// Lightness.
    pub l: f32,
    /// Saturation.
    pub s: f32,
    /// Alpha.
    pub a: f32,
}

impl Hlsa {
    /// Creates an HLSA value from raw components.
    pub const fn new(h: f32, l: f32, s: f32, a: f32) -> Self {
        Self { h, l, s, a }
    }
}

impl Color {
    /// Creates a color from normalized float components.
    ///
    /// Values are expected in `[0, 1]` but are not defensively clamped;
    /// clamping happens in derived operations.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from normalized float components.
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates a color from 8-bit components.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Creates an opaque color from 8-bit components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Parses a `#RRGGBB` or `#RRGGBBAA` hex color. The leading `#` is
    /// optional; a missing alpha pair defaults to `FF`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] when, after stripping `#` and
    /// defaulting the alpha pair, the input is not exactly 8 hex digits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lacquer::Color;
    ///
    /// let red = Color::from_hex("#FF0000").unwrap();
    /// assert_eq!(red, Color::from_rgb8(255, 0, 0));
    /// assert!(Color::from_hex("#FFF").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidFormat {
            input: hex.to_string(),
        };

        let cleaned = hex.strip_prefix('#').unwrap_or(hex);
        let padded;
        let digits = if cleaned.len() == 6 {
            padded = format!("{cleaned}FF");
            padded.as_str()
        } else {
            cleaned
        };

        if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let byte = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());
        Ok(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?))
    }

    /// Quantizes to 8-bit components, clamping out-of-range channels.
    pub fn to_rgba8(self) -> (u8, u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b), q(self.a))
    }

    /// Formats as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    ///
    /// ```rust
    /// use lacquer::Color;
    ///
    /// assert_eq!(Color::from_rgb8(255, 0, 0).to_hex_string(), "#FF0000");
    /// assert_eq!(Color::from_rgba8(255, 0, 0, 128).to_hex_string(), "#FF000080");
    /// ```
    pub fn to_hex_string(self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    // ─── HSL round-trip ─────────────────────────────────────────────────────

    /// Extracts the hue/lightness/saturation/alpha view of this color.
    ///
    /// Standard min/max-channel extraction: lightness is the midpoint of the
    /// extreme channels, saturation is the chroma normalized against the
    /// lightness band, and hue is piecewise by whichever channel is largest.
    /// Fully desaturated colors report hue and saturation of 0.
    pub fn to_hlsa(self) -> Hlsa {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hlsa::new(0.0, l, 0.0, self.a);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let mut h = if max == self.r {
            ((self.g - self.b) / d) + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            ((self.b - self.r) / d) + 2.0
        } else {
            ((self.r - self.g) / d) + 4.0
        };
        h /= 6.0;

        Hlsa::new(h, l, s, self.a)
    }

    /// Builds a color from a hue/lightness/saturation/alpha view.
    ///
    /// Zero saturation produces a solid gray at the given lightness. Result
    /// channels are clamped to `[0, 1]`; the hue input wraps modulo 1.
    pub fn from_hlsa(hlsa: Hlsa) -> Self {
        let Hlsa { h, l, s, a } = hlsa;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Self::new(
            r.clamp(0.0, 1.0),
            g.clamp(0.0, 1.0),
            b.clamp(0.0, 1.0),
            a.clamp(0.0, 1.0),
        )
    }

    // ─── Derived adjustments ───────────────────────────────────────────────

    /// Returns this color with lightness increased by `amount`, clamped.
    #[must_use]
    pub fn lighten_by(self, amount: f32) -> Self {
        let mut hlsa = self.to_hlsa();
        hlsa.l = (hlsa.l + amount).clamp(0.0, 1.0);
        Self::from_hlsa(hlsa)
    }

    /// Returns this color with lightness decreased by `amount`, clamped.
    #[must_use]
    pub fn darken_by(self, amount: f32) -> Self {
        let mut hlsa = self.to_hlsa();
        hlsa.l = (hlsa.l - amount).clamp(0.0, 1.0);
        Self::from_hlsa(hlsa)
    }

    /// Returns this color with saturation increased by `amount`, clamped.
    #[must_use]
    pub fn saturate_by(self, amount: f32) -> Self {
        let mut hlsa = self.to_hlsa();
        hlsa.s = (hlsa.s + amount).clamp(0.0, 1.0);
        Self::from_hlsa(hlsa)
    }

    /// Returns this color with saturation decreased by `amount`, clamped.
    #[must_use]
    pub fn desaturate_by(self, amount: f32) -> Self {
        let mut hlsa = self.to_hlsa();
        hlsa.s = (hlsa.s - amount).clamp(0.0, 1.0);
        Self::from_hlsa(hlsa)
    }

    /// Returns this color with saturation set to `amount`, clamped.
    #[must_use]
    pub fn with_saturation(self, amount: f32) -> Self {
        let mut hlsa = self.to_hlsa();
        hlsa.s = amount.clamp(0.0, 1.0);
        Self::from_hlsa(hlsa)
    }

    /// Returns this color with lightness set to `amount`, clamped.
    #[must_use]
    pub fn with_luminance(self, amount: f32) -> Self {
        let mut hlsa = self.to_hlsa();
        hlsa.l = amount.clamp(0.0, 1.0);
        Self::from_hlsa(hlsa)
    }

    /// Returns this color with alpha set to `amount`, clamped.
    #[must_use]
    pub fn with_alpha(self, amount: f32) -> Self {
        Self::new(self.r, self.g, self.b, amount.clamp(0.0, 1.0))
    }

    /// Returns this color with lightness scaled by `factor`, clamped.
    #[must_use]
    pub fn multiply_luminance(self, factor: f32) -> Self {
        let mut hlsa = self.to_hlsa();
        hlsa.l = (hlsa.l * factor).clamp(0.0, 1.0);
        Self::from_hlsa(hlsa)
    }

    /// Returns this color with saturation scaled by `factor`, clamped.
    #[must_use]
    pub fn multiply_saturation(self, factor: f32) -> Self {
        let mut hlsa = self.to_hlsa();
        hlsa.s = (hlsa.s * factor).clamp(0.0, 1.0);
        Self::from_hlsa(hlsa)
    }

    /// Returns the fully desaturated version of this color.
    #[must_use]
    pub fn to_grayscale(self) -> Self {
        self.with_saturation(0.0)
    }

    // ─── Blending ───────────────────────────────────────────────────────────

    /// Per-component linear interpolation toward `other`.
    ///
    /// `t` is clamped to `[0, 1]`: 0 returns `self`, 1 returns `other`.
    #[must_use]
    pub fn mix(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: f32, b: f32| a + (b - a) * t;
        Self::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
            lerp(self.a, other.a),
        )
    }

    /// Source-over alpha compositing of `self` on top of `background`.
    #[must_use]
    pub fn over(self, background: Color) -> Self {
        let a = self.a + background.a * (1.0 - self.a);
        if a == 0.0 {
            return Self::new(0.0, 0.0, 0.0, 0.0);
        }
        let blend =
            |fg: f32, bg: f32| (fg * self.a + bg * background.a * (1.0 - self.a)) / a;
        Self::new(
            blend(self.r, background.r).clamp(0.0, 1.0),
            blend(self.g, background.g).clamp(0.0, 1.0),
            blend(self.b, background.b).clamp(0.0, 1.0),
            a.clamp(0.0, 1.0),
        )
    }

    // ─── Contrast ───────────────────────────────────────────────────────────

    /// Contrast ratio between this color and `other`, over the HSL lightness
    /// channel: `(max(L1, L2) + 0.05) / (min(L1, L2) + 0.05)`.
    ///
    /// This is a lightness-channel approximation, not a relative-luminance
    /// accessibility formula; themed palettes are calibrated against it.
    /// The ratio is symmetric in its arguments.
    pub fn contrast_ratio(self, other: Color) -> f32 {
        let l1 = self.to_hlsa().l;
        let l2 = other.to_hlsa().l;
        (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
    }

    /// Finds a color contrasting with this one, treating `self` as the
    /// background.
    ///
    /// Solves the contrast-ratio formula for the lightness that would sit at
    /// [`OPTIMAL_TEXT_CONTRAST_RATIO`] on either side of the background
    /// lightness, then keeps whichever candidate is numerically closer to the
    /// input lightness. Hue, saturation, and alpha are preserved. The
    /// closer-candidate selection can prefer a lightness outside `[0, 1]`
    /// (clamped on conversion) over the higher-contrast alternative; existing
    /// palettes are tuned against exactly this selection.
    #[must_use]
    pub fn optimal_contrast_color(self) -> Self {
        let hlsa = self.to_hlsa();
        let l = hlsa.l;
        let l1 = ((l + 0.05) / OPTIMAL_TEXT_CONTRAST_RATIO) - 0.05;
        let l2 = ((l - 0.05) * OPTIMAL_TEXT_CONTRAST_RATIO) + 0.05;
        let chosen = if (l1 - l).abs() < (l2 - l).abs() { l1 } else { l2 };
        Self::from_hlsa(Hlsa::new(hlsa.h, chosen, hlsa.s, hlsa.a))
    }
}

/// Maps a wrapped hue offset to a single RGB channel.
///
/// Wraps `t` into `[0, 1]`, then interpolates between `p` and `q` with
/// breakpoints at 1/6, 1/2, and 2/3.
fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
