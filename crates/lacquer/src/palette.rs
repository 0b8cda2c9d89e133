//! Named color palettes.
//!
//! Two independent tables:
//!
//! - The general-purpose table in this module: the classic named colors
//!   (`RED`, `CORAL`, `LIVING_CORAL`, ...) as `const` items, plus a
//!   case-insensitive [`lookup`] over a map built once at first use.
//! - The [`semantic`] table: a smaller set of vivid, hex-tuned entries meant
//!   for theming, whose role names (`NORMAL`, `ERROR`, `WARNING`, ...) alias
//!   entries of the same table.
//!
//! # Example
//!
//! ```rust
//! use lacquer::palette;
//!
//! assert_eq!(palette::lookup("coral"), Some(palette::CORAL));
//! assert_eq!(palette::semantic::ERROR, palette::semantic::RED);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::color::Color;

/// Pure red.
pub const RED: Color = Color::from_rgb8(255, 0, 0);
/// Pure green.
pub const GREEN: Color = Color::from_rgb8(0, 255, 0);
/// Pure blue.
pub const BLUE: Color = Color::from_rgb8(0, 0, 255);
/// Pure yellow.
pub const YELLOW: Color = Color::from_rgb8(255, 255, 0);
/// Pure cyan.
pub const CYAN: Color = Color::from_rgb8(0, 255, 255);
/// Pure magenta.
pub const MAGENTA: Color = Color::from_rgb8(255, 0, 255);
/// White.
pub const WHITE: Color = Color::from_rgb8(255, 255, 255);
/// Black.
pub const BLACK: Color = Color::from_rgb8(0, 0, 0);
/// Mid gray.
pub const GRAY: Color = Color::from_rgb8(128, 128, 128);
/// Light gray.
pub const LIGHT_GRAY: Color = Color::from_rgb8(192, 192, 192);
/// Dark gray.
pub const DARK_GRAY: Color = Color::from_rgb8(64, 64, 64);
/// Fully transparent black.
pub const TRANSPARENT: Color = Color::from_rgba8(0, 0, 0, 0);
/// Orange.
pub const ORANGE: Color = Color::from_rgb8(255, 165, 0);
/// Purple.
pub const PURPLE: Color = Color::from_rgb8(128, 0, 128);
/// Brown.
pub const BROWN: Color = Color::from_rgb8(165, 42, 42);
/// Pink.
pub const PINK: Color = Color::from_rgb8(255, 192, 203);
/// Gold.
pub const GOLD: Color = Color::from_rgb8(255, 215, 0);
/// Silver.
pub const SILVER: Color = Color::from_rgb8(192, 192, 192);
/// Bronze.
pub const BRONZE: Color = Color::from_rgb8(205, 127, 50);
/// Teal.
pub const TEAL: Color = Color::from_rgb8(0, 128, 128);
/// Olive.
pub const OLIVE: Color = Color::from_rgb8(128, 128, 0);
/// Maroon.
pub const MAROON: Color = Color::from_rgb8(128, 0, 0);
/// Navy.
pub const NAVY: Color = Color::from_rgb8(0, 0, 128);
/// Lime.
pub const LIME: Color = Color::from_rgb8(0, 255, 0);
/// Indigo.
pub const INDIGO: Color = Color::from_rgb8(75, 0, 130);
/// Turquoise.
pub const TURQUOISE: Color = Color::from_rgb8(64, 224, 208);
/// Violet.
pub const VIOLET: Color = Color::from_rgb8(238, 130, 238);
/// Beige.
pub const BEIGE: Color = Color::from_rgb8(245, 245, 220);
/// Peach.
pub const PEACH: Color = Color::from_rgb8(255, 218, 185);
/// Mint.
pub const MINT: Color = Color::from_rgb8(189, 252, 201);
/// Lavender.
pub const LAVENDER: Color = Color::from_rgb8(230, 230, 250);
/// Coral.
pub const CORAL: Color = Color::from_rgb8(255, 127, 80);
/// Salmon.
pub const SALMON: Color = Color::from_rgb8(250, 128, 114);
/// Khaki.
pub const KHAKI: Color = Color::from_rgb8(240, 230, 140);
/// Plum.
pub const PLUM: Color = Color::from_rgb8(221, 160, 221);
/// Metallic gold.
pub const GOLD_METALLIC: Color = Color::from_rgb8(212, 175, 55);
/// Metallic silver.
pub const SILVER_METALLIC: Color = Color::from_rgb8(168, 169, 173);
/// Metallic bronze.
pub const BRONZE_METALLIC: Color = Color::from_rgb8(205, 127, 50);
/// Metallic copper.
pub const COPPER_METALLIC: Color = Color::from_rgb8(184, 115, 51);
/// Gunmetal.
pub const GUNMETAL_METALLIC: Color = Color::from_rgb8(42, 52, 57);
/// Amethyst.
pub const AMETHYST: Color = Color::from_rgb8(153, 102, 204);
/// Emerald.
pub const EMERALD: Color = Color::from_rgb8(80, 200, 120);
/// Sapphire.
pub const SAPPHIRE: Color = Color::from_rgb8(15, 82, 186);
/// Ruby.
pub const RUBY: Color = Color::from_rgb8(224, 17, 95);
/// Diamond.
pub const DIAMOND: Color = Color::from_rgb8(185, 242, 255);
/// Pearl.
pub const PEARL: Color = Color::from_rgb8(234, 224, 200);
/// Onyx.
pub const ONYX: Color = Color::from_rgb8(53, 56, 57);
/// Ruby red.
pub const RUBY_RED: Color = Color::from_rgb8(132, 63, 91);
/// Sapphire blue.
pub const SAPPHIRE_BLUE: Color = Color::from_rgb8(0, 103, 165);
/// Emerald green.
pub const EMERALD_GREEN: Color = Color::from_rgb8(0, 153, 68);
/// Amethyst purple.
pub const AMETHYST_PURPLE: Color = Color::from_rgb8(153, 102, 204);
/// Citrine yellow.
pub const CITRINE_YELLOW: Color = Color::from_rgb8(228, 208, 10);
/// Topaz orange.
pub const TOPAZ_ORANGE: Color = Color::from_rgb8(255, 191, 0);
/// Aquamarine blue.
pub const AQUAMARINE_BLUE: Color = Color::from_rgb8(0, 191, 255);
/// Peridot green.
pub const PERIDOT_GREEN: Color = Color::from_rgb8(153, 204, 0);
/// Rose quartz pink.
pub const ROSE_QUARTZ_PINK: Color = Color::from_rgb8(170, 152, 169);
/// Serenity blue.
pub const SERENITY_BLUE: Color = Color::from_rgb8(131, 146, 159);
/// Marsala red.
pub const MARSALA_RED: Color = Color::from_rgb8(150, 75, 75);
/// Radiant orchid purple.
pub const RADIANT_ORCHID_PURPLE: Color = Color::from_rgb8(191, 85, 156);
/// Tangerine orange.
pub const TANGERINE_ORANGE: Color = Color::from_rgb8(242, 133, 0);
/// Classic blue.
pub const CLASSIC_BLUE: Color = Color::from_rgb8(0, 133, 202);
/// Greenery green.
pub const GREENERY_GREEN: Color = Color::from_rgb8(136, 176, 75);
/// Ultra violet purple.
pub const ULTRA_VIOLET_PURPLE: Color = Color::from_rgb8(95, 75, 139);
/// Living coral.
pub const LIVING_CORAL: Color = Color::from_rgb8(255, 111, 97);

/// Name/color pairs for the general-purpose table, in declaration order.
pub const NAMED: &[(&str, Color)] = &[
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
    ("yellow", YELLOW),
    ("cyan", CYAN),
    ("magenta", MAGENTA),
    ("white", WHITE),
    ("black", BLACK),
    ("gray", GRAY),
    ("light_gray", LIGHT_GRAY),
    ("dark_gray", DARK_GRAY),
    ("transparent", TRANSPARENT),
    ("orange", ORANGE),
    ("purple", PURPLE),
    ("brown", BROWN),
    ("pink", PINK),
    ("gold", GOLD),
    ("silver", SILVER),
    ("bronze", BRONZE),
    ("teal", TEAL),
    ("olive", OLIVE),
    ("maroon", MAROON),
    ("navy", NAVY),
    ("lime", LIME),
    ("indigo", INDIGO),
    ("turquoise", TURQUOISE),
    ("violet", VIOLET),
    ("beige", BEIGE),
    ("peach", PEACH),
    ("mint", MINT),
    ("lavender", LAVENDER),
    ("coral", CORAL),
    ("salmon", SALMON),
    ("khaki", KHAKI),
    ("plum", PLUM),
    ("gold_metallic", GOLD_METALLIC),
    ("silver_metallic", SILVER_METALLIC),
    ("bronze_metallic", BRONZE_METALLIC),
    ("copper_metallic", COPPER_METALLIC),
    ("gunmetal_metallic", GUNMETAL_METALLIC),
    ("amethyst", AMETHYST),
    ("emerald", EMERALD),
    ("sapphire", SAPPHIRE),
    ("ruby", RUBY),
    ("diamond", DIAMOND),
    ("pearl", PEARL),
    ("onyx", ONYX),
    ("ruby_red", RUBY_RED),
    ("sapphire_blue", SAPPHIRE_BLUE),
    ("emerald_green", EMERALD_GREEN),
    ("amethyst_purple", AMETHYST_PURPLE),
    ("citrine_yellow", CITRINE_YELLOW),
    ("topaz_orange", TOPAZ_ORANGE),
    ("aquamarine_blue", AQUAMARINE_BLUE),
    ("peridot_green", PERIDOT_GREEN),
    ("rose_quartz_pink", ROSE_QUARTZ_PINK),
    ("serenity_blue", SERENITY_BLUE),
    ("marsala_red", MARSALA_RED),
    ("radiant_orchid_purple", RADIANT_ORCHID_PURPLE),
    ("tangerine_orange", TANGERINE_ORANGE),
    ("classic_blue", CLASSIC_BLUE),
    ("greenery_green", GREENERY_GREEN),
    ("ultra_violet_purple", ULTRA_VIOLET_PURPLE),
    ("living_coral", LIVING_CORAL),
];

static LOOKUP: Lazy<HashMap<&'static str, Color>> =
    Lazy::new(|| NAMED.iter().copied().collect());

/// Looks up a general-table color by name, case-insensitively.
///
/// ```rust
/// use lacquer::palette;
///
/// assert_eq!(palette::lookup("Living_Coral"), Some(palette::LIVING_CORAL));
/// assert_eq!(palette::lookup("no_such_color"), None);
/// ```
pub fn lookup(name: &str) -> Option<Color> {
    LOOKUP.get(name.to_ascii_lowercase().as_str()).copied()
}

/// The semantic palette: vivid hex-tuned entries and their role aliases.
///
/// Role names (`NORMAL`, `EMPHASIS`, `ERROR`, `WARNING`, `INFO`, `SUCCESS`)
/// alias entries of this same table, so a theme built from `semantic::ERROR`
/// is identical to one built from `semantic::RED`.
pub mod semantic {
    use crate::color::Color;

    /// Tuned red (`#ff4a49`).
    pub const RED: Color = Color::from_rgb8(255, 74, 73);
    /// Tuned green (`#49ff4a`).
    pub const GREEN: Color = Color::from_rgb8(73, 255, 74);
    /// Tuned blue (`#49a3ff`).
    pub const BLUE: Color = Color::from_rgb8(73, 163, 255);
    /// Tuned cyan (`#49feff`).
    pub const CYAN: Color = Color::from_rgb8(73, 254, 255);
    /// Tuned magenta (`#ff49fe`).
    pub const MAGENTA: Color = Color::from_rgb8(255, 73, 254);
    /// Tuned yellow (`#ecff49`).
    pub const YELLOW: Color = Color::from_rgb8(236, 255, 73);
    /// Tuned orange (`#ffa549`).
    pub const ORANGE: Color = Color::from_rgb8(255, 165, 73);
    /// Tuned pink (`#ff49a3`).
    pub const PINK: Color = Color::from_rgb8(255, 73, 163);
    /// Tuned lime (`#a3ff49`).
    pub const LIME: Color = Color::from_rgb8(163, 255, 73);
    /// Tuned purple (`#c949ff`).
    pub const PURPLE: Color = Color::from_rgb8(201, 73, 255);
    /// White.
    pub const WHITE: Color = Color::from_rgb8(255, 255, 255);
    /// Black.
    pub const BLACK: Color = Color::from_rgb8(0, 0, 0);
    /// Mid gray.
    pub const GRAY: Color = Color::from_rgb8(128, 128, 128);
    /// Light gray.
    pub const LIGHT_GRAY: Color = Color::from_rgb8(192, 192, 192);
    /// Dark gray.
    pub const DARK_GRAY: Color = Color::from_rgb8(64, 64, 64);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::from_rgba8(0, 0, 0, 0);

    /// Default accent for neutral interactive elements.
    pub const NORMAL: Color = BLUE;
    /// Accent for emphasized elements.
    pub const EMPHASIS: Color = ORANGE;
    /// Accent for error states.
    pub const ERROR: Color = RED;
    /// Accent for warning states.
    pub const WARNING: Color = YELLOW;
    /// Accent for informational states.
    pub const INFO: Color = CYAN;
    /// Accent for success states.
    pub const SUCCESS: Color = GREEN;
}
