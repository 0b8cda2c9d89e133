//! Prints shade swatches for the semantic accents and walks a style table
//! through a scoped override, so the derivation can be eyeballed in a
//! terminal.

use anyhow::Result;
use console::Style;
use lacquer::prelude::*;
use lacquer::theme;

/// Maps a color onto the xterm 256-color cube for terminals without
/// true-color support.
fn ansi256(color: Color) -> u8 {
    let (r, g, b, _) = color.to_rgba8();
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

fn swatch(color: Color) -> String {
    Style::new()
        .on_color256(ansi256(color))
        .apply_to("      ")
        .to_string()
}

fn print_shade_row(name: &str, accent: Color) {
    let shades = theme::ShadeSet::derive(accent, true);
    let cells = [
        shades.base,
        shades.normal,
        shades.hovered,
        shades.active,
        shades.drag,
        shades.background,
        shades.text,
    ];
    let blocks: Vec<String> = cells.iter().map(|c| swatch(*c)).collect();
    println!(
        "{:>10}  {}  {}",
        name,
        blocks.join(" "),
        accent.to_hex_string()
    );
}

fn print_scope_walkthrough() -> Result<()> {
    let mut table = MemoryStyleTable::new();
    apply(&mut table, palette::semantic::NORMAL);

    println!();
    println!("Button slot through a scoped error theme:");
    println!(
        "  before  {} {}",
        swatch(table.color(StyleSlot::Button)),
        table.color(StyleSlot::Button).to_hex_string()
    );

    {
        let mut scope = ScopedTheme::new(&mut table, palette::semantic::ERROR);
        let button = scope.host().color(StyleSlot::Button);
        println!("  inside  {} {}", swatch(button), button.to_hex_string());
    }

    println!(
        "  after   {} {}",
        swatch(table.color(StyleSlot::Button)),
        table.color(StyleSlot::Button).to_hex_string()
    );

    let custom = Color::from_hex("#49a3ff")?;
    println!();
    println!(
        "Parsed accent {} contrasts its text at {:.2}",
        custom.to_hex_string(),
        theme::text_color(custom).contrast_ratio(theme::normal_color(custom))
    );
    Ok(())
}

fn main() -> Result<()> {
    let accents = [
        ("normal", palette::semantic::NORMAL),
        ("emphasis", palette::semantic::EMPHASIS),
        ("success", palette::semantic::SUCCESS),
        ("warning", palette::semantic::WARNING),
        ("error", palette::semantic::ERROR),
        ("info", palette::semantic::INFO),
        ("pink", palette::semantic::PINK),
        ("purple", palette::semantic::PURPLE),
    ];

    println!(
        "{:>10}  {:^6} {:^6} {:^6} {:^6} {:^6} {:^6} {:^6}",
        "accent", "base", "normal", "hover", "active", "drag", "bg", "text"
    );
    for (name, accent) in accents {
        print_shade_row(name, accent);
    }

    print_scope_walkthrough()
}
