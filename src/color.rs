use egui::Color32;

/// Named colors offered by the color picker, in display order.
///
/// Values follow the CSS named-color table.
pub const PALETTE: &[(&str, Color32)] = &[
    ("black", Color32::from_rgb(0, 0, 0)),
    ("white", Color32::from_rgb(255, 255, 255)),
    ("gray", Color32::from_rgb(128, 128, 128)),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("purple", Color32::from_rgb(128, 0, 128)),
    ("pink", Color32::from_rgb(255, 192, 203)),
    ("brown", Color32::from_rgb(165, 42, 42)),
    ("cyan", Color32::from_rgb(0, 255, 255)),
    ("magenta", Color32::from_rgb(255, 0, 255)),
];

/// Resolve a color token to an sRGB color.
///
/// Accepts the palette names (case-insensitive, `grey` as an alias) and
/// `#rgb` / `#rrggbb` hex notation.
pub fn parse_color(token: &str) -> Option<Color32> {
    let token = token.trim();
    if let Some(hex) = token.strip_prefix('#') {
        return parse_hex(hex);
    }

    let name = token.to_ascii_lowercase();
    let name = if name == "grey" { "gray" } else { name.as_str() };
    PALETTE
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, color)| *color)
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut channels = hex.chars().filter_map(|c| c.to_digit(16)).map(|d| (d * 17) as u8);
            Some(Color32::from_rgb(channels.next()?, channels.next()?, channels.next()?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color("red"), Some(Color32::from_rgb(255, 0, 0)));
        assert_eq!(parse_color("Blue"), Some(Color32::from_rgb(0, 0, 255)));
        assert_eq!(parse_color(" green "), Some(Color32::from_rgb(0, 128, 0)));
        assert_eq!(parse_color("grey"), parse_color("gray"));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color("#ff8000"), Some(Color32::from_rgb(255, 128, 0)));
        assert_eq!(parse_color("#0f0"), Some(Color32::from_rgb(0, 255, 0)));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
    }

    #[test]
    fn test_unknown_color() {
        assert_eq!(parse_color("chartreuse-ish"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn test_palette_names_resolve() {
        for (name, color) in PALETTE {
            assert_eq!(parse_color(name), Some(*color));
        }
    }
}
