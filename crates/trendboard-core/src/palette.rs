//! Chart colors
//!
//! A fixed palette cycled by series index, plus a lookup from fashion color
//! names to their real hex value so color charts draw in the color they name.

/// Accent colors used for single-series charts
pub const PRIMARY: &str = "#667eea";
pub const SECONDARY: &str = "#764ba2";
pub const SUCCESS: &str = "#28a745";
pub const DANGER: &str = "#dc3545";

/// Slice / segment border
pub const BORDER: &str = "#ffffff";

pub const PALETTE: [&str; 12] = [
    "#667eea", "#764ba2", "#f093fb", "#4facfe", "#43e97b", "#fa709a", "#fee140", "#30cfd0",
    "#a8edea", "#fed6e3", "#c471ed", "#12c2e9",
];

const COLOR_NAMES: [(&str, &str); 17] = [
    ("Black", "#000000"),
    ("White", "#FFFFFF"),
    ("Red", "#FF0000"),
    ("Blue", "#0000FF"),
    ("Green", "#00FF00"),
    ("Yellow", "#FFFF00"),
    ("Pink", "#FFC0CB"),
    ("Purple", "#800080"),
    ("Orange", "#FFA500"),
    ("Brown", "#8B4513"),
    ("Gray", "#808080"),
    ("Grey", "#808080"),
    ("Beige", "#F5F5DC"),
    ("Navy", "#000080"),
    ("Turquoise", "#40E0D0"),
    ("Gold", "#FFD700"),
    ("Silver", "#C0C0C0"),
];

/// Palette entry for a series index
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Real hex value for a known color name (exact, case-sensitive match)
pub fn named_color(name: &str) -> Option<&'static str> {
    COLOR_NAMES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, hex)| *hex)
}

/// Named color when recognized, palette entry at `index` otherwise
pub fn color_for(name: &str, index: usize) -> &'static str {
    named_color(name).unwrap_or_else(|| palette_color(index))
}

/// Append a two-digit hex alpha, e.g. `("#667eea", 0x20)` -> `"#667eea20"`
pub fn with_alpha(hex: &str, alpha: u8) -> String {
    format!("{}{:02x}", hex, alpha)
}

/// How a multi-series chart picks series colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorStrategy {
    /// Palette cycled by index
    Palette,
    /// Series are color names; draw them in their own color
    NamedColors,
}

impl ColorStrategy {
    pub fn pick(&self, name: &str, index: usize) -> &'static str {
        match self {
            ColorStrategy::Palette => palette_color(index),
            ColorStrategy::NamedColors => color_for(name, index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), "#667eea");
        assert_eq!(palette_color(12), "#667eea");
        assert_eq!(palette_color(13), "#764ba2");
    }

    #[test]
    fn test_known_names_map_to_hex() {
        for (name, hex) in COLOR_NAMES {
            for index in [0, 5, 27] {
                assert_eq!(color_for(name, index), hex);
            }
        }
    }

    #[test]
    fn test_unknown_names_fall_back_to_palette_index() {
        for index in 0..30 {
            assert_eq!(color_for("Mauve", index), PALETTE[index % PALETTE.len()]);
        }
        // lookup is exact
        assert_eq!(color_for("black", 3), PALETTE[3]);
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#667eea", 0x20), "#667eea20");
        assert_eq!(with_alpha("#000000", 0x05), "#00000005");
    }

    #[test]
    fn test_strategy_pick() {
        assert_eq!(ColorStrategy::Palette.pick("Red", 1), PALETTE[1]);
        assert_eq!(ColorStrategy::NamedColors.pick("Red", 1), "#FF0000");
    }
}
