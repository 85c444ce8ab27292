//! Centralized colors for pair highlighting.
//!
//! Default foregrounds live here. Render code asks a [`ColorScheme`] for a
//! [`StyleKey`]'s color and never hardcodes `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents on deep space blue

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use ratatui::style::Color;

use crate::style::StyleKey;

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);

    // Accent colors
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const MAGENTA: Color = Color::Rgb(198, 120, 221);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const ORANGE: Color = Color::Rgb(255, 184, 108);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Delimiter highlight colors
pub mod highlight {
    use super::*;

    pub const BRACE: Color = palette::YELLOW;
    pub const BRACKET: Color = palette::CYAN;
    pub const PARENTHESIS: Color = palette::MAGENTA;
    pub const DOUBLE_QUOTE: Color = palette::GREEN;
    pub const CUSP_BRACKET: Color = palette::PINK;

    // Scope guides are drawn dimmer than the delimiter flash
    pub const BRACE_LINE: Color = palette::ORANGE;
    pub const BRACKET_LINE: Color = Color::Rgb(0, 150, 180);
    pub const PARENTHESIS_LINE: Color = palette::PURPLE;
    pub const DOUBLE_QUOTE_LINE: Color = Color::Rgb(80, 150, 90);
    pub const CUSP_BRACKET_LINE: Color = Color::Rgb(190, 80, 120);

    // Preview output
    pub const TICK: Color = palette::TEXT_DIM;
    pub const GUTTER_TEXT: Color = palette::TEXT;
}

/// Host color-scheme store.
pub trait ColorScheme {
    /// Foreground for `key`, or `None` when the scheme has no color for it.
    fn foreground(&self, key: StyleKey) -> Option<Color>;
}

/// Default colors plus per-key overrides from configuration.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    overrides: HashMap<StyleKey, Color>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, key: StyleKey, color: Color) -> Self {
        self.overrides.insert(key, color);
        self
    }

    /// Builds a theme from `[colors]` entries. Entries that do not parse as a
    /// color are skipped and reported in the returned warnings.
    pub fn from_colors(colors: &BTreeMap<StyleKey, String>) -> (Self, Vec<String>) {
        let mut theme = Self::new();
        let mut warnings = Vec::new();

        for (key, value) in colors {
            match Color::from_str(value) {
                Ok(color) => {
                    theme.overrides.insert(*key, color);
                }
                Err(_) => {
                    log::warn!("ignoring invalid color {:?} for {}", value, key);
                    warnings.push(format!("Invalid color '{}' for {}", value, key));
                }
            }
        }

        (theme, warnings)
    }
}

impl ColorScheme for Theme {
    fn foreground(&self, key: StyleKey) -> Option<Color> {
        self.overrides
            .get(&key)
            .copied()
            .or_else(|| default_foreground(key))
    }
}

fn default_foreground(key: StyleKey) -> Option<Color> {
    let color = match key {
        StyleKey::Brace => highlight::BRACE,
        StyleKey::BraceLine => highlight::BRACE_LINE,
        StyleKey::Bracket => highlight::BRACKET,
        StyleKey::BracketLine => highlight::BRACKET_LINE,
        StyleKey::Parenthesis => highlight::PARENTHESIS,
        StyleKey::ParenthesisLine => highlight::PARENTHESIS_LINE,
        StyleKey::DoubleQuote => highlight::DOUBLE_QUOTE,
        StyleKey::DoubleQuoteLine => highlight::DOUBLE_QUOTE_LINE,
        StyleKey::CuspBracket => highlight::CUSP_BRACKET,
        StyleKey::CuspBracketLine => highlight::CUSP_BRACKET_LINE,
        StyleKey::Default => return None,
    };
    Some(color)
}
