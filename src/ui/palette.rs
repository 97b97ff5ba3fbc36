//! Quest category colors

use macroquad::color::{Color, WHITE};

use crate::error::{QuestUiError, Result};
use crate::quest::QuestCategory;

// Category tints (medieval theme, matches the item category colors)
pub const CATEGORY_MAIN: Color = Color::new(1.0, 0.824, 0.314, 1.0);     // rgba(255, 210, 80, 255)
pub const CATEGORY_SIDE: Color = Color::new(0.345, 0.549, 0.824, 1.0);   // rgba(88, 140, 210, 255)
pub const CATEGORY_DAILY: Color = Color::new(0.392, 0.784, 0.392, 1.0);  // rgba(100, 200, 100, 255)
pub const CATEGORY_EVENT: Color = Color::new(0.424, 0.345, 0.580, 1.0);  // rgba(108, 88, 148, 255)

/// Ordered category -> color table with an explicit fallback
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPalette {
    entries: Vec<(QuestCategory, Color)>,
    default_color: Color,
}

impl CategoryPalette {
    /// Empty palette: every category resolves to `default_color`
    pub fn new(default_color: Color) -> Self {
        Self {
            entries: Vec::new(),
            default_color,
        }
    }

    /// Set the color for a category, replacing an earlier entry
    pub fn with(mut self, category: QuestCategory, color: Color) -> Self {
        self.set(category, color);
        self
    }

    pub fn set(&mut self, category: QuestCategory, color: Color) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some(entry) => entry.1 = color,
            None => self.entries.push((category, color)),
        }
    }

    /// Color for a category, or the default when the table has no entry
    pub fn color_for(&self, category: QuestCategory) -> Color {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, color)| *color)
            .unwrap_or(self.default_color)
    }

    pub fn default_color(&self) -> Color {
        self.default_color
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategoryPalette {
    // Tutorial quests intentionally have no entry and render in the default color
    fn default() -> Self {
        Self::new(WHITE)
            .with(QuestCategory::Main, CATEGORY_MAIN)
            .with(QuestCategory::Side, CATEGORY_SIDE)
            .with(QuestCategory::Daily, CATEGORY_DAILY)
            .with(QuestCategory::Event, CATEGORY_EVENT)
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional)
pub fn parse_hex_color(s: &str) -> Result<Color> {
    let hex = s.trim().trim_start_matches('#');
    // from_str_radix would also take a sign, so check the digits up front
    if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(QuestUiError::InvalidColor(s.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| QuestUiError::InvalidColor(s.to_string()))
    };

    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if hex.len() == 8 { channel(6)? } else { 255 };

    Ok(Color::from_rgba(r, g, b, a))
}

/// Format a color as `#rrggbbaa`
pub fn to_hex_color(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        channel(color.a)
    )
}
