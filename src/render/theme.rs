//! Quest UI colors and layout constants (medieval fantasy theme)

use macroquad::prelude::Color;

// Panel backgrounds
pub const PANEL_BG_DARK: Color = Color::new(0.071, 0.071, 0.094, 0.961);    // rgba(18, 18, 24, 245)
pub const OVERLAY_DIM: Color = Color::new(0.0, 0.0, 0.0, 0.588);

// Frame/Border colors (bronze/gold)
pub const FRAME_OUTER: Color = Color::new(0.322, 0.243, 0.165, 1.0);        // rgba(82, 62, 42, 255)
pub const FRAME_MID: Color = Color::new(0.557, 0.424, 0.267, 1.0);          // rgba(142, 108, 68, 255)
pub const FRAME_INNER: Color = Color::new(0.729, 0.580, 0.361, 1.0);        // rgba(186, 148, 92, 255)
pub const FRAME_ACCENT: Color = Color::new(0.855, 0.698, 0.424, 1.0);       // rgba(218, 178, 108, 255)

// Entry slots
pub const SLOT_BG_EMPTY: Color = Color::new(0.086, 0.086, 0.118, 1.0);      // rgba(22, 22, 30, 255)
pub const SLOT_BORDER: Color = Color::new(0.227, 0.212, 0.188, 1.0);        // rgba(58, 54, 48, 255)
pub const SLOT_HOVER_BG: Color = Color::new(0.188, 0.188, 0.282, 1.0);      // rgba(48, 48, 72, 255)
pub const SLOT_SELECTED_BORDER: Color = Color::new(0.855, 0.737, 0.502, 1.0); // rgba(218, 188, 128, 255)

// Header/Footer
pub const HEADER_BG: Color = Color::new(0.141, 0.125, 0.165, 1.0);          // rgba(36, 32, 42, 255)
pub const HEADER_BORDER: Color = Color::new(0.463, 0.384, 0.267, 1.0);      // rgba(118, 98, 68, 255)
pub const FOOTER_BG: Color = Color::new(0.094, 0.086, 0.110, 1.0);          // rgba(24, 22, 28, 255)

// Text
pub const TEXT_TITLE: Color = Color::new(0.855, 0.737, 0.502, 1.0);         // rgba(218, 188, 128, 255)
pub const TEXT_NORMAL: Color = Color::new(0.824, 0.824, 0.855, 1.0);        // rgba(210, 210, 218, 255)
pub const TEXT_DIM: Color = Color::new(0.502, 0.502, 0.541, 1.0);           // rgba(128, 128, 138, 255)
pub const TEXT_GOLD: Color = Color::new(1.0, 0.843, 0.314, 1.0);            // rgba(255, 215, 80, 255)

// Layout
pub const HEADER_HEIGHT: f32 = 40.0;
pub const FOOTER_HEIGHT: f32 = 30.0;
pub const FRAME_THICKNESS: f32 = 4.0;
pub const CORNER_ACCENT_SIZE: f32 = 8.0;
pub const TAB_HEIGHT: f32 = 28.0;
pub const FONT_SIZE: f32 = 16.0;
