//! Color palette.

use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(5, 5, 5);
pub const PRIMARY: Color = Color::Rgb(0, 240, 255);
pub const SECONDARY: Color = Color::Rgb(168, 85, 247);
pub const ACCENT: Color = Color::Rgb(244, 114, 182);
pub const SILVER: Color = Color::Rgb(192, 192, 208);
pub const TEXT: Color = Color::Rgb(226, 232, 240);
pub const TEXT_MUTED: Color = Color::Rgb(148, 163, 184);
pub const TEXT_DARK: Color = Color::Rgb(100, 116, 139);
pub const SUCCESS: Color = Color::Rgb(34, 197, 94);
