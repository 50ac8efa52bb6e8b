use ratatui::style::Color;

use crate::portal::intake::Priority;

pub const PORTAL_INDIGO: Color = Color::Rgb(0x4f, 0x46, 0xe5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FOCUS_BORDER: Color = Color::Rgb(0x81, 0x8c, 0xf8);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_PENDING: Color = Color::Rgb(0xca, 0x8a, 0x04);

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::Rgb(0x3b, 0x82, 0xf6),
        Priority::Medium => Color::Rgb(0xea, 0xb3, 0x08),
        Priority::High => Color::Rgb(0xf9, 0x73, 0x16),
        Priority::Critical => Color::Rgb(0xdc, 0x26, 0x26),
    }
}
