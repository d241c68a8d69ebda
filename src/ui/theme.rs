use ratatui::style::Color;

pub const ACCENT_BLUE: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const ACCENT_RED: Color = Color::Rgb(0xf8, 0x71, 0x71);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const PANEL_BORDER: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const DISABLED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BUTTON_BG: Color = Color::Rgb(0x1d, 0x4e, 0xd8);
pub const BUTTON_SECONDARY_BG: Color = Color::Rgb(0x4b, 0x55, 0x63);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ERROR_TEXT: Color = Color::Rgb(0xfe, 0xca, 0xca);
