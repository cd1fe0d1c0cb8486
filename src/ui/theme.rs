//! Colors for the counter screen. This is the only place styling lives.

use ratatui::style::Color;

pub const HEADING_TEXT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const BODY_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const BUTTON_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FOCUS_BORDER: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const FOCUS_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
