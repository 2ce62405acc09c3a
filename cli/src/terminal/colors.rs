use colored::Color;

pub const ACCENT: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const DOMAIN: Color = Color::BrightCyan;
pub const PENDING: Color = Color::BrightBlack;
pub const AVAILABLE: Color = Color::Green;
pub const UNAVAILABLE: Color = Color::Red;
