use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 130, g: 200, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 170, b: 60 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const IPV4_ADDR: Color = Color::TrueColor { r: 110, g: 220, b: 140 };
pub const PORT: Color = Color::TrueColor { r: 230, g: 210, b: 110 };
pub const OS_LINUX: Color = Color::Yellow;
pub const OS_WINDOWS: Color = Color::Cyan;
pub const OS_UNKNOWN: Color = Color::Magenta;
