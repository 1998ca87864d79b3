use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 130, g: 200, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 200, b: 90 };
pub const SEPARATOR: Color = Color::TrueColor { r: 110, g: 110, b: 110 };
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };

pub const PLAYER_WIN: Color = Color::TrueColor { r: 120, g: 220, b: 120 };
pub const COMPUTER_WIN: Color = Color::TrueColor { r: 240, g: 100, b: 100 };
pub const TIE: Color = Color::TrueColor { r: 240, g: 220, b: 110 };
