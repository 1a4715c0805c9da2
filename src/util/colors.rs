use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x003b82f6);
pub const SECONDARY: Color = Color::from_u32(0x0093c5fd);
pub const NEUTRAL: Color = Color::from_u32(0x006b7280);
pub const MUTED: Color = Color::from_u32(0x009ca3af);
pub const BACKGROUND: Color = Color::from_u32(0x00111827);
