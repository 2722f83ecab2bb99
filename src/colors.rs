// Colors in ARGB8888 format
pub const BACKGROUND: u32 = 0xFF1E1E1E;
pub const LINE: u32 = 0xFFE8E8E8;
