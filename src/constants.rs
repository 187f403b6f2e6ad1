/// The width of the display in pixels
pub const DISPLAY_WIDTH: usize = 64;
/// The height of the display in pixels
pub const DISPLAY_HEIGHT: usize = 32;
/// The size of ram in bytes
pub const RAM_SIZE: usize = 4096;
/// For the regular chip 8 roms
pub const ROM_START_ADDRESS: u16 = 0x200;
/// The largest rom that still fits between 0x200 and the end of ram
pub const MAX_ROM_SIZE: usize = RAM_SIZE - ROM_START_ADDRESS as usize;
/// Amount of registers CHIP-8 has
pub const NUM_REGISTERS: usize = 16;
/// Amount of keys on the hex keypad, 0x0 through 0xf
pub const NUM_KEYS: usize = 16;
/// How many nested subroutine calls fit on the stack
pub const STACK_DEPTH: usize = 16;
/// Every font glyph is five bytes tall, glyph c starts at c * 5
pub const FONT_GLYPH_SIZE: u16 = 5;
