/// Size of the main memory in bytes. Valid addresses are
/// 0x000 to `CHIP8_MEMORY_SIZE - 1` (inclusive).
pub const CHIP8_MEMORY_SIZE: u16 = 4096;

/// The address programs are loaded at. Everything below is reserved for
/// the interpreter, most notably the charset.
pub const CHIP8_PROGRAM_OFFSET: u16 = 0x200;

/// The maximum size of a loadable program in bytes.
pub const CHIP8_MAX_PROGRAM_SIZE: u16 = CHIP8_MEMORY_SIZE - CHIP8_PROGRAM_OFFSET;

/// The address the charset is loaded at.
pub const CHIP8_CHARSET_OFFSET: u16 = 0x0;

/// The length of the charset in bytes.
pub const CHIP8_CHARSET_LEN: u16 = 0x50;

/// The number of bytes per charset glyph.
pub const CHIP8_CHARSET_GLYPH_LEN: u16 = 5;

/// The number of return addresses the call stack can hold.
pub const CHIP8_STACK_DEPTH: usize = 16;

/// The number of input pins (keys).
pub const CHIP8_KEY_COUNT: usize = 16;

/// Display width in pixels.
pub const CHIP8_DISPLAY_WIDTH: usize = 64;

/// Display height in pixels.
pub const CHIP8_DISPLAY_HEIGHT: usize = 32;

/// Sprites for the hexadecimal digits 0-F, 5 bytes per glyph.
pub const CHIP8_CHARSET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
