use crate::chip::chip8::constants::{
    CHIP8_CHARSET, CHIP8_CHARSET_OFFSET, CHIP8_MEMORY_SIZE, CHIP8_PROGRAM_OFFSET,
};
use crate::chip::Fault;

/// The main memory of the CHIP-8. All reads and writes are bounds-checked;
/// an address outside of 0x000-0xFFF is a fault, never wrapped or clamped.
pub struct MemoryBus {
    cells: [u8; CHIP8_MEMORY_SIZE as usize],
}

impl MemoryBus {
    /// Constructs a zeroed memory with the charset seeded at
    /// `CHIP8_CHARSET_OFFSET`.
    pub fn new() -> Self {
        let mut cells = [0; CHIP8_MEMORY_SIZE as usize];
        for (i, byte) in CHIP8_CHARSET.iter().enumerate() {
            cells[CHIP8_CHARSET_OFFSET as usize + i] = *byte;
        }
        MemoryBus { cells }
    }

    /// Fetches the byte stored at `address`.
    pub fn read(&self, address: u16) -> Result<u8, Fault> {
        self.cells
            .get(address as usize)
            .copied()
            .ok_or(Fault::OutOfRangeAccess(address))
    }

    /// Stores `value` at `address`.
    pub fn write(&mut self, address: u16, value: u8) -> Result<(), Fault> {
        match self.cells.get_mut(address as usize) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Fault::OutOfRangeAccess(address)),
        }
    }

    /// Copies `program` verbatim into memory starting at the program
    /// offset. Fails with the address of the first byte that would land
    /// outside of memory; nothing is written in that case.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), Fault> {
        let end = CHIP8_PROGRAM_OFFSET as usize + program.len();
        if end > self.cells.len() {
            return Err(Fault::OutOfRangeAccess(CHIP8_MEMORY_SIZE));
        }
        self.cells[CHIP8_PROGRAM_OFFSET as usize..end].copy_from_slice(program);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chip::chip8::constants::CHIP8_CHARSET_LEN;

    #[test]
    fn test_charset_seeded() {
        let bus = MemoryBus::new();
        assert_eq!(bus.read(0x000).unwrap(), 0xF0);
        assert_eq!(bus.read(CHIP8_CHARSET_LEN - 1).unwrap(), 0x80);
        assert_eq!(bus.read(CHIP8_CHARSET_LEN).unwrap(), 0x00);
    }

    #[test]
    fn test_read_write_round_trip() {
        let mut bus = MemoryBus::new();
        bus.write(0x300, 0xAB).unwrap();
        assert_eq!(bus.read(0x300).unwrap(), 0xAB);
    }

    #[test]
    fn test_last_address_is_valid() {
        let mut bus = MemoryBus::new();
        bus.write(0xFFF, 0x01).unwrap();
        assert_eq!(bus.read(0xFFF).unwrap(), 0x01);
    }

    #[test]
    fn test_read_out_of_range() {
        let bus = MemoryBus::new();
        assert_eq!(bus.read(0x1000), Err(Fault::OutOfRangeAccess(0x1000)));
    }

    #[test]
    fn test_write_out_of_range() {
        let mut bus = MemoryBus::new();
        assert_eq!(
            bus.write(0x1000, 0xFF),
            Err(Fault::OutOfRangeAccess(0x1000))
        );
    }

    #[test]
    fn test_load_program_too_large() {
        let mut bus = MemoryBus::new();
        let program = [0u8; 0xE01];
        assert!(bus.load_program(&program).is_err());
    }
}
