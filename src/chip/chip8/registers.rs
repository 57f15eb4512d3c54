use crate::chip::chip8::constants::CHIP8_PROGRAM_OFFSET;

/// The register file: 16 general purpose 8-bit registers (V0-VF, where VF
/// doubles as the carry/collision flag), the 16-bit index register and the
/// program counter. Only the low 12 bits of the index register are
/// address-meaningful; the memory bus rejects anything beyond.
pub struct RegisterFile {
    pub(super) v: [u8; 16],
    pub(super) i: u16,
    pub(super) pc: u16,
}

impl RegisterFile {
    pub fn new() -> Self {
        RegisterFile {
            v: [0; 16],
            i: 0,
            pc: CHIP8_PROGRAM_OFFSET,
        }
    }

    /// Advances the program counter to the next instruction.
    pub fn advance(&mut self) {
        self.pc = self.pc.wrapping_add(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_state() {
        let registers = RegisterFile::new();
        assert_eq!(registers.v, [0; 16]);
        assert_eq!(registers.i, 0);
        assert_eq!(registers.pc, 0x200);
    }

    #[test]
    fn test_advance() {
        let mut registers = RegisterFile::new();
        registers.advance();
        assert_eq!(registers.pc, 0x202);
    }
}
