use crate::chip::chip8::Chip8;
use crate::chip::Fault;

pub fn conditional_skip<T>(opcode: &T, state: &mut Chip8, f: fn(&T, &Chip8) -> bool) {
    if f(opcode, state) {
        increment_program_counter(state);
    }
}

pub fn increment_program_counter(state: &mut Chip8) {
    state.registers.advance();
}

/// The address `offset` bytes past the index register. The index register
/// is a full u16; an address past the end of the numeric range stays out
/// of range instead of wrapping back into low memory.
pub fn index_address(state: &Chip8, offset: u16) -> Result<u16, Fault> {
    state
        .registers
        .i
        .checked_add(offset)
        .ok_or(Fault::OutOfRangeAccess(state.registers.i))
}
