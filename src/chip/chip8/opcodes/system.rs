use core::convert::TryFrom;
use std::marker::PhantomData;

use crate::chip::chip8::{
    opcodes::{ExecutableOpcode, InstructionParsingError, InstructionWithAddress, Opcode},
    util, Chip8,
};
use crate::chip::Fault;

pub(crate) struct Sys;

pub(crate) type SysInstruction = InstructionWithAddress<Sys>;

implement_try_from_address!(SysInstruction, 0x0);

impl ExecutableOpcode for SysInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        match self.address {
            // 00E0: clear the display
            0x0E0 => {
                state.framebuffer.clear();
                util::increment_program_counter(state);
            }
            // 00EE: return. The call pushed the address of the instruction
            // following it, so the popped address is the next pc as-is.
            0x0EE => {
                state.registers.pc = state.stack.pop()?;
            }
            // 0NNN (call machine code routine) is not part of the base
            // instruction set.
            _ => return Err(Fault::UnknownOpcode(self.word)),
        };
        Ok(())
    }
}
