use core::convert::TryFrom;
use std::marker::PhantomData;

use crate::chip::chip8::{
    opcodes::{
        ExecutableOpcode, InstructionParsingError, InstructionWithAddress, InstructionWithOperands,
        InstructionWithRegAndValue, Opcode,
    },
    util, Chip8,
};
use crate::chip::Fault;

pub(crate) struct Jmp;

pub(crate) type JmpInstruction = InstructionWithAddress<Jmp>;

implement_try_from_address!(JmpInstruction, 0x1);

impl ExecutableOpcode for JmpInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        state.registers.pc = self.address;
        Ok(())
    }
}

pub(crate) struct Call;

pub(crate) type CallInstruction = InstructionWithAddress<Call>;

implement_try_from_address!(CallInstruction, 0x2);

impl ExecutableOpcode for CallInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        // The return address is the instruction following the call.
        state.stack.push(state.registers.pc.wrapping_add(2))?;
        state.registers.pc = self.address;
        Ok(())
    }
}

pub(crate) struct Se;

pub(crate) type SeInstruction = InstructionWithRegAndValue<Se>;

implement_try_from_reg_and_value!(SeInstruction, 0x3);

impl ExecutableOpcode for SeInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        util::conditional_skip(self, state, |instruction, state| {
            state.registers.v[instruction.reg as usize] == instruction.value
        });
        util::increment_program_counter(state);
        Ok(())
    }
}

pub(crate) struct Sne;

pub(crate) type SneInstruction = InstructionWithRegAndValue<Sne>;

implement_try_from_reg_and_value!(SneInstruction, 0x4);

impl ExecutableOpcode for SneInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        util::conditional_skip(self, state, |instruction, state| {
            state.registers.v[instruction.reg as usize] != instruction.value
        });
        util::increment_program_counter(state);
        Ok(())
    }
}

pub(crate) struct Sre;

pub(crate) type SreInstruction = InstructionWithOperands<Sre>;

implement_try_from_operands!(SreInstruction, 0x5);

impl ExecutableOpcode for SreInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        if self.op3 != 0 {
            return Err(Fault::UnknownOpcode(self.word));
        }
        util::conditional_skip(self, state, |instruction, state| {
            state.registers.v[instruction.op1 as usize]
                == state.registers.v[instruction.op2 as usize]
        });
        util::increment_program_counter(state);
        Ok(())
    }
}

pub(crate) struct Srne;

pub(crate) type SrneInstruction = InstructionWithOperands<Srne>;

implement_try_from_operands!(SrneInstruction, 0x9);

impl ExecutableOpcode for SrneInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        if self.op3 != 0 {
            return Err(Fault::UnknownOpcode(self.word));
        }
        util::conditional_skip(self, state, |instruction, state| {
            state.registers.v[instruction.op1 as usize]
                != state.registers.v[instruction.op2 as usize]
        });
        util::increment_program_counter(state);
        Ok(())
    }
}

pub(crate) struct Jmpr;

pub(crate) type JmprInstruction = InstructionWithAddress<Jmpr>;

implement_try_from_address!(JmprInstruction, 0xB);

impl ExecutableOpcode for JmprInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        state.registers.pc = self.address.wrapping_add(state.registers.v[0] as u16);
        Ok(())
    }
}

pub(crate) struct Sk;

pub(crate) type SkInstruction = InstructionWithRegAndValue<Sk>;

implement_try_from_reg_and_value!(SkInstruction, 0xE);

impl ExecutableOpcode for SkInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        let key = state.registers.v[self.reg as usize];
        let skip = match self.value {
            0x9E => state.keypad.is_down(key),
            0xA1 => !state.keypad.is_down(key),
            _ => return Err(Fault::UnknownOpcode(self.word)),
        };
        if skip {
            util::increment_program_counter(state);
        }
        util::increment_program_counter(state);
        Ok(())
    }
}
