use core::convert::TryFrom;
use rand::{thread_rng, Rng};
use std::marker::PhantomData;

use crate::chip::chip8::{
    constants::{CHIP8_CHARSET_GLYPH_LEN, CHIP8_CHARSET_OFFSET},
    opcodes::{
        ExecutableOpcode, InstructionParsingError, InstructionWithAddress, InstructionWithOperands,
        InstructionWithRegAndValue, Opcode,
    },
    util, Chip8,
};
use crate::chip::{Fault, MachineState};

pub(crate) struct Ldr;

pub(crate) type LdrInstruction = InstructionWithRegAndValue<Ldr>;

implement_try_from_reg_and_value!(LdrInstruction, 0x6);

impl ExecutableOpcode for LdrInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        state.registers.v[self.reg as usize] = self.value;
        util::increment_program_counter(state);
        Ok(())
    }
}

pub(crate) struct Add;

pub(crate) type AddInstruction = InstructionWithRegAndValue<Add>;

implement_try_from_reg_and_value!(AddInstruction, 0x7);

impl ExecutableOpcode for AddInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        state.registers.v[self.reg as usize] =
            state.registers.v[self.reg as usize].wrapping_add(self.value);
        util::increment_program_counter(state);
        Ok(())
    }
}

pub(crate) struct Reg;

pub(crate) type RegInstruction = InstructionWithOperands<Reg>;

implement_try_from_operands!(RegInstruction, 0x8);

impl ExecutableOpcode for RegInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        fn modify_registers(
            state: &mut Chip8,
            r1: u8,
            r2: u8,
            f: fn(u8, u8) -> (u8, Option<bool>),
        ) {
            let (val, carry) = f(
                state.registers.v[r1 as usize],
                state.registers.v[r2 as usize],
            );
            state.registers.v[r1 as usize] = val;
            // The flag is written after the result so that VF as a target
            // register still ends up holding the flag.
            match carry {
                Some(true) => state.registers.v[0xF] = 1,
                Some(false) => state.registers.v[0xF] = 0,
                _ => {}
            }
        }

        match self.op3 {
            0x0 => modify_registers(state, self.op1, self.op2, |_, v2| (v2, None)),
            0x1 => modify_registers(state, self.op1, self.op2, |v1, v2| (v1 | v2, None)),
            0x2 => modify_registers(state, self.op1, self.op2, |v1, v2| (v1 & v2, None)),
            0x3 => modify_registers(state, self.op1, self.op2, |v1, v2| (v1 ^ v2, None)),
            0x4 => modify_registers(state, self.op1, self.op2, |v1, v2| {
                let (result, overflow) = v1.overflowing_add(v2);
                (result, Some(overflow))
            }),
            0x5 => modify_registers(state, self.op1, self.op2, |v1, v2| {
                let (result, overflow) = v1.overflowing_sub(v2);
                (result, Some(!overflow))
            }),
            // The shifted-out bit becomes the flag; the result is the
            // plain 8-bit shift.
            0x6 => modify_registers(state, self.op1, self.op2, |v1, _| {
                (v1 >> 1, Some(v1 & 1 != 0))
            }),
            0x7 => modify_registers(state, self.op1, self.op2, |v1, v2| {
                let (result, overflow) = v2.overflowing_sub(v1);
                (result, Some(!overflow))
            }),
            0xE => modify_registers(state, self.op1, self.op2, |v1, _| {
                (v1 << 1, Some(v1 & 0x80 != 0))
            }),
            _ => return Err(Fault::UnknownOpcode(self.word)),
        };
        util::increment_program_counter(state);
        Ok(())
    }
}

pub(crate) struct Ld;

pub(crate) type LdInstruction = InstructionWithAddress<Ld>;

implement_try_from_address!(LdInstruction, 0xA);

impl ExecutableOpcode for LdInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        state.registers.i = self.address;
        util::increment_program_counter(state);
        Ok(())
    }
}

pub(crate) struct Rnd;

pub(crate) type RndInstruction = InstructionWithRegAndValue<Rnd>;

implement_try_from_reg_and_value!(RndInstruction, 0xC);

impl ExecutableOpcode for RndInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        let mut rng = thread_rng();
        let sample: u8 = rng.gen();

        state.registers.v[self.reg as usize] = sample & self.value;

        util::increment_program_counter(state);
        Ok(())
    }
}

pub(crate) struct Drw;

pub(crate) type DrwInstruction = InstructionWithOperands<Drw>;

implement_try_from_operands!(DrwInstruction, 0xD);

impl ExecutableOpcode for DrwInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        let x = state.registers.v[self.op1 as usize] as u16;
        let y = state.registers.v[self.op2 as usize] as u16;

        let mut collision = false;
        for row in 0..self.op3 as u16 {
            let sprite_byte = state.memory.read(util::index_address(state, row)?)?;

            for bit in 0..8 {
                if sprite_byte & (0x80 >> bit) != 0 {
                    collision |= state.framebuffer.flip(x + bit, y + row);
                }
            }
        }

        state.registers.v[0xF] = collision as u8;
        util::increment_program_counter(state);
        Ok(())
    }
}

pub(crate) struct Ldu;

pub(crate) type LduInstruction = InstructionWithRegAndValue<Ldu>;

implement_try_from_reg_and_value!(LduInstruction, 0xF);

impl ExecutableOpcode for LduInstruction {
    fn execute(&self, state: &mut Chip8) -> Result<(), Fault> {
        match self.value {
            0x07 => {
                state.registers.v[self.reg as usize] = state.timers.delay;
            }
            // FX0A: park the machine until the host reports a key press.
            // The program counter stays put; step() resumes it once a key
            // is down, without ever blocking the calling thread.
            0x0A => {
                state.state = MachineState::WaitingForKey(self.reg);
                return Ok(());
            }
            0x15 => {
                state.timers.delay = state.registers.v[self.reg as usize];
            }
            0x18 => {
                state.timers.sound = state.registers.v[self.reg as usize];
            }
            0x1E => {
                state.registers.i = state
                    .registers
                    .i
                    .wrapping_add(state.registers.v[self.reg as usize] as u16);
            }
            0x29 => {
                let glyph = (state.registers.v[self.reg as usize] & 0xF) as u16;
                state.registers.i = CHIP8_CHARSET_OFFSET + glyph * CHIP8_CHARSET_GLYPH_LEN;
            }
            0x33 => {
                let value = state.registers.v[self.reg as usize];
                state
                    .memory
                    .write(util::index_address(state, 0)?, value / 100)?;
                state
                    .memory
                    .write(util::index_address(state, 1)?, value / 10 % 10)?;
                state
                    .memory
                    .write(util::index_address(state, 2)?, value % 10)?;
            }
            0x55 => {
                for reg in 0..=self.reg {
                    let address = util::index_address(state, reg as u16)?;
                    state.memory.write(address, state.registers.v[reg as usize])?;
                }
            }
            0x65 => {
                for reg in 0..=self.reg {
                    let address = util::index_address(state, reg as u16)?;
                    state.registers.v[reg as usize] = state.memory.read(address)?;
                }
            }
            _ => return Err(Fault::UnknownOpcode(self.word)),
        }
        util::increment_program_counter(state);
        Ok(())
    }
}
