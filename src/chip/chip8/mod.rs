/// The memory bus.
mod bus;
/// CHIP-8 constants.
mod constants;
/// Cursive display output.
pub mod cursive_display;
/// The display buffer.
mod framebuffer;
/// The input pad.
mod keypad;
/// Decoding of opcodes and their execution.
mod opcodes;
/// The register file.
mod registers;
/// The call stack.
mod stack;
/// The delay and sound timers.
mod timers;
/// Convenience functions for modification of the CHIP-8 state.
mod util;


use std::fs;
use std::fs::File;
use std::io::Read;

use log::{debug, info, warn};

use crate::chip::{
    chip8::bus::MemoryBus,
    chip8::constants::CHIP8_MAX_PROGRAM_SIZE,
    chip8::framebuffer::Framebuffer,
    chip8::keypad::Keypad,
    chip8::opcodes::{ExecutableOpcode, Opcode},
    chip8::registers::RegisterFile,
    chip8::stack::CallStack,
    chip8::timers::TimerBank,
    Chip, Fault, LoadProgramError, MachineState,
};

/// Represents the state of the CHIP-8. All machine entities are owned by
/// this one aggregate; there is no ambient state. The host drives it via
/// the `Chip` trait and is expected to serialize its calls.
pub struct Chip8 {
    /// 4096 bytes of main memory, bounds-checked on every access.
    memory: MemoryBus,

    /// The 16 general registers, the index register and the program counter.
    registers: RegisterFile,

    /// Return addresses of the up to 16 active subroutine calls.
    stack: CallStack,

    /// The delay and sound timers, ticked by the host at 60 Hz.
    timers: TimerBank,

    /// The display buffer. Note that the pixels are usually directly wired
    /// up to a display; here the renderer reads them through the output
    /// pins and clears the redraw flag once it consumed them.
    framebuffer: Framebuffer,

    /// The input pad. Written exclusively by the host's input collaborator.
    keypad: Keypad,

    /// Whether the machine is running, waiting for a key press or halted.
    state: MachineState,
}

impl Chip for Chip8 {
    /// The CHIP-8's pins can actually be addressed by using just half a
    /// byte. However, we use a whole byte here and assert whether it is in
    /// the right range, because it is more convenient to handle.
    type PinAddress = u8;

    /// A CHIP-8 memory address is in the range between 0 and 4096
    /// (exclusive). We represent it using a u16. The memory bus rejects
    /// everything outside that range.
    type MemoryAddress = u16;

    fn load_program(&mut self, path: &str) -> Result<usize, LoadProgramError> {
        let mut file =
            File::open(path).map_err(|_| LoadProgramError::CouldNotOpenFile(path.to_string()))?;
        let md = fs::metadata(path)
            .map_err(|_| LoadProgramError::CouldNotReadMetadata(path.to_string()))?;
        let mut buffer = Vec::with_capacity(md.len() as usize);
        file.read_to_end(&mut buffer)
            .map_err(|_| LoadProgramError::CouldNotReadFile(path.to_string()))?;

        self.load_program_bytes(&buffer)?;
        info!("loaded {} byte program from {}", buffer.len(), path);

        Ok(buffer.len())
    }

    fn step(&mut self) {
        match self.state {
            MachineState::Halted(_) => return,
            MachineState::WaitingForKey(target) => {
                // Poll only; the host keeps servicing input and rendering
                // between calls, so this must never spin.
                if let Some(key) = self.keypad.first_pressed() {
                    self.registers.v[target as usize] = key;
                    self.registers.advance();
                    self.state = MachineState::Running;
                }
                return;
            }
            MachineState::Running => {}
        }

        if let Err(fault) = self.execute_next_instruction() {
            warn!("machine halted: {}", fault);
            self.state = MachineState::Halted(fault);
        }
    }

    fn tick_timers(&mut self) -> bool {
        let tone_ended = self.timers.tick();
        if tone_ended {
            debug!("sound timer reached zero");
        }
        tone_ended
    }

    fn state(&self) -> &MachineState {
        &self.state
    }

    fn read_output_pins(&self) -> &[bool] {
        self.framebuffer.pixels()
    }

    fn set_input_pin(&mut self, pin: u8, value: bool) {
        self.keypad.set(pin, value);
    }

    fn reset_input_pins(&mut self) {
        self.keypad.release_all();
    }
}

impl Chip8 {
    /// Constructs a new CHIP-8 and appropriately initializes all entities
    /// so that it is ready for the first execution cycle. Essentially this
    /// means that the program counter is set to 0x200 and the default
    /// CHIP-8 charset is seeded into memory. Note that no program is
    /// loaded upon initialization.
    pub fn new() -> Self {
        Chip8 {
            memory: MemoryBus::new(),
            registers: RegisterFile::new(),
            stack: CallStack::new(),
            timers: TimerBank::new(),
            framebuffer: Framebuffer::new(),
            keypad: Keypad::new(),
            state: MachineState::Running,
        }
    }

    /// Re-initializes every entity: memory is cleared except for the
    /// re-seeded charset, registers, stack, timers, framebuffer and keypad
    /// are zeroed, the program counter points at 0x200 again. A halted
    /// machine becomes runnable again (though without a loaded program it
    /// will fault on the first fetch).
    pub fn reset(&mut self) {
        *self = Chip8::new();
    }

    /// Loads a program from a slice. The machine is fully re-initialized
    /// before the program bytes are copied to 0x200; a program that would
    /// extend past the end of memory is rejected without partial writes.
    pub fn load_program_bytes(&mut self, program: &[u8]) -> Result<(), LoadProgramError> {
        if program.len() > CHIP8_MAX_PROGRAM_SIZE as usize {
            return Err(LoadProgramError::ProgramTooLarge(program.len()));
        }

        self.reset();
        self.memory
            .load_program(program)
            .map_err(|_| LoadProgramError::ProgramTooLarge(program.len()))
    }

    /// Fetches and executes the instruction at the current program counter.
    fn execute_next_instruction(&mut self) -> Result<(), Fault> {
        let opcode = self.next_instruction()?;
        let executable: Box<dyn ExecutableOpcode> = opcode.into();
        executable.execute(self)
    }

    /// Fetches the next instruction based on the current state of the
    /// program counter: two consecutive bytes, high byte first.
    fn next_instruction(&self) -> Result<Opcode, Fault> {
        let pc = self.registers.pc;
        Ok(Opcode::new(&[
            self.memory.read(pc)?,
            self.memory.read(pc.wrapping_add(1))?,
        ]))
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Chip8::new()
    }
}
