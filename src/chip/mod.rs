/// The CHIP-8 implementation of the `Chip` trait.
pub mod chip8;

use cursive::CbSink;

/// Represents a chip that can be driven by a host. The host is expected to
/// serialize all calls into one chip instance: `step` and `tick_timers`
/// mutate the same machine state and must not race each other.
pub trait Chip {
    /// The type used to address input pins.
    type PinAddress;

    /// The type used to address bytes in the chip's memory.
    type MemoryAddress;

    /// Loads the program stored in the file at `path` into memory and
    /// returns the number of bytes loaded. Loading re-initializes the
    /// whole machine before the program bytes are copied in.
    fn load_program(&mut self, path: &str) -> Result<usize, LoadProgramError>;

    /// Executes at most one instruction and returns. Never blocks: when the
    /// machine is halted this is a no-op, and when it waits for a key press
    /// it only polls the input pins. Faults do not propagate out of the
    /// machine; they park it in `MachineState::Halted`.
    fn step(&mut self);

    /// Advances the delay and sound timers by one tick. The host must call
    /// this at a fixed 60 Hz, independently of how often it calls `step`.
    /// Returns true when the sound timer just reached zero, i.e. the host's
    /// audio collaborator should end its tone.
    fn tick_timers(&mut self) -> bool;

    /// The current state of the machine.
    fn state(&self) -> &MachineState;

    /// The output pins. For the CHIP-8 these are wired to the display.
    fn read_output_pins(&self) -> &[bool];

    /// Sets a single input pin. Called by the host's input collaborator.
    fn set_input_pin(&mut self, pin: Self::PinAddress, value: bool);

    /// Clears all input pins.
    fn reset_input_pins(&mut self);
}

/// Represents a chip whose output pins can be rendered as a cursive view.
pub trait ChipWithCursiveDisplay {
    /// Pushes a display refresh through `gfx_sink` if the output pins
    /// changed since the last refresh.
    fn update_ui(&mut self, gfx_sink: &CbSink);
}

/// The execution state of a machine. All entities live for the lifetime of
/// one loaded program; a halted machine stays halted until it is reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MachineState {
    /// The machine executes one instruction per `step` call.
    Running,

    /// The machine suspended instruction progress until a key is pressed.
    /// The pressed key's index will be stored in the register identified
    /// by the enum value.
    WaitingForKey(u8),

    /// The machine hit a fault and stopped executing. The host decides
    /// whether to report, reset or exit.
    Halted(Fault),
}

/// Faults that stop the running machine. None of these are recoverable from
/// within the machine; they are surfaced through `MachineState::Halted`
/// rather than terminating the host process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// A memory access outside of the valid address space. Carries the
    /// offending address.
    OutOfRangeAccess(u16),

    /// A call was issued while the call stack was at capacity.
    StackOverflow,

    /// A return was issued while the call stack was empty.
    StackUnderflow,

    /// No decode entry matched the fetched instruction. Carries the full
    /// 16-bit opcode word.
    UnknownOpcode(u16),
}

/// Captures errors that occur while loading a program.
#[derive(Debug)]
pub enum LoadProgramError {
    CouldNotOpenFile(String),
    CouldNotReadMetadata(String),
    CouldNotReadFile(String),

    /// The program does not fit into the memory above the reserved
    /// interpreter area. Carries the program size in bytes.
    ProgramTooLarge(usize),
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Fault::OutOfRangeAccess(address) => {
                write!(f, "Memory access out of range: {:#05X}", address)
            }
            Fault::StackOverflow => write!(f, "Call stack overflow"),
            Fault::StackUnderflow => write!(f, "Call stack underflow"),
            Fault::UnknownOpcode(word) => write!(f, "Unknown opcode: {:#06X}", word),
        }
    }
}

impl std::error::Error for Fault {}

impl std::fmt::Display for LoadProgramError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LoadProgramError::CouldNotOpenFile(path) => {
                write!(f, "Could not open program file {}", path)
            }
            LoadProgramError::CouldNotReadMetadata(path) => {
                write!(f, "Could not read metadata of program file {}", path)
            }
            LoadProgramError::CouldNotReadFile(path) => {
                write!(f, "Could not read program file {}", path)
            }
            LoadProgramError::ProgramTooLarge(size) => {
                write!(f, "Program of {} bytes does not fit into memory", size)
            }
        }
    }
}

impl std::error::Error for LoadProgramError {}
