use crate::chip::chip8::constants::CHIP8_STACK_DEPTH;
use crate::chip::Fault;

/// The call stack. It only ever holds return addresses; the instruction set
/// has no way to push anything else. The pointer always stays within
/// [0, CHIP8_STACK_DEPTH]; pushing at capacity and popping at zero are
/// faults rather than undefined accesses.
pub struct CallStack {
    frames: [u16; CHIP8_STACK_DEPTH],
    pointer: u8,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack {
            frames: [0; CHIP8_STACK_DEPTH],
            pointer: 0,
        }
    }

    /// Pushes a return address.
    pub fn push(&mut self, address: u16) -> Result<(), Fault> {
        if self.pointer as usize >= CHIP8_STACK_DEPTH {
            return Err(Fault::StackOverflow);
        }
        self.frames[self.pointer as usize] = address;
        self.pointer += 1;
        Ok(())
    }

    /// Pops the most recently pushed return address.
    pub fn pop(&mut self) -> Result<u16, Fault> {
        if self.pointer == 0 {
            return Err(Fault::StackUnderflow);
        }
        self.pointer -= 1;
        Ok(self.frames[self.pointer as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut stack = CallStack::new();
        stack.push(0x202).unwrap();
        stack.push(0x404).unwrap();
        assert_eq!(stack.pop(), Ok(0x404));
        assert_eq!(stack.pop(), Ok(0x202));
    }

    #[test]
    fn test_underflow() {
        let mut stack = CallStack::new();
        assert_eq!(stack.pop(), Err(Fault::StackUnderflow));
    }

    #[test]
    fn test_overflow() {
        let mut stack = CallStack::new();
        for i in 0..CHIP8_STACK_DEPTH {
            stack.push(i as u16).unwrap();
        }
        assert_eq!(stack.push(0xFFF), Err(Fault::StackOverflow));
    }
}
