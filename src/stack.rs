use crate::constants::STACK_DEPTH;
use crate::error::Fault;

/// 16 16-bit return addresses, used to call subroutines and return from them.
/// Pushing past [`STACK_DEPTH`] frames or popping an empty stack is a fault,
/// there is no wraparound.
#[derive(Clone, Copy, Default)]
pub struct Stack {
    frames: [u16; STACK_DEPTH],
    depth: usize,
}

impl Stack {
    pub fn push(&mut self, address: u16) -> Result<(), Fault> {
        if self.depth == STACK_DEPTH {
            return Err(Fault::StackOverflow);
        }
        self.frames[self.depth] = address;
        self.depth += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16, Fault> {
        if self.depth == 0 {
            return Err(Fault::StackUnderflow);
        }
        self.depth -= 1;
        Ok(self.frames[self.depth])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_addresses_come_back_in_reverse_order() {
        let mut stack = Stack::default();
        stack.push(0x234).unwrap();
        stack.push(0x456).unwrap();
        assert_eq!(stack.pop(), Ok(0x456));
        assert_eq!(stack.pop(), Ok(0x234));
    }

    #[test]
    fn popping_an_empty_stack_underflows() {
        let mut stack = Stack::default();
        assert_eq!(stack.pop(), Err(Fault::StackUnderflow));
    }

    #[test]
    fn pushing_past_capacity_overflows() {
        let mut stack = Stack::default();
        for _ in 0..STACK_DEPTH {
            stack.push(0x200).unwrap();
        }
        assert_eq!(stack.push(0x200), Err(Fault::StackOverflow));
    }
}
