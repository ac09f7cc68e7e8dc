use crate::constants::STACK_DEPTH;
use crate::error::Fault;

/// # CallStack
/// A bounded LIFO of subroutine return addresses.
///
/// The stack pointer holds the index of the next *free* slot, not the
/// top element. That makes the check order asymmetric: push validates
/// before incrementing, pop decrements before validating.
///
/// ```text
/// SP == 0:  push OKAY (store then SP += 1),  pop NO
/// SP == 16: push NO,  pop OKAY (SP -= 1 then read)
/// ```
pub struct CallStack {
    slots: [u16; STACK_DEPTH],
    sp: u8,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack {
            slots: [0; STACK_DEPTH],
            sp: 0,
        }
    }

    /// Push a return address, failing when all slots are in use.
    pub fn push(&mut self, addr: u16) -> Result<(), Fault> {
        if self.sp as usize >= STACK_DEPTH {
            return Err(Fault::StackOverflow);
        }
        self.slots[self.sp as usize] = addr;
        self.sp += 1;
        Ok(())
    }

    /// Pop the most recently pushed return address.
    pub fn pop(&mut self) -> Result<u16, Fault> {
        // SP is unsigned, so a decrement from 0 lands above STACK_DEPTH
        let sp = self.sp.wrapping_sub(1);
        if sp as usize >= STACK_DEPTH {
            return Err(Fault::StackUnderflow);
        }
        self.sp = sp;
        Ok(self.slots[sp as usize])
    }

    /// Number of return addresses currently stored.
    pub fn depth(&self) -> usize {
        self.sp as usize
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_then_pop_roundtrips() {
        let mut stack = CallStack::new();
        stack.push(0xABC).unwrap();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.pop(), Ok(0xABC));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_pops_in_reverse_push_order() {
        let mut stack = CallStack::new();
        for addr in 0..STACK_DEPTH as u16 {
            stack.push(0x200 + addr).unwrap();
        }
        for addr in (0..STACK_DEPTH as u16).rev() {
            assert_eq!(stack.pop(), Ok(0x200 + addr));
        }
    }

    #[test]
    fn test_seventeenth_push_overflows() {
        let mut stack = CallStack::new();
        for _ in 0..STACK_DEPTH {
            stack.push(0x200).unwrap();
        }
        assert_eq!(stack.push(0x200), Err(Fault::StackOverflow));
        // the failed push didn't disturb the pointer
        assert_eq!(stack.depth(), STACK_DEPTH);
    }

    #[test]
    fn test_pop_on_empty_underflows() {
        let mut stack = CallStack::new();
        assert_eq!(stack.pop(), Err(Fault::StackUnderflow));
        stack.push(0x200).unwrap();
        stack.pop().unwrap();
        assert_eq!(stack.pop(), Err(Fault::StackUnderflow));
    }
}
