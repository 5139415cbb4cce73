//! Timer identifiers and a simple allocator for hosts that mint their own.

use serde::{Deserialize, Serialize};

/// Cancellable identifier returned by a [`crate::TimerService`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u32);

/// Monotonic allocator for TimerId. Starts at 1 so that 0 never names a live timer,
/// mirroring browser timer handles.
#[derive(Debug)]
pub struct TimerIdAllocator {
    next: u32,
}

impl Default for TimerIdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl TimerIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc(&mut self) -> TimerId {
        let id = TimerId(self.next);
        self.next = self.next.wrapping_add(1).max(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = TimerIdAllocator::new();
        assert_eq!(alloc.alloc(), TimerId(1));
        assert_eq!(alloc.alloc(), TimerId(2));
        assert_eq!(alloc.alloc(), TimerId(3));
    }
}
