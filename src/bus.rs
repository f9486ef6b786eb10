// SPDX-License-Identifier: Apache-2.0

//! Register access behind a narrow trait, so the driver logic runs
//! against plain memory in tests and against the device window on
//! target.

/// Trait for accessing the timer block's 32-bit registers
///
/// Registers are addressed by byte offset from the block base, so one
/// implementation covers all eight channel windows.
pub trait RegisterBus {
    /// Read the register at byte offset `offset`
    fn read(&mut self, offset: u32) -> u32;
    /// Write `value` to the register at byte offset `offset`
    fn write(&mut self, offset: u32, value: u32);
}

impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    fn read(&mut self, offset: u32) -> u32 {
        T::read(self, offset)
    }
    fn write(&mut self, offset: u32, value: u32) {
        T::write(self, offset, value)
    }
}

/// Access to the timer block through its memory-mapped window.
pub struct Mmio {
    base: usize,
}

impl Mmio {
    /// Creates an accessor for the timer block mapped at `base`.
    ///
    /// # Safety
    ///
    /// `base` must be the physical (or suitably mapped) address of the
    /// PWM timer block, aligned and valid for volatile 32-bit access
    /// over the whole eight-channel window, and nothing else may drive
    /// the channels this accessor is used with.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }
}

impl RegisterBus for Mmio {
    fn read(&mut self, offset: u32) -> u32 {
        unsafe { core::ptr::read_volatile((self.base + offset as usize) as *const u32) }
    }

    fn write(&mut self, offset: u32, value: u32) {
        unsafe { core::ptr::write_volatile((self.base + offset as usize) as *mut u32, value) }
    }
}
