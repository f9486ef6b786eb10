// SPDX-License-Identifier: Apache-2.0

//! The time-service surface higher layers consume.

use crate::bus::RegisterBus;
use crate::timer::Timer;

/// Elapsed-time service for schedulers and timeout code.
///
/// Millisecond-resolution facade over the driver's microsecond
/// primitives; boards hand an implementation (normally a [`Timer`]) to
/// whatever component keeps time.
pub trait SysTime {
    /// Busy-waits for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
    /// Returns the microsecond ticks elapsed since the timer started.
    fn ticks(&mut self) -> u64;
}

impl<B: RegisterBus> SysTime for Timer<B> {
    fn delay_ms(&mut self, ms: u32) {
        self.delay_us(ms.saturating_mul(1_000));
    }

    fn ticks(&mut self) -> u64 {
        self.now()
    }
}

/// Delays below one microsecond round up to a whole tick.
impl<B: RegisterBus> embedded_hal::delay::DelayNs for Timer<B> {
    fn delay_ns(&mut self, ns: u32) {
        Timer::delay_us(self, ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        Timer::delay_us(self, us);
    }

    fn delay_ms(&mut self, ms: u32) {
        Timer::delay_us(self, ms.saturating_mul(1_000));
    }
}
