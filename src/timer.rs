// SPDX-License-Identifier: Apache-2.0

//! Channel bring-up and the public timing operations.

use crate::bus::RegisterBus;
use crate::errors::Error;
use crate::regs::*;
use crate::tick::{FreeRun, Periodic, TickSource};

use crate::{info, trace, warn};

/// Driver for one channel of the PWM timer block.
///
/// Owns the register backend and the tick accounting for the channel it
/// was initialized on. All operations take `&mut self`; sharing a timer
/// with an interrupt handler (see [`Timer::handle_interrupt`]) needs
/// external mutual exclusion, the accounting sequence is not atomic.
pub struct Timer<B: RegisterBus> {
    bus: B,
    base: u32,
    source: TickSource,
}

impl<B: RegisterBus> Timer<B> {
    /// Brings up `channel` as a polled free-running microsecond counter.
    ///
    /// `input_clock_hz` is the clock feeding the block's prescaler; it
    /// is divided down to the 1 MHz tick rate, so it must be at least
    /// 1 MHz and at most 256 MHz to fit the 8-bit prescaler field. A
    /// non-multiple of 1 MHz truncates, leaving the tick slightly fast.
    ///
    /// The counter starts immediately. The first [`Timer::now`] call
    /// does not return zero, it returns whatever elapsed since start.
    pub fn init(bus: B, channel: u8, input_clock_hz: u32) -> Result<Self, Error> {
        let source = TickSource::FreeRun(FreeRun::new(FREE_RUN_COUNT));
        Self::bring_up(bus, channel, input_clock_hz, FREE_RUN_COUNT, source)
    }

    /// Brings up `channel` reloading once per second, ticks tallied
    /// from the reload interrupt instead of polled.
    ///
    /// The caller's interrupt handler must invoke
    /// [`Timer::handle_interrupt`] on every reload; this crate does not
    /// touch the interrupt controller.
    pub fn init_periodic(bus: B, channel: u8, input_clock_hz: u32) -> Result<Self, Error> {
        let source = TickSource::Periodic(Periodic::new(TICK_RATE_HZ));
        Self::bring_up(bus, channel, input_clock_hz, TICK_RATE_HZ, source)
    }

    fn bring_up(
        bus: B,
        channel: u8,
        input_clock_hz: u32,
        count: u32,
        source: TickSource,
    ) -> Result<Self, Error> {
        if channel >= CHANNEL_COUNT {
            warn!("timer channel {} out of range", channel);
            return Err(Error::InvalidChannel(channel));
        }
        let scale = input_clock_hz / TICK_RATE_HZ;
        if scale == 0 {
            warn!("input clock {} Hz below the tick rate", input_clock_hz);
            return Err(Error::ClockTooSlow(input_clock_hz));
        }
        if scale > PRESCALE_MAX {
            warn!("input clock {} Hz exceeds the prescaler range", input_clock_hz);
            return Err(Error::ClockTooFast(input_clock_hz));
        }

        let mut timer = Self {
            bus,
            base: channel as u32 * CHANNEL_STRIDE,
            source,
        };
        timer.stop();
        timer.configure(MUX_BYPASS, scale, count);
        timer.start();
        info!("timer channel {} running, prescale {}", channel, scale);
        Ok(timer)
    }

    fn read(&mut self, reg: Reg) -> u32 {
        self.bus.read(self.base + u32::from(reg))
    }

    fn write(&mut self, reg: Reg, value: u32) {
        self.bus.write(self.base + u32::from(reg), value)
    }

    fn stop(&mut self) {
        let tcon = self.read(Reg::Tcon);
        self.write(Reg::Tcon, tcon & !TCON_START_BIT);
        trace!("count stopped");
    }

    fn configure(&mut self, mux: u32, scale: u32, count: u32) {
        let tcfg1 = self.read(Reg::Tcfg1);
        self.write(Reg::Tcfg1, (tcfg1 & !TCFG1_MUX_MASK) | mux);
        let tcfg0 = self.read(Reg::Tcfg0);
        // Hardware convention: the field holds the factor minus one
        self.write(Reg::Tcfg0, (tcfg0 & !TCFG0_PRESCALER_MASK) | (scale - 1));
        self.write(Reg::Tcntb, count);
        self.write(Reg::Tcmpb, count);
        trace!("configured mux {} scale {} count {}", mux, scale, count);
    }

    fn start(&mut self) {
        if matches!(self.source, TickSource::Periodic(_)) {
            let cstat = self.read(Reg::TintCstat);
            self.write(Reg::TintCstat, cstat | TINT_ENABLE_BIT);
        }
        // Latch the reload value, then switch to auto-reload counting.
        // The second write must not keep the manual-update bit set.
        let tcon = self.read(Reg::Tcon);
        self.write(Reg::Tcon, tcon | TCON_MANUAL_UPDATE_BIT);
        self.write(Reg::Tcon, TCON_AUTO_RELOAD_BIT | TCON_START_BIT);
        trace!("count started");
    }

    /// Returns the ticks elapsed since the channel started counting.
    ///
    /// Never decreases. In free-running mode this must be called more
    /// often than once per hardware period (2^32 ticks), a longer gap
    /// silently drops whole periods. In periodic mode a reload whose
    /// interrupt has not been handled yet is not counted, so values read
    /// in that window fall up to one period short.
    pub fn now(&mut self) -> u64 {
        let raw = self.read(Reg::Tcnto);
        self.source.advance(raw)
    }

    /// Busy-waits for `us` microseconds.
    ///
    /// Polls [`Timer::now`] until the deadline passes. Blocks the
    /// calling context for the whole duration, there is no yield and no
    /// cancellation.
    pub fn delay_us(&mut self, us: u32) {
        let end = self.now() + us as u64;
        while self.now() < end {
            core::hint::spin_loop();
        }
    }

    /// Records one reload and clears the channel's sticky interrupt
    /// status. Call from the reload interrupt handler in periodic mode.
    pub fn handle_interrupt(&mut self) {
        if let TickSource::Periodic(tally) = &mut self.source {
            tally.record_reload();
        }
        let cstat = self.read(Reg::TintCstat);
        // Status is write-one-to-clear
        self.write(Reg::TintCstat, cstat | TINT_STATUS_BIT);
    }
}
