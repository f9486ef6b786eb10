// SPDX-License-Identifier: Apache-2.0

/// Rate the prescaled counter ticks at. One tick is one microsecond.
pub const TICK_RATE_HZ: u32 = 1_000_000;

/// Number of channels in the PWM timer block.
pub(crate) const CHANNEL_COUNT: u8 = 8;
/// Byte stride between per-channel register windows.
pub(crate) const CHANNEL_STRIDE: u32 = 0x100;
/// Reload value for free-running mode, the full 32-bit range.
pub(crate) const FREE_RUN_COUNT: u32 = u32::MAX;
/// Largest prescale factor the 8-bit TCFG0 field can hold.
pub(crate) const PRESCALE_MAX: u32 = 0x100;
/// Prescaler field of TCFG0. Holds the prescale factor minus one.
pub(crate) const TCFG0_PRESCALER_MASK: u32 = 0xff;
/// Count-source mux field of TCFG1.
pub(crate) const TCFG1_MUX_MASK: u32 = 0x7;
/// Mux selection that bypasses the divider chain and counts the
/// prescaled clock directly.
pub(crate) const MUX_BYPASS: u32 = 0x0;
/// Start the countdown.
pub(crate) const TCON_START_BIT: u32 = 0x01;
/// Latch TCNTB/TCMPB into the live counter. Must be clear while counting.
pub(crate) const TCON_MANUAL_UPDATE_BIT: u32 = 0x02;
/// Invert the waveform on the output pin.
#[allow(dead_code)]
pub(crate) const TCON_INVERT_BIT: u32 = 0x04;
/// Reload TCNTB automatically when the count reaches zero.
pub(crate) const TCON_AUTO_RELOAD_BIT: u32 = 0x08;
/// Enable the channel's reload interrupt.
pub(crate) const TINT_ENABLE_BIT: u32 = 0x01;
/// Sticky reload-interrupt status. Write one to clear.
pub(crate) const TINT_STATUS_BIT: u32 = 0x20;

/// Per-channel timer registers, as byte offsets into the channel window.
#[repr(u32)]
pub(crate) enum Reg {
    Tcfg0 = 0x00,
    Tcfg1 = 0x04,
    Tcon = 0x08,
    Tcntb = 0x0c,
    Tcmpb = 0x10,
    Tcnto = 0x14,
    TintCstat = 0x18,
}

/// Implementation to convert `Reg` to `u32`.
impl From<Reg> for u32 {
    fn from(val: Reg) -> Self {
        val as u32
    }
}
