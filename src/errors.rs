// SPDX-License-Identifier: Apache-2.0

/// Timer bring-up errors
///
/// Only channel initialization can fail. Once a channel is bound and
/// counting, the remaining operations are infallible.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Channel index outside the block's eight channels
    InvalidChannel(u8),
    /// Input clock slower than the tick rate, prescale factor would be zero
    ClockTooSlow(u32),
    /// Input clock needs a prescale factor beyond the 8-bit field
    ClockTooFast(u32),
}
