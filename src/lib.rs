// SPDX-License-Identifier: Apache-2.0

//! NXVE1000 PWM timer driver
//!
//! Runs one of the block's eight channels as a free-running down-counter
//! and turns its wrapping 32-bit countdown into a monotonic 64-bit
//! microsecond count, with a busy-wait delay built on top. The main
//! entry point is [Timer].
//!
//! Register access goes through the [RegisterBus] trait: [Mmio] drives
//! the memory-mapped block on target, tests substitute plain memory.
//!
//! Basic usage:
//! ```no_run
//! use nxve1000_timer::{Mmio, Timer};
//!
//! // Safety: the PWM timer block of this part, nothing else drives it
//! let bus = unsafe { Mmio::new(0x4000_0000) };
//! let mut timer = Timer::init(bus, 0, 48_000_000).unwrap();
//! timer.delay_us(1_000);
//! let elapsed = timer.now();
//! ```
//!
//! `Timer::init_periodic` selects the interrupt-counted mode instead:
//! the channel reloads once per second and the caller's interrupt
//! handler forwards each reload to [Timer::handle_interrupt]. Wiring
//! the interrupt controller itself is the board's job.
#![no_std]

#[cfg(feature = "std")]
extern crate std;

// Compile-time checks for logging features
#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features 'defmt' and 'log' are mutually exclusive. Enable only one for logging.");

#[cfg(not(any(feature = "defmt", feature = "log")))]
compile_error!("Must enable either 'defmt' or 'log' feature for logging support.");

#[cfg(feature = "defmt")]
pub(crate) use defmt::{info, trace, warn};
#[cfg(feature = "log")]
pub(crate) use log::{info, trace, warn};

pub mod bus;
pub mod errors;
mod regs;
mod systime;
mod tick;
mod timer;

pub use bus::{Mmio, RegisterBus};
pub use errors::Error;
pub use regs::TICK_RATE_HZ;
pub use systime::SysTime;
pub use timer::Timer;
