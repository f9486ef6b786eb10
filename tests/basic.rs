// SPDX-License-Identifier: Apache-2.0

use nxve1000_timer::{Error, RegisterBus, SysTime, Timer};

/// Register block backed by an array, countdown moves one count per read.
struct SimBus {
    regs: [u32; 8],
}

impl RegisterBus for SimBus {
    fn read(&mut self, offset: u32) -> u32 {
        let idx = (offset / 4) as usize;
        if idx == 5 {
            // TCNTO
            self.regs[idx] = self.regs[idx].wrapping_sub(1);
        }
        self.regs[idx]
    }
    fn write(&mut self, offset: u32, value: u32) {
        self.regs[(offset / 4) as usize] = value;
    }
}

#[test_log::test]
fn counts_and_delays_through_the_public_api() {
    let bus = SimBus {
        regs: [0, 0, 0, 0, 0, u32::MAX, 0, 0],
    };
    let mut timer = Timer::init(bus, 0, 96_000_000).unwrap();

    let first = timer.now();
    let second = timer.now();
    assert!(second >= first);

    timer.delay_us(50);
    assert!(timer.now() >= first + 50);

    assert!(timer.ticks() >= second);
}

#[test_log::test]
fn rejects_bad_configuration() {
    let bus = SimBus { regs: [0; 8] };
    let res = Timer::init(bus, 9, 48_000_000);
    assert!(matches!(res, Err(Error::InvalidChannel(9))));
}
