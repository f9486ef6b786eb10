// SPDX-License-Identifier: Apache-2.0

//! Software accounting that widens the 32-bit hardware countdown into a
//! monotonic 64-bit tick count.

/// Tick accounting strategy, fixed when the channel is brought up.
pub(crate) enum TickSource {
    /// Free-running counter, sampled by polling.
    FreeRun(FreeRun),
    /// Periodic reloads, tallied from the reload interrupt.
    Periodic(Periodic),
}

impl TickSource {
    /// Folds the raw countdown value into the running total and returns
    /// the total.
    pub(crate) fn advance(&mut self, raw: u32) -> u64 {
        match self {
            TickSource::FreeRun(acc) => acc.advance(raw),
            TickSource::Periodic(tally) => tally.advance(raw),
        }
    }
}

/// Accumulator for a polled free-running down-counter.
///
/// Subtracting each raw read from `max_count` turns the countdown into
/// an up-count over the same range; the difference between successive
/// up-counts is added to a 64-bit total. A raw value that went back up
/// means the counter reloaded since the last read, so the full period is
/// added back in. At most one reload may pass between reads: sampling
/// slower than the hardware period silently loses whole periods.
pub(crate) struct FreeRun {
    timestamp: u64, // accumulated ticks
    lastdec: u32,   // up-count seen by the previous advance
    max_count: u32, // reload value programmed into the channel
}

impl FreeRun {
    pub(crate) fn new(max_count: u32) -> Self {
        Self {
            timestamp: 0,
            lastdec: 0,
            max_count,
        }
    }

    pub(crate) fn advance(&mut self, raw: u32) -> u64 {
        let now = self.max_count.wrapping_sub(raw);
        let delta = if now >= self.lastdec {
            (now - self.lastdec) as u64
        } else {
            // Counter reloaded since the last read. Widen to u64 first,
            // max_count is the full 32-bit range in free-running mode.
            now as u64 + self.max_count as u64 - self.lastdec as u64
        };
        self.lastdec = now;
        self.timestamp += delta;
        self.timestamp
    }
}

/// Tally for an interrupt-counted periodic down-counter.
///
/// Every reload interrupt accounts for one whole period of `reload + 1`
/// counts; the live countdown value supplies the progress through the
/// current period. A reload whose interrupt has not run yet is invisible
/// here, so reads taken in that window fall one period short until the
/// handler catches up.
pub(crate) struct Periodic {
    periods: u64, // reload interrupts seen so far
    reload: u32,  // reload value programmed into the channel
}

impl Periodic {
    pub(crate) fn new(reload: u32) -> Self {
        Self { periods: 0, reload }
    }

    /// Records one reload interrupt.
    pub(crate) fn record_reload(&mut self) {
        self.periods += 1;
    }

    pub(crate) fn advance(&self, raw: u32) -> u64 {
        let period = self.reload as u64 + 1;
        self.periods * period + self.reload.wrapping_sub(raw) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_run_starts_at_zero() {
        let mut acc = FreeRun::new(100);
        // Counter freshly latched, nothing elapsed yet
        assert_eq!(acc.advance(100), 0);
    }

    #[test]
    fn free_run_counts_up_between_reads() {
        let mut acc = FreeRun::new(100);
        assert_eq!(acc.advance(90), 10);
        // lastdec = 10, next up-count 40, so 30 ticks pass
        assert_eq!(acc.advance(60), 40);
    }

    #[test]
    fn free_run_rides_through_a_reload() {
        let mut acc = FreeRun::new(100);
        assert_eq!(acc.advance(90), 10); // lastdec = 10
        // Raw went back up: one reload passed. 5 + 100 - 10 = 95 more.
        assert_eq!(acc.advance(95), 105);
    }

    #[test]
    fn free_run_same_read_adds_nothing() {
        let mut acc = FreeRun::new(100);
        let first = acc.advance(60);
        assert_eq!(acc.advance(60), first);
    }

    #[test]
    fn free_run_full_range_reload() {
        let mut acc = FreeRun::new(u32::MAX);
        assert_eq!(acc.advance(u32::MAX), 0);
        assert_eq!(acc.advance(u32::MAX - 1_000), 1_000);
        // Wrap with the widest possible period must not overflow
        assert_eq!(acc.advance(u32::MAX - 500), 1_000 + u32::MAX as u64 - 500);
    }

    #[test]
    fn free_run_is_monotonic() {
        let mut acc = FreeRun::new(1_000);
        let mut last = 0;
        // Down-counting reads with a reload in the middle
        for raw in [1_000, 700, 400, 100, 900, 600, 300, 0, 950] {
            let t = acc.advance(raw);
            assert!(t >= last, "went backwards at raw {}", raw);
            last = t;
        }
    }

    #[test]
    fn periodic_tracks_position_in_period() {
        let tally = Periodic::new(5);
        assert_eq!(tally.advance(5), 0);
        assert_eq!(tally.advance(4), 1);
        assert_eq!(tally.advance(0), 5);
    }

    #[test]
    fn periodic_reload_adds_whole_period() {
        let mut tally = Periodic::new(5);
        assert_eq!(tally.advance(0), 5);
        tally.record_reload();
        // One period is reload + 1 counts
        assert_eq!(tally.advance(5), 6);
    }

    #[test]
    fn periodic_accumulates_many_periods() {
        let mut tally = Periodic::new(999);
        assert_eq!(tally.advance(999), 0);
        assert_eq!(tally.advance(500), 499);
        for _ in 0..3 {
            tally.record_reload();
        }
        assert_eq!(tally.advance(999), 3_000);
        assert_eq!(tally.advance(0), 3_999);
    }
}
