//! The game clock and the pulse timer underneath it.

use std::time::Duration;

#[cfg(test)]
use mock_instant::Instant;
#[cfg(not(test))]
use std::time::Instant;

use crate::sched::CancelHandle;

/// Keeps track of time between relatively steady pulses.
///
/// Pulses try to stay lined up with the first one, but if [`Self::ready`]
/// is checked more than half a period late, the next pulse is reset relative
/// to the current time instead. Checked early, it always advances by exactly
/// one period, so a well-behaved caller doesn't accumulate drift.
pub struct Timer {
    next: Instant,
    period: Duration,
}

impl Timer {
    /// Create a new timer with the given period. The first pulse lands one
    /// full period from now.
    pub fn new(period: Duration) -> Self {
        Self {
            next: Instant::now() + period,
            period,
        }
    }

    /// How much time is left before the next pulse. Minimum zero.
    pub fn remaining(&self) -> Duration {
        self.next
            .checked_duration_since(Instant::now())
            .unwrap_or(Duration::ZERO)
    }

    /// Advance to the next pulse.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if now < self.next + self.period / 2 {
            self.next += self.period;
        } else {
            self.next = now + self.period;
        }
    }

    /// Check whether the pulse has landed yet; if so, advance the timer.
    pub fn ready(&mut self) -> bool {
        if Instant::now() > self.next {
            self.tick();
            true
        } else {
            false
        }
    }
}

/// The game clock: how long the current game has been running.
///
/// The elapsed time is recomputed from the start instant on a fixed pulse
/// rather than continuously, which is exactly as often as anyone looking at
/// it needs. [`Self::stop`] cancels the pulse permanently; there is no
/// pause or resume.
pub struct Clock {
    started: Instant,
    elapsed: Duration,
    pulse: Timer,
    cancel: CancelHandle,
}

impl Clock {
    /// Start a clock ticking now, refreshing every `period`.
    pub fn start(period: Duration) -> Self {
        Self {
            started: Instant::now(),
            elapsed: Duration::ZERO,
            pulse: Timer::new(period),
            cancel: CancelHandle::new(),
        }
    }

    /// Refresh the elapsed time if a pulse has landed. Returns true when it
    /// did, i.e. when a frontend's info display has gone stale. Cheap no-op
    /// between pulses and permanently after [`Self::stop`].
    pub fn tick(&mut self) -> bool {
        if self.cancel.is_cancelled() || !self.pulse.ready() {
            return false;
        }
        self.elapsed = Instant::now().duration_since(self.started);
        true
    }

    /// The elapsed time as of the last pulse.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Stop the clock for good, freezing [`Self::elapsed`] at its last value.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Format an elapsed time as zero-padded `MM:SS` for an info display.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod timing_test {
    use std::time::Duration;

    use mock_instant::MockClock;

    use super::{format_elapsed, Clock, Timer};

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    fn not_ready_until_period_passes() {
        let mut timer = Timer::new(PERIOD);
        assert!(!timer.ready());
        MockClock::advance(Duration::from_millis(60));
        assert!(!timer.ready());
        MockClock::advance(Duration::from_millis(60));
        assert!(timer.ready());
        // consumed; the next pulse is another period out
        assert!(!timer.ready());
    }

    #[test]
    fn on_time_pulses_stay_aligned() {
        let mut timer = Timer::new(PERIOD);
        MockClock::advance(Duration::from_millis(110));
        assert!(timer.ready());
        // next pulse is at 200, not 210
        MockClock::advance(Duration::from_millis(95));
        assert!(timer.ready());
    }

    #[test]
    fn late_pulses_reset_instead_of_bursting() {
        let mut timer = Timer::new(PERIOD);
        MockClock::advance(Duration::from_millis(350));
        assert!(timer.ready());
        // a pulse was missed entirely, but it doesn't get made up
        assert!(!timer.ready());
        MockClock::advance(Duration::from_millis(90));
        assert!(!timer.ready());
        MockClock::advance(Duration::from_millis(20));
        assert!(timer.ready());
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let timer = Timer::new(PERIOD);
        assert_eq!(timer.remaining(), PERIOD);
        MockClock::advance(Duration::from_millis(40));
        assert_eq!(timer.remaining(), Duration::from_millis(60));
        MockClock::advance(Duration::from_millis(100));
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn clock_tracks_elapsed_on_pulses() {
        let mut clock = Clock::start(PERIOD);
        assert_eq!(clock.elapsed(), Duration::ZERO);
        MockClock::advance(Duration::from_millis(50));
        assert!(!clock.tick());
        assert_eq!(clock.elapsed(), Duration::ZERO);
        MockClock::advance(Duration::from_millis(60));
        assert!(clock.tick());
        assert_eq!(clock.elapsed(), Duration::from_millis(110));
    }

    #[test]
    fn stopped_clock_freezes() {
        let mut clock = Clock::start(PERIOD);
        MockClock::advance(Duration::from_millis(110));
        assert!(clock.tick());
        let frozen = clock.elapsed();
        clock.stop();
        assert!(clock.is_stopped());
        MockClock::advance(Duration::from_millis(500));
        assert!(!clock.tick());
        assert_eq!(clock.elapsed(), frozen);
    }

    #[test]
    fn elapsed_formats_as_minutes_and_seconds() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00");
        assert_eq!(format_elapsed(Duration::from_millis(59_900)), "00:59");
        assert_eq!(format_elapsed(Duration::from_secs(62)), "01:02");
        assert_eq!(format_elapsed(Duration::from_secs(600)), "10:00");
    }
}
