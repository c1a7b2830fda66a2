//! Question countdown timer
//!
//! A single countdown clock tied to the current question, ticking in fixed
//! one-second steps. The clock does not own a thread or an interval handle:
//! the embedder schedules tick alarms and delivers them back to the panel,
//! which consults [`Countdown::accepts`] before applying them. Every
//! start, pause, halt, and reset bumps an epoch counter, so a tick
//! scheduled before any of those is discarded on arrival. Cancellation is
//! therefore synchronous: once a mutating call returns, no previously
//! scheduled tick can reach live state.

use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Outcome of a start/pause toggle request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The countdown is now running
    Started,
    /// The countdown is now paused
    Paused,
    /// The request was ignored (countdown already spent)
    Ignored,
}

/// The countdown clock for the current question
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Countdown {
    /// Seconds left on the clock
    remaining: u64,
    /// Whether ticks are currently being accepted
    running: bool,
    /// Guard against stale ticks; bumped on every state change
    epoch: u64,
}

impl Countdown {
    /// Creates a stopped countdown loaded with the given duration
    pub fn new(time: Duration) -> Self {
        Self {
            remaining: time.as_secs(),
            running: false,
            epoch: 0,
        }
    }

    /// Returns the seconds left on the clock
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Whether the countdown is currently running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the current epoch, to be stamped onto scheduled ticks
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether a tick stamped with `epoch` should be applied
    ///
    /// Rejects ticks scheduled before the most recent state change and
    /// ticks arriving while paused.
    pub fn accepts(&self, epoch: u64) -> bool {
        self.running && self.epoch == epoch
    }

    /// Toggles between running and paused
    ///
    /// Starting a spent countdown (zero remaining) is ignored so a
    /// finished clock cannot be restarted into negative territory.
    pub(crate) fn toggle(&mut self) -> Toggle {
        if self.running {
            self.running = false;
            self.epoch += 1;
            Toggle::Paused
        } else if self.remaining == 0 {
            Toggle::Ignored
        } else {
            self.running = true;
            self.epoch += 1;
            Toggle::Started
        }
    }

    /// Stops ticking without resetting the value
    ///
    /// Used when a contestant claims the buzzer mid-countdown: the clock
    /// freezes at its current value.
    pub(crate) fn halt(&mut self) {
        self.running = false;
        self.epoch += 1;
    }

    /// Stops ticking and reloads the clock with a new duration
    pub(crate) fn reset(&mut self, time: Duration) {
        self.running = false;
        self.remaining = time.as_secs();
        self.epoch += 1;
    }

    /// Applies one tick, returning the seconds left afterwards
    ///
    /// At zero the countdown halts itself; the caller is responsible for
    /// the expiry side effects (arbiter timeout, reveal, sound cue).
    pub(crate) fn tick(&mut self) -> u64 {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.halt();
        }
        self.remaining
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_new_countdown_is_stopped() {
        let countdown = Countdown::new(Duration::from_secs(15));
        assert_eq!(countdown.remaining(), 15);
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_toggle_starts_and_pauses() {
        let mut countdown = Countdown::new(Duration::from_secs(10));
        assert_eq!(countdown.toggle(), Toggle::Started);
        assert!(countdown.is_running());
        assert_eq!(countdown.toggle(), Toggle::Paused);
        assert!(!countdown.is_running());
        assert_eq!(countdown.remaining(), 10);
    }

    #[test]
    fn test_toggle_ignored_when_spent() {
        let mut countdown = Countdown::new(Duration::from_secs(1));
        countdown.toggle();
        countdown.tick();
        assert_eq!(countdown.remaining(), 0);
        assert_eq!(countdown.toggle(), Toggle::Ignored);
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_tick_halts_at_zero() {
        let mut countdown = Countdown::new(Duration::from_secs(2));
        countdown.toggle();
        assert_eq!(countdown.tick(), 1);
        assert!(countdown.is_running());
        assert_eq!(countdown.tick(), 0);
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_stale_epoch_rejected_after_halt() {
        let mut countdown = Countdown::new(Duration::from_secs(10));
        countdown.toggle();
        let scheduled_under = countdown.epoch();
        assert!(countdown.accepts(scheduled_under));

        countdown.halt();
        assert!(!countdown.accepts(scheduled_under));
        assert_eq!(countdown.remaining(), 10);
    }

    #[test]
    fn test_stale_epoch_rejected_after_reset() {
        let mut countdown = Countdown::new(Duration::from_secs(10));
        countdown.toggle();
        let scheduled_under = countdown.epoch();

        countdown.reset(Duration::from_secs(20));
        assert_eq!(countdown.remaining(), 20);
        assert!(!countdown.accepts(scheduled_under));
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_pause_invalidates_in_flight_tick() {
        let mut countdown = Countdown::new(Duration::from_secs(10));
        countdown.toggle();
        let scheduled_under = countdown.epoch();
        countdown.toggle();
        assert!(!countdown.accepts(scheduled_under));

        // restarting issues a fresh epoch; the old tick stays dead
        countdown.toggle();
        assert!(!countdown.accepts(scheduled_under));
        assert!(countdown.accepts(countdown.epoch()));
    }
}
