use crate::error::SessionError;

/// What a single [`SessionClock::tick`] observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    /// Clock was not running (paused or already expired); nothing changed.
    Idle,
    /// Time advanced and the clock is still running.
    Running { remaining_ms: u64 },
    /// Time just reached zero. Reported exactly once; the clock stops.
    Expired,
}

/// Countdown clock for one session.
///
/// Ticks are parameterized by caller-supplied elapsed time, so any host
/// scheduling granularity works and tests need no real time. While running,
/// `remaining_ms` only decreases; while paused it is frozen; it never goes
/// below zero.
#[derive(Debug, Clone)]
pub struct SessionClock {
    remaining_ms: u64,
    running: bool,
}

impl SessionClock {
    pub fn new(duration_ms: u64) -> Result<Self, SessionError> {
        if duration_ms == 0 {
            return Err(SessionError::InvalidDuration);
        }
        Ok(Self {
            remaining_ms: duration_ms,
            running: false,
        })
    }

    /// Start (or resume) the clock. Idempotent; a no-op after expiry.
    pub fn start(&mut self) {
        if self.remaining_ms > 0 {
            self.running = true;
        }
    }

    /// Freeze the clock. Idempotent.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Advance time by `elapsed_ms` if running, clamping at zero.
    pub fn tick(&mut self, elapsed_ms: u64) -> ClockTick {
        if !self.running {
            return ClockTick::Idle;
        }

        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            self.running = false;
            ClockTick::Expired
        } else {
            ClockTick::Running {
                remaining_ms: self.remaining_ms,
            }
        }
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_rejected() {
        assert_eq!(SessionClock::new(0).unwrap_err(), SessionError::InvalidDuration);
    }

    #[test]
    fn test_tick_while_stopped_is_idle() {
        let mut clock = SessionClock::new(10_000).unwrap();
        assert_eq!(clock.tick(1_000), ClockTick::Idle);
        assert_eq!(clock.remaining_ms(), 10_000);
    }

    #[test]
    fn test_countdown_and_expiry_once() {
        let mut clock = SessionClock::new(3_000).unwrap();
        clock.start();

        assert_eq!(clock.tick(1_000), ClockTick::Running { remaining_ms: 2_000 });
        assert_eq!(clock.tick(2_500), ClockTick::Expired);
        assert_eq!(clock.remaining_ms(), 0);
        assert!(!clock.is_running());

        // No re-emission after expiry, even if restarted
        assert_eq!(clock.tick(1_000), ClockTick::Idle);
        clock.start();
        assert!(!clock.is_running());
        assert_eq!(clock.tick(1_000), ClockTick::Idle);
    }

    #[test]
    fn test_pause_freezes_time() {
        let mut clock = SessionClock::new(5_000).unwrap();
        clock.start();
        clock.tick(1_000);

        clock.pause();
        clock.pause(); // idempotent
        assert_eq!(clock.tick(60_000), ClockTick::Idle);
        assert_eq!(clock.remaining_ms(), 4_000);

        clock.start();
        clock.start(); // idempotent
        assert_eq!(clock.tick(1_000), ClockTick::Running { remaining_ms: 3_000 });
    }
}
