use crate::error::SessionError;

/// Result of recording an incorrect answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LivesUpdate {
    pub remaining: u32,
    /// True exactly on the decrement that reached zero.
    pub exhausted_now: bool,
}

/// Score and remaining-lives counters for one session.
///
/// Deliberately has no reset: a new session constructs a new tracker, so
/// stale counters can never leak across restarts.
#[derive(Debug, Clone)]
pub struct ScoreTracker {
    score: u32,
    lives_remaining: u32,
    award_points: u32,
}

impl ScoreTracker {
    pub fn new(initial_lives: u32, award_points: u32) -> Result<Self, SessionError> {
        if initial_lives == 0 {
            return Err(SessionError::InvalidLives);
        }
        Ok(Self {
            score: 0,
            lives_remaining: initial_lives,
            award_points,
        })
    }

    /// Award points for a correct answer; returns the new score.
    pub fn record_correct(&mut self) -> u32 {
        self.score += self.award_points;
        self.score
    }

    /// Take a life for an incorrect answer. Zero is terminal; further
    /// incorrect answers stay at zero without re-reporting exhaustion.
    pub fn record_incorrect(&mut self) -> LivesUpdate {
        if self.lives_remaining == 0 {
            return LivesUpdate {
                remaining: 0,
                exhausted_now: false,
            };
        }
        self.lives_remaining -= 1;
        LivesUpdate {
            remaining: self.lives_remaining,
            exhausted_now: self.lives_remaining == 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives_remaining(&self) -> u32 {
        self.lives_remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_lives_rejected() {
        assert_eq!(ScoreTracker::new(0, 10).unwrap_err(), SessionError::InvalidLives);
    }

    #[test]
    fn test_correct_accumulates_score() {
        let mut tracker = ScoreTracker::new(3, 10).unwrap();
        assert_eq!(tracker.record_correct(), 10);
        assert_eq!(tracker.record_correct(), 20);
        assert_eq!(tracker.lives_remaining(), 3);
    }

    #[test]
    fn test_exhaustion_reported_once() {
        let mut tracker = ScoreTracker::new(2, 10).unwrap();

        let update = tracker.record_incorrect();
        assert_eq!(update, LivesUpdate { remaining: 1, exhausted_now: false });

        let update = tracker.record_incorrect();
        assert_eq!(update, LivesUpdate { remaining: 0, exhausted_now: true });

        // Terminal: stays at zero, no re-report
        let update = tracker.record_incorrect();
        assert_eq!(update, LivesUpdate { remaining: 0, exhausted_now: false });
    }
}
