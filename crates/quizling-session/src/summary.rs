use crate::session::Outcome;

/// Observable session totals, for the pause overlay and the end screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    /// None while the session is still in progress.
    pub outcome: Option<Outcome>,
    pub score: u32,
    pub answered: usize,
    pub total: usize,
    pub lives_remaining: u32,
    pub remaining_ms: u64,
}

impl SessionSummary {
    /// Questions answered as a percentage of the deck, 0.0 for an empty
    /// ratio.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.answered as f64 / self.total as f64 * 100.0
    }
}
