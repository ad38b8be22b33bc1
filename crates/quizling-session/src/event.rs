use quizling_question::QuestionItem;

use crate::session::Outcome;

/// Discrete player input forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    /// An answer-selection attempt naming an option index.
    Answer(usize),
    /// ESC-style toggle: pauses while playing, resumes while paused.
    PauseToggle,
    Pause,
    Resume,
}

/// Stats frozen at pause time for the pause overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub score: u32,
    pub lives_remaining: u32,
    pub remaining_ms: u64,
    pub answered: usize,
    pub total: usize,
}

/// Events the presentation layer renders from. Each call into the session
/// returns the events it produced, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new question became current.
    QuestionChanged { index: usize, item: QuestionItem },
    ScoreChanged(u32),
    LivesChanged(u32),
    /// Remaining time after a tick, in milliseconds.
    TimeChanged(u64),
    Paused(SessionSnapshot),
    Resumed,
    /// Terminal. Emitted exactly once per session.
    Ended(Outcome),
}
