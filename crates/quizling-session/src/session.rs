use log::{debug, info};
use quizling_question::QuestionItem;

use crate::clock::{ClockTick, SessionClock};
use crate::config::SessionConfig;
use crate::deck::QuestionDeck;
use crate::error::SessionError;
use crate::event::{SessionEvent, SessionInput, SessionSnapshot};
use crate::score::ScoreTracker;
use crate::summary::SessionSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Paused,
    /// Terminal; the outcome never changes once set.
    Ended(Outcome),
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every question answered correctly.
    Completed,
    /// The countdown reached zero.
    TimedOut,
    /// All lives lost.
    LivesExhausted,
}

/// One minigame playthrough: a deck, a countdown clock, and a score
/// tracker driven through a Playing / Paused / Ended lifecycle.
///
/// The session exclusively owns its parts; there is no reset. A restart
/// drops this instance and constructs a fresh one, which is observably
/// identical to a first-time session.
pub struct Session {
    deck: QuestionDeck,
    clock: SessionClock,
    tracker: ScoreTracker,
    state: SessionState,
}

impl Session {
    /// Build a session and start its clock. Fails fast on an empty deck,
    /// zero duration, or zero lives; there is no recovery path for a
    /// misconfigured session.
    pub fn new(items: Vec<QuestionItem>, config: SessionConfig) -> Result<Self, SessionError> {
        let deck = QuestionDeck::new(items)?;
        let mut clock = SessionClock::new(config.duration_ms)?;
        let tracker = ScoreTracker::new(config.initial_lives, config.award_points)?;
        clock.start();

        info!(
            "session start: {} questions, {}ms, {} lives",
            deck.len(),
            config.duration_ms,
            config.initial_lives
        );
        Ok(Self {
            deck,
            clock,
            tracker,
            state: SessionState::Playing,
        })
    }

    /// Deliver one discrete player input. Inputs that make no sense in the
    /// current state (answers while paused, stray input after the end) are
    /// no-ops returning no events.
    pub fn handle_input(&mut self, input: SessionInput) -> Vec<SessionEvent> {
        match (self.state, input) {
            (SessionState::Playing, SessionInput::Answer(index)) => self.resolve_answer(index),
            (SessionState::Playing, SessionInput::Pause | SessionInput::PauseToggle) => {
                self.pause()
            }
            (SessionState::Paused, SessionInput::Resume | SessionInput::PauseToggle) => {
                self.resume()
            }
            _ => Vec::new(),
        }
    }

    /// Advance time by `elapsed_ms`. Hosts call this once per frame, after
    /// delivering that frame's input.
    pub fn on_tick(&mut self, elapsed_ms: u64) -> Vec<SessionEvent> {
        if self.state != SessionState::Playing {
            return Vec::new();
        }

        let mut events = Vec::new();
        match self.clock.tick(elapsed_ms) {
            ClockTick::Running { remaining_ms } => {
                events.push(SessionEvent::TimeChanged(remaining_ms));
            }
            ClockTick::Expired => {
                events.push(SessionEvent::TimeChanged(0));
                self.end(Outcome::TimedOut, &mut events);
            }
            ClockTick::Idle => {}
        }
        events
    }

    fn resolve_answer(&mut self, option_index: usize) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        // While Playing the deck always has a current question: exhaustion
        // transitions straight to Ended(Completed).
        let Ok(item) = self.deck.current() else {
            return events;
        };

        if item.is_correct(option_index) {
            let score = self.tracker.record_correct();
            debug!("correct answer at cursor {}, score {score}", self.deck.cursor());
            events.push(SessionEvent::ScoreChanged(score));

            let _ = self.deck.advance(); // cannot fail: current() succeeded
            if self.deck.is_exhausted() {
                self.end(Outcome::Completed, &mut events);
            } else if let Ok(next) = self.deck.current() {
                events.push(SessionEvent::QuestionChanged {
                    index: self.deck.cursor(),
                    item: next.clone(),
                });
            }
        } else {
            // A wrong pick costs a life but never advances the question;
            // the player keeps trying until they catch the right option.
            let update = self.tracker.record_incorrect();
            debug!("incorrect answer, {} lives left", update.remaining);
            events.push(SessionEvent::LivesChanged(update.remaining));

            if update.exhausted_now {
                self.end(Outcome::LivesExhausted, &mut events);
            }
        }
        events
    }

    fn pause(&mut self) -> Vec<SessionEvent> {
        self.clock.pause();
        self.state = SessionState::Paused;
        debug!("session paused");
        vec![SessionEvent::Paused(self.snapshot())]
    }

    fn resume(&mut self) -> Vec<SessionEvent> {
        self.clock.start();
        self.state = SessionState::Playing;
        debug!("session resumed");
        vec![SessionEvent::Resumed]
    }

    fn end(&mut self, outcome: Outcome, events: &mut Vec<SessionEvent>) {
        self.clock.pause();
        self.state = SessionState::Ended(outcome);
        info!(
            "session ended: {outcome:?}, score {}, {}/{} answered",
            self.tracker.score(),
            self.deck.cursor(),
            self.deck.len()
        );
        events.push(SessionEvent::Ended(outcome));
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The terminal outcome, once ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn score(&self) -> u32 {
        self.tracker.score()
    }

    pub fn lives_remaining(&self) -> u32 {
        self.tracker.lives_remaining()
    }

    pub fn remaining_ms(&self) -> u64 {
        self.clock.remaining_ms()
    }

    /// The question awaiting an answer, if any remain.
    pub fn current_question(&self) -> Option<&QuestionItem> {
        self.deck.current().ok()
    }

    pub fn answered_count(&self) -> usize {
        self.deck.cursor()
    }

    pub fn total_questions(&self) -> usize {
        self.deck.len()
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            score: self.tracker.score(),
            lives_remaining: self.tracker.lives_remaining(),
            remaining_ms: self.clock.remaining_ms(),
            answered: self.deck.cursor(),
            total: self.deck.len(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            outcome: self.outcome(),
            score: self.tracker.score(),
            answered: self.deck.cursor(),
            total: self.deck.len(),
            lives_remaining: self.tracker.lives_remaining(),
            remaining_ms: self.clock.remaining_ms(),
        }
    }
}
