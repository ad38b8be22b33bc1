use quizling_question::QuestionItem;

use crate::error::SessionError;

/// Ordered questions for one session plus a cursor.
///
/// Content is static after construction; only [`QuestionDeck::advance`]
/// moves the cursor. `cursor == len` means the deck is exhausted.
#[derive(Debug, Clone)]
pub struct QuestionDeck {
    items: Vec<QuestionItem>,
    cursor: usize,
}

impl QuestionDeck {
    pub fn new(items: Vec<QuestionItem>) -> Result<Self, SessionError> {
        if items.is_empty() {
            return Err(SessionError::EmptyDeck);
        }
        Ok(Self { items, cursor: 0 })
    }

    /// The question at the cursor.
    pub fn current(&self) -> Result<&QuestionItem, SessionError> {
        self.items.get(self.cursor).ok_or(SessionError::DeckExhausted)
    }

    /// Move past the current question. Callers check exhaustion first;
    /// advancing past the end is a misuse error.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        if self.cursor >= self.items.len() {
            return Err(SessionError::DeckExhausted);
        }
        self.cursor += 1;
        Ok(())
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.items.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.items.len() - self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Questions already advanced past (the cursor position).
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
