use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("question deck must contain at least one question")]
    EmptyDeck,

    #[error("session duration must be positive")]
    InvalidDuration,

    #[error("initial lives must be positive")]
    InvalidLives,

    #[error("question deck is exhausted")]
    DeckExhausted,
}
