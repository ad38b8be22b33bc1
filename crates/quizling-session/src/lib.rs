//! Minigame session engine: one reusable implementation of the
//! timer / lives / scoring / question-progression lifecycle shared by the
//! quiz minigames.
//!
//! The engine is host-driven and single-threaded: the host forwards discrete
//! player input through [`Session::handle_input`] and advances time through
//! [`Session::on_tick`], then renders from the [`SessionEvent`]s both calls
//! return. The engine owns no rendering, input polling, or scheduling.
//!
//! Host call order within one frame is input first, then tick, so a pause
//! requested in the same frame as clock expiry suppresses that frame's
//! expiry.
//!
//! There is no reset anywhere in this crate: a restart means dropping the
//! old [`Session`] and constructing a fresh one.

mod clock;
mod config;
mod deck;
mod error;
mod event;
mod score;
mod session;
mod summary;

pub use clock::{ClockTick, SessionClock};
pub use config::{SessionConfig, SessionConfigBuilder};
pub use deck::QuestionDeck;
pub use error::SessionError;
pub use event::{SessionEvent, SessionInput, SessionSnapshot};
pub use score::{LivesUpdate, ScoreTracker};
pub use session::{Outcome, Session, SessionState};
pub use summary::SessionSummary;
