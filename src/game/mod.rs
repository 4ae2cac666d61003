//! Match orchestration
//!
//! The session state machine and the messages it emits.

mod message;
mod session;

pub use message::{Message, MessageStyle};
pub use session::{
    FAREWELL, Phase, REPLAY_PROMPT, REPLAY_REPROMPT, RoundRecord, Session, SessionStats,
    UNRECOGNISED_INPUT,
};
