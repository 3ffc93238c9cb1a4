//! Wire protocol for the Roshambo referee link.
//!
//! Defines the domain types (moves, game modes, verdicts) and the
//! delimiter-framed text codec the referee firmware speaks. Everything
//! here is pure data and parsing; no I/O.

mod codec;
mod error;
mod types;

pub use codec::{
    decode_response, encode_request, FIELD_SEPARATOR, REQUEST_TERMINATOR, RESPONSE_TERMINATOR,
};
pub use error::ProtocolError;
pub use types::{GameMode, Move, RoundOutcome, RoundRequest, Verdict};
