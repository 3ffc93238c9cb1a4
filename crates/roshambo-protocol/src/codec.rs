//! Encoding and decoding of referee wire messages.
//!
//! The wire format is delimiter-framed ASCII text:
//!
//! - Request line: `MODE,MOVE1,MOVE2` terminated by `\n`, e.g.
//!   `MAN_VS_MAN,ROCK,SCISSORS\n`.
//! - Response frame: `VERDICT,MOVE1,MOVE2` terminated by `|`, e.g.
//!   `Player 1,ROCK,SCISSORS|`.
//!
//! Framing (watching the stream for the terminator) is the session layer's
//! job; this module works on exactly one complete message at a time.

use crate::{ProtocolError, RoundOutcome, RoundRequest, Verdict};

/// Terminates a request line.
pub const REQUEST_TERMINATOR: u8 = b'\n';

/// Terminates a response frame.
pub const RESPONSE_TERMINATOR: u8 = b'|';

/// Separates fields within a message.
pub const FIELD_SEPARATOR: char = ',';

/// Encodes one round request as a terminated wire line.
///
/// Infallible: mode and move names come from closed enums, so no field can
/// contain the separator or a terminator.
pub fn encode_request(request: &RoundRequest) -> Vec<u8> {
    let mut line = format!(
        "{}{sep}{}{sep}{}",
        request.mode,
        request.player1,
        request.player2,
        sep = FIELD_SEPARATOR,
    )
    .into_bytes();
    line.push(REQUEST_TERMINATOR);
    line
}

/// Decodes one complete response frame, terminator already stripped.
///
/// The first field is the verdict label and passes through uninterpreted;
/// the move fields must be exact wire names. Fields are never trimmed
/// individually, the wire contract has no padding.
pub fn decode_response(frame: &[u8]) -> Result<RoundOutcome, ProtocolError> {
    let text = std::str::from_utf8(frame)?;

    let fields: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
    if fields.len() != 3 {
        return Err(ProtocolError::FieldCount(fields.len()));
    }

    Ok(RoundOutcome {
        verdict: Verdict::from_label(fields[0]),
        player1: fields[1].parse()?,
        player2: fields[2].parse()?,
    })
}
