//! Domain types for the referee wire protocol.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// A player's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Every move, in wire-name order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Canonical wire name (`ROCK`, `PAPER`, `SCISSORS`).
    pub fn wire_name(self) -> &'static str {
        match self {
            Move::Rock => "ROCK",
            Move::Paper => "PAPER",
            Move::Scissors => "SCISSORS",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Move {
    type Err = ProtocolError;

    /// Exact, case-sensitive match on the wire name. The wire contract has
    /// no padding, so no trimming happens here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROCK" => Ok(Move::Rock),
            "PAPER" => Ok(Move::Paper),
            "SCISSORS" => Ok(Move::Scissors),
            other => Err(ProtocolError::UnknownMove(other.to_string())),
        }
    }
}

/// How the referee arbitrates a round: which sides are played by humans
/// and which by the referee's own AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    ManVsMan,
    ManVsAi,
    AiVsAi,
}

impl GameMode {
    /// Canonical wire name (`MAN_VS_MAN`, `MAN_VS_AI`, `AI_VS_AI`).
    pub fn wire_name(self) -> &'static str {
        match self {
            GameMode::ManVsMan => "MAN_VS_MAN",
            GameMode::ManVsAi => "MAN_VS_AI",
            GameMode::AiVsAi => "AI_VS_AI",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for GameMode {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MAN_VS_MAN" => Ok(GameMode::ManVsMan),
            "MAN_VS_AI" => Ok(GameMode::ManVsAi),
            "AI_VS_AI" => Ok(GameMode::AiVsAi),
            other => Err(ProtocolError::UnknownMode(other.to_string())),
        }
    }
}

/// Who won a round, as reported by the referee.
///
/// The verdict field of a response is free-form text owned by the referee
/// firmware. The labels the current firmware emits map to the named
/// variants; any other label is carried verbatim in [`Verdict::Other`]
/// rather than rejected, so a firmware with new labels keeps working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Player1,
    Player2,
    Draw,
    Other(String),
}

impl Verdict {
    /// Maps a referee label to a verdict. Never fails.
    pub fn from_label(label: &str) -> Verdict {
        match label {
            "Player 1" => Verdict::Player1,
            "Player 2" => Verdict::Player2,
            "DRAW" => Verdict::Draw,
            other => Verdict::Other(other.to_string()),
        }
    }

    /// The referee's label for this verdict.
    pub fn as_label(&self) -> &str {
        match self {
            Verdict::Player1 => "Player 1",
            Verdict::Player2 => "Player 2",
            Verdict::Draw => "DRAW",
            Verdict::Other(label) => label,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Verdict::Draw)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// One round's request: the arbitration mode and a move for each side.
///
/// In the AI modes the move sent for an AI side is a placeholder; the
/// referee substitutes its own and echoes what it actually played in the
/// [`RoundOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRequest {
    pub mode: GameMode,
    pub player1: Move,
    pub player2: Move,
}

impl RoundRequest {
    pub fn new(mode: GameMode, player1: Move, player2: Move) -> Self {
        Self {
            mode,
            player1,
            player2,
        }
    }
}

/// The referee's answer for one round.
///
/// The echoed moves are authoritative: in the AI modes they are the moves
/// the referee actually played, not the placeholders sent in the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub verdict: Verdict,
    pub player1: Move,
    pub player2: Move,
}
