//! Console client for a Rock-Paper-Scissors referee.
//!
//! ```text
//! console-duel --list                      list serial ports
//! console-duel --port <name> [--baud <n>]  play against a serial referee
//! console-duel --loopback                  play against an in-process referee
//! ```
//!
//! Rounds are read from stdin as `MODE MOVE1 [MOVE2]`, for example
//! `MAN_VS_MAN ROCK SCISSORS` or `MAN_VS_AI PAPER`. `exit` quits.

use std::io::{self, Write};

use roshambo::prelude::*;
use roshambo_transport::{DEFAULT_BAUD, MemoryLink, MemoryTransport, SerialTransport};
use tokio::io::{AsyncBufReadExt, BufReader};

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

const USAGE: &str = "usage: console-duel --list | --loopback | --port <name> [--baud <rate>]";

enum Cmd {
    List,
    Serial { port: String, baud: u32 },
    Loopback,
}

fn parse_args(args: &[String]) -> Result<Cmd, String> {
    match args.first().map(String::as_str) {
        Some("--list") => Ok(Cmd::List),
        Some("--loopback") => Ok(Cmd::Loopback),
        Some("--port") => {
            let port = args.get(1).ok_or(USAGE)?.clone();
            let baud = match args.get(2).map(String::as_str) {
                Some("--baud") => args
                    .get(3)
                    .ok_or(USAGE)?
                    .parse()
                    .map_err(|_| "baud must be a number".to_string())?,
                Some(_) => return Err(USAGE.to_string()),
                None => DEFAULT_BAUD,
            };
            Ok(Cmd::Serial { port, baud })
        }
        _ => Err(USAGE.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Round input and output
// ---------------------------------------------------------------------------

fn parse_round(line: &str) -> Result<(GameMode, Move, Move), String> {
    let mut words = line.split_whitespace();
    let mode: GameMode = words
        .next()
        .ok_or("missing mode")?
        .parse()
        .map_err(|e: ProtocolError| e.to_string())?;

    // AI sides get placeholder moves; the referee substitutes its own.
    let (player1, player2) = match mode {
        GameMode::ManVsMan => (next_move(&mut words)?, next_move(&mut words)?),
        GameMode::ManVsAi => (next_move(&mut words)?, Move::Rock),
        GameMode::AiVsAi => (Move::Rock, Move::Rock),
    };
    Ok((mode, player1, player2))
}

fn next_move<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Move, String> {
    words
        .next()
        .ok_or("missing move")?
        .parse()
        .map_err(|e: ProtocolError| e.to_string())
}

fn describe(outcome: &RoundOutcome) -> String {
    let headline = match &outcome.verdict {
        Verdict::Player1 => "player 1 wins".to_string(),
        Verdict::Player2 => "player 2 wins".to_string(),
        Verdict::Draw => "draw".to_string(),
        Verdict::Other(label) => format!("referee says: {label}"),
    };
    format!("{headline} ({} vs {})", outcome.player1, outcome.player2)
}

async fn play_loop<T: Transport>(
    mut client: RefereeClient<T>,
) -> Result<(), Box<dyn std::error::Error>> {
    client.open().await?;
    println!("modes: MAN_VS_MAN, MAN_VS_AI, AI_VS_AI; moves: ROCK, PAPER, SCISSORS");
    println!("enter rounds as `MODE MOVE1 [MOVE2]`, or `exit` to quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") {
            break;
        }

        let (mode, player1, player2) = match parse_round(line) {
            Ok(round) => round,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };

        match client.play_round(mode, player1, player2).await {
            Ok(outcome) => println!("{}", describe(&outcome)),
            Err(err) => {
                println!("round failed: {err}");
                if !err.connection_reusable() {
                    break;
                }
            }
        }
    }

    client.close().await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// In-process referee
// ---------------------------------------------------------------------------

/// Speaks the referee's side of the wire protocol, standing in for the
/// serial board when playing with `--loopback`.
async fn referee(mut link: MemoryLink) {
    let mut buf = Vec::new();
    loop {
        let chunk = match link.read_some().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) | Err(_) => return,
        };
        buf.extend_from_slice(&chunk);

        while let Some(pos) = buf.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = buf.drain(..=pos).collect();
            let Some(reply) = respond(&line) else {
                tracing::warn!("referee dropped a malformed request");
                continue;
            };
            if link.write_all(reply.as_bytes()).await.is_err() {
                return;
            }
        }
    }
}

fn respond(line: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(line).ok()?;
    let mut fields = text.trim().split(',');
    let mode: GameMode = fields.next()?.parse().ok()?;
    let mut player1: Move = fields.next()?.parse().ok()?;
    let mut player2: Move = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }

    match mode {
        GameMode::ManVsMan => {}
        GameMode::ManVsAi => player2 = random_move(),
        GameMode::AiVsAi => {
            player1 = random_move();
            player2 = random_move();
        }
    }

    Some(format!("{},{player1},{player2}|", judge(player1, player2)))
}

fn judge(player1: Move, player2: Move) -> &'static str {
    if player1 == player2 {
        "DRAW"
    } else if beats(player1, player2) {
        "Player 1"
    } else {
        "Player 2"
    }
}

fn beats(a: Move, b: Move) -> bool {
    matches!(
        (a, b),
        (Move::Rock, Move::Scissors) | (Move::Paper, Move::Rock) | (Move::Scissors, Move::Paper)
    )
}

fn random_move() -> Move {
    use rand::Rng;
    Move::ALL[rand::rng().random_range(0..Move::ALL.len())]
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cmd = match parse_args(&args) {
        Ok(cmd) => cmd,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    match cmd {
        Cmd::List => {
            for port in SerialTransport::default().available_ports()? {
                println!("{port}");
            }
            Ok(())
        }
        Cmd::Serial { port, baud } => {
            eprintln!("connecting to referee on {port} at {baud} baud");
            let session = Session::new(SerialTransport::new(baud), port, SessionConfig::default());
            play_loop(RefereeClient::new(session)).await
        }
        Cmd::Loopback => {
            eprintln!("playing against the in-process referee");
            let mut transport = MemoryTransport::new();
            let peer = transport.register("loopback");
            tokio::spawn(referee(peer));
            let session = Session::new(transport, "loopback", SessionConfig::default());
            play_loop(RefereeClient::new(session)).await
        }
    }
}
