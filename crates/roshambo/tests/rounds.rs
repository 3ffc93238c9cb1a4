//! Integration tests: full round exchanges against a scripted peer over an
//! in-memory link. The peer plays the referee's side of the wire protocol
//! by writing response bytes before the round runs.

use roshambo::prelude::*;
use roshambo_transport::{MemoryLink, MemoryTransport};

fn client_with_peer() -> (RefereeClient<MemoryTransport>, MemoryLink) {
    let mut transport = MemoryTransport::new();
    let peer = transport.register("ref0");
    let session = Session::new(transport, "ref0", SessionConfig::default());
    (RefereeClient::new(session), peer)
}

#[tokio::test]
async fn test_play_round_sends_exact_request_line() {
    let (mut client, mut peer) = client_with_peer();
    client.open().await.unwrap();
    peer.write_all(b"Player 1,ROCK,SCISSORS|").await.unwrap();

    client
        .play_round(GameMode::ManVsMan, Move::Rock, Move::Scissors)
        .await
        .unwrap();

    let sent = peer.read_some().await.unwrap().unwrap();
    assert_eq!(sent, b"MAN_VS_MAN,ROCK,SCISSORS\n");
}

#[tokio::test]
async fn test_play_round_reassembles_response_split_across_chunks() {
    let (mut client, mut peer) = client_with_peer();
    client.open().await.unwrap();
    peer.write_all(b"Player 1,RO").await.unwrap();
    peer.write_all(b"CK,SCISS").await.unwrap();
    peer.write_all(b"ORS|").await.unwrap();

    let outcome = client
        .play_round(GameMode::ManVsMan, Move::Rock, Move::Scissors)
        .await
        .unwrap();

    assert_eq!(outcome.verdict, Verdict::Player1);
    assert_eq!(outcome.player1, Move::Rock);
    assert_eq!(outcome.player2, Move::Scissors);
}

#[tokio::test]
async fn test_play_round_draw() {
    let (mut client, mut peer) = client_with_peer();
    client.open().await.unwrap();
    peer.write_all(b"DRAW,PAPER,PAPER|").await.unwrap();

    let outcome = client
        .play_round(GameMode::ManVsMan, Move::Paper, Move::Paper)
        .await
        .unwrap();

    assert!(outcome.verdict.is_draw());
    assert_eq!(outcome.player1, Move::Paper);
    assert_eq!(outcome.player2, Move::Paper);
}

#[tokio::test]
async fn test_ai_mode_outcome_echoes_referee_moves() {
    let (mut client, mut peer) = client_with_peer();
    client.open().await.unwrap();
    // The referee substitutes its own moves for the placeholders.
    peer.write_all(b"Player 2,ROCK,PAPER|").await.unwrap();

    let outcome = client
        .play_round(GameMode::AiVsAi, Move::Rock, Move::Rock)
        .await
        .unwrap();

    assert_eq!(outcome.verdict, Verdict::Player2);
    assert_eq!(outcome.player2, Move::Paper);
}

#[tokio::test]
async fn test_unknown_verdict_label_passes_through() {
    let (mut client, mut peer) = client_with_peer();
    client.open().await.unwrap();
    peer.write_all(b"SUDDEN DEATH,ROCK,ROCK|").await.unwrap();

    let outcome = client
        .play_round(GameMode::ManVsMan, Move::Rock, Move::Rock)
        .await
        .unwrap();

    assert_eq!(outcome.verdict, Verdict::Other("SUDDEN DEATH".to_string()));
}

#[tokio::test]
async fn test_referee_eof_fails_round_and_session_still_closes() {
    let (mut client, peer) = client_with_peer();
    client.open().await.unwrap();
    drop(peer);

    let err = client
        .play_round(GameMode::ManVsMan, Move::Rock, Move::Paper)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RoundError::Session(SessionError::NoDataReceived)
    ));
    assert!(!err.connection_reusable());

    client.close().await.unwrap();
    assert_eq!(client.state(), SessionState::Closed);
}

#[tokio::test]
async fn test_play_round_before_open_fails_without_transport_io() {
    let (mut client, mut peer) = client_with_peer();

    let err = client
        .play_round(GameMode::ManVsMan, Move::Rock, Move::Paper)
        .await
        .unwrap_err();
    assert!(matches!(err, RoundError::Session(SessionError::NotOpen)));

    // Nothing reached the wire: after opening, the first bytes the peer
    // sees belong to the next round.
    client.open().await.unwrap();
    peer.write_all(b"DRAW,ROCK,ROCK|").await.unwrap();
    client
        .play_round(GameMode::ManVsMan, Move::Rock, Move::Rock)
        .await
        .unwrap();

    let sent = peer.read_some().await.unwrap().unwrap();
    assert_eq!(sent, b"MAN_VS_MAN,ROCK,ROCK\n");
}

#[tokio::test]
async fn test_malformed_response_fails_round_but_connection_survives() {
    let (mut client, mut peer) = client_with_peer();
    client.open().await.unwrap();

    peer.write_all(b"GARBAGE|").await.unwrap();
    let err = client
        .play_round(GameMode::ManVsMan, Move::Rock, Move::Paper)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RoundError::Protocol(ProtocolError::FieldCount(1))
    ));
    assert!(err.connection_reusable());

    // The link stayed aligned; the next round goes through.
    peer.write_all(b"Player 2,ROCK,PAPER|").await.unwrap();
    let outcome = client
        .play_round(GameMode::ManVsMan, Move::Rock, Move::Paper)
        .await
        .unwrap();
    assert_eq!(outcome.verdict, Verdict::Player2);
}

#[tokio::test]
async fn test_unknown_move_in_response_is_protocol_error() {
    let (mut client, mut peer) = client_with_peer();
    client.open().await.unwrap();
    peer.write_all(b"Player 1,ROCK,LIZARD|").await.unwrap();

    let err = client
        .play_round(GameMode::ManVsMan, Move::Rock, Move::Paper)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RoundError::Protocol(ProtocolError::UnknownMove(name)) if name == "LIZARD"
    ));
}

#[tokio::test(start_paused = true)]
async fn test_silent_referee_times_out() {
    let (mut client, _peer) = client_with_peer();
    client.open().await.unwrap();

    let err = client
        .play_round(GameMode::ManVsMan, Move::Rock, Move::Paper)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RoundError::Session(SessionError::ReceiveTimeout(_))
    ));
}

#[tokio::test]
async fn test_each_round_writes_exactly_one_request() {
    let (mut client, mut peer) = client_with_peer();
    client.open().await.unwrap();

    peer.write_all(b"Player 1,ROCK,SCISSORS|").await.unwrap();
    client
        .play_round(GameMode::ManVsMan, Move::Rock, Move::Scissors)
        .await
        .unwrap();

    peer.write_all(b"DRAW,PAPER,PAPER|").await.unwrap();
    client
        .play_round(GameMode::ManVsMan, Move::Paper, Move::Paper)
        .await
        .unwrap();

    client.close().await.unwrap();

    // Two rounds, two request lines, then end-of-stream. No retries, no
    // stray writes.
    assert_eq!(
        peer.read_some().await.unwrap(),
        Some(b"MAN_VS_MAN,ROCK,SCISSORS\n".to_vec())
    );
    assert_eq!(
        peer.read_some().await.unwrap(),
        Some(b"MAN_VS_MAN,PAPER,PAPER\n".to_vec())
    );
    assert_eq!(peer.read_some().await.unwrap(), None);
}

#[tokio::test]
async fn test_close_is_idempotent_through_client() {
    let (mut client, _peer) = client_with_peer();
    client.open().await.unwrap();

    client.close().await.unwrap();
    client.close().await.unwrap();

    assert_eq!(client.state(), SessionState::Closed);
}

#[tokio::test]
async fn test_client_state_tracks_session_lifecycle() {
    let (mut client, _peer) = client_with_peer();
    assert_eq!(client.state(), SessionState::Unopened);

    client.open().await.unwrap();
    assert_eq!(client.state(), SessionState::Open);

    client.close().await.unwrap();
    assert_eq!(client.state(), SessionState::Closed);
}
