//! JSON shape of events, history entries and state.

use serde_json::json;

use quoridor_engine::core::{BarrierPosition, Direction, Event, HistoryEntry, Player};
use quoridor_engine::rules::GameEngine;
use quoridor_engine::GameState;

#[test]
fn test_event_shapes() {
    let cases = [
        (Event::Move(Direction::Left), json!({"eventKind": "move", "payload": "left"})),
        (
            Event::PlaceBarrier(BarrierPosition::horizontal(3, 7)),
            json!({
                "eventKind": "placeBarrier",
                "payload": {"position": {"x": 3, "y": 7}, "vertical": false}
            }),
        ),
        (Event::ChangeTurn, json!({"eventKind": "changeTurn"})),
    ];

    for (event, expected) in cases {
        assert_eq!(serde_json::to_value(event).unwrap(), expected);
        let decoded: Event = serde_json::from_value(expected).unwrap();
        assert_eq!(decoded, event);
    }
}

#[test]
fn test_malformed_events_are_rejected() {
    for raw in [
        r#"{"eventKind":"move","payload":"north"}"#,
        r#"{"eventKind":"placeBarrier","payload":{"position":{"x":1},"vertical":true}}"#,
        r#"{"payload":"up"}"#,
    ] {
        assert!(serde_json::from_str::<Event>(raw).is_err(), "{} decoded", raw);
    }
}

#[test]
fn test_history_entry_shape() {
    let entry = HistoryEntry::new(0, Player::TOP, Event::Move(Direction::Down));
    assert_eq!(
        serde_json::to_value(entry).unwrap(),
        json!({
            "sequence": 0,
            "player": "top",
            "event": {"eventKind": "move", "payload": "down"}
        })
    );
}

#[test]
fn test_state_snapshot_round_trips() {
    let mut engine = GameEngine::standard();
    engine
        .handle_event(Player::TOP, Event::PlaceBarrier(BarrierPosition::vertical(6, 2)))
        .unwrap();
    engine.handle_event(Player::TOP, Event::Move(Direction::Down)).unwrap();

    let json = serde_json::to_string(engine.state()).unwrap();
    let snapshot: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(&snapshot, engine.state());
}
