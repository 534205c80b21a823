//! Four-player seating, rotation and goals.

use quoridor_engine::core::{Coordinate, Direction, Event, MatchConfig, Player, Side};
use quoridor_engine::rules::{legal_events, GameEngine};

fn four_player_engine() -> GameEngine {
    GameEngine::new(MatchConfig::new(9, 4)).unwrap()
}

#[test]
fn test_every_side_is_seated() {
    let engine = four_player_engine();
    let state = engine.state();

    let players: Vec<_> = state.players().collect();
    assert_eq!(players, vec![Player::TOP, Player::RIGHT, Player::BOTTOM, Player::LEFT]);

    assert_eq!(state.position(Player::RIGHT), Coordinate::new(9, 5));
    assert_eq!(state.position(Player::LEFT), Coordinate::new(1, 5));
    for player in players {
        assert_eq!(state.barrier_stock(player), 9);
        assert_eq!(state.score(player), 0);
    }
}

/// Turn goes top, right, bottom, left and back to top.
#[test]
fn test_rotation_is_clockwise() {
    let mut engine = four_player_engine();
    let mut order = Vec::new();

    for _ in 0..8 {
        let player = engine.state().turn();
        order.push(player.side());
        engine.handle_event(player, Event::ChangeTurn).unwrap();
    }

    assert_eq!(
        order,
        vec![
            Side::Top,
            Side::Right,
            Side::Bottom,
            Side::Left,
            Side::Top,
            Side::Right,
            Side::Bottom,
            Side::Left,
        ]
    );
}

/// Only the player holding the turn gets any legal events.
#[test]
fn test_legal_events_follow_turn() {
    let mut engine = four_player_engine();
    engine.handle_event(Player::TOP, Event::ChangeTurn).unwrap();

    for player in engine.state().players() {
        let events = legal_events(engine.state(), player);
        assert_eq!(events.is_empty(), player != Player::RIGHT, "{}", player);
    }
}

/// Right crosses the board leftwards and wins on the eighth step.
#[test]
fn test_right_wins_moving_left() {
    let mut engine = four_player_engine();
    engine.handle_event(Player::TOP, Event::ChangeTurn).unwrap();

    for _ in 0..8 {
        engine.handle_event(Player::RIGHT, Event::Move(Direction::Left)).unwrap();
    }

    let state = engine.state();
    assert_eq!(state.score(Player::RIGHT), 1);
    assert_eq!(state.turn(), Player::TOP);
    assert_eq!(state.position(Player::RIGHT), Coordinate::new(9, 5));
}

/// Left's goal edge is the right column.
#[test]
fn test_left_wins_moving_right() {
    let mut engine = GameEngine::new(MatchConfig::new(3, 4)).unwrap();
    for player in [Player::TOP, Player::RIGHT, Player::BOTTOM] {
        engine.handle_event(player, Event::ChangeTurn).unwrap();
    }

    // Left starts at (1,2); the goal column is x = 3.
    engine.handle_event(Player::LEFT, Event::Move(Direction::Right)).unwrap();
    assert_eq!(engine.state().score(Player::LEFT), 0);
    engine.handle_event(Player::LEFT, Event::Move(Direction::Right)).unwrap();
    assert_eq!(engine.state().score(Player::LEFT), 1);
}

/// Only a step towards the goal edge scores.
#[test]
fn test_sideways_next_to_goal_does_not_win() {
    let mut engine = GameEngine::new(MatchConfig::new(3, 4)).unwrap();

    engine.handle_event(Player::TOP, Event::Move(Direction::Left)).unwrap();
    engine.handle_event(Player::TOP, Event::Move(Direction::Down)).unwrap();
    assert_eq!(engine.state().position(Player::TOP), Coordinate::new(1, 2));
    assert_eq!(engine.state().score(Player::TOP), 0);

    engine.handle_event(Player::TOP, Event::Move(Direction::Right)).unwrap();
    assert_eq!(engine.state().score(Player::TOP), 0);
}
