//! Enumeration of the events a player may issue.

use crate::core::{BarrierPosition, Coordinate, Direction, Event, GameState, Orientation, Player};

/// Every event `player` may issue in `state`.
///
/// Empty when `player` does not hold the turn. Otherwise `ChangeTurn`,
/// then each accepted move, then each accepted placement, in a fixed order.
///
/// ```
/// use quoridor_engine::core::{Event, GameState, Player};
/// use quoridor_engine::rules::legal_events;
///
/// let state = GameState::standard();
/// let events = legal_events(&state, Player::TOP);
///
/// assert_eq!(events[0], Event::ChangeTurn);
/// assert!(legal_events(&state, Player::BOTTOM).is_empty());
/// ```
pub fn legal_events(state: &GameState, player: Player) -> Vec<Event> {
    if state.turn() != player {
        return Vec::new();
    }

    let mut events = vec![Event::ChangeTurn];
    events.extend(legal_moves(state, player).map(Event::Move));
    events.extend(legal_barriers(state, player).map(Event::PlaceBarrier));
    events
}

/// Directions `player` may step in, ignoring turn ownership.
///
/// Empty for a player without a seat in this match.
pub fn legal_moves(state: &GameState, player: Player) -> impl Iterator<Item = Direction> + '_ {
    let seated = player.is_seated(state.player_count());

    Direction::ALL
        .into_iter()
        .filter(move |&direction| seated && state.check_move(player, direction).is_ok())
}

/// Barrier positions `player` may place, ignoring turn ownership.
///
/// Empty for a player without a seat in this match.
pub fn legal_barriers(state: &GameState, player: Player) -> impl Iterator<Item = BarrierPosition> + '_ {
    let n = i32::from(state.board_size());
    // Skip every per-anchor check when nothing can be placed.
    let can_place = player.is_seated(state.player_count()) && state.barrier_stock(player) > 0;

    (1..=n)
        .flat_map(move |y| (1..=n).map(move |x| Coordinate::new(x, y)))
        .flat_map(|anchor| {
            [Orientation::Horizontal, Orientation::Vertical]
                .into_iter()
                .map(move |orientation| BarrierPosition::new(anchor, orientation))
        })
        .filter(move |barrier| can_place && state.check_place_barrier(player, *barrier).is_ok())
}
