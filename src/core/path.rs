//! Goal reachability over the barrier graph.
//!
//! Cells are nodes; a step between orthogonal neighbours is an edge unless a
//! barrier lies across it. Tokens never block each other, so they are not
//! part of the graph.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::geometry::{Coordinate, Direction};
use super::player::Player;

/// Cells reachable in one unblocked step from `cell`.
///
/// `blocked(cell, direction)` reports whether a barrier lies across the step.
pub fn open_neighbours(
    cell: Coordinate,
    board_size: u16,
    blocked: impl Fn(Coordinate, Direction) -> bool,
) -> SmallVec<[Coordinate; 4]> {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| {
            let next = cell.translate(direction);
            (next.in_bounds(board_size) && !blocked(cell, direction)).then_some(next)
        })
        .collect()
}

/// Fewest steps from `from` to any cell on `player`'s goal edge.
///
/// Returns `None` when barriers seal the goal edge off.
///
/// ```
/// use quoridor_engine::core::{distance_to_goal, Coordinate, Player};
///
/// let steps = distance_to_goal(9, Player::TOP, Coordinate::new(5, 9), |_, _| false);
/// assert_eq!(steps, Some(8));
/// ```
pub fn distance_to_goal(
    board_size: u16,
    player: Player,
    from: Coordinate,
    blocked: impl Fn(Coordinate, Direction) -> bool,
) -> Option<u32> {
    if player.on_goal_edge(from, board_size) {
        return Some(0);
    }

    let mut visited = FxHashSet::default();
    let mut frontier = VecDeque::new();
    visited.insert(from);
    frontier.push_back((from, 0u32));

    while let Some((cell, steps)) = frontier.pop_front() {
        for next in open_neighbours(cell, board_size, &blocked) {
            if !visited.insert(next) {
                continue;
            }
            if player.on_goal_edge(next, board_size) {
                return Some(steps + 1);
            }
            frontier.push_back((next, steps + 1));
        }
    }

    None
}

/// Check whether `player` can still reach their goal edge from `from`.
pub fn has_path_to_goal(
    board_size: u16,
    player: Player,
    from: Coordinate,
    blocked: impl Fn(Coordinate, Direction) -> bool,
) -> bool {
    distance_to_goal(board_size, player, from, blocked).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BarrierPosition;

    fn blocked_by(barriers: &[BarrierPosition]) -> impl Fn(Coordinate, Direction) -> bool + '_ {
        move |cell, direction| {
            let next = cell.translate(direction);
            barriers.iter().any(|b| b.blocks_movement(cell, next, direction))
        }
    }

    #[test]
    fn test_open_neighbours_in_corner() {
        let cells = open_neighbours(Coordinate::new(1, 1), 9, |_, _| false);
        assert_eq!(cells.len(), 2);
        assert!(cells.contains(&Coordinate::new(2, 1)));
        assert!(cells.contains(&Coordinate::new(1, 2)));
    }

    #[test]
    fn test_open_neighbours_respects_barrier() {
        let barriers = [BarrierPosition::horizontal(1, 1)];
        let cells = open_neighbours(Coordinate::new(1, 1), 9, blocked_by(&barriers));
        assert_eq!(cells.as_slice(), &[Coordinate::new(2, 1)]);
    }

    #[test]
    fn test_straight_distance() {
        for player in Player::seated(4) {
            let start = player.start_coordinate(9);
            assert_eq!(distance_to_goal(9, player, start, |_, _| false), Some(8));
        }
    }

    #[test]
    fn test_detour_around_barrier() {
        // Wall above (5,1) and (6,1): bottom must sidestep once.
        let barriers = [BarrierPosition::horizontal(5, 1)];
        let steps = distance_to_goal(9, Player::BOTTOM, Coordinate::new(5, 1), blocked_by(&barriers));
        assert_eq!(steps, Some(9));
    }

    #[test]
    fn test_sealed_row() {
        // Horizontal walls above every cell of row 1 on a 4x4 board.
        let barriers = [BarrierPosition::horizontal(1, 1), BarrierPosition::horizontal(3, 1)];
        let from = Coordinate::new(2, 1);

        assert!(!has_path_to_goal(4, Player::BOTTOM, from, blocked_by(&barriers)));
        assert!(!has_path_to_goal(4, Player::TOP, Coordinate::new(2, 4), blocked_by(&barriers)));
        assert!(has_path_to_goal(4, Player::RIGHT, Coordinate::new(4, 2), blocked_by(&barriers)));
    }

    #[test]
    fn test_already_on_goal_edge() {
        assert_eq!(distance_to_goal(9, Player::TOP, Coordinate::new(3, 1), |_, _| false), Some(0));
    }
}
