//! Player actions and their history records.
//!
//! Events are the only unit of state mutation and the unit of replay. The
//! wire form is an adjacently tagged object:
//!
//! ```json
//! {"eventKind": "move", "payload": "up"}
//! {"eventKind": "placeBarrier", "payload": {"position": {"x": 1, "y": 1}, "vertical": true}}
//! {"eventKind": "changeTurn"}
//! ```

use serde::{Deserialize, Serialize};

use super::barrier::BarrierPosition;
use super::geometry::Direction;
use super::player::Player;

/// One player action.
///
/// Turn advancement is its own event: moves and placements never pass the
/// turn on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "eventKind", content = "payload", rename_all = "camelCase")]
pub enum Event {
    /// Step the acting player's token one cell.
    Move(Direction),
    /// Place a wall segment.
    PlaceBarrier(BarrierPosition),
    /// Hand the turn to the next seated player.
    ChangeTurn,
}

impl Event {
    /// The event's discriminant.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Event::Move(_) => EventKind::Move,
            Event::PlaceBarrier(_) => EventKind::PlaceBarrier,
            Event::ChangeTurn => EventKind::ChangeTurn,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Move(direction) => write!(f, "Move {}", direction),
            Event::PlaceBarrier(position) => write!(f, "PlaceBarrier {}", position),
            Event::ChangeTurn => f.write_str("Change turn"),
        }
    }
}

/// Discriminant of an [`Event`], matching the wire `eventKind` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    /// [`Event::Move`].
    Move,
    /// [`Event::PlaceBarrier`].
    PlaceBarrier,
    /// [`Event::ChangeTurn`].
    ChangeTurn,
}

/// An accepted event with its position in the match history.
///
/// Used for:
/// - Replay on a fresh engine
/// - Resynchronising disconnected clients
/// - Debug logging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Zero-based position in the history.
    pub sequence: u64,

    /// The player who issued the event.
    pub player: Player,

    /// The event itself.
    pub event: Event,
}

impl HistoryEntry {
    /// Create a new history entry.
    #[must_use]
    pub const fn new(sequence: u64, player: Player, event: Event) -> Self {
        Self {
            sequence,
            player,
            event,
        }
    }
}
