//! Core match types: geometry, players, barriers, events, state, path
//! finding, RNG and configuration.
//!
//! Everything that defines what a match *is* lives here. The `rules` module
//! drives it; nothing in `core` checks turn ownership.

pub mod barrier;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod path;
pub mod player;
pub mod rng;
pub mod state;

pub use barrier::{BarrierPosition, Orientation};
pub use config::{MatchConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE, STANDARD_BOARD_SIZE};
pub use error::{ConfigError, GameError, IllegalMove, InvariantViolation, ReplayError};
pub use event::{Event, EventKind, HistoryEntry};
pub use geometry::{Axis, Coordinate, Direction};
pub use path::{distance_to_goal, has_path_to_goal, open_neighbours};
pub use player::{seat_stride, Player, PlayerMap, Side, MAX_PLAYERS};
pub use rng::GameRng;
pub use state::{GameState, MoveOutcome};
