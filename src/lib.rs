//! # quoridor-engine
//!
//! Rules engine for Quoridor-style pursuit-and-blockade board games.
//!
//! Two or four players race their tokens across an `N x N` board towards
//! the opposite edge while placing two-cell barriers to slow each other
//! down. Reaching the goal edge scores a round and resets the tokens.
//!
//! ## Design Principles
//!
//! 1. **Events Only**: every mutation is a `move`, `placeBarrier` or
//!    `changeTurn` event issued through [`GameEngine::handle_event`].
//!
//! 2. **Validate, Then Mutate**: a refused event returns an error and
//!    leaves the match exactly as it was.
//!
//! 3. **Replayable**: accepted events form a numbered history. The config
//!    plus the history rebuild an identical match.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning of state and history via
//!   `im-rs`, so observers and clients get cheap snapshots.
//!
//! - **Explicit Turns**: moves and placements never pass the turn; the
//!   acting player ends it with `changeTurn`.
//!
//! ## Modules
//!
//! - `core`: geometry, players, barriers, events, state, path finding, errors, RNG, configuration
//! - `rules`: event dispatch, legal event listing
//! - `replay`: history, match reconstruction, seeded random playouts
//!
//! ## Example
//!
//! ```
//! use quoridor_engine::{Direction, Event, GameEngine, Player};
//!
//! let mut engine = GameEngine::standard();
//!
//! for _ in 0..8 {
//!     engine.handle_event(Player::TOP, Event::Move(Direction::Down)).unwrap();
//! }
//!
//! assert_eq!(engine.state().score(Player::TOP), 1);
//! assert_eq!(engine.state().score(Player::BOTTOM), 0);
//! ```

pub mod core;
pub mod replay;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BarrierPosition, Coordinate, Direction, Orientation,
    Player, PlayerMap, Side,
    Event, EventKind, HistoryEntry,
    MatchConfig, GameState, MoveOutcome, GameRng,
    GameError, IllegalMove, ConfigError, ReplayError,
};

pub use crate::rules::{legal_events, EventObserver, GameEngine};

pub use crate::replay::{replay, History, RandomPlayout};
