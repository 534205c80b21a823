//! Error types for match construction, event handling and replay.

use thiserror::Error;

use super::barrier::BarrierPosition;
use super::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use super::geometry::{Coordinate, Direction};
use super::player::Player;

/// Errors that can occur while handling an event.
///
/// Both kinds are expected during play. State is unchanged whenever one is
/// returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The acting player does not hold the turn.
    #[error("{actual} acted during the turn of {expected}")]
    NotTurn {
        /// Player who holds the turn.
        expected: Player,
        /// Player who tried to act.
        actual: Player,
    },

    /// The event breaks a movement or placement rule.
    #[error("Illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),
}

impl GameError {
    /// Check whether this is a turn-ownership failure.
    #[must_use]
    pub const fn is_not_turn(&self) -> bool {
        matches!(self, GameError::NotTurn { .. })
    }

    /// Check whether this is a rule violation.
    #[must_use]
    pub const fn is_illegal_move(&self) -> bool {
        matches!(self, GameError::IllegalMove(_))
    }
}

/// Why a move or placement was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// The step leaves the board.
    #[error("moving {direction} from {from} leaves the board")]
    OutOfBounds {
        /// Token position before the step.
        from: Coordinate,
        /// Requested direction.
        direction: Direction,
    },

    /// A placed barrier lies across the step.
    #[error("moving {direction} from {from} is blocked by barrier at {barrier}")]
    Blocked {
        /// Token position before the step.
        from: Coordinate,
        /// Requested direction.
        direction: Direction,
        /// First barrier found across the step.
        barrier: BarrierPosition,
    },

    /// The exact position is already taken.
    #[error("barrier at {0} is already placed")]
    DuplicateBarrier(BarrierPosition),

    /// The footprint shares a half with a barrier on the same line.
    #[error("barrier at {requested} overlaps barrier at {existing}")]
    OverlappingBarrier {
        /// Rejected position.
        requested: BarrierPosition,
        /// Barrier already on the board.
        existing: BarrierPosition,
    },

    /// The barrier crosses another one at its midpoint.
    #[error("barrier at {requested} crosses barrier at {existing}")]
    CrossingBarrier {
        /// Rejected position.
        requested: BarrierPosition,
        /// Barrier already on the board.
        existing: BarrierPosition,
    },

    /// Anchor or second footprint cell lies off the board.
    #[error("barrier at {0} does not fit on the board")]
    BarrierOutOfBounds(BarrierPosition),

    /// The player has no barriers left.
    #[error("{0} has no barriers left")]
    NoBarriersLeft(Player),

    /// The placement would cut a player off from their goal edge.
    #[error("barrier at {barrier} leaves {player} without a path to their goal")]
    SealsPath {
        /// Rejected position.
        barrier: BarrierPosition,
        /// First player found without a path.
        player: Player,
    },
}

/// Errors that can occur while building a match configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size outside the supported range.
    #[error("board size {0} is outside {}..={}", MIN_BOARD_SIZE, MAX_BOARD_SIZE)]
    BoardSize(u16),

    /// Player count other than 2 or 4.
    #[error("a match needs 2 or 4 players, got {0}")]
    PlayerCount(usize),
}

/// A broken state invariant. Signals a logic fault in the engine, never a
/// bad event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invariant violated: {0}")]
pub struct InvariantViolation(pub String);

/// Errors that can occur while rebuilding a match from its history.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReplayError {
    /// An entry was refused by the fresh engine.
    #[error("entry {index} was rejected: {source}")]
    Rejected {
        /// Position of the entry in the replayed slice.
        index: usize,
        /// Error returned by the engine.
        source: GameError,
    },

    /// Sequence numbers are not contiguous from zero.
    #[error("entry {index} carries sequence {found}, expected {index}")]
    OutOfOrder {
        /// Position of the entry in the replayed slice.
        index: usize,
        /// Sequence number found on the entry.
        found: u64,
    },

    /// The match configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
