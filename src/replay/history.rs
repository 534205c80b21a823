//! Accepted-event log and match reconstruction.
//!
//! The log is an `im::Vector`, so snapshots for resync or debugging clone
//! in O(1) while the engine keeps appending.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Event, HistoryEntry, MatchConfig, Player, ReplayError};
use crate::rules::GameEngine;

/// Ordered log of accepted events.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vector<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted event, numbering it after the last entry.
    pub(crate) fn push(&mut self, player: Player, event: Event) -> HistoryEntry {
        let entry = HistoryEntry::new(self.entries.len() as u64, player, event);
        self.entries.push_back(entry);
        entry
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The underlying persistent vector.
    #[must_use]
    pub fn entries(&self) -> &Vector<HistoryEntry> {
        &self.entries
    }

    /// Entries from `sequence` onwards, for clients catching up.
    #[must_use]
    pub fn since(&self, sequence: u64) -> Vector<HistoryEntry> {
        let start = usize::try_from(sequence).unwrap_or(usize::MAX).min(self.entries.len());
        self.entries.clone().slice(start..)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = im::vector::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Rebuild a match by re-applying `entries` to a fresh engine.
///
/// Sequence numbers must run 0, 1, 2, ... in order. Fails on the first
/// entry the engine refuses.
///
/// ```
/// use quoridor_engine::core::{Direction, Event, MatchConfig, Player};
/// use quoridor_engine::replay::replay;
/// use quoridor_engine::rules::GameEngine;
///
/// let mut engine = GameEngine::standard();
/// engine.handle_event(Player::TOP, Event::Move(Direction::Down)).unwrap();
/// engine.handle_event(Player::TOP, Event::ChangeTurn).unwrap();
///
/// let rebuilt = replay(MatchConfig::default(), engine.history().iter()).unwrap();
/// assert_eq!(rebuilt.state(), engine.state());
/// ```
pub fn replay<'a>(
    config: MatchConfig,
    entries: impl IntoIterator<Item = &'a HistoryEntry>,
) -> Result<GameEngine, ReplayError> {
    let mut engine = GameEngine::new(config)?;

    for (index, entry) in entries.into_iter().enumerate() {
        if entry.sequence != index as u64 {
            return Err(ReplayError::OutOfOrder {
                index,
                found: entry.sequence,
            });
        }
        engine
            .handle_event(entry.player, entry.event)
            .map_err(|source| ReplayError::Rejected { index, source })?;
    }

    debug!(events = engine.history().len(), "replay complete");
    Ok(engine)
}
