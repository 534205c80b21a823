//! Event dispatch for a running match.
//!
//! `GameEngine` is the only entry point that mutates a match:
//! - Checks turn ownership
//! - Hands the event to the matching [`GameState`] rule
//! - Appends accepted events to the [`History`]
//! - Notifies an optional [`EventObserver`]
//!
//! A refused event returns an error and leaves state, history and observer
//! untouched.

use tracing::{debug, instrument, warn};

use crate::core::{ConfigError, Event, GameError, GameState, MatchConfig, Player};
use crate::replay::History;

/// Hook called after every accepted event.
///
/// Any `FnMut(Player, &Event, &GameState)` closure is an observer.
pub trait EventObserver {
    /// Called with the acting player, the accepted event and the state it
    /// produced.
    fn on_event(&mut self, player: Player, event: &Event, state: &GameState);
}

impl<F> EventObserver for F
where
    F: FnMut(Player, &Event, &GameState),
{
    fn on_event(&mut self, player: Player, event: &Event, state: &GameState) {
        self(player, event, state);
    }
}

/// Orchestrator for one match.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::{Direction, Event, Player};
/// use quoridor_engine::rules::GameEngine;
///
/// let mut engine = GameEngine::standard();
///
/// engine.handle_event(Player::TOP, Event::Move(Direction::Down)).unwrap();
/// assert!(engine.handle_event(Player::BOTTOM, Event::ChangeTurn).is_err());
///
/// engine.handle_event(Player::TOP, Event::ChangeTurn).unwrap();
/// assert_eq!(engine.state().turn(), Player::BOTTOM);
/// ```
pub struct GameEngine {
    state: GameState,
    history: History,
    observer: Option<Box<dyn EventObserver>>,
}

impl GameEngine {
    /// Create an engine for a fresh match.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Two players on a 9x9 board.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_valid_config(MatchConfig::default())
    }

    pub(crate) fn from_valid_config(config: MatchConfig) -> Self {
        Self {
            state: GameState::from_valid_config(config),
            history: History::new(),
            observer: None,
        }
    }

    /// Attach an observer, replacing any previous one.
    #[must_use]
    pub fn with_observer(mut self, observer: impl EventObserver + 'static) -> Self {
        self.set_observer(observer);
        self
    }

    /// Attach an observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl EventObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Detach the observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Every accepted event so far.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Apply `event` on behalf of `player`.
    ///
    /// Returns the resulting state on success. On failure nothing changes.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, player: Player, event: Event) -> Result<&GameState, GameError> {
        if let Err(err) = self.dispatch(player, event) {
            debug!(error = %err, "event rejected");
            return Err(err);
        }

        let entry = self.history.push(player, event);
        debug!(sequence = entry.sequence, "event accepted");

        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(player, &event, &self.state);
        }

        if cfg!(debug_assertions) {
            if let Err(violation) = self.state.check_invariants() {
                warn!(%violation, "state invariant broken");
                debug_assert!(false, "{}", violation);
            }
        }

        Ok(&self.state)
    }

    fn dispatch(&mut self, player: Player, event: Event) -> Result<(), GameError> {
        let expected = self.state.turn();
        if player != expected {
            return Err(GameError::NotTurn {
                expected,
                actual: player,
            });
        }

        match event {
            Event::Move(direction) => {
                self.state.apply_move(player, direction)?;
            }
            Event::PlaceBarrier(barrier) => self.state.apply_place_barrier(player, barrier)?,
            Event::ChangeTurn => self.state.advance_turn(),
        }
        Ok(())
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("history", &self.history.len())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
