//! Seeded random playouts.
//!
//! Each turn the acting player either places a random legal barrier or
//! takes a random legal step, then passes the turn. The same config and
//! seed always produce the same history, which makes playouts useful as
//! replay fixtures and benchmark workloads.

use tracing::debug;

use crate::core::{ConfigError, Event, GameError, GameRng, MatchConfig};
use crate::rules::{legal_barriers, legal_moves, GameEngine};

/// Default cap on recorded events.
pub const DEFAULT_MAX_EVENTS: usize = 512;

/// Configuration for a random playout.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::MatchConfig;
/// use quoridor_engine::replay::{replay, RandomPlayout};
///
/// let playout = RandomPlayout::new(MatchConfig::new(5, 4), 42).unwrap().with_max_events(100);
/// let engine = playout.run().unwrap();
///
/// let rebuilt = replay(*engine.state().config(), engine.history()).unwrap();
/// assert_eq!(rebuilt.state(), engine.state());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomPlayout {
    config: MatchConfig,
    seed: u64,
    max_events: usize,
    barrier_probability: f64,
    max_wins: Option<u32>,
}

impl RandomPlayout {
    /// Create a playout for `config`, seeded with `seed`.
    pub fn new(config: MatchConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            seed,
            max_events: DEFAULT_MAX_EVENTS,
            barrier_probability: 0.2,
            max_wins: None,
        })
    }

    /// Stop once this many events are recorded.
    #[must_use]
    pub fn with_max_events(mut self, max_events: usize) -> Self {
        self.max_events = max_events;
        self
    }

    /// Chance of placing a barrier instead of moving, clamped to `0..=1`.
    #[must_use]
    pub fn with_barrier_probability(mut self, probability: f64) -> Self {
        self.barrier_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Stop once this many rounds have been won in total.
    #[must_use]
    pub fn with_max_wins(mut self, wins: u32) -> Self {
        self.max_wins = Some(wins);
        self
    }

    /// Play the match and return the engine holding its history.
    ///
    /// Only listed legal events are issued, so an error here means the
    /// listing and the engine disagree.
    pub fn run(&self) -> Result<GameEngine, GameError> {
        let mut engine = GameEngine::from_valid_config(self.config);
        let mut rng = GameRng::new(self.seed);

        while engine.history().len() < self.max_events && !self.wins_reached(&engine) {
            let player = engine.state().turn();
            let wins_before = total_wins(&engine);

            if let Some(event) = self.pick_action(&engine, &mut rng) {
                engine.handle_event(player, event)?;
                if engine.history().len() >= self.max_events {
                    break;
                }
            }
            // A win already handed the turn back to the top player.
            if total_wins(&engine) == wins_before {
                engine.handle_event(player, Event::ChangeTurn)?;
            }
        }

        debug!(
            seed = self.seed,
            events = engine.history().len(),
            "playout finished"
        );
        Ok(engine)
    }

    fn pick_action(&self, engine: &GameEngine, rng: &mut GameRng) -> Option<Event> {
        let state = engine.state();
        let player = state.turn();

        if rng.gen_bool(self.barrier_probability) {
            let barriers: Vec<_> = legal_barriers(state, player).collect();
            if let Some(barrier) = rng.choose(&barriers) {
                return Some(Event::PlaceBarrier(*barrier));
            }
        }

        let moves: Vec<_> = legal_moves(state, player).collect();
        rng.choose(&moves).copied().map(Event::Move)
    }

    fn wins_reached(&self, engine: &GameEngine) -> bool {
        self.max_wins.map_or(false, |limit| total_wins(engine) >= limit)
    }
}

fn total_wins(engine: &GameEngine) -> u32 {
    engine.state().scores().values().sum()
}
