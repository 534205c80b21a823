//! Game state: the authoritative per-match snapshot.
//!
//! `GameState` owns every rule that mutates a match:
//! - Token movement with bounds and barrier checks
//! - Barrier placement with stock, bounds and overlap checks
//! - Turn rotation around the seated sides
//! - Win detection, scoring and the round reset that follows
//!
//! Every mutator validates first and mutates only once all checks pass, so a
//! failed call leaves the state untouched.
//!
//! Uses `im` persistent vectors so snapshots handed to observers and callers
//! clone in O(1).

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::barrier::BarrierPosition;
use super::config::MatchConfig;
use super::error::{ConfigError, IllegalMove, InvariantViolation};
use super::geometry::{Coordinate, Direction};
use super::path::has_path_to_goal;
use super::player::{seat_stride, Player, PlayerMap, Side, MAX_PLAYERS};

/// What an accepted move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The token stepped onto this cell.
    Stepped(Coordinate),
    /// The step reached the goal edge: the player scored and the round reset.
    Won,
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    config: MatchConfig,

    /// Player whose events are accepted.
    turn: Player,

    /// Rounds won per player.
    score: PlayerMap<u32>,

    /// Barriers each player may still place.
    barrier_stock: PlayerMap<u32>,

    /// Every barrier on the board, in placement order.
    placed_barriers: Vector<BarrierPosition>,

    /// Cells visited this round. Empty means the token is on its start cell.
    position_history: PlayerMap<Vector<Coordinate>>,
}

impl GameState {
    /// Create the initial state for a match.
    ///
    /// ## Defaults
    ///
    /// - `turn`: the top player
    /// - `score`: 0 for everyone
    /// - `barrier_stock`: [`MatchConfig::barrier_stock`] for everyone
    /// - every token on its start cell
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
        let players = config.player_count;

        Self {
            config,
            turn: Player::new(Side::Top),
            score: PlayerMap::with_value(players, 0),
            barrier_stock: PlayerMap::with_value(players, config.barrier_stock()),
            placed_barriers: Vector::new(),
            position_history: PlayerMap::with_default(players),
        }
    }

    // === Accessors ===

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Side length of the board.
    #[must_use]
    pub fn board_size(&self) -> u16 {
        self.config.board_size
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    /// Iterate over the seated players in rotation order.
    pub fn players(&self) -> impl Iterator<Item = Player> {
        Player::seated(self.player_count())
    }

    /// Player whose events are currently accepted.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Rounds won by `player`.
    ///
    /// # Panics
    ///
    /// If `player` has no seat in this match.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.score[player]
    }

    /// Rounds won by every seated player.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.score
    }

    /// Barriers `player` may still place.
    ///
    /// # Panics
    ///
    /// If `player` has no seat in this match.
    #[must_use]
    pub fn barrier_stock(&self, player: Player) -> u32 {
        self.barrier_stock[player]
    }

    /// Remaining barriers for every seated player.
    #[must_use]
    pub fn barrier_stocks(&self) -> &PlayerMap<u32> {
        &self.barrier_stock
    }

    /// Every barrier on the board, in placement order.
    #[must_use]
    pub fn placed_barriers(&self) -> &Vector<BarrierPosition> {
        &self.placed_barriers
    }

    /// Cells `player` has visited this round.
    ///
    /// # Panics
    ///
    /// If `player` has no seat in this match.
    #[must_use]
    pub fn position_history(&self, player: Player) -> &Vector<Coordinate> {
        &self.position_history[player]
    }

    /// Cell `player`'s token currently occupies.
    ///
    /// # Panics
    ///
    /// If `player` has no seat in this match.
    #[must_use]
    pub fn position(&self, player: Player) -> Coordinate {
        self.position_history[player]
            .last()
            .copied()
            .unwrap_or_else(|| player.start_coordinate(self.board_size()))
    }

    // === Movement ===

    /// First placed barrier lying across the step from `from` in `direction`.
    #[must_use]
    pub fn blocker(&self, from: Coordinate, direction: Direction) -> Option<BarrierPosition> {
        let to = from.translate(direction);
        self.placed_barriers
            .iter()
            .find(|barrier| barrier.blocks_movement(from, to, direction))
            .copied()
    }

    /// Validate a move without applying it.
    ///
    /// # Panics
    ///
    /// If `player` has no seat in this match.
    pub fn check_move(&self, player: Player, direction: Direction) -> Result<MoveOutcome, IllegalMove> {
        let from = self.position(player);
        let target = from.translate(direction);

        if !target.in_bounds(self.board_size()) {
            return Err(IllegalMove::OutOfBounds { from, direction });
        }
        if let Some(barrier) = self.blocker(from, direction) {
            return Err(IllegalMove::Blocked {
                from,
                direction,
                barrier,
            });
        }

        if direction == player.goal_direction() && player.on_goal_edge(target, self.board_size()) {
            Ok(MoveOutcome::Won)
        } else {
            Ok(MoveOutcome::Stepped(target))
        }
    }

    /// Move `player`'s token one cell.
    ///
    /// A step onto the goal edge scores a win and resets the round instead
    /// of recording the target cell.
    pub(crate) fn apply_move(&mut self, player: Player, direction: Direction) -> Result<MoveOutcome, IllegalMove> {
        let outcome = self.check_move(player, direction)?;

        match outcome {
            MoveOutcome::Stepped(target) => self.position_history[player].push_back(target),
            MoveOutcome::Won => self.resolve_win(player),
        }

        Ok(outcome)
    }

    // === Barriers ===

    /// Validate a placement without applying it.
    ///
    /// # Panics
    ///
    /// If `player` has no seat in this match.
    pub fn check_place_barrier(&self, player: Player, barrier: BarrierPosition) -> Result<(), IllegalMove> {
        if !barrier.in_bounds(self.board_size()) {
            return Err(IllegalMove::BarrierOutOfBounds(barrier));
        }

        for existing in self.placed_barriers.iter().copied() {
            if existing == barrier {
                return Err(IllegalMove::DuplicateBarrier(barrier));
            }
            if existing.overlaps(&barrier) {
                return Err(IllegalMove::OverlappingBarrier {
                    requested: barrier,
                    existing,
                });
            }
            if existing.crosses(&barrier) {
                return Err(IllegalMove::CrossingBarrier {
                    requested: barrier,
                    existing,
                });
            }
        }

        if self.barrier_stock[player] == 0 {
            return Err(IllegalMove::NoBarriersLeft(player));
        }

        if self.config.enforce_open_paths {
            if let Some(sealed) = self.player_sealed_by(&barrier) {
                return Err(IllegalMove::SealsPath {
                    barrier,
                    player: sealed,
                });
            }
        }

        Ok(())
    }

    /// Place a barrier on behalf of `player`, spending one from their stock.
    pub(crate) fn apply_place_barrier(&mut self, player: Player, barrier: BarrierPosition) -> Result<(), IllegalMove> {
        self.check_place_barrier(player, barrier)?;

        self.barrier_stock[player] -= 1;
        self.placed_barriers.push_back(barrier);
        Ok(())
    }

    /// First seated player who would lose every path to their goal if
    /// `candidate` were placed.
    ///
    /// Both the current cell and the start cell are checked, since a win
    /// sends every token back to its start.
    fn player_sealed_by(&self, candidate: &BarrierPosition) -> Option<Player> {
        let blocked = |cell: Coordinate, direction: Direction| {
            let next = cell.translate(direction);
            candidate.blocks_movement(cell, next, direction)
                || self
                    .placed_barriers
                    .iter()
                    .any(|barrier| barrier.blocks_movement(cell, next, direction))
        };
        let n = self.board_size();

        self.players().find(|&player| {
            let current = self.position(player);
            let start = player.start_coordinate(n);
            !has_path_to_goal(n, player, current, &blocked)
                || (start != current && !has_path_to_goal(n, player, start, &blocked))
        })
    }

    // === Turn & win lifecycle ===

    /// Player who acts after `player` in the rotation.
    #[must_use]
    pub fn next_player(&self, player: Player) -> Player {
        let next = (player.side().index() + seat_stride(self.player_count())) % MAX_PLAYERS;
        match Side::from_index(next) {
            Some(side) => Player::new(side),
            None => unreachable!("turn rotation landed outside the board"),
        }
    }

    /// Hand the turn to the next seated player.
    pub(crate) fn advance_turn(&mut self) {
        self.turn = self.next_player(self.turn);
    }

    /// Score a round for `winner` and start the next one.
    ///
    /// Resets the turn to the top player, sends every token back to its
    /// start and refills every barrier stock. Placed barriers stay.
    pub(crate) fn resolve_win(&mut self, winner: Player) {
        self.score[winner] += 1;
        info!(winner = %winner, score = self.score[winner], "round won");

        self.turn = Player::new(Side::Top);
        let stock = self.config.barrier_stock();
        for (_, visited) in self.position_history.iter_mut() {
            visited.clear();
        }
        for (_, remaining) in self.barrier_stock.iter_mut() {
            *remaining = stock;
        }
    }

    // === Invariants ===

    /// Verify the structural invariants of the state.
    ///
    /// - the turn belongs to a seated player
    /// - no stock exceeds the configured stock
    /// - no barrier is placed twice, and every barrier fits on the board
    /// - every visited cell lies on the board
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let n = self.board_size();

        if !self.turn.is_seated(self.player_count()) {
            return Err(InvariantViolation(format!("{} holds the turn without a seat", self.turn)));
        }

        let stock = self.config.barrier_stock();
        if let Some((player, remaining)) = self.barrier_stock.iter().find(|(_, remaining)| **remaining > stock) {
            return Err(InvariantViolation(format!(
                "{} holds {} barriers, more than the stock of {}",
                player, remaining, stock
            )));
        }

        let mut seen = FxHashSet::default();
        for barrier in self.placed_barriers.iter() {
            if !seen.insert(*barrier) {
                return Err(InvariantViolation(format!("barrier at {} placed twice", barrier)));
            }
            if !barrier.in_bounds(n) {
                return Err(InvariantViolation(format!("barrier at {} is off the board", barrier)));
            }
        }

        for (player, visited) in self.position_history.iter() {
            if let Some(cell) = visited.iter().find(|cell| !cell.in_bounds(n)) {
                return Err(InvariantViolation(format!("{} visited off-board cell {}", player, cell)));
            }
        }

        Ok(())
    }
}
