//! Match configuration.
//!
//! A match is fixed at construction by its board size and player count.
//! Optional knobs cover the barrier stock and the open-path rule. The
//! config travels inside [`GameState`](super::GameState), so a history plus
//! its config is enough to rebuild a match.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Board size of a standard match.
pub const STANDARD_BOARD_SIZE: u16 = 9;

/// Smallest supported board.
pub const MIN_BOARD_SIZE: u16 = 2;

/// Largest supported board.
pub const MAX_BOARD_SIZE: u16 = 255;

/// Complete match configuration.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::MatchConfig;
///
/// let config = MatchConfig::new(9, 4).with_barrier_stock(5).with_open_paths(true);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.barrier_stock(), 5);
/// assert!(config.enforce_open_paths);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Side length `N` of the `N x N` board.
    pub board_size: u16,

    /// Number of seated players (2 or 4).
    pub player_count: usize,

    /// Barriers each player may place. `None` means one per board row.
    pub barrier_stock: Option<u32>,

    /// Refuse placements that leave a player without a path to their goal.
    pub enforce_open_paths: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: STANDARD_BOARD_SIZE,
            player_count: 2,
            barrier_stock: None,
            enforce_open_paths: false,
        }
    }
}

impl MatchConfig {
    /// Create a configuration. Call [`MatchConfig::validate`] before use;
    /// engine constructors do this for you.
    #[must_use]
    pub fn new(board_size: u16, player_count: usize) -> Self {
        Self {
            board_size,
            player_count,
            ..Self::default()
        }
    }

    /// Override the per-player barrier stock.
    #[must_use]
    pub fn with_barrier_stock(mut self, stock: u32) -> Self {
        self.barrier_stock = Some(stock);
        self
    }

    /// Enable or disable the open-path rule.
    #[must_use]
    pub fn with_open_paths(mut self, enforce: bool) -> Self {
        self.enforce_open_paths = enforce;
        self
    }

    /// Barriers each player starts with and returns to after a win.
    #[must_use]
    pub fn barrier_stock(&self) -> u32 {
        self.barrier_stock.unwrap_or(u32::from(self.board_size))
    }

    /// Check the configuration against the supported domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if !matches!(self.player_count, 2 | 4) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        let config = MatchConfig::default();

        assert_eq!(config.board_size, 9);
        assert_eq!(config.player_count, 2);
        assert_eq!(config.barrier_stock(), 9);
        assert!(!config.enforce_open_paths);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_stock_follows_board_size() {
        assert_eq!(MatchConfig::new(5, 2).barrier_stock(), 5);
        assert_eq!(MatchConfig::new(5, 2).with_barrier_stock(2).barrier_stock(), 2);
    }

    #[test]
    fn test_rejects_bad_player_counts() {
        for count in [0, 1, 3, 5] {
            assert_eq!(
                MatchConfig::new(9, count).validate(),
                Err(ConfigError::PlayerCount(count))
            );
        }
    }

    #[test]
    fn test_rejects_bad_board_sizes() {
        assert_eq!(MatchConfig::new(0, 2).validate(), Err(ConfigError::BoardSize(0)));
        assert_eq!(MatchConfig::new(1, 2).validate(), Err(ConfigError::BoardSize(1)));
        assert_eq!(MatchConfig::new(256, 2).validate(), Err(ConfigError::BoardSize(256)));
        assert!(MatchConfig::new(2, 4).validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = MatchConfig::new(7, 4).with_open_paths(true);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
