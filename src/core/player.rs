//! Sides, players and per-player data storage.
//!
//! ## Side
//!
//! The four board edges. A player's side fixes their start cell and the
//! direction that counts as progress.
//!
//! ## Player
//!
//! A player is identified by their side alone, so at most four players can
//! exist. Seats are handed out around the board with a stride of
//! `4 / player_count`: a 2-player match seats `top` and `bottom`, a 4-player
//! match seats every side.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a `Vec` with one slot per seat for O(1) access.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::{Index, IndexMut};

use super::geometry::{Coordinate, Direction};

/// Number of board sides, and therefore the maximum number of players.
pub const MAX_PLAYERS: usize = 4;

/// One of the four board edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Upper edge, `y = N`. First to act.
    Top = 0,
    /// Right edge, `x = N`.
    Right = 1,
    /// Lower edge, `y = 1`.
    Bottom = 2,
    /// Left edge, `x = 1`.
    Left = 3,
}

impl Side {
    /// All sides in rotation order.
    pub const ALL: [Side; MAX_PLAYERS] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Position of this side in the rotation (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Side at rotation index `index`, if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Side::Top),
            1 => Some(Side::Right),
            2 => Some(Side::Bottom),
            3 => Some(Side::Left),
            _ => None,
        }
    }

    /// Direction that moves a token on this side towards its goal edge.
    #[must_use]
    pub const fn goal_direction(self) -> Direction {
        match self {
            Side::Top => Direction::Down,
            Side::Right => Direction::Left,
            Side::Bottom => Direction::Up,
            Side::Left => Direction::Right,
        }
    }
}

/// Seat stride for a match of `player_count` players.
///
/// ```
/// use quoridor_engine::core::seat_stride;
///
/// assert_eq!(seat_stride(2), 2);
/// assert_eq!(seat_stride(4), 1);
/// ```
#[must_use]
pub const fn seat_stride(player_count: usize) -> usize {
    MAX_PLAYERS / player_count
}

/// A participant, identified by their side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Player {
    side: Side,
}

impl Player {
    /// Player sitting at the `top` edge.
    pub const TOP: Player = Player::new(Side::Top);
    /// Player sitting at the `right` edge.
    pub const RIGHT: Player = Player::new(Side::Right);
    /// Player sitting at the `bottom` edge.
    pub const BOTTOM: Player = Player::new(Side::Bottom);
    /// Player sitting at the `left` edge.
    pub const LEFT: Player = Player::new(Side::Left);

    /// Create the player for `side`.
    #[must_use]
    pub const fn new(side: Side) -> Self {
        Self { side }
    }

    /// The player's side.
    #[must_use]
    pub const fn side(self) -> Side {
        self.side
    }

    /// Iterate over the players seated in a match of `player_count`.
    ///
    /// ```
    /// use quoridor_engine::core::{Player, Side};
    ///
    /// let seated: Vec<_> = Player::seated(2).map(Player::side).collect();
    /// assert_eq!(seated, vec![Side::Top, Side::Bottom]);
    /// ```
    pub fn seated(player_count: usize) -> impl Iterator<Item = Player> {
        Side::ALL
            .into_iter()
            .step_by(seat_stride(player_count))
            .map(Player::new)
    }

    /// Check whether this player has a seat in a match of `player_count`.
    #[must_use]
    pub const fn is_seated(self, player_count: usize) -> bool {
        self.side.index() % seat_stride(player_count) == 0
    }

    /// Cell the player's token occupies before their first move.
    ///
    /// Tokens start centred on their own edge; the centre of an even board
    /// rounds down.
    #[must_use]
    pub const fn start_coordinate(self, board_size: u16) -> Coordinate {
        let n = board_size as i32;
        let middle = (n + 1) / 2;
        match self.side {
            Side::Top => Coordinate::new(middle, n),
            Side::Right => Coordinate::new(n, middle),
            Side::Bottom => Coordinate::new(middle, 1),
            Side::Left => Coordinate::new(1, middle),
        }
    }

    /// Direction that counts as progress for this player.
    #[must_use]
    pub const fn goal_direction(self) -> Direction {
        self.side.goal_direction()
    }

    /// Check whether `cell` lies on the edge this player must reach.
    #[must_use]
    pub const fn on_goal_edge(self, cell: Coordinate, board_size: u16) -> bool {
        let n = board_size as i32;
        match self.side {
            Side::Top => cell.y == 1,
            Side::Right => cell.x == 1,
            Side::Bottom => cell.y == n,
            Side::Left => cell.x == n,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = match self.side {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        };
        write!(f, "Player {}", side)
    }
}

/// Per-player data storage with O(1) access.
///
/// Holds one entry per seated player. Indexing with a player who has no
/// seat in the match is a logic error and panics; use [`PlayerMap::get`]
/// when the player may be unseated.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::{Player, PlayerMap};
///
/// let mut stock: PlayerMap<u32> = PlayerMap::with_value(2, 9);
/// stock[Player::TOP] -= 1;
///
/// assert_eq!(stock[Player::TOP], 8);
/// assert_eq!(stock[Player::BOTTOM], 9);
/// assert!(stock.get(Player::LEFT).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlayerMap<T> {
    stride: usize,
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives each seated `Player` in rotation order.
    pub fn new(player_count: usize, factory: impl Fn(Player) -> T) -> Self {
        assert!(
            player_count > 0 && MAX_PLAYERS % player_count == 0,
            "Player count must divide {}",
            MAX_PLAYERS
        );

        Self {
            stride: seat_stride(player_count),
            data: Player::seated(player_count).map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    fn seat(&self, player: Player) -> Option<usize> {
        let index = player.side().index();
        (index % self.stride == 0).then_some(index / self.stride)
    }

    /// Get a player's data, or `None` if the player has no seat.
    #[must_use]
    pub fn get(&self, player: Player) -> Option<&T> {
        self.seat(player).map(|seat| &self.data[seat])
    }

    /// Get a player's data mutably, or `None` if the player has no seat.
    pub fn get_mut(&mut self, player: Player) -> Option<&mut T> {
        self.seat(player).map(move |seat| &mut self.data[seat])
    }

    /// Check whether `player` has a slot in this map.
    #[must_use]
    pub fn contains(&self, player: Player) -> bool {
        self.seat(player).is_some()
    }

    /// Iterate over (Player, &T) pairs in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        let stride = self.stride;
        self.data
            .iter()
            .enumerate()
            .map(move |(seat, v)| (seated_player(seat, stride), v))
    }

    /// Iterate over (Player, &mut T) pairs in rotation order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Player, &mut T)> {
        let stride = self.stride;
        self.data
            .iter_mut()
            .enumerate()
            .map(move |(seat, v)| (seated_player(seat, stride), v))
    }

    /// Iterate over all seated players.
    pub fn players(&self) -> impl Iterator<Item = Player> + '_ {
        (0..self.data.len()).map(move |seat| seated_player(seat, self.stride))
    }

    /// Iterate over the stored values.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

fn seated_player(seat: usize, stride: usize) -> Player {
    match Side::from_index(seat * stride) {
        Some(side) => Player::new(side),
        None => unreachable!("seat {} out of rotation", seat),
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        match self.get(player) {
            Some(value) => value,
            None => panic!("{} has no seat in this match", player),
        }
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        match self.get_mut(player) {
            Some(value) => value,
            None => panic!("{} has no seat in this match", player),
        }
    }
}

// Only the seat values go on the wire; the stride follows from their count.
impl<T: Serialize> Serialize for PlayerMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PlayerMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = Vec::<T>::deserialize(deserializer)?;
        if data.is_empty() || MAX_PLAYERS % data.len() != 0 {
            return Err(serde::de::Error::custom(format_args!(
                "player count must divide {}, got {}",
                MAX_PLAYERS,
                data.len()
            )));
        }
        Ok(Self {
            stride: seat_stride(data.len()),
            data,
        })
    }
}
