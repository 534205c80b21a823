//! Board coordinates and directional translation.
//!
//! The board is an `N x N` grid of cells addressed 1-indexed: `(1, 1)` is the
//! bottom-left cell and `(N, N)` the top-right one. `up` increases `y`,
//! `right` increases `x`.
//!
//! Translation never checks bounds. Callers translate first and then ask
//! [`Coordinate::in_bounds`], which lets the rules decide what an off-board
//! target means. Steps saturate at the `i32` limits, so a cell at the edge of
//! the integer range stays put instead of wrapping back onto the board.

use serde::{Deserialize, Serialize};

/// A cell on the board.
///
/// ```
/// use quoridor_engine::core::{Coordinate, Direction};
///
/// let c = Coordinate::new(5, 1);
/// assert_eq!(c.translate(Direction::Up), Coordinate::new(5, 2));
/// assert!(!c.translate(Direction::Down).in_bounds(9));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column, 1-indexed.
    pub x: i32,
    /// Row, 1-indexed.
    pub y: i32,
}

impl Coordinate {
    /// Create a coordinate. No bounds are enforced.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One row up (`y + 1`).
    #[must_use]
    pub const fn up(self) -> Self {
        Self::new(self.x, self.y.saturating_add(1))
    }

    /// One row down (`y - 1`).
    #[must_use]
    pub const fn down(self) -> Self {
        Self::new(self.x, self.y.saturating_sub(1))
    }

    /// One column left (`x - 1`).
    #[must_use]
    pub const fn left(self) -> Self {
        Self::new(self.x.saturating_sub(1), self.y)
    }

    /// One column right (`x + 1`).
    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.x.saturating_add(1), self.y)
    }

    /// Translate one cell in `direction`.
    #[must_use]
    pub const fn translate(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => self.up(),
            Direction::Down => self.down(),
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    /// Check that both axes lie within `[1, board_size]`.
    #[must_use]
    pub const fn in_bounds(self, board_size: u16) -> bool {
        let n = board_size as i32;
        self.x >= 1 && self.x <= n && self.y >= 1 && self.y <= n
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Movement axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Movement along `x` (left/right).
    Horizontal,
    /// Movement along `y` (up/down).
    Vertical,
}

/// One of the four movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards higher `y`.
    Up,
    /// Towards lower `y`.
    Down,
    /// Towards lower `x`.
    Left,
    /// Towards higher `x`.
    Right,
}

impl Direction {
    /// All directions in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The axis this direction moves along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// True for `up` and `right`, the directions that increase an index.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Direction::Up | Direction::Right)
    }

    /// The reverse direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let c = Coordinate::new(3, 3);

        assert_eq!(c.translate(Direction::Up), Coordinate::new(3, 4));
        assert_eq!(c.translate(Direction::Down), Coordinate::new(3, 2));
        assert_eq!(c.translate(Direction::Left), Coordinate::new(2, 3));
        assert_eq!(c.translate(Direction::Right), Coordinate::new(4, 3));
    }

    #[test]
    fn test_translate_is_unchecked() {
        let corner = Coordinate::new(1, 1);
        let off = corner.translate(Direction::Left);

        assert_eq!(off, Coordinate::new(0, 1));
        assert!(!off.in_bounds(9));
    }

    #[test]
    fn test_translate_saturates_at_integer_limits() {
        let far = Coordinate::new(i32::MAX, i32::MIN);

        assert_eq!(far.right(), far);
        assert_eq!(far.down(), far);
        assert_eq!(far.up(), Coordinate::new(i32::MAX, i32::MIN + 1));
        assert!(!far.right().in_bounds(9));
        assert_eq!(Coordinate::new(i32::MIN, 1).left(), Coordinate::new(i32::MIN, 1));
    }

    #[test]
    fn test_in_bounds() {
        assert!(Coordinate::new(1, 1).in_bounds(9));
        assert!(Coordinate::new(9, 9).in_bounds(9));
        assert!(!Coordinate::new(10, 9).in_bounds(9));
        assert!(!Coordinate::new(5, 0).in_bounds(9));
    }

    #[test]
    fn test_direction_axis_and_sign() {
        assert_eq!(Direction::Up.axis(), Axis::Vertical);
        assert_eq!(Direction::Left.axis(), Axis::Horizontal);
        assert!(Direction::Up.is_positive());
        assert!(Direction::Right.is_positive());
        assert!(!Direction::Down.is_positive());
        assert!(!Direction::Left.is_positive());
    }

    #[test]
    fn test_opposite_round_trips() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            let c = Coordinate::new(4, 4);
            assert_eq!(c.translate(d).translate(d.opposite()), c);
        }
    }

    #[test]
    fn test_direction_serde() {
        let json = serde_json::to_string(&Direction::Up).unwrap();
        assert_eq!(json, "\"up\"");
        let back: Direction = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(back, Direction::Left);
    }
}
