//! Wall segments and their collision rules.
//!
//! A barrier sits on a grid line and is two cells long. It is addressed by
//! an anchor cell plus an orientation; the footprint is the anchor and the
//! cell next to it along the barrier:
//!
//! - vertical: `{anchor, (x, y + 1)}`, on the line right of column `x`
//! - horizontal: `{anchor, (x + 1, y)}`, on the line above row `y`
//!
//! A barrier blocks a step when it lies across the step's axis and its
//! footprint holds the step's boundary cell: the origin for `up`/`right`
//! steps, the target for `down`/`left` steps.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::geometry::{Axis, Coordinate, Direction};

/// Barrier orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Lies along `y`; blocks left/right steps.
    Vertical,
    /// Lies along `x`; blocks up/down steps.
    Horizontal,
}

impl Orientation {
    /// Map the wire flag (`vertical: bool`) to an orientation.
    #[must_use]
    pub const fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// True for vertical barriers.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    /// The movement axis this orientation obstructs.
    #[must_use]
    pub const fn blocked_axis(self) -> Axis {
        match self {
            Orientation::Vertical => Axis::Horizontal,
            Orientation::Horizontal => Axis::Vertical,
        }
    }
}

/// Where a barrier is placed: anchor cell plus orientation.
///
/// Two positions are equal iff anchor and orientation match.
///
/// On the wire the anchor is `position` and the orientation is the
/// `vertical` flag:
///
/// ```
/// use quoridor_engine::core::BarrierPosition;
///
/// let barrier = BarrierPosition::vertical(1, 1);
/// let json = serde_json::to_string(&barrier).unwrap();
/// assert_eq!(json, r#"{"position":{"x":1,"y":1},"vertical":true}"#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarrierPosition {
    /// First footprint cell.
    #[serde(rename = "position")]
    pub anchor: Coordinate,

    /// Orientation of the segment.
    #[serde(rename = "vertical", with = "vertical_flag")]
    pub orientation: Orientation,
}

impl BarrierPosition {
    /// Create a barrier position.
    #[must_use]
    pub const fn new(anchor: Coordinate, orientation: Orientation) -> Self {
        Self {
            anchor,
            orientation,
        }
    }

    /// Horizontal barrier anchored at `(x, y)`.
    #[must_use]
    pub const fn horizontal(x: i32, y: i32) -> Self {
        Self::new(Coordinate::new(x, y), Orientation::Horizontal)
    }

    /// Vertical barrier anchored at `(x, y)`.
    #[must_use]
    pub const fn vertical(x: i32, y: i32) -> Self {
        Self::new(Coordinate::new(x, y), Orientation::Vertical)
    }

    /// Second footprint cell.
    #[must_use]
    pub const fn end(&self) -> Coordinate {
        match self.orientation {
            Orientation::Vertical => self.anchor.up(),
            Orientation::Horizontal => self.anchor.right(),
        }
    }

    /// Both footprint cells, anchor first.
    #[must_use]
    pub const fn footprint(&self) -> [Coordinate; 2] {
        [self.anchor, self.end()]
    }

    /// Check whether `cell` is part of the footprint.
    #[must_use]
    pub fn covers(&self, cell: Coordinate) -> bool {
        self.anchor == cell || self.end() == cell
    }

    /// Check that the whole footprint lies on an `N x N` board.
    #[must_use]
    pub const fn in_bounds(&self, board_size: u16) -> bool {
        self.anchor.in_bounds(board_size) && self.end().in_bounds(board_size)
    }

    /// Check whether this barrier blocks the step `from -> to` in `direction`.
    ///
    /// ```
    /// use quoridor_engine::core::{BarrierPosition, Coordinate, Direction};
    ///
    /// let wall = BarrierPosition::horizontal(5, 1);
    /// let from = Coordinate::new(6, 1);
    /// assert!(wall.blocks_movement(from, from.up(), Direction::Up));
    /// assert!(!wall.blocks_movement(from, from.right(), Direction::Right));
    /// ```
    #[must_use]
    pub fn blocks_movement(&self, from: Coordinate, to: Coordinate, direction: Direction) -> bool {
        if self.orientation.blocked_axis() != direction.axis() {
            return false;
        }
        let boundary = if direction.is_positive() { from } else { to };
        self.covers(boundary)
    }

    /// Check whether `other` shares a footprint half with this barrier
    /// while lying along the same line.
    ///
    /// Identical positions also overlap.
    #[must_use]
    pub fn overlaps(&self, other: &BarrierPosition) -> bool {
        self.orientation == other.orientation
            && (self.covers(other.anchor) || self.covers(other.end()))
    }

    /// Check whether `other` crosses this barrier at its midpoint.
    ///
    /// A vertical and a horizontal barrier with the same anchor meet at the
    /// same grid vertex.
    #[must_use]
    pub fn crosses(&self, other: &BarrierPosition) -> bool {
        self.orientation != other.orientation && self.anchor == other.anchor
    }
}

impl std::fmt::Display for BarrierPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.anchor, self.end())
    }
}

mod vertical_flag {
    use super::*;

    pub fn serialize<S: Serializer>(orientation: &Orientation, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_bool(orientation.is_vertical())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Orientation, D::Error> {
        bool::deserialize(d).map(Orientation::from_vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint() {
        let v = BarrierPosition::vertical(3, 4);
        assert_eq!(v.footprint(), [Coordinate::new(3, 4), Coordinate::new(3, 5)]);

        let h = BarrierPosition::horizontal(3, 4);
        assert_eq!(h.footprint(), [Coordinate::new(3, 4), Coordinate::new(4, 4)]);
    }

    #[test]
    fn test_in_bounds() {
        assert!(BarrierPosition::horizontal(1, 1).in_bounds(9));
        assert!(BarrierPosition::horizontal(8, 9).in_bounds(9));
        assert!(!BarrierPosition::horizontal(9, 1).in_bounds(9));
        assert!(!BarrierPosition::horizontal(0, 1).in_bounds(9));
        assert!(!BarrierPosition::vertical(1, 9).in_bounds(9));
    }

    #[test]
    fn test_extreme_anchor_is_out_of_bounds_and_displays() {
        let wide = BarrierPosition::horizontal(i32::MAX, 1);
        let tall = BarrierPosition::vertical(1, i32::MAX);

        assert!(!wide.in_bounds(9));
        assert!(!tall.in_bounds(9));
        assert_eq!(wide.end(), wide.anchor);
        assert_eq!(
            wide.to_string(),
            format!("({}, 1) ({}, 1)", i32::MAX, i32::MAX)
        );
        assert!(!tall.to_string().is_empty());
    }

    #[test]
    fn test_horizontal_blocks_vertical_steps_across_either_half() {
        let wall = BarrierPosition::horizontal(5, 1);

        for x in [5, 6] {
            let below = Coordinate::new(x, 1);
            let above = below.up();
            assert!(wall.blocks_movement(below, above, Direction::Up));
            assert!(wall.blocks_movement(above, below, Direction::Down));
        }

        let beside = Coordinate::new(7, 1);
        assert!(!wall.blocks_movement(beside, beside.up(), Direction::Up));
    }

    #[test]
    fn test_horizontal_ignores_sideways_steps() {
        let wall = BarrierPosition::horizontal(5, 1);
        let from = Coordinate::new(5, 1);

        assert!(!wall.blocks_movement(from, from.left(), Direction::Left));
        assert!(!wall.blocks_movement(from, from.right(), Direction::Right));
    }

    #[test]
    fn test_vertical_blocks_horizontal_steps() {
        let wall = BarrierPosition::vertical(4, 4);

        for y in [4, 5] {
            let west = Coordinate::new(4, y);
            let east = west.right();
            assert!(wall.blocks_movement(west, east, Direction::Right));
            assert!(wall.blocks_movement(east, west, Direction::Left));
        }

        let from = Coordinate::new(4, 4);
        assert!(!wall.blocks_movement(from, from.up(), Direction::Up));
    }

    #[test]
    fn test_does_not_block_the_far_side() {
        // Wall sits above row 1: stepping from row 1 down is not across it.
        let wall = BarrierPosition::horizontal(5, 2);
        let from = Coordinate::new(5, 2);
        assert!(!wall.blocks_movement(from, from.down(), Direction::Down));
        assert!(wall.blocks_movement(from, from.up(), Direction::Up));
    }

    #[test]
    fn test_overlaps() {
        let wall = BarrierPosition::horizontal(5, 1);

        assert!(wall.overlaps(&BarrierPosition::horizontal(5, 1)));
        assert!(wall.overlaps(&BarrierPosition::horizontal(6, 1)));
        assert!(wall.overlaps(&BarrierPosition::horizontal(4, 1)));
        assert!(!wall.overlaps(&BarrierPosition::horizontal(7, 1)));
        assert!(!wall.overlaps(&BarrierPosition::horizontal(5, 2)));
        assert!(!wall.overlaps(&BarrierPosition::vertical(5, 1)));
    }

    #[test]
    fn test_crosses() {
        let wall = BarrierPosition::vertical(3, 3);

        assert!(wall.crosses(&BarrierPosition::horizontal(3, 3)));
        assert!(!wall.crosses(&BarrierPosition::horizontal(3, 4)));
        assert!(!wall.crosses(&BarrierPosition::vertical(3, 3)));
    }

    #[test]
    fn test_serde_shape() {
        let json = r#"{"position":{"x":2,"y":7},"vertical":false}"#;
        let barrier: BarrierPosition = serde_json::from_str(json).unwrap();

        assert_eq!(barrier, BarrierPosition::horizontal(2, 7));
        assert_eq!(serde_json::to_string(&barrier).unwrap(), json);
    }
}
